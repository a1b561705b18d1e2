//! Decoder integration tests.

use oxiprefix_core::CodecError;
use oxiprefix_trie::Decoder;

/// Decoder with the five-symbol binary code used throughout these tests.
fn sample_decoder() -> Decoder {
    let mut decoder = Decoder::new("01").expect("valid alphabet");
    decoder.add_code('b', "00").expect("add b");
    decoder.add_code('c', "011").expect("add c");
    decoder.add_code('a', "100").expect("add a");
    decoder.add_code('e', "101").expect("add e");
    decoder.add_code('d', "11").expect("add d");
    decoder
}

#[test]
fn test_prefix_free_decode() {
    let decoder = sample_decoder();
    assert_eq!(decoder.decode("10010100").expect("decode failed"), "aeb");
}

#[test]
fn test_no_code_is_prefix_of_another() {
    let decoder = sample_decoder();
    let codes = decoder.codes();
    for (i, (_, a)) in codes.iter().enumerate() {
        for (j, (_, b)) in codes.iter().enumerate() {
            if i != j {
                assert!(!b.starts_with(a.as_str()), "{a} is a prefix of {b}");
            }
        }
    }
}

#[test]
fn test_completeness() {
    let mut decoder = sample_decoder();
    assert!(!decoder.is_code_complete(), "missing 010 must be incomplete");

    decoder.add_code('\t', "010").expect("add tab");
    assert!(decoder.is_code_complete());
}

#[test]
fn test_invalid_alphabet_rejection() {
    let mut decoder = Decoder::new("01").expect("valid alphabet");
    let err = decoder.add_code('a', "031").unwrap_err();
    assert!(matches!(err, CodecError::InvalidCode { .. }));
}

#[test]
fn test_undecodable_input() {
    let mut decoder = Decoder::new("01").expect("valid alphabet");
    decoder.add_code('b', "00").expect("add b");
    decoder.add_code('d', "11").expect("add d");

    let err = decoder.decode("001").unwrap_err();
    assert!(matches!(err, CodecError::UndecodableMessage { .. }));
}

#[test]
fn test_undecodable_missing_branch() {
    let decoder = sample_decoder();
    // "01" then "0" has no child once '\t' is unassigned
    assert_eq!(decoder.decode("010"), Err(CodecError::undecodable(2)));
}

#[test]
fn test_overwrite() {
    let mut decoder = Decoder::new("01").expect("valid alphabet");
    decoder.add_code('b', "00").expect("add b");
    decoder.add_code('p', "00").expect("add p");
    assert_eq!(decoder.decode("00").expect("decode failed"), "p");
}

#[test]
fn test_empty_decode() {
    let decoder = sample_decoder();
    assert_eq!(decoder.decode("").expect("empty decode failed"), "");

    let empty = Decoder::new("01").expect("valid alphabet");
    assert_eq!(empty.decode("").expect("empty decode failed"), "");
}

#[test]
fn test_all_codes_listing() {
    let mut decoder = sample_decoder();
    decoder.add_code('\t', "010").expect("add tab");
    assert_eq!(
        decoder.all_codes(),
        "b:00\n\t:010\nc:011\na:100\ne:101\nd:11"
    );
}

#[test]
fn test_hexadecimal_alphabet() {
    let mut decoder = Decoder::new("0123456789abcdef").expect("valid alphabet");
    decoder.add_code('x', "a").expect("add x");
    decoder.add_code('y', "b0").expect("add y");
    decoder.add_code('z', "bf").expect("add z");

    assert_eq!(decoder.decode("ab0bfa").expect("decode failed"), "xyzx");
    assert!(!decoder.is_code_complete());
    assert!(matches!(
        decoder.decode("aG"),
        Err(CodecError::InvalidCode { .. })
    ));
}

#[test]
fn test_decode_is_repeatable() {
    let decoder = sample_decoder();
    let first = decoder.decode("1100011").expect("decode failed");
    let second = decoder.decode("1100011").expect("decode failed");
    assert_eq!(first, "dbc");
    assert_eq!(first, second);
    assert_eq!(decoder.len(), 5);
}
