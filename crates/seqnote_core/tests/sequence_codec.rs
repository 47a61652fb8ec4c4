use seqnote_core::{decode_letters, encode_letters, increment_letters, SequenceError};

#[test]
fn encode_then_decode_is_identity() {
    for value in 1..=2_000u64 {
        let encoded = encode_letters(value).unwrap();
        assert_eq!(decode_letters(&encoded).unwrap(), value, "value {value}");
    }
}

#[test]
fn canonical_runs_survive_decode_then_encode() {
    for zs in 0..4 {
        for last in 'a'..='z' {
            let run = format!("{}{last}", "z".repeat(zs));
            let value = decode_letters(&run).unwrap();
            assert_eq!(encode_letters(value).unwrap(), run);
        }
    }
}

#[test]
fn literal_encodings() {
    let cases = [
        (3, "c"),
        (18, "r"),
        (26, "z"),
        (27, "za"),
        (130, "zzzzz"),
        (131, "zzzzza"),
    ];
    for (value, expected) in cases {
        assert_eq!(encode_letters(value).unwrap(), expected);
    }
}

#[test]
fn decode_rejects_runs_with_non_z_prefix() {
    assert_eq!(
        decode_letters("ab").unwrap_err(),
        SequenceError::InvalidComponent("ab".to_string())
    );
    assert!(decode_letters("zaz").is_err());
}

#[test]
fn increment_grows_only_after_z() {
    for run in ["z", "zz", "az", "bbz"] {
        let next = increment_letters(run);
        assert_eq!(next.len(), run.len() + 1);
        assert!(next.ends_with('a'));
        assert!(next.starts_with(run));
    }
    for run in ["a", "y", "zb", "ab"] {
        assert_eq!(increment_letters(run).len(), run.len());
    }
}

#[test]
fn increment_agrees_with_codec_on_canonical_runs() {
    for value in 1..=200u64 {
        let current = encode_letters(value).unwrap();
        let next = encode_letters(value + 1).unwrap();
        assert_eq!(increment_letters(&current), next, "after {current}");
    }
}
