use super::*;

#[test]
fn target_size_parses_and_displays() {
    let s: TargetSize = "128x32".parse().unwrap();
    assert_eq!(
        s,
        TargetSize {
            width: 128,
            height: 32
        }
    );
    assert_eq!(s.to_string(), "128x32");
    assert_eq!(s.dir_name(), "128x32");

    let padded: TargetSize = " 256 x 64 ".parse().unwrap();
    assert_eq!(padded, TargetSize::new(256, 64).unwrap());
}

#[test]
fn target_size_rejects_malformed_tokens() {
    for bad in ["", "128", "128x", "x32", "128x32x2", "-1x32", "abcx32", "128X32", "0x32"] {
        assert!(bad.parse::<TargetSize>().is_err(), "{bad:?} should fail");
    }
}

#[test]
fn scale_mode_parses_case_insensitively() {
    assert_eq!("fit".parse::<ScaleMode>().unwrap(), ScaleMode::Fit);
    assert_eq!("FILL".parse::<ScaleMode>().unwrap(), ScaleMode::Fill);
    assert!("stretch".parse::<ScaleMode>().is_err());
    assert_eq!(ScaleMode::default(), ScaleMode::Fit);
}
