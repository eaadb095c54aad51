use super::*;

fn size(width: u32, height: u32) -> TargetSize {
    TargetSize { width, height }
}

#[test]
fn parses_valid_list_in_order() {
    assert_eq!(
        parse_target_sizes("128x32, 256x64,192x64"),
        vec![size(128, 32), size(256, 64), size(192, 64)]
    );
}

#[test]
fn malformed_tokens_are_dropped_not_fatal() {
    assert_eq!(
        parse_target_sizes("128x32,bogus,64,x,12x-3,,256x64"),
        vec![size(128, 32), size(256, 64)]
    );
    assert!(parse_target_sizes("").is_empty());
    assert!(parse_target_sizes("nothing here").is_empty());
}

#[test]
fn duplicates_are_preserved() {
    assert_eq!(
        parse_target_sizes("128x32,128x32"),
        vec![size(128, 32), size(128, 32)]
    );
}

#[test]
fn list_form_flattens_nested_comma_lists() {
    let entries = ["128x32", "256x64,bad", "64x16"];
    assert_eq!(
        resolve_target_sizes(&entries),
        vec![size(128, 32), size(256, 64), size(64, 16)]
    );
}
