use super::*;
use serde_json::json;

fn size(width: u32, height: u32) -> TargetSize {
    TargetSize { width, height }
}

#[test]
fn kind_comes_from_extension() {
    assert_eq!(SourceKind::from_path(Path::new("a/b.gif")), SourceKind::Animated);
    assert_eq!(SourceKind::from_path(Path::new("a/b.GIF")), SourceKind::Animated);
    assert_eq!(SourceKind::from_path(Path::new("a/b.png")), SourceKind::Static);
    assert_eq!(SourceKind::from_path(Path::new("a/gif")), SourceKind::Static);
    assert!(SourceItem::new("x.gif", "c", "x").is_animated());
}

#[test]
fn output_path_layout() {
    let cfg = ConversionConfig::new("/out");
    let png = SourceItem::new("/in/Arcade/Pac-Man.png", "Arcade", "Pac-Man");
    let job = ConversionJob::new(&png, size(128, 32), &cfg).unwrap();
    assert_eq!(job.kind, JobKind::Static);
    assert_eq!(
        job.output_path,
        PathBuf::from("/out/128x32/Arcade/Pac-Man.png")
    );

    let gif = SourceItem::new("/in/Arcade/Galaga.gif", "Arcade", "Galaga");
    let job = ConversionJob::new(&gif, size(256, 64), &cfg).unwrap();
    assert_eq!(job.kind, JobKind::Animation);
    assert_eq!(job.output_path, PathBuf::from("/out/256x64/Arcade/Galaga.gif"));
}

#[test]
fn output_path_is_stable_across_calls() {
    let cfg = ConversionConfig::new("root");
    let item = SourceItem::new("src/a.jpg", "Cat", "Item Name");
    let a = ConversionJob::new(&item, size(64, 16), &cfg).unwrap();
    let b = ConversionJob::new(&item, size(64, 16), &cfg).unwrap();
    assert_eq!(a.output_path, b.output_path);
}

#[test]
fn unsafe_names_are_rejected() {
    let cfg = ConversionConfig::new("root");
    for (cat, name) in [
        ("Arcade", "Street Fighter II: Turbo"),
        ("../etc", "x"),
        ("Arcade", ".."),
        ("", "x"),
        ("Arcade", "a/b"),
        ("Arc\\ade", "x"),
    ] {
        let item = SourceItem::new("s.png", cat, name);
        let err = ConversionJob::new(&item, size(8, 8), &cfg).unwrap_err();
        assert!(matches!(err, DmdError::Validation(_)), "{cat:?}/{name:?}");
    }
}

#[test]
fn manifest_entries_deserialize_with_derived_kind() {
    let items: Vec<SourceItem> = serde_json::from_value(json!([
        { "path": "orig/Arcade/a.png", "category": "Arcade", "itemName": "a" },
        { "path": "orig/Arcade/b.gif", "category": "Arcade", "itemName": "b" }
    ]))
    .unwrap();
    assert_eq!(items[0].kind, SourceKind::Static);
    assert_eq!(items[1].kind, SourceKind::Animated);
    assert_eq!(items[1].item_name, "b");
}

#[test]
fn job_kinds_dispatch_to_matching_transformer() {
    assert_eq!(JobKind::Static.transformer().extension(), "png");
    assert_eq!(JobKind::Animation.transformer().extension(), "gif");
    assert_eq!(JobKind::Animation.transformer().name(), "animation");
}
