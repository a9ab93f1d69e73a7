use super::*;

#[test]
fn normalize_rel_path_rules() {
    assert_eq!(normalize_rel_path("a/b.svg").unwrap(), "a/b.svg");
    assert_eq!(normalize_rel_path("./a//b.svg").unwrap(), "a/b.svg");
    assert_eq!(normalize_rel_path("a\\b.svg").unwrap(), "a/b.svg");
    assert!(normalize_rel_path("/abs.svg").is_err());
    assert!(normalize_rel_path("../up.svg").is_err());
    assert!(normalize_rel_path("").is_err());
    assert!(normalize_rel_path("./").is_err());
}

#[test]
fn resolve_known_and_missing() {
    let table = AssetTable::from_paths(["fonts/Astronomicon.ttf", "./icons/x.svg"]).unwrap();
    assert_eq!(table.len(), 2);
    assert!(table.contains("icons/x.svg"));
    assert_eq!(
        table.resolve("fonts//Astronomicon.ttf").unwrap().path(),
        "fonts/Astronomicon.ttf"
    );

    let err = table.resolve("icons/missing.svg").unwrap_err();
    assert!(matches!(err, FramecastError::Asset(_)));
    assert!(err.to_string().contains("icons/missing.svg"));

    let err = table.resolve("../etc/passwd").unwrap_err();
    assert!(matches!(err, FramecastError::Asset(_)));
}

#[test]
fn from_paths_rejects_bad_entries() {
    assert!(AssetTable::from_paths(["/abs"]).is_err());
}

#[test]
fn scan_dir_collects_nested_files() {
    let root = std::env::temp_dir().join(format!("framecast-assets-{}", std::process::id()));
    let nested = root.join("icons").join("moon-phases");
    std::fs::create_dir_all(&nested).unwrap();
    std::fs::write(nested.join("full-moon.svg"), b"<svg/>").unwrap();
    std::fs::write(root.join("top.txt"), b"x").unwrap();

    let table = AssetTable::scan_dir(&root).unwrap();
    assert!(table.contains("icons/moon-phases/full-moon.svg"));
    assert!(table.contains("top.txt"));
    let asset = table.resolve("top.txt").unwrap();
    assert_eq!(table.locate(&asset), Some(root.join("top.txt")));

    std::fs::remove_dir_all(&root).unwrap();
}

#[test]
fn scan_missing_dir_is_asset_error() {
    let err = AssetTable::scan_dir("/definitely/not/here/framecast").unwrap_err();
    assert!(matches!(err, FramecastError::Asset(_)));
}
