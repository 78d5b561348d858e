use std::fs;
use std::path::PathBuf;

use gaitview::error::GaitError;
use gaitview::trial::catalog::TrialCatalog;
use gaitview::trial::code::TrialCode;

fn unique_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!(
        "gaitview_catalog_{}_{}",
        name,
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ));
    fs::create_dir_all(&p).unwrap();
    p
}

#[test]
fn scan_lists_csv_stems_only() {
    let dir = unique_dir("stems");
    fs::write(dir.join("1-1.csv"), "header\n").unwrap();
    fs::write(dir.join("1-1.json"), "{}").unwrap();
    fs::write(dir.join("2-3.csv"), "header\n").unwrap();
    fs::write(dir.join("notes.txt"), "not a trial").unwrap();

    let catalog = TrialCatalog::scan(&dir).unwrap();
    assert_eq!(catalog.len(), 2);
    let codes: Vec<&str> = catalog.codes().collect();
    assert_eq!(codes, vec!["1-1", "2-3"]);
    assert!(catalog.contains(&TrialCode::new(1, 1)));
    assert!(catalog.contains(&TrialCode::new(2, 3)));
    assert!(!catalog.contains(&TrialCode::new(9, 9)));

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn require_rejects_unknown_code() {
    let dir = unique_dir("require");
    fs::write(dir.join("1-1.csv"), "header\n").unwrap();

    let catalog = TrialCatalog::scan(&dir).unwrap();
    catalog.require(&TrialCode::new(1, 1)).unwrap();
    let err = catalog.require(&TrialCode::new(4, 2)).unwrap_err();
    assert!(matches!(err, GaitError::TrialNotFound(ref code) if code == "4-2"));

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn missing_folder_is_fatal() {
    let mut dir = std::env::temp_dir();
    dir.push("gaitview_catalog_does_not_exist");
    let err = TrialCatalog::scan(&dir).unwrap_err();
    assert!(matches!(err, GaitError::MissingDataDir(_)));
}

#[test]
fn lookup_paths_use_the_code_as_stem() {
    let dir = unique_dir("paths");
    fs::write(dir.join("7-2.csv"), "header\n").unwrap();

    let catalog = TrialCatalog::scan(&dir).unwrap();
    let code = TrialCode::new(7, 2);
    assert_eq!(catalog.metadata_path(&code), dir.join("7-2.json"));
    assert_eq!(catalog.signal_path(&code), dir.join("7-2.csv"));

    let _ = fs::remove_dir_all(&dir);
}
