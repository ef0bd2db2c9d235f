//! End-to-end reporting scenarios over a scratch directory

use edgeport_cli::report::ExportReport;
use edgeport_core::{ASSET_DESTINATION, CANDIDATE_PATHS};
use std::fs;
use std::path::{Path, PathBuf};

fn touch(root: &Path, candidate: &str, len: usize) {
    let full = root.join(candidate);
    if let Some(parent) = full.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(full, vec![0u8; len]).unwrap();
}

#[test]
fn all_candidates_present_recommends_full_precision() {
    let dir = tempfile::tempdir().unwrap();
    for candidate in CANDIDATE_PATHS {
        touch(dir.path(), candidate, 64);
    }

    let report = ExportReport::scan(dir.path());
    assert_eq!(report.found.len(), 3);
    assert_eq!(
        report.selected.as_ref().unwrap().path,
        PathBuf::from("yolov8n_export/yolov8n_float32.gguf")
    );
}

#[test]
fn without_full_precision_the_first_declared_wins() {
    let dir = tempfile::tempdir().unwrap();
    touch(dir.path(), "yolov8n.gguf", 64);
    touch(dir.path(), "yolov8n_export/yolov8n_float16.gguf", 64);

    let report = ExportReport::scan(dir.path());
    assert_eq!(report.found.len(), 2);
    assert_eq!(
        report.selected.as_ref().unwrap().path,
        PathBuf::from("yolov8n.gguf")
    );
}

#[test]
fn empty_scan_prints_the_not_found_message() {
    let dir = tempfile::tempdir().unwrap();

    let report = ExportReport::scan(dir.path());
    assert!(report.found.is_empty());
    assert!(report.selected.is_none());

    let rendered = report.to_string();
    assert!(rendered.contains("No export artifact found"));
    assert!(!rendered.contains("Recommended artifact"));
}

#[test]
fn report_lists_sizes_in_megabytes() {
    let dir = tempfile::tempdir().unwrap();
    touch(dir.path(), "yolov8n.gguf", 2 * 1024 * 1024);

    let rendered = ExportReport::scan(dir.path()).to_string();
    assert!(rendered.contains("✓ Found: yolov8n.gguf (2.00 MB)"));
}

#[test]
fn report_spells_out_the_copy_instruction() {
    let dir = tempfile::tempdir().unwrap();
    touch(dir.path(), "yolov8n_export/yolov8n_float32.gguf", 64);

    let rendered = ExportReport::scan(dir.path()).to_string();
    assert!(rendered.contains("Recommended artifact: yolov8n_export/yolov8n_float32.gguf"));
    assert!(rendered.contains(ASSET_DESTINATION));
    assert!(rendered.contains(&format!(
        "cp yolov8n_export/yolov8n_float32.gguf {}",
        ASSET_DESTINATION
    )));
}
