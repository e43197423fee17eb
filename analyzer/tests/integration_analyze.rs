use analyzer::{analyze, build_report, collect_inputs, render, OutputFormat};
use booklex_core::Normalizer;
use serde_json::Value;
use std::fs;
use tempfile::tempdir;

fn build_tiny_corpus(dir: &std::path::Path) {
    fs::create_dir_all(dir.join("part2")).unwrap();
    fs::write(dir.join("a.txt"), "The owl and the Eel.\n").unwrap();
    fs::write(dir.join("part2/b.txt"), "An owl, an otter; a bee!\n").unwrap();
    fs::write(dir.join("notes.md"), "ignored owl owl owl\n").unwrap();
}

#[test]
fn directory_input_collects_sorted_txt_files() {
    let dir = tempdir().unwrap();
    build_tiny_corpus(dir.path());
    let files = collect_inputs(dir.path()).unwrap();
    assert_eq!(files.len(), 2);
    assert!(files[0].ends_with("a.txt"));
    assert!(files[1].ends_with("part2/b.txt"));
}

#[test]
fn missing_input_is_rejected() {
    let dir = tempdir().unwrap();
    assert!(collect_inputs(&dir.path().join("absent.txt")).is_err());
}

#[cfg(unix)]
#[test]
fn walk_errors_abort_collection() {
    let dir = tempdir().unwrap();
    build_tiny_corpus(dir.path());
    // a link back to the root makes the walk report a filesystem loop
    std::os::unix::fs::symlink(dir.path(), dir.path().join("part2/loop")).unwrap();
    let err = collect_inputs(dir.path()).unwrap_err();
    assert!(format!("{err:#}").contains("failed to walk"));
}

#[test]
fn report_carries_rfc3339_timestamp() {
    let dir = tempdir().unwrap();
    build_tiny_corpus(dir.path());
    let files = collect_inputs(&dir.path().join("a.txt")).unwrap();
    let (index, lines) = analyze(&files, &Normalizer::new()).unwrap();
    let report = build_report(&files, &index, lines, &[], false).unwrap();
    assert!(time::OffsetDateTime::parse(&report.generated_at, &time::format_description::well_known::Rfc3339).is_ok());
}

#[test]
fn text_report_lists_statistics_and_words() {
    let dir = tempdir().unwrap();
    build_tiny_corpus(dir.path());
    let files = collect_inputs(dir.path()).unwrap();
    let (index, lines) = analyze(&files, &Normalizer::new()).unwrap();
    assert_eq!(lines, 2);

    let prefixes = vec!["o".to_string(), "e".to_string()];
    let report = build_report(&files, &index, lines, &prefixes, true).unwrap();
    let text = render(&report, OutputFormat::Text).unwrap();
    assert!(text.contains("Unique Word Count: 4\n"));
    assert!(text.contains("Total Word Count: 5\n"));
    assert!(text.contains("Max Word Count: 2\n"));
    assert!(text.contains("Sum of Words with Prefix 'o' and 'e': 4\n"));
    assert!(text.ends_with("Words in Inorder Traversal:\nbee\neel\notter\nowl\n"));
}

#[test]
fn json_report_omits_words_unless_requested() {
    let dir = tempdir().unwrap();
    build_tiny_corpus(dir.path());
    let files = collect_inputs(&dir.path().join("a.txt")).unwrap();
    let (index, lines) = analyze(&files, &Normalizer::new()).unwrap();

    let report = build_report(&files, &index, lines, &["o".to_string()], false).unwrap();
    let json: Value = serde_json::from_str(&render(&report, OutputFormat::Json).unwrap()).unwrap();
    assert_eq!(json["statistics"]["total_words"], 2);
    assert_eq!(json["statistics"]["prefix_sum"], 1);
    assert_eq!(json["sources"].as_array().unwrap().len(), 1);
    assert!(json.get("words").is_none());
}
