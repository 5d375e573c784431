use srs_convert::{convert_dir, SchemaVariant};
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn write(path: &Path, content: &str) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

#[test]
fn mirrors_directory_layout_under_source_name() {
    let temp = tempdir().unwrap();
    let input = temp.path().join("in");
    let output = temp.path().join("out");

    write(
        &input.join("geo/cn/direct.yaml"),
        "payload:\n  - DOMAIN-SUFFIX,cn\n",
    );
    write(
        &input.join("apps/telegram.rules.yml"),
        "payload:\n  - DOMAIN,telegram.org\n  - IP-CIDR,91.108.4.0/22\n",
    );

    let report = convert_dir(&input, &output, "clash-rules", SchemaVariant::V2);
    assert_eq!(report.discovered, 2);
    assert_eq!(report.converted.len(), 2);
    assert!(report.failed.is_empty());

    assert!(output.join("clash-rules/geo/cn/direct.json").exists());
    // Extension replaced, stem cut at the first dot.
    assert!(output.join("clash-rules/apps/telegram.json").exists());
}

#[test]
fn non_rule_documents_are_excluded_not_failed() {
    let temp = tempdir().unwrap();
    let input = temp.path().join("in");
    let output = temp.path().join("out");

    write(&input.join("rules.yaml"), "payload:\n  - DOMAIN,example.com\n");
    // A Clash config, not a rule provider: no payload key.
    write(&input.join("config.yaml"), "proxies: []\nrules: []\n");
    // Unparsable YAML is likewise excluded silently at the probe.
    write(&input.join("broken.yaml"), "payload: [unclosed\n");

    let report = convert_dir(&input, &output, "src", SchemaVariant::V2);
    assert_eq!(report.discovered, 3);
    assert_eq!(report.converted.len(), 1);
    assert!(report.failed.is_empty());

    let produced: Vec<_> = walkdir_files(&output);
    assert_eq!(produced.len(), 1);
}

#[test]
fn empty_payload_counts_as_failure_and_batch_continues() {
    let temp = tempdir().unwrap();
    let input = temp.path().join("in");
    let output = temp.path().join("out");

    write(&input.join("a-empty.yaml"), "payload: []\n");
    write(&input.join("b-good.yaml"), "payload:\n  - DOMAIN,example.com\n");
    write(&input.join("c-unsupported.yaml"), "payload:\n  - MATCH,DIRECT\n");

    let report = convert_dir(&input, &output, "src", SchemaVariant::V3);
    assert_eq!(report.converted.len(), 1);
    assert_eq!(report.failed.len(), 2);
    assert!(output.join("src/b-good.json").exists());
    assert!(!output.join("src/a-empty.json").exists());
    assert!(!output.join("src/c-unsupported.json").exists());
}

#[test]
fn unwritable_output_counts_as_failure_and_batch_continues() {
    let temp = tempdir().unwrap();
    let input = temp.path().join("in");
    let output = temp.path().join("out");

    write(&input.join("a.yaml"), "payload:\n  - DOMAIN,a.example\n");
    write(&input.join("b.yaml"), "payload:\n  - DOMAIN,b.example\n");
    // Occupy the mirror root with a regular file so directory creation
    // fails with an I/O error for every file.
    fs::create_dir_all(&output).unwrap();
    fs::write(output.join("src"), "not a directory").unwrap();

    let report = convert_dir(&input, &output, "src", SchemaVariant::V2);
    assert!(report.converted.is_empty());
    // Both files failed, so the batch kept going past the first error.
    assert_eq!(report.failed.len(), 2);
}

#[test]
fn non_yaml_files_are_never_discovered() {
    let temp = tempdir().unwrap();
    let input = temp.path().join("in");
    let output = temp.path().join("out");

    write(&input.join("README.md"), "# notes\n");
    write(&input.join("rules.txt"), "payload:\n  - DOMAIN,a.example\n");

    let report = convert_dir(&input, &output, "src", SchemaVariant::V2);
    assert_eq!(report.discovered, 0);
    assert!(report.converted.is_empty());
    assert!(report.failed.is_empty());
}

#[test]
fn missing_input_root_yields_an_empty_report() {
    let temp = tempdir().unwrap();
    let report = convert_dir(
        &temp.path().join("does-not-exist"),
        &temp.path().join("out"),
        "src",
        SchemaVariant::V2,
    );
    assert_eq!(report.discovered, 0);
    assert!(report.converted.is_empty() && report.failed.is_empty());
}

fn walkdir_files(root: &Path) -> Vec<std::path::PathBuf> {
    walkdir::WalkDir::new(root)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| e.into_path())
        .collect()
}
