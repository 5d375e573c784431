//! Recursive discovery and batch conversion of rule-provider trees.

use crate::model::{ClashRuleDoc, SchemaVariant};
use crate::outbound::classify_outbound;
use crate::translate::convert_file;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use walkdir::WalkDir;

/// Per-file outcomes of one batch run. Returned instead of printed so
/// callers and tests can inspect results without scraping console text.
#[derive(Debug, Default)]
pub struct ConvertReport {
    /// Candidate YAML files found under the input root, before probing.
    pub discovered: usize,
    /// Input paths converted successfully.
    pub converted: Vec<PathBuf>,
    /// Input paths that probed as rule files but failed to convert.
    pub failed: Vec<PathBuf>,
}

/// Convert every rule-provider file under `input_root`, mirroring the
/// relative layout under `output_root/source_name/`.
///
/// Candidates that do not probe as rule documents are excluded silently
/// and never counted. Per-file failures are logged and collected; the
/// batch always runs to completion.
pub fn convert_dir(
    input_root: &Path,
    output_root: &Path,
    source_name: &str,
    variant: SchemaVariant,
) -> ConvertReport {
    let candidates = discover_rule_files(input_root);
    info!(
        count = candidates.len(),
        input = %input_root.display(),
        "found candidate YAML files"
    );

    let mut report = ConvertReport {
        discovered: candidates.len(),
        ..Default::default()
    };

    for input in candidates {
        if !is_rule_document(&input) {
            debug!(file = %input.display(), "no payload key, skipping");
            continue;
        }

        let relative = input.strip_prefix(input_root).unwrap_or(&input);
        let category = relative
            .parent()
            .map(|p| p.to_string_lossy().replace('\\', "/"))
            .unwrap_or_default();
        let stem = output_stem(&input);
        let output = output_root
            .join(source_name)
            .join(relative.parent().unwrap_or_else(|| Path::new("")))
            .join(format!("{stem}.json"));

        let outbound = classify_outbound(&category, &stem);

        match convert_file(&input, &output, variant, outbound) {
            Ok(()) => {
                info!(
                    input = %input.display(),
                    output = %output.display(),
                    outbound = %outbound,
                    "converted rule file"
                );
                report.converted.push(input);
            }
            Err(err) => {
                warn!(input = %input.display(), error = %err, "conversion failed");
                report.failed.push(input);
            }
        }
    }

    info!(
        succeeded = report.converted.len(),
        failed = report.failed.len(),
        "conversion complete"
    );
    report
}

/// Recursively enumerate `.yaml`/`.yml` files, sorted for stable
/// processing order. Unreadable entries are skipped.
fn discover_rule_files(root: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(root)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file() && has_rule_extension(entry.path()))
        .map(|entry| entry.into_path())
        .collect();
    files.sort();
    files
}

fn has_rule_extension(path: &Path) -> bool {
    matches!(
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
            .as_deref(),
        Some("yaml" | "yml")
    )
}

/// Structural probe: a candidate is a rule document only when it parses
/// as YAML and carries a `payload` key.
fn is_rule_document(path: &Path) -> bool {
    let Ok(text) = fs::read_to_string(path) else {
        return false;
    };
    matches!(
        serde_yaml::from_str::<ClashRuleDoc>(&text),
        Ok(doc) if doc.payload().is_some()
    )
}

/// Output file stem: the filename up to the first dot, so
/// `telegram.rules.yaml` becomes `telegram.json`.
fn output_stem(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy())
        .unwrap_or_default()
        .split('.')
        .next()
        .unwrap_or_default()
        .to_string()
}
