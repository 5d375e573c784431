//! Per-file translation from Clash rule-provider YAML to sing-box
//! rule-set JSON.

use crate::classify::classify;
use crate::error::{ConvertError, Result};
use crate::model::{ClashRuleDoc, RuleGroups, SchemaVariant};
use crate::outbound::OutboundHint;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Group one payload's `TYPE,VALUE[,...]` lines by category.
///
/// Lines with fewer than two comma-separated fields are malformed and
/// skipped; fields beyond the second (e.g. `no-resolve`) are ignored.
fn collect_rules(payload: &[String]) -> RuleGroups {
    let mut groups = RuleGroups::default();
    for line in payload {
        let mut fields = line.split(',').map(str::trim);
        let (Some(kind), Some(value)) = (fields.next(), fields.next()) else {
            continue;
        };
        let Some(category) = classify(kind) else {
            debug!(rule_type = kind, "dropping unsupported rule type");
            continue;
        };
        groups.insert(category, value.to_string());
    }
    groups
}

/// Translate a single rule-provider file into a rule-set document at
/// `output`, creating parent directories as needed.
///
/// Fails without writing anything when the source does not parse, has
/// no payload, or yields zero convertible rules. The outbound hint is
/// logged for the operator and never serialized.
pub fn convert_file(
    input: &Path,
    output: &Path,
    variant: SchemaVariant,
    outbound: OutboundHint,
) -> Result<()> {
    let text = fs::read_to_string(input).map_err(|e| ConvertError::Io {
        path: input.to_path_buf(),
        source: e,
    })?;
    let doc: ClashRuleDoc = serde_yaml::from_str(&text).map_err(|e| ConvertError::Parse {
        path: input.to_path_buf(),
        source: e,
    })?;

    let payload = doc.payload().unwrap_or_default();
    if payload.is_empty() {
        return Err(ConvertError::EmptyRules {
            path: input.to_path_buf(),
        });
    }

    let groups = collect_rules(payload);
    if groups.is_empty() {
        return Err(ConvertError::EmptyRules {
            path: input.to_path_buf(),
        });
    }

    debug!(
        input = %input.display(),
        outbound = %outbound,
        "translating rule-provider file"
    );

    let ruleset = groups.into_document(variant);
    if let Some(parent) = output.parent() {
        fs::create_dir_all(parent).map_err(|e| ConvertError::Io {
            path: parent.to_path_buf(),
            source: e,
        })?;
    }
    // to_string_pretty: 2-space indent, non-ASCII kept literal.
    let json = serde_json::to_string_pretty(&ruleset).map_err(|e| ConvertError::Serialize {
        path: output.to_path_buf(),
        source: e,
    })?;
    fs::write(output, json + "\n").map_err(|e| ConvertError::Io {
        path: output.to_path_buf(),
        source: e,
    })?;
    Ok(())
}
