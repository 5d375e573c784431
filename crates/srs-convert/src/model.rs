//! Source and destination document models.

use crate::classify::RuleCategory;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Clash rule-provider document. Only the `payload` list matters; every
/// other key is ignored.
#[derive(Debug, Deserialize)]
pub struct ClashRuleDoc {
    #[serde(default)]
    payload: Option<Vec<String>>,
}

impl ClashRuleDoc {
    /// Typed accessor for the rule list: `Some` only when the document
    /// carries a `payload` sequence. Documents without one are not rule
    /// documents.
    pub fn payload(&self) -> Option<&[String]> {
        self.payload.as_deref()
    }
}

/// Output schema selector. Both upstream rule-set source layouts are
/// produced by the same grouping core; this enum is the only switch
/// between them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SchemaVariant {
    /// `version: 2` — one headless rule object keyed by category, with
    /// process names in a separate object.
    #[default]
    V2,
    /// `version: 3` — one `{type, payload}` object per category.
    V3,
}

impl SchemaVariant {
    pub fn version(self) -> u8 {
        match self {
            SchemaVariant::V2 => 2,
            SchemaVariant::V3 => 3,
        }
    }

    pub fn from_version(version: u8) -> Option<Self> {
        match version {
            2 => Some(SchemaVariant::V2),
            3 => Some(SchemaVariant::V3),
            _ => None,
        }
    }
}

/// Per-category value accumulators. `BTreeSet` both deduplicates and
/// fixes the serialization order, so converting the same input twice
/// yields byte-identical output.
#[derive(Debug, Default)]
pub struct RuleGroups {
    pub domain: BTreeSet<String>,
    pub domain_keyword: BTreeSet<String>,
    pub domain_suffix: BTreeSet<String>,
    pub ip_cidr: BTreeSet<String>,
    pub process_name: BTreeSet<String>,
}

impl RuleGroups {
    pub fn insert(&mut self, category: RuleCategory, value: String) {
        let set = match category {
            RuleCategory::Domain => &mut self.domain,
            RuleCategory::DomainKeyword => &mut self.domain_keyword,
            RuleCategory::DomainSuffix => &mut self.domain_suffix,
            RuleCategory::IpCidr => &mut self.ip_cidr,
            RuleCategory::ProcessName => &mut self.process_name,
        };
        set.insert(value);
    }

    pub fn is_empty(&self) -> bool {
        self.domain.is_empty()
            && self.domain_keyword.is_empty()
            && self.domain_suffix.is_empty()
            && self.ip_cidr.is_empty()
            && self.process_name.is_empty()
    }

    /// Build the destination document for the chosen schema variant.
    /// Empty categories are omitted entirely in both layouts.
    pub fn into_document(self, variant: SchemaVariant) -> RuleSetDoc {
        let version = variant.version();
        let mut rules = Vec::new();
        match variant {
            SchemaVariant::V2 => {
                let main = HeadlessRule {
                    domain: self.domain,
                    domain_keyword: self.domain_keyword,
                    domain_suffix: self.domain_suffix,
                    ip_cidr: self.ip_cidr,
                    process_name: BTreeSet::new(),
                };
                if !main.is_empty() {
                    rules.push(RuleEntry::Headless(main));
                }
                if !self.process_name.is_empty() {
                    rules.push(RuleEntry::Headless(HeadlessRule {
                        process_name: self.process_name,
                        ..Default::default()
                    }));
                }
            }
            SchemaVariant::V3 => {
                let groups = [
                    (RuleCategory::Domain, self.domain),
                    (RuleCategory::DomainKeyword, self.domain_keyword),
                    (RuleCategory::DomainSuffix, self.domain_suffix),
                    (RuleCategory::IpCidr, self.ip_cidr),
                    (RuleCategory::ProcessName, self.process_name),
                ];
                for (category, payload) in groups {
                    if !payload.is_empty() {
                        rules.push(RuleEntry::Typed(TypedRule {
                            kind: category.field_name(),
                            payload,
                        }));
                    }
                }
            }
        }
        RuleSetDoc { version, rules }
    }
}

/// sing-box rule-set source document.
#[derive(Debug, Serialize)]
pub struct RuleSetDoc {
    pub version: u8,
    pub rules: Vec<RuleEntry>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum RuleEntry {
    Headless(HeadlessRule),
    Typed(TypedRule),
}

/// Version-2 layout: category name as field, values as array.
#[derive(Debug, Default, Serialize)]
pub struct HeadlessRule {
    #[serde(skip_serializing_if = "BTreeSet::is_empty")]
    pub domain: BTreeSet<String>,
    #[serde(skip_serializing_if = "BTreeSet::is_empty")]
    pub domain_keyword: BTreeSet<String>,
    #[serde(skip_serializing_if = "BTreeSet::is_empty")]
    pub domain_suffix: BTreeSet<String>,
    #[serde(skip_serializing_if = "BTreeSet::is_empty")]
    pub ip_cidr: BTreeSet<String>,
    #[serde(skip_serializing_if = "BTreeSet::is_empty")]
    pub process_name: BTreeSet<String>,
}

impl HeadlessRule {
    pub fn is_empty(&self) -> bool {
        self.domain.is_empty()
            && self.domain_keyword.is_empty()
            && self.domain_suffix.is_empty()
            && self.ip_cidr.is_empty()
            && self.process_name.is_empty()
    }
}

/// Version-3 layout: explicit `{type, payload}` entry per category.
#[derive(Debug, Serialize)]
pub struct TypedRule {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub payload: BTreeSet<String>,
}
