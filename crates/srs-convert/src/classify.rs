//! Clash rule-type classification.

/// Destination category for one Clash rule line, named after the
/// sing-box rule-set field it feeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RuleCategory {
    Domain,
    DomainKeyword,
    DomainSuffix,
    IpCidr,
    ProcessName,
}

impl RuleCategory {
    /// Categories in rule-set field order.
    pub const ALL: [RuleCategory; 5] = [
        RuleCategory::Domain,
        RuleCategory::DomainKeyword,
        RuleCategory::DomainSuffix,
        RuleCategory::IpCidr,
        RuleCategory::ProcessName,
    ];

    /// sing-box rule-set field name for this category.
    pub fn field_name(self) -> &'static str {
        match self {
            RuleCategory::Domain => "domain",
            RuleCategory::DomainKeyword => "domain_keyword",
            RuleCategory::DomainSuffix => "domain_suffix",
            RuleCategory::IpCidr => "ip_cidr",
            RuleCategory::ProcessName => "process_name",
        }
    }
}

/// Map a Clash rule-type token to its sing-box category.
///
/// Both CIDR spellings collapse into one category. Unknown tokens
/// return `None`: the conversion is deliberately lossy and drops rule
/// types the destination format cannot express.
pub fn classify(token: &str) -> Option<RuleCategory> {
    match token.trim().to_ascii_uppercase().as_str() {
        "DOMAIN" => Some(RuleCategory::Domain),
        "DOMAIN-KEYWORD" => Some(RuleCategory::DomainKeyword),
        "DOMAIN-SUFFIX" => Some(RuleCategory::DomainSuffix),
        "IP-CIDR" | "IP-CIDR6" => Some(RuleCategory::IpCidr),
        "PROCESS-NAME" => Some(RuleCategory::ProcessName),
        _ => None,
    }
}
