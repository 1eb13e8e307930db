//! Case type and court jurisdiction taxonomy

use serde::{Deserialize, Serialize};

/// Case type values offered by the intake form, in display order
pub const FORM_CASE_TYPES: &[&str] = &[
    "property",
    "family",
    "business",
    "criminal",
    "financial",
    "medical",
    "other",
];

/// Category of legal matter.
///
/// Only the first four variants carry their own synthesis rules; every other
/// value is kept verbatim in [`CaseType::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CaseType {
    Property,
    Family,
    Business,
    Criminal,
    Other(String),
}

impl CaseType {
    /// Exact, case-sensitive match on the form value
    pub fn parse(value: &str) -> Self {
        match value {
            "property" => CaseType::Property,
            "family" => CaseType::Family,
            "business" => CaseType::Business,
            "criminal" => CaseType::Criminal,
            other => CaseType::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            CaseType::Property => "property",
            CaseType::Family => "family",
            CaseType::Business => "business",
            CaseType::Criminal => "criminal",
            CaseType::Other(s) => s,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            CaseType::Property => "Property/Land Dispute",
            CaseType::Family => "Family Matters",
            CaseType::Business => "Business/Contract Disputes",
            CaseType::Criminal => "Criminal Cases",
            CaseType::Other(s) => match s.as_str() {
                "financial" => "Financial Fraud & Disputes",
                "medical" => "Medical Negligence",
                _ => "Other",
            },
        }
    }

    /// Whether this case type has dedicated synthesis rules
    pub fn is_recognized(&self) -> bool {
        !matches!(self, CaseType::Other(_))
    }
}

impl From<String> for CaseType {
    fn from(value: String) -> Self {
        CaseType::parse(&value)
    }
}

impl From<CaseType> for String {
    fn from(value: CaseType) -> Self {
        value.as_str().to_string()
    }
}

impl std::fmt::Display for CaseType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Court the case is heard in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Jurisdiction {
    HighCourt,
    DistrictCourt,
    SupremeCourt,
    Tribunal,
}

impl Jurisdiction {
    pub const ALL: [Jurisdiction; 4] = [
        Jurisdiction::HighCourt,
        Jurisdiction::DistrictCourt,
        Jurisdiction::SupremeCourt,
        Jurisdiction::Tribunal,
    ];

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|j| j.as_str() == value)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Jurisdiction::HighCourt => "highCourt",
            Jurisdiction::DistrictCourt => "districtCourt",
            Jurisdiction::SupremeCourt => "supremeCourt",
            Jurisdiction::Tribunal => "tribunal",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Jurisdiction::HighCourt => "State High Court",
            Jurisdiction::DistrictCourt => "District Court",
            Jurisdiction::SupremeCourt => "Supreme Court",
            Jurisdiction::Tribunal => "Tribunals & Other Authorities",
        }
    }
}

impl std::fmt::Display for Jurisdiction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
