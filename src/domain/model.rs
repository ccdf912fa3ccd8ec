use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// How strictly a restriction applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Yes,
    SmallAmounts,
    Airborne,
}

impl Severity {
    /// Human-readable label used by the text rendering.
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Yes => "yes",
            Severity::SmallAmounts => "small amounts",
            Severity::Airborne => "AIRBORNE",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Restriction {
    pub item: String,
    pub severity: Severity,
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Member {
    pub name: String,
    pub restrictions: Vec<Restriction>,
}

impl Member {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            restrictions: Vec::new(),
        }
    }
}

/// Parsed collection of members and their restrictions, derived once per
/// sync run and persisted as JSON. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Roster {
    pub members: Vec<Member>,
    /// Distinct restriction item labels in first-seen row order.
    pub restrictions_list: Vec<String>,
    pub synced_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AirborneEntry {
    pub name: String,
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OtherEntry {
    pub name: String,
    pub severity: Severity,
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AirborneGroup {
    pub item: String,
    pub entries: Vec<AirborneEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OtherGroup {
    pub item: String,
    pub entries: Vec<OtherEntry>,
}

/// Per-selection aggregation of restrictions, regenerated on every
/// selection change and never persisted. Groups are insertion-ordered so
/// the text rendering stays byte-deterministic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub meal_name: String,
    /// Matched member names in roster order.
    pub attendees: Vec<String>,
    pub airborne: Vec<AirborneGroup>,
    pub other: Vec<OtherGroup>,
    pub by_person: Vec<Member>,
}
