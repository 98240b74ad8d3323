use crate::error::LeadboardError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use uuid::Uuid;

/// Stable identifier for a lead (e.g., "1", "lead-7f3a...")
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LeadId(String);

impl LeadId {
    /// Wraps an existing identifier as-is. `LeadStore` rejects empty ids.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generates a fresh random identifier
    pub fn generate() -> Self {
        Self(format!("lead-{}", Uuid::new_v4().simple()))
    }

    /// Returns the string representation
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromStr for LeadId {
    type Err = LeadboardError;

    /// Ids are kept verbatim; only the empty string is rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(LeadboardError::InvalidLeadId(s.to_string()));
        }
        Ok(Self(s.to_string()))
    }
}

impl TryFrom<String> for LeadId {
    type Error = LeadboardError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<LeadId> for String {
    fn from(id: LeadId) -> Self {
        id.0
    }
}

impl fmt::Display for LeadId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Pipeline stage of a lead. Declaration order is board column order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeadStatus {
    New,
    Contacted,
    Hot,
    Scheduled,
    Closed,
    Lost,
}

impl LeadStatus {
    /// Every status, in column order
    pub const ALL: [LeadStatus; 6] = [
        Self::New,
        Self::Contacted,
        Self::Hot,
        Self::Scheduled,
        Self::Closed,
        Self::Lost,
    ];

    /// Lowercase key used in serialized data and column ids
    pub fn as_key(&self) -> &'static str {
        match self {
            Self::New => "new",
            Self::Contacted => "contacted",
            Self::Hot => "hot",
            Self::Scheduled => "scheduled",
            Self::Closed => "closed",
            Self::Lost => "lost",
        }
    }
}

impl fmt::Display for LeadStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::New => write!(f, "New"),
            Self::Contacted => write!(f, "Contacted"),
            Self::Hot => write!(f, "Hot"),
            Self::Scheduled => write!(f, "Scheduled"),
            Self::Closed => write!(f, "Closed"),
            Self::Lost => write!(f, "Lost"),
        }
    }
}

impl FromStr for LeadStatus {
    type Err = LeadboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|status| status.as_key() == normalized)
            .ok_or_else(|| LeadboardError::InvalidStatus(s.to_string()))
    }
}

/// Qualification score in the range 0..=100
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct Score(u8);

impl Score {
    pub const MAX: u8 = 100;
    pub const DEFAULT_HOT_THRESHOLD: u8 = 80;
    pub const DEFAULT_WARM_THRESHOLD: u8 = 60;

    pub fn new(value: u8) -> Result<Self, LeadboardError> {
        Self::try_from(i64::from(value))
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    /// Tier using the default 80/60 thresholds. Use
    /// `BoardConfig::tier_for` to apply a board's configured thresholds.
    pub fn tier(&self) -> ScoreTier {
        self.tier_with(Self::DEFAULT_HOT_THRESHOLD, Self::DEFAULT_WARM_THRESHOLD)
    }

    /// Tier for explicit thresholds; both comparisons are strict
    pub fn tier_with(&self, hot: u8, warm: u8) -> ScoreTier {
        if self.0 > hot {
            ScoreTier::Hot
        } else if self.0 > warm {
            ScoreTier::Warm
        } else {
            ScoreTier::Cold
        }
    }
}

impl TryFrom<i64> for Score {
    type Error = LeadboardError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if (0..=i64::from(Self::MAX)).contains(&value) {
            Ok(Self(value as u8))
        } else {
            Err(LeadboardError::InvalidScore(value))
        }
    }
}

impl From<Score> for u8 {
    fn from(score: Score) -> Self {
        score.0
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Coarse bucket of a score, used for badges and hot lead alerts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreTier {
    Hot,
    Warm,
    Cold,
}

/// A prospective customer tracked on the board
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lead {
    pub id: LeadId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub score: Score,
    pub status: LeadStatus,
    pub source: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ai_summary: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_contact: Option<NaiveDate>,
}

impl Lead {
    /// Creates a lead in the `New` column with empty contact details
    pub fn new(id: LeadId, name: impl Into<String>, score: Score) -> Self {
        Self {
            id,
            name: name.into(),
            email: String::new(),
            phone: String::new(),
            score,
            status: LeadStatus::New,
            source: String::new(),
            budget: None,
            ai_summary: Vec::new(),
            last_contact: None,
        }
    }

    pub fn with_status(mut self, status: LeadStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_contact(mut self, email: impl Into<String>, phone: impl Into<String>) -> Self {
        self.email = email.into();
        self.phone = phone.into();
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = source.into();
        self
    }

    pub fn with_budget(mut self, budget: impl Into<String>) -> Self {
        self.budget = Some(budget.into());
        self
    }

    pub fn with_summary(mut self, notes: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.ai_summary = notes.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_last_contact(mut self, date: NaiveDate) -> Self {
        self.last_contact = Some(date);
        self
    }

    /// First character of the name, for avatar badges
    pub fn initial(&self) -> Option<char> {
        self.name.chars().next()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(value: u8) -> Score {
        Score::new(value).unwrap()
    }

    #[test]
    fn test_lead_id_parsing() {
        let id = LeadId::from_str("42").unwrap();
        assert_eq!(id.as_str(), "42");

        // Surrounding whitespace is part of the id
        let id = LeadId::from_str(" 7 ").unwrap();
        assert_eq!(id, LeadId::new(" 7 "));
        assert_ne!(id, LeadId::new("7"));

        assert!(LeadId::from_str("").is_err());
    }

    #[test]
    fn test_lead_id_serde_keeps_exact_value() {
        for raw in ["1", " 1", " 7 ", "   "] {
            let id = LeadId::new(raw);
            let json = serde_json::to_string(&id).unwrap();
            let back: LeadId = serde_json::from_str(&json).unwrap();
            assert_eq!(back, id);
        }
    }

    #[test]
    fn test_generated_ids_are_unique() {
        let a = LeadId::generate();
        let b = LeadId::generate();
        assert_ne!(a, b);
        assert!(a.as_str().starts_with("lead-"));
    }

    #[test]
    fn test_status_parsing() {
        assert_eq!(LeadStatus::from_str("hot").unwrap(), LeadStatus::Hot);
        assert_eq!(LeadStatus::from_str("Scheduled").unwrap(), LeadStatus::Scheduled);
        assert_eq!(LeadStatus::from_str(" LOST ").unwrap(), LeadStatus::Lost);

        match LeadStatus::from_str("qualified") {
            Err(LeadboardError::InvalidStatus(s)) => assert_eq!(s, "qualified"),
            other => panic!("expected InvalidStatus, got {:?}", other),
        }
    }

    #[test]
    fn test_status_order_matches_columns() {
        let mut statuses = vec![LeadStatus::Lost, LeadStatus::New, LeadStatus::Hot];
        statuses.sort();
        assert_eq!(
            statuses,
            vec![LeadStatus::New, LeadStatus::Hot, LeadStatus::Lost]
        );

        for status in LeadStatus::ALL {
            assert_eq!(LeadStatus::from_str(status.as_key()).unwrap(), status);
        }
    }

    #[test]
    fn test_score_range() {
        assert!(Score::new(0).is_ok());
        assert!(Score::new(100).is_ok());
        assert!(Score::new(101).is_err());
        assert!(Score::try_from(-1).is_err());
    }

    #[test]
    fn test_score_tiers() {
        assert_eq!(score(95).tier(), ScoreTier::Hot);
        assert_eq!(score(81).tier(), ScoreTier::Hot);
        assert_eq!(score(80).tier(), ScoreTier::Warm);
        assert_eq!(score(61).tier(), ScoreTier::Warm);
        assert_eq!(score(60).tier(), ScoreTier::Cold);
        assert_eq!(score(70).tier_with(65, 50), ScoreTier::Hot);
    }

    #[test]
    fn test_lead_builder() {
        let lead = Lead::new(LeadId::new("1"), "María González", score(92))
            .with_status(LeadStatus::Hot)
            .with_contact("maria@example.com", "+34 612 345 678")
            .with_source("Instagram Ads")
            .with_budget("€180K - €220K");

        assert_eq!(lead.status, LeadStatus::Hot);
        assert_eq!(lead.initial(), Some('M'));
        assert_eq!(lead.budget.as_deref(), Some("€180K - €220K"));
    }

    #[test]
    fn test_lead_serialization() {
        let lead = Lead::new(LeadId::new("4"), "Pedro", score(95)).with_status(LeadStatus::New);
        let json = serde_json::to_string(&lead).unwrap();

        assert!(json.contains(r#""status":"new""#));
        assert!(json.contains(r#""score":95"#));
        assert!(!json.contains("budget"));
        assert!(!json.contains("ai_summary"));
    }

    #[test]
    fn test_minimal_seed_deserialization() {
        let json = r#"{
            "id": "2",
            "name": "Carlos Ruiz",
            "email": "carlos@example.com",
            "phone": "+34 623 456 789",
            "score": 85,
            "status": "contacted",
            "source": "WhatsApp Direct"
        }"#;

        let lead: Lead = serde_json::from_str(json).unwrap();
        assert_eq!(lead.id.as_str(), "2");
        assert_eq!(lead.status, LeadStatus::Contacted);
        assert!(lead.budget.is_none());
        assert!(lead.ai_summary.is_empty());
        assert!(lead.last_contact.is_none());
    }

    #[test]
    fn test_invalid_seed_values_rejected() {
        let bad_score = r#"{"id":"1","name":"x","email":"","phone":"","score":150,"status":"new","source":""}"#;
        assert!(serde_json::from_str::<Lead>(bad_score).is_err());

        let bad_status = r#"{"id":"1","name":"x","email":"","phone":"","score":50,"status":"qualified","source":""}"#;
        assert!(serde_json::from_str::<Lead>(bad_status).is_err());

        let empty_id = r#"{"id":"","name":"x","email":"","phone":"","score":50,"status":"new","source":""}"#;
        assert!(serde_json::from_str::<Lead>(empty_id).is_err());
    }
}
