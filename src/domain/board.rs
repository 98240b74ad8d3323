use crate::{
    domain::lead::{Lead, LeadStatus, Score, ScoreTier},
    error::{LeadboardError, Result},
    store::MissingLeadPolicy,
};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Display configuration for a board column
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    pub name: String,
    pub status: LeadStatus,
}

impl Column {
    pub fn new(name: impl Into<String>, status: LeadStatus) -> Self {
        Self {
            name: name.into(),
            status,
        }
    }
}

/// Board configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub name: String,
    pub hot_score_threshold: u8,
    pub warm_score_threshold: u8,
    pub missing_lead_policy: MissingLeadPolicy,
    pub columns: Vec<Column>,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            name: "Sales Pipeline".to_string(),
            hot_score_threshold: Score::DEFAULT_HOT_THRESHOLD,
            warm_score_threshold: Score::DEFAULT_WARM_THRESHOLD,
            missing_lead_policy: MissingLeadPolicy::default(),
            columns: LeadStatus::ALL
                .into_iter()
                .map(|status| Column::new(status.to_string(), status))
                .collect(),
        }
    }
}

impl BoardConfig {
    /// Checks thresholds and column uniqueness
    pub fn validate(&self) -> Result<()> {
        if self.hot_score_threshold > Score::MAX {
            return Err(LeadboardError::ConfigError(format!(
                "hot_score_threshold {} exceeds {}",
                self.hot_score_threshold,
                Score::MAX
            )));
        }
        if self.warm_score_threshold >= self.hot_score_threshold {
            return Err(LeadboardError::ConfigError(format!(
                "warm_score_threshold {} must be below hot_score_threshold {}",
                self.warm_score_threshold, self.hot_score_threshold
            )));
        }

        let mut seen = HashSet::new();
        for column in &self.columns {
            if !seen.insert(column.status) {
                return Err(LeadboardError::ConfigError(format!(
                    "duplicate column for status '{}'",
                    column.status.as_key()
                )));
            }
        }

        Ok(())
    }

    /// Gets the column configuration for a status
    pub fn get_column_for_status(&self, status: LeadStatus) -> Option<&Column> {
        self.columns.iter().find(|col| col.status == status)
    }

    /// Label to render for a status, falling back to its display name
    pub fn column_label(&self, status: LeadStatus) -> String {
        self.get_column_for_status(status)
            .map(|col| col.name.clone())
            .unwrap_or_else(|| status.to_string())
    }

    /// Tier of a score under the configured thresholds
    pub fn tier_for(&self, score: Score) -> ScoreTier {
        score.tier_with(self.hot_score_threshold, self.warm_score_threshold)
    }
}

/// Leads partitioned by status, one entry per status in column order
#[derive(Debug, Clone)]
pub struct BoardColumns<'a> {
    columns: Vec<(LeadStatus, Vec<&'a Lead>)>,
}

impl<'a> BoardColumns<'a> {
    /// Leads in the given column
    pub fn get(&self, status: LeadStatus) -> &[&'a Lead] {
        self.columns
            .iter()
            .find(|(s, _)| *s == status)
            .map(|(_, leads)| leads.as_slice())
            .unwrap_or(&[])
    }

    /// Columns in enumeration order, empty ones included
    pub fn iter(&self) -> impl Iterator<Item = (LeadStatus, &[&'a Lead])> + '_ {
        self.columns
            .iter()
            .map(|(status, leads)| (*status, leads.as_slice()))
    }

    pub fn count(&self, status: LeadStatus) -> usize {
        self.get(status).len()
    }

    /// Per-column lead counts, for the summary cards above the board
    pub fn counts(&self) -> Vec<(LeadStatus, usize)> {
        self.columns
            .iter()
            .map(|(status, leads)| (*status, leads.len()))
            .collect()
    }

    pub fn total(&self) -> usize {
        self.columns.iter().map(|(_, leads)| leads.len()).sum()
    }

    /// Number of columns, always `LeadStatus::ALL.len()`
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

/// Groups leads into board columns
///
/// Every status is present in the result, in `LeadStatus::ALL` order, and
/// each column keeps the relative order of the source slice.
///
/// # Examples
/// ```
/// use leadboard_core::domain::board::group_by_status;
/// use leadboard_core::domain::lead::{Lead, LeadId, LeadStatus, Score};
///
/// let leads = vec![
///     Lead::new(LeadId::new("1"), "Ana", Score::new(78).unwrap()),
///     Lead::new(LeadId::new("2"), "Pedro", Score::new(95).unwrap())
///         .with_status(LeadStatus::Hot),
/// ];
///
/// let columns = group_by_status(&leads);
/// assert_eq!(columns.len(), 6);
/// assert_eq!(columns.get(LeadStatus::Hot)[0].id.as_str(), "2");
/// assert!(columns.get(LeadStatus::Lost).is_empty());
/// ```
pub fn group_by_status(leads: &[Lead]) -> BoardColumns<'_> {
    let columns: Vec<(LeadStatus, Vec<&Lead>)> = LeadStatus::ALL
        .into_iter()
        .map(|status| {
            let members = leads.iter().filter(|lead| lead.status == status).collect();
            (status, members)
        })
        .collect();

    BoardColumns { columns }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::lead::LeadId;

    fn lead(id: &str, status: LeadStatus) -> Lead {
        Lead::new(LeadId::new(id), format!("Lead {}", id), Score::new(50).unwrap())
            .with_status(status)
    }

    #[test]
    fn test_every_status_present_when_empty() {
        let columns = group_by_status(&[]);

        assert_eq!(columns.len(), LeadStatus::ALL.len());
        for status in LeadStatus::ALL {
            assert!(columns.get(status).is_empty());
        }
        assert_eq!(columns.total(), 0);
    }

    #[test]
    fn test_columns_follow_enumeration_order() {
        let leads = vec![lead("1", LeadStatus::Lost), lead("2", LeadStatus::New)];
        let columns = group_by_status(&leads);

        let order: Vec<LeadStatus> = columns.iter().map(|(status, _)| status).collect();
        assert_eq!(order, LeadStatus::ALL.to_vec());
    }

    #[test]
    fn test_grouping_preserves_source_order() {
        let leads = vec![
            lead("1", LeadStatus::Hot),
            lead("2", LeadStatus::New),
            lead("3", LeadStatus::Hot),
            lead("4", LeadStatus::Hot),
        ];
        let columns = group_by_status(&leads);

        let hot: Vec<&str> = columns
            .get(LeadStatus::Hot)
            .iter()
            .map(|l| l.id.as_str())
            .collect();
        assert_eq!(hot, vec!["1", "3", "4"]);
        assert_eq!(columns.count(LeadStatus::New), 1);
        assert_eq!(columns.total(), 4);
    }

    #[test]
    fn test_counts() {
        let leads = vec![
            lead("1", LeadStatus::Hot),
            lead("2", LeadStatus::Contacted),
            lead("3", LeadStatus::Scheduled),
            lead("4", LeadStatus::New),
        ];
        let counts = group_by_status(&leads).counts();

        assert_eq!(
            counts,
            vec![
                (LeadStatus::New, 1),
                (LeadStatus::Contacted, 1),
                (LeadStatus::Hot, 1),
                (LeadStatus::Scheduled, 1),
                (LeadStatus::Closed, 0),
                (LeadStatus::Lost, 0),
            ]
        );
    }

    #[test]
    fn test_default_config_is_valid() {
        let config = BoardConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.columns.len(), 6);
        assert_eq!(config.column_label(LeadStatus::Scheduled), "Scheduled");
    }

    #[test]
    fn test_config_validation() {
        let mut config = BoardConfig::default();
        config.warm_score_threshold = 90;
        assert!(config.validate().is_err());

        let mut config = BoardConfig::default();
        config.hot_score_threshold = 120;
        assert!(config.validate().is_err());

        let mut config = BoardConfig::default();
        config.columns.push(Column::new("Hot again", LeadStatus::Hot));
        assert!(matches!(
            config.validate(),
            Err(LeadboardError::ConfigError(_))
        ));
    }

    #[test]
    fn test_column_label_fallback() {
        let config = BoardConfig {
            columns: vec![Column::new("Nuevo", LeadStatus::New)],
            ..BoardConfig::default()
        };

        assert_eq!(config.column_label(LeadStatus::New), "Nuevo");
        assert_eq!(config.column_label(LeadStatus::Lost), "Lost");
    }

    #[test]
    fn test_tier_for_configured_thresholds() {
        let config = BoardConfig {
            hot_score_threshold: 90,
            warm_score_threshold: 70,
            ..BoardConfig::default()
        };

        assert_eq!(config.tier_for(Score::new(85).unwrap()), ScoreTier::Warm);
        assert_eq!(config.tier_for(Score::new(91).unwrap()), ScoreTier::Hot);
    }
}
