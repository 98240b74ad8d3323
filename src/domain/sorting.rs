use crate::domain::lead::{Lead, LeadStatus};
use chrono::NaiveDate;
use std::cmp::Ordering;
use std::str::FromStr;

/// Fields available for sorting leads
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Id,
    Name,
    Score,
    Status,
    Source,
    LastContact,
}

/// Sort order direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

impl FromStr for SortField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "id" => Ok(SortField::Id),
            "name" => Ok(SortField::Name),
            "score" => Ok(SortField::Score),
            "status" => Ok(SortField::Status),
            "source" => Ok(SortField::Source),
            "last-contact" => Ok(SortField::LastContact),
            _ => Err(format!(
                "Invalid sort field '{}'. Valid fields: id, name, score, status, source, last-contact",
                s
            )),
        }
    }
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "asc" => Ok(SortOrder::Ascending),
            "desc" => Ok(SortOrder::Descending),
            _ => Err(format!(
                "Invalid sort order '{}'. Valid orders: asc, desc",
                s
            )),
        }
    }
}

/// Sorts leads in place. The sort is stable, so equal keys keep their
/// relative order.
///
/// # Examples
/// ```
/// use leadboard_core::domain::lead::{Lead, LeadId, Score};
/// use leadboard_core::domain::sorting::{sort_leads, SortField, SortOrder};
///
/// let mut leads = vec![
///     Lead::new(LeadId::new("1"), "María", Score::new(92).unwrap()),
///     Lead::new(LeadId::new("2"), "Carlos", Score::new(45).unwrap()),
///     Lead::new(LeadId::new("3"), "Ana", Score::new(78).unwrap()),
/// ];
///
/// sort_leads(&mut leads, SortField::Score, SortOrder::Descending);
/// assert_eq!(leads[0].id.as_str(), "1");
/// assert_eq!(leads[2].id.as_str(), "2");
/// ```
pub fn sort_leads(leads: &mut [Lead], field: SortField, order: SortOrder) {
    leads.sort_by(|a, b| {
        let cmp = match field {
            SortField::Id => a.id.as_str().cmp(b.id.as_str()),
            SortField::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
            SortField::Score => a.score.cmp(&b.score),
            SortField::Status => compare_status(a.status, b.status),
            SortField::Source => a.source.to_lowercase().cmp(&b.source.to_lowercase()),
            // Missing dates stay at the end in both directions
            SortField::LastContact => {
                return compare_option_dates(a.last_contact, b.last_contact, order)
            }
        };

        match order {
            SortOrder::Ascending => cmp,
            SortOrder::Descending => cmp.reverse(),
        }
    });
}

/// Priority mode: highest score first, ties keep their current order
pub fn prioritize(leads: &mut [Lead]) {
    sort_leads(leads, SortField::Score, SortOrder::Descending);
}

/// Status order follows the board: New → Contacted → Hot → Scheduled → Closed → Lost
fn compare_status(a: LeadStatus, b: LeadStatus) -> Ordering {
    a.cmp(&b)
}

fn compare_option_dates(a: Option<NaiveDate>, b: Option<NaiveDate>, order: SortOrder) -> Ordering {
    match (a, b) {
        (Some(a_date), Some(b_date)) => match order {
            SortOrder::Ascending => a_date.cmp(&b_date),
            SortOrder::Descending => b_date.cmp(&a_date),
        },
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Criteria for narrowing the visible lead list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeadFilter {
    /// Keep leads whose score is strictly above this value
    pub min_score: Option<u8>,
    pub status: Option<LeadStatus>,
    /// Case-insensitive substring of the acquisition source
    pub source: Option<String>,
}

impl LeadFilter {
    /// The "hot leads only" toggle
    pub fn hot_only(threshold: u8) -> Self {
        Self {
            min_score: Some(threshold),
            ..Self::default()
        }
    }

    pub fn with_status(mut self, status: LeadStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn matches(&self, lead: &Lead) -> bool {
        let score_ok = self
            .min_score
            .map(|min| lead.score.value() > min)
            .unwrap_or(true);
        let status_ok = self.status.map(|s| lead.status == s).unwrap_or(true);
        let source_ok = self
            .source
            .as_ref()
            .map(|q| lead.source.to_lowercase().contains(&q.to_lowercase()))
            .unwrap_or(true);

        score_ok && status_ok && source_ok
    }

    /// Matching leads in source order
    pub fn apply<'a>(&self, leads: &'a [Lead]) -> Vec<&'a Lead> {
        leads.iter().filter(|lead| self.matches(lead)).collect()
    }
}
