//! In-memory lead store, the single writer of lead status.

use crate::{
    domain::{
        board::{group_by_status, BoardColumns},
        lead::{Lead, LeadId, LeadStatus},
    },
    error::{LeadboardError, Result},
    storage::Storage,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::{collections::HashSet, fmt};
use tracing::{debug, warn};

/// What `reassign_status` does when the lead id is unknown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MissingLeadPolicy {
    /// Return `LeadNotFound`
    Strict,
    /// Log a warning and leave the collection unchanged
    Ignore,
}

impl Default for MissingLeadPolicy {
    fn default() -> Self {
        if cfg!(debug_assertions) {
            Self::Strict
        } else {
            Self::Ignore
        }
    }
}

/// A committed status reassignment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusChange {
    pub lead_id: LeadId,
    pub from: LeadStatus,
    pub to: LeadStatus,
    pub at: DateTime<Utc>,
}

impl StatusChange {
    /// Notification text shown to the user after a move
    pub fn message(&self) -> String {
        format!("Lead moved to {}. Automatic workflow triggered.", self.to)
    }
}

/// Receives every committed status change
pub trait StatusObserver {
    fn on_status_changed(&self, change: &StatusChange);
}

impl<F> StatusObserver for F
where
    F: Fn(&StatusChange),
{
    fn on_status_changed(&self, change: &StatusChange) {
        self(change)
    }
}

/// Owns the lead collection. `reassign_status` is the only mutation.
pub struct LeadStore {
    leads: Vec<Lead>,
    policy: MissingLeadPolicy,
    observers: Vec<Box<dyn StatusObserver>>,
}

impl LeadStore {
    /// Creates a store with the default missing-lead policy
    pub fn new(leads: Vec<Lead>) -> Result<Self> {
        Self::with_policy(leads, MissingLeadPolicy::default())
    }

    /// Creates a store, rejecting empty and duplicate ids
    pub fn with_policy(leads: Vec<Lead>, policy: MissingLeadPolicy) -> Result<Self> {
        let mut seen = HashSet::with_capacity(leads.len());
        for lead in &leads {
            if lead.id.is_empty() {
                return Err(LeadboardError::InvalidLeadId(lead.id.to_string()));
            }
            if !seen.insert(&lead.id) {
                return Err(LeadboardError::DuplicateLeadId(lead.id.to_string()));
            }
        }

        Ok(Self {
            leads,
            policy,
            observers: Vec::new(),
        })
    }

    /// Builds a store from the leads and config held in storage
    pub async fn load(storage: &dyn Storage) -> Result<Self> {
        let config = storage.load_config().await?;
        let leads = storage.load_leads().await?;
        debug!(count = leads.len(), board = %config.name, "loaded lead store");
        Self::with_policy(leads, config.missing_lead_policy)
    }

    pub fn leads(&self) -> &[Lead] {
        &self.leads
    }

    pub fn get(&self, id: &LeadId) -> Option<&Lead> {
        self.leads.iter().find(|lead| &lead.id == id)
    }

    pub fn contains(&self, id: &LeadId) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.leads.len()
    }

    pub fn is_empty(&self) -> bool {
        self.leads.is_empty()
    }

    pub fn policy(&self) -> MissingLeadPolicy {
        self.policy
    }

    /// Current leads grouped into board columns
    pub fn columns(&self) -> BoardColumns<'_> {
        group_by_status(&self.leads)
    }

    /// Copy of the current collection, for saving
    pub fn snapshot(&self) -> Vec<Lead> {
        self.leads.clone()
    }

    /// Registers an observer for committed status changes
    pub fn subscribe(&mut self, observer: Box<dyn StatusObserver>) {
        self.observers.push(observer);
    }

    /// Moves a lead to another status
    ///
    /// Returns `Ok(None)` when nothing changed: the lead already had the
    /// target status, or the id is unknown under `MissingLeadPolicy::Ignore`.
    /// Only the `status` field of the matching lead is written.
    pub fn reassign_status(
        &mut self,
        id: &LeadId,
        new_status: LeadStatus,
    ) -> Result<Option<StatusChange>> {
        let Some(lead) = self.leads.iter_mut().find(|lead| &lead.id == id) else {
            return match self.policy {
                MissingLeadPolicy::Strict => Err(LeadboardError::LeadNotFound(id.to_string())),
                MissingLeadPolicy::Ignore => {
                    warn!(lead_id = %id, status = new_status.as_key(), "ignoring reassignment of unknown lead");
                    Ok(None)
                }
            };
        };

        if lead.status == new_status {
            return Ok(None);
        }

        let change = StatusChange {
            lead_id: lead.id.clone(),
            from: lead.status,
            to: new_status,
            at: Utc::now(),
        };
        lead.status = new_status;

        debug!(
            lead_id = %change.lead_id,
            from = change.from.as_key(),
            to = change.to.as_key(),
            "lead status reassigned"
        );

        for observer in &self.observers {
            observer.on_status_changed(&change);
        }

        Ok(Some(change))
    }

    /// String boundary for `reassign_status`; the status is parsed before
    /// the store is touched.
    pub fn reassign_status_named(
        &mut self,
        id: &str,
        status: &str,
    ) -> Result<Option<StatusChange>> {
        let status: LeadStatus = status.parse()?;
        let id: LeadId = id.parse()?;
        self.reassign_status(&id, status)
    }
}

impl fmt::Debug for LeadStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LeadStore")
            .field("leads", &self.leads)
            .field("policy", &self.policy)
            .field("observers", &self.observers.len())
            .finish()
    }
}
