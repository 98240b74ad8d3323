//! Drag and drop of lead cards between board columns.
//!
//! A single pointer means at most one card is in flight. The controller
//! remembers the status the card had when the drag started and only asks
//! the store to reassign when it lands on a different column.

use crate::{
    domain::lead::{LeadId, LeadStatus},
    error::{LeadboardError, Result},
    store::{LeadStore, StatusChange},
};
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        lead_id: LeadId,
        origin: LeadStatus,
    },
}

/// Where a drag gesture ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropTarget {
    Column(LeadStatus),
    /// Released outside any column, or cancelled
    Outside,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropOutcome {
    /// The lead changed column
    Moved(StatusChange),
    /// Dropped on its own column
    Rejected,
    /// Dropped outside any column
    Cancelled,
    /// The store accepted the drop but had nothing to change
    Unchanged,
}

impl DropOutcome {
    pub fn is_moved(&self) -> bool {
        matches!(self, Self::Moved(_))
    }
}

#[derive(Debug, Default)]
pub struct DragController {
    state: DragState,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &DragState {
        &self.state
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    pub fn dragged_lead(&self) -> Option<&LeadId> {
        match &self.state {
            DragState::Dragging { lead_id, .. } => Some(lead_id),
            DragState::Idle => None,
        }
    }

    /// Picks up a card, recording its current status as the origin
    pub fn begin_drag(&mut self, store: &LeadStore, lead_id: &LeadId) -> Result<()> {
        if let DragState::Dragging { lead_id: active, .. } = &self.state {
            return Err(LeadboardError::DragInProgress(active.to_string()));
        }

        let lead = store
            .get(lead_id)
            .ok_or_else(|| LeadboardError::LeadNotFound(lead_id.to_string()))?;

        debug!(lead_id = %lead_id, origin = lead.status.as_key(), "drag started");
        self.state = DragState::Dragging {
            lead_id: lead_id.clone(),
            origin: lead.status,
        };
        Ok(())
    }

    /// Ends the gesture. The controller is idle afterwards whatever the
    /// outcome, including when the store returns an error.
    pub fn drop_on(&mut self, store: &mut LeadStore, target: DropTarget) -> Result<DropOutcome> {
        let (lead_id, origin) = match std::mem::take(&mut self.state) {
            DragState::Dragging { lead_id, origin } => (lead_id, origin),
            DragState::Idle => return Err(LeadboardError::NoActiveDrag),
        };

        let outcome = match target {
            DropTarget::Outside => DropOutcome::Cancelled,
            DropTarget::Column(status) if status == origin => DropOutcome::Rejected,
            DropTarget::Column(status) => match store.reassign_status(&lead_id, status)? {
                Some(change) => DropOutcome::Moved(change),
                None => DropOutcome::Unchanged,
            },
        };

        debug!(lead_id = %lead_id, ?outcome, "drag finished");
        Ok(outcome)
    }

    /// Abandons any drag in progress. Returns whether one was active.
    pub fn cancel(&mut self) -> bool {
        let was_dragging = self.is_dragging();
        self.state = DragState::Idle;
        was_dragging
    }
}
