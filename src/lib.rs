//! # Leadboard Core
//!
//! Domain models and state transitions for the lead pipeline board.
//!
//! This crate owns the lead collection, groups it into status columns and
//! runs the drag and drop state machine that moves leads between columns,
//! without any dependency on a specific UI or storage backend.

pub mod domain;
pub mod drag;
pub mod error;
pub mod storage;
pub mod store;

// Re-export commonly used types
pub use domain::{
    board::{group_by_status, BoardColumns, BoardConfig, Column},
    lead::{Lead, LeadId, LeadStatus, Score, ScoreTier},
};
pub use drag::{DragController, DragState, DropOutcome, DropTarget};
pub use error::{LeadboardError, Result};
pub use storage::Storage;
pub use store::{LeadStore, MissingLeadPolicy, StatusChange, StatusObserver};
