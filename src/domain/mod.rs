pub mod board;
pub mod lead;
pub mod sorting;

pub use board::{group_by_status, BoardColumns, BoardConfig, Column};
pub use lead::{Lead, LeadId, LeadStatus, Score, ScoreTier};
pub use sorting::{prioritize, sort_leads, LeadFilter, SortField, SortOrder};
