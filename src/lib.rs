//! # Leadbridge Core
//!
//! Core synchronization logic and domain models for keeping a lead
//! pipeline in step with a kanban work board.
//!
//! This crate provides the status-correlation and identity-correlation
//! logic between the two trackers without any dependency on a specific
//! transport: the spreadsheet-like lead tracker and the kanban-like board
//! sit behind the [`backend::SheetBackend`] and [`backend::BoardBackend`]
//! traits. The core assumes a single logical writer; identifiers derive
//! from row position, so concurrent creators can collide.

pub mod adapter;
pub mod backend;
pub mod domain;
pub mod error;

// Re-export commonly used types
pub use adapter::{LeadStore, WorkBoard};
pub use backend::{BoardBackend, Card, Lane, SheetBackend};
pub use domain::{
    correlate,
    lead::{Lead, LeadPatch, LeadStatus, NewLead},
    work_item::{WorkItem, WorkItemStatus},
};
pub use error::{Result, SyncError};
