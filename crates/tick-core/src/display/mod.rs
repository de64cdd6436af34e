//! Markdown formatting for terminal output.
//!
//! Domain models implement `Display` directly (see [`models`]); collections
//! and operation outcomes are wrapped in newtypes so every interface prints
//! the same text.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │ Wrappers &      │    │   Markdown      │
//! │ (Checklist,...) │───▶│ Result Types    │───▶│    Output       │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! - [`collections`]: ChecklistSummaries, IndexedItems, Categories, Targets
//! - [`results`]: CreateResult, UpdateResult, MoveResult, DeleteResult
//! - [`status`]: OperationStatus
//! - [`datetime`]: timestamps in the system time zone
//! - [`models`]: Display implementations for domain models
//!
//! # Examples
//!
//! ```rust
//! use tick_core::{
//!     display::{CreateResult, UpdateResult},
//!     models::{Checklist, ListStatus},
//! };
//! use jiff::Timestamp;
//!
//! let checklist = Checklist {
//!     id: "1700000000000_abc".to_string(),
//!     name: "Groceries".to_string(),
//!     description: String::new(),
//!     category: "Shopping".to_string(),
//!     created_at: Timestamp::now(),
//!     target_at: None,
//!     completed_at: None,
//!     updated_at: Timestamp::now(),
//!     status: ListStatus::Active,
//!     continual: false,
//!     favorite: false,
//!     items: vec![],
//! };
//!
//! let output = CreateResult::new(checklist.clone()).to_string();
//! assert!(output.contains("Created checklist with ID: 1700000000000_abc"));
//!
//! let update = UpdateResult::with_changes(checklist, vec!["Renamed to 'Food'".to_string()]);
//! assert!(update.to_string().contains("Changes made:"));
//! ```

pub mod collections;
pub mod datetime;
pub mod models;
pub mod results;
pub mod status;

pub use collections::{Categories, ChecklistSummaries, IndexedItems, Targets};
pub use datetime::{LocalDate, LocalDateTime};
pub use results::{CreateResult, DeleteResult, MoveResult, UpdateResult};
pub use status::OperationStatus;
