//! # Taskboard Core
//!
//! Board state engine for kanban-style task boards.
//!
//! Tickets are partitioned into columns by status, assignee or priority,
//! ordered within each column by priority or title, and can be moved
//! between columns by drag gestures. All engine operations are pure; the
//! data source and the preference store are external collaborators
//! reached through the traits in [`storage`].

pub mod config;
pub mod domain;
pub mod error;
pub mod session;
pub mod state;
pub mod storage;

// Re-export commonly used types
pub use config::SessionConfig;
pub use domain::{
    board::{Board, DragEvent, DragLocation, Group},
    dataset::Dataset,
    grouping::{group_tickets, GroupingMode, PriorityLevel},
    sorting::{sort_tickets, SortingMode},
    ticket::{Ticket, TicketId, TicketStatus},
    user::{User, UserId},
};
pub use error::{BoardError, Result};
pub use session::BoardSession;
pub use state::ViewState;
pub use storage::{DataSource, PreferenceStore};
