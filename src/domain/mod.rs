pub mod board;
pub mod dataset;
pub mod grouping;
pub mod sorting;
pub mod ticket;
pub mod user;

#[cfg(test)]
pub(crate) mod arbitrary;

pub use board::{Board, DragEvent, DragLocation, Group};
pub use dataset::Dataset;
pub use grouping::{group_tickets, GroupingMode, PriorityLevel};
pub use sorting::{compare_titles, sort_tickets, SortingMode};
pub use ticket::{Ticket, TicketId, TicketStatus};
pub use user::{User, UserId};
