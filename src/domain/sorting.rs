use crate::{domain::ticket::Ticket, error::BoardError};
use feruca::Collator;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Ordering applied within every group of the board
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortingMode {
    /// Keep the order the tickets were grouped in
    #[default]
    None,
    /// Highest priority value first
    Priority,
    /// Alphabetical by title
    Title,
}

impl SortingMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Priority => "priority",
            Self::Title => "title",
        }
    }
}

impl fmt::Display for SortingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortingMode {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "" | "none" => Ok(SortingMode::None),
            "priority" => Ok(SortingMode::Priority),
            "title" => Ok(SortingMode::Title),
            _ => Err(BoardError::InvalidSortingMode(s.to_string())),
        }
    }
}

/// Returns the tickets reordered by `mode`.
///
/// The input is never touched. Both orderings are stable, so tickets that
/// compare equal keep their relative order.
///
/// # Examples
/// ```
/// use taskboard_core::domain::sorting::{sort_tickets, SortingMode};
/// use taskboard_core::domain::ticket::{Ticket, TicketStatus};
///
/// let tickets = vec![
///     Ticket::new("t1", "B", TicketStatus::Todo, 1),
///     Ticket::new("t2", "A", TicketStatus::Todo, 3),
/// ];
///
/// let sorted = sort_tickets(&tickets, SortingMode::Priority);
/// assert_eq!(sorted[0].id.as_str(), "t2");
/// ```
pub fn sort_tickets(tickets: &[Ticket], mode: SortingMode) -> Vec<Ticket> {
    let mut sorted = tickets.to_vec();
    match mode {
        SortingMode::None => {}
        SortingMode::Priority => sorted.sort_by(|a, b| b.priority.cmp(&a.priority)),
        SortingMode::Title => {
            let mut collator = Collator::default();
            sorted.sort_by(|a, b| collator.collate(a.title.as_str(), b.title.as_str()));
        }
    }
    sorted
}

/// Locale-aware title comparison using the Unicode Collation Algorithm
/// with the root locale.
///
/// Accents and case only matter when the base letters are equal, and
/// lowercase sorts ahead of uppercase.
pub fn compare_titles(a: &str, b: &str) -> Ordering {
    Collator::default().collate(a, b)
}
