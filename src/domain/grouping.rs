use crate::{
    domain::{
        board::{Board, Group},
        ticket::{Ticket, TicketStatus},
        user::User,
    },
    error::BoardError,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Dimension used to split tickets into columns
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupingMode {
    #[default]
    Status,
    #[serde(alias = "user")]
    Assignee,
    Priority,
}

impl GroupingMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Status => "status",
            Self::Assignee => "assignee",
            Self::Priority => "priority",
        }
    }
}

impl fmt::Display for GroupingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GroupingMode {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "status" => Ok(GroupingMode::Status),
            "assignee" | "user" => Ok(GroupingMode::Assignee),
            "priority" => Ok(GroupingMode::Priority),
            _ => Err(BoardError::InvalidGroupingMode(s.to_string())),
        }
    }
}

/// Priority tiers, indexed by the numeric `Ticket::priority` value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PriorityLevel {
    NoPriority,
    Urgent,
    High,
    Medium,
    Low,
}

impl PriorityLevel {
    pub const ALL: [PriorityLevel; 5] = [
        Self::NoPriority,
        Self::Urgent,
        Self::High,
        Self::Medium,
        Self::Low,
    ];

    /// Maps a stored priority to its tier; values outside 0..=4 have none
    pub fn from_value(value: i64) -> Option<PriorityLevel> {
        usize::try_from(value)
            .ok()
            .and_then(|i| Self::ALL.get(i).copied())
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::NoPriority => "No priority",
            Self::Urgent => "Urgent",
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }
}

impl fmt::Display for PriorityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Partitions `tickets` into labelled groups.
///
/// - `Status`: the five statuses in workflow order, always all present.
/// - `Priority`: the five `PriorityLevel` tiers, always all present.
///   Tickets with a priority outside 0..=4 are left out.
/// - `Assignee`: one group per distinct user name, in the order users
///   were given. Tickets without a matching user are left out.
///
/// Tickets keep their input order inside each group.
pub fn group_tickets(tickets: &[Ticket], users: &[User], mode: GroupingMode) -> Board {
    match mode {
        GroupingMode::Status => group_by_status(tickets),
        GroupingMode::Assignee => group_by_assignee(tickets, users),
        GroupingMode::Priority => group_by_priority(tickets),
    }
}

fn group_by_status(tickets: &[Ticket]) -> Board {
    let groups = TicketStatus::ALL
        .iter()
        .map(|status| Group {
            label: status.label().to_string(),
            tickets: tickets
                .iter()
                .filter(|t| t.status == *status)
                .cloned()
                .collect(),
        })
        .collect();
    Board::new(groups)
}

fn group_by_priority(tickets: &[Ticket]) -> Board {
    let groups = PriorityLevel::ALL
        .iter()
        .map(|level| Group {
            label: level.label().to_string(),
            tickets: tickets
                .iter()
                .filter(|t| PriorityLevel::from_value(t.priority) == Some(*level))
                .cloned()
                .collect(),
        })
        .collect();
    Board::new(groups)
}

fn group_by_assignee(tickets: &[Ticket], users: &[User]) -> Board {
    let mut groups: Vec<Group> = Vec::new();
    let mut slot_by_name: HashMap<&str, usize> = HashMap::new();
    let mut slot_by_user = HashMap::new();

    for user in users {
        let slot = *slot_by_name.entry(user.name.as_str()).or_insert_with(|| {
            groups.push(Group::new(user.name.clone()));
            groups.len() - 1
        });
        slot_by_user.entry(&user.id).or_insert(slot);
    }

    for ticket in tickets {
        let slot = ticket
            .user_id
            .as_ref()
            .and_then(|id| slot_by_user.get(id));
        if let Some(&slot) = slot {
            groups[slot].tickets.push(ticket.clone());
        }
    }

    Board::new(groups)
}
