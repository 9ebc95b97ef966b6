use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a ticket as issued by the data source (e.g., CAM-1)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TicketId(String);

impl TicketId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the string representation
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for TicketId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl fmt::Display for TicketId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Workflow status of a ticket
///
/// The serialized names follow the data source, which spells the third
/// status as `"In progress"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TicketStatus {
    Backlog,
    Todo,
    #[serde(rename = "In progress", alias = "InProgress")]
    InProgress,
    Done,
    Cancelled,
}

impl TicketStatus {
    /// Fixed column order used when grouping by status
    pub const ALL: [TicketStatus; 5] = [
        Self::Backlog,
        Self::Todo,
        Self::InProgress,
        Self::Done,
        Self::Cancelled,
    ];

    /// Group label for this status
    pub fn label(&self) -> &'static str {
        match self {
            Self::Backlog => "Backlog",
            Self::Todo => "Todo",
            Self::InProgress => "In progress",
            Self::Done => "Done",
            Self::Cancelled => "Cancelled",
        }
    }
}

impl fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A card on the board.
///
/// Tickets are immutable snapshots: moving a card between columns never
/// rewrites `status`, `priority` or `user_id`, so the next rebuild places
/// the card according to these fields again.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ticket {
    pub id: TicketId,
    pub title: String,
    #[serde(default)]
    pub tag: Vec<String>,
    pub status: TicketStatus,
    /// 0 = no priority, 1..=4 as listed by `PriorityLevel`. Values outside
    /// that range are kept so grouping can exclude them.
    pub priority: i64,
    #[serde(rename = "userId", default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<super::user::UserId>,
}

impl Ticket {
    /// Creates a ticket with no tags and no assignee
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        status: TicketStatus,
        priority: i64,
    ) -> Self {
        Self {
            id: TicketId::new(id),
            title: title.into(),
            tag: Vec::new(),
            status,
            priority,
            user_id: None,
        }
    }

    pub fn with_assignee(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = Some(super::user::UserId::new(user_id));
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tag = tags.into_iter().map(Into::into).collect();
        self
    }
}
