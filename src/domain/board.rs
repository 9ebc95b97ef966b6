use crate::domain::{
    sorting::{sort_tickets, SortingMode},
    ticket::{Ticket, TicketId},
};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// One column of the board: a label and the cards shown under it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    pub label: String,
    pub tickets: Vec<Ticket>,
}

impl Group {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            tickets: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.tickets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tickets.is_empty()
    }
}

/// Position of a card inside a column, as reported by the drag surface
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DragLocation {
    #[serde(rename = "droppableId")]
    pub group: String,
    pub index: usize,
}

impl DragLocation {
    pub fn new(group: impl Into<String>, index: usize) -> Self {
        Self {
            group: group.into(),
            index,
        }
    }
}

/// A completed drag gesture. `destination` is `None` when the card was
/// dropped outside any column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DragEvent {
    pub source: DragLocation,
    #[serde(default)]
    pub destination: Option<DragLocation>,
}

impl DragEvent {
    pub fn new(source: DragLocation, destination: Option<DragLocation>) -> Self {
        Self {
            source,
            destination,
        }
    }

    pub fn cancelled(source: DragLocation) -> Self {
        Self {
            source,
            destination: None,
        }
    }
}

/// Grouped and ordered tickets as currently displayed.
///
/// No ticket id appears in more than one position across all groups. The
/// group label doubles as the droppable container identity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    pub groups: Vec<Group>,
}

impl Board {
    pub fn new(groups: Vec<Group>) -> Self {
        Self { groups }
    }

    /// Group labels in display order
    pub fn labels(&self) -> Vec<&str> {
        self.groups.iter().map(|g| g.label.as_str()).collect()
    }

    pub fn group(&self, label: &str) -> Option<&Group> {
        self.groups.iter().find(|g| g.label == label)
    }

    /// Ticket ids of a group in display order, used to match dropped
    /// cards back to indices
    pub fn ticket_ids(&self, label: &str) -> Option<Vec<&TicketId>> {
        self.group(label)
            .map(|g| g.tickets.iter().map(|t| &t.id).collect())
    }

    pub fn total_tickets(&self) -> usize {
        self.groups.iter().map(Group::len).sum()
    }

    pub fn contains_ticket(&self, id: &TicketId) -> bool {
        self.groups
            .iter()
            .any(|g| g.tickets.iter().any(|t| &t.id == id))
    }

    /// Returns a copy of the board with every group reordered by `mode`
    pub fn sorted(&self, mode: SortingMode) -> Board {
        let groups = self
            .groups
            .iter()
            .map(|g| Group {
                label: g.label.clone(),
                tickets: sort_tickets(&g.tickets, mode),
            })
            .collect();
        Board { groups }
    }

    /// Returns the board after applying one drag gesture.
    ///
    /// See [`Board::apply_move`] for the rules.
    pub fn reorder(&self, event: &DragEvent) -> Board {
        let mut next = self.clone();
        next.apply_move(event);
        next
    }

    /// Moves one card in place and reports whether anything changed.
    ///
    /// The card is removed from `source.index` and inserted at
    /// `destination.index` of the destination group. When both locations
    /// name the same group the insertion index refers to the list after
    /// removal. A destination index past the end appends.
    ///
    /// The ticket's own `status`, `priority` and `user_id` are left as
    /// they were, so a later rebuild puts the card back where its fields
    /// say it belongs.
    ///
    /// Dropping outside any column, naming an unknown group, or pointing
    /// at a missing source card leaves the board untouched.
    pub fn apply_move(&mut self, event: &DragEvent) -> bool {
        let Some(destination) = &event.destination else {
            debug!(source = %event.source.group, "drop without destination ignored");
            return false;
        };

        let Some(from) = self.position(&event.source.group) else {
            warn!(group = %event.source.group, "drag from unknown group ignored");
            return false;
        };
        let Some(to) = self.position(&destination.group) else {
            warn!(group = %destination.group, "drop on unknown group ignored");
            return false;
        };
        if event.source.index >= self.groups[from].len() {
            warn!(
                group = %event.source.group,
                index = event.source.index,
                "drag from empty slot ignored"
            );
            return false;
        }

        let ticket = self.groups[from].tickets.remove(event.source.index);
        let target = &mut self.groups[to].tickets;
        let index = destination.index.min(target.len());

        debug!(
            ticket = %ticket.id,
            from = %event.source.group,
            to = %destination.group,
            index,
            "moved ticket"
        );
        target.insert(index, ticket);
        true
    }

    fn position(&self, label: &str) -> Option<usize> {
        self.groups.iter().position(|g| g.label == label)
    }
}
