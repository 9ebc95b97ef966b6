//! Proptest strategies shared by the domain tests.

use crate::domain::{
    board::{DragEvent, DragLocation},
    ticket::{Ticket, TicketStatus},
    user::User,
};
use proptest::prelude::*;

pub(crate) fn arb_status() -> impl Strategy<Value = TicketStatus> {
    prop::sample::select(TicketStatus::ALL.to_vec())
}

/// Tickets with unique ids `t0..tN`, priorities a little outside 0..=4,
/// and assignees `usr-0..usr-3` or none
pub(crate) fn arb_tickets() -> impl Strategy<Value = Vec<Ticket>> {
    prop::collection::vec(
        (
            arb_status(),
            -2i64..8,
            "[a-zA-Z]{0,6}",
            prop::option::of(0usize..4),
        ),
        0..24,
    )
    .prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (status, priority, title, assignee))| {
                let ticket = Ticket::new(format!("t{i}"), title, status, priority);
                match assignee {
                    Some(u) => ticket.with_assignee(format!("usr-{u}")),
                    None => ticket,
                }
            })
            .collect()
    })
}

/// Up to three users `usr-0..usr-2`, names drawn from a small pool so
/// some repeat
pub(crate) fn arb_users() -> impl Strategy<Value = Vec<User>> {
    prop::collection::vec(prop::sample::select(vec!["Anoop", "Yogesh", "Shankar"]), 0..4)
        .prop_map(|names| {
            names
                .into_iter()
                .enumerate()
                .map(|(i, name)| User::new(format!("usr-{i}"), name))
                .collect()
        })
}

/// Drag events between status columns, including out-of-range indices and
/// drops outside any column
pub(crate) fn arb_status_drag() -> impl Strategy<Value = DragEvent> {
    (
        arb_status(),
        0usize..12,
        prop::option::of((arb_status(), 0usize..12)),
    )
        .prop_map(|(from, index, to)| {
            DragEvent::new(
                DragLocation::new(from.label(), index),
                to.map(|(status, index)| DragLocation::new(status.label(), index)),
            )
        })
}
