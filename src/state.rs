//! Explicit view state and the pure transitions that drive it.
//!
//! Every transition takes the current state by reference and returns the
//! next one; nothing is mutated behind the caller's back.

use crate::domain::{group_tickets, Board, Dataset, DragEvent, GroupingMode, SortingMode};
use serde::Serialize;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewState {
    pub dataset: Dataset,
    pub grouping: GroupingMode,
    pub sorting: SortingMode,
    pub board: Board,
    pub display_menu_open: bool,
}

impl ViewState {
    /// Builds the board for `dataset` under the given modes
    pub fn new(dataset: Dataset, grouping: GroupingMode, sorting: SortingMode) -> Self {
        let board = build_board(&dataset, grouping, sorting);
        Self {
            dataset,
            grouping,
            sorting,
            board,
            display_menu_open: false,
        }
    }

    /// Regroups and resorts from scratch, discarding manual order
    pub fn rebuild(&self) -> Self {
        Self {
            board: build_board(&self.dataset, self.grouping, self.sorting),
            ..self.clone()
        }
    }

    /// Switches grouping. Selecting the active mode again changes nothing.
    pub fn with_grouping(&self, grouping: GroupingMode) -> Self {
        if grouping == self.grouping {
            return self.clone();
        }
        Self {
            grouping,
            ..self.clone()
        }
        .rebuild()
    }

    /// Switches sorting. Selecting the active mode again changes nothing.
    pub fn with_sorting(&self, sorting: SortingMode) -> Self {
        if sorting == self.sorting {
            return self.clone();
        }
        Self {
            sorting,
            ..self.clone()
        }
        .rebuild()
    }

    /// Replaces the underlying tickets and users
    pub fn with_dataset(&self, dataset: Dataset) -> Self {
        if dataset == self.dataset {
            return self.clone();
        }
        Self {
            dataset,
            ..self.clone()
        }
        .rebuild()
    }

    /// Applies one drag gesture without regrouping or resorting. The
    /// manual order lasts until the next mode or data change.
    pub fn reorder(&self, event: &DragEvent) -> Self {
        Self {
            board: self.board.reorder(event),
            ..self.clone()
        }
    }

    pub fn toggle_display_menu(&self) -> Self {
        Self {
            display_menu_open: !self.display_menu_open,
            ..self.clone()
        }
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new(Dataset::empty(), GroupingMode::default(), SortingMode::default())
    }
}

fn build_board(dataset: &Dataset, grouping: GroupingMode, sorting: SortingMode) -> Board {
    let board = group_tickets(&dataset.tickets, &dataset.users, grouping).sorted(sorting);
    debug!(
        %grouping,
        %sorting,
        groups = board.groups.len(),
        tickets = board.total_tickets(),
        "rebuilt board"
    );
    board
}
