//! Event-driven driver around [`ViewState`].
//!
//! A session is a single actor: each event handler runs to completion
//! before the next one is accepted, which `&mut self` enforces.

use crate::{
    config::SessionConfig,
    domain::{Board, Dataset, DragEvent, GroupingMode, SortingMode},
    error::Result,
    state::ViewState,
    storage::{DataSource, PreferenceStore},
};
use tracing::{debug, error, info, warn};

pub struct BoardSession<P: PreferenceStore> {
    config: SessionConfig,
    prefs: P,
    state: ViewState,
}

impl<P: PreferenceStore> BoardSession<P> {
    /// Restores the grouping preference and loads the initial dataset.
    ///
    /// Neither step can fail the session: an unreadable or unknown
    /// preference falls back to the configured default, and a failed fetch
    /// leaves the board built from an empty dataset. The fetch is not
    /// retried.
    pub async fn start(config: SessionConfig, prefs: P, source: &dyn DataSource) -> Self {
        let grouping = restore_grouping(&config, &prefs).await;

        let dataset = match source.fetch().await {
            Ok(dataset) => dataset,
            Err(e) => {
                error!(error = %e, "failed to fetch board data; continuing with an empty board");
                Dataset::empty()
            }
        };

        info!(
            %grouping,
            tickets = dataset.tickets.len(),
            users = dataset.users.len(),
            "board session started"
        );

        let state = ViewState::new(dataset, grouping, config.default_sorting);
        Self {
            config,
            prefs,
            state,
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn board(&self) -> &Board {
        &self.state.board
    }

    pub fn preferences(&self) -> &P {
        &self.prefs
    }

    /// Regroups the board and remembers the choice.
    ///
    /// The in-memory state is updated even if writing the preference fails;
    /// the write error is returned to the caller.
    pub async fn set_grouping(&mut self, grouping: GroupingMode) -> Result<()> {
        if grouping == self.state.grouping {
            return Ok(());
        }

        self.state = self.state.with_grouping(grouping);
        self.prefs
            .set(&self.config.preference_key, grouping.as_str())
            .await
    }

    /// Resorts every group. Sorting is not persisted.
    pub fn set_sorting(&mut self, sorting: SortingMode) {
        self.state = self.state.with_sorting(sorting);
    }

    /// Handles a finished drag gesture
    pub fn on_drag_end(&mut self, event: &DragEvent) {
        self.state = self.state.reorder(event);
    }

    pub fn replace_dataset(&mut self, dataset: Dataset) {
        self.state = self.state.with_dataset(dataset);
    }

    pub fn toggle_display_menu(&mut self) {
        self.state = self.state.toggle_display_menu();
    }
}

async fn restore_grouping<P: PreferenceStore>(config: &SessionConfig, prefs: &P) -> GroupingMode {
    match prefs.get(&config.preference_key).await {
        Ok(Some(saved)) => match saved.parse::<GroupingMode>() {
            Ok(mode) => {
                debug!(%mode, "restored grouping preference");
                mode
            }
            Err(e) => {
                warn!(error = %e, "ignoring stored grouping preference");
                config.default_grouping
            }
        },
        Ok(None) => config.default_grouping,
        Err(e) => {
            warn!(error = %e, "could not read grouping preference");
            config.default_grouping
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::{DragLocation, Ticket, TicketStatus, User},
        error::BoardError,
        storage::{FilePreferenceStore, MemoryPreferenceStore, StaticDataSource},
    };
    use async_trait::async_trait;
    use tempfile::TempDir;

    struct FailingSource;

    #[async_trait]
    impl DataSource for FailingSource {
        async fn fetch(&self) -> Result<Dataset> {
            Err(BoardError::SourceUnavailable("connection refused".to_string()))
        }
    }

    fn source() -> StaticDataSource {
        StaticDataSource::new(Dataset::new(
            vec![
                Ticket::new("t1", "Write docs", TicketStatus::Todo, 3).with_assignee("usr-1"),
                Ticket::new("t2", "Fix login", TicketStatus::Todo, 4).with_assignee("usr-2"),
                Ticket::new("t3", "Release", TicketStatus::Done, 0).with_assignee("usr-1"),
            ],
            vec![User::new("usr-1", "Anoop"), User::new("usr-2", "Yogesh")],
        ))
    }

    #[tokio::test]
    async fn test_start_with_defaults() {
        let session = BoardSession::start(
            SessionConfig::default(),
            MemoryPreferenceStore::new(),
            &source(),
        )
        .await;

        assert_eq!(session.state().grouping, GroupingMode::Status);
        assert_eq!(session.state().sorting, SortingMode::None);
        assert_eq!(session.board().groups.len(), 5);
        assert_eq!(session.board().total_tickets(), 3);
    }

    #[tokio::test]
    async fn test_start_restores_saved_grouping() {
        let prefs = MemoryPreferenceStore::with_value("groupingOption", "user");

        let session = BoardSession::start(SessionConfig::default(), prefs, &source()).await;

        assert_eq!(session.state().grouping, GroupingMode::Assignee);
        assert_eq!(session.board().labels(), vec!["Anoop", "Yogesh"]);
    }

    #[tokio::test]
    async fn test_unknown_saved_grouping_falls_back() {
        let prefs = MemoryPreferenceStore::with_value("groupingOption", "colour");

        let session = BoardSession::start(SessionConfig::default(), prefs, &source()).await;

        assert_eq!(session.state().grouping, GroupingMode::Status);
    }

    #[tokio::test]
    async fn test_fetch_failure_yields_empty_board() {
        let session = BoardSession::start(
            SessionConfig::default(),
            MemoryPreferenceStore::new(),
            &FailingSource,
        )
        .await;

        assert!(session.state().dataset.is_empty());
        assert_eq!(session.board().groups.len(), 5);
        assert_eq!(session.board().total_tickets(), 0);
    }

    #[tokio::test]
    async fn test_fetch_failure_under_assignee_has_no_groups() {
        let prefs = MemoryPreferenceStore::with_value("groupingOption", "assignee");

        let session = BoardSession::start(SessionConfig::default(), prefs, &FailingSource).await;

        assert!(session.board().groups.is_empty());
    }

    #[tokio::test]
    async fn test_grouping_change_is_persisted() {
        let mut session = BoardSession::start(
            SessionConfig::default(),
            MemoryPreferenceStore::new(),
            &source(),
        )
        .await;

        session.set_grouping(GroupingMode::Priority).await.unwrap();

        assert_eq!(session.board().labels()[0], "No priority");
        assert_eq!(
            session
                .preferences()
                .get("groupingOption")
                .await
                .unwrap()
                .as_deref(),
            Some("priority")
        );
    }

    #[tokio::test]
    async fn test_sorting_change_is_not_persisted() {
        let mut session = BoardSession::start(
            SessionConfig::default(),
            MemoryPreferenceStore::new(),
            &source(),
        )
        .await;

        session.set_sorting(SortingMode::Priority);

        assert_eq!(session.state().sorting, SortingMode::Priority);
        let ids: Vec<&str> = session
            .board()
            .ticket_ids("Todo")
            .unwrap()
            .into_iter()
            .map(|id| id.as_str())
            .collect();
        assert_eq!(ids, vec!["t2", "t1"]);
        assert_eq!(session.preferences().get("groupingOption").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_drag_end_moves_card() {
        let mut session = BoardSession::start(
            SessionConfig::default(),
            MemoryPreferenceStore::new(),
            &source(),
        )
        .await;

        session.on_drag_end(&DragEvent::new(
            DragLocation::new("Todo", 0),
            Some(DragLocation::new("Done", 1)),
        ));

        assert_eq!(session.board().group("Todo").unwrap().len(), 1);
        assert_eq!(session.board().group("Done").unwrap().len(), 2);
        assert_eq!(session.board().total_tickets(), 3);

        let before = session.board().clone();
        session.on_drag_end(&DragEvent::cancelled(DragLocation::new("Done", 0)));
        assert_eq!(session.board(), &before);
    }

    #[tokio::test]
    async fn test_preference_survives_restart_with_file_store() {
        let temp_dir = TempDir::new().unwrap();

        let mut session = BoardSession::start(
            SessionConfig::default(),
            FilePreferenceStore::new(temp_dir.path()),
            &source(),
        )
        .await;
        session.set_grouping(GroupingMode::Assignee).await.unwrap();
        session.set_sorting(SortingMode::Title);

        let restarted = BoardSession::start(
            SessionConfig::default(),
            FilePreferenceStore::new(temp_dir.path()),
            &source(),
        )
        .await;

        assert_eq!(restarted.state().grouping, GroupingMode::Assignee);
        assert_eq!(restarted.state().sorting, SortingMode::None);
    }

    #[tokio::test]
    async fn test_custom_preference_key() {
        let config = SessionConfig {
            preference_key: "board.grouping".to_string(),
            ..SessionConfig::default()
        };
        let mut session =
            BoardSession::start(config, MemoryPreferenceStore::new(), &source()).await;

        session.set_grouping(GroupingMode::Priority).await.unwrap();

        assert_eq!(
            session
                .preferences()
                .get("board.grouping")
                .await
                .unwrap()
                .as_deref(),
            Some("priority")
        );
    }

    #[tokio::test]
    async fn test_replace_dataset_and_menu() {
        let mut session = BoardSession::start(
            SessionConfig::default(),
            MemoryPreferenceStore::new(),
            &FailingSource,
        )
        .await;

        session.replace_dataset(source().fetch().await.unwrap());
        session.toggle_display_menu();

        assert_eq!(session.board().total_tickets(), 3);
        assert!(session.state().display_menu_open);
    }
}
