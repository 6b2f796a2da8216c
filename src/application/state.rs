//! Application state for the terminal job board.
//!
//! This module holds the view state of the job listing: the search filter,
//! the selected row and the current mode. Applied-job tracking is delegated
//! to the [`AppliedJobsStore`] the board is given.

use crate::application::AppliedJobsStore;
use crate::domain::{Job, JobCatalog, JobSearch};
use crate::infrastructure::SlotStorage;

/// Represents the current mode of the application.
///
/// The mode determines how key presses are interpreted and what the
/// status bar shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    /// Browsing the listing - arrow keys move selection, shortcuts available
    Normal,
    /// User is typing a search query
    Search,
    /// Help screen is displayed
    Help,
}

/// Main application state for the job board.
///
/// # Examples
///
/// ```
/// use hireconnect::application::{App, AppliedJobsStore};
/// use hireconnect::domain::JobCatalog;
/// use hireconnect::infrastructure::MemorySlotStorage;
///
/// let store = AppliedJobsStore::initialize(MemorySlotStorage::new());
/// let mut app = App::new(JobCatalog::mock(), store);
/// app.apply_selected();
/// assert_eq!(app.store.applied_count(), 1);
/// ```
#[derive(Debug)]
pub struct App<S: SlotStorage> {
    /// Postings shown on the board
    pub catalog: JobCatalog,
    /// Tracks which postings the user applied to
    pub store: AppliedJobsStore<S>,
    /// Current application mode
    pub mode: AppMode,
    /// Free-text filter over title, company and skills
    pub search_query: String,
    /// Selected row within the filtered listing
    pub selected: usize,
    /// Temporary status message to display
    pub status_message: Option<String>,
    /// Store revision at the last draw
    pub seen_revision: Option<u64>,
}

impl<S: SlotStorage> App<S> {
    pub fn new(catalog: JobCatalog, store: AppliedJobsStore<S>) -> Self {
        Self {
            catalog,
            store,
            mode: AppMode::Normal,
            search_query: String::new(),
            selected: 0,
            status_message: None,
            seen_revision: None,
        }
    }

    /// Jobs matching the current search query, in catalog order.
    pub fn filtered_jobs(&self) -> Vec<&Job> {
        JobSearch::filter(self.catalog.jobs(), &self.search_query)
    }

    /// The job under the cursor, if the filtered listing is not empty.
    pub fn selected_job(&self) -> Option<&Job> {
        self.filtered_jobs().get(self.selected).copied()
    }

    pub fn select_next(&mut self) {
        let count = self.filtered_jobs().len();
        if self.selected + 1 < count {
            self.selected += 1;
        }
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Applies to the selected job and reports the outcome in the status bar.
    pub fn apply_selected(&mut self) {
        let Some((id, title)) = self.selected_job().map(|job| (job.id, job.title)) else {
            self.status_message = Some("No job selected".to_string());
            return;
        };

        if self.store.is_applied(id) {
            self.status_message = Some(format!("Already applied to {}", title));
        } else {
            self.store.apply(id);
            self.status_message = Some(format!("Applied to {}", title));
        }
    }

    /// Switches to search mode, keeping any existing query for editing.
    pub fn start_search(&mut self) {
        self.mode = AppMode::Search;
        self.status_message = None;
    }

    pub fn push_search_char(&mut self, c: char) {
        self.search_query.push(c);
        self.clamp_selection();
    }

    pub fn pop_search_char(&mut self) {
        self.search_query.pop();
        self.clamp_selection();
    }

    /// Leaves search mode with the filter still applied.
    pub fn finish_search(&mut self) {
        self.mode = AppMode::Normal;
        let count = self.filtered_jobs().len();
        if !self.search_query.is_empty() {
            self.status_message = Some(format!("{} jobs found", count));
        }
    }

    /// Leaves search mode and clears the filter.
    pub fn cancel_search(&mut self) {
        self.mode = AppMode::Normal;
        self.search_query.clear();
        self.clamp_selection();
    }

    pub fn toggle_help(&mut self) {
        self.mode = match self.mode {
            AppMode::Help => AppMode::Normal,
            _ => AppMode::Help,
        };
    }

    /// Whether the store changed since the last call.
    ///
    /// Records the current revision, so a second call without an intervening
    /// apply returns `false`.
    pub fn needs_redraw(&mut self) -> bool {
        let revision = self.store.revision();
        let changed = self.seen_revision != Some(revision);
        self.seen_revision = Some(revision);
        changed
    }

    fn clamp_selection(&mut self) {
        let count = self.filtered_jobs().len();
        if count == 0 {
            self.selected = 0;
        } else if self.selected >= count {
            self.selected = count - 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::JobId;
    use crate::infrastructure::{MemorySlotStorage, APPLIED_JOBS_KEY};

    fn app() -> App<MemorySlotStorage> {
        App::new(JobCatalog::mock(), AppliedJobsStore::initialize(MemorySlotStorage::new()))
    }

    #[test]
    fn test_app_new() {
        let app = app();
        assert_eq!(app.mode, AppMode::Normal);
        assert!(app.search_query.is_empty());
        assert_eq!(app.selected, 0);
        assert!(app.status_message.is_none());
        assert_eq!(app.filtered_jobs().len(), 5);
        assert_eq!(app.selected_job().map(|job| job.id), Some(JobId(1)));
    }

    #[test]
    fn test_selection_stays_in_bounds() {
        let mut app = app();
        app.select_previous();
        assert_eq!(app.selected, 0);

        for _ in 0..10 {
            app.select_next();
        }
        assert_eq!(app.selected, 4);
    }

    #[test]
    fn test_apply_selected() {
        let mut app = app();
        app.select_next();
        app.apply_selected();

        assert!(app.store.is_applied(JobId(2)));
        assert_eq!(app.status_message.as_deref(), Some("Applied to Data Scientist - ML Engineer"));

        app.apply_selected();
        assert_eq!(app.store.applied_count(), 1);
        assert_eq!(
            app.status_message.as_deref(),
            Some("Already applied to Data Scientist - ML Engineer")
        );
    }

    #[test]
    fn test_apply_with_no_match() {
        let mut app = app();
        app.start_search();
        for c in "zzz".chars() {
            app.push_search_char(c);
        }
        app.finish_search();

        assert!(app.selected_job().is_none());
        app.apply_selected();
        assert_eq!(app.store.applied_count(), 0);
        assert_eq!(app.status_message.as_deref(), Some("No job selected"));
    }

    #[test]
    fn test_search_clamps_selection() {
        let mut app = app();
        for _ in 0..4 {
            app.select_next();
        }
        assert_eq!(app.selected, 4);

        app.start_search();
        assert_eq!(app.mode, AppMode::Search);
        for c in "aws".chars() {
            app.push_search_char(c);
        }
        assert_eq!(app.selected, 1);
        assert_eq!(app.selected_job().map(|job| job.id), Some(JobId(3)));

        app.finish_search();
        assert_eq!(app.mode, AppMode::Normal);
        assert_eq!(app.search_query, "aws");
        assert_eq!(app.status_message.as_deref(), Some("2 jobs found"));
    }

    #[test]
    fn test_cancel_search_clears_filter() {
        let mut app = app();
        app.start_search();
        app.push_search_char('x');
        app.pop_search_char();
        app.push_search_char('j');
        app.cancel_search();

        assert_eq!(app.mode, AppMode::Normal);
        assert!(app.search_query.is_empty());
        assert_eq!(app.filtered_jobs().len(), 5);
    }

    #[test]
    fn test_toggle_help() {
        let mut app = app();
        app.toggle_help();
        assert_eq!(app.mode, AppMode::Help);
        app.toggle_help();
        assert_eq!(app.mode, AppMode::Normal);
    }

    #[test]
    fn test_needs_redraw_tracks_store_revision() {
        let mut app = app();
        assert!(app.needs_redraw());
        assert!(!app.needs_redraw());

        app.apply_selected();
        assert!(app.needs_redraw());

        app.apply_selected();
        assert!(!app.needs_redraw());
    }

    #[test]
    fn test_board_reflects_persisted_applications() {
        let storage = MemorySlotStorage::with_slot(APPLIED_JOBS_KEY, "[3]");
        let app = App::new(JobCatalog::mock(), AppliedJobsStore::initialize(storage));
        assert!(app.store.is_applied(JobId(3)));
        assert_eq!(app.store.applied_count(), 1);
    }
}
