use crate::application::{App, AppMode};
use crate::infrastructure::SlotStorage;
use crossterm::event::{KeyCode, KeyModifiers};

pub struct InputHandler;

impl InputHandler {
    pub fn handle_key_event<S: SlotStorage>(app: &mut App<S>, key: KeyCode, modifiers: KeyModifiers) {
        match app.mode {
            AppMode::Normal => Self::handle_normal_mode(app, key, modifiers),
            AppMode::Search => Self::handle_search_mode(app, key),
            AppMode::Help => Self::handle_help_mode(app, key),
        }
    }

    fn handle_normal_mode<S: SlotStorage>(app: &mut App<S>, key: KeyCode, modifiers: KeyModifiers) {
        if modifiers.contains(KeyModifiers::CONTROL) {
            if key == KeyCode::Char('f') {
                app.start_search();
            }
            return;
        }

        app.status_message = None;

        match key {
            KeyCode::Up | KeyCode::Char('k') => app.select_previous(),
            KeyCode::Down | KeyCode::Char('j') => app.select_next(),
            KeyCode::Enter | KeyCode::Char('a') => app.apply_selected(),
            KeyCode::Char('/') => app.start_search(),
            KeyCode::Char('?') | KeyCode::F(1) => app.toggle_help(),
            _ => {}
        }
    }

    fn handle_search_mode<S: SlotStorage>(app: &mut App<S>, key: KeyCode) {
        match key {
            KeyCode::Enter => app.finish_search(),
            KeyCode::Esc => app.cancel_search(),
            KeyCode::Backspace => app.pop_search_char(),
            KeyCode::Char(c) => app.push_search_char(c),
            _ => {}
        }
    }

    fn handle_help_mode<S: SlotStorage>(app: &mut App<S>, key: KeyCode) {
        if matches!(key, KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?') | KeyCode::F(1)) {
            app.toggle_help();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::AppliedJobsStore;
    use crate::domain::{JobCatalog, JobId};
    use crate::infrastructure::MemorySlotStorage;

    fn app() -> App<MemorySlotStorage> {
        App::new(JobCatalog::mock(), AppliedJobsStore::initialize(MemorySlotStorage::new()))
    }

    fn press<S: SlotStorage>(app: &mut App<S>, key: KeyCode) {
        InputHandler::handle_key_event(app, key, KeyModifiers::NONE);
    }

    #[test]
    fn test_apply_key_binding() {
        let mut app = app();

        press(&mut app, KeyCode::Char('j'));
        press(&mut app, KeyCode::Char('j'));
        press(&mut app, KeyCode::Enter);
        assert!(app.store.is_applied(JobId(3)));

        press(&mut app, KeyCode::Up);
        press(&mut app, KeyCode::Char('a'));
        assert!(app.store.is_applied(JobId(2)));
        assert_eq!(app.store.applied_count(), 2);
    }

    #[test]
    fn test_search_key_binding() {
        let mut app = app();

        press(&mut app, KeyCode::Char('/'));
        assert_eq!(app.mode, AppMode::Search);

        // 'j' and 'a' are text while searching, not navigation or apply
        for c in "java".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        assert_eq!(app.search_query, "java");
        assert_eq!(app.store.applied_count(), 0);

        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.search_query, "jav");

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.mode, AppMode::Normal);
        assert_eq!(app.filtered_jobs().len(), 1);
    }

    #[test]
    fn test_ctrl_f_starts_search() {
        let mut app = app();
        InputHandler::handle_key_event(&mut app, KeyCode::Char('f'), KeyModifiers::CONTROL);
        assert_eq!(app.mode, AppMode::Search);
    }

    #[test]
    fn test_escape_clears_search() {
        let mut app = app();
        press(&mut app, KeyCode::Char('/'));
        press(&mut app, KeyCode::Char('x'));
        press(&mut app, KeyCode::Esc);

        assert_eq!(app.mode, AppMode::Normal);
        assert!(app.search_query.is_empty());
    }

    #[test]
    fn test_help_key_bindings() {
        let mut app = app();

        press(&mut app, KeyCode::F(1));
        assert_eq!(app.mode, AppMode::Help);

        // Ignored while help is open
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.store.applied_count(), 0);

        press(&mut app, KeyCode::Char('q'));
        assert_eq!(app.mode, AppMode::Normal);
    }
}
