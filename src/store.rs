//! Global Application State Store
//!
//! Uses Leptos reactive_stores. Holds the todo list plus the add/edit state
//! machine; components mutate through `store.write()` and one [`AppState`]
//! method, so every operation notifies subscribers and the screen re-renders
//! from the updated state.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::TodoItem;

/// Global application state
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// All todos, in insertion order (display order)
    pub todos: Vec<TodoItem>,
    /// Draft text for the single input shared between add and edit mode
    pub draft: String,
    /// Id of the todo being edited; `None` = add mode
    pub editing: Option<String>,
}

impl AppState {
    /// Appends a new todo with a fresh id and clears the draft.
    ///
    /// Blank or whitespace-only text is silently ignored. The text is stored
    /// as entered, untrimmed.
    pub fn add(&mut self, text: &str) {
        if text.trim().is_empty() {
            return;
        }
        self.todos.push(TodoItem::new(text));
        self.draft.clear();
    }

    /// Removes the todo with the given id; unknown ids are a no-op.
    pub fn remove(&mut self, id: &str) {
        self.todos.retain(|todo| todo.id != id);
    }

    /// Enters edit mode for one todo, seeding the draft with its current text.
    pub fn begin_edit(&mut self, id: &str, text: &str) {
        self.editing = Some(id.to_owned());
        self.draft = text.to_owned();
    }

    /// Mirrors the text input into the draft.
    pub fn update_draft(&mut self, text: &str) {
        self.draft = text.to_owned();
    }

    /// Replaces the edited todo's text with the draft and leaves edit mode.
    ///
    /// No-op when not in edit mode. The draft is applied verbatim, blank
    /// included — unlike `add`, no trim check here. If the target was removed
    /// while the modal was open, the list stays untouched but the mode still
    /// resets.
    pub fn commit_edit(&mut self) {
        let Some(id) = self.editing.take() else {
            return;
        };
        if let Some(todo) = self.todos.iter_mut().find(|todo| todo.id == id) {
            todo.text = self.draft.clone();
        }
        self.draft.clear();
    }

    /// Leaves edit mode without touching the todo list. The draft keeps
    /// whatever was typed.
    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

#[cfg(test)]
mod tests {
    use super::AppState;
    use std::collections::HashSet;

    #[test]
    fn test_add_appends_todo() {
        let mut state = AppState::default();
        state.update_draft("Buy milk");
        state.add("Buy milk");

        assert_eq!(state.todos.len(), 1);
        assert_eq!(state.todos[0].text, "Buy milk");
        assert!(!state.todos[0].id.is_empty());
        assert!(state.draft.is_empty());
    }

    #[test]
    fn test_add_blank_is_ignored() {
        let mut state = AppState::default();
        state.add("");
        state.add("   ");
        state.add("\t\n");

        assert!(state.todos.is_empty());
    }

    #[test]
    fn test_add_keeps_surrounding_whitespace() {
        let mut state = AppState::default();
        state.add("  Buy milk  ");

        assert_eq!(state.todos[0].text, "  Buy milk  ");
    }

    #[test]
    fn test_ids_unique_across_rapid_adds() {
        let mut state = AppState::default();
        for i in 0..100 {
            state.add(&format!("todo {i}"));
        }

        let ids: HashSet<_> = state.todos.iter().map(|t| t.id.clone()).collect();
        assert_eq!(ids.len(), 100);
    }

    #[test]
    fn test_remove_present_id() {
        let mut state = AppState::default();
        state.add("A");
        state.add("B");
        let id_a = state.todos[0].id.clone();

        state.remove(&id_a);

        assert_eq!(state.todos.len(), 1);
        assert!(state.todos.iter().all(|t| t.id != id_a));
    }

    #[test]
    fn test_remove_absent_id_is_noop() {
        let mut state = AppState::default();
        state.add("A");

        state.remove("no-such-id");

        assert_eq!(state.todos.len(), 1);
        assert_eq!(state.todos[0].text, "A");
    }

    #[test]
    fn test_order_preserved_after_remove() {
        let mut state = AppState::default();
        state.add("A");
        state.add("B");
        let id_a = state.todos[0].id.clone();
        let id_b = state.todos[1].id.clone();

        state.remove(&id_a);

        assert_eq!(state.todos.len(), 1);
        assert_eq!(state.todos[0].text, "B");
        assert_eq!(state.todos[0].id, id_b);
    }

    #[test]
    fn test_edit_flow_changes_only_target() {
        let mut state = AppState::default();
        state.add("A");
        state.add("B");
        let target = state.todos[1].clone();

        state.begin_edit(&target.id, &target.text);
        assert_eq!(state.editing.as_deref(), Some(target.id.as_str()));
        assert_eq!(state.draft, "B");

        state.update_draft("new text");
        state.commit_edit();

        assert_eq!(state.todos[0].text, "A");
        assert_eq!(state.todos[1].text, "new text");
        assert_eq!(state.todos[1].id, target.id);
        assert!(state.editing.is_none());
        assert!(state.draft.is_empty());
    }

    #[test]
    fn test_cancel_edit_leaves_list_unchanged() {
        let mut state = AppState::default();
        state.add("A");
        state.add("B");
        let before = state.todos.clone();
        let target = state.todos[0].clone();

        state.begin_edit(&target.id, &target.text);
        state.update_draft("scratch that");
        state.update_draft("scratch that too");
        state.cancel_edit();

        assert_eq!(state.todos, before);
        assert!(state.editing.is_none());
    }

    #[test]
    fn test_commit_without_active_edit_is_noop() {
        let mut state = AppState::default();
        state.add("A");
        state.update_draft("stray draft");
        let before = state.todos.clone();

        state.commit_edit();

        assert_eq!(state.todos, before);
        assert_eq!(state.draft, "stray draft");
    }

    #[test]
    fn test_commit_after_target_removed() {
        let mut state = AppState::default();
        state.add("A");
        let target = state.todos[0].clone();

        state.begin_edit(&target.id, &target.text);
        state.remove(&target.id);
        state.update_draft("edited after delete");
        state.commit_edit();

        assert!(state.todos.is_empty());
        assert!(state.editing.is_none());
        assert!(state.draft.is_empty());
    }

    #[test]
    fn test_commit_applies_blank_draft_verbatim() {
        let mut state = AppState::default();
        state.add("A");
        let target = state.todos[0].clone();

        state.begin_edit(&target.id, &target.text);
        state.update_draft("");
        state.commit_edit();

        assert_eq!(state.todos[0].text, "");
    }
}
