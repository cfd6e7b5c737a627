use crate::app::NetworkEventSender;
use crate::events::network::Event as NetworkEvent;
use crate::state::filter::{self, StatusFilter};
use crate::state::notice::{Notice, NoticeState};
use crate::todos::{NewTodo, Todo};
use crate::ui::SPINNER_FRAME_COUNT;
use log::*;

/// Houses data representative of application state.
///
/// The state is the single owner of the authoritative todo list, the draft,
/// the loading flag, the selected filter, and the active notice. Rendering
/// reads snapshots; mutation happens only through the methods below.
///
pub struct State {
    net_sender: Option<NetworkEventSender>,
    user_id: Option<u64>,
    todos: Vec<Todo>,
    draft: NewTodo,
    loading: bool,
    status_filter: StatusFilter,
    notice: NoticeState,
    spinner_index: usize,
    show_log: bool,
}

/// Defines default application state.
///
impl Default for State {
    fn default() -> State {
        State {
            net_sender: None,
            user_id: None,
            todos: vec![],
            draft: NewTodo::empty(0),
            loading: false,
            status_filter: StatusFilter::All,
            notice: NoticeState::default(),
            spinner_index: 0,
            show_log: false,
        }
    }
}

impl State {
    /// Return new instance wired to the network event channel for the given
    /// user identity, if one is configured.
    ///
    pub fn new(net_sender: NetworkEventSender, user_id: Option<u64>) -> State {
        State {
            net_sender: Some(net_sender),
            user_id,
            draft: NewTodo::empty(user_id.unwrap_or(0)),
            ..State::default()
        }
    }

    /// Return true when a user identity is configured.
    ///
    pub fn is_authenticated(&self) -> bool {
        self.user_id.is_some()
    }

    /// Return the configured user identity, if any.
    ///
    pub fn user_id(&self) -> Option<u64> {
        self.user_id
    }

    /// Replace the todo list wholesale, preserving server order.
    ///
    pub fn set_todos(&mut self, todos: Vec<Todo>) {
        self.todos = todos;
    }

    /// Record a failed startup fetch.
    ///
    pub fn load_failed(&mut self) {
        self.notice.show(Notice::LoadFailed);
    }

    /// Append a character to the draft title. Editing the draft dismisses
    /// any active notice.
    ///
    pub fn push_draft_char(&mut self, c: char) {
        self.notice.dismiss();
        self.draft.title.push(c);
    }

    /// Remove the last character from the draft title. Editing the draft
    /// dismisses any active notice.
    ///
    pub fn pop_draft_char(&mut self) {
        self.notice.dismiss();
        self.draft.title.pop();
    }

    /// Request creation of the current draft. The loading flag signals the
    /// presentation layer to disable the input; it does not hard-block a
    /// second submission.
    ///
    pub fn submit(&mut self) {
        self.loading = true;
        self.notice.dismiss();
        let draft = self.draft.clone();
        match &self.net_sender {
            Some(sender) => {
                if sender.send(NetworkEvent::CreateTodo { draft }).is_err() {
                    error!("Failed to dispatch create request: network channel closed.");
                    self.loading = false;
                }
            }
            None => {
                warn!("Create request dropped: no network channel attached.");
                self.loading = false;
            }
        }
    }

    /// Record a successful creation, appending the server-returned record
    /// and resetting the draft.
    ///
    pub fn create_succeeded(&mut self, todo: Todo) {
        self.todos.push(todo);
        self.draft = NewTodo::empty(self.user_id.unwrap_or(0));
    }

    /// Record a failed creation. The draft and the todo list stay untouched.
    ///
    pub fn create_failed(&mut self) {
        self.notice.show(Notice::AddFailed);
    }

    /// Set whether a create request is in flight.
    ///
    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    /// Return true while a create request is in flight.
    ///
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Replace the selected status filter. The notice and the todo list are
    /// left untouched.
    ///
    pub fn set_status_filter(&mut self, status_filter: StatusFilter) {
        self.status_filter = status_filter;
    }

    /// Return the selected status filter.
    ///
    pub fn status_filter(&self) -> StatusFilter {
        self.status_filter
    }

    /// Dismiss the active notice explicitly.
    ///
    pub fn dismiss_notice(&mut self) {
        self.notice.dismiss();
    }

    /// Return the active notice, if any.
    ///
    pub fn notice(&self) -> Option<Notice> {
        self.notice.current()
    }

    /// Drive time-based updates: spinner animation while loading and notice
    /// expiry.
    ///
    pub fn tick(&mut self) {
        if self.loading {
            self.advance_spinner_index();
        }
        if self.notice.tick() {
            debug!("Notice deadline passed, dismissing.");
        }
    }

    /// Return the authoritative todo list.
    ///
    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    /// Return the draft todo.
    ///
    pub fn draft(&self) -> &NewTodo {
        &self.draft
    }

    /// Return the todos visible under the selected filter. Recomputed on
    /// demand, never cached.
    ///
    pub fn filtered_todos(&self) -> Vec<Todo> {
        filter::by_status(&self.todos, self.status_filter)
    }

    /// Return the number of todos not yet completed.
    ///
    pub fn active_count(&self) -> usize {
        filter::active_count(&self.todos)
    }

    /// Return true when at least one todo is completed.
    ///
    pub fn has_completed(&self) -> bool {
        filter::has_completed(&self.todos)
    }

    /// Move to the next spinner frame, wrapping around.
    ///
    pub fn advance_spinner_index(&mut self) -> &mut Self {
        self.spinner_index += 1;
        if self.spinner_index >= SPINNER_FRAME_COUNT {
            self.spinner_index = 0;
        }
        self
    }

    pub fn spinner_index(&self) -> usize {
        self.spinner_index
    }

    /// Toggle the log pane.
    ///
    pub fn toggle_log(&mut self) {
        self.show_log = !self.show_log;
    }

    pub fn is_log_shown(&self) -> bool {
        self.show_log
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fake::{Fake, Faker};
    use std::sync::mpsc;

    fn todo(id: u64, title: &str, completed: bool) -> Todo {
        Todo {
            id,
            user_id: 1,
            title: title.to_string(),
            completed,
            created_at: None,
            updated_at: None,
        }
    }

    fn state_with_channel() -> (State, mpsc::Receiver<NetworkEvent>) {
        let (tx, rx) = mpsc::channel();
        (State::new(tx, Some(1)), rx)
    }

    #[test]
    fn default_state_is_unauthenticated_and_empty() {
        let state = State::default();
        assert!(!state.is_authenticated());
        assert!(state.todos().is_empty());
        assert!(!state.is_loading());
        assert_eq!(state.status_filter(), StatusFilter::All);
        assert_eq!(state.notice(), None);
    }

    #[test]
    fn submit_sets_loading_clears_notice_and_dispatches_draft() {
        let (mut state, rx) = state_with_channel();
        state.load_failed();
        for c in "read".chars() {
            state.push_draft_char(c);
        }
        state.submit();

        assert!(state.is_loading());
        assert_eq!(state.notice(), None);
        match rx.try_recv() {
            Ok(NetworkEvent::CreateTodo { draft }) => {
                assert_eq!(draft.title, "read");
                assert_eq!(draft.user_id, 1);
                assert!(!draft.completed);
            }
            other => panic!("Expected a create event, got {:?}", other),
        }
    }

    #[test]
    fn submit_without_receiver_resets_loading() {
        let (tx, rx) = mpsc::channel();
        drop(rx);
        let mut state = State::new(tx, Some(1));
        state.submit();
        assert!(!state.is_loading());
    }

    #[test]
    fn successful_create_appends_record_and_resets_draft() {
        let (mut state, _rx) = state_with_channel();
        state.set_todos(vec![todo(1, "a", false)]);
        for c in "read".chars() {
            state.push_draft_char(c);
        }
        let created: Todo = Faker.fake();

        state.create_succeeded(created.clone());

        assert_eq!(state.todos().len(), 2);
        assert_eq!(state.todos()[1], created);
        assert!(state.draft().title.is_empty());
        assert!(!state.draft().completed);
    }

    #[test]
    fn failed_create_leaves_list_and_draft_untouched() {
        let (mut state, _rx) = state_with_channel();
        state.set_todos(vec![todo(1, "a", false)]);
        for c in "read".chars() {
            state.push_draft_char(c);
        }

        state.create_failed();

        assert_eq!(state.todos().len(), 1);
        assert_eq!(state.draft().title, "read");
        assert_eq!(state.notice(), Some(Notice::AddFailed));
    }

    #[test]
    fn failed_load_leaves_list_empty() {
        let (mut state, _rx) = state_with_channel();
        state.load_failed();

        assert!(state.todos().is_empty());
        assert_eq!(state.notice(), Some(Notice::LoadFailed));
    }

    #[test]
    fn editing_the_draft_dismisses_the_notice() {
        let (mut state, _rx) = state_with_channel();
        state.create_failed();
        state.push_draft_char('x');
        assert_eq!(state.notice(), None);

        state.create_failed();
        state.pop_draft_char();
        assert_eq!(state.notice(), None);
    }

    #[test]
    fn changing_the_filter_touches_nothing_else() {
        let (mut state, _rx) = state_with_channel();
        state.set_todos(vec![todo(1, "a", false), todo(2, "b", true)]);
        state.create_failed();

        state.set_status_filter(StatusFilter::Completed);

        assert_eq!(state.status_filter(), StatusFilter::Completed);
        assert_eq!(state.todos().len(), 2);
        assert_eq!(state.notice(), Some(Notice::AddFailed));
    }

    #[test]
    fn late_create_response_preserves_a_newer_filter_selection() {
        let (mut state, _rx) = state_with_channel();
        state.submit();
        // The user changes the filter while the create is still in flight.
        state.set_status_filter(StatusFilter::Completed);

        state.create_succeeded(todo(9, "late", false));
        state.set_loading(false);

        assert_eq!(state.status_filter(), StatusFilter::Completed);
        assert_eq!(state.todos().len(), 1);
        assert!(!state.is_loading());
    }

    #[test]
    fn derived_values_follow_the_two_todo_scenario() {
        let (mut state, _rx) = state_with_channel();
        state.set_todos(vec![todo(1, "a", false), todo(2, "b", true)]);
        state.set_status_filter(StatusFilter::Active);

        let filtered = state.filtered_todos();
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, 1);
        assert_eq!(state.active_count(), 1);
        assert!(state.has_completed());
    }

    #[test]
    fn tick_advances_spinner_only_while_loading() {
        let (mut state, _rx) = state_with_channel();
        state.tick();
        assert_eq!(state.spinner_index(), 0);

        state.set_loading(true);
        state.tick();
        assert_eq!(state.spinner_index(), 1);
    }

    #[test]
    fn advance_spinner_index_wraps() {
        let (mut state, _rx) = state_with_channel();
        for _ in 0..SPINNER_FRAME_COUNT {
            state.advance_spinner_index();
        }
        assert_eq!(state.spinner_index(), 0);
    }
}
