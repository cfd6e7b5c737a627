//! Status filtering for the todo list.
//!
//! Pure helpers over the authoritative list. They never mutate their input
//! and always preserve the relative order of matching todos.

use crate::todos::Todo;

/// Specify which todos are visible in the list.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusFilter {
    All,
    Active,
    Completed,
}

impl StatusFilter {
    /// Display order of the filter links in the footer.
    pub const ORDER: [StatusFilter; 3] = [
        StatusFilter::All,
        StatusFilter::Active,
        StatusFilter::Completed,
    ];

    /// Return the display label for the filter link.
    ///
    pub fn label(&self) -> &'static str {
        match self {
            StatusFilter::All => "All",
            StatusFilter::Active => "Active",
            StatusFilter::Completed => "Completed",
        }
    }

    /// Return the next filter in display order, wrapping around.
    ///
    pub fn next(&self) -> StatusFilter {
        match self {
            StatusFilter::All => StatusFilter::Active,
            StatusFilter::Active => StatusFilter::Completed,
            StatusFilter::Completed => StatusFilter::All,
        }
    }

    /// Return the previous filter in display order, wrapping around.
    ///
    pub fn prev(&self) -> StatusFilter {
        match self {
            StatusFilter::All => StatusFilter::Completed,
            StatusFilter::Active => StatusFilter::All,
            StatusFilter::Completed => StatusFilter::Active,
        }
    }

    /// Return true when the todo is visible under the filter.
    ///
    fn matches(&self, todo: &Todo) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Active => !todo.completed,
            StatusFilter::Completed => todo.completed,
        }
    }
}

/// Return the todos visible under the filter, preserving relative order.
///
pub fn by_status(todos: &[Todo], filter: StatusFilter) -> Vec<Todo> {
    todos
        .iter()
        .filter(|todo| filter.matches(todo))
        .cloned()
        .collect()
}

/// Return the number of todos not yet completed.
///
pub fn active_count(todos: &[Todo]) -> usize {
    todos.iter().filter(|todo| !todo.completed).count()
}

/// Return true when at least one todo is completed.
///
pub fn has_completed(todos: &[Todo]) -> bool {
    todos.iter().any(|todo| todo.completed)
}

#[cfg(test)]
mod tests {
    use super::*;

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

    fn sample() -> Vec<Todo> {
        vec![
            todo(1, "a", false),
            todo(2, "b", true),
            todo(3, "c", false),
            todo(4, "d", true),
            todo(5, "e", false),
        ]
    }

    #[test]
    fn all_is_identity() {
        let todos = sample();
        assert_eq!(by_status(&todos, StatusFilter::All), todos);
    }

    #[test]
    fn active_and_completed_partition_the_list() {
        let todos = sample();
        let active = by_status(&todos, StatusFilter::Active);
        let completed = by_status(&todos, StatusFilter::Completed);

        assert!(active.iter().all(|t| !t.completed));
        assert!(completed.iter().all(|t| t.completed));
        assert_eq!(active.len() + completed.len(), todos.len());
        assert!(!active.iter().any(|t| completed.contains(t)));
    }

    #[test]
    fn relative_order_is_preserved() {
        let todos = sample();
        let active_ids: Vec<u64> = by_status(&todos, StatusFilter::Active)
            .iter()
            .map(|t| t.id)
            .collect();
        let completed_ids: Vec<u64> = by_status(&todos, StatusFilter::Completed)
            .iter()
            .map(|t| t.id)
            .collect();

        assert_eq!(active_ids, vec![1, 3, 5]);
        assert_eq!(completed_ids, vec![2, 4]);
    }

    #[test]
    fn filtering_is_idempotent_and_non_mutating() {
        let todos = sample();
        let before = todos.clone();
        let first = by_status(&todos, StatusFilter::Active);
        let second = by_status(&todos, StatusFilter::Active);

        assert_eq!(first, second);
        assert_eq!(todos, before);
    }

    #[test]
    fn empty_list_yields_empty_results() {
        assert!(by_status(&[], StatusFilter::All).is_empty());
        assert!(by_status(&[], StatusFilter::Active).is_empty());
        assert!(by_status(&[], StatusFilter::Completed).is_empty());
        assert_eq!(active_count(&[]), 0);
        assert!(!has_completed(&[]));
    }

    #[test]
    fn counts_match_the_two_todo_scenario() {
        let todos = vec![todo(1, "a", false), todo(2, "b", true)];
        let filtered = by_status(&todos, StatusFilter::Active);

        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, 1);
        assert_eq!(active_count(&todos), 1);
        assert!(has_completed(&todos));
    }

    #[test]
    fn cycling_wraps_in_both_directions() {
        let mut filter = StatusFilter::All;
        for _ in 0..StatusFilter::ORDER.len() {
            filter = filter.next();
        }
        assert_eq!(filter, StatusFilter::All);

        for expected in [StatusFilter::Completed, StatusFilter::Active, StatusFilter::All] {
            filter = filter.prev();
            assert_eq!(filter, expected);
        }
    }
}
