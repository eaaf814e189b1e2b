//! UI Components
//!
//! Leptos components for the to-do list.

mod todo_form;
mod todo_item;
mod todo_list;

pub use todo_form::TodoForm;
pub use todo_item::TodoItem;
pub use todo_list::TodoList;

/// The one rule for every control: disabled exactly while its own
/// request is in flight. Checkbox, body input, delete button and the
/// creation field all route through this.
pub(crate) fn control_disabled(fetching: bool) -> bool {
    fetching
}

#[cfg(test)]
mod tests {
    use super::control_disabled;

    #[test]
    fn controls_disable_exactly_while_fetching() {
        assert!(control_disabled(true));
        assert!(!control_disabled(false));
    }
}
