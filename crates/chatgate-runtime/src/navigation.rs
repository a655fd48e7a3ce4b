//! Navigation collaborator
//!
//! Redirects always go through [`Navigator::replace`] so that going back
//! never lands on a view the visitor was refused.

use parking_lot::Mutex;

/// Performs navigation on behalf of the shell
pub trait Navigator: Send + Sync {
    /// Add a history entry
    fn push(&self, path: &str);

    /// Overwrite the current history entry
    fn replace(&self, path: &str);

    /// Path of the current entry
    fn current(&self) -> String;
}

/// In-memory history stack
#[derive(Debug)]
pub struct MemoryHistory {
    entries: Mutex<Vec<String>>,
}

impl MemoryHistory {
    /// Start with a single entry at `initial`
    pub fn new(initial: &str) -> Self {
        MemoryHistory {
            entries: Mutex::new(vec![initial.to_string()]),
        }
    }

    /// Go back one entry. Returns the new current path, or `None` at the root.
    pub fn back(&self) -> Option<String> {
        let mut entries = self.entries.lock();
        if entries.len() <= 1 {
            return None;
        }
        entries.pop();
        entries.last().cloned()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }

    /// Snapshot of every entry, oldest first
    pub fn entries(&self) -> Vec<String> {
        self.entries.lock().clone()
    }
}

impl Default for MemoryHistory {
    fn default() -> Self {
        Self::new("")
    }
}

impl Navigator for MemoryHistory {
    fn push(&self, path: &str) {
        self.entries.lock().push(path.to_string());
    }

    fn replace(&self, path: &str) {
        let mut entries = self.entries.lock();
        match entries.last_mut() {
            Some(last) => *last = path.to_string(),
            None => entries.push(path.to_string()),
        }
    }

    fn current(&self) -> String {
        self.entries.lock().last().cloned().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[derive(Clone, Debug)]
    enum Step {
        Push(String),
        Replace(String),
        Back,
    }

    fn any_step() -> impl Strategy<Value = Step> {
        prop_oneof![
            "[a-z]{0,4}".prop_map(Step::Push),
            "[a-z]{0,4}".prop_map(Step::Replace),
            Just(Step::Back),
        ]
    }

    #[test]
    fn test_push_and_back() {
        let history = MemoryHistory::new("");
        history.push("room");
        assert_eq!(history.current(), "room");
        assert_eq!(history.back(), Some(String::new()));
        assert_eq!(history.back(), None);
    }

    #[test]
    fn test_replace_overwrites_current() {
        let history = MemoryHistory::new("");
        history.push("room");
        history.replace("");

        assert_eq!(history.entries(), vec![String::new(), String::new()]);
        assert_eq!(history.back(), Some(String::new()));
        assert!(!history.entries().contains(&"room".to_string()));
    }

    proptest! {
        #[test]
        fn prop_history_matches_stack_model(steps in proptest::collection::vec(any_step(), 0..32)) {
            let history = MemoryHistory::new("");
            let mut model = vec![String::new()];

            for step in steps {
                match step {
                    Step::Push(path) => {
                        history.push(&path);
                        model.push(path);
                    }
                    Step::Replace(path) => {
                        history.replace(&path);
                        *model.last_mut().unwrap() = path;
                    }
                    Step::Back => {
                        let expected = if model.len() > 1 {
                            model.pop();
                            model.last().cloned()
                        } else {
                            None
                        };
                        prop_assert_eq!(history.back(), expected);
                    }
                }
                prop_assert!(!history.is_empty());
                prop_assert_eq!(history.current(), model.last().cloned().unwrap());
            }
            prop_assert_eq!(history.entries(), model);
        }

        #[test]
        fn prop_replace_never_grows_history(
            pushes in proptest::collection::vec("[a-z]{1,4}", 0..8),
            target in "[a-z]{0,4}",
        ) {
            let history = MemoryHistory::new("");
            for path in &pushes {
                history.push(path);
            }
            let before = history.len();
            history.replace(&target);

            prop_assert_eq!(history.len(), before);
            prop_assert_eq!(history.current(), target);
        }
    }
}
