//! History backends
//!
//! The navigator talks to session history through the [`History`] trait. The
//! browser client implements it on top of `window.history`; [`MemoryHistory`]
//! keeps the stack in memory for tests and non-browser hosts.

use super::error::NavigationResult;

/// Outcome of stepping back or forward
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HistoryStep {
    /// The history moved and the new entry is known now
    Moved(String),
    /// The history will report the new entry later through a pop event
    Pending,
    /// Already at the first (or last) entry
    AtEdge,
}

/// Session history stack
pub trait History {
    /// Path of the current entry
    fn current_path(&self) -> String;

    /// Add an entry after the current one, discarding any forward entries
    fn push(&mut self, path: &str) -> NavigationResult<()>;

    /// Overwrite the current entry
    fn replace(&mut self, path: &str) -> NavigationResult<()>;

    fn back(&mut self) -> NavigationResult<HistoryStep>;

    fn forward(&mut self) -> NavigationResult<HistoryStep>;
}

impl<H: History + ?Sized> History for Box<H> {
    fn current_path(&self) -> String {
        (**self).current_path()
    }

    fn push(&mut self, path: &str) -> NavigationResult<()> {
        (**self).push(path)
    }

    fn replace(&mut self, path: &str) -> NavigationResult<()> {
        (**self).replace(path)
    }

    fn back(&mut self) -> NavigationResult<HistoryStep> {
        (**self).back()
    }

    fn forward(&mut self) -> NavigationResult<HistoryStep> {
        (**self).forward()
    }
}

/// In-memory history stack
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryHistory {
    entries: Vec<String>,
    index: usize,
}

impl MemoryHistory {
    /// Start with a single entry
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            entries: vec![initial.into()],
            index: 0,
        }
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Position of the current entry
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for MemoryHistory {
    fn default() -> Self {
        Self::new("/")
    }
}

impl History for MemoryHistory {
    fn current_path(&self) -> String {
        self.entries[self.index].clone()
    }

    fn push(&mut self, path: &str) -> NavigationResult<()> {
        self.entries.truncate(self.index + 1);
        self.entries.push(path.to_string());
        self.index += 1;
        Ok(())
    }

    fn replace(&mut self, path: &str) -> NavigationResult<()> {
        self.entries[self.index] = path.to_string();
        Ok(())
    }

    fn back(&mut self) -> NavigationResult<HistoryStep> {
        if self.index == 0 {
            return Ok(HistoryStep::AtEdge);
        }
        self.index -= 1;
        Ok(HistoryStep::Moved(self.current_path()))
    }

    fn forward(&mut self) -> NavigationResult<HistoryStep> {
        if self.index + 1 >= self.entries.len() {
            return Ok(HistoryStep::AtEdge);
        }
        self.index += 1;
        Ok(HistoryStep::Moved(self.current_path()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_discards_forward_entries() {
        let mut history = MemoryHistory::new("/");
        history.push("/login").unwrap();
        history.push("/register").unwrap();
        assert_eq!(history.back().unwrap(), HistoryStep::Moved("/login".into()));

        history.push("/dashboard").unwrap();
        assert_eq!(history.entries(), ["/", "/login", "/dashboard"]);
        assert_eq!(history.forward().unwrap(), HistoryStep::AtEdge);
    }

    #[test]
    fn test_back_at_start() {
        let mut history = MemoryHistory::default();
        assert_eq!(history.back().unwrap(), HistoryStep::AtEdge);
        assert_eq!(history.current_path(), "/");
    }

    #[test]
    fn test_boxed_history() {
        let mut history: Box<dyn History> = Box::new(MemoryHistory::new("/"));
        history.push("/settings").unwrap();
        assert_eq!(history.back().unwrap(), HistoryStep::Moved("/".into()));
        assert_eq!(history.current_path(), "/");
    }

    #[test]
    fn test_replace_keeps_length() {
        let mut history = MemoryHistory::new("/login");
        history.replace("/dashboard").unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history.current_path(), "/dashboard");
    }
}
