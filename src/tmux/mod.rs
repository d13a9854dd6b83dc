mod client;
mod error;
mod heuristics;
mod pattern;
mod runner;

pub use client::{current_pane, TmuxClient};
pub use error::TmuxError;
pub use heuristics::AssistantDetector;
pub use pattern::match_pattern;
pub use runner::{CommandRunner, SystemRunner};

#[cfg(test)]
pub(crate) use runner::fake::FakeRunner;

use serde::Serialize;

/// A tmux window, as reported by one `list-windows` line
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Window {
    /// Session the window was listed from
    pub session: String,
    /// Window index (e.g., 0)
    pub index: u32,
    /// Window name
    pub name: String,
    /// Active pane ID (e.g., "%3")
    pub pane_id: String,
    /// Foreground command of the active pane
    pub command: String,
}

impl Window {
    /// `session:index` target for tmux commands
    pub fn target(&self) -> String {
        format!("{}:{}", self.session, self.index)
    }

    /// True when `key` is this window's name or its index
    pub fn matches(&self, key: &str) -> bool {
        self.name == key || self.index.to_string() == key
    }
}

/// Where the invoking pane lives
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TmuxContext {
    pub session: String,
    pub window_index: u32,
    pub pane_id: String,
}
