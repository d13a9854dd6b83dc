use once_cell::sync::Lazy;
use regex::Regex;

use super::{CommandRunner, TmuxClient, Window};

/// Process names the assistant runs under
const ASSISTANT_COMMANDS: [&str; 2] = ["node", "claude"];

/// Shells whose children we inspect, in lookup order
const SHELLS: [&str; 6] = ["bash", "zsh", "sh", "fish", "tcsh", "ksh"];

/// The assistant's binary reports its version (e.g. "2.0.76") as the pane command
static RE_VERSION: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+\.\d+\.\d+$").unwrap());

/// Decides whether a window is running the assistant
pub struct AssistantDetector;

impl AssistantDetector {
    /// Classify from the pane command alone; `None` means a shell that needs a process check
    pub fn classify_command(command: &str) -> Option<bool> {
        if ASSISTANT_COMMANDS.contains(&command) || RE_VERSION.is_match(command) {
            return Some(true);
        }
        if SHELLS.contains(&command) {
            return None;
        }
        Some(false)
    }

    /// Full check, falling back to the shell's direct children
    pub async fn is_running<R: CommandRunner>(client: &TmuxClient<R>, window: &Window) -> bool {
        if let Some(verdict) = Self::classify_command(&window.command) {
            return verdict;
        }

        let Some(pid) = client.pane_pid(&window.pane_id).await else {
            return false;
        };

        client
            .child_process_names(&pid)
            .await
            .iter()
            .any(|name| ASSISTANT_COMMANDS.contains(&name.as_str()))
    }
}
