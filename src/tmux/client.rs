use tracing::debug;

use super::{CommandRunner, SystemRunner, TmuxContext, TmuxError, Window};

/// Environment variable tmux sets to the ID of the pane a process runs in
pub const PANE_ENV: &str = "TMUX_PANE";

const LIST_WINDOWS_FORMAT: &str = "#{window_index}|#{window_name}|#{pane_id}|#{pane_current_command}";

/// Pane ID from `TMUX_PANE`, if we are running inside tmux
pub fn current_pane() -> Option<String> {
    std::env::var(PANE_ENV).ok().filter(|p| !p.is_empty())
}

/// Client for interacting with tmux via CLI
pub struct TmuxClient<R = SystemRunner> {
    /// Path to tmux binary
    tmux_path: String,
    runner: R,
}

impl<R: CommandRunner> TmuxClient<R> {
    pub fn with_runner(tmux_path: impl Into<String>, runner: R) -> Self {
        Self {
            tmux_path: tmux_path.into(),
            runner,
        }
    }

    #[cfg(test)]
    pub fn runner(&self) -> &R {
        &self.runner
    }

    async fn run(&self, args: &[&str]) -> Result<String, TmuxError> {
        let args: Vec<String> = args.iter().map(|a| a.to_string()).collect();
        self.runner.output(&self.tmux_path, &args).await
    }

    /// List all windows in `session`
    pub async fn list_windows(&self, session: &str) -> Result<Vec<Window>, TmuxError> {
        let output = self
            .run(&["list-windows", "-t", session, "-F", LIST_WINDOWS_FORMAT])
            .await?;
        parse_windows(session, &output)
    }

    /// Resolve the session and window that `pane_id` belongs to
    pub async fn current_context(&self, pane_id: Option<&str>) -> Result<TmuxContext, TmuxError> {
        let pane_id = pane_id.ok_or(TmuxError::NotInsideTmux)?;

        let output = self
            .run(&[
                "display-message",
                "-p",
                "-t",
                pane_id,
                "#{session_name}|#{window_index}",
            ])
            .await?;

        let parts: Vec<&str> = output.trim().splitn(2, '|').collect();
        if parts.len() != 2 {
            return Err(TmuxError::UnexpectedOutput(output));
        }

        Ok(TmuxContext {
            session: parts[0].to_string(),
            window_index: parse_index(parts[1])?,
            pane_id: pane_id.to_string(),
        })
    }

    /// Capture the last `lines` lines of `target` (`session:index`)
    pub async fn capture_window(&self, target: &str, lines: usize) -> Result<String, TmuxError> {
        let start = format!("-{}", lines);
        self.run(&["capture-pane", "-p", "-t", target, "-S", &start])
            .await
    }

    /// Check whether a session exists
    pub async fn session_exists(&self, session: &str) -> bool {
        self.run(&["has-session", "-t", session]).await.is_ok()
    }

    /// PID of the process running in `pane_id`, if tmux reports one
    pub async fn pane_pid(&self, pane_id: &str) -> Option<String> {
        match self.run(&["list-panes", "-t", pane_id, "-F", "#{pane_pid}"]).await {
            Ok(output) => Some(output.trim().to_string()).filter(|pid| !pid.is_empty()),
            Err(e) => {
                debug!(pane_id, error = %e, "pane pid lookup failed");
                None
            }
        }
    }

    /// Names of the direct children of `pid`, via `pgrep -P <pid> -l`
    pub async fn child_process_names(&self, pid: &str) -> Vec<String> {
        let args = vec!["-P".to_string(), pid.to_string(), "-l".to_string()];
        let output = match self.runner.output("pgrep", &args).await {
            Ok(output) => output,
            // pgrep exits 1 when nothing matched
            Err(_) => return Vec::new(),
        };

        output
            .lines()
            .filter_map(|line| line.split_whitespace().nth(1))
            .map(str::to_string)
            .collect()
    }
}

/// Parse `list-windows` output in `index|name|pane_id|command` form
pub(crate) fn parse_windows(session: &str, output: &str) -> Result<Vec<Window>, TmuxError> {
    let mut windows = Vec::new();

    for line in output.trim().lines() {
        if line.is_empty() {
            continue;
        }
        let parts: Vec<&str> = line.splitn(4, '|').collect();
        if parts.len() < 4 {
            continue;
        }

        windows.push(Window {
            session: session.to_string(),
            index: parse_index(parts[0])?,
            name: parts[1].to_string(),
            pane_id: parts[2].to_string(),
            command: parts[3].to_string(),
        });
    }

    Ok(windows)
}

fn parse_index(field: &str) -> Result<u32, TmuxError> {
    field
        .trim()
        .parse()
        .map_err(|_| TmuxError::InvalidIndex(field.to_string()))
}
