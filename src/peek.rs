use anyhow::{anyhow, bail, Context, Result};
use serde::Serialize;
use std::io::Write;
use tracing::debug;

use crate::tmux::{match_pattern, AssistantDetector, CommandRunner, TmuxClient, Window};

/// Options for one invocation
#[derive(Debug, Clone, Default)]
pub struct PeekConfig {
    /// Lines of scrollback to capture per window
    pub lines: usize,
    /// Explicit session; falls back to the current one inside tmux
    pub session: Option<String>,
    /// Window name or index for single-window mode
    pub window: Option<String>,
    pub all: bool,
    pub detect: bool,
    pub filter: Option<String>,
    pub list: bool,
}

/// One entry of `--list` output
#[derive(Debug, Serialize)]
struct WindowReport<'a> {
    #[serde(flatten)]
    window: &'a Window,
    assistant: bool,
}

/// Resolve the target session and run the requested mode.
///
/// Captured text goes to `out`; per-window problems go to `diag` and do not fail the run.
pub async fn run<R, O, E>(
    client: &TmuxClient<R>,
    config: &PeekConfig,
    pane: Option<&str>,
    out: &mut O,
    diag: &mut E,
) -> Result<()>
where
    R: CommandRunner,
    O: Write,
    E: Write,
{
    let (session, current_index) = match pane {
        Some(pane) => {
            let ctx = client
                .current_context(Some(pane))
                .await
                .context("failed to get tmux context")?;
            debug!(pane = %ctx.pane_id, session = %ctx.session, "inside tmux");
            let session = config.session.clone().unwrap_or(ctx.session);
            (session, Some(ctx.window_index))
        }
        None => {
            let session = config
                .session
                .clone()
                .ok_or_else(|| anyhow!("not inside tmux; use -s/--session to specify target session"))?;
            (session, None)
        }
    };
    debug!(%session, ?current_index, "resolved target session");

    if !client.session_exists(&session).await {
        bail!("session {:?} does not exist", session);
    }

    if config.list {
        return list_windows(client, &session, out).await;
    }

    if let Some(name) = config.window.as_deref().filter(|_| !config.all) {
        return capture_one(client, config, &session, name, out).await;
    }

    if !config.all {
        bail!("specify a window name or use --all to capture from all windows");
    }

    capture_all(client, config, &session, current_index, out, diag).await
}

async fn capture_one<R: CommandRunner, O: Write>(
    client: &TmuxClient<R>,
    config: &PeekConfig,
    session: &str,
    name: &str,
    out: &mut O,
) -> Result<()> {
    let windows = client
        .list_windows(session)
        .await
        .context("failed to list windows")?;

    let target = windows
        .iter()
        .find(|w| w.matches(name))
        .ok_or_else(|| anyhow!("window {:?} not found in session {:?}", name, session))?;

    let output = client
        .capture_window(&target.target(), config.lines)
        .await
        .context("failed to capture window")?;

    write!(out, "{}", output)?;
    Ok(())
}

async fn capture_all<R, O, E>(
    client: &TmuxClient<R>,
    config: &PeekConfig,
    session: &str,
    current_index: Option<u32>,
    out: &mut O,
    diag: &mut E,
) -> Result<()>
where
    R: CommandRunner,
    O: Write,
    E: Write,
{
    let windows = client
        .list_windows(session)
        .await
        .context("failed to list windows")?;

    let mut targets = Vec::new();
    for window in windows {
        if current_index == Some(window.index) {
            continue;
        }
        if let Some(pattern) = config.filter.as_deref() {
            if !match_pattern(&window.name, pattern) {
                continue;
            }
        }
        if config.detect && !AssistantDetector::is_running(client, &window).await {
            continue;
        }
        targets.push(window);
    }

    if targets.is_empty() {
        writeln!(diag, "No windows to capture")?;
        return Ok(());
    }

    let mut blocks = Vec::new();
    for window in &targets {
        let target = window.target();
        match client.capture_window(&target, config.lines).await {
            Ok(output) => {
                blocks.push(format!("=== {} ({}) ===\n{}", window.name, target, output));
            }
            Err(e) => {
                debug!(window = %window.name, error = %e, "capture failed");
                writeln!(diag, "Failed to capture {}: {}", window.name, e)?;
            }
        }
    }

    write!(out, "{}", blocks.join("\n"))?;
    Ok(())
}

async fn list_windows<R: CommandRunner, O: Write>(
    client: &TmuxClient<R>,
    session: &str,
    out: &mut O,
) -> Result<()> {
    let windows = client
        .list_windows(session)
        .await
        .context("failed to list windows")?;

    let mut reports = Vec::with_capacity(windows.len());
    for window in &windows {
        let assistant = AssistantDetector::is_running(client, window).await;
        reports.push(WindowReport { window, assistant });
    }

    serde_json::to_writer_pretty(&mut *out, &reports)?;
    writeln!(out)?;
    Ok(())
}
