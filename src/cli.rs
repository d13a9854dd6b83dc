use clap::Parser;

use crate::peek::PeekConfig;

#[derive(Parser, Debug)]
#[command(name = "tmux-peek", version)]
#[command(about = "Read recent output from tmux windows")]
#[command(after_help = "Examples:
  tmux-peek editor              Capture last 100 lines from 'editor' window
  tmux-peek -n 50 editor        Capture last 50 lines
  tmux-peek --all               Capture from all windows
  tmux-peek --all --detect      Only windows running the assistant
  tmux-peek --all -f 'api-*'    Only windows whose name matches the pattern")]
pub struct Args {
    /// Window name or index
    pub window: Option<String>,

    /// Number of lines to capture
    #[arg(short = 'n', long, default_value_t = 100)]
    pub lines: usize,

    /// Target session (default: current)
    #[arg(short, long)]
    pub session: Option<String>,

    /// Capture from all windows
    #[arg(short, long)]
    pub all: bool,

    /// Only capture from windows running the assistant (with --all)
    #[arg(short, long)]
    pub detect: bool,

    /// Only capture from windows whose name matches this glob (with --all)
    #[arg(short, long)]
    pub filter: Option<String>,

    /// List the session's windows as JSON instead of capturing
    #[arg(short, long)]
    pub list: bool,

    /// tmux binary to run
    #[arg(long, env = "TMUX_PEEK_TMUX", default_value = "tmux")]
    pub tmux_path: String,
}

impl Args {
    pub fn config(&self) -> PeekConfig {
        PeekConfig {
            lines: self.lines,
            session: self.session.clone().filter(|s| !s.is_empty()),
            window: self.window.clone(),
            all: self.all,
            detect: self.detect,
            filter: self.filter.clone(),
            list: self.list,
        }
    }
}
