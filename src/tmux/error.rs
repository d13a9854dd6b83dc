use thiserror::Error;

/// Failures talking to tmux or the process tools around it
#[derive(Debug, Error)]
pub enum TmuxError {
    /// The binary could not be started at all
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// The binary ran and exited non-zero
    #[error("{program} {subcommand}: {stderr}")]
    CommandFailed {
        program: String,
        subcommand: String,
        stderr: String,
    },

    #[error("not running inside tmux (TMUX_PANE not set)")]
    NotInsideTmux,

    #[error("unexpected tmux output: {0}")]
    UnexpectedOutput(String),

    #[error("invalid window index {0:?}")]
    InvalidIndex(String),
}
