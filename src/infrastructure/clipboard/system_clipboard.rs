//! Platform clipboard backed by external tools.

use std::process::Stdio;

use async_trait::async_trait;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tracing::debug;

use crate::domain::ports::{Clipboard, ClipboardError};

/// A clipboard tool invocation that reads the text from stdin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClipboardCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl ClipboardCommand {
    pub fn new<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }
}

/// Writes to the system clipboard through the first installed tool.
///
/// # Candidates
///
/// - macOS: `pbcopy`
/// - Windows: `clip`
/// - Others: `wl-copy` (Wayland sessions only), `xclip`, `xsel`
///
/// A candidate that is not installed is skipped; a candidate that runs and
/// exits non-zero fails the write.
#[derive(Debug, Clone)]
pub struct SystemClipboard {
    commands: Vec<ClipboardCommand>,
}

impl SystemClipboard {
    /// Builds the candidate list for the current platform.
    pub fn detect() -> Self {
        let commands = if cfg!(target_os = "macos") {
            vec![ClipboardCommand::new("pbcopy", Vec::<String>::new())]
        } else if cfg!(windows) {
            vec![ClipboardCommand::new("clip", Vec::<String>::new())]
        } else {
            let mut commands = Vec::new();
            if std::env::var_os("WAYLAND_DISPLAY").is_some() {
                commands.push(ClipboardCommand::new("wl-copy", Vec::<String>::new()));
            }
            commands.push(ClipboardCommand::new("xclip", ["-selection", "clipboard"]));
            commands.push(ClipboardCommand::new("xsel", ["--clipboard", "--input"]));
            commands
        };

        Self::with_commands(commands)
    }

    pub fn with_commands(commands: Vec<ClipboardCommand>) -> Self {
        Self { commands }
    }

    pub fn commands(&self) -> &[ClipboardCommand] {
        &self.commands
    }

    async fn run(command: &ClipboardCommand, text: &str) -> Result<(), ClipboardError> {
        let mut child = Command::new(&command.program)
            .args(&command.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .kill_on_drop(true)
            .spawn()?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin.write_all(text.as_bytes()).await?;
            stdin.shutdown().await?;
        }

        let status = child.wait().await?;
        if !status.success() {
            return Err(ClipboardError::CommandFailed {
                command: command.program.clone(),
                status: status.to_string(),
            });
        }

        Ok(())
    }
}

impl Default for SystemClipboard {
    fn default() -> Self {
        Self::detect()
    }
}

#[async_trait]
impl Clipboard for SystemClipboard {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        for command in &self.commands {
            match Self::run(command, text).await {
                Err(ClipboardError::Io(err)) if err.kind() == std::io::ErrorKind::NotFound => {
                    debug!(program = %command.program, "Clipboard tool not installed, skipping");
                }
                other => return other,
            }
        }

        Err(ClipboardError::Unavailable)
    }
}
