//! Converter process execution.
//!
//! Runs the external converter as a child process with both output
//! streams captured. The call waits for the process to exit; there is no
//! timeout.

use std::path::Path;
use std::process::Stdio;
use std::time::Instant;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::process::Command;
use tracing::{debug, error, info};

#[cfg(windows)]
const CREATE_NO_WINDOW: u32 = 0x0800_0000;

/// Captured result of a finished converter process.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessOutput {
    /// Exit code, `None` if the process was terminated by a signal.
    pub exit_code: Option<i32>,
    /// Standard output (lossy UTF-8).
    pub stdout: String,
    /// Standard error (lossy UTF-8).
    pub stderr: String,
    /// Wall time until exit.
    pub duration_ms: u64,
}

/// Launches the converter for one source/destination pair.
#[async_trait]
pub trait ConverterRunner: Send + Sync + std::fmt::Debug {
    /// Runs `executable source destination` to completion.
    ///
    /// An `Err` means the process could not be started at all.
    async fn run(
        &self,
        executable: &Path,
        source: &Path,
        destination: &Path,
    ) -> std::io::Result<ProcessOutput>;
}

/// Runs the converter as a real child process.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessRunner;

impl ProcessRunner {
    /// Create a new process runner.
    pub fn new() -> Self {
        Self
    }

    /// Quoted command line, for logs only.
    fn display_command(executable: &Path, source: &Path, destination: &Path) -> String {
        format!(
            "\"{}\" \"{}\" \"{}\"",
            executable.display(),
            source.display(),
            destination.display()
        )
    }
}

#[async_trait]
impl ConverterRunner for ProcessRunner {
    async fn run(
        &self,
        executable: &Path,
        source: &Path,
        destination: &Path,
    ) -> std::io::Result<ProcessOutput> {
        let start = Instant::now();

        info!(
            command = %Self::display_command(executable, source, destination),
            "Launching converter"
        );

        // Each path is its own argv entry, so embedded spaces need no quoting.
        let mut cmd = Command::new(executable);
        cmd.arg(source)
            .arg(destination)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        #[cfg(windows)]
        cmd.creation_flags(CREATE_NO_WINDOW);

        let output = cmd.output().await.inspect_err(|e| {
            error!(
                executable = %executable.display(),
                error = %e,
                "Failed to start converter"
            );
        })?;

        let duration_ms = start.elapsed().as_millis() as u64;
        let stdout = String::from_utf8_lossy(&output.stdout).to_string();
        let stderr = String::from_utf8_lossy(&output.stderr).to_string();
        let exit_code = output.status.code();

        info!(
            exit_code = ?exit_code,
            duration_ms,
            stdout_bytes = output.stdout.len(),
            stderr_bytes = output.stderr.len(),
            "Converter exited"
        );
        if !stderr.trim().is_empty() {
            debug!(
                stderr = %stderr.chars().take(500).collect::<String>(),
                "Converter stderr"
            );
        }

        Ok(ProcessOutput {
            exit_code,
            stdout,
            stderr,
            duration_ms,
        })
    }
}
