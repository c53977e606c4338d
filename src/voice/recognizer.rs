// SPDX-License-Identifier: GPL-3.0-only

//! Bridge to an external speech recognizer
//!
//! The recognizer is any command that prints one transcript per line on
//! stdout (for example a Vosk or whisper.cpp wrapper). It is run through
//! `sh -c` and killed when the subscription driving it is dropped.

use futures::SinkExt;
use futures::channel::mpsc::Sender;
use std::process::Stdio;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::process::Command;
use tracing::{debug, info, warn};

/// Recognizer lifecycle and output
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecognizerEvent {
    /// The recognizer process is running
    Listening,
    /// One line of recognized speech
    Transcript(String),
    /// The recognizer is not running; carries the reason
    Unavailable(String),
}

/// Run the recognizer and forward its events until it exits
///
/// Never returns once the recognizer has stopped, so the owning
/// subscription is not restarted in a loop.
pub async fn run(command: String, mut output: Sender<RecognizerEvent>) {
    let command = command.trim().to_string();
    if command.is_empty() {
        let _ = output
            .send(RecognizerEvent::Unavailable(
                "No speech recognizer configured".to_string(),
            ))
            .await;
        std::future::pending::<()>().await;
        return;
    }

    info!(command = %command, "Starting speech recognizer");
    let child = Command::new("sh")
        .arg("-c")
        .arg(&command)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .kill_on_drop(true)
        .spawn();

    let mut child = match child {
        Ok(child) => child,
        Err(e) => {
            warn!(error = %e, "Failed to start speech recognizer");
            let _ = output.send(RecognizerEvent::Unavailable(e.to_string())).await;
            std::future::pending::<()>().await;
            return;
        }
    };

    let Some(stdout) = child.stdout.take() else {
        let _ = output
            .send(RecognizerEvent::Unavailable("Recognizer has no stdout".to_string()))
            .await;
        std::future::pending::<()>().await;
        return;
    };

    let _ = output.send(RecognizerEvent::Listening).await;

    let mut lines = BufReader::new(stdout).lines();
    loop {
        match lines.next_line().await {
            Ok(Some(line)) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                debug!(transcript = line, "Recognizer transcript");
                if output
                    .send(RecognizerEvent::Transcript(line.to_string()))
                    .await
                    .is_err()
                {
                    // Subscription dropped
                    return;
                }
            }
            Ok(None) => break,
            Err(e) => {
                warn!(error = %e, "Failed reading recognizer output");
                break;
            }
        }
    }

    let reason = match child.wait().await {
        Ok(status) => format!("Recognizer exited ({})", status),
        Err(e) => e.to_string(),
    };
    info!(reason = %reason, "Speech recognizer stopped");
    let _ = output.send(RecognizerEvent::Unavailable(reason)).await;
    std::future::pending::<()>().await;
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::StreamExt;

    #[tokio::test]
    async fn forwards_each_non_empty_line() {
        let (tx, mut rx) = futures::channel::mpsc::channel(16);
        let task = tokio::spawn(run("printf 'take a photo\\n\\nrecord\\n'".to_string(), tx));

        assert_eq!(rx.next().await, Some(RecognizerEvent::Listening));
        assert_eq!(
            rx.next().await,
            Some(RecognizerEvent::Transcript("take a photo".to_string()))
        );
        assert_eq!(
            rx.next().await,
            Some(RecognizerEvent::Transcript("record".to_string()))
        );
        assert!(matches!(rx.next().await, Some(RecognizerEvent::Unavailable(_))));
        task.abort();
    }

    #[tokio::test]
    async fn empty_command_reports_unavailable() {
        let (tx, mut rx) = futures::channel::mpsc::channel(4);
        let task = tokio::spawn(run("   ".to_string(), tx));
        assert!(matches!(rx.next().await, Some(RecognizerEvent::Unavailable(_))));
        task.abort();
    }
}
