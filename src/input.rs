//! Maps stdin lines to session [`Message`]s.

use pimon_core::Message;
use std::path::PathBuf;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tracing::{debug, warn};

/// Spawn a task that reads command lines from stdin and forwards typed
/// [`Message`]s on the returned channel.
///
/// Recognized commands: `p`/`pause`, `s`/`save` (optional destination path),
/// `q`/`quit`. The task ends when stdin closes; sampling continues without it.
pub fn spawn_reader() -> mpsc::Receiver<Message> {
    let (tx, rx) = mpsc::channel(8);

    tokio::spawn(async move {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();

        while let Ok(Some(line)) = lines.next_line().await {
            let Some(msg) = parse_command(&line) else {
                if !line.trim().is_empty() {
                    warn!("unknown command: '{}'", line.trim());
                }
                continue;
            };
            if tx.send(msg).await.is_err() {
                return; // session gone
            }
        }

        debug!("stdin closed; command input disabled");
    });

    rx
}

/// Parse one command line. `None` = unrecognized.
fn parse_command(line: &str) -> Option<Message> {
    let mut parts = line.split_whitespace();
    match parts.next()? {
        "p" | "pause" | "resume" => Some(Message::PauseToggled),
        "s" | "save" => Some(Message::ExportRequested(parts.next().map(PathBuf::from))),
        "q" | "quit" | "exit" => Some(Message::Shutdown),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pause_and_quit_commands() {
        assert_eq!(parse_command("p"), Some(Message::PauseToggled));
        assert_eq!(parse_command("pause"), Some(Message::PauseToggled));
        assert_eq!(parse_command("q"), Some(Message::Shutdown));
    }

    #[test]
    fn save_takes_an_optional_path() {
        assert_eq!(parse_command("s"), Some(Message::ExportRequested(None)));
        assert_eq!(
            parse_command("save /tmp/history.csv"),
            Some(Message::ExportRequested(Some(PathBuf::from(
                "/tmp/history.csv"
            ))))
        );
    }

    #[test]
    fn unknown_input_is_rejected() {
        assert_eq!(parse_command(""), None);
        assert_eq!(parse_command("bogus"), None);
    }
}
