//! Interactive chat loop for the crypto advisor
//!
//! Single-threaded read -> route -> print loop. The only blocking point is
//! console input between turns; the coin table is shared immutably across
//! every turn.

pub mod display;
pub mod input;
pub mod transcript;

use anyhow::Result;
use std::path::PathBuf;

use crate::advisor::{self, CoinTable};
use crate::repl::display::DisplayManager;
use crate::repl::input::InputHandler;
use crate::repl::transcript::Transcript;

/// Exit keywords, matched case-insensitively against a full trimmed line
fn is_exit(input: &str) -> bool {
    matches!(input.to_lowercase().as_str(), "exit" | "quit")
}

/// Chat session coordinator: input handling, routing, display, transcript
pub struct ChatSession {
    input_handler: InputHandler,
    display: DisplayManager,
    transcript: Option<Transcript>,
}

impl ChatSession {
    /// Create a session with persistent history under `~/.ecobuddy/`
    pub fn new(bot_name: &str) -> Result<Self> {
        let input_handler = match Self::history_path() {
            Some(path) => InputHandler::with_history(path)?,
            None => InputHandler::new()?,
        };
        let display = DisplayManager::new(bot_name);

        // Transcript is best-effort; a failure downgrades to a warning
        let transcript = match Transcript::open_today() {
            Ok(t) => Some(t),
            Err(e) => {
                display.show_warning(&format!("chat transcript disabled: {}", e));
                None
            }
        };

        Ok(ChatSession {
            input_handler,
            display,
            transcript,
        })
    }

    fn history_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".ecobuddy").join("history"))
    }

    /// Run the loop until an exit keyword or EOF
    pub fn run(&mut self, table: &CoinTable, version: &str) -> Result<()> {
        self.display.show_banner(version);
        self.log_system("session_start");

        loop {
            match self.input_handler.read_line() {
                Ok(Some(line)) if line.is_empty() => continue,
                Ok(Some(line)) => {
                    if is_exit(&line) {
                        self.display.show_goodbye();
                        break;
                    }

                    let reply = advisor::reply(table, &line);
                    self.log_turn(&line, &reply);
                    self.display.show_reply(&reply);
                }
                // EOF (Ctrl-D) exits gracefully
                Ok(None) => {
                    self.display.show_goodbye();
                    break;
                }
                Err(e) if e.to_string().contains("Interrupted") => {
                    println!("\nType 'exit' or 'quit' to leave");
                    continue;
                }
                Err(e) => return Err(e),
            }
        }

        self.log_system("session_end");
        self.input_handler.save_history()?;
        Ok(())
    }

    fn log_turn(&mut self, query: &str, reply: &str) {
        if let Some(transcript) = self.transcript.as_mut() {
            let _ = transcript.append_user(query);
            let _ = transcript.append_bot(reply);
        }
    }

    fn log_system(&mut self, msg: &str) {
        if let Some(transcript) = self.transcript.as_mut() {
            let _ = transcript.append_system(msg);
        }
    }
}
