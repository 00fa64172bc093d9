//! Per-day chat transcript
//!
//! Appends one line per turn to `~/.ecobuddy/chat/YYYY-MM-DD.md`.
//! Best-effort: a transcript failure must never interrupt the chat loop,
//! so callers log-and-continue on errors.

use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

pub struct Transcript {
    path: PathBuf,
}

impl Transcript {
    /// Open today's transcript under `~/.ecobuddy/chat/`
    pub fn open_today() -> Result<Self> {
        let home = dirs::home_dir().context("Could not determine home directory")?;
        Self::open_today_in(&home.join(".ecobuddy").join("chat"))
    }

    /// Open today's transcript under an explicit directory
    pub fn open_today_in(dir: &Path) -> Result<Self> {
        std::fs::create_dir_all(dir)?;
        let today = chrono::Utc::now().format("%Y-%m-%d").to_string();
        Ok(Transcript {
            path: dir.join(format!("{today}.md")),
        })
    }

    pub fn append_system(&mut self, msg: &str) -> Result<()> {
        self.append("system", msg)
    }

    pub fn append_user(&mut self, msg: &str) -> Result<()> {
        self.append("user", msg)
    }

    pub fn append_bot(&mut self, msg: &str) -> Result<()> {
        self.append("bot", msg)
    }

    fn append(&mut self, role: &str, msg: &str) -> Result<()> {
        let mut f = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(
            f,
            "- {} [{}] {}",
            chrono::Utc::now().to_rfc3339(),
            role,
            msg.replace('\n', " ")
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_transcript_appends_turns() {
        let dir = TempDir::new().unwrap();
        let mut transcript = Transcript::open_today_in(dir.path()).unwrap();

        transcript.append_system("session_start").unwrap();
        transcript.append_user("list coins").unwrap();
        transcript.append_bot("Coins in my dataset: ...").unwrap();

        let contents = std::fs::read_to_string(&transcript.path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("[system] session_start"));
        assert!(lines[1].contains("[user] list coins"));
        assert!(lines[2].contains("[bot]"));
    }

    #[test]
    fn test_transcript_flattens_newlines() {
        let dir = TempDir::new().unwrap();
        let mut transcript = Transcript::open_today_in(dir.path()).unwrap();

        transcript.append_bot("line one\nline two").unwrap();

        let contents = std::fs::read_to_string(&transcript.path).unwrap();
        assert_eq!(contents.lines().count(), 1);
        assert!(contents.contains("line one line two"));
    }
}
