//! Console output for the chat loop
//!
//! Banner, bot replies with a separator after each turn, and color-coded
//! status lines.

use colored::*;

/// Separator printed after every bot reply
const SEPARATOR_WIDTH: usize = 60;

/// Display manager for chat output
pub struct DisplayManager {
    bot_name: String,
}

impl DisplayManager {
    pub fn new(bot_name: &str) -> Self {
        DisplayManager {
            bot_name: bot_name.to_string(),
        }
    }

    /// Show welcome banner
    pub fn show_banner(&self, version: &str) {
        let width = 64;
        let top = "=".repeat(width).cyan();
        let title = format!("  {} {} - Rule-Based Crypto Advisor", self.bot_name, version);
        let info = "  Dataset: 4 coins | Mode: keyword routing";
        let bottom = "=".repeat(width).cyan();

        println!("\n{}", top);
        println!("{}", title.bold().cyan());
        println!("{}", info.dimmed());
        println!("{}\n", bottom);
        println!(
            "Type your questions (or {} / {} to leave)\n",
            "exit".green(),
            "quit".green()
        );
    }

    /// Print one bot reply followed by the separator line
    pub fn show_reply(&self, reply: &str) {
        println!("{} {}", format!("{}:", self.bot_name).bold().green(), reply);
        println!("{}", "-".repeat(SEPARATOR_WIDTH).dimmed());
    }

    /// Print the goodbye line
    pub fn show_goodbye(&self) {
        println!(
            "{} {}",
            format!("{}:", self.bot_name).bold().green(),
            "Goodbye! 🌟"
        );
    }

    /// Print a warning line
    pub fn show_warning(&self, message: &str) {
        eprintln!("{}: {}", "Warning".yellow(), message);
    }
}
