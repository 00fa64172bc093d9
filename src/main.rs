//! EcoBuddy - Main CLI Entry Point

use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use ecobuddy::advisor::{queries, CoinTable};
use ecobuddy::cli::{Args, Commands};
use ecobuddy::config::Config;
use ecobuddy::doctor::Doctor;
use ecobuddy::repl::ChatSession;
use ecobuddy::triage::{self, CandleClassifier};

const VERSION: &str = env!("CARGO_PKG_VERSION");

fn main() -> Result<()> {
    let args = Args::parse();
    let config = Config::load()?;

    match &args.command {
        // No subcommand starts the interactive advisor
        Some(Commands::Chat) | None => run_chat(&config)?,
        Some(Commands::Classify { image, model }) => {
            run_classify(&args, &config, image, model.as_deref())?
        }
        Some(Commands::Coins) => {
            let table = CoinTable::builtin();
            println!("{}", queries::list_coins(&table));
        }
        Some(Commands::Doctor) => run_doctor(&config),
        Some(Commands::Config) => show_config(&config)?,
    }

    Ok(())
}

fn run_chat(config: &Config) -> Result<()> {
    let table = CoinTable::builtin();
    let mut session = ChatSession::new(&config.chat.bot_name)?;
    session.run(&table, VERSION)
}

fn run_classify(
    args: &Args,
    config: &Config,
    image: &Path,
    model_override: Option<&Path>,
) -> Result<()> {
    let model_dir = model_override
        .map(Path::to_path_buf)
        .or_else(|| config.model_dir())
        .context("No model directory configured. Set [model] dir in the config or pass --model.")?;

    let spinner = start_spinner(args, "Loading garment model...");

    let classifier = CandleClassifier::load(&model_dir)
        .with_context(|| format!("Failed to load garment model from {}", model_dir.display()))?;

    if let Some(pb) = &spinner {
        pb.set_message("Classifying image...");
    }

    let outcome = triage::run(&classifier, image)
        .with_context(|| format!("Failed to classify {}", image.display()))?;

    if let Some(pb) = spinner {
        pb.finish_and_clear();
    }

    if args.verbosity().show_progress() {
        println!("Detected: {} ({})", outcome.category, outcome.condition);
        println!("{} {}", "Recommendation:".bold().green(), outcome.advice);
    } else {
        println!("{}", outcome.advice);
    }

    Ok(())
}

fn run_doctor(config: &Config) -> ! {
    let doctor = Doctor::new(config.model_dir());
    let report = doctor.run_checks();
    report.print();

    std::process::exit(if report.is_healthy() { 0 } else { 1 });
}

fn show_config(config: &Config) -> Result<()> {
    println!("\n{}", "EcoBuddy configuration".bold());
    println!("  Config file: {}", Config::config_path()?.display());
    println!("  Bot name:    {}", config.chat.bot_name);
    match config.model_dir() {
        Some(dir) => println!("  Model dir:   {}", dir.display()),
        None => println!("  Model dir:   (not configured)"),
    }
    println!();

    Ok(())
}

fn start_spinner(args: &Args, message: &str) -> Option<ProgressBar> {
    if !args.verbosity().show_progress() {
        return None;
    }

    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")
            .unwrap(),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    Some(pb)
}
