//! Wedding Invite CLI
//!
//! Terminal preview of the invitation: the card details, the live countdown
//! and the envelope choreography.
//!
//! ## Usage
//!
//! ```bash
//! # Print the invitation card
//! wedding-invite-cli show
//!
//! # Print the time remaining once
//! wedding-invite-cli countdown
//!
//! # Keep printing the countdown every second (Ctrl-C to stop)
//! wedding-invite-cli countdown --watch
//!
//! # Check a details file before shipping it
//! wedding-invite-cli validate ./details.json
//!
//! # Play the envelope choreography
//! wedding-invite-cli open
//! ```

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use invite_core::{
    load_invitation, pad_unit, Choreographer, ChoreographyConfig, CountdownTicker, CountdownValue,
    Invitation, RevealEvent, SystemClock, TICK_INTERVAL,
};
use tokio::time::MissedTickBehavior;

/// Wedding Invite - terminal preview
#[derive(Parser)]
#[command(name = "wedding-invite-cli")]
#[command(version = "0.1.0")]
#[command(about = "Wedding Invite - preview the invitation and countdown")]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Invitation details file (default: user config, then bundled)
    #[arg(short, long, global = true)]
    details: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the invitation card
    Show,

    /// Print the time remaining until the ceremony
    Countdown {
        /// Keep printing once per second
        #[arg(short, long)]
        watch: bool,

        /// Stop watching after this many updates
        #[arg(long, requires = "watch")]
        ticks: Option<u64>,
    },

    /// Load a details file and report the resolved event
    Validate {
        /// Path to the details JSON
        file: PathBuf,
    },

    /// Open the envelope and print each step of the reveal
    Open,
}

fn load(details: Option<&Path>) -> Result<Invitation> {
    let (invitation, source) =
        load_invitation(details).context("Failed to load invitation details")?;
    tracing::info!("Loaded invitation details from {}", source);
    Ok(invitation)
}

fn print_card(invitation: &Invitation) {
    let details = &invitation.details;
    let event = &details.event;

    println!("[{}]", details.seal_initials());
    println!();
    println!("  {}", details.groom.full_name);
    println!("      &");
    println!("  {}", details.bride.full_name);
    println!();
    println!("Son of:");
    println!("  {} & {}", details.groom.father, details.groom.mother);
    println!("Daughter of:");
    println!("  {} & {}", details.bride.father, details.bride.mother);
    println!();
    println!("Date:  {}", invitation.formatted_date());
    if let Some(ref time) = event.time {
        println!("Time:  {}", time);
    }
    println!("Venue: {}", event.venue.name);
    println!("       {}", event.venue.address);
    if let Some(ref link) = event.venue.map_link {
        println!("Map:   {}", link);
    }
    if let Some(ref url) = details.companion_app_url {
        println!("App:   {}", url);
    }
}

fn format_countdown(value: &CountdownValue) -> String {
    value
        .units()
        .iter()
        .map(|(label, amount)| format!("{} {}", pad_unit(*amount), label))
        .collect::<Vec<_>>()
        .join("  ")
}

async fn run_countdown(invitation: &Invitation, watch: bool, ticks: Option<u64>) -> Result<()> {
    let ticker = CountdownTicker::start(invitation.target_utc(), Arc::new(SystemClock));
    println!("{}", format_countdown(&ticker.current()));
    if !watch {
        return Ok(());
    }

    // Print on every second, even once the value has frozen at zero
    let mut interval = tokio::time::interval(TICK_INTERVAL);
    interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
    interval.tick().await;

    let mut printed = 0u64;
    loop {
        if ticks.is_some_and(|limit| printed >= limit) {
            break;
        }
        tokio::select! {
            _ = interval.tick() => {
                if !ticker.is_running() {
                    anyhow::bail!("Countdown ticker stopped");
                }
                println!("{}", format_countdown(&ticker.current()));
                printed += 1;
            }
            _ = tokio::signal::ctrl_c() => break,
        }
    }
    Ok(())
}

async fn run_open() -> Result<()> {
    let choreographer = Choreographer::spawn(ChoreographyConfig::default());
    let mut events = choreographer.subscribe();

    choreographer.open();
    loop {
        match events.recv().await.context("Reveal actor stopped")? {
            RevealEvent::PhaseChanged(phase) => println!("envelope: {}", phase.label()),
            RevealEvent::FullyRevealed { cycle } => {
                println!("fully revealed (cycle {})", cycle);
                break;
            }
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    invite_core::logging::init(cli.verbose)?;

    match cli.command {
        Commands::Show => {
            let invitation = load(cli.details.as_deref())?;
            print_card(&invitation);
        }

        Commands::Countdown { watch, ticks } => {
            let invitation = load(cli.details.as_deref())?;
            println!("Counting down to {}", invitation.formatted_date());
            run_countdown(&invitation, watch, ticks).await?;
        }

        Commands::Validate { file } => {
            let invitation = Invitation::from_path(&file)
                .with_context(|| format!("Invalid details file {}", file.display()))?;
            println!("OK: {}", file.display());
            println!("  Couple: {}", invitation.details.seal_initials());
            println!("  Date:   {}", invitation.formatted_date());
            println!("  Target: {}", invitation.target().to_rfc3339());
        }

        Commands::Open => {
            run_open().await?;
        }
    }

    Ok(())
}
