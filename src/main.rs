#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use anyhow::Context;
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use invite_core::{load_invitation, Invitation};

/// Invitation loaded at startup, before the window opens
static INVITATION: OnceLock<Invitation> = OnceLock::new();

/// Get the invitation loaded at startup (`None` before `main` stored it).
pub fn get_invitation() -> Option<Invitation> {
    INVITATION.get().cloned()
}

/// Wedding Invite - animated envelope invitation
#[derive(Parser, Debug)]
#[command(name = "wedding-invite")]
#[command(about = "Wedding Invite - open the envelope, read the card")]
struct Args {
    /// Invitation details file (default: user config, then bundled)
    #[arg(short, long)]
    details: Option<PathBuf>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    invite_core::logging::init(args.verbose)?;

    // A bad event date must stop us here, not show a meaningless countdown
    let (invitation, source) = load_invitation(args.details.as_deref())
        .context("Failed to load invitation details")?;

    let title = format!(
        "{} & {}",
        invitation.details.groom.full_name, invitation.details.bride.full_name
    );
    tracing::info!(
        "Starting invitation for '{}' ({}), details from {}",
        title,
        invitation.target().to_rfc3339(),
        source
    );

    let _ = INVITATION.set(invitation);

    // Configure desktop window
    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title(&title)
            .with_inner_size(dioxus::desktop::LogicalSize::new(700.0, 900.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);

    Ok(())
}
