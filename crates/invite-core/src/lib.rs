//! Wedding Invite Core Library
//!
//! The behaviour behind the animated envelope invitation.
//!
//! ## Overview
//!
//! An envelope opens when its wax seal is clicked, revealing a card with the
//! couple's details and a live countdown to the ceremony. Two independent
//! pieces carry all of the behaviour:
//!
//! - **Reveal sequencing** ([`reveal`]): the opened flag and the timed
//!   choreography (seal hidden, flap, content, "fully revealed")
//! - **Countdown** ([`countdown`], [`ticker`]): days/hours/minutes/seconds
//!   until the event, recomputed once per second and frozen at zero afterwards
//!
//! Everything else (names, parents, venue) is read-only data loaded once at
//! startup ([`config`]).
//!
//! ## Quick Start
//!
//! ```ignore
//! use std::sync::Arc;
//! use invite_core::{CountdownTicker, Invitation, SystemClock};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let invitation = Invitation::bundled()?;
//!     let ticker = CountdownTicker::start(invitation.target_utc(), Arc::new(SystemClock));
//!
//!     let mut rx = ticker.subscribe();
//!     while rx.changed().await.is_ok() {
//!         println!("{}", *rx.borrow());
//!     }
//!     Ok(())
//! }
//! ```

pub mod clock;
pub mod config;
pub mod countdown;
pub mod error;
pub mod logging;
pub mod reveal;
pub mod ticker;
pub mod types;

// Re-exports
pub use clock::{Clock, ManualClock, SystemClock};
pub use config::{load_invitation, load_invitation_from, DetailsSource, Invitation};
pub use countdown::{pad_unit, tick, CountdownValue};
pub use error::{InviteError, InviteResult};
pub use reveal::{
    Choreographer, ChoreographyConfig, Effect, Phase, RevealEvent, RevealSequencer, Step,
};
pub use ticker::{CountdownTicker, TICK_INTERVAL};
pub use types::*;
