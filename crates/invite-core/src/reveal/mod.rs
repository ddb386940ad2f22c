//! Envelope reveal sequencing.
//!
//! [`RevealSequencer`] owns the opened flag and turns `open` / `reseal` into an
//! ordered list of [`Effect`]s. It never sleeps or spawns anything itself:
//! delays come back as [`Effect::Schedule`] and the caller feeds the matching
//! step back through [`RevealSequencer::fire`] once the delay has elapsed.
//!
//! ## Choreography
//!
//! | Offset from `open()` | Phase | Effects |
//! |----------------------|-------|---------|
//! | 0 | `FlapOpening` | seal hidden, decorations fade, flap starts |
//! | `flap` | `Revealing` | card content fades in |
//! | `flap + reveal` | `Revealed` | "fully revealed" notification |
//!
//! Every open cycle is numbered. Scheduled steps carry the cycle that armed
//! them, and a step from an abandoned cycle (one that was resealed before its
//! delay elapsed) is ignored. The notification is therefore emitted exactly
//! once per open cycle.

mod choreographer;

use std::time::Duration;

pub use choreographer::{Choreographer, RevealEvent};

/// Delays between the choreography steps.
///
/// Fixed at startup; not user-adjustable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChoreographyConfig {
    /// Flap animation length; content reveal waits for it
    pub flap: Duration,
    /// Content fade-in length; the notification waits for it
    pub reveal: Duration,
}

impl ChoreographyConfig {
    /// Time from `open()` until the "fully revealed" notification.
    pub fn total(&self) -> Duration {
        self.flap + self.reveal
    }
}

impl Default for ChoreographyConfig {
    fn default() -> Self {
        Self {
            flap: Duration::from_millis(600),
            reveal: Duration::from_millis(600),
        }
    }
}

/// Where the envelope is in its choreography.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Sealed; the initial state
    #[default]
    Closed,
    /// Flap is opening, content not yet shown
    FlapOpening,
    /// Content is fading in
    Revealing,
    /// Choreography complete
    Revealed,
}

impl Phase {
    /// The `opened` flag seen by the presentation layer.
    pub fn is_opened(self) -> bool {
        !matches!(self, Phase::Closed)
    }

    /// The wax seal control is only offered while closed.
    pub fn seal_visible(self) -> bool {
        matches!(self, Phase::Closed)
    }

    /// Floral corner decorations show only on the sealed envelope.
    pub fn decorations_visible(self) -> bool {
        matches!(self, Phase::Closed)
    }

    pub fn content_visible(self) -> bool {
        matches!(self, Phase::Revealing | Phase::Revealed)
    }

    pub fn label(self) -> &'static str {
        match self {
            Phase::Closed => "closed",
            Phase::FlapOpening => "flap opening",
            Phase::Revealing => "revealing",
            Phase::Revealed => "revealed",
        }
    }
}

/// Delayed step of the choreography.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Flap finished; start showing the card
    RevealContent,
    /// Card finished fading in
    Settle,
}

/// Output of a sequencer transition, to be carried out in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    HideSeal,
    ShowSeal,
    HideDecorations,
    ShowDecorations,
    StartFlap,
    CloseFlap,
    RevealContent,
    HideContent,
    /// Call [`RevealSequencer::fire`] with `cycle` and `step` after `after`
    Schedule {
        cycle: u64,
        step: Step,
        after: Duration,
    },
    /// Drop any step still waiting to fire
    CancelScheduled,
    /// The open cycle `cycle` has fully revealed
    NotifyRevealed { cycle: u64 },
}

/// Open/closed state machine with its timed choreography.
#[derive(Debug, Clone)]
pub struct RevealSequencer {
    phase: Phase,
    cycle: u64,
    config: ChoreographyConfig,
}

impl RevealSequencer {
    pub fn new(config: ChoreographyConfig) -> Self {
        Self {
            phase: Phase::Closed,
            cycle: 0,
            config,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_opened(&self) -> bool {
        self.phase.is_opened()
    }

    /// Number of the current (or most recent) open cycle; 0 before the first open.
    pub fn cycle(&self) -> u64 {
        self.cycle
    }

    pub fn config(&self) -> &ChoreographyConfig {
        &self.config
    }

    /// Open the envelope. A no-op while already open.
    pub fn open(&mut self) -> Vec<Effect> {
        if self.is_opened() {
            tracing::debug!(
                cycle = self.cycle,
                phase = self.phase.label(),
                "Open ignored, already open"
            );
            return Vec::new();
        }

        self.cycle += 1;
        self.phase = Phase::FlapOpening;
        tracing::info!(cycle = self.cycle, "Envelope opened");

        vec![
            Effect::HideSeal,
            Effect::HideDecorations,
            Effect::StartFlap,
            Effect::Schedule {
                cycle: self.cycle,
                step: Step::RevealContent,
                after: self.config.flap,
            },
        ]
    }

    /// Seal the envelope again, abandoning any choreography in flight.
    pub fn reseal(&mut self) -> Vec<Effect> {
        if !self.is_opened() {
            return Vec::new();
        }

        tracing::info!(cycle = self.cycle, from = self.phase.label(), "Envelope resealed");
        self.phase = Phase::Closed;

        vec![
            Effect::CancelScheduled,
            Effect::HideContent,
            Effect::CloseFlap,
            Effect::ShowDecorations,
            Effect::ShowSeal,
        ]
    }

    /// Advance the choreography when a scheduled step comes due.
    ///
    /// Steps from an earlier cycle, or that no longer match the phase, are
    /// dropped.
    pub fn fire(&mut self, cycle: u64, step: Step) -> Vec<Effect> {
        if cycle != self.cycle {
            tracing::debug!(cycle, current = self.cycle, ?step, "Dropping step from stale cycle");
            return Vec::new();
        }

        match (self.phase, step) {
            (Phase::FlapOpening, Step::RevealContent) => {
                self.phase = Phase::Revealing;
                vec![
                    Effect::RevealContent,
                    Effect::Schedule {
                        cycle,
                        step: Step::Settle,
                        after: self.config.reveal,
                    },
                ]
            }
            (Phase::Revealing, Step::Settle) => {
                self.phase = Phase::Revealed;
                tracing::info!(cycle, "Invitation fully revealed");
                vec![Effect::NotifyRevealed { cycle }]
            }
            (phase, step) => {
                tracing::debug!(
                    cycle,
                    phase = phase.label(),
                    ?step,
                    "Step does not apply, ignoring"
                );
                Vec::new()
            }
        }
    }
}

impl Default for RevealSequencer {
    fn default() -> Self {
        Self::new(ChoreographyConfig::default())
    }
}
