//! Actor that runs a [`RevealSequencer`] against real time.
//!
//! The sequencer lives inside a single tokio task. `open` / `reseal` are
//! messages to that task, so the opened flag has exactly one writer and no
//! lock is needed. The current phase is published through a `watch` channel
//! and notifications through a `broadcast` channel.

use tokio::sync::{broadcast, mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time::Instant;

use super::{ChoreographyConfig, Effect, Phase, RevealSequencer, Step};

/// Capacity of the event channel
const EVENT_CHANNEL_CAPACITY: usize = 64;

/// Notifications emitted while the choreography runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealEvent {
    /// The envelope moved to a new phase
    PhaseChanged(Phase),
    /// Open cycle `cycle` completed its choreography
    FullyRevealed { cycle: u64 },
}

#[derive(Debug, Clone, Copy)]
enum Command {
    Open,
    Reseal,
}

/// Handle to a running reveal actor.
///
/// Dropping the handle stops the actor and any pending step.
pub struct Choreographer {
    commands: mpsc::UnboundedSender<Command>,
    phase: watch::Receiver<Phase>,
    events: broadcast::Sender<RevealEvent>,
    task: JoinHandle<()>,
}

impl Choreographer {
    /// Spawn the actor on the current tokio runtime.
    pub fn spawn(config: ChoreographyConfig) -> Self {
        let (commands, command_rx) = mpsc::unbounded_channel();
        let (phase_tx, phase) = watch::channel(Phase::Closed);
        let (events, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);

        let actor = Actor {
            sequencer: RevealSequencer::new(config),
            commands: command_rx,
            phase: phase_tx,
            events: events.clone(),
            pending: None,
        };
        let task = tokio::spawn(actor.run());

        Self {
            commands,
            phase,
            events,
            task,
        }
    }

    pub fn open(&self) {
        self.send(Command::Open);
    }

    pub fn reseal(&self) {
        self.send(Command::Reseal);
    }

    /// Last published phase.
    pub fn phase(&self) -> Phase {
        *self.phase.borrow()
    }

    pub fn watch_phase(&self) -> watch::Receiver<Phase> {
        self.phase.clone()
    }

    pub fn subscribe(&self) -> broadcast::Receiver<RevealEvent> {
        self.events.subscribe()
    }

    fn send(&self, command: Command) {
        if self.commands.send(command).is_err() {
            tracing::warn!(?command, "Reveal actor is gone, command dropped");
        }
    }
}

impl Drop for Choreographer {
    fn drop(&mut self) {
        self.task.abort();
    }
}

struct Pending {
    cycle: u64,
    step: Step,
    deadline: Instant,
}

struct Actor {
    sequencer: RevealSequencer,
    commands: mpsc::UnboundedReceiver<Command>,
    phase: watch::Sender<Phase>,
    events: broadcast::Sender<RevealEvent>,
    pending: Option<Pending>,
}

impl Actor {
    async fn run(mut self) {
        loop {
            let deadline = self.pending.as_ref().map(|p| p.deadline);
            let sleep = tokio::time::sleep_until(deadline.unwrap_or_else(Instant::now));

            tokio::select! {
                command = self.commands.recv() => {
                    let effects = match command {
                        Some(Command::Open) => self.sequencer.open(),
                        Some(Command::Reseal) => self.sequencer.reseal(),
                        None => break,
                    };
                    self.apply(effects);
                }
                _ = sleep, if deadline.is_some() => {
                    if let Some(due) = self.pending.take() {
                        let effects = self.sequencer.fire(due.cycle, due.step);
                        self.apply(effects);
                    }
                }
            }
        }
        tracing::debug!("Reveal actor stopped");
    }

    fn apply(&mut self, effects: Vec<Effect>) {
        // The sequencer has already transitioned; publish before its effects
        let phase = self.sequencer.phase();
        let changed = self.phase.send_if_modified(|current| {
            if *current == phase {
                false
            } else {
                *current = phase;
                true
            }
        });
        if changed {
            let _ = self.events.send(RevealEvent::PhaseChanged(phase));
        }

        for effect in effects {
            match effect {
                Effect::Schedule { cycle, step, after } => {
                    tracing::debug!(cycle, ?step, ?after, "Scheduling choreography step");
                    self.pending = Some(Pending {
                        cycle,
                        step,
                        deadline: Instant::now() + after,
                    });
                }
                Effect::CancelScheduled => {
                    self.pending = None;
                }
                Effect::NotifyRevealed { cycle } => {
                    let _ = self.events.send(RevealEvent::FullyRevealed { cycle });
                }
                visual => tracing::trace!(?visual, "Visual effect"),
            }
        }
    }
}
