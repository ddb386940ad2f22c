//! Shared state for the invitation window.
//!
//! The loaded [`Invitation`] lives in a process-wide cell filled by `main`
//! before the window opens. The envelope's [`RevealState`] is provided to
//! every component via `use_context`.
//!
//! ## Usage
//!
//! ```ignore
//! // In App component
//! use_context_provider(|| RevealState::new(ChoreographyConfig::default()));
//!
//! // In child components
//! let reveal = use_reveal();
//! rsx! { button { onclick: move |_| reveal.open(), "Open" } }
//! ```

use dioxus::prelude::*;
use invite_core::{ChoreographyConfig, Effect, Invitation, Phase, RevealSequencer};

/// Get the invitation loaded at startup.
pub fn get_invitation() -> Option<Invitation> {
    crate::get_invitation()
}

/// Reactive handle to the envelope's reveal sequencer.
///
/// All mutation happens on the UI event loop: `open` / `reseal` run in event
/// handlers and scheduled steps run in tasks spawned on the same loop, so the
/// sequencer has a single writer.
#[derive(Clone, Copy, PartialEq)]
pub struct RevealState {
    sequencer: Signal<RevealSequencer>,
    pending: Signal<Option<Task>>,
    revealed_cycle: Signal<Option<u64>>,
}

impl RevealState {
    /// Create the state. Must be called while a component is rendering.
    pub fn new(config: ChoreographyConfig) -> Self {
        Self {
            sequencer: Signal::new(RevealSequencer::new(config)),
            pending: Signal::new(None),
            revealed_cycle: Signal::new(None),
        }
    }

    /// Current phase; subscribes the calling component.
    pub fn phase(&self) -> Phase {
        self.sequencer.read().phase()
    }

    pub fn config(&self) -> ChoreographyConfig {
        *self.sequencer.read().config()
    }

    /// Cycle of the most recent "fully revealed" notification.
    pub fn revealed_cycle(&self) -> Option<u64> {
        (self.revealed_cycle)()
    }

    pub fn open(self) {
        let mut sequencer = self.sequencer;
        let effects = sequencer.write().open();
        self.apply(effects);
    }

    pub fn reseal(self) {
        let mut sequencer = self.sequencer;
        let effects = sequencer.write().reseal();
        self.apply(effects);
    }

    fn apply(self, effects: Vec<Effect>) {
        let mut pending = self.pending;
        let mut revealed_cycle = self.revealed_cycle;

        for effect in effects {
            match effect {
                Effect::Schedule { cycle, step, after } => {
                    let task = spawn(async move {
                        tokio::time::sleep(after).await;
                        let mut sequencer = self.sequencer;
                        let mut pending = self.pending;
                        pending.set(None);
                        let next = sequencer.write().fire(cycle, step);
                        self.apply(next);
                    });
                    pending.set(Some(task));
                }
                Effect::CancelScheduled => {
                    if let Some(task) = pending.write().take() {
                        task.cancel();
                    }
                }
                Effect::NotifyRevealed { cycle } => {
                    tracing::info!(cycle, "Invitation card fully revealed");
                    revealed_cycle.set(Some(cycle));
                }
                // Visual effects are rendered from the phase
                _ => {}
            }
        }
    }
}

/// Hook to access the envelope's reveal state.
pub fn use_reveal() -> RevealState {
    use_context::<RevealState>()
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    /// Root that owns the state and re-renders whenever it changes.
    #[component]
    fn Harness() -> Element {
        let reveal = use_context_provider(|| RevealState::new(ChoreographyConfig::default()));
        let phase = reveal.phase();
        let revealed = reveal.revealed_cycle();
        rsx! { "{phase.label()} {revealed:?}" }
    }

    fn mounted() -> VirtualDom {
        let mut dom = VirtualDom::new(Harness);
        dom.rebuild_in_place();
        dom
    }

    /// Run `f` against the state inside the app scope.
    fn with_state<T>(dom: &VirtualDom, f: impl FnOnce(RevealState) -> T) -> T {
        dom.in_runtime(|| {
            ScopeId::APP.in_runtime(|| {
                let state = ScopeId::APP
                    .consume_context::<RevealState>()
                    .expect("RevealState provided by Harness");
                f(state)
            })
        })
    }

    /// Poll the dom's tasks for `span` of (paused) time.
    async fn run_for(dom: &mut VirtualDom, span: Duration) {
        let deadline = tokio::time::Instant::now() + span;
        while tokio::time::timeout_at(deadline, dom.wait_for_work())
            .await
            .is_ok()
        {
            dom.render_immediate_to_vec();
        }
    }

    fn snapshot(dom: &VirtualDom) -> (Phase, Option<u64>, bool) {
        with_state(dom, |state| {
            let pending = state.pending.peek().is_some();
            (state.phase(), state.revealed_cycle(), pending)
        })
    }

    #[tokio::test(start_paused = true)]
    async fn open_chains_reveal_then_settle() {
        let mut dom = mounted();
        with_state(&dom, |state| state.open());

        run_for(&mut dom, Duration::from_millis(300)).await;
        assert_eq!(snapshot(&dom), (Phase::FlapOpening, None, true));

        run_for(&mut dom, Duration::from_millis(600)).await;
        assert_eq!(snapshot(&dom), (Phase::Revealing, None, true));

        run_for(&mut dom, Duration::from_millis(600)).await;
        assert_eq!(snapshot(&dom), (Phase::Revealed, Some(1), false));
    }

    #[tokio::test(start_paused = true)]
    async fn reseal_cancels_the_pending_step() {
        let mut dom = mounted();
        with_state(&dom, |state| state.open());
        run_for(&mut dom, Duration::from_millis(300)).await;

        with_state(&dom, |state| state.reseal());
        assert_eq!(snapshot(&dom), (Phase::Closed, None, false));

        run_for(&mut dom, Duration::from_secs(3)).await;
        assert_eq!(snapshot(&dom), (Phase::Closed, None, false));
    }

    #[tokio::test(start_paused = true)]
    async fn reopen_after_reseal_reveals_the_new_cycle() {
        let mut dom = mounted();
        with_state(&dom, |state| state.open());
        run_for(&mut dom, Duration::from_millis(700)).await;
        assert_eq!(snapshot(&dom).0, Phase::Revealing);

        with_state(&dom, |state| {
            state.reseal();
            state.open();
        });
        run_for(&mut dom, Duration::from_millis(1300)).await;
        assert_eq!(snapshot(&dom), (Phase::Revealed, Some(2), false));
    }
}
