//! Once-per-second countdown driver.
//!
//! A [`CountdownTicker`] is the timer resource behind a mounted countdown
//! display. The first value is computed synchronously in [`CountdownTicker::start`],
//! so readers never observe an uncomputed countdown. Dropping the handle aborts
//! the timer task, whichever way the owner goes away.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use crate::clock::Clock;
use crate::countdown::{tick, CountdownValue};

/// Recompute cadence.
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Owned handle to a running countdown.
///
/// Must be started from within a tokio runtime.
pub struct CountdownTicker {
    receiver: watch::Receiver<CountdownValue>,
    task: JoinHandle<()>,
}

impl CountdownTicker {
    /// Compute the current value and start recomputing it every second.
    pub fn start(target: DateTime<Utc>, clock: Arc<dyn Clock>) -> Self {
        let initial = tick(clock.now(), target);
        let (sender, receiver) = watch::channel(initial);
        tracing::debug!(%target, %initial, "Countdown ticker started");

        let task = tokio::spawn(async move {
            let mut interval = tokio::time::interval(TICK_INTERVAL);
            interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
            // The first tick resolves immediately and the initial value is already published
            interval.tick().await;

            loop {
                interval.tick().await;
                let value = tick(clock.now(), target);
                tracing::trace!(%value, "Countdown tick");
                sender.send_if_modified(|current| {
                    if *current == value {
                        false
                    } else {
                        *current = value;
                        true
                    }
                });
            }
        });

        Self { receiver, task }
    }

    /// Receiver that is notified whenever the displayed value changes.
    pub fn subscribe(&self) -> watch::Receiver<CountdownValue> {
        self.receiver.clone()
    }

    /// The most recently computed value.
    pub fn current(&self) -> CountdownValue {
        *self.receiver.borrow()
    }

    pub fn is_running(&self) -> bool {
        !self.task.is_finished()
    }
}

impl Drop for CountdownTicker {
    fn drop(&mut self) {
        self.task.abort();
        tracing::debug!("Countdown ticker stopped");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use chrono::TimeZone;

    fn target() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 2, 6, 3, 15, 0).unwrap()
    }

    #[tokio::test(start_paused = true)]
    async fn first_value_is_available_immediately() {
        let clock = ManualClock::new(target() - chrono::Duration::seconds(61));
        let ticker = CountdownTicker::start(target(), Arc::new(clock));

        let value = ticker.current();
        assert_eq!((value.minutes, value.seconds), (1, 1));
        assert!(ticker.is_running());
    }

    #[tokio::test(start_paused = true)]
    async fn recomputes_every_second() {
        let clock = ManualClock::new(target() - chrono::Duration::seconds(10));
        let ticker = CountdownTicker::start(target(), Arc::new(clock.clone()));
        let mut rx = ticker.subscribe();

        clock.advance(chrono::Duration::seconds(1));
        rx.changed().await.unwrap();
        assert_eq!(rx.borrow_and_update().seconds, 9);

        clock.advance(chrono::Duration::seconds(1));
        rx.changed().await.unwrap();
        assert_eq!(rx.borrow_and_update().seconds, 8);
    }

    #[tokio::test(start_paused = true)]
    async fn freezes_at_zero_after_target() {
        let clock = ManualClock::new(target() - chrono::Duration::seconds(1));
        let ticker = CountdownTicker::start(target(), Arc::new(clock.clone()));
        let mut rx = ticker.subscribe();

        clock.advance(chrono::Duration::seconds(5));
        rx.changed().await.unwrap();
        assert!(rx.borrow_and_update().is_zero());

        clock.advance(chrono::Duration::seconds(5));
        tokio::time::sleep(TICK_INTERVAL * 3).await;
        assert!(!rx.has_changed().unwrap());
        assert!(ticker.current().is_zero());
    }

    #[tokio::test(start_paused = true)]
    async fn dropping_the_handle_stops_the_timer() {
        let clock = ManualClock::new(target() - chrono::Duration::hours(2));
        let ticker = CountdownTicker::start(target(), Arc::new(clock.clone()));
        let mut rx = ticker.subscribe();

        drop(ticker);
        clock.advance(chrono::Duration::seconds(1));
        assert!(rx.changed().await.is_err());
    }
}
