//! Countdown Display Component
//!
//! Four gold-bordered tiles counting down to the ceremony.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use dioxus::prelude::*;
use invite_core::{pad_unit, tick, CountdownTicker, CountdownValue, SystemClock};

/// Live countdown to `target`.
///
/// The ticker is owned by the component's future, so unmounting the display
/// drops the ticker and stops its timer.
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     CountdownDisplay { target: invitation.target_utc() }
/// }
/// ```
#[component]
pub fn CountdownDisplay(target: DateTime<Utc>) -> Element {
    let mut value: Signal<CountdownValue> = use_signal(|| tick(Utc::now(), target));

    use_future(move || async move {
        let ticker = CountdownTicker::start(target, Arc::new(SystemClock));
        let mut rx = ticker.subscribe();
        value.set(ticker.current());

        while rx.changed().await.is_ok() {
            let next = *rx.borrow_and_update();
            value.set(next);
        }
    });

    let units = value().units();

    rsx! {
        div { class: "countdown", role: "timer", "aria-live": "off",
            for (index, (label, amount)) in units.into_iter().enumerate() {
                div {
                    key: "{label}",
                    class: "countdown-unit",
                    style: "--unit-index: {index}",
                    div { class: "countdown-value", "{pad_unit(amount)}" }
                    span { class: "countdown-label", "{label}" }
                }
            }
        }
    }
}
