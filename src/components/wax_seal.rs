//! Wax Seal Component
//!
//! The clickable seal that opens the envelope. Only rendered while sealed.

use dioxus::prelude::*;

/// Properties for the WaxSeal component
#[derive(Clone, PartialEq, Props)]
pub struct WaxSealProps {
    /// Monogram embossed on the seal, e.g. "V & S"
    pub initials: String,
    /// Called when the seal is clicked
    pub onclick: EventHandler<()>,
}

/// Burgundy wax seal with the couple's initials.
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     WaxSeal {
///         initials: "V & S".to_string(),
///         onclick: move |_| reveal.open(),
///     }
/// }
/// ```
#[component]
pub fn WaxSeal(props: WaxSealProps) -> Element {
    rsx! {
        button {
            class: "wax-seal",
            r#type: "button",
            "aria-label": "Break the seal to open the invitation",
            onclick: move |_| props.onclick.call(()),
            div { class: "wax-seal-ring" }
            span { class: "wax-seal-initials", "{props.initials}" }
        }
    }
}
