//! Envelope Component
//!
//! Paper envelope with a triangular top flap. The flap, the front pattern
//! and the inner content are driven entirely by the reveal [`Phase`]:
//!
//! | Phase | Flap | Content | Reseal button |
//! |-------|------|---------|---------------|
//! | Closed | closed | hidden | - |
//! | FlapOpening | opening | hidden | shown |
//! | Revealing | open | fading in | shown |
//! | Revealed | open | visible | shown |

use dioxus::prelude::*;
use invite_core::Phase;

/// CSS class for the envelope in a given phase
pub fn phase_class(phase: Phase) -> &'static str {
    match phase {
        Phase::Closed => "sealed",
        Phase::FlapOpening => "flap-opening",
        Phase::Revealing => "revealing",
        Phase::Revealed => "revealed",
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct EnvelopeProps {
    /// Current reveal phase
    pub phase: Phase,
    /// Called when the reader closes the envelope again
    pub on_reseal: EventHandler<()>,
    /// The card inside the envelope
    pub children: Element,
}

#[component]
pub fn Envelope(props: EnvelopeProps) -> Element {
    let phase = props.phase;
    let flap_class = if phase.is_opened() {
        "envelope-flap open"
    } else {
        "envelope-flap"
    };
    let pattern_class = if phase.is_opened() {
        "envelope-pattern hidden"
    } else {
        "envelope-pattern"
    };
    let envelope_class = phase_class(phase);
    let content_hidden = !phase.content_visible();
    let content_class = if phase.content_visible() {
        "envelope-content visible"
    } else {
        "envelope-content"
    };

    rsx! {
        div { class: "envelope {envelope_class}",
            div { class: "envelope-body",
                // Top flap (triangle)
                div { class: "{flap_class}" }

                // Front diamond pattern, fades as the flap lifts
                div { class: "{pattern_class}",
                    svg {
                        width: "100%",
                        height: "100%",
                        view_box: "0 0 200 200",
                        style: "opacity: 0.1;",
                        rect {
                            x: "60", y: "60", width: "80", height: "80",
                            transform: "rotate(45 100 100)",
                            fill: "none", stroke: "currentColor", stroke_width: "2"
                        }
                    }
                }

                div {
                    class: "{content_class}",
                    "aria-hidden": content_hidden,
                    {props.children}

                    if phase.is_opened() {
                        div { class: "reseal-row",
                            button {
                                class: "reseal-btn",
                                r#type: "button",
                                onclick: move |_| props.on_reseal.call(()),
                                "Close envelope"
                            }
                        }
                    }
                }
            }
        }
    }
}
