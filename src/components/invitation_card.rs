//! Invitation Card Component
//!
//! The card inside the envelope: names, invitation line, countdown, date,
//! companion app link, venue and parents.

use dioxus::prelude::*;
use invite_core::Invitation;

use crate::components::CountdownDisplay;

#[derive(Props, Clone, PartialEq)]
pub struct InvitationCardProps {
    /// Whether the card has been revealed
    pub visible: bool,
    /// Loaded invitation
    pub invitation: Invitation,
}

/// Invitation card.
///
/// Always mounted inside the envelope so the countdown keeps running while
/// sealed; `visible` only drives the fade.
#[component]
pub fn InvitationCard(props: InvitationCardProps) -> Element {
    let invitation = &props.invitation;
    let details = &invitation.details;
    let event = &details.event;
    let visible_class = if props.visible { "visible" } else { "" };
    let date = invitation.formatted_date();
    let target = invitation.target_utc();

    rsx! {
        article { class: "invitation-card {visible_class}",
            p { class: "card-eyebrow", "Always & Forever" }

            // Names
            section { class: "card-section",
                h1 { class: "card-name", "{details.groom.full_name}" }
                div { class: "card-heart-row",
                    div { class: "card-rule" }
                    span { "aria-hidden": "true", "\u{2665}" }
                    div { class: "card-rule" }
                }
                h1 { class: "card-name", "{details.bride.full_name}" }
            }

            p { class: "card-invite-text",
                "We would be delighted to have you with us as we celebrate our wedding day."
            }

            // Countdown
            section { class: "card-section",
                p { class: "card-label", "Counting down to our special day" }
                CountdownDisplay { target }
            }

            // Date and time
            section { class: "card-section",
                p { class: "card-date", "{date}" }
                if let Some(ref time) = event.time {
                    p { class: "card-muted", "{time}" }
                }
            }

            // Companion app
            if let Some(ref url) = details.companion_app_url {
                section { class: "card-section",
                    p { class: "card-label", "Celebrate with us" }
                    a {
                        class: "companion-link",
                        href: "{url}",
                        target: "_blank",
                        rel: "noopener noreferrer",
                        "Share Your Moments"
                    }
                    p { class: "card-muted", style: "margin-top: 0.75rem;",
                        "Visit our wedding app to share photos and connect with guests"
                    }
                }
            }

            // Venue
            section { class: "card-section",
                p { class: "card-date", "{event.venue.name}" }
                p { class: "card-muted", "{event.venue.address}" }
                if let Some(ref link) = event.venue.map_link {
                    a {
                        class: "card-link",
                        href: "{link}",
                        target: "_blank",
                        rel: "noopener noreferrer",
                        "View Location \u{2192}"
                    }
                }
            }

            // Parents
            section { class: "card-section parents-grid",
                div {
                    p { class: "card-label", "Son of" }
                    p { "{details.groom.father}" }
                    p { "&" }
                    p { "{details.groom.mother}" }
                }
                div {
                    p { class: "card-label", "Daughter of" }
                    p { "{details.bride.father}" }
                    p { "&" }
                    p { "{details.bride.mother}" }
                }
            }
        }
    }
}
