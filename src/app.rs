use dioxus::prelude::*;
use invite_core::{ChoreographyConfig, Invitation, Phase};

use crate::components::{Corner, Envelope, FloralDecoration, InvitationCard, WaxSeal};
use crate::context::{get_invitation, use_reveal, RevealState};
use crate::theme::GLOBAL_STYLES;

/// Root application component.
///
/// Provides global styles and the reveal state.
#[component]
pub fn App() -> Element {
    let invitation = use_hook(get_invitation);
    use_context_provider(|| RevealState::new(ChoreographyConfig::default()));

    rsx! {
        style { {GLOBAL_STYLES} }
        {match invitation {
            Some(invitation) => rsx! { InvitationPage { invitation } },
            None => rsx! {
                main { class: "invite-root",
                    p { class: "card-muted", "Invitation details were not loaded." }
                }
            },
        }}
    }
}

/// Envelope, seal and decorations for the single invitation page.
#[component]
fn InvitationPage(invitation: Invitation) -> Element {
    let reveal = use_reveal();

    let phase = reveal.phase();
    let config = reveal.config();
    let timing = format!(
        "--flap-duration: {}ms; --reveal-duration: {}ms;",
        config.flap.as_millis(),
        config.reveal.as_millis()
    );
    let initials = invitation.details.seal_initials();
    let revealed = reveal.revealed_cycle().is_some() && phase == Phase::Revealed;

    rsx! {
        main { class: "invite-root", style: "{timing}",
            for corner in Corner::ALL {
                FloralDecoration {
                    key: "{corner.class()}",
                    corner,
                    visible: phase.decorations_visible(),
                }
            }

            div { class: "invite-stage", "data-revealed": revealed,
                Envelope {
                    phase,
                    on_reseal: move |_| reveal.reseal(),
                    InvitationCard {
                        visible: phase.content_visible(),
                        invitation: invitation.clone(),
                    }
                }

                if phase.seal_visible() {
                    div { class: "seal-anchor",
                        WaxSeal {
                            initials,
                            onclick: move |_| reveal.open(),
                        }
                    }
                }
            }
        }
    }
}
