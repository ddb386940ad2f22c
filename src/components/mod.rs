//! UI Components for the wedding invitation.
//!
//! Cream paper, burgundy wax and gold accents.

mod countdown;
mod envelope;
mod floral_decoration;
mod invitation_card;
mod wax_seal;

pub use countdown::CountdownDisplay;
pub use envelope::Envelope;
pub use floral_decoration::{Corner, FloralDecoration};
pub use invitation_card::InvitationCard;
pub use wax_seal::WaxSeal;
