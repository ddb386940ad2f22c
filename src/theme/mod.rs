//! Visual theme for the invitation.

pub mod colors;
mod styles;

pub use styles::GLOBAL_STYLES;
