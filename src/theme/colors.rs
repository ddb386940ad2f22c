//! Color constants used from Rust-side markup.
//!
//! The rest of the palette lives as CSS custom properties in `styles.rs`.

// === GOLD (Accents) ===
pub const GOLD: &str = "#B89464";

// === FLORAL ===
pub const STEM: &str = "hsl(345 45% 30%)";
