//! Floral Decoration Component
//!
//! Botanical line drawings in the four window corners. They fade in around
//! the sealed envelope and fade out once it opens.

use dioxus::prelude::*;

use crate::theme::colors;

/// Window corner a decoration sits in.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Corner {
    pub const ALL: [Corner; 4] = [
        Corner::TopLeft,
        Corner::TopRight,
        Corner::BottomLeft,
        Corner::BottomRight,
    ];

    /// CSS class positioning and rotating the drawing
    pub fn class(&self) -> &'static str {
        match self {
            Corner::TopLeft => "top-left",
            Corner::TopRight => "top-right",
            Corner::BottomLeft => "bottom-left",
            Corner::BottomRight => "bottom-right",
        }
    }

    /// Fade-in delay in seconds; corners appear one after another
    pub fn delay_secs(&self) -> f32 {
        match self {
            Corner::TopLeft => 0.8,
            Corner::TopRight => 1.0,
            Corner::BottomLeft => 1.2,
            Corner::BottomRight => 1.4,
        }
    }
}

#[component]
pub fn FloralDecoration(corner: Corner, visible: bool) -> Element {
    let visible_class = if visible { "visible" } else { "" };
    // Delay only the fade-in; fading out follows the seal immediately
    let delay = if visible { corner.delay_secs() } else { 0.0 };

    rsx! {
        div {
            class: "floral {corner.class()} {visible_class}",
            style: "transition-delay: {delay}s;",
            "aria-hidden": "true",
            svg {
                width: "200",
                height: "200",
                view_box: "0 0 200 200",
                fill: "none",
                style: "opacity: 0.4;",
                g {
                    stroke: colors::STEM,
                    stroke_width: "1",
                    fill: "none",
                    // Main branch
                    path { d: "M10 10 Q 60 40 50 90 Q 45 120 70 150", stroke_width: "1.5" }
                    // Leaves
                    ellipse {
                        cx: "35",
                        cy: "35",
                        rx: "12",
                        ry: "6",
                        transform: "rotate(35 35 35)",
                    }
                    ellipse {
                        cx: "55",
                        cy: "65",
                        rx: "14",
                        ry: "7",
                        transform: "rotate(-20 55 65)",
                    }
                    ellipse {
                        cx: "48",
                        cy: "105",
                        rx: "12",
                        ry: "6",
                        transform: "rotate(25 48 105)",
                    }
                    // Blossom
                    circle { cx: "70", cy: "150", r: "8" }
                    circle { cx: "70", cy: "150", r: "3", fill: colors::GOLD }
                }
            }
        }
    }
}
