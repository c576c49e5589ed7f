//! Color constants for the CozyNest palette.
//!
//! Soft lavender/rose pastel scheme; the CSS custom properties in
//! [`styles`](super::styles) mirror these values.

#![allow(dead_code)]

// === LAVENDER (Primary accent) ===
pub const VIOLET: &str = "#8b5cf6";
pub const VIOLET_SOFT: &str = "#ede9fe";
pub const VIOLET_DEEP: &str = "#6d28d9";

// === ROSE (Secondary accent) ===
pub const ROSE: &str = "#f472b6";
pub const ROSE_SOFT: &str = "#fce7f3";

// === SURFACES ===
pub const CLOUD: &str = "#faf7ff";
pub const PAPER: &str = "#fff8dc";
pub const CARD: &str = "#ffffff";

// === TEXT ===
pub const INK: &str = "#374151";
pub const INK_MUTED: &str = "#6b7280";
pub const INK_FAINT: &str = "#9ca3af";

// === SEMANTIC ===
pub const DANGER: &str = "#ef4444";
