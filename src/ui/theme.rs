//! Design tokens for HydroScope text output.
//!
//! Only three semantic colors; every styled string goes through
//! [`crate::ui::primitives::text::ColoredText`].

pub mod colors {
    use crossterm::style::Color;

    pub const SUCCESS: Color = Color::Green;
    pub const ERROR: Color = Color::Red;
    pub const WARNING: Color = Color::Yellow;
}
