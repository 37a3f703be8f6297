//! User-facing output helpers
//!
//! - `json` - NDJSON event emission for `--json`
//! - `primitives` - styled text built on the theme colors
//! - `terminal` - color and unicode capability detection
//! - `theme` - semantic color tokens

pub mod json;
pub mod primitives;
pub mod terminal;
pub mod theme;
