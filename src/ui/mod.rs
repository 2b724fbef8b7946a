//! Console and NDJSON rendering for the binary.
//!
//! - `theme` - colors, icons, borders
//! - `primitives/` and `widgets/` - styled text, icons, bordered panels
//! - `blocks/` - header, summary, warning, and error blocks
//! - `views/` - what each part of a run prints

pub mod blocks;
pub mod context;
pub mod error;
pub mod json;
pub mod primitives;
pub mod terminal;
pub mod theme;
pub mod views;
pub mod widgets;
