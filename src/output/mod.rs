//! Rendering: file-kind classification, flat listings, and recursive
//! reports.
//!
//! - `classify` - semantic color tags per entry kind
//! - `long` - long-format field composition
//! - `render` - flat and tree renderers producing final text

mod classify;
mod long;
mod render;

pub use classify::{FileKind, classify};
pub use long::{long_line, permission_string};
pub use render::{render_flat, render_tree};
