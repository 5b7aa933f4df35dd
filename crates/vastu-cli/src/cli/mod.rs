//! CLI command implementations.
//!
//! - `derive` - Print every derived layer as JSON
//! - `render` - Draw the board as SVG
//! - `export` - Rasterize the drawing to PNG or JPEG
//! - `hover` - Name the zone under a point
//! - `labels` - List ray labels, angles and crossings
//! - `edit` - Apply one board edit and save
//! - `import` - Start a board from an SVG plan or a background image

pub mod board_file;
pub mod common;
pub mod derive;
pub mod edit;
pub mod export;
pub mod hover;
pub mod import;
pub mod labels;
pub mod render;
pub mod style;

pub use derive::cmd_derive;
pub use edit::cmd_edit;
pub use export::cmd_export;
pub use hover::cmd_hover;
pub use import::cmd_import;
pub use labels::cmd_labels;
pub use render::cmd_render;
