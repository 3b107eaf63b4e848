//! SVG export of a rendered mind map
//!
//! Reads the elements and connector segments the view left on the headless
//! surfaces and writes them out as SVG, with CSS classes for styling.

pub mod config;
pub mod svg;

pub use config::SvgConfig;
pub use svg::render_svg;
