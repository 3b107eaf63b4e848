//! Export settings
//!
//! Loaded from the `[export]` table of the options file:
//!
//! ```toml
//! [export]
//! line_width = 1.5
//! corner_radius = 4.0
//! expanders = false
//! ```

use serde::Deserialize;

/// How a laid-out mind map is written as SVG
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SvgConfig {
    /// Stroke width of every connector segment
    pub line_width: f64,

    /// Corner radius of node boxes; zero draws square corners
    pub corner_radius: f64,

    /// Whether the `+`/`-` expander glyphs are exported
    pub expanders: bool,

    /// Whether to start with an `<?xml ...?>` declaration
    pub xml_declaration: bool,

    pub pretty_print: bool,

    /// Prepended to every element class, e.g. "mc-" for "mc-node"
    pub class_prefix: String,
}

impl Default for SvgConfig {
    fn default() -> Self {
        Self {
            line_width: 2.0,
            corner_radius: 0.0,
            expanders: true,
            xml_declaration: true,
            pretty_print: true,
            class_prefix: "mc-".to_string(),
        }
    }
}

impl SvgConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_line_width(mut self, width: f64) -> Self {
        self.line_width = width;
        self
    }

    /// Round node boxes; negative radii are treated as zero
    pub fn with_corner_radius(mut self, radius: f64) -> Self {
        self.corner_radius = radius.max(0.0);
        self
    }

    /// Leave expander glyphs out, e.g. for a static handout
    pub fn without_expanders(mut self) -> Self {
        self.expanders = false;
        self
    }

    /// Fragment suitable for inlining into an HTML page
    pub fn inline(mut self) -> Self {
        self.xml_declaration = false;
        self.pretty_print = false;
        self
    }

    /// Set the class prefix; an empty prefix keeps bare class names
    pub fn with_class_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.class_prefix = prefix.into();
        self
    }
}
