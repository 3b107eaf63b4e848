//! SVG generation from a headless view

use crate::layout::{BoundingBox, Point, Size};
use crate::surface::{
    Element, ElementKind, HeadlessCanvas, HeadlessSurface, LineCap, NodeSurface,
};

use super::SvgConfig;

/// Build SVG elements incrementally
pub struct SvgBuilder {
    config: SvgConfig,
    lines: Vec<String>,
    elements: Vec<String>,
    indent: usize,
}

impl SvgBuilder {
    /// Create a new SVG builder
    pub fn new(config: SvgConfig) -> Self {
        Self {
            config,
            lines: vec![],
            elements: vec![],
            indent: 1,
        }
    }

    fn prefix(&self) -> String {
        self.config.class_prefix.clone()
    }

    fn indent_str(&self) -> String {
        if self.config.pretty_print {
            "  ".repeat(self.indent)
        } else {
            String::new()
        }
    }

    fn newline(&self) -> &str {
        if self.config.pretty_print {
            "\n"
        } else {
            ""
        }
    }

    /// Add a connector segment
    pub fn add_line(&mut self, from: Point, to: Point, color: &str, cap: LineCap) {
        let prefix = self.prefix();
        self.lines.push(format!(
            r#"{}<line class="{}line" x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-width="{}" stroke-linecap="{}"/>"#,
            self.indent_str(),
            prefix,
            from.x,
            from.y,
            to.x,
            to.y,
            escape_xml(color),
            self.config.line_width,
            cap.as_str()
        ));
    }

    /// Add the box behind a node or expander
    pub fn add_rect(&mut self, origin: Point, size: Size, classes: &[String]) {
        let prefix = self.prefix();
        let class_list = std::iter::once(format!("{}box", prefix))
            .chain(classes.iter().cloned())
            .collect::<Vec<_>>()
            .join(" ");
        let radius = if self.config.corner_radius > 0.0 {
            format!(r#" rx="{}""#, self.config.corner_radius)
        } else {
            String::new()
        };

        self.elements.push(format!(
            r#"{}<rect class="{}" x="{}" y="{}" width="{}" height="{}"{}/>"#,
            self.indent_str(),
            class_list,
            origin.x,
            origin.y,
            size.width,
            size.height,
            radius
        ));
    }

    /// Add one line of text, vertically centered on `y`
    pub fn add_text(&mut self, text: &str, x: f64, y: f64) {
        let prefix = self.prefix();
        self.elements.push(format!(
            r#"{}<text class="{}label" x="{}" y="{}" dominant-baseline="middle">{}</text>"#,
            self.indent_str(),
            prefix,
            x,
            y,
            escape_xml(text)
        ));
    }

    /// Add a group element with optional ID and classes
    pub fn start_group(&mut self, id: Option<&str>, classes: &[String]) {
        let id_attr = id
            .map(|i| format!(r#" id="{}""#, escape_xml(i)))
            .unwrap_or_default();
        let class_attr = if classes.is_empty() {
            String::new()
        } else {
            format!(r#" class="{}""#, classes.join(" "))
        };

        self.elements
            .push(format!("{}<g{}{}>", self.indent_str(), id_attr, class_attr));
        self.indent += 1;
    }

    /// Close a group element
    pub fn end_group(&mut self) {
        self.indent = self.indent.saturating_sub(1);
        self.elements.push(format!("{}</g>", self.indent_str()));
    }

    /// Build the final SVG string
    ///
    /// Connectors are written first so nodes paint over them.
    pub fn build(self, viewbox: BoundingBox, root_class: Option<&str>) -> String {
        let nl = self.newline();

        let mut svg = String::new();

        if self.config.xml_declaration {
            svg.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
            svg.push_str(nl);
        }

        let class_attr = root_class
            .map(|c| format!(r#" class="{}""#, escape_xml(c)))
            .unwrap_or_default();
        svg.push_str(&format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg"{} viewBox="{} {} {} {}">"#,
            class_attr, viewbox.x, viewbox.y, viewbox.width, viewbox.height
        ));
        svg.push_str(nl);

        for line in &self.lines {
            svg.push_str(line);
            svg.push_str(nl);
        }

        for elem in &self.elements {
            svg.push_str(elem);
            svg.push_str(nl);
        }

        svg.push_str("</svg>");

        svg
    }
}

/// Render the current state of a headless view to an SVG string
///
/// Only elements that are both displayed and visible are written, and
/// expanders only when the config asks for them. The container's theme
/// class ends up on the `<svg>` element.
pub fn render_svg(surface: &HeadlessSurface, canvas: &HeadlessCanvas, config: &SvgConfig) -> String {
    let mut builder = SvgBuilder::new(config.clone());

    for line in canvas.lines() {
        builder.add_line(line.from, line.to, &line.color, line.cap);
    }

    for (handle, element) in surface.elements() {
        let Some(position) = element.position.filter(|_| element.is_shown()) else {
            continue;
        };
        if element.kind == ElementKind::Expander && !config.expanders {
            continue;
        }
        render_element(surface, element, position, surface.measure(handle), &mut builder);
    }

    let viewbox = BoundingBox::at(Point::default(), canvas.size());
    builder.build(viewbox, surface.container_class())
}

fn render_element(
    surface: &HeadlessSurface,
    element: &Element,
    position: Point,
    size: Size,
    builder: &mut SvgBuilder,
) {
    let prefix = builder.prefix();
    let (id, kind_class) = match element.kind {
        ElementKind::Node => (Some(element.node_id.as_str()), "node"),
        ElementKind::Expander => (None, "expander"),
    };
    let classes: Vec<String> = std::iter::once(format!("{}{}", prefix, kind_class))
        .chain(element.classes.iter().map(|c| format!("{}{}", prefix, c)))
        .collect();

    builder.start_group(id, &classes);
    builder.add_rect(position, size, &[]);
    let metrics = surface.metrics();
    for (i, text) in element.content.lines().enumerate() {
        let x = position.x + metrics.padding_x;
        let y = position.y + metrics.padding_y + metrics.line_height * (i as f64 + 0.5);
        builder.add_text(text, x, y);
    }
    builder.end_group();
}

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
