//! Topic text formatting

/// Turns a raw topic into the content shown on a node element
pub trait TextFormatter {
    fn render(&self, topic: &str) -> String;
}

/// Shows topics as-is, with surrounding whitespace on each line removed
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTextFormatter;

impl TextFormatter for PlainTextFormatter {
    fn render(&self, topic: &str) -> String {
        topic.lines().map(str::trim).collect::<Vec<_>>().join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_trims_lines() {
        let formatter = PlainTextFormatter;
        assert_eq!(formatter.render("  Hello  "), "Hello");
        assert_eq!(formatter.render("a \n  b"), "a\nb");
    }
}
