//! Page template substitution.

use std::fs;
use std::io;
use std::path::Path;

pub const TITLE_PLACEHOLDER: &str = "{{ Title }}";
pub const CONTENT_PLACEHOLDER: &str = "{{ Content }}";

/// An HTML page template with literal `{{ Title }}` and `{{ Content }}`
/// placeholders.
#[derive(Debug, Clone)]
pub struct Template {
    source: String,
}

impl Template {
    /// Wrap an in-memory template string.
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
        }
    }

    /// Read a template from disk.
    pub fn load(path: &Path) -> io::Result<Self> {
        Ok(Self::new(fs::read_to_string(path)?))
    }

    /// Substitute the title and rendered content into the template.
    ///
    /// No escaping is applied: a title or content containing the literal
    /// placeholder text will corrupt the output.
    pub fn apply(&self, title: &str, content: &str) -> String {
        self.source
            .replace(TITLE_PLACEHOLDER, title)
            .replace(CONTENT_PLACEHOLDER, content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_substitutes_both_placeholders() {
        let template =
            Template::new("<html><title>{{ Title }}</title><body>{{ Content }}</body></html>");
        assert_eq!(
            template.apply("Home", "<div><p>hi</p></div>"),
            "<html><title>Home</title><body><div><p>hi</p></div></body></html>"
        );
    }

    #[test]
    fn test_apply_replaces_every_occurrence() {
        let template = Template::new("{{ Title }} - {{ Title }}");
        assert_eq!(template.apply("Home", ""), "Home - Home");
    }

    #[test]
    fn test_apply_without_placeholders_is_identity() {
        let template = Template::new("<html></html>");
        assert_eq!(template.apply("Home", "body"), "<html></html>");
    }
}
