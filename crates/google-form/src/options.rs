//! Embed options and their defaults.

/// Options for a single form embed.
///
/// Every field except `id` falls back to [`FormDefaults`] when absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmbedOptions {
    /// The published form id (the `e/...` segment of the form URL).
    /// `None` renders the error notice; `Some("")` is still embedded.
    pub id: Option<String>,

    /// Iframe width in pixels
    pub width: Option<u32>,

    /// Iframe height in pixels
    pub height: Option<u32>,

    /// Value of the `frameborder` attribute
    pub frame_border: Option<u32>,

    /// Value of the `marginheight` attribute
    pub margin_height: Option<u32>,

    /// Value of the `marginwidth` attribute
    pub margin_width: Option<u32>,

    /// Content shown until the frame loads. Written as-is, not escaped.
    pub placeholder: Option<String>,

    /// Accepted for compatibility with existing content but never rendered.
    pub title: Option<String>,
}

impl EmbedOptions {
    /// Options with only the form id set.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            ..Self::default()
        }
    }

    pub fn with_width(mut self, width: u32) -> Self {
        self.width = Some(width);
        self
    }

    pub fn with_height(mut self, height: u32) -> Self {
        self.height = Some(height);
        self
    }

    pub fn with_frame_border(mut self, frame_border: u32) -> Self {
        self.frame_border = Some(frame_border);
        self
    }

    pub fn with_margin_height(mut self, margin_height: u32) -> Self {
        self.margin_height = Some(margin_height);
        self
    }

    pub fn with_margin_width(mut self, margin_width: u32) -> Self {
        self.margin_width = Some(margin_width);
        self
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Fill every gap from `defaults`.
    ///
    /// Returns `None` when there is no form id to embed.
    pub fn resolve<'a>(&'a self, defaults: &'a FormDefaults) -> Option<ResolvedEmbed<'a>> {
        let id = self.id.as_deref()?;
        Some(ResolvedEmbed {
            id,
            width: self.width.unwrap_or(defaults.width),
            height: self.height.unwrap_or(defaults.height),
            frame_border: self.frame_border.unwrap_or(defaults.frame_border),
            margin_height: self.margin_height.unwrap_or(defaults.margin_height),
            margin_width: self.margin_width.unwrap_or(defaults.margin_width),
            placeholder: self
                .placeholder
                .as_deref()
                .unwrap_or(defaults.placeholder.as_str()),
        })
    }
}

/// Values used for any option left unset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormDefaults {
    pub width: u32,
    pub height: u32,
    pub frame_border: u32,
    pub margin_height: u32,
    pub margin_width: u32,
    pub placeholder: String,
}

impl Default for FormDefaults {
    fn default() -> Self {
        Self {
            width: 600,
            height: 1145,
            frame_border: 0,
            margin_height: 0,
            margin_width: 0,
            placeholder: "Loading...".to_string(),
        }
    }
}

/// Embed options with every default applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedEmbed<'a> {
    pub id: &'a str,
    pub width: u32,
    pub height: u32,
    pub frame_border: u32,
    pub margin_height: u32,
    pub margin_width: u32,
    pub placeholder: &'a str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_applies_defaults() {
        let defaults = FormDefaults::default();
        let options = EmbedOptions::new("abc123");
        let resolved = options.resolve(&defaults).unwrap();

        assert_eq!(resolved.id, "abc123");
        assert_eq!(resolved.width, 600);
        assert_eq!(resolved.height, 1145);
        assert_eq!(resolved.frame_border, 0);
        assert_eq!(resolved.margin_height, 0);
        assert_eq!(resolved.margin_width, 0);
        assert_eq!(resolved.placeholder, "Loading...");
    }

    #[test]
    fn test_resolve_keeps_explicit_values() {
        let defaults = FormDefaults::default();
        let options = EmbedOptions::new("abc123")
            .with_width(320)
            .with_height(480)
            .with_frame_border(1)
            .with_margin_height(4)
            .with_margin_width(8)
            .with_placeholder("");
        let resolved = options.resolve(&defaults).unwrap();

        assert_eq!(resolved.width, 320);
        assert_eq!(resolved.height, 480);
        assert_eq!(resolved.frame_border, 1);
        assert_eq!(resolved.margin_height, 4);
        assert_eq!(resolved.margin_width, 8);
        // An explicitly empty placeholder is not replaced by the default
        assert_eq!(resolved.placeholder, "");
    }

    #[test]
    fn test_resolve_without_id() {
        let defaults = FormDefaults::default();
        let options = EmbedOptions::default().with_width(100).with_title("Contact");
        assert!(options.resolve(&defaults).is_none());
    }

    #[test]
    fn test_empty_id_still_resolves() {
        let defaults = FormDefaults::default();
        let options = EmbedOptions::new("");
        assert_eq!(options.resolve(&defaults).unwrap().id, "");
    }
}
