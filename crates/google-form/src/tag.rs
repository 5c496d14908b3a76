//! The `contact_form` authoring tag.
//!
//! Authors write the tag with positional arguments in this order:
//!
//! ```text
//! id, height, width, frameborder, marginheight, marginwidth, title, placeholder
//! ```
//!
//! and may give a body, which replaces the placeholder.

use std::sync::Arc;

use crate::embed::FormEmbed;
use crate::options::EmbedOptions;
use crate::{Error, Result};

const ID: usize = 0;
const HEIGHT: usize = 1;
const WIDTH: usize = 2;
const FRAME_BORDER: usize = 3;
const MARGIN_HEIGHT: usize = 4;
const MARGIN_WIDTH: usize = 5;
const TITLE: usize = 6;
const PLACEHOLDER: usize = 7;

/// Parse a numeric tag argument.
///
/// Surrounding whitespace is ignored. Anything that is not a non-negative
/// integer is rejected.
pub fn parse_dimension(field: &'static str, value: &str) -> Result<u32> {
    value
        .trim()
        .parse::<u32>()
        .map_err(|_| Error::InvalidNumber {
            field,
            value: value.to_string(),
        })
}

/// Positional tag arguments, coerced into typed options.
pub struct TagArgs;

impl TagArgs {
    /// Map positional arguments onto [`EmbedOptions`].
    ///
    /// Missing trailing arguments and `None` entries are left unset so the
    /// builder's defaults apply. Extra arguments are ignored. Numeric slots that
    /// are empty or don't parse are also left unset, with a warning for the latter.
    pub fn from_positional(args: &[Option<String>]) -> EmbedOptions {
        let text = |index: usize| args.get(index).cloned().flatten();
        let number = |index: usize, field: &'static str| -> Option<u32> {
            let value = args.get(index)?.as_deref()?;
            if value.trim().is_empty() {
                return None;
            }
            match parse_dimension(field, value) {
                Ok(n) => Some(n),
                Err(e) => {
                    tracing::warn!(position = index, "contact_form: {e}, using default");
                    None
                }
            }
        };

        if args.len() > PLACEHOLDER + 1 {
            tracing::debug!(
                count = args.len(),
                "contact_form: ignoring extra positional arguments"
            );
        }

        EmbedOptions {
            id: text(ID),
            height: number(HEIGHT, "height"),
            width: number(WIDTH, "width"),
            frame_border: number(FRAME_BORDER, "frameborder"),
            margin_height: number(MARGIN_HEIGHT, "marginheight"),
            margin_width: number(MARGIN_WIDTH, "marginwidth"),
            title: text(TITLE),
            placeholder: text(PLACEHOLDER),
        }
    }
}

/// The `contact_form` tag: a form embed inside the `#contact` container.
pub struct ContactFormTag<E: ?Sized> {
    embed: Arc<E>,
}

impl<E: FormEmbed> ContactFormTag<E> {
    pub fn new(embed: E) -> Self {
        Self {
            embed: Arc::new(embed),
        }
    }
}

impl<E: FormEmbed + ?Sized> ContactFormTag<E> {
    /// Build the tag around a builder that is also registered elsewhere.
    pub fn shared(embed: Arc<E>) -> Self {
        Self { embed }
    }

    /// Render the tag.
    ///
    /// A `body` takes precedence over both the positional placeholder and the
    /// builder's default placeholder.
    pub fn render(&self, args: &[Option<String>], body: Option<&str>) -> String {
        let mut options = TagArgs::from_positional(args);
        if let Some(body) = body {
            options.placeholder = Some(body.to_string());
        }

        let fragment = self.embed.embed(&options);
        format!("<div id=\"contact\"><div class=\"contact-form\">{fragment}</div></div>")
    }
}

impl<E: ?Sized> Clone for ContactFormTag<E> {
    fn clone(&self) -> Self {
        Self {
            embed: Arc::clone(&self.embed),
        }
    }
}
