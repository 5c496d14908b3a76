//! The iframe fragment builder.
//!
//! This is the one piece both the `google_form` helper and the `contact_form`
//! tag render through.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

use crate::options::{EmbedOptions, FormDefaults};

/// Embed URL with `{id}` standing for the form id.
pub const EMBED_URL_TEMPLATE: &str = "https://docs.google.com/forms/d/e/{id}/viewform?embedded=true";

/// Rendered in place of the iframe when no form id was given.
pub const ERROR_FRAGMENT: &str =
    "<div>An error occurred while rendering the form. Please contact the site maintainer.</div>";

/// Bytes left alone by ECMAScript `encodeURI`: the URI reserved set, the
/// unreserved marks and `#`. Everything else is percent-encoded.
const ENCODE_URI: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b';')
    .remove(b',')
    .remove(b'/')
    .remove(b'?')
    .remove(b':')
    .remove(b'@')
    .remove(b'&')
    .remove(b'=')
    .remove(b'+')
    .remove(b'$')
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')')
    .remove(b'#');

/// Build the escaped embed URL for a form id.
///
/// The id is substituted first and the whole URL is escaped afterwards, so
/// reserved characters inside the id (`/`, `?`, `#`...) pass through unchanged.
///
/// ```
/// assert_eq!(
///     google_form::embed_url("a b"),
///     "https://docs.google.com/forms/d/e/a%20b/viewform?embedded=true"
/// );
/// ```
pub fn embed_url(id: &str) -> String {
    let raw = EMBED_URL_TEMPLATE.replace("{id}", id);
    utf8_percent_encode(&raw, ENCODE_URI).to_string()
}

/// Something that can turn embed options into an HTML fragment.
///
/// The tag adapter takes one of these by injection rather than looking the
/// helper up by name.
pub trait FormEmbed: Send + Sync {
    /// Render the fragment. Never fails: bad input renders a notice instead.
    fn embed(&self, options: &EmbedOptions) -> String;
}

impl<F> FormEmbed for F
where
    F: Fn(&EmbedOptions) -> String + Send + Sync,
{
    fn embed(&self, options: &EmbedOptions) -> String {
        self(options)
    }
}

/// The Google Forms iframe builder.
#[derive(Debug, Clone, Default)]
pub struct GoogleForm {
    defaults: FormDefaults,
}

impl GoogleForm {
    /// Create a builder that fills unset options from `defaults`.
    pub fn new(defaults: FormDefaults) -> Self {
        Self { defaults }
    }

    pub fn defaults(&self) -> &FormDefaults {
        &self.defaults
    }
}

impl FormEmbed for GoogleForm {
    fn embed(&self, options: &EmbedOptions) -> String {
        let Some(form) = options.resolve(&self.defaults) else {
            tracing::warn!("google_form called without a form id, rendering error notice");
            return ERROR_FRAGMENT.to_string();
        };

        let src = embed_url(form.id);
        tracing::trace!(id = form.id, %src, "rendering form embed");

        format!(
            "<iframe src=\"{}\" width=\"{}\" height=\"{}\" frameborder=\"{}\" marginheight=\"{}\" marginwidth=\"{}\">{}</iframe>",
            src,
            form.width,
            form.height,
            form.frame_border,
            form.margin_height,
            form.margin_width,
            form.placeholder
        )
    }
}

/// Render a form embed with the built-in defaults.
pub fn embed_form(options: &EmbedOptions) -> String {
    GoogleForm::default().embed(options)
}
