//! # google-form
//!
//! Embeds a Google Form into a static site as an `<iframe>` fragment.
//!
//! The same builder is exposed two ways:
//! - **Template helper** `google_form`: takes named options, returns the iframe
//! - **Authoring tag** `contact_form`: takes positional arguments and an optional
//!   body, returns the iframe wrapped in a `#contact` container
//!
//! ## Example
//!
//! ```
//! use google_form::{EmbedOptions, embed_form};
//!
//! let html = embed_form(&EmbedOptions::new("abc123"));
//! assert_eq!(
//!     html,
//!     "<iframe src=\"https://docs.google.com/forms/d/e/abc123/viewform?embedded=true\" \
//!      width=\"600\" height=\"1145\" frameborder=\"0\" marginheight=\"0\" marginwidth=\"0\">\
//!      Loading...</iframe>"
//! );
//! ```
//!
//! Hosts register both surfaces at once with [`register`]:
//!
//! ```
//! use google_form::{PluginConfig, Registry, register};
//!
//! let mut registry = Registry::new();
//! register(&mut registry, &PluginConfig::default());
//!
//! let args = [Some("abc123".to_string())];
//! let html = registry.call_tag("contact_form", &args, Some("Please wait")).unwrap();
//! assert!(html.starts_with("<div id=\"contact\"><div class=\"contact-form\"><iframe"));
//! ```

mod config;
mod embed;
mod host;
#[cfg(feature = "minijinja")]
mod jinja;
mod options;
mod tag;

pub use config::PluginConfig;
pub use embed::{EMBED_URL_TEMPLATE, ERROR_FRAGMENT, FormEmbed, GoogleForm, embed_form, embed_url};
pub use host::{HelperFn, PluginHost, Registry, TagFn, register};
pub use options::{EmbedOptions, FormDefaults, ResolvedEmbed};
pub use tag::{ContactFormTag, TagArgs, parse_dimension};

/// Error type for google-form operations.
///
/// Rendering itself never fails: a missing form id renders [`ERROR_FRAGMENT`].
/// These errors come from loading configuration and coercing arguments.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Configuration could not be parsed
    #[error("failed to parse google_form config: {0}")]
    Config(String),

    /// Configuration file could not be read
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// A numeric argument was not a non-negative integer
    #[error("invalid value for `{field}`: expected a non-negative integer, got {value:?}")]
    InvalidNumber { field: &'static str, value: String },
}

/// Result type alias for google-form operations.
pub type Result<T> = std::result::Result<T, Error>;
