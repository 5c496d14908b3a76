//! Plugin configuration.
//!
//! Read from `.config/google-form.yaml` next to the site's dodeca config:
//!
//! ```yaml
//! helper_name: google_form
//! tag_name: contact_form
//! width: 640
//! height: 1200
//! placeholder: Loading form...
//! ```
//!
//! Every key is optional.

use camino::Utf8Path;
use facet::Facet;

use crate::options::FormDefaults;
use crate::{Error, Result};

/// Default name of the template helper
pub const DEFAULT_HELPER_NAME: &str = "google_form";

/// Default name of the authoring tag
pub const DEFAULT_TAG_NAME: &str = "contact_form";

/// Configuration for the form embed plugin.
#[derive(Debug, Clone, Default, Facet)]
#[facet(rename_all = "snake_case")]
pub struct PluginConfig {
    /// Name the helper is registered under (default `google_form`)
    #[facet(default)]
    pub helper_name: Option<String>,

    /// Name the tag is registered under (default `contact_form`)
    #[facet(default)]
    pub tag_name: Option<String>,

    /// Site-wide default width in pixels
    #[facet(default)]
    pub width: Option<u32>,

    /// Site-wide default height in pixels
    #[facet(default)]
    pub height: Option<u32>,

    #[facet(default)]
    pub frameborder: Option<u32>,

    #[facet(default)]
    pub marginheight: Option<u32>,

    #[facet(default)]
    pub marginwidth: Option<u32>,

    /// Site-wide default placeholder
    #[facet(default)]
    pub placeholder: Option<String>,
}

impl PluginConfig {
    /// Parse configuration from YAML.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        facet_yaml::from_str(yaml).map_err(|e| Error::Config(e.to_string()))
    }

    /// Load configuration from a file.
    pub fn load(path: &Utf8Path) -> Result<Self> {
        let content = fs_err::read_to_string(path)?;
        let config: PluginConfig =
            facet_yaml::from_str(&content).map_err(|e| Error::Config(format!("{path}: {e}")))?;
        tracing::debug!(%path, "loaded google form config");
        Ok(config)
    }

    pub fn helper_name(&self) -> &str {
        self.helper_name.as_deref().unwrap_or(DEFAULT_HELPER_NAME)
    }

    pub fn tag_name(&self) -> &str {
        self.tag_name.as_deref().unwrap_or(DEFAULT_TAG_NAME)
    }

    /// Built-in defaults with the configured values laid over them.
    pub fn defaults(&self) -> FormDefaults {
        let builtin = FormDefaults::default();
        FormDefaults {
            width: self.width.unwrap_or(builtin.width),
            height: self.height.unwrap_or(builtin.height),
            frame_border: self.frameborder.unwrap_or(builtin.frame_border),
            margin_height: self.marginheight.unwrap_or(builtin.margin_height),
            margin_width: self.marginwidth.unwrap_or(builtin.margin_width),
            placeholder: self.placeholder.clone().unwrap_or(builtin.placeholder),
        }
    }
}
