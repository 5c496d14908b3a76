//! Registration with the host site generator.
//!
//! The host owns the helper and tag tables; this crate only hands it
//! callables. [`Registry`] is a plain in-memory host, and with the `minijinja`
//! feature a `minijinja::Environment` can be used directly.

use std::collections::HashMap;
use std::sync::Arc;

use crate::config::PluginConfig;
use crate::embed::{FormEmbed, GoogleForm};
use crate::options::EmbedOptions;
use crate::tag::ContactFormTag;

/// A template helper: typed options in, HTML out.
pub type HelperFn = Arc<dyn Fn(&EmbedOptions) -> String + Send + Sync>;

/// An authoring tag: positional arguments and an optional body in, HTML out.
pub type TagFn = Arc<dyn Fn(&[Option<String>], Option<&str>) -> String + Send + Sync>;

/// The registration surface a host exposes to plugins.
pub trait PluginHost {
    /// Expose `helper` to layout templates under `name`.
    fn register_helper(&mut self, name: &str, helper: HelperFn);

    /// Expose `tag` to content authors under `name`.
    fn register_tag(&mut self, name: &str, tag: TagFn);
}

/// Register the `google_form` helper and the `contact_form` tag.
///
/// Both are backed by the same builder instance, configured from `config`.
pub fn register<H: PluginHost + ?Sized>(host: &mut H, config: &PluginConfig) {
    let form = Arc::new(GoogleForm::new(config.defaults()));

    let helper_form = Arc::clone(&form);
    host.register_helper(
        config.helper_name(),
        Arc::new(move |options: &EmbedOptions| helper_form.embed(options)),
    );

    let tag = ContactFormTag::shared(form);
    host.register_tag(
        config.tag_name(),
        Arc::new(move |args: &[Option<String>], body: Option<&str>| tag.render(args, body)),
    );

    tracing::debug!(
        helper = config.helper_name(),
        tag = config.tag_name(),
        "registered google form helper and tag"
    );
}

/// In-memory helper and tag tables.
#[derive(Clone, Default)]
pub struct Registry {
    helpers: HashMap<String, HelperFn>,
    tags: HashMap<String, TagFn>,
}

impl std::fmt::Debug for Registry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registry")
            .field("helpers", &self.helper_names())
            .field("tags", &self.tag_names())
            .finish()
    }
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Call a helper by name. Returns `None` if no such helper is registered.
    pub fn call_helper(&self, name: &str, options: &EmbedOptions) -> Option<String> {
        self.helpers.get(name).map(|f| f(options))
    }

    /// Call a tag by name. Returns `None` if no such tag is registered.
    pub fn call_tag(
        &self,
        name: &str,
        args: &[Option<String>],
        body: Option<&str>,
    ) -> Option<String> {
        self.tags.get(name).map(|f| f(args, body))
    }

    /// Registered helper names, sorted
    pub fn helper_names(&self) -> Vec<&str> {
        let mut names: Vec<_> = self.helpers.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Registered tag names, sorted
    pub fn tag_names(&self) -> Vec<&str> {
        let mut names: Vec<_> = self.tags.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl PluginHost for Registry {
    fn register_helper(&mut self, name: &str, helper: HelperFn) {
        if self.helpers.insert(name.to_string(), helper).is_some() {
            tracing::debug!(name, "replacing existing helper");
        }
    }

    fn register_tag(&mut self, name: &str, tag: TagFn) {
        if self.tags.insert(name.to_string(), tag).is_some() {
            tracing::debug!(name, "replacing existing tag");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::embed::{ERROR_FRAGMENT, embed_form};

    #[test]
    fn test_register_default_names() {
        let mut registry = Registry::new();
        register(&mut registry, &PluginConfig::default());

        assert_eq!(registry.helper_names(), vec!["google_form"]);
        assert_eq!(registry.tag_names(), vec!["contact_form"]);
    }

    #[test]
    fn test_helper_matches_builder() {
        let mut registry = Registry::new();
        register(&mut registry, &PluginConfig::default());

        let options = EmbedOptions::new("abc123").with_height(700);
        assert_eq!(
            registry.call_helper("google_form", &options).unwrap(),
            embed_form(&options)
        );
        assert_eq!(
            registry
                .call_helper("google_form", &EmbedOptions::default())
                .unwrap(),
            ERROR_FRAGMENT
        );
    }

    #[test]
    fn test_tag_uses_same_builder() {
        let mut registry = Registry::new();
        register(&mut registry, &PluginConfig::default());

        let args = [Some("abc123".to_string())];
        let helper = registry
            .call_helper("google_form", &EmbedOptions::new("abc123"))
            .unwrap();
        assert_eq!(
            registry.call_tag("contact_form", &args, None).unwrap(),
            format!("<div id=\"contact\"><div class=\"contact-form\">{helper}</div></div>")
        );
    }

    #[test]
    fn test_unknown_names() {
        let registry = Registry::new();
        assert!(registry.call_helper("google_form", &EmbedOptions::default()).is_none());
        assert!(registry.call_tag("contact_form", &[], None).is_none());
    }

    #[test]
    fn test_register_replaces() {
        let mut registry = Registry::new();
        registry.register_helper("google_form", Arc::new(|_: &EmbedOptions| "old".to_string()));
        registry.register_helper("google_form", Arc::new(|_: &EmbedOptions| "new".to_string()));
        assert_eq!(
            registry
                .call_helper("google_form", &EmbedOptions::default())
                .unwrap(),
            "new"
        );
    }
}
