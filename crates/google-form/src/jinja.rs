//! minijinja as a plugin host.
//!
//! ```jinja
//! {{ google_form(id="abc123", height=900) }}
//! {{ google_form({"id": "abc123"}) }}
//! {{ contact_form("abc123", 900, content="Please wait") }}
//! ```
//!
//! Both functions return safe strings, so auto-escaping leaves the markup alone.

use minijinja::value::{Kwargs, Rest, Value, ValueKind};
use minijinja::{Environment, Error, ErrorKind};

use crate::host::{HelperFn, PluginHost, TagFn};
use crate::options::EmbedOptions;
use crate::tag::parse_dimension;

/// Keyword the tag reads its body from
const BODY_KWARG: &str = "content";

impl From<crate::Error> for Error {
    fn from(err: crate::Error) -> Self {
        Error::new(ErrorKind::InvalidOperation, err.to_string())
    }
}

impl PluginHost for Environment<'_> {
    fn register_helper(&mut self, name: &str, helper: HelperFn) {
        self.add_function(
            name.to_string(),
            move |map: Option<Value>, kwargs: Kwargs| -> Result<Value, Error> {
                let options = helper_options(map.as_ref(), &kwargs)?;
                kwargs.assert_all_used()?;
                Ok(Value::from_safe_string(helper(&options)))
            },
        );
    }

    fn register_tag(&mut self, name: &str, tag: TagFn) {
        self.add_function(
            name.to_string(),
            move |args: Rest<Value>, kwargs: Kwargs| -> Result<Value, Error> {
                let body: Option<String> = kwargs.get(BODY_KWARG)?;
                kwargs.assert_all_used()?;
                let args: Vec<Option<String>> = args.iter().map(positional).collect();
                Ok(Value::from_safe_string(tag(&args, body.as_deref())))
            },
        );
    }
}

/// Build helper options from an optional options map and keyword arguments.
/// Keyword arguments win over map entries.
fn helper_options(map: Option<&Value>, kwargs: &Kwargs) -> Result<EmbedOptions, Error> {
    if let Some(map) = map {
        if map.kind() != ValueKind::Map && !map.is_none() && !map.is_undefined() {
            return Err(Error::new(
                ErrorKind::InvalidOperation,
                format!("google_form expects a map of options, got {}", map.kind()),
            ));
        }
    }

    let field = |key: &str| -> Result<Option<Value>, Error> {
        if let Some(value) = kwargs.get::<Option<Value>>(key)? {
            return Ok(present(value));
        }
        match map {
            Some(map) if map.kind() == ValueKind::Map => Ok(present(map.get_attr(key)?)),
            _ => Ok(None),
        }
    };

    Ok(EmbedOptions {
        id: field("id")?.map(|v| text(&v)),
        width: number(field("width")?, "width")?,
        height: number(field("height")?, "height")?,
        frame_border: number(field("frameborder")?, "frameborder")?,
        margin_height: number(field("marginheight")?, "marginheight")?,
        margin_width: number(field("marginwidth")?, "marginwidth")?,
        title: field("title")?.map(|v| text(&v)),
        placeholder: field("placeholder")?.map(|v| text(&v)),
    })
}

fn present(value: Value) -> Option<Value> {
    if value.is_none() || value.is_undefined() {
        None
    } else {
        Some(value)
    }
}

fn text(value: &Value) -> String {
    match value.as_str() {
        Some(s) => s.to_string(),
        None => value.to_string(),
    }
}

fn positional(value: &Value) -> Option<String> {
    present(value.clone()).map(|v| text(&v))
}

fn number(value: Option<Value>, field: &'static str) -> Result<Option<u32>, Error> {
    let Some(value) = value else {
        return Ok(None);
    };
    if value.kind() == ValueKind::Number {
        return i64::try_from(value.clone())
            .ok()
            .and_then(|n| u32::try_from(n).ok())
            .map(Some)
            .ok_or_else(|| {
                Error::from(crate::Error::InvalidNumber {
                    field,
                    value: value.to_string(),
                })
            });
    }
    Ok(Some(parse_dimension(field, &text(&value))?))
}
