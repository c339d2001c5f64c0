//! Template values standing in for secrets.
//!
//! Urls, account keys and the verification key may reference environment
//! variables (`${PRIVATE_KEY}`) or carry a `YOUR_...` marker left over from
//! a project template. Nothing here runs at load time; callers decide when
//! to list or resolve placeholders.

use crate::{
    error::{ConfigError, Result},
    ProjectConfig,
};
use std::{convert::Infallible, fmt};

/// Marker used by project templates for values the user must fill in.
pub const TEMPLATE_MARKER: &str = "YOUR_";

/// An unfilled value found in a configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholder {
    /// Dotted path of the field, e.g. `networks.mainnet.accounts[0]`
    pub location: String,
    /// Environment variables the value references
    pub variables: Vec<String>,
}

impl fmt::Display for Placeholder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.variables.is_empty() {
            write!(f, "{} (template value)", self.location)
        } else {
            write!(f, "{} (${{{}}})", self.location, self.variables.join("}, ${"))
        }
    }
}

/// Part of a template value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Segment<'a> {
    /// Text copied as-is, including any `$` not followed by `{`
    Literal(&'a str),
    /// A complete `${...}` reference
    Reference(&'a str),
}

/// Split `value` into literal text and `${...}` references. An unclosed
/// `${` is literal.
fn segments(value: &str) -> Vec<Segment<'_>> {
    let mut segments = Vec::new();
    let mut rest = value;

    while let Some(start) = rest.find("${") {
        let Some(close) = rest[start..].find('}') else {
            break;
        };
        let end = start + close + 1;
        if start > 0 {
            segments.push(Segment::Literal(&rest[..start]));
        }
        segments.push(Segment::Reference(&rest[start..end]));
        rest = &rest[end..];
    }
    if !rest.is_empty() {
        segments.push(Segment::Literal(rest));
    }

    segments
}

/// Variables referenced by `value`, in order of appearance.
pub fn referenced_variables(value: &str) -> Vec<String> {
    let mut variables = Vec::new();
    for segment in segments(value) {
        if let Segment::Reference(reference) = segment {
            let _ = shellexpand::env_with_context(reference, |var: &str| {
                variables.push(var.to_string());
                Ok::<Option<String>, Infallible>(None)
            });
        }
    }

    variables
}

/// Returns true if `value` still needs to be filled in.
pub fn is_placeholder(value: &str) -> bool {
    value.contains(TEMPLATE_MARKER) || !referenced_variables(value).is_empty()
}

/// Substitute `${VAR}` references in `value` using `lookup`.
pub(crate) fn expand_value<F>(value: &str, location: &str, lookup: &F) -> Result<String>
where
    F: Fn(&str) -> Option<String>,
{
    let mut expanded = String::with_capacity(value.len());
    for segment in segments(value) {
        match segment {
            Segment::Literal(text) => expanded.push_str(text),
            Segment::Reference(reference) => {
                let resolved = shellexpand::env_with_context(reference, |var: &str| {
                    lookup(var).map(Some).ok_or(())
                })
                .map_err(|e| ConfigError::MissingVariable {
                    var: e.var_name,
                    location: location.to_string(),
                })?;
                expanded.push_str(&resolved);
            }
        }
    }

    Ok(expanded)
}

/// Visit every field that may hold a template value.
pub(crate) fn visit_templates<'a>(
    config: &'a ProjectConfig,
    mut visit: impl FnMut(String, &'a str),
) {
    for (name, profile) in &config.networks {
        if let Some(url) = profile.endpoint_url.as_deref() {
            visit(format!("networks.{name}.url"), url);
        }
        for (index, key) in profile.credentials.iter().enumerate() {
            visit(format!("networks.{name}.accounts[{index}]"), key);
        }
    }
    visit(
        "verification.api_key".to_string(),
        config.verification.api_key.as_str(),
    );
}

/// Mutable counterpart of [`visit_templates`]; stops at the first error.
pub(crate) fn visit_templates_mut(
    config: &mut ProjectConfig,
    mut visit: impl FnMut(&str, &mut String) -> Result<()>,
) -> Result<()> {
    for (name, profile) in &mut config.networks {
        if let Some(url) = profile.endpoint_url.as_mut() {
            visit(&format!("networks.{name}.url"), url)?;
        }
        for (index, key) in profile.credentials.iter_mut().enumerate() {
            visit(&format!("networks.{name}.accounts[{index}]"), key)?;
        }
    }
    visit("verification.api_key", &mut config.verification.api_key)
}
