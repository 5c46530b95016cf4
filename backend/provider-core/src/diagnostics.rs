//! Accumulated, ordered error diagnostics.
//!
//! Every configuration problem is appended here instead of being returned
//! on first sight, so the practitioner sees all of them in one run. All
//! diagnostics are blocking: there is no warning severity.

use crate::attribute::ProviderAttribute;

use std::fmt;

use log::debug;
use serde::Serialize;

/// Path to the attribute a diagnostic concerns.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct AttributePath(String);

impl AttributePath {
    /// Path to a top-level attribute.
    pub fn root(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<ProviderAttribute> for AttributePath {
    fn from(attribute: ProviderAttribute) -> Self {
        Self::root(attribute.name())
    }
}

impl fmt::Display for AttributePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One error record. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    #[serde(skip_serializing_if = "Option::is_none")]
    attribute_path: Option<AttributePath>,
    summary: String,
    detail: String,
}

impl Diagnostic {
    pub fn attribute_error(
        path: impl Into<AttributePath>,
        summary: impl Into<String>,
        detail: impl Into<String>,
    ) -> Self {
        Self {
            attribute_path: Some(path.into()),
            summary: summary.into(),
            detail: detail.into(),
        }
    }

    /// A provider-wide error not tied to any attribute.
    pub fn error(summary: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            attribute_path: None,
            summary: summary.into(),
            detail: detail.into(),
        }
    }

    pub fn attribute_path(&self) -> Option<&AttributePath> {
        self.attribute_path.as_ref()
    }

    pub fn summary(&self) -> &str {
        &self.summary
    }

    pub fn detail(&self) -> &str {
        &self.detail
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.attribute_path {
            Some(path) => write!(f, "{path}: {}: {}", self.summary, self.detail.trim_end()),
            None => write!(f, "{}: {}", self.summary, self.detail.trim_end()),
        }
    }
}

/// Ordered collection of diagnostics for one configuration cycle.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Diagnostics {
    records: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an error concerning `path`.
    pub fn add_attribute_error(
        &mut self,
        path: impl Into<AttributePath>,
        summary: impl Into<String>,
        detail: impl Into<String>,
    ) {
        self.push(Diagnostic::attribute_error(path, summary, detail));
    }

    /// Append a provider-wide error.
    pub fn add_error(&mut self, summary: impl Into<String>, detail: impl Into<String>) {
        self.push(Diagnostic::error(summary, detail));
    }

    pub fn push(&mut self, diagnostic: Diagnostic) {
        debug!("Diagnostic added: {}", diagnostic.summary);
        self.records.push(diagnostic);
    }

    /// Append every record of `other`, keeping its order after ours.
    pub fn append(&mut self, other: Diagnostics) {
        self.extend(other);
    }

    /// Whether any blocking diagnostic was recorded.
    pub fn has_error(&self) -> bool {
        !self.records.is_empty()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Diagnostic> {
        self.records.iter()
    }

    pub fn as_slice(&self) -> &[Diagnostic] {
        &self.records
    }
}

impl Extend<Diagnostic> for Diagnostics {
    fn extend<I: IntoIterator<Item = Diagnostic>>(&mut self, iter: I) {
        for diagnostic in iter {
            self.push(diagnostic);
        }
    }
}

impl FromIterator<Diagnostic> for Diagnostics {
    fn from_iter<I: IntoIterator<Item = Diagnostic>>(iter: I) -> Self {
        let mut diagnostics = Diagnostics::new();
        diagnostics.extend(iter);
        diagnostics
    }
}

impl IntoIterator for Diagnostics {
    type Item = Diagnostic;
    type IntoIter = std::vec::IntoIter<Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl fmt::Display for Diagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, diagnostic) in self.records.iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            write!(f, "{diagnostic}")?;
        }
        Ok(())
    }
}

impl std::error::Error for Diagnostics {}
