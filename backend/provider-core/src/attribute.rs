//! Provider attributes and their pre-resolution state.

use crate::{TODO_HOST_ENV, TODO_TOKEN_ENV};

// ============================================
// ATTRIBUTE STATE
// ============================================

/// One configuration attribute as decoded by the host runtime.
///
/// `Unknown` means the value will only be known at apply time, `Null` means the
/// practitioner did not set it. Only `Value` carries a payload.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum AttributeState {
    Unknown,
    #[default]
    Null,
    Value(String),
}

impl AttributeState {
    pub fn value(value: impl Into<String>) -> Self {
        AttributeState::Value(value.into())
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, AttributeState::Unknown)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, AttributeState::Null)
    }

    /// The concrete value, or `""` for `Unknown` and `Null`.
    pub fn value_or_empty(&self) -> &str {
        match self {
            AttributeState::Value(value) => value,
            AttributeState::Unknown | AttributeState::Null => "",
        }
    }

    /// Short state name that is safe to log for sensitive attributes.
    pub fn kind(&self) -> &'static str {
        match self {
            AttributeState::Unknown => "unknown",
            AttributeState::Null => "null",
            AttributeState::Value(_) => "value",
        }
    }
}

impl From<Option<String>> for AttributeState {
    fn from(value: Option<String>) -> Self {
        value.map_or(AttributeState::Null, AttributeState::Value)
    }
}

// ============================================
// PROVIDER ATTRIBUTES
// ============================================

/// The configurable provider attributes, in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProviderAttribute {
    Host,
    Token,
}

impl ProviderAttribute {
    /// Declaration order. Diagnostics within a phase follow this order.
    pub const ALL: [ProviderAttribute; 2] = [ProviderAttribute::Host, ProviderAttribute::Token];

    /// Schema name, also used as the root attribute path.
    pub const fn name(self) -> &'static str {
        match self {
            ProviderAttribute::Host => "host",
            ProviderAttribute::Token => "token",
        }
    }

    /// Name used in diagnostic summaries ("Missing TODO API Host").
    pub const fn label(self) -> &'static str {
        match self {
            ProviderAttribute::Host => "Host",
            ProviderAttribute::Token => "Token",
        }
    }

    /// Environment variable supplying the default value.
    pub const fn env_var(self) -> &'static str {
        match self {
            ProviderAttribute::Host => TODO_HOST_ENV,
            ProviderAttribute::Token => TODO_TOKEN_ENV,
        }
    }

    pub const fn is_sensitive(self) -> bool {
        matches!(self, ProviderAttribute::Token)
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|attribute| attribute.name() == name)
    }
}

impl std::fmt::Display for ProviderAttribute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
