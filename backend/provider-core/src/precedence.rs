//! Precedence between explicit configuration and environment defaults.
//!
//! ## Precedence (highest to lowest)
//!
//! 1. A concrete configuration value, even an empty one
//! 2. The attribute's environment variable
//!
//! An explicit `""` in configuration overrides the environment and is later
//! reported as missing, exactly like an unset attribute with no environment
//! default.

use crate::attribute::AttributeState;

use std::fmt;

/// Where an effective value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueSource {
    Configuration,
    Environment(&'static str),
}

impl fmt::Display for ValueSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueSource::Configuration => write!(f, "configuration"),
            ValueSource::Environment(name) => write!(f, "env:{}", name),
        }
    }
}

/// An effective attribute value with its source.
///
/// No `Debug` impl: the value may be a token.
#[derive(Clone, PartialEq, Eq)]
pub struct Resolved {
    pub value: String,
    pub source: ValueSource,
}

impl Resolved {
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }
}

/// Compute the effective value of one attribute.
///
/// `state` must not be `Unknown`; unknown values are rejected before
/// resolution. `environment_value` is `""` when the variable is unset.
pub fn resolve(
    state: &AttributeState,
    environment_value: String,
    env_var: &'static str,
) -> Resolved {
    let mut effective = Resolved {
        value: environment_value,
        source: ValueSource::Environment(env_var),
    };

    if !state.is_null() {
        effective = Resolved {
            value: state.value_or_empty().to_string(),
            source: ValueSource::Configuration,
        };
    }

    effective
}
