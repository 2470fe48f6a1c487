//! Joiner configuration

use crate::error::JoinError;
use serde::{Deserialize, Serialize};

/// Joiner configuration options
///
/// All fields default to the empty string, which yields a plain concatenation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct JoinerOptions {
    /// Written once before the joined parts
    pub prefix: String,
    /// Written between consecutive parts
    pub step: String,
    /// Written once after the joined parts
    pub suffix: String,
}

impl JoinerOptions {
    /// Fold `options` left to right onto the defaults. Later options win.
    pub fn from_options<I>(options: I) -> Self
    where
        I: IntoIterator<Item = JoinerOption>,
    {
        let mut opts = Self::default();
        for option in options {
            option.apply(&mut opts);
        }
        opts
    }

    /// Parse options from JSON, e.g. `{"prefix": "[", "step": ",", "suffix": "]"}`.
    pub fn from_json(input: &str) -> Result<Self, JoinError> {
        serde_json::from_str(input).map_err(|e| JoinError::InvalidOptions(e.to_string()))
    }

    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn step(mut self, step: impl Into<String>) -> Self {
        self.step = step.into();
        self
    }

    pub fn suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }
}

/// A single configuration change applied by [`JoinerOptions::from_options`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JoinerOption {
    Prefix(String),
    Step(String),
    Suffix(String),
    /// Sets prefix, step and suffix at once
    All {
        prefix: String,
        step: String,
        suffix: String,
    },
}

impl JoinerOption {
    /// Overwrite the fields this option names.
    pub fn apply(&self, options: &mut JoinerOptions) {
        match self {
            JoinerOption::Prefix(prefix) => options.prefix.clone_from(prefix),
            JoinerOption::Step(step) => options.step.clone_from(step),
            JoinerOption::Suffix(suffix) => options.suffix.clone_from(suffix),
            JoinerOption::All {
                prefix,
                step,
                suffix,
            } => {
                options.prefix.clone_from(prefix);
                options.step.clone_from(step);
                options.suffix.clone_from(suffix);
            }
        }
    }
}

/// Returns a [`JoinerOption`] setting the prefix.
pub fn with_prefix(prefix: impl Into<String>) -> JoinerOption {
    JoinerOption::Prefix(prefix.into())
}

/// Returns a [`JoinerOption`] setting the step (delimiter).
pub fn with_step(step: impl Into<String>) -> JoinerOption {
    JoinerOption::Step(step.into())
}

/// Returns a [`JoinerOption`] setting the suffix.
pub fn with_suffix(suffix: impl Into<String>) -> JoinerOption {
    JoinerOption::Suffix(suffix.into())
}

/// Returns a [`JoinerOption`] setting prefix, step and suffix.
pub fn with_joiner(
    prefix: impl Into<String>,
    step: impl Into<String>,
    suffix: impl Into<String>,
) -> JoinerOption {
    JoinerOption::All {
        prefix: prefix.into(),
        step: step.into(),
        suffix: suffix.into(),
    }
}
