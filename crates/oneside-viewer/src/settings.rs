use std::fs;
use std::path::Path;

use oneside_diff::{CompareOptions, ComparisonPolicy};
use oneside_fragment::BuildOptions;
use oneside_types::{ContextRange, Side};
use serde::{Deserialize, Serialize};

use crate::error::{ViewerError, ViewerResult};

/// User-facing settings for the one-sided viewer.
///
/// Every field has a default, so a settings file only lists what it changes:
///
/// ```toml
/// context_range = -1
/// master_side = "left"
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerSettings {
    /// Unchanged lines kept around each change; `-1` keeps everything.
    pub context_range: ContextRange,
    pub inline_highlight: bool,
    pub master_side: Side,
    pub policy: ComparisonPolicy,
    /// Inputs with more lines than this (both sides together) are not compared.
    pub max_lines: usize,
}

impl Default for ViewerSettings {
    fn default() -> Self {
        Self {
            context_range: ContextRange::Lines(4),
            inline_highlight: true,
            master_side: Side::Right,
            policy: ComparisonPolicy::Default,
            max_lines: 100_000,
        }
    }
}

impl ViewerSettings {
    pub fn from_toml_str(source: &str) -> ViewerResult<Self> {
        Ok(toml::from_str(source)?)
    }

    pub fn load(path: &Path) -> ViewerResult<Self> {
        let source = fs::read_to_string(path).map_err(|source| ViewerError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&source)
    }

    pub fn build_options(&self) -> BuildOptions {
        BuildOptions {
            context_range: self.context_range,
            inline_highlight: self.inline_highlight,
            master_side: self.master_side,
        }
    }

    pub fn compare_options(&self) -> CompareOptions {
        CompareOptions {
            policy: self.policy,
            inner_fragments: self.inline_highlight,
            max_lines: self.max_lines,
        }
    }
}
