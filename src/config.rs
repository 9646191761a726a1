//! Agent configuration.
//!
//! An agent is described by the name of its evaluation function, how many
//! full rounds to look ahead and which agent it controls. The same settings
//! can come from serde (JSON, TOML, ...) or from a command-line style string
//! such as `depth=3,evalFn=better`.

use crate::error::{Error, Result};
use crate::interface::AgentIndex;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Evaluation function used when none is named.
pub const DEFAULT_EVALUATOR: &str = "better";
/// Rounds searched when no depth is given.
pub const DEFAULT_DEPTH: i64 = 2;

/// Raw, unvalidated agent settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct AgentConfig {
    /// Name of the evaluation function in the `Registry`.
    #[serde(alias = "evalFn")]
    pub evaluation_function_name: String,
    /// Number of full rounds to look ahead. Must be positive.
    #[serde(alias = "depth")]
    pub search_depth: i64,
    /// The agent whose move is being chosen.
    #[serde(alias = "agent")]
    pub controlled_agent: AgentIndex,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            evaluation_function_name: DEFAULT_EVALUATOR.to_string(),
            search_depth: DEFAULT_DEPTH,
            controlled_agent: 0,
        }
    }
}

impl AgentConfig {
    /// Builder pattern: set the evaluation function name.
    pub fn with_evaluator(mut self, name: impl Into<String>) -> Self {
        self.evaluation_function_name = name.into();
        self
    }

    /// Builder pattern: set the search depth.
    pub fn with_depth(mut self, depth: i64) -> Self {
        self.search_depth = depth;
        self
    }

    /// Builder pattern: set the controlled agent.
    pub fn with_controlled_agent(mut self, agent: AgentIndex) -> Self {
        self.controlled_agent = agent;
        self
    }

    /// Check the settings and convert them into search options.
    pub fn validate(&self) -> Result<SearchOptions> {
        let max_depth = check_depth(self.search_depth)?;
        Ok(SearchOptions { max_depth, controlled_agent: self.controlled_agent })
    }
}

pub(crate) fn check_depth(depth: i64) -> Result<usize> {
    match usize::try_from(depth) {
        Ok(d) if d > 0 => Ok(d),
        _ => Err(Error::InvalidDepth { depth }),
    }
}

impl FromStr for AgentConfig {
    type Err = Error;

    /// Parse comma-separated `key=value` pairs. Missing keys keep their
    /// defaults.
    fn from_str(s: &str) -> Result<Self> {
        let mut config = AgentConfig::default();
        for option in s.split(',').map(str::trim).filter(|o| !o.is_empty()) {
            let (key, value) = option.split_once('=').ok_or_else(|| Error::InvalidOption {
                option: option.to_string(),
                reason: "expected key=value".to_string(),
            })?;
            let (key, value) = (key.trim(), value.trim());
            let invalid = |reason: &str| Error::InvalidOption {
                option: option.to_string(),
                reason: reason.to_string(),
            };
            match key {
                "evalFn" | "evaluationFunctionName" => {
                    if value.is_empty() {
                        return Err(invalid("evaluation function name is empty"));
                    }
                    config.evaluation_function_name = value.to_string();
                }
                "depth" | "searchDepth" => {
                    config.search_depth =
                        value.parse().map_err(|_| invalid("depth is not an integer"))?;
                }
                "agent" | "controlledAgent" => {
                    config.controlled_agent =
                        value.parse().map_err(|_| invalid("agent is not an index"))?;
                }
                _ => return Err(invalid("unknown key")),
            }
        }
        Ok(config)
    }
}

/// Validated options consumed by the search strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOptions {
    /// Full rounds to search. Always at least one.
    pub max_depth: usize,
    /// The maximizing agent.
    pub controlled_agent: AgentIndex,
}

impl SearchOptions {
    /// Options for controlling agent 0, searching `depth` rounds.
    pub fn with_max_depth(depth: usize) -> Result<Self> {
        let max_depth = check_depth(i64::try_from(depth).unwrap_or(i64::MAX))?;
        Ok(Self { max_depth, controlled_agent: 0 })
    }
}
