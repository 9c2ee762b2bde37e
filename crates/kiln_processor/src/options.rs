use std::sync::Arc;

use kiln_core::plugin::Processor;
use serde::Deserialize;
use thiserror::Error;

use crate::BenchmarkProcessor;
use crate::FailureTolerantProcessor;
use crate::ProcessorDecorator;
use crate::ResourcePatterns;

#[derive(Debug, Error)]
pub enum ConfigError {
  #[error("Failed to parse decorator options")]
  ParseFailure {
    #[source]
    source: serde_json::Error,
  },
  #[error("Empty {field} pattern at index {index}")]
  EmptyPattern { field: &'static str, index: usize },
}

/// Options controlling how a single processor is decorated
///
/// These are read from the processor's entry in plugin config, for example:
///
/// ```json
/// {
///   "enabled": true,
///   "exclude": ["*.min.js"],
///   "minimizeAware": true,
///   "ignoreFailures": true
/// }
/// ```
///
/// Every field is optional.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields, rename_all = "camelCase")]
pub struct DecoratorOptions {
  /// When false the processor never runs and content is copied through
  pub enabled: bool,

  /// Globs a resource uri must match for the processor to run, empty matches everything
  pub include: Vec<String>,

  /// Globs that stop the processor running for matching resource uris
  pub exclude: Vec<String>,

  /// Skip minimizing processors for resources that opted out of minimization
  pub minimize_aware: bool,

  /// Leave content unchanged instead of failing when the processor fails
  pub ignore_failures: bool,

  /// Log the time taken by each call
  pub benchmark: bool,
}

impl Default for DecoratorOptions {
  fn default() -> Self {
    Self {
      enabled: true,
      include: Vec::new(),
      exclude: Vec::new(),
      minimize_aware: false,
      ignore_failures: false,
      benchmark: false,
    }
  }
}

impl DecoratorOptions {
  pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
    let options: DecoratorOptions =
      serde_json::from_str(raw).map_err(|source| ConfigError::ParseFailure { source })?;

    options.validate()
  }

  pub fn from_value(value: serde_json::Value) -> Result<Self, ConfigError> {
    let options: DecoratorOptions =
      serde_json::from_value(value).map_err(|source| ConfigError::ParseFailure { source })?;

    options.validate()
  }

  fn validate(self) -> Result<Self, ConfigError> {
    for (field, patterns) in [("include", &self.include), ("exclude", &self.exclude)] {
      if let Some(index) = patterns.iter().position(|pattern| pattern.trim().is_empty()) {
        return Err(ConfigError::EmptyPattern { field, index });
      }
    }

    Ok(self)
  }

  /// Builds the decorated stage these options describe for one processor
  ///
  /// Failure handling wraps the processor first and benchmarking wraps that, so the time logged
  /// includes buffering. Gates are applied to the outermost decorator, so skipped resources are
  /// neither buffered nor timed.
  pub fn decorate(&self, processor: impl Into<Processor>) -> ProcessorDecorator {
    let mut decorator = ProcessorDecorator::new(processor);

    if self.ignore_failures {
      decorator = ProcessorDecorator::from_pre(Arc::new(FailureTolerantProcessor::new(
        decorator, true,
      )));
    }

    if self.benchmark {
      decorator = ProcessorDecorator::from_pre(Arc::new(BenchmarkProcessor::new(decorator)));
    }

    if !self.enabled {
      decorator = decorator.with_enabled(|_| false);
    }

    let patterns = ResourcePatterns::new(self.include.clone(), self.exclude.clone());
    if !patterns.is_empty() {
      decorator = decorator.with_patterns(patterns);
    }

    if self.minimize_aware {
      decorator = decorator.minimize_aware();
    }

    decorator
  }
}
