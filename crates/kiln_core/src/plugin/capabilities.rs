use crate::types::ResourceType;

/// Describes which resources a processor applies to
///
/// Capabilities are plain data supplied by the processor and read once when it is wrapped, so
/// they cannot change for the lifetime of a pipeline.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct ProcessorCapabilities {
  /// The only resource type the processor applies to, or None for any type
  pub supported_type: Option<ResourceType>,

  /// Whether the processor reduces content size
  ///
  /// Minimizing processors are skipped when the caller is not asking for minimized output.
  ///
  pub minimize: bool,
}

impl ProcessorCapabilities {
  /// Applies to every resource type and does not minimize
  pub const fn any() -> Self {
    Self {
      supported_type: None,
      minimize: false,
    }
  }

  pub const fn for_type(resource_type: ResourceType) -> Self {
    Self {
      supported_type: Some(resource_type),
      minimize: false,
    }
  }

  pub const fn minimizing(mut self) -> Self {
    self.minimize = true;
    self
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn default_is_any_type_without_minimize() {
    assert_eq!(ProcessorCapabilities::default(), ProcessorCapabilities::any());
  }

  #[test]
  fn builds_minimizing_capabilities_for_a_type() {
    assert_eq!(
      ProcessorCapabilities::for_type(ResourceType::Css).minimizing(),
      ProcessorCapabilities {
        supported_type: Some(ResourceType::Css),
        minimize: true,
      }
    );
  }
}
