use std::fmt::Display;
use std::io;
use std::io::Read;
use std::io::Write;

use super::ProcessorCapabilities;
use crate::types::Resource;

/// Rewrites the content of a single resource
///
/// Pre processors run on each resource before it is merged with the rest of its group, and can
/// use the resource to report diagnostics or to apply type specific logic. The resource is None
/// when the processor is applied to merged content that no longer belongs to one resource.
///
/// The reader and writer are owned by the caller and must not be closed by the processor.
///
/// The `Display` implementation is the processor's identity, and is what pipeline diagnostics
/// print when enumerating stages.
///
pub trait ResourcePreProcessor: Display + Send + Sync {
  fn process(
    &self,
    resource: Option<&Resource>,
    reader: &mut dyn Read,
    writer: &mut dyn Write,
  ) -> io::Result<()>;

  fn capabilities(&self) -> ProcessorCapabilities {
    ProcessorCapabilities::default()
  }
}

#[cfg(test)]
mod tests {
  use std::fmt;

  use super::*;

  struct TestPreProcessor {}

  impl Display for TestPreProcessor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
      write!(f, "TestPreProcessor")
    }
  }

  impl ResourcePreProcessor for TestPreProcessor {
    fn process(
      &self,
      _resource: Option<&Resource>,
      _reader: &mut dyn Read,
      _writer: &mut dyn Write,
    ) -> io::Result<()> {
      Ok(())
    }
  }

  #[test]
  fn can_be_defined_in_dyn_vec() {
    let mut processors = Vec::<Box<dyn ResourcePreProcessor>>::new();

    processors.push(Box::new(TestPreProcessor {}));

    assert_eq!(processors.len(), 1);
  }

  #[test]
  fn capabilities_default_to_any() {
    assert_eq!(
      TestPreProcessor {}.capabilities(),
      ProcessorCapabilities::any()
    );
  }
}
