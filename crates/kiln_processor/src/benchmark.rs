use std::fmt;
use std::io;
use std::io::Read;
use std::io::Write;
use std::time::Instant;

use kiln_core::plugin::ProcessorCapabilities;
use kiln_core::plugin::ResourcePreProcessor;
use kiln_core::types::Resource;

use crate::ProcessorDecorator;

/// Logs how long each call to the wrapped processor takes
///
/// Output and errors are passed through untouched.
pub struct BenchmarkProcessor {
  inner: ProcessorDecorator,
}

impl BenchmarkProcessor {
  pub fn new(inner: ProcessorDecorator) -> Self {
    Self { inner }
  }
}

impl ResourcePreProcessor for BenchmarkProcessor {
  fn process(
    &self,
    resource: Option<&Resource>,
    reader: &mut dyn Read,
    writer: &mut dyn Write,
  ) -> io::Result<()> {
    let start = Instant::now();
    let result = self.inner.process(resource, reader, writer);

    tracing::debug!(
      processor = %self.inner,
      resource = resource.map_or("<group>", |resource| resource.uri.as_str()),
      elapsed = ?start.elapsed(),
      failed = result.is_err(),
      "Processed resource"
    );

    result
  }

  fn capabilities(&self) -> ProcessorCapabilities {
    self.inner.capabilities()
  }
}

impl fmt::Display for BenchmarkProcessor {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    fmt::Display::fmt(&self.inner, f)
  }
}
