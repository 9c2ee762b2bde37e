use std::fmt;
use std::io;
use std::io::Read;
use std::io::Write;

use kiln_core::plugin::ProcessorCapabilities;
use kiln_core::plugin::ResourcePreProcessor;
use kiln_core::types::Resource;

use crate::ProcessorDecorator;

/// Buffers processor output so a failing processor never leaves a partial write behind
///
/// The input is read up front and the wrapped processor writes into a buffer. On success the
/// buffer is written out. On failure either the original input is written out, when failures
/// are ignored, or the error is returned and nothing is written.
///
pub struct FailureTolerantProcessor {
  inner: ProcessorDecorator,
  ignore_failures: bool,
}

impl FailureTolerantProcessor {
  pub fn new(inner: ProcessorDecorator, ignore_failures: bool) -> Self {
    Self {
      inner,
      ignore_failures,
    }
  }
}

impl ResourcePreProcessor for FailureTolerantProcessor {
  fn process(
    &self,
    resource: Option<&Resource>,
    reader: &mut dyn Read,
    writer: &mut dyn Write,
  ) -> io::Result<()> {
    let mut input = Vec::new();
    reader.read_to_end(&mut input)?;

    let mut output: Vec<u8> = Vec::new();
    match self.inner.process(resource, &mut input.as_slice(), &mut output) {
      Ok(()) => writer.write_all(&output),
      Err(error) if self.ignore_failures => {
        tracing::warn!(
          processor = %self.inner,
          resource = resource.map_or("<group>", |resource| resource.uri.as_str()),
          "Ignoring failed processor, leaving content unchanged: {error}"
        );

        writer.write_all(&input)
      }
      Err(error) => Err(error),
    }
  }

  fn capabilities(&self) -> ProcessorCapabilities {
    self.inner.capabilities()
  }
}

impl fmt::Display for FailureTolerantProcessor {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    fmt::Display::fmt(&self.inner, f)
  }
}

#[cfg(test)]
mod tests {
  use std::sync::Arc;

  use super::*;
  use crate::test_utils::run;
  use crate::test_utils::BrokenReader;
  use crate::test_utils::FailingPostProcessor;
  use crate::test_utils::UppercasePostProcessor;

  fn failing(ignore_failures: bool) -> FailureTolerantProcessor {
    FailureTolerantProcessor::new(
      ProcessorDecorator::from_post(Arc::new(FailingPostProcessor::default())),
      ignore_failures,
    )
  }

  #[test]
  fn writes_processor_output_on_success() {
    let processor = FailureTolerantProcessor::new(
      ProcessorDecorator::from_post(Arc::new(UppercasePostProcessor::default())),
      false,
    );

    assert_eq!(run(&processor, None, "abc").unwrap(), "ABC");
  }

  #[test]
  fn writes_the_original_content_when_ignoring_failures() {
    assert_eq!(run(&failing(true), None, "abc").unwrap(), "abc");
  }

  #[test]
  fn returns_the_error_and_writes_nothing_otherwise() {
    let mut output: Vec<u8> = Vec::new();
    let error = failing(false)
      .process(None, &mut "abc".as_bytes(), &mut output)
      .unwrap_err();

    assert_eq!(error.to_string(), "Unexpected token");
    assert!(output.is_empty());
  }

  #[test]
  fn does_not_ignore_read_failures() {
    let mut output: Vec<u8> = Vec::new();
    let error = failing(true)
      .process(None, &mut BrokenReader {}, &mut output)
      .unwrap_err();

    assert_eq!(error.kind(), io::ErrorKind::BrokenPipe);
    assert!(output.is_empty());
  }

  #[test]
  fn displays_the_inner_processor() {
    assert_eq!(failing(true).to_string(), "FailingPostProcessor");
  }
}
