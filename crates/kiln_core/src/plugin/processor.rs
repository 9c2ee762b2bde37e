use std::fmt;
use std::io;
use std::io::Read;
use std::io::Write;
use std::sync::Arc;

use super::ProcessorCapabilities;
use super::ResourcePostProcessor;
use super::ResourcePreProcessor;
use crate::types::Resource;

/// A processor of either contract shape
///
/// The shape is decided once, when the processor is wrapped, and every call dispatches on it.
#[derive(Clone)]
pub enum Processor {
  Pre(Arc<dyn ResourcePreProcessor>),
  Post(Arc<dyn ResourcePostProcessor>),
}

impl Processor {
  pub fn pre(processor: impl ResourcePreProcessor + 'static) -> Self {
    Processor::Pre(Arc::new(processor))
  }

  pub fn post(processor: impl ResourcePostProcessor + 'static) -> Self {
    Processor::Post(Arc::new(processor))
  }

  pub fn capabilities(&self) -> ProcessorCapabilities {
    match self {
      Processor::Pre(processor) => processor.capabilities(),
      Processor::Post(processor) => processor.capabilities(),
    }
  }

  /// Runs the processor with its native contract
  ///
  /// Post processors never see the resource.
  pub fn process(
    &self,
    resource: Option<&Resource>,
    reader: &mut dyn Read,
    writer: &mut dyn Write,
  ) -> io::Result<()> {
    match self {
      Processor::Pre(processor) => processor.process(resource, reader, writer),
      Processor::Post(processor) => processor.process(reader, writer),
    }
  }
}

impl From<Arc<dyn ResourcePreProcessor>> for Processor {
  fn from(processor: Arc<dyn ResourcePreProcessor>) -> Self {
    Processor::Pre(processor)
  }
}

impl From<Arc<dyn ResourcePostProcessor>> for Processor {
  fn from(processor: Arc<dyn ResourcePostProcessor>) -> Self {
    Processor::Post(processor)
  }
}

impl fmt::Display for Processor {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Processor::Pre(processor) => fmt::Display::fmt(processor, f),
      Processor::Post(processor) => fmt::Display::fmt(processor, f),
    }
  }
}

impl fmt::Debug for Processor {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Processor::Pre(processor) => f
        .debug_tuple("Pre")
        .field(&format_args!("{}", processor))
        .finish(),
      Processor::Post(processor) => f
        .debug_tuple("Post")
        .field(&format_args!("{}", processor))
        .finish(),
    }
  }
}
