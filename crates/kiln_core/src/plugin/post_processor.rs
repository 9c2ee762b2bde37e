use std::fmt::Display;
use std::io;
use std::io::Read;
use std::io::Write;

use super::ProcessorCapabilities;

/// Rewrites content without knowing which resource it came from
///
/// Post processors were designed to run on the merged content of a group, so they only receive
/// the content. They can still be used anywhere a pre processor is expected once wrapped in a
/// `Processor`.
///
pub trait ResourcePostProcessor: Display + Send + Sync {
  fn process(&self, reader: &mut dyn Read, writer: &mut dyn Write) -> io::Result<()>;

  fn capabilities(&self) -> ProcessorCapabilities {
    ProcessorCapabilities::default()
  }
}
