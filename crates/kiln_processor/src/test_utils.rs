use std::fmt;
use std::io;
use std::io::Read;
use std::io::Write;
use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering;

use kiln_core::plugin::ProcessorCapabilities;
use kiln_core::plugin::ResourcePostProcessor;
use kiln_core::plugin::ResourcePreProcessor;
use kiln_core::types::Resource;

/// Runs a pre processor over a string and returns what it wrote
pub(crate) fn run(
  processor: &dyn ResourcePreProcessor,
  resource: Option<&Resource>,
  input: &str,
) -> io::Result<String> {
  let mut output: Vec<u8> = Vec::new();
  processor.process(resource, &mut input.as_bytes(), &mut output)?;

  Ok(String::from_utf8(output).unwrap())
}

/// Prefixes content with the uri of the resource being processed
#[derive(Default)]
pub(crate) struct BannerPreProcessor {
  pub capabilities: ProcessorCapabilities,
  calls: AtomicUsize,
}

impl BannerPreProcessor {
  pub fn with_capabilities(capabilities: ProcessorCapabilities) -> Self {
    Self {
      capabilities,
      calls: AtomicUsize::new(0),
    }
  }

  pub fn calls(&self) -> usize {
    self.calls.load(Ordering::SeqCst)
  }
}

impl fmt::Display for BannerPreProcessor {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "BannerPreProcessor")
  }
}

impl ResourcePreProcessor for BannerPreProcessor {
  fn process(
    &self,
    resource: Option<&Resource>,
    reader: &mut dyn Read,
    writer: &mut dyn Write,
  ) -> io::Result<()> {
    self.calls.fetch_add(1, Ordering::SeqCst);

    let uri = resource.map_or("<group>", |resource| resource.uri.as_str());
    writeln!(writer, "/* {uri} */")?;
    io::copy(reader, writer)?;

    Ok(())
  }

  fn capabilities(&self) -> ProcessorCapabilities {
    self.capabilities
  }
}

/// Upper cases content
#[derive(Default)]
pub(crate) struct UppercasePostProcessor {
  pub capabilities: ProcessorCapabilities,
  calls: AtomicUsize,
}

impl UppercasePostProcessor {
  pub fn with_capabilities(capabilities: ProcessorCapabilities) -> Self {
    Self {
      capabilities,
      calls: AtomicUsize::new(0),
    }
  }

  pub fn calls(&self) -> usize {
    self.calls.load(Ordering::SeqCst)
  }
}

impl fmt::Display for UppercasePostProcessor {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "UppercasePostProcessor")
  }
}

impl ResourcePostProcessor for UppercasePostProcessor {
  fn process(&self, reader: &mut dyn Read, writer: &mut dyn Write) -> io::Result<()> {
    self.calls.fetch_add(1, Ordering::SeqCst);

    let mut content = String::new();
    reader.read_to_string(&mut content)?;
    writer.write_all(content.to_uppercase().as_bytes())
  }

  fn capabilities(&self) -> ProcessorCapabilities {
    self.capabilities
  }
}

/// Writes part of its output and then fails
#[derive(Default)]
pub(crate) struct FailingPostProcessor {}

impl fmt::Display for FailingPostProcessor {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "FailingPostProcessor")
  }
}

impl ResourcePostProcessor for FailingPostProcessor {
  fn process(&self, _reader: &mut dyn Read, writer: &mut dyn Write) -> io::Result<()> {
    writer.write_all(b"partial")?;

    Err(io::Error::new(io::ErrorKind::InvalidData, "Unexpected token"))
  }
}

/// A reader that fails on the first read
pub(crate) struct BrokenReader {}

impl Read for BrokenReader {
  fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
    Err(io::Error::new(io::ErrorKind::BrokenPipe, "Reader closed"))
  }
}
