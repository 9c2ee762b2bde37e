use std::any::Any;
use std::fmt;
use std::io;
use std::io::Read;
use std::io::Write;
use std::sync::Arc;

use kiln_core::error::ProcessorError;
use kiln_core::plugin::Processor;
use kiln_core::plugin::ProcessorCapabilities;
use kiln_core::plugin::ResourcePostProcessor;
use kiln_core::plugin::ResourcePreProcessor;
use kiln_core::types::Resource;
use kiln_core::types::ResourceType;

use crate::eligibility;
use crate::patterns::ResourcePatterns;

/// Decides per call whether a decorated processor runs
pub type EnabledFn = Arc<dyn Fn(Option<&Resource>) -> bool + Send + Sync>;

fn enabled_fn<F>(predicate: F) -> EnabledFn
where
  F: Fn(Option<&Resource>) -> bool + Send + Sync + 'static,
{
  Arc::new(predicate)
}

/// Wraps a pre or post processor behind the pre processor contract
///
/// The decorator adds behaviour around the wrapped processor without changing it:
///
/// * Post processors are adapted so they can be called with a resource, which they never see
/// * Capabilities are read once at construction and used to filter processors by type and
///   minimize mode
/// * An enabled gate can skip the processor, in which case the content is copied through
///   unchanged
///
/// The decorator displays as the wrapped processor, so pipeline diagnostics list the original
/// processor names.
///
/// # Examples
///
/// ```
/// use std::fmt;
/// use std::io;
/// use std::io::Read;
/// use std::io::Write;
///
/// use kiln_core::plugin::ResourcePostProcessor;
/// use kiln_core::plugin::ResourcePreProcessor;
/// use kiln_core::plugin::Processor;
/// use kiln_processor::ProcessorDecorator;
///
/// struct Trim;
///
/// impl fmt::Display for Trim {
///   fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
///     write!(f, "Trim")
///   }
/// }
///
/// impl ResourcePostProcessor for Trim {
///   fn process(&self, reader: &mut dyn Read, writer: &mut dyn Write) -> io::Result<()> {
///     let mut content = String::new();
///     reader.read_to_string(&mut content)?;
///     writer.write_all(content.trim().as_bytes())
///   }
/// }
///
/// let decorator = ProcessorDecorator::new(Processor::post(Trim));
/// let mut output: Vec<u8> = Vec::new();
///
/// decorator.process(None, &mut "  a  ".as_bytes(), &mut output)?;
///
/// assert_eq!(output, b"a");
/// assert_eq!(decorator.to_string(), "Trim");
/// # Ok::<(), io::Error>(())
/// ```
#[derive(Clone)]
pub struct ProcessorDecorator {
  processor: Processor,
  capabilities: ProcessorCapabilities,
  enabled: Option<EnabledFn>,
}

impl ProcessorDecorator {
  pub fn new(processor: impl Into<Processor>) -> Self {
    let processor = processor.into();

    ProcessorDecorator {
      capabilities: processor.capabilities(),
      processor,
      enabled: None,
    }
  }

  pub fn from_pre(processor: Arc<dyn ResourcePreProcessor>) -> Self {
    Self::new(Processor::Pre(processor))
  }

  pub fn from_post(processor: Arc<dyn ResourcePostProcessor>) -> Self {
    Self::new(Processor::Post(processor))
  }

  /// Wraps an object whose contract is only known at runtime
  ///
  /// Accepts a `Processor`, a `ProcessorDecorator`, or a pre or post processor passed as a
  /// shared or boxed trait object (`Arc<dyn ResourcePreProcessor>`, `Box<dyn
  /// ResourcePreProcessor>`, `Arc<dyn ResourcePostProcessor>` or `Box<dyn
  /// ResourcePostProcessor>`). A nested decorator is wrapped as a pre processor, keeping its own
  /// gate.
  ///
  /// Fails with `NullArgument` when there is no object, and with `InvalidArgument` when the object
  /// is none of these. A concrete processor type cannot be recognised through `Any` and must be
  /// passed as a trait object.
  pub fn try_from_any(
    candidate: Option<Box<dyn Any + Send + Sync>>,
  ) -> Result<Self, ProcessorError> {
    let candidate = candidate.ok_or(ProcessorError::NullArgument("processor"))?;

    let candidate = match candidate.downcast::<Processor>() {
      Ok(processor) => return Ok(Self::new(*processor)),
      Err(candidate) => candidate,
    };

    let candidate = match candidate.downcast::<Arc<dyn ResourcePreProcessor>>() {
      Ok(processor) => return Ok(Self::from_pre(*processor)),
      Err(candidate) => candidate,
    };

    let candidate = match candidate.downcast::<Arc<dyn ResourcePostProcessor>>() {
      Ok(processor) => return Ok(Self::from_post(*processor)),
      Err(candidate) => candidate,
    };

    let candidate = match candidate.downcast::<Box<dyn ResourcePreProcessor>>() {
      Ok(processor) => return Ok(Self::from_pre(Arc::from(*processor))),
      Err(candidate) => candidate,
    };

    let candidate = match candidate.downcast::<Box<dyn ResourcePostProcessor>>() {
      Ok(processor) => return Ok(Self::from_post(Arc::from(*processor))),
      Err(candidate) => candidate,
    };

    match candidate.downcast::<ProcessorDecorator>() {
      Ok(decorator) => Ok(Self::from_pre(Arc::new(*decorator))),
      Err(_) => Err(ProcessorError::InvalidArgument(String::from(
        "expected a ResourcePreProcessor or a ResourcePostProcessor passed as a shared or boxed \
         trait object",
      ))),
    }
  }

  /// Adds a condition the gate must satisfy before the processor runs
  ///
  /// Conditions compose: the processor runs only when every condition added holds.
  pub fn with_enabled<F>(mut self, predicate: F) -> Self
  where
    F: Fn(Option<&Resource>) -> bool + Send + Sync + 'static,
  {
    let enabled = match self.enabled.take() {
      None => enabled_fn(predicate),
      Some(current) => enabled_fn(move |resource| current(resource) && predicate(resource)),
    };

    self.enabled = Some(enabled);
    self
  }

  /// Only runs the processor for resources whose uri matches the patterns
  pub fn with_patterns(self, patterns: ResourcePatterns) -> Self {
    self.with_enabled(move |resource| {
      resource.map_or(true, |resource| patterns.matches(&resource.uri))
    })
  }

  /// Skips a minimizing processor for resources that opted out of minimization
  pub fn minimize_aware(self) -> Self {
    let minimize = self.capabilities.minimize;

    self.with_enabled(move |resource| {
      !minimize || resource.map_or(true, |resource| resource.minimize)
    })
  }

  /// Whether the wrapped processor runs for this resource, true unless a gate says otherwise
  pub fn is_enabled(&self, resource: Option<&Resource>) -> bool {
    self
      .enabled
      .as_ref()
      .map_or(true, |enabled| enabled(resource))
  }

  /// Whether the processor applies to a search by type and minimize mode
  ///
  /// See [`eligibility::is_eligible`] for the rules.
  pub fn is_eligible(
    &self,
    minimize: bool,
    searched_type: Option<ResourceType>,
  ) -> Result<bool, ProcessorError> {
    eligibility::is_eligible(&self.capabilities, minimize, searched_type)
  }

  /// The infallible form of [`Self::is_eligible`] for callers holding a concrete type
  pub fn eligible_for(&self, minimize: bool, searched_type: ResourceType) -> bool {
    eligibility::eligible_for(&self.capabilities, minimize, searched_type)
  }

  pub fn processor(&self) -> &Processor {
    &self.processor
  }
}

impl ResourcePreProcessor for ProcessorDecorator {
  fn process(
    &self,
    resource: Option<&Resource>,
    reader: &mut dyn Read,
    writer: &mut dyn Write,
  ) -> io::Result<()> {
    if self.is_enabled(resource) {
      return self.processor.process(resource, reader, writer);
    }

    tracing::debug!("Skipping processor: {}", self.processor);
    io::copy(reader, writer)?;

    Ok(())
  }

  fn capabilities(&self) -> ProcessorCapabilities {
    self.capabilities
  }
}

impl fmt::Display for ProcessorDecorator {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    fmt::Display::fmt(&self.processor, f)
  }
}

impl fmt::Debug for ProcessorDecorator {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("ProcessorDecorator")
      .field("processor", &self.processor)
      .field("capabilities", &self.capabilities)
      .field("gated", &self.enabled.is_some())
      .finish()
  }
}
