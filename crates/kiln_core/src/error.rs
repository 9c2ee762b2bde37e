use thiserror::Error;

/// Failures raised while wrapping or querying a processor
///
/// I/O failures are not part of this enum: processing returns [`std::io::Result`] so the error
/// produced by a reader, writer or wrapped processor reaches the caller unchanged.
#[derive(Debug, Error)]
pub enum ProcessorError {
  #[error("Missing required argument: {0}")]
  NullArgument(&'static str),
  #[error("Invalid processor: {0}")]
  InvalidArgument(String),
}
