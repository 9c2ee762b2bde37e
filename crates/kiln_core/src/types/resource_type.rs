use std::fmt;
use std::hash::Hash;

use serde::Deserialize;
use serde::Serialize;

/// The kind of content a resource holds
///
/// Processors declare the type they apply to, and callers search for processors by the type of
/// the resource they are about to process. Matching is by exact equality only.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ResourceType {
  Css,
  Js,
}

impl ResourceType {
  /// The canonical file extension, which maps back to this type
  pub fn extension(&self) -> &'static str {
    match self {
      ResourceType::Css => "css",
      ResourceType::Js => "js",
    }
  }

  /// Maps a file extension to a resource type, returning None for content kiln does not process
  pub fn from_extension(ext: &str) -> Option<Self> {
    match ext {
      "js" | "mjs" | "cjs" => Some(ResourceType::Js),
      "css" => Some(ResourceType::Css),
      _ => None,
    }
  }
}

impl fmt::Display for ResourceType {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      ResourceType::Css => write!(f, "CSS"),
      ResourceType::Js => write!(f, "JS"),
    }
  }
}
