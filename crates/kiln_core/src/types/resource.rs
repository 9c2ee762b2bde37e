use std::path::Path;

use serde::Deserialize;
use serde::Serialize;

use super::resource_type::ResourceType;

fn default_minimize() -> bool {
  true
}

/// A named, typed unit of content flowing through the pipeline
///
/// Resources are borrowed by processors for the duration of a single call and are never
/// modified by them.
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
  /// Where the resource was loaded from, used as its identity
  pub uri: String,

  /// The kind of content the resource holds
  #[serde(rename = "type")]
  pub resource_type: ResourceType,

  /// Whether size-reducing processors may be applied to this resource
  ///
  /// Defaults to true, individual resources may opt out.
  ///
  #[serde(default = "default_minimize")]
  pub minimize: bool,
}

impl Resource {
  pub fn new(uri: impl Into<String>, resource_type: ResourceType) -> Self {
    Self {
      uri: uri.into(),
      resource_type,
      minimize: true,
    }
  }

  /// Creates a resource whose type is inferred from the extension of its uri
  ///
  /// Query strings and fragments are ignored. Returns None when the extension is missing or not
  /// a known resource type.
  pub fn from_uri(uri: impl Into<String>) -> Option<Self> {
    let uri = uri.into();
    let path = uri.split(['?', '#']).next().unwrap_or(&uri);
    let resource_type = Path::new(path)
      .extension()
      .and_then(|ext| ext.to_str())
      .and_then(ResourceType::from_extension)?;

    Some(Self::new(uri, resource_type))
  }

  pub fn with_minimize(mut self, minimize: bool) -> Self {
    self.minimize = minimize;
    self
  }
}
