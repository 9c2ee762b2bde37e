use glob_match::glob_match;

/// Include and exclude globs matched against resource uris
///
/// A uri matches when it matches any include pattern, or there are no include patterns, and it
/// matches none of the exclude patterns. Patterns are tested against both the basename and the
/// full uri, ignoring query strings and fragments.
///
/// # Examples
///
/// ```
/// use kiln_processor::ResourcePatterns;
///
/// let patterns = ResourcePatterns::new(
///   vec![String::from("*.js")],
///   vec![String::from("*.min.js")],
/// );
///
/// assert!(patterns.matches("/static/js/app.js?v=2"));
/// assert!(!patterns.matches("/static/js/vendor.min.js"));
/// assert!(!patterns.matches("/static/css/app.css"));
/// ```
///
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ResourcePatterns {
  include: Vec<String>,
  exclude: Vec<String>,
}

impl ResourcePatterns {
  pub fn new(include: Vec<String>, exclude: Vec<String>) -> Self {
    Self { include, exclude }
  }

  pub fn is_empty(&self) -> bool {
    self.include.is_empty() && self.exclude.is_empty()
  }

  pub fn matches(&self, uri: &str) -> bool {
    let path = uri.split(['?', '#']).next().unwrap_or(uri);
    let basename = path.rsplit(['/', '\\']).next().unwrap_or(path);

    let is_included = self.include.is_empty()
      || self
        .include
        .iter()
        .any(|pattern| is_match(pattern, path, basename));

    is_included
      && !self
        .exclude
        .iter()
        .any(|pattern| is_match(pattern, path, basename))
  }
}

fn is_match(pattern: &str, path: &str, basename: &str) -> bool {
  glob_match(pattern, basename) || glob_match(pattern, path)
}
