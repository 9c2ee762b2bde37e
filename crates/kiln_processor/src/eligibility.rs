use kiln_core::error::ProcessorError;
use kiln_core::plugin::ProcessorCapabilities;
use kiln_core::types::ResourceType;

/// Decides whether a processor with the given capabilities applies to a search
///
/// There are two rules, and both must hold:
///
/// * The processor supports any type, or exactly the searched type
/// * Minimization was requested, or the processor does not minimize
///
/// Searching by JS returns processors for JS and for any type, and likewise for CSS. A processor
/// that does not minimize is eligible whether or not minimization was requested.
///
/// # Examples
///
/// ```
/// use kiln_core::plugin::ProcessorCapabilities;
/// use kiln_core::types::ResourceType;
/// use kiln_processor::eligibility::is_eligible;
///
/// let js_minifier = ProcessorCapabilities::for_type(ResourceType::Js).minimizing();
///
/// assert_eq!(is_eligible(&js_minifier, true, Some(ResourceType::Js)).ok(), Some(true));
/// assert_eq!(is_eligible(&js_minifier, false, Some(ResourceType::Js)).ok(), Some(false));
/// assert!(is_eligible(&js_minifier, true, None).is_err());
/// ```
pub fn is_eligible(
  capabilities: &ProcessorCapabilities,
  minimize: bool,
  searched_type: Option<ResourceType>,
) -> Result<bool, ProcessorError> {
  let searched_type = searched_type.ok_or(ProcessorError::NullArgument("searched_type"))?;

  Ok(eligible_for(capabilities, minimize, searched_type))
}

pub fn eligible_for(
  capabilities: &ProcessorCapabilities,
  minimize: bool,
  searched_type: ResourceType,
) -> bool {
  let is_type_satisfied = capabilities
    .supported_type
    .map_or(true, |supported_type| supported_type == searched_type);
  let is_minimize_satisfied = minimize || !capabilities.minimize;

  is_type_satisfied && is_minimize_satisfied
}
