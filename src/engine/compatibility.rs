use crate::name::FullyQualifiedName;

use super::{EngineError, UnitIndex};

/// Filter `candidates` to those with the same units as the first array of `selection`.
///
/// Returns `candidates` unchanged if `selection` is empty.
/// Candidates without an entry in `units` are excluded once `selection` is non-empty.
///
/// # Errors
/// Returns [`EngineError::UnknownUnits`] if the first array of `selection` has no entry in `units`.
pub fn filter_compatible(
    candidates: Vec<FullyQualifiedName>,
    selection: &[FullyQualifiedName],
    units: &UnitIndex,
) -> Result<Vec<FullyQualifiedName>, EngineError> {
    let Some(first) = selection.first() else {
        return Ok(candidates);
    };
    let target = units
        .get(first)
        .ok_or_else(|| EngineError::UnknownUnits(first.clone()))?;
    Ok(candidates
        .into_iter()
        .filter(|candidate| units.get(candidate) == Some(target))
        .collect())
}
