//! Plot slots.
//!
//! A [`Slot`] is one independent plot: it owns its own array selection and a derived list of candidate arrays.
//! Once a slot has a selection, it is locked to the units of its first selected array and only offers candidates with those units.
//! Clearing the selection unlocks it again.
//!
//! The [`SlotManager`] owns the slots of a session.
//! Slots are only ever added, never removed, so memory grows with the number of plots a user adds within a session.

mod slot_manager;

pub use slot_manager::SlotManager;

use crate::{
    engine::{Engine, EngineError},
    name::{FullyQualifiedName, GroupName},
};

/// The selection state of a [`Slot`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SlotState {
    /// No arrays are selected. Candidates are not filtered by units.
    Unselected,
    /// At least one array is selected. Candidates are restricted to `units`.
    Selected {
        /// The units of the first selected array.
        units: String,
    },
}

/// A plot slot.
#[derive(Clone, Debug, Default)]
pub struct Slot {
    selection: Vec<FullyQualifiedName>,
    candidates: Vec<FullyQualifiedName>,
    units: Option<String>,
}

impl Slot {
    /// Returns the selected arrays, in selection order.
    #[must_use]
    pub fn selection(&self) -> &[FullyQualifiedName] {
        &self.selection
    }

    /// Returns the candidate arrays as of the last recomputation.
    #[must_use]
    pub fn candidates(&self) -> &[FullyQualifiedName] {
        &self.candidates
    }

    /// Returns the selection state.
    #[must_use]
    pub fn state(&self) -> SlotState {
        match &self.units {
            Some(units) => SlotState::Selected {
                units: units.clone(),
            },
            None => SlotState::Unselected,
        }
    }

    /// Recompute the candidates from the `selected_groups` and the current selection.
    ///
    /// # Errors
    /// Returns an [`EngineError`] if the candidates cannot be enumerated. The slot is unchanged in that case.
    pub fn refresh(
        &mut self,
        engine: &Engine,
        selected_groups: &[GroupName],
    ) -> Result<(), EngineError> {
        self.candidates = engine.data_arrays(selected_groups, &self.selection)?;
        Ok(())
    }

    /// Replace the selection with `selection` and recompute the candidates.
    ///
    /// # Errors
    /// Returns an [`EngineError`] if the candidates cannot be enumerated, such as when the first array of `selection` is not in the unit index.
    /// The slot is unchanged in that case.
    pub fn select(
        &mut self,
        engine: &Engine,
        selected_groups: &[GroupName],
        selection: Vec<FullyQualifiedName>,
    ) -> Result<(), EngineError> {
        let candidates = engine.data_arrays(selected_groups, &selection)?;
        self.units = selection.first().and_then(|first| engine.units(first));
        self.selection = selection;
        self.candidates = candidates;
        Ok(())
    }
}
