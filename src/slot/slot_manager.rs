use crate::{
    engine::{Engine, EngineError},
    name::{FullyQualifiedName, GroupName},
};

use super::Slot;

/// An ordered, monotonically growing collection of [`Slot`]s.
#[derive(Clone, Debug, Default)]
pub struct SlotManager {
    slots: Vec<Slot>,
}

impl SlotManager {
    /// Create a new slot manager without slots.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of slots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns true if there are no slots.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Returns an iterator over the slots.
    pub fn iter(&self) -> std::slice::Iter<'_, Slot> {
        self.slots.iter()
    }

    /// Returns the slot at `index`.
    ///
    /// # Errors
    /// Returns [`EngineError::SlotOutOfRange`] if there is no slot at `index`.
    pub fn get(&self, index: usize) -> Result<&Slot, EngineError> {
        self.slots.get(index).ok_or(EngineError::SlotOutOfRange {
            index,
            len: self.slots.len(),
        })
    }

    /// Ensure that at least `n` slots exist, computing the candidates of each new slot from `selected_groups`.
    ///
    /// The collection never shrinks: a smaller `n` than the current number of slots has no effect.
    /// Returns the number of slots created.
    ///
    /// # Errors
    /// Returns an [`EngineError`] if the candidates of a new slot cannot be enumerated.
    /// Slots created before the failure are kept.
    pub fn grow_to(
        &mut self,
        n: usize,
        engine: &Engine,
        selected_groups: &[GroupName],
    ) -> Result<usize, EngineError> {
        let created = n.saturating_sub(self.slots.len());
        while self.slots.len() < n {
            let mut slot = Slot::default();
            slot.refresh(engine, selected_groups)?;
            self.slots.push(slot);
        }
        if created > 0 {
            tracing::debug!(created, slots = self.slots.len(), "added plot slots");
        }
        Ok(created)
    }

    /// Recompute the candidates of every slot after the `selected_groups` changed.
    ///
    /// The candidates of all slots are computed before any slot is updated.
    ///
    /// # Errors
    /// Returns an [`EngineError`] if the candidates of a slot cannot be enumerated.
    /// Every slot is unchanged in that case.
    pub fn refresh(
        &mut self,
        engine: &Engine,
        selected_groups: &[GroupName],
    ) -> Result<(), EngineError> {
        let candidates = self
            .slots
            .iter()
            .map(|slot| engine.data_arrays(selected_groups, slot.selection()))
            .collect::<Result<Vec<_>, _>>()?;
        for (slot, candidates) in self.slots.iter_mut().zip(candidates) {
            slot.candidates = candidates;
        }
        Ok(())
    }

    /// Replace the selection of the slot at `index` and recompute its candidates.
    ///
    /// Other slots are unaffected.
    ///
    /// # Errors
    /// Returns [`EngineError::SlotOutOfRange`] if there is no slot at `index`, or an [`EngineError`] if its candidates cannot be enumerated.
    pub fn select(
        &mut self,
        index: usize,
        selection: Vec<FullyQualifiedName>,
        engine: &Engine,
        selected_groups: &[GroupName],
    ) -> Result<(), EngineError> {
        let len = self.slots.len();
        self.slots
            .get_mut(index)
            .ok_or(EngineError::SlotOutOfRange { index, len })?
            .select(engine, selected_groups, selection)
    }
}

impl<'a> IntoIterator for &'a SlotManager {
    type Item = &'a Slot;
    type IntoIter = std::slice::Iter<'a, Slot>;

    fn into_iter(self) -> Self::IntoIter {
        self.slots.iter()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::{
        engine::tests::{groups, names, TestCatalog},
        slot::SlotState,
    };

    #[test]
    fn grow_to_is_monotonic() {
        let engine = Engine::new(Arc::new(TestCatalog::new()));
        let mut slots = SlotManager::new();
        assert!(slots.is_empty());
        assert_eq!(slots.grow_to(3, &engine, &[]).unwrap(), 3);
        assert_eq!(slots.grow_to(1, &engine, &[]).unwrap(), 0);
        assert_eq!(slots.len(), 3);
        assert!(matches!(
            slots.get(3),
            Err(EngineError::SlotOutOfRange { index: 3, len: 3 })
        ));
    }

    #[test]
    fn slots_are_independent() {
        let catalog = Arc::new(TestCatalog::new());
        let engine = Engine::new(catalog.clone());
        let selected_groups = groups(&["amc", "xdc"]);
        let mut slots = SlotManager::new();
        slots.grow_to(2, &engine, &selected_groups).unwrap();
        slots
            .select(0, names(&["amc/bt"]), &engine, &selected_groups)
            .unwrap();
        assert_eq!(slots.get(0).unwrap().candidates(), names(&["amc/bt"]));
        assert_eq!(slots.get(1).unwrap().candidates().len(), 5);
        assert_eq!(slots.get(1).unwrap().state(), SlotState::Unselected);
        assert_eq!(catalog.opens(), 2);
    }

    #[test]
    fn refresh_follows_group_selection() {
        let engine = Engine::new(Arc::new(TestCatalog::new()));
        let mut slots = SlotManager::new();
        slots.grow_to(2, &engine, &groups(&["amc"])).unwrap();
        slots
            .select(1, names(&["amc/ip"]), &engine, &groups(&["amc"]))
            .unwrap();
        slots.refresh(&engine, &groups(&["amc", "xdc"])).unwrap();
        let candidates: Vec<Vec<FullyQualifiedName>> =
            slots.iter().map(|slot| slot.candidates().to_vec()).collect();
        assert_eq!(candidates[0].len(), 5);
        assert_eq!(
            candidates[1],
            names(&["amc/ip", "xdc/ip_ref", "xdc/profile"])
        );
        // A deselected group narrows the candidates but keeps the selection.
        slots.refresh(&engine, &groups(&["xdc"])).unwrap();
        let slot = slots.get(1).unwrap();
        assert_eq!(slot.selection(), names(&["amc/ip"]));
        assert_eq!(slot.candidates(), names(&["xdc/ip_ref", "xdc/profile"]));
    }

    #[test]
    fn refresh_failure_leaves_slots_unchanged() {
        let catalog = Arc::new(TestCatalog::new());
        let engine = Engine::new(catalog.clone());
        let mut slots = SlotManager::new();
        slots.grow_to(2, &engine, &groups(&["amc"])).unwrap();
        slots
            .select(1, names(&["amc/ip"]), &engine, &groups(&["amc"]))
            .unwrap();

        catalog.fail_next_open();
        assert!(slots.refresh(&engine, &groups(&["amc", "xdc"])).is_err());
        assert_eq!(
            slots.get(0).unwrap().candidates(),
            names(&["amc/ip", "amc/bt"])
        );
        assert_eq!(slots.get(1).unwrap().candidates(), names(&["amc/ip"]));

        assert!(slots.grow_to(3, &engine, &groups(&["pf"])).is_err());
        assert_eq!(slots.len(), 2);
    }
}
