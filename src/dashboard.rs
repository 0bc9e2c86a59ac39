//! The dashboard session.
//!
//! A [`Dashboard`] holds the user-facing state of a session and recomputes derived state synchronously on each event:
//!  - [`select_groups`](Dashboard::select_groups) recomputes the candidates of every slot,
//!  - [`select_arrays`](Dashboard::select_arrays) recomputes the candidates of one slot,
//!  - [`add_plot`](Dashboard::add_plot) increments the add plot counter and grows the slots to match, and
//!  - [`set_explorer_mode`](Dashboard::set_explorer_mode) toggles the explorer view.
//!
//! Each event completes before the next is processed.
//! A host UI pulls [`SlotView`]s after each event to redraw the candidates, plot, and details of each slot.

use std::sync::Arc;

use crate::{
    dataset::DataArray,
    engine::{Engine, EngineError},
    name::{FullyQualifiedName, GroupName},
    render::{render, PlotOutput, Renderer},
    slot::{Slot, SlotManager, SlotState},
};

/// The about text of the dashboard, in markdown.
pub const ABOUT: &str = "# FAIR MAST Dashboard

A viewer for [public MAST data](https://mastapp.site/).

Select groups (loading a group can be slow), then select arrays to plot.
Arrays in a plot must share units; once an array is selected, only arrays with the same units are offered.
Use *+ Add plot* to compare further arrays in independent plots.
";

/// The view of a plot slot.
#[derive(Clone, Debug)]
pub struct SlotView<TPlot> {
    /// The arrays the user can select.
    pub candidates: Vec<FullyQualifiedName>,
    /// The selected arrays.
    pub selection: Vec<FullyQualifiedName>,
    /// The selection state.
    pub state: SlotState,
    /// The rendered plot.
    pub plot: PlotOutput<TPlot>,
    /// The selected arrays, for a details pane.
    pub details: Vec<Arc<DataArray>>,
}

/// A dashboard session.
#[derive(Debug)]
pub struct Dashboard<TRenderer> {
    engine: Engine,
    renderer: TRenderer,
    group_options: Vec<GroupName>,
    selected_groups: Vec<GroupName>,
    explorer_mode: bool,
    add_plot_clicks: usize,
    slots: SlotManager,
}

impl<TRenderer: Renderer> Dashboard<TRenderer> {
    /// Create a new dashboard with a single empty plot slot.
    ///
    /// # Errors
    /// Returns an [`EngineError`] if the groups of the catalog cannot be listed.
    pub fn new(engine: Engine, renderer: TRenderer) -> Result<Self, EngineError> {
        let group_options = engine.groups()?;
        let mut dashboard = Self {
            engine,
            renderer,
            group_options,
            selected_groups: Vec::new(),
            explorer_mode: false,
            add_plot_clicks: 0,
            slots: SlotManager::new(),
        };
        dashboard.add_plot()?;
        Ok(dashboard)
    }

    /// Returns the title of the dashboard, including the URL of the dataset if the catalog is remote.
    #[must_use]
    pub fn title(&self) -> String {
        match self.engine.catalog_url() {
            Some(url) => format!("FAIR MAST Dashboard -- data @ {url}"),
            None => "FAIR MAST Dashboard".to_string(),
        }
    }

    /// Returns the [about text](ABOUT) of the dashboard.
    #[must_use]
    pub fn about(&self) -> &'static str {
        ABOUT
    }

    /// Returns the engine.
    #[must_use]
    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    /// Returns the groups of the catalog.
    #[must_use]
    pub fn group_options(&self) -> &[GroupName] {
        &self.group_options
    }

    /// Returns the selected groups.
    #[must_use]
    pub fn selected_groups(&self) -> &[GroupName] {
        &self.selected_groups
    }

    /// Returns true if explorer mode is enabled.
    #[must_use]
    pub fn explorer_mode(&self) -> bool {
        self.explorer_mode
    }

    /// Returns the number of times a plot was added, including the initial plot.
    #[must_use]
    pub fn add_plot_clicks(&self) -> usize {
        self.add_plot_clicks
    }

    /// Returns the plot slots.
    #[must_use]
    pub fn slots(&self) -> &SlotManager {
        &self.slots
    }

    /// Returns the plot slot at `index`.
    ///
    /// # Errors
    /// Returns [`EngineError::SlotOutOfRange`] if there is no slot at `index`.
    pub fn slot(&self, index: usize) -> Result<&Slot, EngineError> {
        self.slots.get(index)
    }

    /// Select `groups`, loading any not yet loaded, and recompute the candidates of every slot.
    ///
    /// # Errors
    /// Returns an [`EngineError`] if a group cannot be loaded.
    /// The selected groups and every slot are unchanged in that case.
    pub fn select_groups(&mut self, groups: Vec<GroupName>) -> Result<(), EngineError> {
        self.slots.refresh(&self.engine, &groups)?;
        self.selected_groups = groups;
        Ok(())
    }

    /// Select the arrays of the slot at `index` and recompute its candidates.
    ///
    /// # Errors
    /// Returns an [`EngineError`] if there is no slot at `index` or its candidates cannot be enumerated.
    pub fn select_arrays(
        &mut self,
        index: usize,
        selection: Vec<FullyQualifiedName>,
    ) -> Result<(), EngineError> {
        self.slots
            .select(index, selection, &self.engine, &self.selected_groups)
    }

    /// Enable or disable explorer mode.
    pub fn set_explorer_mode(&mut self, explorer_mode: bool) {
        self.explorer_mode = explorer_mode;
    }

    /// Add a plot slot.
    ///
    /// Returns the number of slots.
    ///
    /// # Errors
    /// Returns an [`EngineError`] if the candidates of the new slot cannot be enumerated.
    /// The add plot counter is unchanged in that case.
    pub fn add_plot(&mut self) -> Result<usize, EngineError> {
        let clicks = self.add_plot_clicks + 1;
        self.slots
            .grow_to(clicks, &self.engine, &self.selected_groups)?;
        self.add_plot_clicks = clicks;
        Ok(self.slots.len())
    }

    /// Returns the view of the slot at `index`.
    ///
    /// # Errors
    /// Returns an [`EngineError`] if there is no slot at `index`, its selection cannot be resolved, or the explorer view fails.
    pub fn slot_view(&self, index: usize) -> Result<SlotView<TRenderer::Plot>, EngineError> {
        let slot = self.slots.get(index)?;
        Ok(SlotView {
            candidates: slot.candidates().to_vec(),
            selection: slot.selection().to_vec(),
            state: slot.state(),
            plot: render(
                &self.engine,
                &self.renderer,
                slot.selection(),
                self.explorer_mode,
            )?,
            details: self.engine.get_arrays(slot.selection())?,
        })
    }

    /// Returns the views of every slot, in order.
    ///
    /// # Errors
    /// Returns an [`EngineError`] if the view of any slot fails.
    pub fn views(&self) -> Result<Vec<SlotView<TRenderer::Plot>>, EngineError> {
        (0..self.slots.len())
            .map(|index| self.slot_view(index))
            .collect()
    }
}
