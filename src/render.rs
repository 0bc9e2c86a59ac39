//! The renderer boundary.
//!
//! A [`Renderer`] turns a single [`DataArray`] into a plot, and composes plots by overlaying them.
//! [`render`] resolves the selection of a plot slot and renders it into a [`PlotOutput`]:
//!  - In explorer mode, a single array is handed to the renderer's interactive explorer view.
//!    Selecting more than one array in explorer mode yields an [alert](PlotOutput::Alert).
//!  - Otherwise every array is plotted independently and the successful plots are overlaid.
//!    An array which fails to render is logged and excluded rather than failing the whole plot.
//!  - An empty selection renders [nothing](PlotOutput::Empty).
//!
//! [`PlotSpecRenderer`] renders declarative, serialisable [`PlotSpec`]s.

mod plot_spec;

pub use plot_spec::{PlotKind, PlotLayer, PlotSpec, PlotSpecRenderer};

use thiserror::Error;

use crate::{
    dataset::DataArray,
    engine::{Engine, EngineError},
    name::FullyQualifiedName,
};

/// The alert shown when multiple arrays are selected in explorer mode.
pub const EXPLORER_MULTIPLE_ARRAYS_ALERT: &str =
    "Cannot plot multiple arrays when using the explorer";

/// A render error for a single array.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum RenderError {
    /// The renderer does not support the dimensionality of the array.
    #[error("cannot plot {name} with {dimensionality} dimensions")]
    UnsupportedDimensionality {
        /// The array name.
        name: FullyQualifiedName,
        /// The dimensionality of the array.
        dimensionality: usize,
    },
    /// Any other render error.
    #[error("cannot plot {name}: {reason}")]
    Other {
        /// The array name.
        name: FullyQualifiedName,
        /// The reason.
        reason: String,
    },
}

/// Traits for a renderer.
pub trait Renderer {
    /// The plot type.
    type Plot;

    /// Plot `array`.
    ///
    /// # Errors
    /// Returns a [`RenderError`] if `array` cannot be plotted.
    fn plot(&self, array: &DataArray) -> Result<Self::Plot, RenderError>;

    /// Overlay `layer` on `base`.
    fn overlay(&self, base: Self::Plot, layer: Self::Plot) -> Self::Plot;

    /// Open `array` in an interactive explorer view.
    ///
    /// # Errors
    /// Returns a [`RenderError`] if `array` cannot be explored.
    fn explore(&self, array: &DataArray) -> Result<Self::Plot, RenderError>;
}

/// The display output of a plot slot.
#[derive(Clone, Debug, PartialEq)]
pub enum PlotOutput<TPlot> {
    /// Nothing to display.
    Empty,
    /// An inline message, such as an unsupported combination of options.
    Alert(String),
    /// A plot.
    Plot(TPlot),
}

impl<TPlot: std::fmt::Display> std::fmt::Display for PlotOutput<TPlot> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => Ok(()),
            Self::Alert(alert) => write!(f, "{alert}"),
            Self::Plot(plot) => write!(f, "{plot}"),
        }
    }
}

impl<TPlot> PlotOutput<TPlot> {
    /// Returns the plot, if any.
    #[must_use]
    pub fn plot(&self) -> Option<&TPlot> {
        match self {
            Self::Plot(plot) => Some(plot),
            Self::Empty | Self::Alert(_) => None,
        }
    }

    /// Returns true if there is nothing to display.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

/// Render the arrays of `selection` with `renderer`.
///
/// # Errors
/// Returns an [`EngineError`] if the selection cannot be resolved, or [`EngineError::RenderError`] if the explorer view fails.
/// Plot failures outside of explorer mode are not errors.
pub fn render<TRenderer: Renderer>(
    engine: &Engine,
    renderer: &TRenderer,
    selection: &[FullyQualifiedName],
    explorer_mode: bool,
) -> Result<PlotOutput<TRenderer::Plot>, EngineError> {
    if explorer_mode {
        return match selection {
            [] => Ok(PlotOutput::Empty),
            [_] => match engine.get_arrays(selection)?.first() {
                Some(array) => Ok(PlotOutput::Plot(renderer.explore(array)?)),
                None => Ok(PlotOutput::Empty),
            },
            _ => Ok(PlotOutput::Alert(EXPLORER_MULTIPLE_ARRAYS_ALERT.to_string())),
        };
    }

    let mut composite: Option<TRenderer::Plot> = None;
    for array in engine.get_arrays(selection)? {
        match renderer.plot(&array) {
            Ok(plot) => {
                composite = Some(match composite {
                    Some(base) => renderer.overlay(base, plot),
                    None => plot,
                });
            }
            Err(err) => tracing::warn!(array = %array.name(), "{err}"),
        }
    }
    Ok(composite.map_or(PlotOutput::Empty, PlotOutput::Plot))
}
