use serde::{Deserialize, Serialize};

use crate::dataset::DataArray;

use super::{RenderError, Renderer};

/// A declarative plot specification, for a frontend to draw.
///
/// Serialised as JSON by its [`Display`](std::fmt::Display) implementation.
#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, Debug, Default)]
pub struct PlotSpec {
    /// True if the plot is an interactive explorer view.
    pub explorer: bool,
    /// The layers of the plot, drawn in order.
    pub layers: Vec<PlotLayer>,
}

/// A layer of a [`PlotSpec`], drawing a single array.
#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, Debug)]
pub struct PlotLayer {
    /// The fully qualified name of the array.
    pub label: String,
    /// The units of the array.
    pub units: String,
    /// The kind of plot.
    pub kind: PlotKind,
    /// The dimension along the horizontal axis.
    pub x: String,
    /// The dimension along the vertical axis of an [`image`](PlotKind::Image).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<String>,
    /// The shape of the array.
    pub shape: Vec<u64>,
}

/// The kind of a [`PlotLayer`].
#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Debug)]
#[serde(rename_all = "lowercase")]
pub enum PlotKind {
    /// A line over a 1D array.
    Line,
    /// An image of a 2D array.
    Image,
}

impl std::fmt::Display for PlotSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let json = serde_json::to_string_pretty(self).map_err(|_| std::fmt::Error)?;
        write!(f, "{json}")
    }
}

/// A [`Renderer`] of [`PlotSpec`]s.
///
/// 1D arrays are drawn as lines and 2D arrays as images, with the last dimension along the horizontal axis.
/// Scalars and arrays with more than two dimensions cannot be plotted.
/// The explorer view also accepts arrays with more than two dimensions, showing an image of the last two dimensions.
#[derive(Clone, Copy, Debug, Default)]
pub struct PlotSpecRenderer;

impl PlotSpecRenderer {
    fn layer(array: &DataArray, max_dimensionality: usize) -> Result<PlotLayer, RenderError> {
        let dimensions = array.dimensions();
        let (kind, x, y) = match dimensions {
            [] => {
                return Err(RenderError::UnsupportedDimensionality {
                    name: array.name().clone(),
                    dimensionality: 0,
                })
            }
            [x] => (PlotKind::Line, x.clone(), None),
            [.., y, x] if dimensions.len() <= max_dimensionality => {
                (PlotKind::Image, x.clone(), Some(y.clone()))
            }
            _ => {
                return Err(RenderError::UnsupportedDimensionality {
                    name: array.name().clone(),
                    dimensionality: dimensions.len(),
                })
            }
        };
        Ok(PlotLayer {
            label: array.name().to_string(),
            units: array.units().to_string(),
            kind,
            x,
            y,
            shape: array.shape().to_vec(),
        })
    }
}

impl Renderer for PlotSpecRenderer {
    type Plot = PlotSpec;

    fn plot(&self, array: &DataArray) -> Result<Self::Plot, RenderError> {
        Ok(PlotSpec {
            explorer: false,
            layers: vec![Self::layer(array, 2)?],
        })
    }

    fn overlay(&self, mut base: Self::Plot, layer: Self::Plot) -> Self::Plot {
        base.layers.extend(layer.layers);
        base
    }

    fn explore(&self, array: &DataArray) -> Result<Self::Plot, RenderError> {
        Ok(PlotSpec {
            explorer: true,
            layers: vec![Self::layer(array, usize::MAX)?],
        })
    }
}
