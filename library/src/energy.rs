use itertools::{Itertools, MinMaxResult};
use ndarray::ArrayView2;

use crate::error::Error;
use crate::format::energy::{COMPONENTS, GRAVITATIONAL, KINETIC};
use crate::format::{Energy, Scalar};
use crate::Result;

pub const TITLE: &str = "Energy by Time in n-body simulation";
pub const X_LABEL: &str = "Timestep";
pub const Y_LABEL: &str = "Energy";

#[derive(Clone, Debug, PartialEq)]
pub struct Curve {
    pub label: &'static str,
    pub points: Vec<(f64, f64)>,
}

/// Kinetic, gravitational and total energy against the step index. A flat
/// total curve means energy was conserved.
#[derive(Clone, Debug, PartialEq)]
pub struct EnergyPlot {
    pub curves: [Curve; 3],
    pub x_bounds: [f64; 2],
    pub y_bounds: [f64; 2],
}

impl EnergyPlot {
    /// `energy` is shaped `(2, steps)`.
    pub fn new<T: Scalar>(energy: ArrayView2<T>) -> Result<EnergyPlot> {
        if energy.nrows() != COMPONENTS {
            return Err(Error::ShapeError(ndarray::ShapeError::from_kind(
                ndarray::ErrorKind::IncompatibleShape,
            )));
        }

        let kinetic: Vec<f64> = energy.row(KINETIC).iter().map(|&v| v.into()).collect();
        let gravitational: Vec<f64> = energy
            .row(GRAVITATIONAL)
            .iter()
            .map(|&v| v.into())
            .collect();
        let total: Vec<f64> = kinetic.iter().zip(&gravitational).map(|(k, g)| k + g).collect();

        let curves = [
            Curve {
                label: "Kinetic",
                points: indexed(kinetic),
            },
            Curve {
                label: "Gravitational",
                points: indexed(gravitational),
            },
            Curve {
                label: "Total",
                points: indexed(total),
            },
        ];

        let last_step = energy.ncols().saturating_sub(1) as f64;
        let y_bounds = match curves
            .iter()
            .flat_map(|curve| curve.points.iter().map(|&(_, value)| value))
            .minmax_by(|a, b| a.total_cmp(b))
        {
            MinMaxResult::NoElements => [0., 0.],
            MinMaxResult::OneElement(value) => [value, value],
            MinMaxResult::MinMax(min, max) => [min, max],
        };

        Ok(EnergyPlot {
            curves,
            x_bounds: [0., last_step],
            y_bounds,
        })
    }

    pub fn from_energy(energy: &Energy) -> Result<EnergyPlot> {
        match energy {
            Energy::F32(data) => EnergyPlot::new(data.view()),
            Energy::F64(data) => EnergyPlot::new(data.view()),
        }
    }

    pub fn kinetic(&self) -> &Curve {
        &self.curves[0]
    }

    pub fn gravitational(&self) -> &Curve {
        &self.curves[1]
    }

    pub fn total(&self) -> &Curve {
        &self.curves[2]
    }
}

fn indexed(values: Vec<f64>) -> Vec<(f64, f64)> {
    values
        .into_iter()
        .enumerate()
        .map(|(step, value)| (step as f64, value))
        .collect()
}
