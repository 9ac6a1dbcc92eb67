use itertools::{Itertools, MinMaxResult};
use log::info;
use ndarray::{ArrayView3, Axis};

use super::{check_dimensions, scatter, Animation, Frame, Marker, Tint, View};
use crate::error::Error;
use crate::format::Scalar;
use crate::Result;

/// `(min, max)` of every spatial axis over all steps and bodies.
pub fn global_bounds<T: Scalar>(data: ArrayView3<T>) -> Vec<(f64, f64)> {
    data.axis_iter(Axis(1))
        .map(|axis| {
            match axis
                .iter()
                .map(|&value| -> f64 { value.into() })
                .minmax_by(|a, b| a.total_cmp(b))
            {
                MinMaxResult::NoElements => (0., 0.),
                MinMaxResult::OneElement(value) => (value, value),
                MinMaxResult::MinMax(min, max) => (min, max),
            }
        })
        .collect()
}

/// Every step of `data`, shaped `(steps, dimensions, bodies)`, as one blue
/// point cloud.
pub fn animate<T: Scalar>(data: ArrayView3<T>) -> Result<Animation> {
    let (steps, dimensions, bodies) = data.dim();
    check_dimensions(dimensions)?;
    if steps == 0 || bodies == 0 {
        return Err(Error::EmptyTrajectory);
    }

    let view = View::from_bounds(&global_bounds(data))?;

    let frames: Vec<Frame> = data
        .axis_iter(Axis(0))
        .map(|step| vec![scatter(step, 0..bodies, Marker::Cloud, Tint::Blue)])
        .collect();
    info!("There are {} frames", frames.len());

    let animation = Animation::new(view, frames);
    info!("Animation created!");
    Ok(animation)
}
