//! Two colliding clusters, each led by a black hole.
//!
//! Bodies `[0, n/2)` form the red cluster and `[n/2, n)` the blue one. The
//! first body of each half is its black hole.

use log::info;
use ndarray::{ArrayView3, Axis};

use super::{check_dimensions, scatter, Animation, Frame, Marker, Tint, View};
use crate::error::Error;
use crate::format::Scalar;
use crate::Result;

/// Only every `STEP_STRIDE`-th simulation step is drawn.
pub const STEP_STRIDE: usize = 10;
pub const HALF_WIDTH: f64 = 500.;

pub fn half_width(dimensions: usize) -> f64 {
    if dimensions == 3 {
        HALF_WIDTH / 3.
    } else {
        HALF_WIDTH
    }
}

/// `data` is shaped `(steps, dimensions, bodies)`.
pub fn animate<T: Scalar>(data: ArrayView3<T>) -> Result<Animation> {
    let (steps, dimensions, bodies) = data.dim();
    check_dimensions(dimensions)?;
    if bodies < 2 {
        return Err(Error::TooFewBodies(bodies));
    }
    if steps == 0 {
        return Err(Error::EmptyTrajectory);
    }

    let view = View::symmetric(dimensions, half_width(dimensions))?;
    let split = bodies / 2;

    let frames: Vec<Frame> = data
        .axis_iter(Axis(0))
        .step_by(STEP_STRIDE)
        .map(|step| {
            vec![
                scatter(step, 1..split, Marker::Cloud, Tint::Red),
                scatter(step, split + 1..bodies, Marker::Cloud, Tint::Blue),
                scatter(step, 0..1, Marker::BlackHole, Tint::Red),
                scatter(step, split..split + 1, Marker::BlackHole, Tint::Blue),
            ]
        })
        .collect();
    info!("There are {} frames", frames.len());

    let animation = Animation::new(view, frames);
    info!("Animation created!");
    Ok(animation)
}
