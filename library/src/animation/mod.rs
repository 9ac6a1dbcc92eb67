use std::ops::Range;

use ndarray::{ArrayView2, Axis};

use crate::error::Error;
use crate::format::{Positions, Scalar};
use crate::Result;

pub mod galaxy;
pub mod general;

pub const FRAME_INTERVAL_MS: u32 = 100;
pub const REPEAT_DELAY_MS: u32 = 1000;

/// Coordinates of one body; `z` is 0 in two-dimensional frames.
pub type Point = [f64; 3];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Marker {
    Cloud,
    BlackHole,
}

impl Marker {
    pub fn radius(self) -> u32 {
        match self {
            Marker::Cloud => 1,
            Marker::BlackHole => 3,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tint {
    Red,
    Blue,
}

/// Points sharing one marker and color.
#[derive(Clone, Debug, PartialEq)]
pub struct Scatter {
    pub points: Vec<Point>,
    pub marker: Marker,
    pub tint: Tint,
}

/// Every scatter drawn for one animation frame.
pub type Frame = Vec<Scatter>;

/// Fixed camera, as `(min, max)` per axis.
#[derive(Clone, Debug, PartialEq)]
pub enum View {
    Plane {
        x: (f64, f64),
        y: (f64, f64),
    },
    Space {
        x: (f64, f64),
        y: (f64, f64),
        z: (f64, f64),
    },
}

impl View {
    pub fn symmetric(dimensions: usize, half_width: f64) -> Result<View> {
        View::from_bounds(&vec![(-half_width, half_width); dimensions])
    }

    /// Fails on any NaN or infinite limit.
    pub fn from_bounds(bounds: &[(f64, f64)]) -> Result<View> {
        if let Some((axis, &(min, max))) = bounds
            .iter()
            .enumerate()
            .find(|(_, (min, max))| !min.is_finite() || !max.is_finite())
        {
            return Err(Error::NonFiniteBounds { axis, min, max });
        }

        match *bounds {
            [x, y] => Ok(View::Plane { x, y }),
            [x, y, z] => Ok(View::Space { x, y, z }),
            _ => Err(Error::UnsupportedDimensions(bounds.len())),
        }
    }

    pub fn dimensions(&self) -> usize {
        match self {
            View::Plane { .. } => 2,
            View::Space { .. } => 3,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Animation {
    pub view: View,
    pub frames: Vec<Frame>,
    pub interval_ms: u32,
    pub repeat_delay_ms: u32,
}

impl Animation {
    pub fn new(view: View, frames: Vec<Frame>) -> Animation {
        Animation {
            view,
            frames,
            interval_ms: FRAME_INTERVAL_MS,
            repeat_delay_ms: REPEAT_DELAY_MS,
        }
    }

    pub fn fps(&self) -> f64 {
        1000. / self.interval_ms as f64
    }

    /// Number of extra copies of the last frame that fill the pause before
    /// the animation loops.
    pub fn hold_frames(&self) -> usize {
        self.repeat_delay_ms
            .checked_div(self.interval_ms)
            .unwrap_or_default() as usize
    }

    /// Frames in playback order, including the pause before looping.
    pub fn playback(&self) -> impl Iterator<Item = &Frame> {
        let hold = self.hold_frames();
        self.frames.iter().chain(
            self.frames
                .last()
                .into_iter()
                .flat_map(move |last| itertools::repeat_n(last, hold)),
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Style {
    Galaxy,
    General,
}

impl Style {
    pub fn animate(self, positions: &Positions) -> Result<Animation> {
        match (self, positions) {
            (Style::Galaxy, Positions::F32(data)) => galaxy::animate(data.view()),
            (Style::Galaxy, Positions::F64(data)) => galaxy::animate(data.view()),
            (Style::General, Positions::F32(data)) => general::animate(data.view()),
            (Style::General, Positions::F64(data)) => general::animate(data.view()),
        }
    }
}

pub(crate) fn check_dimensions(dimensions: usize) -> Result<()> {
    match dimensions {
        2 | 3 => Ok(()),
        other => Err(Error::UnsupportedDimensions(other)),
    }
}

/// Builds a scatter from the `bodies` columns of one step shaped
/// `(dimensions, bodies)`.
pub(crate) fn scatter<T: Scalar>(
    step: ArrayView2<T>,
    bodies: Range<usize>,
    marker: Marker,
    tint: Tint,
) -> Scatter {
    let points = step
        .axis_iter(Axis(1))
        .skip(bodies.start)
        .take(bodies.len())
        .map(|body| {
            let mut point = [0.; 3];
            for (coord, value) in point.iter_mut().zip(body.iter()) {
                *coord = (*value).into();
            }
            point
        })
        .collect();

    Scatter {
        points,
        marker,
        tint,
    }
}
