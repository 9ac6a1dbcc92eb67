use std::ops::Range;

use plotters::coord::Shift;
use plotters::prelude::*;

use crate::animation::{Frame, Tint, View};
use crate::error::Error;
use crate::Result;

/// 6 in at 100 dpi.
pub const CANVAS_SIZE: (u32, u32) = (600, 600);

pub(crate) fn render_error<E: std::fmt::Display>(err: E) -> Error {
    Error::RenderError(err.to_string())
}

/// Widens empty ranges so the chart still has a scale.
pub fn drawable_range((min, max): (f64, f64)) -> Range<f64> {
    if max > min {
        min..max
    } else {
        min - 0.5..max + 0.5
    }
}

fn color(tint: Tint) -> RGBColor {
    match tint {
        Tint::Red => RED,
        Tint::Blue => BLUE,
    }
}

/// Draws `frame` on `area` with no axes, ticks or margins. In three
/// dimensions the data `z` axis is drawn vertically.
pub fn draw_frame<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    view: &View,
    frame: &Frame,
) -> Result<()> {
    match view {
        View::Plane { x, y } => {
            let mut chart = ChartBuilder::on(area)
                .margin(0)
                .build_cartesian_2d(drawable_range(*x), drawable_range(*y))
                .map_err(render_error)?;

            for scatter in frame {
                let tint = color(scatter.tint);
                let radius = scatter.marker.radius();
                chart
                    .draw_series(
                        scatter
                            .points
                            .iter()
                            .map(|point| Circle::new((point[0], point[1]), radius, tint.filled())),
                    )
                    .map_err(render_error)?;
            }
        }
        View::Space { x, y, z } => {
            let (x, y, z) = (drawable_range(*x), drawable_range(*y), drawable_range(*z));
            let mut chart = ChartBuilder::on(area)
                .margin(0)
                .build_cartesian_3d(x.clone(), z.clone(), y.clone())
                .map_err(render_error)?;
            chart.with_projection(|mut pb| {
                pb.yaw = 0.5;
                pb.pitch = 0.3;
                pb.scale = 0.8;
                pb.into_matrix()
            });

            // view box, corners indexed by bit (x, y, z)
            let corner = |i: usize| {
                (
                    if i & 1 == 0 { x.start } else { x.end },
                    if i & 4 == 0 { z.start } else { z.end },
                    if i & 2 == 0 { y.start } else { y.end },
                )
            };
            let edges = (0..8usize).flat_map(|i| {
                [1usize, 2, 4]
                    .into_iter()
                    .filter(move |bit| i & bit == 0)
                    .map(move |bit| (i, i | bit))
            });
            chart
                .draw_series(edges.map(|(a, b)| {
                    PathElement::new(vec![corner(a), corner(b)], BLACK.mix(0.2))
                }))
                .map_err(render_error)?;

            for scatter in frame {
                let tint = color(scatter.tint);
                let radius = scatter.marker.radius();
                chart
                    .draw_series(scatter.points.iter().map(|point| {
                        Circle::new((point[0], point[2], point[1]), radius, tint.filled())
                    }))
                    .map_err(render_error)?;
            }
        }
    }
    Ok(())
}
