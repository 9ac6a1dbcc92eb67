#[cfg(test)]
mod nbodyviz_tests_animation {
    use nbodyviz::{
        animation::{
            galaxy::{self, STEP_STRIDE},
            general, Marker, Style, Tint, View, FRAME_INTERVAL_MS, REPEAT_DELAY_MS,
        },
        error::Error,
        format::Positions,
    };
    use ndarray::{Array, Array3};

    /// Body `b` of step `s` sits at `(s, b, -b)` on the first axes.
    fn trajectory(steps: usize, dims: usize, bodies: usize) -> Array3<f64> {
        Array::from_shape_fn((steps, dims, bodies), |(s, d, b)| match d {
            0 => s as f64,
            1 => b as f64,
            _ => -(b as f64),
        })
    }

    #[test]
    fn case_01_general_rejects_dimensions() {
        for dims in [1usize, 4] {
            let data = trajectory(2, dims, 3);
            let result = general::animate(data.view());
            assert!(matches!(result, Err(Error::UnsupportedDimensions(d)) if d == dims));
        }
    }

    #[test]
    fn case_02_general_global_bounds() -> anyhow::Result<()> {
        let mut data = trajectory(4, 3, 5);
        data[[2, 2, 1]] = 42.;
        let animation = general::animate(data.view())?;

        assert_eq!(
            View::Space {
                x: (0., 3.),
                y: (0., 4.),
                z: (-4., 42.),
            },
            animation.view
        );
        assert_eq!(4, animation.frames.len());
        for (step, frame) in animation.frames.iter().enumerate() {
            assert_eq!(1, frame.len());
            assert_eq!(Marker::Cloud, frame[0].marker);
            assert_eq!(Tint::Blue, frame[0].tint);
            assert_eq!(5, frame[0].points.len());
            assert_eq!(step as f64, frame[0].points[4][0]);
        }
        Ok(())
    }

    #[test]
    fn case_03_general_plane_points() -> anyhow::Result<()> {
        let data = Array::from_shape_vec((1, 2, 3), vec![1f32, 2., 3., -1., -2., -3.])?;
        let animation = general::animate(data.view())?;
        assert_eq!(
            View::Plane {
                x: (1., 3.),
                y: (-3., -1.),
            },
            animation.view
        );
        assert_eq!(
            vec![[1., -1., 0.], [2., -2., 0.], [3., -3., 0.]],
            animation.frames[0][0].points
        );
        Ok(())
    }

    #[test]
    fn case_04_general_empty_trajectory() {
        let data = trajectory(0, 2, 3);
        assert!(matches!(
            general::animate(data.view()),
            Err(Error::EmptyTrajectory)
        ));
    }

    #[test]
    fn case_05_galaxy_frames_and_clusters() -> anyhow::Result<()> {
        let data = trajectory(25, 2, 7);
        let animation = galaxy::animate(data.view())?;

        // steps 0, 10, 20
        assert_eq!(3, animation.frames.len());
        assert_eq!(
            View::Plane {
                x: (-500., 500.),
                y: (-500., 500.),
            },
            animation.view
        );

        for (index, frame) in animation.frames.iter().enumerate() {
            let step = (index * STEP_STRIDE) as f64;
            assert_eq!(4, frame.len());

            let (red_cloud, blue_cloud, red_hole, blue_hole) =
                (&frame[0], &frame[1], &frame[2], &frame[3]);

            assert_eq!((Marker::Cloud, Tint::Red), (red_cloud.marker, red_cloud.tint));
            assert_eq!(vec![[step, 1., 0.], [step, 2., 0.]], red_cloud.points);

            assert_eq!((Marker::Cloud, Tint::Blue), (blue_cloud.marker, blue_cloud.tint));
            assert_eq!(
                vec![[step, 4., 0.], [step, 5., 0.], [step, 6., 0.]],
                blue_cloud.points
            );

            assert_eq!((Marker::BlackHole, Tint::Red), (red_hole.marker, red_hole.tint));
            assert_eq!(vec![[step, 0., 0.]], red_hole.points);

            assert_eq!((Marker::BlackHole, Tint::Blue), (blue_hole.marker, blue_hole.tint));
            assert_eq!(vec![[step, 3., 0.]], blue_hole.points);
        }
        Ok(())
    }

    #[test]
    fn case_06_galaxy_three_dimensions() -> anyhow::Result<()> {
        let data = trajectory(10, 3, 2);
        let animation = galaxy::animate(data.view())?;
        let half = 500. / 3.;
        assert_eq!(
            View::Space {
                x: (-half, half),
                y: (-half, half),
                z: (-half, half),
            },
            animation.view
        );
        assert_eq!(1, animation.frames.len());
        assert!(animation.frames[0][0].points.is_empty());
        assert!(animation.frames[0][1].points.is_empty());
        assert_eq!(vec![[0., 1., -1.]], animation.frames[0][3].points);
        Ok(())
    }

    #[test]
    fn case_07_galaxy_rejects_bad_input() {
        let data = trajectory(10, 2, 1);
        assert!(matches!(
            galaxy::animate(data.view()),
            Err(Error::TooFewBodies(1))
        ));
        let data = trajectory(10, 5, 4);
        assert!(matches!(
            galaxy::animate(data.view()),
            Err(Error::UnsupportedDimensions(5))
        ));
    }

    #[test]
    fn case_08_timing_and_playback() -> anyhow::Result<()> {
        let positions = Positions::F32(trajectory(3, 2, 4).mapv(|v| v as f32));
        let animation = Style::General.animate(&positions)?;

        assert_eq!(FRAME_INTERVAL_MS, animation.interval_ms);
        assert_eq!(REPEAT_DELAY_MS, animation.repeat_delay_ms);
        assert_eq!(10., animation.fps());
        assert_eq!(10, animation.hold_frames());

        let playback: Vec<_> = animation.playback().collect();
        assert_eq!(3 + 10, playback.len());
        assert!(playback[3..].iter().all(|frame| *frame == &animation.frames[2]));
        Ok(())
    }

    #[test]
    fn case_09_style_dispatch() -> anyhow::Result<()> {
        let positions = Positions::F64(trajectory(30, 3, 6));
        let galaxy = Style::Galaxy.animate(&positions)?;
        let general = Style::General.animate(&positions)?;
        assert_eq!(3, galaxy.frames.len());
        assert_eq!(30, general.frames.len());
        Ok(())
    }

    #[test]
    fn case_10_general_rejects_non_finite_positions() {
        let mut data = trajectory(2, 2, 3);
        data[[1, 0, 1]] = f64::NAN;
        assert!(matches!(
            general::animate(data.view()),
            Err(Error::NonFiniteBounds { axis: 0, min, max }) if min.is_nan() || max.is_nan()
        ));

        let mut data = trajectory(2, 2, 3);
        data[[0, 1, 2]] = f64::INFINITY;
        assert!(matches!(
            general::animate(data.view()),
            Err(Error::NonFiniteBounds { axis: 1, min, max }) if min == 0. && max == f64::INFINITY
        ));

        let mut data = trajectory(3, 3, 4).mapv(|v| v as f32);
        data[[2, 2, 0]] = f32::NEG_INFINITY;
        assert!(matches!(
            Style::General.animate(&Positions::F32(data)),
            Err(Error::NonFiniteBounds { axis: 2, min, .. }) if min == f64::NEG_INFINITY
        ));

        assert!(matches!(
            View::from_bounds(&[(0., 1.), (f64::NAN, 1.)]),
            Err(Error::NonFiniteBounds { axis: 1, .. })
        ));
    }
}
