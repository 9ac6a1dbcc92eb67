#[cfg(test)]
mod nbodyviz_tests_energy {
    use nbodyviz::{energy::EnergyPlot, error::Error, format::Energy};
    use ndarray::{array, Array2};

    #[test]
    fn case_01_curves_and_total() -> anyhow::Result<()> {
        let energy = array![[1.0f64, 2.0, 3.5, 4.0], [-3.0, -4.0, -5.5, -6.0]];
        let plot = EnergyPlot::new(energy.view())?;

        assert_eq!("Kinetic", plot.kinetic().label);
        assert_eq!("Gravitational", plot.gravitational().label);
        assert_eq!("Total", plot.total().label);

        assert_eq!(
            vec![(0., 1.), (1., 2.), (2., 3.5), (3., 4.)],
            plot.kinetic().points
        );
        assert_eq!(
            vec![(0., -3.), (1., -4.), (2., -5.5), (3., -6.)],
            plot.gravitational().points
        );
        assert!(plot.total().points.iter().all(|&(_, total)| total == -2.));

        assert_eq!([0., 3.], plot.x_bounds);
        assert_eq!([-6., 4.], plot.y_bounds);
        Ok(())
    }

    #[test]
    fn case_02_from_f32_energy() -> anyhow::Result<()> {
        let energy = Energy::F32(array![[0.5f32, 0.25], [-0.5, -0.75]]);
        let plot = EnergyPlot::from_energy(&energy)?;
        assert_eq!(vec![(0., 0.), (1., -0.5)], plot.total().points);
        Ok(())
    }

    #[test]
    fn case_03_no_steps() -> anyhow::Result<()> {
        let energy = Array2::<f64>::zeros((2, 0));
        let plot = EnergyPlot::new(energy.view())?;
        assert!(plot.curves.iter().all(|curve| curve.points.is_empty()));
        assert_eq!([0., 0.], plot.x_bounds);
        assert_eq!([0., 0.], plot.y_bounds);
        Ok(())
    }

    #[test]
    fn case_04_rejects_wrong_row_count() {
        let energy = Array2::<f64>::zeros((3, 4));
        assert!(matches!(
            EnergyPlot::new(energy.view()),
            Err(Error::ShapeError(_))
        ));
    }
}
