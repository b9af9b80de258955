mod simulation {
  use nncross::algorithms::*;
  use nncross::data::*;
  use nncross::simulation::*;
  use nncross::*;

  use rand::SeedableRng;

  // Each (removed pair, start) combination is equally likely; 16 of the 168
  // two-column combinations cross, none of the octagon ones do.
  const TWO_COLUMN_REFERENCE: f64 = 16.0 / 168.0;
  const TOLERANCE: f64 = 0.02;

  #[test]
  fn octagon_converges() -> Result<(), Error> {
    let mut rng = rand::rngs::SmallRng::seed_from_u64(1);
    let estimate = simulate(&Scenario::octagon(), 100_000, &mut rng)?;
    assert_eq!(estimate.trials, 100_000);
    assert_eq!(estimate.intersections, 0);
    assert_eq!(estimate.probability(), 0.0);
    Ok(())
  }

  #[test]
  fn two_column_converges() -> Result<(), Error> {
    let mut rng = rand::rngs::SmallRng::seed_from_u64(1);
    let estimate = simulate(&Scenario::two_column(), 100_000, &mut rng)?;
    assert!(
      (estimate.probability() - TWO_COLUMN_REFERENCE).abs() < TOLERANCE,
      "{}",
      estimate.probability()
    );
    assert!(estimate.touching <= estimate.intersections);
    Ok(())
  }

  #[test]
  fn zero_trials() {
    let mut rng = rand::rngs::SmallRng::seed_from_u64(1);
    assert_eq!(
      simulate(&Scenario::two_column(), 0, &mut rng),
      Err(Error::InvalidTrialCount)
    );
  }

  #[test]
  fn reproducible() -> Result<(), Error> {
    let run = |seed| {
      let mut rng = rand::rngs::SmallRng::seed_from_u64(seed);
      simulate(&Scenario::two_column(), 5_000, &mut rng)
    };
    assert_eq!(run(7)?, run(7)?);
    Ok(())
  }

  #[test]
  fn larger_shapes_keep_the_answer() -> Result<(), Error> {
    // Scaling both axes equally does not change any nearest-neighbor choice.
    let mut rng = rand::rngs::SmallRng::seed_from_u64(2);
    let scenario = Scenario::TwoColumn {
      width: 10.0,
      height: 20.0,
    };
    let estimate = simulate(&scenario, 50_000, &mut rng)?;
    assert!((estimate.probability() - TWO_COLUMN_REFERENCE).abs() < TOLERANCE);
    Ok(())
  }

  #[test]
  fn square_bow_tie() {
    let pts = vec![
      Point::new([0.0, 0.0]),
      Point::new([1.0, 1.0]),
      Point::new([1.0, 0.0]),
      Point::new([0.0, 1.0]),
    ];
    assert!(has_self_intersections(&pts, &Path::new(vec![0, 1, 2, 3])));
  }

  #[test]
  fn manual_trial() -> Result<(), Error> {
    // Remove A and B, start at D.
    let grid = PointSet::two_column(1.0, 2.0)?;
    let subset = vec![2, 3, 4, 5, 6, 7];
    let path = nearest_neighbor_path(&grid.select(&subset), 1)?.remap(&subset);
    assert_eq!(PointSet::describe(&path), "D-C-G-F-E-H");
    assert!(has_self_intersections(&grid, &path));
    Ok(())
  }
}
