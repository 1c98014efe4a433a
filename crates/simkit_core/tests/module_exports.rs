//! Integration tests for module exports.
//!
//! Verifies that public modules and types are reachable through absolute
//! paths and through the crate-root re-exports.

/// Random sources are accessible and interchangeable behind the trait.
#[test]
fn test_rng_module_exports() {
    use simkit_core::rng::stream_seed;
    use simkit_core::rng::ReplaySource;
    use simkit_core::rng::SimRng;
    use simkit_core::rng::UniformSource;

    fn draw<S: UniformSource + ?Sized>(source: &mut S) -> f64 {
        source.next_uniform()
    }

    let mut rng = SimRng::from_seed(7);
    assert_eq!(rng.seed(), 7);
    assert!((0.0..1.0).contains(&draw(&mut rng)));

    let mut replay = ReplaySource::new(vec![0.25, 0.75]).unwrap();
    assert_eq!(draw(&mut replay), 0.25);
    assert_eq!(draw(&mut replay), 0.75);
    assert_eq!(replay.draws(), 2);

    assert_ne!(stream_seed(7, 0), stream_seed(7, 1));
}

/// Variate generators and sample types are accessible.
#[test]
fn test_variate_module_exports() {
    use simkit_core::variate::generate_exponential;
    use simkit_core::variate::generate_normal_pair;
    use simkit_core::variate::generate_sample;
    use simkit_core::variate::generate_uniform;
    use simkit_core::variate::round4;
    use simkit_core::variate::Distribution;
    use simkit_core::variate::DEFAULT_PREVIEW_LEN;

    let mut rng = simkit_core::rng::SimRng::from_seed(1);
    let _ = generate_uniform(&mut rng, 0.0, 1.0).unwrap();
    let _ = generate_exponential(&mut rng, 2.0).unwrap();
    let _ = generate_normal_pair(&mut rng, 0.0, 1.0).unwrap();

    let sample = generate_sample(Distribution::normal(0.0, 1.0), 101, &mut rng).unwrap();
    assert_eq!(sample.len(), 101);
    assert_eq!(sample.preview(DEFAULT_PREVIEW_LEN).values.len(), 100);
    assert_eq!(round4(1.234_56), 1.2346);
}

/// Histogram types are accessible.
#[test]
fn test_histogram_module_exports() {
    use simkit_core::histogram::build_histogram;
    use simkit_core::histogram::BinEdges;
    use simkit_core::histogram::BinningMode;
    use simkit_core::histogram::FrequencyRow;
    use simkit_core::histogram::FrequencyTable;

    let values = [1.0, 2.0, 3.0, 4.0];
    let histogram = build_histogram(&values, 3, BinningMode::DataRange).unwrap();
    let first: &FrequencyRow = &histogram.table.rows()[0];
    assert_eq!(first.label(), "[1.0000 - 2.0000]");

    let edges = BinEdges::from_breaks(vec![0.0, 2.0, 4.0]).unwrap();
    let table = FrequencyTable::tally(&values, &edges).unwrap();
    assert_eq!(table.counts(), vec![2, 2]);
}

/// Bowling types are accessible.
#[test]
fn test_bowling_module_exports() {
    use simkit_core::bowling::play_round;
    use simkit_core::bowling::BowlingTables;
    use simkit_core::bowling::ProbabilityTable;
    use simkit_core::bowling::RoundOutcome;
    use simkit_core::bowling::RoundState;
    use simkit_core::bowling::ScoringRules;
    use simkit_core::bowling::PINS;

    let tables = BowlingTables::default();
    let first: &ProbabilityTable = tables.first_ball();
    assert_eq!(first.outcomes().len(), 5);

    let mut rng = simkit_core::rng::SimRng::from_seed(3);
    let outcome = play_round(&tables, &mut rng);
    assert!(outcome.pins() <= PINS);
    assert!(outcome.score(&ScoringRules::default()) <= 20);
    assert_eq!(RoundOutcome::from_balls(10, 0), RoundOutcome::Strike);
    assert!(!RoundState::FirstBall.is_done());
}

/// Monte Carlo types are accessible.
#[test]
fn test_mc_module_exports() {
    use simkit_core::mc::run_simulation;
    use simkit_core::mc::run_simulation_with;
    use simkit_core::mc::simulate_trial;
    use simkit_core::mc::BowlingConfig;
    use simkit_core::mc::ConfigError;
    use simkit_core::mc::SimulationResult;
    use simkit_core::mc::TrialRow;
    use simkit_core::mc::MAX_ITERATIONS;

    let config = BowlingConfig::builder().iterations(10).seed(5).build().unwrap();
    let result: SimulationResult = run_simulation(&config).unwrap();
    let rows: Vec<TrialRow> = result.window(1, 3);
    assert_eq!(rows.len(), 3);

    let mut rng = simkit_core::rng::SimRng::from_seed(5);
    let replayed = run_simulation_with(&config, &mut rng).unwrap();
    assert_eq!(replayed.trials().len(), 10);

    let score = simulate_trial(config.tables(), &config.rules(), 2, &mut rng);
    assert!((12..=40).contains(&score));

    let err = BowlingConfig::builder()
        .iterations(MAX_ITERATIONS + 1)
        .build()
        .unwrap_err();
    assert!(matches!(err, ConfigError::InvalidIterationCount(_)));
}

/// Crate-root re-exports work.
#[test]
fn test_root_reexports() {
    use simkit_core::build_histogram;
    use simkit_core::generate_sample;
    use simkit_core::BinningMode;
    use simkit_core::Distribution;
    use simkit_core::SimError;

    let mut rng = simkit_core::rng::SimRng::from_seed(11);
    let sample: simkit_core::Sample =
        generate_sample(Distribution::uniform(-1.0, 1.0), 50, &mut rng).unwrap();
    let histogram: simkit_core::Histogram =
        build_histogram(sample.values(), 4, BinningMode::Rounded).unwrap();
    assert_eq!(histogram.table.total(), 50);

    let err: SimError = build_histogram(&[], 4, BinningMode::DataRange).unwrap_err();
    assert_eq!(err, SimError::EmptySample);

    let _: simkit_core::Result<()> = Ok(());
    let _ = simkit_core::BowlingConfig::builder();
    let _: Option<simkit_core::SimulationResult> = None;
}
