//! Integration tests for module exports.
//!
//! Verify that all public modules and types are correctly exported and
//! accessible via absolute paths.

/// Random streams are reachable from `pricer_core::rng`.
#[test]
fn test_rng_module_exports() {
    use pricer_core::rng::derive_path_seed;
    use pricer_core::rng::PricerRng;

    let mut rng = PricerRng::for_path(1, 2);
    assert_eq!(rng.seed(), derive_path_seed(1, 2));
    assert!(rng.gen_normal().is_finite());
}

/// Simulation containers are reachable from `pricer_core::types`.
#[test]
fn test_types_module_exports() {
    use pricer_core::types::error::PricingError;
    use pricer_core::types::path::Path;
    use pricer_core::types::simulation::SimulationResult;
    use pricer_core::types::state::State;

    let path = Path::from_states(vec![State::new(1.0), State::new(2.0)]);
    assert_eq!(path.len(), 2);

    let result = SimulationResult::from_parts(vec![1.0, 2.0], None, 1, 2, 0).unwrap();
    let err: PricingError = result.variance_values().unwrap_err();
    assert!(err.is_unsupported_query());
}

/// Surfaces and interpolators are reachable from their modules.
#[test]
fn test_market_data_module_exports() {
    use pricer_core::market_data::error::MarketDataError;
    use pricer_core::market_data::surfaces::LocalVolatilitySurface;
    use pricer_core::math::interpolators::BilinearInterpolator;

    let surface = LocalVolatilitySurface::new(
        vec![0.0, 1.0],
        vec![50.0, 150.0],
        vec![vec![0.2, 0.2], vec![0.2, 0.2]],
    )
    .unwrap();
    assert_eq!(surface.sigma(0.5, 100.0), 0.2);

    let err = LocalVolatilitySurface::new(vec![0.0, 1.0], vec![50.0, 150.0], vec![vec![0.2, 0.2]])
        .unwrap_err();
    assert!(matches!(err, MarketDataError::ShapeMismatch { .. }));

    let zs = [&[0.0, 1.0][..], &[1.0, 2.0][..]];
    let interp = BilinearInterpolator::new(&[0.0, 1.0], &[0.0, 1.0], &zs).unwrap();
    assert_eq!(interp.interpolate(1.0, 1.0), 2.0);
}

/// Module errors collapse into the shared taxonomy.
#[test]
fn test_error_conversion_exports() {
    use pricer_core::market_data::MarketDataError;
    use pricer_core::types::{InterpolationError, PricingError};

    let a: PricingError = MarketDataError::ShapeMismatch { rows: 1, times: 2 }.into();
    let b: PricingError = InterpolationError::InsufficientData { got: 0, need: 2 }.into();
    assert!(a.is_configuration());
    assert!(b.is_configuration());
}

/// With the `serde` feature, containers serialise to JSON.
#[cfg(feature = "serde")]
#[test]
fn test_serde_round_trip_of_state() {
    use pricer_core::types::State;

    let state = State::with_variance(100.0, 0.04);
    let json = serde_json::to_string(&state).unwrap();
    let back: State = serde_json::from_str(&json).unwrap();
    assert_eq!(state, back);
}
