//! Test Module
//!
//! Crate-level test suite for the YugAI chatbot brain.
//!
//! ## Test Categories
//! - `classifier_tests`: normalization, keyword dispatch, priority order, totality
//! - `selector_tests`: reply membership, seeded selection, fallback behavior
//! - `engine_tests`: full turns through the engine, wire format, profile validation


/// Install a subscriber so `RUST_LOG=debug cargo test -- --nocapture`
/// shows engine events. Safe to call from every test; only the first call
/// installs anything.
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
