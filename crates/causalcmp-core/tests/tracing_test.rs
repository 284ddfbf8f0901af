//! Tracing setup tests.

use std::sync::Mutex;

use causalcmp_core::tracing::init_tracing;

static TRACING_MUTEX: Mutex<()> = Mutex::new(());

#[test]
fn test_init_tracing_with_filter() {
    let _lock = TRACING_MUTEX.lock().unwrap();
    std::env::set_var("CAUSALCMP_LOG", "causalcmp_graph=debug,causalcmp_compare=warn");
    init_tracing();
    std::env::remove_var("CAUSALCMP_LOG");
}

#[test]
fn test_init_tracing_idempotent() {
    let _lock = TRACING_MUTEX.lock().unwrap();
    init_tracing();
    init_tracing();
    tracing::info!("still alive after repeated init");
}

#[test]
fn test_invalid_filter_falls_back() {
    let _lock = TRACING_MUTEX.lock().unwrap();
    std::env::set_var("CAUSALCMP_LOG", "===not a filter===");
    init_tracing();
    std::env::remove_var("CAUSALCMP_LOG");
}
