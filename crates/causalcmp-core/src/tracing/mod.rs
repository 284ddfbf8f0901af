//! Observability: `tracing` with an `EnvFilter` read from `CAUSALCMP_LOG`.

pub mod setup;

pub use setup::init_tracing;
