//! Shared test infrastructure.
//!
//! Spins up throwaway MongoDB instances via testcontainers so repository and
//! API integration tests run against a real database without touching any
//! shared state. Requires a working Docker daemon.

pub mod mongo;

pub use mongo::TestMongo;
