//! # Random Number Generation
//!
//! Seeded pseudo-random source for the path simulator.
//!
//! ## Design Rationale
//!
//! - **Reproducibility**: every generator carries the seed it was built from,
//!   including generators drawn from OS entropy, so any run can be replayed
//! - **Explicit handles**: the simulator receives a `&mut SimulationRng`;
//!   there is no process-wide generator
//! - **Independent streams**: [`SimulationRng::derive`] hands each grid cell
//!   its own deterministic generator, so cells can run in any order or in
//!   parallel without sharing state
//!
//! ## Usage Example
//!
//! ```rust
//! use fra_pricing::rng::SimulationRng;
//!
//! let mut rng = SimulationRng::from_seed(12345);
//! let z = rng.gen_normal();
//!
//! // Batch generation into a pre-allocated buffer
//! let mut buffer = vec![0.0; 1000];
//! rng.fill_normal(&mut buffer);
//! # let _ = z;
//! ```

mod prng;

pub use prng::{derive_seed, SimulationRng};
