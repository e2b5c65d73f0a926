pub mod bench;
pub mod engine;
pub mod observations;
pub mod ols;
pub mod runner;
pub mod summary;
pub mod theory;

pub use engine::{run_simulation, run_simulation_with_rng};
pub use observations::generate_observations;
pub use ols::fit_ols;
pub use runner::{run_batch, run_sweep};
pub use summary::{summarize, summarize_sweep};
