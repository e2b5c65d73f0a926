pub mod config;
pub mod error;
pub mod result;

pub use config::{SampleSizeSweep, SimulationConfig};
pub use error::SimError;
pub use result::{
    FitResult, ObservationSet, Parameter, ReplicationTable, SummaryRow, SummaryStats, SweepTable,
};
