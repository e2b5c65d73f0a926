use crate::result::Parameter;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SimError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("Degenerate input: all {n} predictor values are identical")]
    DegenerateInput { n: usize },
    #[error("Insufficient data: {rows} replication(s) for {parameter}{}, need at least 2", size_suffix(.sample_size))]
    InsufficientData {
        parameter: Parameter,
        sample_size: Option<usize>,
        rows: usize,
    },
    #[error("Length mismatch: {x} predictor values but {y} responses")]
    LengthMismatch { x: usize, y: usize },
}

fn size_suffix(sample_size: &Option<usize>) -> String {
    match sample_size {
        Some(n) => format!(" at n={n}"),
        None => String::new(),
    }
}
