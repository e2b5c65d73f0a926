use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::SimError;

/// Paired draws from the linear model for one replication.
#[derive(Debug, Clone, PartialEq)]
pub struct ObservationSet {
    x: Vec<f64>,
    y: Vec<f64>,
}

impl ObservationSet {
    pub fn new(x: Vec<f64>, y: Vec<f64>) -> Result<Self, SimError> {
        if x.len() != y.len() {
            return Err(SimError::LengthMismatch {
                x: x.len(),
                y: y.len(),
            });
        }
        Ok(Self { x, y })
    }

    pub fn from_pairs(pairs: &[(f64, f64)]) -> Self {
        let (x, y) = pairs.iter().copied().unzip();
        Self { x, y }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.x.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    pub fn x(&self) -> &[f64] {
        &self.x
    }

    pub fn y(&self) -> &[f64] {
        &self.y
    }

    pub fn pairs(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.x.iter().copied().zip(self.y.iter().copied())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Parameter {
    #[serde(rename = "beta0_hat")]
    Beta0Hat,
    #[serde(rename = "beta1_hat")]
    Beta1Hat,
}

impl Parameter {
    pub const ALL: [Parameter; 2] = [Parameter::Beta0Hat, Parameter::Beta1Hat];

    pub fn name(self) -> &'static str {
        match self {
            Parameter::Beta0Hat => "beta0_hat",
            Parameter::Beta1Hat => "beta1_hat",
        }
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FitResult {
    pub beta0_hat: f64,
    pub beta1_hat: f64,
}

impl FitResult {
    #[inline]
    pub fn get(&self, parameter: Parameter) -> f64 {
        match parameter {
            Parameter::Beta0Hat => self.beta0_hat,
            Parameter::Beta1Hat => self.beta1_hat,
        }
    }
}

impl From<(f64, f64)> for FitResult {
    fn from((beta0_hat, beta1_hat): (f64, f64)) -> Self {
        Self {
            beta0_hat,
            beta1_hat,
        }
    }
}

/// One row per replication, in the order replications were requested.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReplicationTable {
    pub sample_size: Option<usize>,
    pub fits: Vec<FitResult>,
}

impl ReplicationTable {
    pub fn new(sample_size: usize, fits: Vec<FitResult>) -> Self {
        Self {
            sample_size: Some(sample_size),
            fits,
        }
    }

    /// Untagged table, e.g. assembled from literal fits.
    pub fn from_fits(fits: Vec<FitResult>) -> Self {
        Self {
            sample_size: None,
            fits,
        }
    }

    pub fn n_replications(&self) -> usize {
        self.fits.len()
    }

    pub fn column(&self, parameter: Parameter) -> Vec<f64> {
        self.fits.iter().map(|fit| fit.get(parameter)).collect()
    }
}

/// Replication tables keyed by sample size, in the order sizes were supplied.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SweepTable {
    entries: Vec<(usize, ReplicationTable)>,
}

impl SweepTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns false and leaves the table untouched if `sample_size` is already present.
    pub fn insert(&mut self, sample_size: usize, table: ReplicationTable) -> bool {
        if self.contains(sample_size) {
            return false;
        }
        self.entries.push((sample_size, table));
        true
    }

    pub fn contains(&self, sample_size: usize) -> bool {
        self.entries.iter().any(|(n, _)| *n == sample_size)
    }

    pub fn get(&self, sample_size: usize) -> Option<&ReplicationTable> {
        self.entries
            .iter()
            .find(|(n, _)| *n == sample_size)
            .map(|(_, table)| table)
    }

    pub fn sample_sizes(&self) -> Vec<usize> {
        self.entries.iter().map(|(n, _)| *n).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, &ReplicationTable)> {
        self.entries.iter().map(|(n, table)| (*n, table))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SummaryRow {
    pub parameter: Parameter,
    pub sample_size: Option<usize>,
    pub emp_mean: f64,
    pub emp_var: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SummaryStats {
    pub rows: Vec<SummaryRow>,
}

impl SummaryStats {
    pub fn get(&self, parameter: Parameter, sample_size: Option<usize>) -> Option<&SummaryRow> {
        self.rows
            .iter()
            .find(|row| row.parameter == parameter && row.sample_size == sample_size)
    }

    /// Rows for one coefficient, in sweep order.
    pub fn for_parameter(&self, parameter: Parameter) -> impl Iterator<Item = &SummaryRow> {
        self.rows.iter().filter(move |row| row.parameter == parameter)
    }
}
