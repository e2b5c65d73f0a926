use olsim_shared::{Parameter, ReplicationTable, SimError, SummaryRow, SummaryStats, SweepTable};

/// Arithmetic mean and unbiased (divisor `len - 1`) variance.
fn mean_and_variance(values: &[f64]) -> (f64, f64) {
    let len = values.len() as f64;
    let mean = values.iter().sum::<f64>() / len;
    let ss: f64 = values.iter().map(|v| (v - mean) * (v - mean)).sum();
    (mean, ss / (len - 1.0))
}

fn summarize_into(
    rows: &mut Vec<SummaryRow>,
    table: &ReplicationTable,
    sample_size: Option<usize>,
) -> Result<(), SimError> {
    for parameter in Parameter::ALL {
        if table.n_replications() < 2 {
            return Err(SimError::InsufficientData {
                parameter,
                sample_size,
                rows: table.n_replications(),
            });
        }
        let (emp_mean, emp_var) = mean_and_variance(&table.column(parameter));
        rows.push(SummaryRow {
            parameter,
            sample_size,
            emp_mean,
            emp_var,
        });
    }
    Ok(())
}

/// Empirical mean and variance of each coefficient across the table's replications.
pub fn summarize(table: &ReplicationTable) -> Result<SummaryStats, SimError> {
    let mut rows = Vec::with_capacity(Parameter::ALL.len());
    summarize_into(&mut rows, table, table.sample_size)?;
    Ok(SummaryStats { rows })
}

/// Per sample size summaries, in sweep order.
pub fn summarize_sweep(sweep: &SweepTable) -> Result<SummaryStats, SimError> {
    let mut rows = Vec::with_capacity(sweep.len() * Parameter::ALL.len());
    for (sample_size, table) in sweep.iter() {
        summarize_into(&mut rows, table, Some(sample_size))?;
    }
    Ok(SummaryStats { rows })
}

#[cfg(test)]
mod tests {
    use super::{summarize, summarize_sweep};
    use olsim_shared::{Parameter, ReplicationTable, SimError, SweepTable};

    #[test]
    fn literal_table_statistics() {
        let table = ReplicationTable::from_fits(vec![
            (1.0, 2.0).into(),
            (3.0, 4.0).into(),
            (5.0, 6.0).into(),
        ]);
        let stats = summarize(&table).unwrap();

        let b0 = stats.get(Parameter::Beta0Hat, None).unwrap();
        assert_eq!(b0.emp_mean, 3.0);
        assert_eq!(b0.emp_var, 4.0);
        let b1 = stats.get(Parameter::Beta1Hat, None).unwrap();
        assert_eq!(b1.emp_mean, 4.0);
        assert_eq!(b1.emp_var, 4.0);
    }

    #[test]
    fn single_replication_is_insufficient() {
        let table = ReplicationTable::new(30, vec![(1.0, 2.0).into()]);
        assert_eq!(
            summarize(&table),
            Err(SimError::InsufficientData {
                parameter: Parameter::Beta0Hat,
                sample_size: Some(30),
                rows: 1,
            })
        );
        assert!(summarize(&ReplicationTable::from_fits(vec![])).is_err());
    }

    #[test]
    fn sweep_rows_follow_insertion_order() {
        let mut sweep = SweepTable::new();
        sweep.insert(60, ReplicationTable::new(60, vec![(0.0, 1.0).into(), (2.0, 3.0).into()]));
        sweep.insert(30, ReplicationTable::new(30, vec![(1.0, 1.0).into(), (1.0, 5.0).into()]));

        let stats = summarize_sweep(&sweep).unwrap();
        let keys: Vec<_> = stats.rows.iter().map(|r| (r.sample_size, r.parameter)).collect();
        assert_eq!(
            keys,
            vec![
                (Some(60), Parameter::Beta0Hat),
                (Some(60), Parameter::Beta1Hat),
                (Some(30), Parameter::Beta0Hat),
                (Some(30), Parameter::Beta1Hat),
            ]
        );
        let row = stats.get(Parameter::Beta1Hat, Some(30)).unwrap();
        assert_eq!(row.emp_mean, 3.0);
        assert_eq!(row.emp_var, 8.0);
        assert_eq!(stats.get(Parameter::Beta0Hat, Some(30)).unwrap().emp_var, 0.0);
    }

    #[test]
    fn sweep_fails_when_any_size_is_short() {
        let mut sweep = SweepTable::new();
        sweep.insert(30, ReplicationTable::new(30, vec![(0.0, 1.0).into(), (2.0, 3.0).into()]));
        sweep.insert(60, ReplicationTable::new(60, vec![(0.0, 1.0).into()]));
        assert!(matches!(
            summarize_sweep(&sweep),
            Err(SimError::InsufficientData { sample_size: Some(60), rows: 1, .. })
        ));
    }
}
