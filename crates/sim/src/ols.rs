use olsim_shared::{FitResult, ObservationSet, SimError};

/// Closed-form least-squares line through `observations`.
///
/// slope = Sxy / Sxx, intercept = mean(y) - slope * mean(x).
pub fn fit_ols(observations: &ObservationSet) -> Result<FitResult, SimError> {
    let n = observations.len();
    let x = observations.x();
    let y = observations.y();

    // Fewer than two points cannot pin down a line.
    let Some(&first) = x.first() else {
        return Err(SimError::DegenerateInput { n });
    };
    if n < 2 || x.iter().all(|&xi| xi == first) {
        return Err(SimError::DegenerateInput { n });
    }

    let n_f = n as f64;
    let x_bar = x.iter().sum::<f64>() / n_f;
    let y_bar = y.iter().sum::<f64>() / n_f;

    let mut sxx = 0.0_f64;
    let mut sxy = 0.0_f64;
    for (xi, yi) in observations.pairs() {
        let dx = xi - x_bar;
        sxx += dx * dx;
        sxy += dx * (yi - y_bar);
    }

    if !(sxx > 0.0 && sxx.is_finite()) {
        return Err(SimError::DegenerateInput { n });
    }

    let beta1_hat = sxy / sxx;
    Ok(FitResult {
        beta0_hat: y_bar - beta1_hat * x_bar,
        beta1_hat,
    })
}
