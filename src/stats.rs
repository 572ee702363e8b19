use itertools::Itertools;

pub trait Statistics {
    type Inner;
    fn average(&self) -> Self::Inner;
    fn variance(&self) -> Self::Inner;
    fn std_dev(&self) -> Self::Inner;
    fn quantile(&self, fraction: Self::Inner) -> Self::Inner;
}

impl Statistics for [f64] {
    type Inner = f64;
    fn average(&self) -> f64 {
        if self.is_empty() {
            return 0.0;
        }
        self.iter().sum::<f64>() / (self.len() as f64)
    }

    // population variance, two-pass
    fn variance(&self) -> f64 {
        if self.is_empty() {
            return 0.0;
        }
        let avg = self.average();
        self.iter().map(|x| (x - avg) * (x - avg)).sum::<f64>() / self.len() as f64
    }

    fn std_dev(&self) -> f64 {
        self.variance().sqrt()
    }

    /// Linear interpolation between the two closest ranks, `NaN` for an
    /// empty slice. `fraction` is expected in [0, 1].
    fn quantile(&self, fraction: f64) -> f64 {
        let sorted = self
            .iter()
            .copied()
            .sorted_by(|a, b| a.total_cmp(b))
            .collect::<Vec<f64>>();
        match sorted.len() {
            0 => return f64::NAN,
            1 => return sorted[0],
            _ => (),
        }
        // keeps the rank inside the slice even for an unchecked fraction
        let fraction = fraction.max(0.0).min(1.0);
        let rank = fraction * (sorted.len() - 1) as f64;
        let lower = rank.floor() as usize;
        let upper = rank.ceil() as usize;
        sorted[lower] + (rank - lower as f64) * (sorted[upper] - sorted[lower])
    }
}
