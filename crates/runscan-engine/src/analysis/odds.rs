use serde::Serialize;

use super::splits::{SplitKind, SplitTable};

/// Gauss error function, Abramowitz-Stegun 7.1.26 (max error ~1.5e-7).
pub fn erf(x: f64) -> f64 {
    const A1: f64 = 0.254829592;
    const A2: f64 = -0.284496736;
    const A3: f64 = 1.421413741;
    const A4: f64 = -1.453152027;
    const A5: f64 = 1.061405429;
    const P: f64 = 0.3275911;

    let sign = if x < 0.0 { -1.0 } else { 1.0 };
    let ax = x.abs();
    let t = 1.0 / (1.0 + P * ax);
    let y = 1.0 - (((((A5 * t + A4) * t + A3) * t + A2) * t + A1) * t) * (-ax * ax).exp();
    sign * y
}

/// Standard normal CDF.
pub fn normal_cdf(z: f64) -> f64 {
    0.5 * (1.0 + erf(z / std::f64::consts::SQRT_2))
}

/// Log-normal model of split times in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LogNormalFit {
    pub mu: f64,
    pub sigma: f64,
}

impl LogNormalFit {
    /// Fit by moments of the logs (population variance).
    ///
    /// `None` with fewer than two samples, a zero sample, or no spread.
    pub fn fit(samples: &[u32]) -> Option<Self> {
        if samples.len() < 2 {
            return None;
        }

        let logs: Vec<f64> = samples.iter().map(|&s| f64::from(s).ln()).collect();
        let n = logs.len() as f64;
        let mu = logs.iter().sum::<f64>() / n;
        let variance = logs.iter().map(|x| (x - mu) * (x - mu)).sum::<f64>() / n;
        let sigma = variance.max(0.0).sqrt();

        if !mu.is_finite() || !sigma.is_finite() || sigma == 0.0 {
            return None;
        }
        Some(Self { mu, sigma })
    }

    /// P(T <= seconds)
    pub fn cdf(&self, seconds: f64) -> f64 {
        if !seconds.is_finite() || seconds <= 0.0 {
            return 0.0;
        }
        let z = (seconds.ln() - self.mu) / self.sigma;
        normal_cdf(z).clamp(0.0, 1.0)
    }

    /// Time below which a fraction `p` of runs land, found by bisection.
    pub fn quantile(&self, p: f64) -> f64 {
        let p = p.clamp(1e-10, 1.0 - 1e-10);
        let mut lo = 0.0;
        let mut hi = 1.0;

        while self.cdf(hi) < p && hi < 86_400.0 {
            hi *= 2.0;
        }

        for _ in 0..80 {
            let mid = (lo + hi) / 2.0;
            if self.cdf(mid) < p {
                lo = mid;
            } else {
                hi = mid;
            }
        }

        (lo + hi) / 2.0
    }
}

/// How likely a run is to reach one split.
#[derive(Debug, Clone, Serialize)]
pub struct SplitOdds {
    pub kind: SplitKind,
    pub count: usize,
    pub chance_per_run: f64,
    pub chance_per_day: f64,
    pub fit: Option<LogNormalFit>,
}

#[derive(Debug, Clone, Serialize)]
pub struct OddsReport {
    pub total_runs: usize,
    pub days: usize,
    pub average_runs_per_day: f64,
    pub splits: Vec<SplitOdds>,
}

impl OddsReport {
    pub fn split(&self, kind: SplitKind) -> Option<&SplitOdds> {
        self.splits.iter().find(|s| s.kind == kind)
    }

    /// Chance of at least one run reaching `kind` in under `cutoff` seconds
    /// within the next `days` days, at the historical pace of runs per day.
    ///
    /// `None` when there is not enough data to fit split times.
    pub fn chance_by(&self, kind: SplitKind, cutoff: f64, days: f64) -> Option<f64> {
        let split = self.split(kind)?;
        let fit = split.fit?;
        if days <= 0.0 {
            return Some(0.0);
        }

        let per_run = fit.cdf(cutoff) * split.chance_per_run;
        Some(1.0 - (1.0 - per_run).powf(self.average_runs_per_day * days))
    }
}

pub fn odds(table: &SplitTable) -> OddsReport {
    let total_runs = table.total_runs();
    let average_runs_per_day = table.average_runs_per_day();

    let splits = SplitKind::ALL
        .into_iter()
        .map(|kind| {
            let count = table.count(kind);
            let chance_per_run = if total_runs == 0 {
                0.0
            } else {
                count as f64 / total_runs as f64
            };
            SplitOdds {
                kind,
                count,
                chance_per_run,
                chance_per_day: 1.0 - (1.0 - chance_per_run).powf(average_runs_per_day),
                fit: LogNormalFit::fit(&table.all_samples(kind)),
            }
        })
        .collect();

    OddsReport {
        total_runs,
        days: table.days.len(),
        average_runs_per_day,
        splits,
    }
}
