//! Descriptive statistics primitives.
//!
//! - **Mean**: Neumaier compensated summation.
//! - **Standard deviation**: Welford's online algorithm, sample (n − 1).
//! - **Quantile**: linear interpolation between closest ranks (R-7).
//!
//! All functions return `None` when the statistic is undefined for the
//! given input (e.g. empty data).

/// Arithmetic mean.
pub fn mean(data: &[f64]) -> Option<f64> {
    if data.is_empty() {
        return None;
    }
    Some(compensated_sum(data) / data.len() as f64)
}

/// Sample standard deviation (Bessel's correction).
///
/// Undefined for fewer than two values.
pub fn std_dev(data: &[f64]) -> Option<f64> {
    if data.len() < 2 {
        return None;
    }
    let mut acc = Welford::default();
    for &x in data {
        acc.update(x);
    }
    Some((acc.m2 / (acc.count - 1) as f64).sqrt())
}

/// Smallest value.
pub fn min(data: &[f64]) -> Option<f64> {
    data.iter().copied().reduce(f64::min)
}

/// Largest value.
pub fn max(data: &[f64]) -> Option<f64> {
    data.iter().copied().reduce(f64::max)
}

/// `p`-th quantile of `data` (R-7 method).
///
/// # Examples
/// ```
/// use tabreport::analysis::stats::quantile;
/// let data = [1.0, 2.0, 3.0, 4.0];
/// assert_eq!(quantile(&data, 0.25), Some(1.75));
/// assert_eq!(quantile(&data, 0.5), Some(2.5));
/// ```
pub fn quantile(data: &[f64], p: f64) -> Option<f64> {
    let mut sorted = data.to_vec();
    sorted.sort_by(f64::total_cmp);
    quantile_sorted(&sorted, p)
}

/// `p`-th quantile of data already sorted in non-decreasing order.
pub fn quantile_sorted(sorted: &[f64], p: f64) -> Option<f64> {
    let n = sorted.len();
    if n == 0 || !(0.0..=1.0).contains(&p) {
        return None;
    }
    if n == 1 {
        return Some(sorted[0]);
    }

    let h = (n - 1) as f64 * p;
    let j = h.floor() as usize;
    let g = h - h.floor();

    if j + 1 >= n {
        Some(sorted[n - 1])
    } else {
        Some(sorted[j] + g * (sorted[j + 1] - sorted[j]))
    }
}

/// Round to `decimals` places, exact ties to even.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round_ties_even() / factor
}

fn compensated_sum(data: &[f64]) -> f64 {
    let mut sum = 0.0_f64;
    let mut c = 0.0_f64;
    for &x in data {
        let t = sum + x;
        if !t.is_finite() {
            return data.iter().sum();
        }
        if sum.abs() >= x.abs() {
            c += (sum - t) + x;
        } else {
            c += (x - t) + sum;
        }
        sum = t;
    }
    sum + c
}

#[derive(Default)]
struct Welford {
    count: usize,
    mean: f64,
    m2: f64,
}

impl Welford {
    fn update(&mut self, x: f64) {
        self.count += 1;
        let delta = x - self.mean;
        self.mean += delta / self.count as f64;
        self.m2 += delta * (x - self.mean);
    }
}
