//! Simple Moving Average (SMA).
//!
//! Rolling mean of prices over a lookback window.
//! Lookback: period - 1 (first value at index period-1).

use super::Indicator;
use crate::domain::PricePoint;

#[derive(Debug, Clone)]
pub struct Sma {
    period: usize,
    name: String,
}

impl Sma {
    pub fn new(period: usize) -> Self {
        assert!(period >= 1, "SMA period must be >= 1");
        Self {
            period,
            name: format!("sma_{period}"),
        }
    }
}

impl Indicator for Sma {
    fn name(&self) -> &str {
        &self.name
    }

    fn lookback(&self) -> usize {
        self.period.saturating_sub(1)
    }

    fn compute(&self, series: &[PricePoint]) -> Vec<Option<f64>> {
        let n = series.len();
        let mut result = vec![None; n];

        if n < self.period {
            return result;
        }

        let mut sum: f64 = series.iter().take(self.period).map(|p| p.price).sum();
        result[self.period - 1] = Some(sum / self.period as f64);

        // Roll the window forward
        for i in self.period..n {
            sum += series[i].price - series[i - self.period].price;
            result[i] = Some(sum / self.period as f64);
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indicators::{assert_approx, make_series, DEFAULT_EPSILON};

    #[test]
    fn sma_5_basic() {
        let series = make_series(&[10.0, 11.0, 12.0, 13.0, 14.0, 15.0, 16.0]);
        let result = Sma::new(5).compute(&series);

        assert_eq!(result.len(), 7);
        for (i, v) in result.iter().take(4).enumerate() {
            assert!(v.is_none(), "expected absent at index {i}");
        }
        // SMA[4] = mean(10,11,12,13,14) = 12.0
        assert_approx(result[4].unwrap(), 12.0, DEFAULT_EPSILON);
        assert_approx(result[5].unwrap(), 13.0, DEFAULT_EPSILON);
        assert_approx(result[6].unwrap(), 14.0, DEFAULT_EPSILON);
    }

    #[test]
    fn sma_1_is_price() {
        let series = make_series(&[100.0, 200.0, 300.0]);
        let result = Sma::new(1).compute(&series);
        assert_eq!(result, vec![Some(100.0), Some(200.0), Some(300.0)]);
    }

    #[test]
    fn sma_lookback() {
        assert_eq!(Sma::new(200).lookback(), 199);
        assert_eq!(Sma::new(1).lookback(), 0);
        assert_eq!(Sma::new(50).name(), "sma_50");
    }

    #[test]
    fn sma_too_few_points() {
        let series = make_series(&[10.0, 11.0]);
        let result = Sma::new(5).compute(&series);
        assert!(result.iter().all(Option::is_none));
    }

    #[test]
    fn sma_no_lookahead() {
        let prices: Vec<f64> = (0..80).map(|i| 100.0 + (i as f64 * 0.7).sin() * 5.0).collect();
        let full = Sma::new(20).compute(&make_series(&prices));
        let truncated = Sma::new(20).compute(&make_series(&prices[..50]));
        for i in 0..50 {
            match (full[i], truncated[i]) {
                (Some(a), Some(b)) => assert_approx(a, b, 1e-9),
                (None, None) => {}
                other => panic!("mismatch at {i}: {other:?}"),
            }
        }
    }
}
