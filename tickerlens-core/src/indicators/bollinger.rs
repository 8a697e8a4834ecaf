//! Bollinger Bands — moving average +/- standard deviation multiplier.
//!
//! Four series (separate Indicator instances):
//! - Middle: mean(price, period)
//! - Upper: middle + mult * stddev(price, period)
//! - Lower: middle - mult * stddev(price, period)
//! - ZScore: (price - middle) / stddev, with a stddev of exactly 0 replaced by 1
//!
//! Uses population stddev (divide by N).
//! Lookback: period - 1.

use super::Indicator;
use crate::domain::PricePoint;

/// Which Bollinger series to compute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BollingerBand {
    Upper,
    Middle,
    Lower,
    ZScore,
}

#[derive(Debug, Clone)]
pub struct Bollinger {
    period: usize,
    multiplier: f64,
    band: BollingerBand,
    name: String,
}

impl Bollinger {
    pub fn new(period: usize, multiplier: f64, band: BollingerBand) -> Self {
        assert!(period >= 1, "Bollinger period must be >= 1");
        let label = match band {
            BollingerBand::Upper => "upper",
            BollingerBand::Middle => "middle",
            BollingerBand::Lower => "lower",
            BollingerBand::ZScore => "zscore",
        };
        Self {
            period,
            multiplier,
            band,
            name: format!("bollinger_{label}_{period}_{multiplier}"),
        }
    }

    pub fn upper(period: usize, multiplier: f64) -> Self {
        Self::new(period, multiplier, BollingerBand::Upper)
    }

    pub fn middle(period: usize, multiplier: f64) -> Self {
        Self::new(period, multiplier, BollingerBand::Middle)
    }

    pub fn lower(period: usize, multiplier: f64) -> Self {
        Self::new(period, multiplier, BollingerBand::Lower)
    }

    pub fn z_score(period: usize) -> Self {
        Self::new(period, 1.0, BollingerBand::ZScore)
    }

    /// Mean and population stddev of a window.
    ///
    /// Deviations are taken relative to the first price, so a window of
    /// identical prices yields exactly that price and exactly 0.
    fn window_stats(window: &[PricePoint]) -> (f64, f64) {
        let n = window.len() as f64;
        let anchor = window[0].price;
        let shifted_mean = window.iter().map(|p| p.price - anchor).sum::<f64>() / n;
        let variance = window
            .iter()
            .map(|p| {
                let diff = p.price - anchor - shifted_mean;
                diff * diff
            })
            .sum::<f64>()
            / n;
        (anchor + shifted_mean, variance.sqrt())
    }
}

impl Indicator for Bollinger {
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

        for i in (self.period - 1)..n {
            let window = &series[(i + 1 - self.period)..=i];
            let (mean, stddev) = Self::window_stats(window);

            result[i] = Some(match self.band {
                BollingerBand::Middle => mean,
                BollingerBand::Upper => mean + self.multiplier * stddev,
                BollingerBand::Lower => mean - self.multiplier * stddev,
                BollingerBand::ZScore => {
                    let divisor = if stddev == 0.0 { 1.0 } else { stddev };
                    (series[i].price - mean) / divisor
                }
            });
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indicators::{assert_approx, make_series, DEFAULT_EPSILON};

    #[test]
    fn bollinger_middle_is_mean() {
        let series = make_series(&[10.0, 11.0, 12.0, 13.0, 14.0]);
        let result = Bollinger::middle(3, 2.0).compute(&series);

        assert!(result[0].is_none());
        assert!(result[1].is_none());
        assert_approx(result[2].unwrap(), 11.0, DEFAULT_EPSILON);
        assert_approx(result[3].unwrap(), 12.0, DEFAULT_EPSILON);
    }

    #[test]
    fn bollinger_bands_symmetric() {
        let series = make_series(&[10.0, 11.0, 12.0, 13.0, 14.0]);
        let upper = Bollinger::upper(3, 2.0).compute(&series);
        let middle = Bollinger::middle(3, 2.0).compute(&series);
        let lower = Bollinger::lower(3, 2.0).compute(&series);

        for i in 2..5 {
            let half_width = upper[i].unwrap() - middle[i].unwrap();
            assert_approx(middle[i].unwrap() - lower[i].unwrap(), half_width, DEFAULT_EPSILON);
        }
    }

    #[test]
    fn bollinger_population_stddev() {
        // window [10, 11, 12]: mean 11, pop variance 2/3
        let series = make_series(&[10.0, 11.0, 12.0]);
        let upper = Bollinger::upper(3, 2.0).compute(&series);
        assert_approx(upper[2].unwrap(), 11.0 + 2.0 * (2.0_f64 / 3.0).sqrt(), 1e-12);
    }

    #[test]
    fn bollinger_constant_price_zero_width() {
        let series = make_series(&[100.0, 100.0, 100.0, 100.0]);
        let upper = Bollinger::upper(3, 2.0).compute(&series);
        let lower = Bollinger::lower(3, 2.0).compute(&series);

        // Constant price → stddev = 0 → bands collapse to the mean
        assert_approx(upper[2].unwrap(), 100.0, DEFAULT_EPSILON);
        assert_approx(lower[2].unwrap(), 100.0, DEFAULT_EPSILON);
    }

    #[test]
    fn z_score_identical_prices_is_zero() {
        let series = make_series(&[0.1; 20]);
        let z = Bollinger::z_score(20).compute(&series);
        assert_eq!(z[19], Some(0.0));
    }

    #[test]
    fn z_score_measures_distance_from_mean() {
        // window [10, 11, 12]: z at 12 = (12 - 11) / sqrt(2/3)
        let series = make_series(&[10.0, 11.0, 12.0]);
        let z = Bollinger::z_score(3).compute(&series);
        assert_approx(z[2].unwrap(), 1.0 / (2.0_f64 / 3.0).sqrt(), 1e-12);
    }

    #[test]
    fn bollinger_lookback() {
        assert_eq!(Bollinger::upper(20, 2.0).lookback(), 19);
        assert_eq!(Bollinger::z_score(20).name(), "bollinger_zscore_20_1");
    }
}
