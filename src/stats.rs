//! Streaming descriptive statistics.
//!
//! [`Stats`] accumulates count, mean, variance (Welford),
//! min and max in one pass, and merges with another
//! accumulator so it can be used in rayon
//! `fold` / `reduce` pipelines.

use std::ops::AddAssign;

use serde::{ser::SerializeStruct, Serialize, Serializer};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stats {
    pub count: usize,
    pub mean: f64,
    m2: f64,
    pub min: f64,
    pub max: f64,
}

impl Default for Stats {
    fn default() -> Self {
        Stats {
            count: 0,
            mean: f64::NAN,
            m2: 0.,
            min: f64::NAN,
            max: f64::NAN,
        }
    }
}

impl Stats {
    pub fn from_values<'a, I: IntoIterator<Item = &'a f64>>(values: I) -> Self {
        let mut stats = Stats::default();
        for &v in values {
            stats += v;
        }
        stats
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Population variance (divides by `count`).
    pub fn variance(&self) -> f64 {
        if self.is_empty() {
            return f64::NAN;
        }
        self.m2 / self.count as f64
    }

    /// Population standard deviation.
    pub fn std(&self) -> f64 {
        self.variance().sqrt()
    }
}

// `f64::min` / `f64::max` skip NaN; here a NaN sticks, as
// it does in the mean.
fn nan_min(a: f64, b: f64) -> f64 {
    if a.is_nan() || b.is_nan() {
        f64::NAN
    } else {
        a.min(b)
    }
}

fn nan_max(a: f64, b: f64) -> f64 {
    if a.is_nan() || b.is_nan() {
        f64::NAN
    } else {
        a.max(b)
    }
}

impl AddAssign<f64> for Stats {
    fn add_assign(&mut self, val: f64) {
        if self.is_empty() {
            *self = Stats {
                count: 1,
                mean: val,
                m2: 0.,
                min: val,
                max: val,
            };
            return;
        }

        self.count += 1;
        let delta = val - self.mean;
        self.mean += delta / self.count as f64;
        self.m2 += delta * (val - self.mean);
        self.min = nan_min(self.min, val);
        self.max = nan_max(self.max, val);
    }
}

impl AddAssign<&Stats> for Stats {
    // Chan et al. pairwise combination
    fn add_assign(&mut self, other: &Stats) {
        if other.is_empty() {
            return;
        }
        if self.is_empty() {
            *self = *other;
            return;
        }

        let n_a = self.count as f64;
        let n_b = other.count as f64;
        let n = n_a + n_b;
        let delta = other.mean - self.mean;

        self.mean += delta * n_b / n;
        self.m2 += other.m2 + delta * delta * n_a * n_b / n;
        self.count += other.count;
        self.min = nan_min(self.min, other.min);
        self.max = nan_max(self.max, other.max);
    }
}

// Empty stats have no mean / std / extrema.
impl Serialize for Stats {
    fn serialize<S: Serializer>(&self, ser: S) -> Result<S::Ok, S::Error> {
        fn finite(val: f64) -> Option<f64> {
            Some(val).filter(|v| v.is_finite())
        }

        let mut st = ser.serialize_struct("Stats", 5)?;
        st.serialize_field("count", &self.count)?;
        st.serialize_field("mean", &finite(self.mean))?;
        st.serialize_field("std", &finite(self.std()))?;
        st.serialize_field("min", &finite(self.min))?;
        st.serialize_field("max", &finite(self.max))?;
        st.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rayon::prelude::*;

    #[test]
    fn matches_two_pass_computation() {
        let values = [2., 4., 4., 4., 5., 5., 7., 9.];
        let stats = Stats::from_values(&values);
        assert_eq!(stats.count, 8);
        assert!((stats.mean - 5.).abs() < 1e-12);
        assert!((stats.std() - 2.).abs() < 1e-12);
        assert_eq!(stats.min, 2.);
        assert_eq!(stats.max, 9.);
    }

    #[test]
    fn merge_equals_sequential() {
        let values: Vec<f64> = (0..1000).map(|i| ((i * 37) % 101) as f64 * 0.25 - 3.).collect();
        let sequential = Stats::from_values(&values);

        let merged = values
            .par_iter()
            .fold(Stats::default, |mut acc, &v| {
                acc += v;
                acc
            })
            .reduce(Stats::default, |mut acc, other| {
                acc += &other;
                acc
            });

        assert_eq!(merged.count, sequential.count);
        assert!((merged.mean - sequential.mean).abs() < 1e-10);
        assert!((merged.std() - sequential.std()).abs() < 1e-10);
        assert_eq!(merged.min, sequential.min);
        assert_eq!(merged.max, sequential.max);
    }

    #[test]
    fn empty_stats_are_nan() {
        let mut stats = Stats::default();
        assert!(stats.mean.is_nan() && stats.std().is_nan());

        stats += &Stats::default();
        assert!(stats.is_empty());

        stats += 3.;
        assert_eq!((stats.mean, stats.min, stats.max, stats.std()), (3., 3., 3., 0.));
    }

    #[test]
    fn nan_propagates_to_extrema() {
        let stats = Stats::from_values(&[1., f64::NAN, 3.]);
        assert_eq!(stats.count, 3);
        assert!(stats.mean.is_nan() && stats.min.is_nan() && stats.max.is_nan());

        let mut merged = Stats::from_values(&[1., 2.]);
        merged += &Stats::from_values(&[f64::NAN]);
        assert!(merged.min.is_nan() && merged.max.is_nan());

        let mut clean = Stats::from_values(&[1., 2.]);
        clean += &Stats::from_values(&[-4., 9.]);
        assert_eq!((clean.min, clean.max), (-4., 9.));
    }

    #[test]
    fn serializes_with_std() -> anyhow::Result<()> {
        let json = serde_json::to_value(&Stats::from_values(&[1., 3.]))?;
        assert_eq!(json["count"], 2);
        assert_eq!(json["mean"], 2.);
        assert_eq!(json["std"], 1.);

        let empty = serde_json::to_value(&Stats::default())?;
        assert!(empty["mean"].is_null());
        Ok(())
    }
}
