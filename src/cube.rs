//! Descriptive statistics over multi-channel thermal
//! imagery.
//!
//! A [`ThermalCube`] wraps an already decoded
//! `rows × columns × channels` array; reading the image
//! container is left to the caller.

use std::str::FromStr;

use ndarray::{parallel::prelude::*, s, Array1, Array2, Array3, ArrayView2, ArrayView3, Axis, Zip};
use serde_derive::*;

use crate::{
    error::{Error, Result},
    stats::Stats,
};

/// Statistics of one pixel across all channels.
#[derive(Debug, Clone)]
pub struct PixelStats {
    pub mean: f64,
    pub std: f64,
    pub min: f64,
    pub max: f64,
    pub channel_values: Array1<f64>,
}

/// Statistics of a rectangular region.
#[derive(Debug, Clone)]
pub struct RegionStats {
    /// Over every value in the region, all channels.
    pub stats: Stats,
    /// Mean of each channel over the region.
    pub channel_means: Array1<f64>,
    /// Mean over channels, per pixel of the region.
    pub spatial_mean: Array2<f64>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Normalization {
    /// `(x - min) / (max - min)`
    MinMax,
    /// `(x - mean) / std`
    ZScore,
}

impl FromStr for Normalization {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "minmax" => Ok(Normalization::MinMax),
            "zscore" => Ok(Normalization::ZScore),
            _ => Err(Error::UnknownNormalization(s.into())),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ThermalCube {
    data: Array3<f64>,
}

impl ThermalCube {
    pub fn new(data: Array3<f64>) -> Self {
        ThermalCube { data }
    }

    pub fn data(&self) -> ArrayView3<f64> {
        self.data.view()
    }

    /// `(rows, cols, channels)`
    pub fn dim(&self) -> (usize, usize, usize) {
        self.data.dim()
    }

    pub fn num_channels(&self) -> usize {
        self.data.len_of(Axis(2))
    }

    pub fn pixel_stats(&self, row: usize, col: usize) -> Result<PixelStats> {
        let (rows, cols, _) = self.dim();
        if row >= rows || col >= cols {
            return Err(Error::PixelOutOfBounds {
                row,
                col,
                rows,
                cols,
            });
        }

        let channel_values = self.data.slice(s![row, col, ..]).to_owned();
        let stats = Stats::from_values(channel_values.iter());
        Ok(PixelStats {
            mean: stats.mean,
            std: stats.std(),
            min: stats.min,
            max: stats.max,
            channel_values,
        })
    }

    pub fn channel(&self, channel: usize) -> Result<ArrayView2<f64>> {
        let channels = self.num_channels();
        if channel >= channels {
            return Err(Error::ChannelOutOfBounds { channel, channels });
        }
        Ok(self.data.index_axis(Axis(2), channel))
    }

    /// Per-pixel mean over channels. NaN everywhere if the
    /// cube has no channels.
    pub fn mean_image(&self) -> Array2<f64> {
        self.data.sum_axis(Axis(2)) / self.num_channels() as f64
    }

    /// Statistics over `rows row_start..row_end` and
    /// `cols col_start..col_end` (end-exclusive). The region
    /// must be non-empty and inside the image.
    pub fn region_stats(
        &self,
        row_start: usize,
        row_end: usize,
        col_start: usize,
        col_end: usize,
    ) -> Result<RegionStats> {
        let (rows, cols, channels) = self.dim();
        if !(row_start < row_end && row_end <= rows && col_start < col_end && col_end <= cols) {
            return Err(Error::InvalidRegion {
                row_start,
                row_end,
                col_start,
                col_end,
                rows,
                cols,
            });
        }

        let region = self.data.slice(s![row_start..row_end, col_start..col_end, ..]);
        let stats = region
            .into_par_iter()
            .fold(Stats::default, |mut acc, &val| {
                acc += val;
                acc
            })
            .reduce(Stats::default, |mut acc, other| {
                acc += &other;
                acc
            });

        let num_pixels = ((row_end - row_start) * (col_end - col_start)) as f64;
        let channel_means = region.sum_axis(Axis(0)).sum_axis(Axis(0)) / num_pixels;
        let spatial_mean = region.sum_axis(Axis(2)) / channels as f64;

        Ok(RegionStats {
            stats,
            channel_means,
            spatial_mean,
        })
    }

    /// Normalize each channel independently. A constant
    /// channel has a zero range / std and normalizes to NaN.
    pub fn normalize_channels(&self, method: Normalization) -> Array3<f32> {
        let mut normalized = Array3::<f32>::zeros(self.data.raw_dim());

        Zip::from(normalized.axis_iter_mut(Axis(2)))
            .and(self.data.axis_iter(Axis(2)))
            .par_for_each(|mut dst, src| {
                let stats = Stats::from_values(src.iter());
                let (offset, scale) = match method {
                    Normalization::MinMax => (stats.min, stats.max - stats.min),
                    Normalization::ZScore => (stats.mean, stats.std()),
                };
                dst.zip_mut_with(&src, |d, &s| *d = ((s - offset) / scale) as f32);
            });

        normalized
    }
}

impl From<Array3<f64>> for ThermalCube {
    fn from(data: Array3<f64>) -> Self {
        ThermalCube::new(data)
    }
}
