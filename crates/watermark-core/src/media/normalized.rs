use super::{ChannelUnits, RasterShape};
use crate::error::WatermarkError;
use crate::result::Result;

/// Float raster with samples normalized to `[0, 1]`, laid out as `height x width x channels`.
///
/// This is the tensor form image hosts pass around. The codec sees every sample as its
/// 8-bit form (`round(clamp(v) * 255)`), a written unit is stored back as `unit / 255`.
/// Samples the codec never writes keep their exact original value.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedRaster {
    shape: RasterShape,
    samples: Vec<f32>,
}

impl NormalizedRaster {
    pub fn new(shape: RasterShape, samples: Vec<f32>) -> Result<Self> {
        if shape.units() != samples.len() {
            return Err(WatermarkError::ShapeMismatch {
                expected: shape.units(),
                actual: samples.len(),
            });
        }

        Ok(Self { shape, samples })
    }

    pub fn zeros(height: usize, width: usize, channels: usize) -> Self {
        let shape = RasterShape::new(height, width, channels);
        Self {
            shape,
            samples: vec![0.0; shape.units()],
        }
    }

    /// builds a raster by asking `f(row, column, channel)` for every sample
    pub fn from_fn<F>(shape: RasterShape, mut f: F) -> Self
    where
        F: FnMut(usize, usize, usize) -> f32,
    {
        let mut samples = Vec::with_capacity(shape.units());
        for row in 0..shape.height {
            for column in 0..shape.width {
                for channel in 0..shape.channels {
                    samples.push(f(row, column, channel));
                }
            }
        }

        Self { shape, samples }
    }

    pub fn samples(&self) -> &[f32] {
        &self.samples
    }

    pub fn into_samples(self) -> Vec<f32> {
        self.samples
    }

    pub fn sample(&self, row: usize, column: usize, channel: usize) -> Option<f32> {
        if row >= self.shape.height || column >= self.shape.width || channel >= self.shape.channels
        {
            return None;
        }
        let index = (row * self.shape.width + column) * self.shape.channels + channel;

        self.samples.get(index).copied()
    }
}

impl ChannelUnits for NormalizedRaster {
    fn shape(&self) -> RasterShape {
        self.shape
    }

    #[inline(always)]
    fn unit(&self, index: usize) -> Option<u8> {
        self.samples.get(index).copied().map(quantize)
    }

    #[inline(always)]
    fn set_unit(&mut self, index: usize, value: u8) {
        if let Some(sample) = self.samples.get_mut(index) {
            *sample = dequantize(value);
        }
    }
}

/// 8-bit form of a normalized sample, NaN counts as black
pub fn quantize(sample: f32) -> u8 {
    if sample.is_nan() {
        return 0;
    }

    (sample.clamp(0.0, 1.0) * 255.0).round() as u8
}

pub fn dequantize(unit: u8) -> f32 {
    unit as f32 / 255.0
}
