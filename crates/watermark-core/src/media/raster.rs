use std::fmt::{self, Display, Formatter};

use enum_dispatch::enum_dispatch;
use image::{ImageBuffer, Pixel, RgbImage, RgbaImage};

use super::NormalizedRaster;

/// dimensions of a raster, `channels` samples per pixel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RasterShape {
    pub height: usize,
    pub width: usize,
    pub channels: usize,
}

impl RasterShape {
    pub fn new(height: usize, width: usize, channels: usize) -> Self {
        Self {
            height,
            width,
            channels,
        }
    }

    /// total number of channel units, one unit is one sample of one channel of one pixel
    pub fn units(&self) -> usize {
        self.height * self.width * self.channels
    }
}

impl Display for RasterShape {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}x{}", self.height, self.width, self.channels)
    }
}

/// Flat access to the channel units of a raster as 8-bit values.
///
/// Units are addressed in row-major, channel-minor order, that is
/// `index = (row * width + column) * channels + channel`.
#[enum_dispatch]
pub trait ChannelUnits {
    fn shape(&self) -> RasterShape;

    /// the 8-bit form of the unit at `index`, `None` past the last unit
    fn unit(&self, index: usize) -> Option<u8>;

    /// replaces the unit at `index`, indices past the last unit are ignored
    fn set_unit(&mut self, index: usize, value: u8);

    fn unit_count(&self) -> usize {
        self.shape().units()
    }
}

impl<P> ChannelUnits for ImageBuffer<P, Vec<u8>>
where
    P: Pixel<Subpixel = u8>,
{
    fn shape(&self) -> RasterShape {
        RasterShape::new(
            self.height() as usize,
            self.width() as usize,
            P::CHANNEL_COUNT as usize,
        )
    }

    #[inline(always)]
    fn unit(&self, index: usize) -> Option<u8> {
        self.as_raw().get(index).copied()
    }

    #[inline(always)]
    fn set_unit(&mut self, index: usize, value: u8) {
        let units: &mut [u8] = self;
        if let Some(unit) = units.get_mut(index) {
            *unit = value;
        }
    }
}

/// A watermark carrier, either a decoded 8-bit image or a normalized float raster as handed over by a host.
#[enum_dispatch(ChannelUnits)]
#[derive(Debug, Clone, PartialEq)]
pub enum Raster {
    Rgb8(RgbImage),
    Rgba8(RgbaImage),
    Normalized(NormalizedRaster),
}
