//! In-memory raster model: RGB pixel buffers (`Raster`), colors, anchor
//! points, and the `ImageForm` boundary representation exchanged with
//! callers. All transforms over `Raster` produce new values; the only
//! in-place mutation lives in the explicitly scoped scene helpers.
use image::{DynamicImage, RgbImage};
use ndarray::{Array3, s};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// RGB color triple. The raster buffer's fixed channel order is RGB, and
/// colors are always held in that order.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// Default letterbox padding and filler-tile color.
    pub const DEFAULT_PADDING: Color = Color::rgb(0xD9, 0xD9, 0xD9);
    /// Default inter-tile margin color.
    pub const DEFAULT_MARGIN: Color = Color::rgb(0xBF, 0xBE, 0xBD);
    /// Default title text color.
    pub const DEFAULT_TITLE_TEXT: Color = Color::rgb(0x26, 0x25, 0x23);
    /// Default title background-box color.
    pub const DEFAULT_TITLE_BACKGROUND: Color = Color::rgb(0xD9, 0xD9, 0xD9);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b }
    }

    /// Parse a `#RRGGBB` (or `RRGGBB`) hex string.
    pub fn from_hex(hex: &str) -> Result<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(Error::InvalidArgument {
                arg: "color",
                value: hex.to_string(),
            });
        }
        let parse = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16).map_err(|_| Error::InvalidArgument {
                arg: "color",
                value: hex.to_string(),
            })
        };
        Ok(Color {
            r: parse(0..2)?,
            g: parse(2..4)?,
            b: parse(4..6)?,
        })
    }

    pub(crate) fn channel(&self, index: usize) -> u8 {
        match index {
            0 => self.r,
            1 => self.g,
            _ => self.b,
        }
    }
}

/// 2D anchor coordinate, `(0, 0)` at the top-left corner.
#[derive(Copy, Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }
}

/// Rectangular RGB pixel buffer in HWC layout (`height x width x 3`).
///
/// Invariants: `width > 0`, `height > 0`, buffer length equals
/// `height * width * 3`. The backing store is an `ndarray::Array3<u8>`,
/// which keeps row and tile concatenation axis-wise and allocation-free
/// to express.
#[derive(Clone, PartialEq, Debug)]
pub struct Raster {
    data: Array3<u8>,
}

impl Raster {
    /// Construct from a raw interleaved RGB byte buffer.
    pub fn from_raw(width: usize, height: usize, data: Vec<u8>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimensions { width, height });
        }
        if data.len() != width * height * 3 {
            return Err(Error::InvalidArgument {
                arg: "pixel buffer",
                value: format!("{} bytes for {}x{}x3", data.len(), width, height),
            });
        }
        let data = Array3::from_shape_vec((height, width, 3), data)
            .map_err(Error::external)?;
        Ok(Raster { data })
    }

    /// Solid single-color raster, used for filler tiles and margin strips.
    /// Caller supplies non-zero dimensions.
    pub fn solid(width: usize, height: usize, color: Color) -> Self {
        let data = Array3::from_shape_fn((height, width, 3), |(_, _, c)| color.channel(c));
        Raster { data }
    }

    pub(crate) fn from_array(data: Array3<u8>) -> Self {
        Raster { data }
    }

    pub fn width(&self) -> usize {
        self.data.shape()[1]
    }

    pub fn height(&self) -> usize {
        self.data.shape()[0]
    }

    pub fn data(&self) -> &Array3<u8> {
        &self.data
    }

    pub(crate) fn data_mut(&mut self) -> &mut Array3<u8> {
        &mut self.data
    }

    /// Interleaved RGB bytes in row-major order.
    pub fn to_raw_vec(&self) -> Vec<u8> {
        match self.data.as_slice() {
            Some(slice) => slice.to_vec(),
            None => self.data.iter().copied().collect(),
        }
    }

    /// Normalize from the alternate external representation.
    pub fn from_dynamic(image: &DynamicImage) -> Self {
        let rgb = image.to_rgb8();
        let (width, height) = (rgb.width() as usize, rgb.height() as usize);
        let data = Array3::from_shape_vec((height, width, 3), rgb.into_raw())
            .expect("RgbImage buffer length matches its dimensions");
        Raster { data }
    }

    /// Convert back to the alternate external representation.
    pub fn to_dynamic(&self) -> DynamicImage {
        let image = RgbImage::from_raw(
            self.width() as u32,
            self.height() as u32,
            self.to_raw_vec(),
        )
        .expect("raster buffer length matches its dimensions");
        DynamicImage::ImageRgb8(image)
    }

    /// Fill a rectangle with `color`, clipping it at the raster bounds.
    /// Rectangles fully outside the raster are a no-op.
    pub(crate) fn fill_rect(&mut self, x: i64, y: i64, width: usize, height: usize, color: Color) {
        let (rows, cols) = (self.height() as i64, self.width() as i64);
        let x0 = x.max(0);
        let y0 = y.max(0);
        let x1 = (x + width as i64).min(cols);
        let y1 = (y + height as i64).min(rows);
        if x0 >= x1 || y0 >= y1 {
            return;
        }
        let mut region = self
            .data
            .slice_mut(s![y0 as usize..y1 as usize, x0 as usize..x1 as usize, ..]);
        for ((_, _, c), value) in region.indexed_iter_mut() {
            *value = color.channel(c);
        }
    }
}

/// External image representation accepted and returned by the tiling API.
/// `Raster` is the first-class internal form; `Dynamic` wraps the `image`
/// crate's decoded representation.
#[derive(Clone, Debug)]
pub enum ImageForm {
    Raster(Raster),
    Dynamic(DynamicImage),
}

impl ImageForm {
    pub fn is_raster(&self) -> bool {
        matches!(self, ImageForm::Raster(_))
    }

    /// Normalize to the internal raster representation.
    pub fn into_raster(self) -> Raster {
        match self {
            ImageForm::Raster(raster) => raster,
            ImageForm::Dynamic(image) => Raster::from_dynamic(&image),
        }
    }
}

impl From<Raster> for ImageForm {
    fn from(raster: Raster) -> Self {
        ImageForm::Raster(raster)
    }
}

impl From<DynamicImage> for ImageForm {
    fn from(image: DynamicImage) -> Self {
        ImageForm::Dynamic(image)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_raw_validates_dimensions_and_length() {
        assert!(matches!(
            Raster::from_raw(0, 4, vec![]),
            Err(Error::InvalidDimensions { width: 0, height: 4 })
        ));
        assert!(Raster::from_raw(2, 2, vec![0; 11]).is_err());
        assert!(Raster::from_raw(2, 2, vec![0; 12]).is_ok());
    }

    #[test]
    fn solid_fills_every_pixel() {
        let raster = Raster::solid(3, 2, Color::rgb(10, 20, 30));
        assert_eq!(raster.width(), 3);
        assert_eq!(raster.height(), 2);
        assert_eq!(raster.to_raw_vec(), [10, 20, 30].repeat(6));
    }

    #[test]
    fn dynamic_round_trip_preserves_pixels() {
        let raster = Raster::from_raw(2, 1, vec![1, 2, 3, 4, 5, 6]).unwrap();
        let round_tripped = Raster::from_dynamic(&raster.to_dynamic());
        assert_eq!(round_tripped, raster);
    }

    #[test]
    fn color_from_hex_parses_defaults() {
        assert_eq!(Color::from_hex("#D9D9D9").unwrap(), Color::DEFAULT_PADDING);
        assert_eq!(Color::from_hex("BFBEBD").unwrap(), Color::DEFAULT_MARGIN);
        assert!(Color::from_hex("#XYZ").is_err());
    }

    #[test]
    fn fill_rect_clips_to_bounds() {
        let mut raster = Raster::solid(4, 4, Color::rgb(0, 0, 0));
        raster.fill_rect(-2, -2, 4, 4, Color::rgb(255, 0, 0));
        assert_eq!(raster.data()[[0, 0, 0]], 255);
        assert_eq!(raster.data()[[1, 1, 0]], 255);
        assert_eq!(raster.data()[[2, 2, 0]], 0);

        // Fully outside: untouched
        let before = raster.clone();
        raster.fill_rect(10, 10, 2, 2, Color::rgb(0, 255, 0));
        assert_eq!(raster, before);
    }
}
