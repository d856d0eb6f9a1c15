use crate::errors::{MapError, MapResult};

/// A row-major grid of heights, nominally in `[0, 1]`.
///
/// Row 0 is the top of the map; `(x, y)` addresses column `x` of row `y`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct HeightMap {
    width: usize,
    height: usize,
    samples: Vec<f64>,
}

impl HeightMap {
    /// Wraps `samples`, which must hold exactly `width * height` values.
    pub fn new(width: usize, height: usize, samples: Vec<f64>) -> MapResult<Self> {
        MapError::check_dimensions(width, height, 1, samples.len())?;
        Ok(Self {
            width,
            height,
            samples,
        })
    }

    /// A map with every sample set to `value`.
    pub fn filled(width: usize, height: usize, value: f64) -> MapResult<Self> {
        let count = MapError::sample_count(width, height, 1)?;
        Self::new(width, height, vec![value; count])
    }

    /// Heights from interleaved 8-bit RGB pixels: the channel average scaled to `[0, 1]`.
    pub fn from_rgb8(width: usize, height: usize, rgb: &[u8]) -> MapResult<Self> {
        Self::from_interleaved(width, height, rgb, 3)
    }

    /// Same as [`from_rgb8`](Self::from_rgb8) for BGR-ordered pixels such as 24-bit BMP
    /// rows. The average does not depend on channel order.
    pub fn from_bgr8(width: usize, height: usize, bgr: &[u8]) -> MapResult<Self> {
        Self::from_interleaved(width, height, bgr, 3)
    }

    /// Heights from 8-bit greyscale pixels, `value / 255`.
    pub fn from_luma8(width: usize, height: usize, luma: &[u8]) -> MapResult<Self> {
        Self::from_interleaved(width, height, luma, 1)
    }

    fn from_interleaved(
        width: usize,
        height: usize,
        pixels: &[u8],
        channels: usize,
    ) -> MapResult<Self> {
        MapError::check_dimensions(width, height, channels, pixels.len())?;

        let full_scale = 255.0 * channels as f64;
        let samples = pixels
            .chunks_exact(channels)
            .map(|px| px.iter().map(|&c| c as f64).sum::<f64>() / full_scale)
            .collect();

        Ok(Self {
            width,
            height,
            samples,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    /// Height at column `x`, row `y`, or `None` outside the map.
    pub fn get(&self, x: usize, y: usize) -> Option<f64> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.samples[y * self.width + x])
    }

    /// Height at a possibly out-of-range position, with the edge clamped.
    pub(crate) fn get_clamped(&self, x: isize, y: isize) -> f64 {
        let cx = x.clamp(0, self.width as isize - 1) as usize;
        let cy = y.clamp(0, self.height as isize - 1) as usize;
        self.samples[cy * self.width + cx]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_validates_length() {
        assert!(HeightMap::new(2, 2, vec![0.0; 4]).is_ok());
        assert!(matches!(
            HeightMap::new(2, 2, vec![0.0; 5]),
            Err(MapError::DimensionMismatch {
                expected: 4,
                actual: 5,
                ..
            })
        ));
        assert!(matches!(
            HeightMap::new(0, 2, vec![]),
            Err(MapError::EmptyMap { .. })
        ));
    }

    #[test]
    fn rgb_average() {
        let rgb = [255, 255, 255, 0, 0, 0, 255, 0, 0, 51, 102, 153];
        let map = HeightMap::from_rgb8(2, 2, &rgb).unwrap();
        assert_eq!(map.get(0, 0), Some(1.0));
        assert_eq!(map.get(1, 0), Some(0.0));
        assert!((map.get(0, 1).unwrap() - 1.0 / 3.0).abs() < 1e-15);
        assert!((map.get(1, 1).unwrap() - 0.4).abs() < 1e-15);
    }

    #[test]
    fn bgr_matches_rgb() {
        let rgb = [10, 20, 30, 200, 100, 0];
        let bgr = [30, 20, 10, 0, 100, 200];
        assert_eq!(
            HeightMap::from_rgb8(2, 1, &rgb).unwrap(),
            HeightMap::from_bgr8(2, 1, &bgr).unwrap()
        );
    }

    #[test]
    fn luma_scale() {
        let map = HeightMap::from_luma8(3, 1, &[0, 51, 255]).unwrap();
        assert_eq!(map.samples(), &[0.0, 0.2, 1.0]);
    }

    #[test]
    fn pixel_buffer_length_checked() {
        assert!(HeightMap::from_rgb8(2, 2, &[0; 11]).is_err());
        assert!(HeightMap::from_luma8(2, 2, &[0; 4]).is_ok());
    }

    #[test]
    fn overflowing_size_is_rejected() {
        let huge = 1usize << (usize::BITS - 1);
        assert!(matches!(
            HeightMap::from_luma8(huge, 2, &[]),
            Err(MapError::TooLarge { .. })
        ));
        assert!(matches!(
            HeightMap::from_rgb8(huge / 2, 2, &[]),
            Err(MapError::TooLarge { .. })
        ));
        assert!(matches!(
            HeightMap::filled(huge, huge, 0.5),
            Err(MapError::TooLarge { .. })
        ));
        assert!(matches!(
            HeightMap::new(usize::MAX, 2, vec![]),
            Err(MapError::TooLarge { .. })
        ));
    }

    #[test]
    fn get_out_of_range() {
        let map = HeightMap::filled(3, 2, 0.5).unwrap();
        assert_eq!(map.get(2, 1), Some(0.5));
        assert_eq!(map.get(3, 0), None);
        assert_eq!(map.get(0, 2), None);
    }

    #[test]
    fn clamped_access() {
        let map = HeightMap::new(2, 2, vec![0.1, 0.2, 0.3, 0.4]).unwrap();
        assert_eq!(map.get_clamped(-1, 0), 0.1);
        assert_eq!(map.get_clamped(5, 0), 0.2);
        assert_eq!(map.get_clamped(0, -3), 0.1);
        assert_eq!(map.get_clamped(1, 9), 0.4);
    }
}
