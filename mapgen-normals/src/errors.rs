use thiserror::Error;

/// Errors raised while building sample maps.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MapError {
    #[error("Dimension mismatch: {width}x{height} map needs {expected} samples, got {actual}")]
    DimensionMismatch {
        width: usize,
        height: usize,
        expected: usize,
        actual: usize,
    },

    #[error("Empty map: {width}x{height}")]
    EmptyMap { width: usize, height: usize },

    #[error("Map too large: {width}x{height} with {channels} channel(s) overflows usize")]
    TooLarge {
        width: usize,
        height: usize,
        channels: usize,
    },
}

pub type MapResult<T> = std::result::Result<T, MapError>;

impl MapError {
    /// Number of values a `width` x `height` map with `channels` values per texel holds.
    pub(crate) fn sample_count(width: usize, height: usize, channels: usize) -> MapResult<usize> {
        if width == 0 || height == 0 {
            return Err(Self::EmptyMap { width, height });
        }
        width
            .checked_mul(height)
            .and_then(|texels| texels.checked_mul(channels))
            .ok_or(Self::TooLarge {
                width,
                height,
                channels,
            })
    }

    pub(crate) fn check_dimensions(
        width: usize,
        height: usize,
        channels: usize,
        actual: usize,
    ) -> MapResult<()> {
        let expected = Self::sample_count(width, height, channels)?;
        if actual != expected {
            return Err(Self::DimensionMismatch {
                width,
                height,
                expected,
                actual,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dimension_mismatch_display() {
        let error = MapError::DimensionMismatch {
            width: 4,
            height: 2,
            expected: 8,
            actual: 7,
        };
        assert_eq!(
            error.to_string(),
            "Dimension mismatch: 4x2 map needs 8 samples, got 7"
        );
    }

    #[test]
    fn empty_map_display() {
        let error = MapError::EmptyMap {
            width: 0,
            height: 3,
        };
        assert_eq!(error.to_string(), "Empty map: 0x3");
    }

    #[test]
    fn check_dimensions_cases() {
        assert!(MapError::check_dimensions(3, 2, 1, 6).is_ok());
        assert!(MapError::check_dimensions(3, 2, 3, 18).is_ok());
        assert_eq!(
            MapError::check_dimensions(3, 0, 1, 0),
            Err(MapError::EmptyMap {
                width: 3,
                height: 0
            })
        );
        assert!(matches!(
            MapError::check_dimensions(2, 2, 3, 4),
            Err(MapError::DimensionMismatch { expected: 12, .. })
        ));
    }

    #[test]
    fn too_large_display() {
        let error = MapError::TooLarge {
            width: 5,
            height: 6,
            channels: 3,
        };
        assert_eq!(
            error.to_string(),
            "Map too large: 5x6 with 3 channel(s) overflows usize"
        );
    }

    #[test]
    fn overflowing_dimensions_are_rejected() {
        let huge = 1usize << (usize::BITS - 1);
        assert_eq!(
            MapError::check_dimensions(huge, 2, 1, 0),
            Err(MapError::TooLarge {
                width: huge,
                height: 2,
                channels: 1
            })
        );
        // Texel count fits, sample count does not
        assert!(matches!(
            MapError::sample_count(huge / 2, 2, 3),
            Err(MapError::TooLarge { channels: 3, .. })
        ));
        assert_eq!(MapError::sample_count(4, 4, 3), Ok(48));
    }
}
