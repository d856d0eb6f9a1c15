//! Normal-map generation from height maps.
//!
//! Built on [`mapgen_math`]: heights are differenced along x and y, the two tangents are
//! crossed, and the resulting unit normals can be packed into 8-bit RGB.
//!
//! ```
//! use mapgen_normals::{generate_normal_map, HeightMap, NormalMapParams};
//!
//! // A 3x1 greyscale strip rising to the right
//! let map = HeightMap::from_luma8(3, 1, &[0, 128, 255]).unwrap();
//! let normals = generate_normal_map(&map, &NormalMapParams::default().with_amplitude(2.0));
//!
//! let rgb = normals.to_rgb8();
//! assert_eq!(rgb.len(), 9);
//! // The middle texel leans away from the slope (towards -x)
//! assert!(rgb[3] < 127);
//! ```
//!
//! # Features
//!
//! - `parallel`: generate rows concurrently with rayon.
//! - `serde`: serialize maps and parameters.
//!
//! Pixel decoding and file I/O are left to the caller; this crate only sees sample
//! buffers.

pub mod encode;
pub mod errors;
pub mod height_map;
pub mod normal_map;

pub use encode::{decode_rgb8_unit_vector, encode_unit_vector_rgb8};
pub use errors::{MapError, MapResult};
pub use height_map::HeightMap;
pub use normal_map::{generate_normal_map, BorderPolicy, NormalMap, NormalMapParams};
