use crate::encode::encode_unit_vector_rgb8;
use crate::height_map::HeightMap;
use mapgen_math::Vector3D;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// How heights outside the map are read when differencing edge texels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BorderPolicy {
    /// Out-of-range neighbours have height 0, so raised edges slope down to the border.
    #[default]
    Zero,
    /// Out-of-range neighbours repeat the nearest edge sample.
    Clamp,
}

/// Settings for [`generate_normal_map`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NormalMapParams {
    /// Multiplier on height differences; larger values give steeper normals.
    pub bump_amplitude: f64,
    pub border: BorderPolicy,
}

impl Default for NormalMapParams {
    fn default() -> Self {
        Self {
            bump_amplitude: 1.0,
            border: BorderPolicy::Zero,
        }
    }
}

impl NormalMapParams {
    pub fn with_amplitude(mut self, bump_amplitude: f64) -> Self {
        self.bump_amplitude = bump_amplitude;
        self
    }

    pub fn with_border(mut self, border: BorderPolicy) -> Self {
        self.border = border;
        self
    }
}

/// A row-major grid of unit surface normals, the same shape as its source height map.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct NormalMap {
    width: usize,
    height: usize,
    normals: Vec<Vector3D>,
}

impl NormalMap {
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn normals(&self) -> &[Vector3D] {
        &self.normals
    }

    /// Normal at column `x`, row `y`, or `None` outside the map.
    pub fn get(&self, x: usize, y: usize) -> Option<Vector3D> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.normals[y * self.width + x])
    }

    /// Packs every normal with [`encode_unit_vector_rgb8`] into an interleaved RGB buffer.
    pub fn to_rgb8(&self) -> Vec<u8> {
        self.normals
            .iter()
            .flat_map(encode_unit_vector_rgb8)
            .collect()
    }
}

/// Derives a unit normal for every texel from central height differences.
///
/// For the texel at `(x, y)` with heights `h` and amplitude `A`:
///
/// ```text
/// s = (1, 0, A·(h[x+1, y] − h[x−1, y]))
/// t = (0, 1, A·(h[x, y−1] − h[x, y+1]))
/// n = unit(s × t)
/// ```
///
/// Row `y − 1` is the row above. Neighbours outside the map are read according to
/// `params.border`.
///
/// ```
/// use mapgen_normals::{generate_normal_map, HeightMap, NormalMapParams};
/// use mapgen_math::Vector3D;
///
/// let flat = HeightMap::filled(4, 4, 0.0).unwrap();
/// let normals = generate_normal_map(&flat, &NormalMapParams::default());
///
/// assert!(normals.normals().iter().all(|n| *n == Vector3D::z_axis()));
/// ```
pub fn generate_normal_map(map: &HeightMap, params: &NormalMapParams) -> NormalMap {
    let (width, height) = (map.width(), map.height());
    log::debug!(
        "Generating {}x{} normal map (amplitude {}, border {:?})",
        width,
        height,
        params.bump_amplitude,
        params.border
    );

    #[cfg(feature = "parallel")]
    let rows: Vec<Vec<Vector3D>> = (0..height)
        .into_par_iter()
        .map(|y| normal_row(map, params, y))
        .collect();

    #[cfg(not(feature = "parallel"))]
    let rows: Vec<Vec<Vector3D>> = (0..height).map(|y| normal_row(map, params, y)).collect();

    let normals: Vec<Vector3D> = rows.into_iter().flatten().collect();
    log::debug!("Generated {} normals", normals.len());

    NormalMap {
        width,
        height,
        normals,
    }
}

fn normal_row(map: &HeightMap, params: &NormalMapParams, y: usize) -> Vec<Vector3D> {
    (0..map.width())
        .map(|x| texel_normal(map, params, x as isize, y as isize))
        .collect()
}

fn texel_normal(map: &HeightMap, params: &NormalMapParams, x: isize, y: isize) -> Vector3D {
    let h = |dx: isize, dy: isize| neighbour(map, params.border, x + dx, y + dy);
    let amplitude = params.bump_amplitude;

    let s = Vector3D::new(1.0, 0.0, amplitude * h(1, 0) - amplitude * h(-1, 0));
    let t = Vector3D::new(0.0, 1.0, amplitude * h(0, -1) - amplitude * h(0, 1));
    s.cross(&t).unit_vector()
}

fn neighbour(map: &HeightMap, border: BorderPolicy, x: isize, y: isize) -> f64 {
    match border {
        BorderPolicy::Clamp => map.get_clamped(x, y),
        BorderPolicy::Zero => {
            if x < 0 || y < 0 {
                return 0.0;
            }
            map.get(x as usize, y as usize).unwrap_or(0.0)
        }
    }
}
