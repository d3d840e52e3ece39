/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Gaussian blur on rasters and volumes
//!
//! Both convolve with a full (non separable) kernel from [`kernel`](crate::kernel).
//!
//! - Rasters replicate their border, every sample sees the whole kernel.
//! - Volumes skip neighbours outside the grid and divide by the weights
//!   that were actually used, so faces, edges and corners see a cropped kernel.
use vox_image::errors::ImageErrors;
use vox_image::image::Image;
use vox_image::traits::{OperationsTrait, VolumeOperationsTrait};
use vox_image::volume::Volume;

use crate::boundary::{clamp_index, offset_index, signed_radius, BoundaryPolicy};
use crate::kernel::{GaussianKernel2D, GaussianKernel3D};

/// Absorbs rounding in the weighted sums before truncation
///
/// Normalized weights applied to a constant neighbourhood of `v` may add
/// up to a hair below `v`, which truncation would turn into `v - 1`.
const TRUNCATION_SLACK: f64 = 1e-7;

#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_sample(value: f64) -> u8 {
    (value + TRUNCATION_SLACK).clamp(0.0, 255.0) as u8
}

/// Perform a gaussian blur on a raster
///
/// # Example
/// ```
/// use vox_image::errors::ImageErrors;
/// use vox_image::image::Image;
/// use vox_image::traits::OperationsTrait;
/// use vox_imageprocs::gaussian_blur::GaussianBlur;
///
/// let mut image = Image::from_fn(9, 9, 1, |x, y, pix| pix[0] = if (x, y) == (4, 4) { 255 } else { 0 });
/// GaussianBlur::new(3, 1.0).execute(&mut image)?;
/// // the impulse got spread out
/// assert!(image.get_sample(4, 4, 0) < 255);
/// assert!(image.get_sample(3, 4, 0) > 0);
/// # Ok::<(), ImageErrors>(())
/// ```
#[derive(Copy, Clone, Debug)]
pub struct GaussianBlur {
    kernel_size: usize,
    sigma:       f32
}

impl GaussianBlur {
    /// Create a new gaussian blur
    ///
    /// # Arguments
    /// - kernel_size: Edge of the square kernel, must be odd
    /// - sigma: Spread of the gaussian, must be positive
    #[must_use]
    pub fn new(kernel_size: usize, sigma: f32) -> GaussianBlur {
        GaussianBlur { kernel_size, sigma }
    }

    /// How out of range neighbours are read
    #[must_use]
    pub const fn boundary_policy(&self) -> BoundaryPolicy {
        BoundaryPolicy::Clamp
    }
}

impl OperationsTrait for GaussianBlur {
    fn get_name(&self) -> &'static str {
        "Gaussian blur"
    }

    fn execute_impl(&self, image: &mut Image) -> Result<(), ImageErrors> {
        let kernel = GaussianKernel2D::new(self.kernel_size, self.sigma)?;

        let (width, height) = image.dimensions();
        let mut out = vec![0; image.data().len()];

        gaussian_blur(
            image.data(),
            &mut out,
            width,
            height,
            image.channels(),
            &kernel
        );
        image.replace_data(out)
    }
}

/// Convolve interleaved samples with a 2D kernel
///
/// Coordinates outside the raster are clamped to the nearest edge,
/// results are clamped to `[0, 255]` and truncated.
pub fn gaussian_blur(
    in_image: &[u8], out_image: &mut [u8], width: usize, height: usize, channels: usize,
    kernel: &GaussianKernel2D
) {
    if width == 0 || height == 0 {
        return;
    }
    assert_eq!(in_image.len(), width * height * channels);
    assert_eq!(out_image.len(), in_image.len());

    let radius = signed_radius(kernel.size());
    let weights = kernel.weights();

    for y in 0..height {
        for x in 0..width {
            for c in 0..channels {
                let mut sum = 0.0;
                let mut weight_pos = 0;

                for ky in -radius..=radius {
                    let ny = clamp_index(y, ky, height);

                    for kx in -radius..=radius {
                        let nx = clamp_index(x, kx, width);

                        sum += weights[weight_pos]
                            * f64::from(in_image[(ny * width + nx) * channels + c]);
                        weight_pos += 1;
                    }
                }
                out_image[(y * width + x) * channels + c] = to_sample(sum);
            }
        }
    }
}

/// Perform a gaussian blur on a volume
#[derive(Copy, Clone, Debug)]
pub struct GaussianBlur3D {
    kernel_size: usize,
    sigma:       f32
}

impl GaussianBlur3D {
    /// Create a new volume gaussian blur
    ///
    /// # Arguments
    /// - kernel_size: Edge of the cubic kernel, must be odd
    /// - sigma: Spread of the gaussian, must be positive
    #[must_use]
    pub fn new(kernel_size: usize, sigma: f32) -> GaussianBlur3D {
        GaussianBlur3D { kernel_size, sigma }
    }

    /// How out of range neighbours are read
    #[must_use]
    pub const fn boundary_policy(&self) -> BoundaryPolicy {
        BoundaryPolicy::Exclude
    }
}

impl VolumeOperationsTrait for GaussianBlur3D {
    fn get_name(&self) -> &'static str {
        "3D Gaussian blur"
    }

    fn execute_impl(&self, volume: &mut Volume) -> Result<(), ImageErrors> {
        let kernel = GaussianKernel3D::new(self.kernel_size, self.sigma)?;

        let (width, height, depth) = volume.dimensions();
        let mut out = vec![0; volume.data().len()];

        gaussian_blur_3d(volume.data(), &mut out, width, height, depth, &kernel);

        volume.replace_data(out)
    }
}

/// Convolve a voxel grid with a 3D kernel
///
/// Neighbours outside the grid contribute neither to the sum nor to the
/// normalizer, each voxel becomes `Σ w·v / Σ w` over the neighbours that exist.
pub fn gaussian_blur_3d(
    in_volume: &[u8], out_volume: &mut [u8], width: usize, height: usize, depth: usize,
    kernel: &GaussianKernel3D
) {
    assert_eq!(in_volume.len(), width * height * depth);
    assert_eq!(out_volume.len(), in_volume.len());

    let radius = signed_radius(kernel.size());
    let weights = kernel.weights();
    let mut out_pos = 0;

    for z in 0..depth {
        for y in 0..height {
            for x in 0..width {
                let mut sum = 0.0;
                let mut total_weight = 0.0;
                let mut weight_pos = 0;

                for dz in -radius..=radius {
                    let nz = offset_index(z, dz, depth);

                    for dy in -radius..=radius {
                        let ny = offset_index(y, dy, height);

                        for dx in -radius..=radius {
                            let nx = offset_index(x, dx, width);

                            if let (Some(nx), Some(ny), Some(nz)) = (nx, ny, nz) {
                                let weight = weights[weight_pos];

                                sum += weight * f64::from(in_volume[(nz * height + ny) * width + nx]);
                                total_weight += weight;
                            }
                            weight_pos += 1;
                        }
                    }
                }
                // the center voxel always exists and carries the largest weight
                out_volume[out_pos] = to_sample(sum / total_weight);
                out_pos += 1;
            }
        }
    }
}
