/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Median filters on rasters and volumes
//!
//! Both gather a window per sample and reduce it with
//! [`select::median`](crate::select::median), they only differ in
//! how the window is gathered at the border.
use vox_image::errors::ImageErrors;
use vox_image::image::Image;
use vox_image::traits::{OperationsTrait, VolumeOperationsTrait};
use vox_image::volume::Volume;

use crate::boundary::{clamp_index, offset_index, signed_radius, BoundaryPolicy};
use crate::select::median;
use crate::utils::check_kernel_size;

/// Median returns a new image in which each sample is the median of its neighbors.
///
/// The kernel size is the edge of the square window searched, windows
/// near the border replicate the edge so they always hold `kernel_size²` samples.
#[derive(Default, Copy, Clone, Debug)]
pub struct MedianBlur {
    kernel_size: usize
}

impl MedianBlur {
    #[must_use]
    pub fn new(kernel_size: usize) -> MedianBlur {
        MedianBlur { kernel_size }
    }

    /// How out of range neighbours are read
    #[must_use]
    pub const fn boundary_policy(&self) -> BoundaryPolicy {
        BoundaryPolicy::Clamp
    }
}

impl OperationsTrait for MedianBlur {
    fn get_name(&self) -> &'static str {
        "Median Filter"
    }

    fn execute_impl(&self, image: &mut Image) -> Result<(), ImageErrors> {
        check_kernel_size(self.kernel_size)?;

        let (width, height) = image.dimensions();
        let mut out = vec![0; image.data().len()];

        median_blur(
            image.data(),
            &mut out,
            width,
            height,
            image.channels(),
            self.kernel_size
        );
        image.replace_data(out)
    }
}

/// Median filter interleaved samples, each channel on its own
///
/// Out of range coordinates are clamped to the nearest edge.
pub fn median_blur(
    in_image: &[u8], out_image: &mut [u8], width: usize, height: usize, channels: usize,
    kernel_size: usize
) {
    if width == 0 || height == 0 || kernel_size == 0 {
        return;
    }
    assert_eq!(in_image.len(), width * height * channels);
    assert_eq!(out_image.len(), in_image.len());

    let radius = signed_radius(kernel_size);
    let mut window = Vec::with_capacity(kernel_size * kernel_size);

    for c in 0..channels {
        for y in 0..height {
            for x in 0..width {
                window.clear();

                for ky in -radius..=radius {
                    let ny = clamp_index(y, ky, height);

                    for kx in -radius..=radius {
                        let nx = clamp_index(x, kx, width);

                        window.push(in_image[(ny * width + nx) * channels + c]);
                    }
                }
                // window is never empty, it holds at least the sample itself
                let pos = (y * width + x) * channels + c;
                out_image[pos] = median(&mut window).unwrap_or(in_image[pos]);
            }
        }
    }
}

/// Median filter on a voxel grid
///
/// Only neighbours inside the grid enter the window, so windows at faces,
/// edges and corners are smaller, and may hold an even number of voxels.
#[derive(Default, Copy, Clone, Debug)]
pub struct MedianBlur3D {
    kernel_size: usize
}

impl MedianBlur3D {
    #[must_use]
    pub fn new(kernel_size: usize) -> MedianBlur3D {
        MedianBlur3D { kernel_size }
    }

    /// How out of range neighbours are read
    #[must_use]
    pub const fn boundary_policy(&self) -> BoundaryPolicy {
        BoundaryPolicy::Exclude
    }
}

impl VolumeOperationsTrait for MedianBlur3D {
    fn get_name(&self) -> &'static str {
        "3D Median Filter"
    }

    fn execute_impl(&self, volume: &mut Volume) -> Result<(), ImageErrors> {
        check_kernel_size(self.kernel_size)?;

        let (width, height, depth) = volume.dimensions();
        let mut out = vec![0; volume.data().len()];

        median_blur_3d(
            volume.data(),
            &mut out,
            width,
            height,
            depth,
            self.kernel_size
        );
        volume.replace_data(out)
    }
}

/// Median filter a voxel grid, dropping neighbours outside it
pub fn median_blur_3d(
    in_volume: &[u8], out_volume: &mut [u8], width: usize, height: usize, depth: usize,
    kernel_size: usize
) {
    assert_eq!(in_volume.len(), width * height * depth);
    assert_eq!(out_volume.len(), in_volume.len());

    let radius = signed_radius(kernel_size);
    let mut window = Vec::with_capacity(kernel_size * kernel_size * kernel_size);
    let mut out_pos = 0;

    for z in 0..depth {
        for y in 0..height {
            for x in 0..width {
                window.clear();

                for nz in (-radius..=radius).filter_map(|dz| offset_index(z, dz, depth)) {
                    for ny in (-radius..=radius).filter_map(|dy| offset_index(y, dy, height)) {
                        let row = (nz * height + ny) * width;

                        window.extend(
                            (-radius..=radius)
                                .filter_map(|dx| offset_index(x, dx, width))
                                .map(|nx| in_volume[row + nx])
                        );
                    }
                }
                out_volume[out_pos] = median(&mut window).unwrap_or(in_volume[out_pos]);
                out_pos += 1;
            }
        }
    }
}
