/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Parameter checks shared by the filters and the dispatcher
use vox_core::options::FilterOptions;
use vox_image::errors::ImageErrors;
use vox_image::image::Image;
use vox_image::volume::Volume;

/// Kernels are centered on the sample, so their edge must be odd
pub(crate) fn check_kernel_size(kernel_size: usize) -> Result<(), ImageErrors> {
    if kernel_size == 0 || kernel_size % 2 == 0 {
        return Err(ImageErrors::InvalidKernelSize(kernel_size));
    }
    Ok(())
}

pub(crate) fn check_sigma(sigma: f32) -> Result<(), ImageErrors> {
    if !sigma.is_finite() || sigma <= 0.0 {
        return Err(ImageErrors::InvalidSigma(sigma));
    }
    Ok(())
}

pub(crate) fn check_kernel_limit(
    kernel_size: usize, options: &FilterOptions
) -> Result<(), ImageErrors> {
    if kernel_size > options.get_max_kernel_size() {
        return Err(ImageErrors::InvalidKernelSize(kernel_size));
    }
    Ok(())
}

/// Reject windows whose sample sums would not fit a `u64`
///
/// A window of `kernel_size^dimensions` samples of up to 255 each.
pub(crate) fn check_window_sum(kernel_size: usize, dimensions: u32) -> Result<(), ImageErrors> {
    let fits = u64::try_from(kernel_size)
        .ok()
        .and_then(|k| k.checked_pow(dimensions))
        .and_then(|area| area.checked_mul(255))
        .is_some();

    if !fits {
        return Err(ImageErrors::InvalidKernelSize(kernel_size));
    }
    Ok(())
}

fn check_limit(name: &'static str, limit: usize, found: usize) -> Result<(), ImageErrors> {
    if found > limit {
        return Err(ImageErrors::TooLargeDimensions(name, limit, found));
    }
    Ok(())
}

pub(crate) fn check_image_limits(image: &Image, options: &FilterOptions) -> Result<(), ImageErrors> {
    let (width, height) = image.dimensions();

    check_limit("width", options.get_max_width(), width)?;
    check_limit("height", options.get_max_height(), height)
}

pub(crate) fn check_volume_limits(
    volume: &Volume, options: &FilterOptions
) -> Result<(), ImageErrors> {
    let (width, height, depth) = volume.dimensions();

    check_limit("width", options.get_max_width(), width)?;
    check_limit("height", options.get_max_height(), height)?;
    check_limit("depth", options.get_max_depth(), depth)
}
