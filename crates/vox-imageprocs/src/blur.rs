/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Route a blur request to the engine that implements it
//!
//! A request names the filter, the kind of buffer and the kernel
//! parameters. It is checked as a whole before any buffer is read:
//!
//! | filter   | image | volume | sigma    |
//! |----------|-------|--------|----------|
//! | median   | yes   | yes    | rejected |
//! | box      | yes   | no     | rejected |
//! | gaussian | yes   | yes    | required |
//!
//! Anything outside that table is an error, never a silent no-op.
use vox_core::kind::{BlurKind, BlurTarget};
use vox_core::log::{debug, warn};
use vox_core::options::FilterOptions;
use vox_image::errors::ImageErrors;
use vox_image::image::Image;
use vox_image::traits::{OperationsTrait, VolumeOperationsTrait};
use vox_image::volume::Volume;

use crate::box_blur::BoxBlur;
use crate::gaussian_blur::{GaussianBlur, GaussianBlur3D};
use crate::median::{MedianBlur, MedianBlur3D};
use crate::utils::{
    check_image_limits, check_kernel_limit, check_kernel_size, check_sigma, check_volume_limits
};

/// A single filter invocation
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BlurRequest {
    pub(crate) kind:        BlurKind,
    pub(crate) target:      BlurTarget,
    pub(crate) kernel_size: usize,
    pub(crate) sigma:       Option<f32>
}

impl BlurRequest {
    /// Create a request without a sigma
    #[must_use]
    pub const fn new(kind: BlurKind, target: BlurTarget, kernel_size: usize) -> BlurRequest {
        BlurRequest {
            kind,
            target,
            kernel_size,
            sigma: None
        }
    }

    /// Attach a sigma, needed for gaussian requests
    #[must_use]
    pub fn with_sigma(mut self, sigma: f32) -> BlurRequest {
        self.sigma = Some(sigma);
        self
    }

    #[must_use]
    pub const fn kind(&self) -> BlurKind {
        self.kind
    }

    #[must_use]
    pub const fn target(&self) -> BlurTarget {
        self.target
    }

    #[must_use]
    pub const fn kernel_size(&self) -> usize {
        self.kernel_size
    }

    #[must_use]
    pub const fn sigma(&self) -> Option<f32> {
        self.sigma
    }

    /// Check the request against the default [`FilterOptions`]
    ///
    /// # Errors
    /// See [`BlurRequest::validate_with_options`]
    pub fn validate(&self) -> Result<(), ImageErrors> {
        self.validate_with_options(&FilterOptions::default())
    }

    /// Check that the request can be executed
    ///
    /// Checks run in this order, the first failure is returned
    /// 1. kernel size is odd, non zero and within `options`
    /// 2. sigma is present exactly when the filter needs one
    /// 3. sigma, if present, is finite and positive
    /// 4. the filter is implemented for the target
    ///
    /// # Errors
    /// - [`ImageErrors::InvalidKernelSize`]
    /// - [`ImageErrors::MissingSigma`] / [`ImageErrors::UnexpectedSigma`]
    /// - [`ImageErrors::InvalidSigma`]
    /// - [`ImageErrors::UnsupportedCombination`]
    pub fn validate_with_options(&self, options: &FilterOptions) -> Result<(), ImageErrors> {
        check_kernel_size(self.kernel_size)?;
        check_kernel_limit(self.kernel_size, options)?;

        match (self.kind.requires_sigma(), self.sigma) {
            (true, None) => return Err(ImageErrors::MissingSigma(self.kind)),
            (false, Some(_)) => return Err(ImageErrors::UnexpectedSigma(self.kind)),
            (true, Some(sigma)) => check_sigma(sigma)?,
            (false, None) => ()
        }

        if let (BlurKind::Box, BlurTarget::Volume) = (self.kind, self.target) {
            return Err(ImageErrors::UnsupportedCombination(self.kind, self.target));
        }
        Ok(())
    }

    fn sigma_or_err(&self) -> Result<f32, ImageErrors> {
        self.sigma.ok_or(ImageErrors::MissingSigma(self.kind))
    }
}

/// Apply a blur to a raster using default options
///
/// # Errors
/// See [`apply_blur_with_options`]
pub fn apply_blur(request: &BlurRequest, image: &mut Image) -> Result<(), ImageErrors> {
    apply_blur_with_options(request, image, &FilterOptions::default())
}

/// Apply a blur to a raster
///
/// On error the raster is left untouched.
///
/// # Errors
/// - Anything [`BlurRequest::validate_with_options`] reports
/// - [`ImageErrors::TargetMismatch`] if the request is for a volume
/// - Degenerate geometry or dimensions above `options`
pub fn apply_blur_with_options(
    request: &BlurRequest, image: &mut Image, options: &FilterOptions
) -> Result<(), ImageErrors> {
    let result = route_image(request, image, options);

    if let Err(ref err) = result {
        warn!("Rejected {} blur on image: {}", request.kind, err);
    }
    result
}

fn route_image(
    request: &BlurRequest, image: &mut Image, options: &FilterOptions
) -> Result<(), ImageErrors> {
    request.validate_with_options(options)?;

    if request.target != BlurTarget::Image {
        return Err(ImageErrors::TargetMismatch(request.target, BlurTarget::Image));
    }
    image.check_geometry()?;
    check_image_limits(image, options)?;

    debug!(
        "Applying {} blur to image, kernel size {}",
        request.kind, request.kernel_size
    );

    match request.kind {
        BlurKind::Median => MedianBlur::new(request.kernel_size).execute(image),
        BlurKind::Box => BoxBlur::new(request.kernel_size).execute(image),
        BlurKind::Gaussian => {
            GaussianBlur::new(request.kernel_size, request.sigma_or_err()?).execute(image)
        }
    }
}

/// Apply a blur to a volume using default options
///
/// # Errors
/// See [`apply_blur_volume_with_options`]
pub fn apply_blur_volume(request: &BlurRequest, volume: &mut Volume) -> Result<(), ImageErrors> {
    apply_blur_volume_with_options(request, volume, &FilterOptions::default())
}

/// Apply a blur to a volume
///
/// On error the volume is left untouched.
///
/// # Errors
/// - Anything [`BlurRequest::validate_with_options`] reports,
///   box blur in particular is [`ImageErrors::UnsupportedCombination`] on volumes
/// - [`ImageErrors::TargetMismatch`] if the request is for an image
/// - Degenerate geometry or dimensions above `options`
pub fn apply_blur_volume_with_options(
    request: &BlurRequest, volume: &mut Volume, options: &FilterOptions
) -> Result<(), ImageErrors> {
    let result = route_volume(request, volume, options);

    if let Err(ref err) = result {
        warn!("Rejected {} blur on volume: {}", request.kind, err);
    }
    result
}

fn route_volume(
    request: &BlurRequest, volume: &mut Volume, options: &FilterOptions
) -> Result<(), ImageErrors> {
    request.validate_with_options(options)?;

    if request.target != BlurTarget::Volume {
        return Err(ImageErrors::TargetMismatch(request.target, BlurTarget::Volume));
    }
    volume.check_geometry()?;
    check_volume_limits(volume, options)?;

    debug!(
        "Applying {} blur to volume, kernel size {k}x{k}x{k}",
        request.kind,
        k = request.kernel_size
    );

    match request.kind {
        BlurKind::Median => MedianBlur3D::new(request.kernel_size).execute(volume),
        BlurKind::Gaussian => {
            GaussianBlur3D::new(request.kernel_size, request.sigma_or_err()?).execute(volume)
        }
        BlurKind::Box => Err(ImageErrors::UnsupportedCombination(
            request.kind,
            BlurTarget::Volume
        ))
    }
}

/// Convenience front end with one entry point per parameter set
///
/// # Example
/// ```
/// use vox_core::kind::BlurKind;
/// use vox_image::errors::ImageErrors;
/// use vox_image::volume::Volume;
/// use vox_imageprocs::blur::Blur;
///
/// let mut volume = Volume::fill(40, 8, 8, 8);
/// let blur = Blur::new();
///
/// blur.apply_volume(BlurKind::Median, &mut volume, 3)?;
/// // box blur is not implemented for volumes
/// assert!(blur.apply_volume(BlurKind::Box, &mut volume, 3).is_err());
/// # Ok::<(), ImageErrors>(())
/// ```
#[derive(Copy, Clone, Debug, Default)]
pub struct Blur {
    options: FilterOptions
}

impl Blur {
    #[must_use]
    pub fn new() -> Blur {
        Blur::default()
    }

    #[must_use]
    pub fn with_options(options: FilterOptions) -> Blur {
        Blur { options }
    }

    #[must_use]
    pub const fn options(&self) -> &FilterOptions {
        &self.options
    }

    /// Apply a median or box blur to a raster
    ///
    /// # Errors
    /// [`ImageErrors::MissingSigma`] for gaussian, see [`Blur::apply_with_sigma`],
    /// and anything [`apply_blur_with_options`] reports
    pub fn apply(
        &self, kind: BlurKind, image: &mut Image, kernel_size: usize
    ) -> Result<(), ImageErrors> {
        let request = BlurRequest::new(kind, BlurTarget::Image, kernel_size);

        apply_blur_with_options(&request, image, &self.options)
    }

    /// Apply a gaussian blur to a raster
    ///
    /// # Errors
    /// [`ImageErrors::UnexpectedSigma`] for median and box,
    /// and anything [`apply_blur_with_options`] reports
    pub fn apply_with_sigma(
        &self, kind: BlurKind, image: &mut Image, kernel_size: usize, sigma: f32
    ) -> Result<(), ImageErrors> {
        let request = BlurRequest::new(kind, BlurTarget::Image, kernel_size).with_sigma(sigma);

        apply_blur_with_options(&request, image, &self.options)
    }

    /// Apply a median blur to a volume
    ///
    /// # Errors
    /// Anything [`apply_blur_volume_with_options`] reports
    pub fn apply_volume(
        &self, kind: BlurKind, volume: &mut Volume, kernel_size: usize
    ) -> Result<(), ImageErrors> {
        let request = BlurRequest::new(kind, BlurTarget::Volume, kernel_size);

        apply_blur_volume_with_options(&request, volume, &self.options)
    }

    /// Apply a gaussian blur to a volume
    ///
    /// # Errors
    /// Anything [`apply_blur_volume_with_options`] reports
    pub fn apply_volume_with_sigma(
        &self, kind: BlurKind, volume: &mut Volume, kernel_size: usize, sigma: f32
    ) -> Result<(), ImageErrors> {
        let request = BlurRequest::new(kind, BlurTarget::Volume, kernel_size).with_sigma(sigma);

        apply_blur_volume_with_options(&request, volume, &self.options)
    }
}
