/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Gaussian weight kernels
//!
//! Both kernels are centered, odd sized and normalized so their
//! weights add up to one.
//!
//! The 3D kernel is an isotropic gaussian, the `z` offset enters the
//! exponent the same way `x` and `y` do:
//!
//! ```text
//!  2D: w(x,y)   = exp(-(x²+y²)/(2σ²)) / (2πσ²)
//!  3D: w(x,y,z) = exp(-(x²+y²+z²)/(2σ²))
//! ```
//!
//! The 3D constant factor is left out since normalization cancels it.
use std::f64::consts::PI;

use vox_image::errors::ImageErrors;

use crate::boundary::signed_radius;
use crate::utils::{check_kernel_size, check_sigma};

/// A `size x size` gaussian kernel, row major
#[derive(Clone, Debug, PartialEq)]
pub struct GaussianKernel2D {
    size:    usize,
    weights: Vec<f64>
}

impl GaussianKernel2D {
    /// Build a normalized kernel
    ///
    /// # Errors
    /// - [`ImageErrors::InvalidKernelSize`] if `size` is zero or even
    /// - [`ImageErrors::InvalidSigma`] if `sigma` is not finite and positive
    #[allow(clippy::cast_precision_loss)]
    pub fn new(size: usize, sigma: f32) -> Result<GaussianKernel2D, ImageErrors> {
        check_kernel_size(size)?;
        check_sigma(sigma)?;

        let radius = signed_radius(size);
        let sigma = f64::from(sigma);
        let two_sigma_sq = 2.0 * sigma * sigma;
        let scale = 1.0 / (PI * two_sigma_sq);

        let mut weights = Vec::with_capacity(size * size);

        for y in -radius..=radius {
            for x in -radius..=radius {
                let distance = (x * x + y * y) as f64;

                weights.push((-distance / two_sigma_sq).exp() * scale);
            }
        }
        normalize(&mut weights);

        Ok(GaussianKernel2D { size, weights })
    }

    /// Edge length of the kernel
    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }

    /// All weights, row major
    #[must_use]
    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    /// Weight at column `kx`, row `ky` of the kernel (0 based, not centered)
    #[must_use]
    pub fn weight(&self, kx: usize, ky: usize) -> f64 {
        self.weights[ky * self.size + kx]
    }
}

/// A `size x size x size` gaussian kernel, flattened as `(dz * size + dy) * size + dx`
#[derive(Clone, Debug, PartialEq)]
pub struct GaussianKernel3D {
    size:    usize,
    weights: Vec<f64>
}

impl GaussianKernel3D {
    /// Build a normalized kernel
    ///
    /// # Errors
    /// - [`ImageErrors::InvalidKernelSize`] if `size` is zero or even
    /// - [`ImageErrors::InvalidSigma`] if `sigma` is not finite and positive
    #[allow(clippy::cast_precision_loss)]
    pub fn new(size: usize, sigma: f32) -> Result<GaussianKernel3D, ImageErrors> {
        check_kernel_size(size)?;
        check_sigma(sigma)?;

        let radius = signed_radius(size);
        let sigma = f64::from(sigma);
        let two_sigma_sq = 2.0 * sigma * sigma;

        let mut weights = Vec::with_capacity(size * size * size);

        for z in -radius..=radius {
            for y in -radius..=radius {
                for x in -radius..=radius {
                    let distance = (x * x + y * y + z * z) as f64;

                    weights.push((-distance / two_sigma_sq).exp());
                }
            }
        }
        normalize(&mut weights);

        Ok(GaussianKernel3D { size, weights })
    }

    /// Edge length of the kernel
    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }

    /// All weights, in `z`, `y`, `x` order
    #[must_use]
    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    /// Weight at offset (kx, ky, kz) of the kernel (0 based, not centered)
    #[must_use]
    pub fn weight(&self, kx: usize, ky: usize, kz: usize) -> f64 {
        self.weights[(kz * self.size + ky) * self.size + kx]
    }
}

fn normalize(weights: &mut [f64]) {
    let sum: f64 = weights.iter().sum();

    weights.iter_mut().for_each(|x| *x /= sum);
}
