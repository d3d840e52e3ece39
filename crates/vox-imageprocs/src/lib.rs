/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Blur routines for `vox-image` rasters and volumes
//!
//! This implements the windowed filters, median, box and gaussian, on
//! 2D rasters and (median and gaussian) on 3D volumes.
//!
//! Every filter implements `OperationsTrait` or `VolumeOperationsTrait`
//! defined by vox-image, and [`blur`] routes a request to the right one.
//!
//! # Example
//! - Gaussian blur a raster with a 5x5 kernel
//! ```
//! use vox_image::errors::ImageErrors;
//! use vox_image::image::Image;
//! use vox_core::kind::{BlurKind, BlurTarget};
//! use vox_imageprocs::blur::{apply_blur, BlurRequest};
//!
//! let mut image = Image::from_fn(32, 32, 3, |x, y, pix| pix.fill(((x ^ y) * 8) as u8));
//! let request = BlurRequest::new(BlurKind::Gaussian, BlurTarget::Image, 5).with_sigma(1.0);
//! apply_blur(&request, &mut image)?;
//! # Ok::<(), ImageErrors>(())
//! ```
#![warn(
    clippy::correctness,
    clippy::perf,
    clippy::pedantic,
    clippy::inline_always,
    clippy::missing_errors_doc,
    clippy::panic
)]
#![allow(
    clippy::needless_return,
    clippy::similar_names,
    clippy::doc_markdown,
    clippy::module_name_repetitions,
    clippy::missing_panics_doc,
    clippy::many_single_char_names
)]

pub mod blur;
pub mod boundary;
pub mod box_blur;
pub mod gaussian_blur;
pub mod kernel;
pub mod median;
pub mod select;
mod serde;
mod utils;
