/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Buffers the blur engine reads and writes
//!
//! - [`Image`](crate::image::Image): a 2D raster of interleaved 8 bit channels
//! - [`Volume`](crate::volume::Volume): a single channel 3D voxel grid
//!
//! Both own a flat sample buffer whose length is tied to their
//! dimensions, and both only accept a new buffer wholesale, see
//! [`Image::replace_data`](crate::image::Image::replace_data).
#![warn(
    clippy::correctness,
    clippy::perf,
    clippy::pedantic,
    clippy::inline_always,
    clippy::missing_errors_doc,
    clippy::panic
)]
#![allow(clippy::module_name_repetitions, clippy::doc_markdown)]

pub mod errors;
pub mod image;
pub mod traits;
pub mod volume;
