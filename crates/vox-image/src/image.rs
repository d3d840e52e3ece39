/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! This module represents a single raster
//!
//! A raster is represented as
//!
//! - one flat buffer of 8 bit samples
//!     - in row major order
//!         - with the channels of each pixel stored next to each other
//!
//! ```text
//!  (0,0)        (1,0)
//!  [c0 c1 c2]   [c0 c1 c2]  ...  width pixels per row
//! ```
//!
//! The buffer length is always `width * height * channels`.
use crate::errors::ImageErrors;

/// Multiply dimensions, rejecting zero and overflow
///
/// Each entry is (name, value), the name is reported if the value is zero.
///
/// # Errors
/// - [`ImageErrors::ZeroDimension`] for the first zero entry
/// - [`ImageErrors::GenericStr`] if the product does not fit a `usize`
///
/// # Example
/// ```
/// use vox_image::image::checked_sample_count;
/// assert_eq!(checked_sample_count(&[("width", 4), ("height", 3)]).ok(), Some(12));
/// assert!(checked_sample_count(&[("width", usize::MAX), ("height", 2)]).is_err());
/// ```
pub fn checked_sample_count(
    dimensions: &[(&'static str, usize)]
) -> Result<usize, ImageErrors> {
    let mut count = 1_usize;

    for &(name, value) in dimensions {
        if value == 0 {
            return Err(ImageErrors::ZeroDimension(name));
        }
        count = count
            .checked_mul(value)
            .ok_or(ImageErrors::GenericStr("Dimensions overflow the address space"))?;
    }
    Ok(count)
}

/// Represents a single raster
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Image {
    width:    usize,
    height:   usize,
    channels: usize,
    data:     Vec<u8>
}

impl Image {
    /// Create a raster from interleaved samples
    ///
    /// # Errors
    /// - [`ImageErrors::ZeroDimension`] if any dimension is zero
    /// - [`ImageErrors::DimensionsMisMatch`] if `data.len()` is not `width * height * channels`
    pub fn new(
        data: Vec<u8>, width: usize, height: usize, channels: usize
    ) -> Result<Image, ImageErrors> {
        let expected = checked_sample_count(&[
            ("width", width),
            ("height", height),
            ("channel count", channels)
        ])?;

        if expected != data.len() {
            return Err(ImageErrors::DimensionsMisMatch(expected, data.len()));
        }
        Ok(Image {
            width,
            height,
            channels,
            data
        })
    }

    /// Create a raster with every sample set to `value`
    ///
    /// Zero dimensions are allowed here and result in an empty raster,
    /// filters refuse such rasters.
    #[must_use]
    pub fn fill(value: u8, width: usize, height: usize, channels: usize) -> Image {
        // an overflowing size is left empty, check_geometry reports it
        let len = width
            .checked_mul(height)
            .and_then(|x| x.checked_mul(channels))
            .unwrap_or(0);

        Image {
            width,
            height,
            channels,
            data: vec![value; len]
        }
    }

    /// Create a raster by calling `func` for every pixel
    ///
    /// The function receives the x and y coordinate and a mutable
    /// slice with the pixel's channels, initialized to zero.
    ///
    /// # Example
    /// ```
    /// use vox_image::image::Image;
    /// // a horizontal gradient
    /// let image = Image::from_fn(16, 4, 1, |x, _, pix| pix[0] = (x * 16) as u8);
    /// assert_eq!(image.get_sample(15, 3, 0), 240);
    /// ```
    pub fn from_fn<F>(width: usize, height: usize, channels: usize, mut func: F) -> Image
    where
        F: FnMut(usize, usize, &mut [u8])
    {
        let mut image = Image::fill(0, width, height, channels);

        if channels != 0 && width != 0 {
            for (y, row) in image.data.chunks_exact_mut(width * channels).enumerate() {
                for (x, pix) in row.chunks_exact_mut(channels).enumerate() {
                    func(x, y, pix);
                }
            }
        }
        image
    }

    /// Get image dimensions as a tuple of (width,height)
    #[must_use]
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Number of interleaved channels per pixel
    #[must_use]
    pub const fn channels(&self) -> usize {
        self.channels
    }

    /// Return all samples
    #[must_use]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Return all samples mutably
    ///
    /// The length cannot change through this, so the raster stays consistent.
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Consume the raster returning its samples
    #[must_use]
    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    /// Return the channels of the pixel at (x,y)
    ///
    /// # Panics
    /// If the coordinate is outside the raster
    #[must_use]
    pub fn get_pixel(&self, x: usize, y: usize) -> &[u8] {
        assert!(x < self.width && y < self.height, "Pixel ({x},{y}) out of bounds");
        let start = (y * self.width + x) * self.channels;

        &self.data[start..start + self.channels]
    }

    /// Return one channel of the pixel at (x,y)
    ///
    /// # Panics
    /// If the coordinate or channel is out of bounds
    #[must_use]
    pub fn get_sample(&self, x: usize, y: usize, channel: usize) -> u8 {
        assert!(channel < self.channels, "Channel {channel} out of bounds");
        self.get_pixel(x, y)[channel]
    }

    /// Check that the raster has a non zero size and a buffer matching it
    ///
    /// # Errors
    /// See [`Image::new`]
    pub fn check_geometry(&self) -> Result<(), ImageErrors> {
        let expected = checked_sample_count(&[
            ("width", self.width),
            ("height", self.height),
            ("channel count", self.channels)
        ])?;

        if expected != self.data.len() {
            return Err(ImageErrors::DimensionsMisMatch(expected, self.data.len()));
        }
        Ok(())
    }

    /// Replace every sample with the contents of `data`
    ///
    /// This is how filters commit, the raster either takes the whole
    /// new buffer or, on error, keeps the old one.
    ///
    /// # Errors
    /// [`ImageErrors::DimensionsMisMatch`] if `data` is not exactly `width * height * channels` long
    pub fn replace_data(&mut self, data: Vec<u8>) -> Result<(), ImageErrors> {
        let expected = self
            .width
            .saturating_mul(self.height)
            .saturating_mul(self.channels);

        if data.len() != expected {
            return Err(ImageErrors::DimensionsMisMatch(expected, data.len()));
        }
        self.data = data;
        Ok(())
    }
}
