/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Box blur filter
//!
//! Every output sample is the truncated mean of the `kernel_size x kernel_size`
//! window around it, with edge samples replicated outwards.
use vox_image::errors::ImageErrors;
use vox_image::image::Image;
use vox_image::traits::OperationsTrait;

use crate::boundary::{clamp_index, signed_radius, BoundaryPolicy};
use crate::utils::{check_kernel_size, check_window_sum};

/// Perform a box blur
///
/// The kernel size is the edge length of the square window averaged
/// for each sample, the greater the size the more pronounced the blur.
/// It must be odd, a size of 1 leaves the raster unchanged.
///
/// # Example
/// ```
/// use vox_image::errors::ImageErrors;
/// use vox_image::image::Image;
/// use vox_image::traits::OperationsTrait;
/// use vox_imageprocs::box_blur::BoxBlur;
///
/// let mut image = Image::fill(100, 20, 10, 3);
/// BoxBlur::new(5).execute(&mut image)?;
/// assert!(image.data().iter().all(|x| *x == 100));
/// # Ok::<(), ImageErrors>(())
/// ```
#[derive(Default, Copy, Clone, Debug)]
pub struct BoxBlur {
    kernel_size: usize
}

impl BoxBlur {
    /// Create a new blur operation.
    ///
    /// # Arguments
    /// - kernel_size: Edge of the averaging window, must be odd
    #[must_use]
    pub fn new(kernel_size: usize) -> BoxBlur {
        BoxBlur { kernel_size }
    }

    /// How out of range neighbours are read
    #[must_use]
    pub const fn boundary_policy(&self) -> BoundaryPolicy {
        BoundaryPolicy::Clamp
    }
}

impl OperationsTrait for BoxBlur {
    fn get_name(&self) -> &'static str {
        "Box blur"
    }

    fn execute_impl(&self, image: &mut Image) -> Result<(), ImageErrors> {
        check_kernel_size(self.kernel_size)?;
        check_window_sum(self.kernel_size, 2)?;

        let (width, height) = image.dimensions();
        let mut out = vec![0; image.data().len()];

        box_blur(
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

/// Box blur interleaved samples
///
/// `in_image` and `out_image` both hold `width * height * channels` samples,
/// each channel is blurred on its own.
///
/// This keeps one running vertical sum per column. Moving down a row
/// subtracts the row leaving the window and adds the one entering, and each
/// row is then swept with a running horizontal sum over those column sums,
/// so every sample costs a constant amount of work whatever the kernel size.
///
/// `kernel_size` must be odd, the dimensions non zero, and
/// `kernel_size² * 255` must fit in a `u64`.
#[allow(clippy::cast_possible_truncation)]
pub fn box_blur(
    in_image: &[u8], out_image: &mut [u8], width: usize, height: usize, channels: usize,
    kernel_size: usize
) {
    if width == 0 || height == 0 || kernel_size == 0 {
        return;
    }
    assert_eq!(in_image.len(), width * height * channels);
    assert_eq!(out_image.len(), in_image.len());

    let radius = signed_radius(kernel_size);
    let area = (kernel_size as u64) * (kernel_size as u64);
    let sample = |x: usize, y: usize, c: usize| u64::from(in_image[(y * width + x) * channels + c]);

    let mut column_sums = vec![0_u64; width];

    for c in 0..channels {
        // vertical sums of the first window, rows above the top replicate row 0
        column_sums.fill(0);

        for ky in -radius..=radius {
            let ny = clamp_index(0, ky, height);

            for (x, sum) in column_sums.iter_mut().enumerate() {
                *sum += sample(x, ny, c);
            }
        }

        for y in 0..height {
            if y > 0 {
                let leaving = clamp_index(y - 1, -radius, height);
                let entering = clamp_index(y, radius, height);

                for (x, sum) in column_sums.iter_mut().enumerate() {
                    *sum = *sum + sample(x, entering, c) - sample(x, leaving, c);
                }
            }

            let mut sum: u64 = (-radius..=radius)
                .map(|kx| column_sums[clamp_index(0, kx, width)])
                .sum();

            for x in 0..width {
                if x > 0 {
                    let leaving = clamp_index(x - 1, -radius, width);
                    let entering = clamp_index(x, radius, width);

                    sum = sum + column_sums[entering] - column_sums[leaving];
                }
                out_image[(y * width + x) * channels + c] = (sum / area) as u8;
            }
        }
    }
}
