/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use vox_core::kind::{BlurKind, BlurTarget};
use vox_core::options::FilterOptions;
use vox_image::image::Image;
use vox_image::traits::OperationsTrait;
use vox_imageprocs::blur::{apply_blur, Blur, BlurRequest};
use vox_imageprocs::boundary::BoundaryPolicy;
use vox_imageprocs::box_blur::BoxBlur;
use vox_imageprocs::gaussian_blur::GaussianBlur;
use vox_imageprocs::kernel::GaussianKernel2D;
use vox_imageprocs::median::MedianBlur;

use crate::{centered_block, random_image, valid_requests};

#[test]
fn dimensions_are_preserved() {
    for (width, height, channels) in [(1, 1, 1), (13, 4, 3), (4, 13, 2), (32, 32, 4)] {
        for kernel_size in [1, 3, 5] {
            for request in valid_requests(BlurTarget::Image, kernel_size) {
                let mut image = random_image(5, width, height, channels);
                apply_blur(&request, &mut image).unwrap();

                assert_eq!(image.dimensions(), (width, height));
                assert_eq!(image.channels(), channels);
                assert_eq!(image.data().len(), width * height * channels);
            }
        }
    }
}

#[test]
fn unit_kernel_is_identity_for_box_and_gaussian() {
    let blur = Blur::new();
    let original = random_image(31, 17, 9, 3);

    let mut boxed = original.clone();
    blur.apply(BlurKind::Box, &mut boxed, 1).unwrap();
    assert_eq!(boxed, original);

    for sigma in [0.3, 1.0, 10.0] {
        let mut smoothed = original.clone();
        blur.apply_with_sigma(BlurKind::Gaussian, &mut smoothed, 1, sigma)
            .unwrap();
        assert_eq!(smoothed, original);
    }
}

#[test]
fn unit_box_blur_is_idempotent() {
    let blur = Blur::new();

    let mut once = random_image(8, 11, 6, 1);
    blur.apply(BlurKind::Box, &mut once, 1).unwrap();

    let mut twice = once.clone();
    blur.apply(BlurKind::Box, &mut twice, 1).unwrap();

    assert_eq!(once, twice);
}

#[test]
fn kernel_weights_sum_to_one() {
    for size in [1, 3, 5, 7, 9, 15] {
        for sigma in [0.1, 0.5, 1.0, 2.5, 7.0, 100.0] {
            let kernel = GaussianKernel2D::new(size, sigma).unwrap();
            let sum: f64 = kernel.weights().iter().sum();

            assert!((sum - 1.0).abs() < 1e-4, "size {size} sigma {sigma} sums to {sum}");
        }
    }
}

#[test]
fn zero_image_stays_zero() {
    for kernel_size in [1, 3, 7] {
        for request in valid_requests(BlurTarget::Image, kernel_size) {
            let mut image = Image::fill(0, 12, 7, 3);
            apply_blur(&request, &mut image).unwrap();

            assert!(image.data().iter().all(|x| *x == 0), "{request:?}");
        }
    }
}

#[test]
fn uniform_image_is_preserved() {
    for value in [1, 77, 128, 254, 255] {
        for request in valid_requests(BlurTarget::Image, 5) {
            let mut image = Image::fill(value, 16, 9, 2);
            apply_blur(&request, &mut image).unwrap();

            assert!(
                image.data().iter().all(|x| *x == value),
                "{request:?} changed a uniform {value} raster"
            );
        }
    }
}

#[test]
fn median_keeps_block_edges_sharp() {
    let mut image = centered_block();
    Blur::new().apply(BlurKind::Median, &mut image, 3).unwrap();

    for index in [4 * 10 + 2, 2 * 10 + 4, 4 * 10 + 7, 7 * 10 + 4] {
        let value = image.data()[index];
        assert!(value == 0 || value == 255, "index {index} became {value}");
    }
    for (x, y) in [(3, 3), (6, 3), (3, 6), (6, 6), (4, 3), (3, 4), (2, 4), (7, 5)] {
        let value = image.get_sample(x, y, 0);
        assert!(value == 0 || value == 255, "({x},{y}) became {value}");
    }
}

#[test]
fn box_blur_smooths_block_center() {
    let mut image = centered_block();
    Blur::new().apply(BlurKind::Box, &mut image, 5).unwrap();

    for (x, y) in [(4, 4), (5, 4), (4, 5), (5, 5)] {
        let value = image.get_sample(x, y, 0);
        assert!(value > 0 && value < 255, "({x},{y}) is {value}");
    }
    // 16 of the 25 window samples lie in the block
    assert_eq!(image.get_sample(4, 4, 0), (16 * 255 / 25) as u8);
}

#[test]
fn box_blur_handles_non_square_rasters() {
    for (width, height) in [(31, 7), (7, 31), (2, 40)] {
        let original = random_image(55, width, height, 3);

        let mut image = original.clone();
        apply_blur(
            &BlurRequest::new(BlurKind::Box, BlurTarget::Image, 3),
            &mut image
        )
        .unwrap();

        assert_eq!(image.data().len(), width * height * 3);
        // the last row must have been filtered, not copied from a wrong sized buffer
        let last = height - 1;
        let mut sum = 0_u32;
        for dy in [last - 1, last, last] {
            for dx in [width - 2, width - 1, width - 1] {
                sum += u32::from(original.get_sample(dx, dy, 0));
            }
        }
        assert_eq!(image.get_sample(width - 1, last, 0), (sum / 9) as u8);
    }
}

#[test]
fn image_filters_clamp_at_edges() {
    assert_eq!(BoxBlur::new(3).boundary_policy(), BoundaryPolicy::Clamp);
    assert_eq!(MedianBlur::new(3).boundary_policy(), BoundaryPolicy::Clamp);
    assert_eq!(GaussianBlur::new(3, 1.0).boundary_policy(), BoundaryPolicy::Clamp);

    // with clamping a corner sees four copies of itself
    let mut image = Image::from_fn(3, 3, 1, |x, y, pix| {
        pix[0] = if x == 0 && y == 0 { 90 } else { 0 };
    });
    BoxBlur::new(3).execute(&mut image).unwrap();
    assert_eq!(image.get_sample(0, 0, 0), 40);
}

#[test]
fn raised_kernel_limit_allows_huge_box_windows() {
    let blur = Blur::with_options(FilterOptions::default().set_max_kernel_size(1 << 20));

    let mut image = Image::fill(255, 2, 2, 1);
    blur.apply(BlurKind::Box, &mut image, 4105).unwrap();
    assert!(image.data().iter().all(|x| *x == 255));
}
