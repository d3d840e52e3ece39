/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use nanorand::{Rng, WyRand};
use vox_core::kind::{BlurKind, BlurTarget};
use vox_image::volume::Volume;
use vox_image::traits::VolumeOperationsTrait;
use vox_imageprocs::blur::{apply_blur_volume, Blur};
use vox_imageprocs::boundary::BoundaryPolicy;
use vox_imageprocs::gaussian_blur::GaussianBlur3D;
use vox_imageprocs::kernel::GaussianKernel3D;
use vox_imageprocs::median::MedianBlur3D;

use crate::{random_volume, valid_requests};

fn count_outliers(volume: &Volume, center: u8, tolerance: u8) -> usize {
    volume
        .data()
        .iter()
        .filter(|v| v.abs_diff(center) > tolerance)
        .count()
}

#[test]
fn volume_dimensions_are_preserved() {
    for (width, height, depth) in [(1, 1, 1), (7, 3, 5), (3, 8, 2)] {
        for request in valid_requests(BlurTarget::Volume, 3) {
            let mut volume = random_volume(14, width, height, depth);
            apply_blur_volume(&request, &mut volume).unwrap();

            assert_eq!(volume.dimensions(), (width, height, depth));
            assert_eq!(volume.data().len(), width * height * depth);
        }
    }
}

#[test]
fn zero_volume_stays_zero() {
    for request in valid_requests(BlurTarget::Volume, 3) {
        let mut volume = Volume::fill(0, 6, 6, 6);
        apply_blur_volume(&request, &mut volume).unwrap();

        assert!(volume.data().iter().all(|x| *x == 0), "{request:?}");
    }
}

#[test]
fn uniform_volume_is_preserved() {
    for value in [3, 128, 255] {
        for request in valid_requests(BlurTarget::Volume, 5) {
            let mut volume = Volume::fill(value, 7, 6, 5);
            apply_blur_volume(&request, &mut volume).unwrap();

            assert!(
                volume.data().iter().all(|x| *x == value),
                "{request:?} changed a uniform {value} volume"
            );
        }
    }
}

#[test]
fn median_does_not_add_noise() {
    let (width, height, depth) = (10, 10, 10);
    let mut volume = Volume::fill(128, width, height, depth);
    let mut rng = WyRand::new_seed(2023);

    // roughly 3% of the voxels
    for _ in 0..30 {
        let x = rng.generate_range(0..width);
        let y = rng.generate_range(0..height);
        let z = rng.generate_range(0..depth);
        let value = if rng.generate_range(0_u8..2) == 0 { 98 } else { 158 };

        volume.set(x, y, z, value);
    }
    let before = count_outliers(&volume, 128, 10);
    assert!(before > 0);

    Blur::new()
        .apply_volume(BlurKind::Median, &mut volume, 3)
        .unwrap();

    let after = count_outliers(&volume, 128, 10);
    assert!(after <= before, "outliers went from {before} to {after}");
}

#[test]
fn volume_filters_exclude_outside_voxels() {
    assert_eq!(MedianBlur3D::new(3).boundary_policy(), BoundaryPolicy::Exclude);
    assert_eq!(GaussianBlur3D::new(3, 1.0).boundary_policy(), BoundaryPolicy::Exclude);

    // a corner window only holds the 8 voxels of the 2x2x2 cube, with clamping
    // it would hold 27 and the corner would count 8 times
    let mut volume = Volume::fill(0, 2, 2, 2);
    volume.set(0, 0, 0, 200);
    volume.set(1, 0, 0, 200);
    volume.set(0, 1, 0, 200);
    volume.set(0, 0, 1, 200);

    MedianBlur3D::new(3).execute(&mut volume).unwrap();
    // four 0 and four 200, the two middle values are averaged
    assert!(volume.data().iter().all(|x| *x == 100));
}

#[test]
fn gaussian_3d_depends_on_depth_offset() {
    let kernel = GaussianKernel3D::new(5, 1.0).unwrap();

    assert!(kernel.weight(2, 2, 2) > kernel.weight(2, 2, 3));
    assert!(kernel.weight(2, 2, 3) > kernel.weight(2, 2, 4));
    // isotropic, the same offset along any axis weighs the same
    assert!((kernel.weight(2, 2, 4) - kernel.weight(4, 2, 2)).abs() < 1e-12);
    assert!((kernel.weight(2, 2, 4) - kernel.weight(2, 0, 2)).abs() < 1e-12);

    let sum: f64 = kernel.weights().iter().sum();
    assert!((sum - 1.0).abs() < 1e-4);
}

#[test]
fn single_bright_slice_spreads_to_neighbours() {
    let mut volume = Volume::fill(0, 5, 5, 5);
    for y in 0..5 {
        for x in 0..5 {
            volume.set(x, y, 2, 250);
        }
    }
    Blur::new()
        .apply_volume_with_sigma(BlurKind::Gaussian, &mut volume, 3, 1.0)
        .unwrap();

    let center = volume.get(2, 2, 2);
    let neighbour = volume.get(2, 2, 1);
    let far = volume.get(2, 2, 0);

    assert!(center > neighbour, "{center} {neighbour}");
    assert!(neighbour > 0);
    // z = 0 only reaches z = 1, which is dark
    assert_eq!(far, 0);
}
