/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use vox_core::kind::{BlurKind, BlurTarget};
use vox_core::options::FilterOptions;
use vox_image::errors::ImageErrors;
use vox_image::image::Image;
use vox_image::volume::Volume;
use vox_imageprocs::blur::{apply_blur, apply_blur_volume, apply_blur_volume_with_options, Blur};

use crate::{load_entries, random_image, random_volume, Outcome};

#[test]
#[allow(clippy::uninlined_format_args)]
fn test_dispatch_table() {
    let entries = load_entries("dispatch.json");
    let mut error = false;

    for entry in &entries {
        let request = entry.request();

        let original_image = random_image(21, 9, 7, 2);
        let original_volume = random_volume(22, 6, 5, 4);
        let mut image = original_image.clone();
        let mut volume = original_volume.clone();

        let result = match request.target() {
            BlurTarget::Image => apply_blur(&request, &mut image),
            BlurTarget::Volume => apply_blur_volume(&request, &mut volume)
        };

        let outcome = match &result {
            Ok(()) => Outcome::Ok,
            Err(e) if e.is_precondition() => Outcome::Precondition,
            Err(e) if e.is_invalid_combination() => Outcome::Combination,
            Err(e) => panic!("Unexpected error {:?}", e)
        };

        if outcome != entry.outcome {
            error = true;
            println!(
                "{:?} expected {:?} got {:?} ({:?})",
                request, entry.outcome, result, entry.comment
            );
        }
        if result.is_err() && (image != original_image || volume != original_volume) {
            error = true;
            println!("{:?} failed but modified its buffer", request);
        }
    }
    assert!(!error, "Some dispatch entries did not match");
}

#[test]
fn degenerate_buffers_are_rejected_without_panicking() {
    let blur = Blur::new();

    let mut empty = Image::fill(0, 0, 0, 1);
    assert!(blur.apply(BlurKind::Box, &mut empty, 3).is_err());

    let mut no_channels = Image::fill(0, 4, 4, 0);
    assert!(matches!(
        blur.apply(BlurKind::Median, &mut no_channels, 3),
        Err(ImageErrors::ZeroDimension(_))
    ));

    let mut flat = Volume::fill(0, 4, 0, 4);
    assert!(matches!(
        blur.apply_volume_with_sigma(BlurKind::Gaussian, &mut flat, 3, 1.0),
        Err(ImageErrors::ZeroDimension("height"))
    ));
}

#[test]
fn volume_depth_limit_is_enforced() {
    let options = FilterOptions::default().set_max_depth(3);
    let request = vox_imageprocs::blur::BlurRequest::new(BlurKind::Median, BlurTarget::Volume, 3);

    let mut shallow = Volume::fill(9, 4, 4, 3);
    assert!(apply_blur_volume_with_options(&request, &mut shallow, &options).is_ok());

    let mut deep = Volume::fill(9, 4, 4, 4);
    assert!(matches!(
        apply_blur_volume_with_options(&request, &mut deep, &options),
        Err(ImageErrors::TooLargeDimensions("depth", 3, 4))
    ));
}
