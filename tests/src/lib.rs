/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

#![allow(unused_imports, unused)]

use std::path::Path;

use nanorand::{Rng, WyRand};
use serde::Deserialize;
use vox_core::kind::{BlurKind, BlurTarget};
use vox_image::image::Image;
use vox_image::volume::Volume;
use vox_imageprocs::blur::BlurRequest;

mod dispatch;
mod image_props;
mod volume_props;

/// How a request from `dispatch.json` is expected to end
#[derive(Copy, Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Ok,
    Precondition,
    Combination
}

#[derive(Clone, Deserialize, Debug)]
pub struct TestEntry {
    pub kind:        String,
    pub target:      String,
    pub kernel_size: usize,
    pub sigma:       Option<f32>,
    pub outcome:     Outcome,
    pub comment:     Option<String>
}

impl TestEntry {
    pub fn request(&self) -> BlurRequest {
        let kind = BlurKind::from_name(&self.kind).unwrap();
        let target = match self.target.as_str() {
            "image" => BlurTarget::Image,
            "volume" => BlurTarget::Volume,
            other => panic!("Unknown target {other}")
        };
        let request = BlurRequest::new(kind, target, self.kernel_size);

        match self.sigma {
            Some(sigma) => request.with_sigma(sigma),
            None => request
        }
    }
}

pub fn load_entries(name: &str) -> Vec<TestEntry> {
    let file = Path::new(env!("CARGO_MANIFEST_DIR")).join(name);
    let contents = std::fs::read(file).unwrap();

    serde_json::from_slice(&contents).unwrap()
}

/// A 10x10 single channel raster with a 4x4 block of 255 in the middle
pub fn centered_block() -> Image {
    Image::from_fn(10, 10, 1, |x, y, pix| {
        if (3..7).contains(&x) && (3..7).contains(&y) {
            pix[0] = 255;
        }
    })
}

pub fn random_image(seed: u64, width: usize, height: usize, channels: usize) -> Image {
    let mut rng = WyRand::new_seed(seed);
    let mut data = vec![0_u8; width * height * channels];
    rng.fill(&mut data);

    Image::new(data, width, height, channels).unwrap()
}

pub fn random_volume(seed: u64, width: usize, height: usize, depth: usize) -> Volume {
    let mut rng = WyRand::new_seed(seed);
    let mut data = vec![0_u8; width * height * depth];
    rng.fill(&mut data);

    Volume::new(data, width, height, depth).unwrap()
}

/// Every request that is valid for the given target
pub fn valid_requests(target: BlurTarget, kernel_size: usize) -> Vec<BlurRequest> {
    BlurKind::ALL
        .iter()
        .map(|kind| {
            let request = BlurRequest::new(*kind, target, kernel_size);
            if kind.requires_sigma() {
                request.with_sigma(1.2)
            } else {
                request
            }
        })
        .filter(|request| request.validate().is_ok())
        .collect()
}
