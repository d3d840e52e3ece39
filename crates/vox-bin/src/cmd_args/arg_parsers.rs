/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use clap::builder::PossibleValue;
use clap::ValueEnum;
use vox_core::kind::BlurKind;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum IBlurKind {
    Median,
    Box,
    Gaussian
}

impl IBlurKind {
    pub const fn to_blur_kind(self) -> BlurKind {
        match self {
            IBlurKind::Median => BlurKind::Median,
            IBlurKind::Box => BlurKind::Box,
            IBlurKind::Gaussian => BlurKind::Gaussian
        }
    }
}

impl ValueEnum for IBlurKind {
    fn value_variants<'a>() -> &'a [Self] {
        &[Self::Median, Self::Box, Self::Gaussian]
    }

    fn to_possible_value(&self) -> Option<PossibleValue> {
        Some(PossibleValue::new(self.to_blur_kind().name()))
    }
}
