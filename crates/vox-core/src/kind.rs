/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Filter kinds and the buffers they can be applied to

use core::fmt::{Display, Formatter};

/// The family of windowed filters the engine knows about
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum BlurKind {
    /// Order statistic filter, each sample becomes the median
    /// of its neighbourhood
    Median,
    /// Uniform weighted moving average
    Box,
    /// Gaussian weighted average, needs a sigma
    Gaussian
}

impl BlurKind {
    /// All supported kinds, in declaration order
    pub const ALL: [BlurKind; 3] = [BlurKind::Median, BlurKind::Box, BlurKind::Gaussian];

    /// Return true if this filter is parameterized by a spread (sigma)
    #[must_use]
    pub const fn requires_sigma(self) -> bool {
        matches!(self, BlurKind::Gaussian)
    }

    /// A short lowercase name, used by the command line and logs
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            BlurKind::Median => "median",
            BlurKind::Box => "box",
            BlurKind::Gaussian => "gaussian"
        }
    }

    /// Parse a name as returned by [`BlurKind::name`], ignoring ascii case
    #[must_use]
    pub fn from_name(name: &str) -> Option<BlurKind> {
        BlurKind::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(name))
    }
}

impl Display for BlurKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

/// The shape of buffer a filter runs on
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum BlurTarget {
    /// A 2D raster with interleaved channels
    Image,
    /// A single channel 3D voxel grid
    Volume
}

impl BlurTarget {
    /// Number of spatial dimensions of the target
    #[must_use]
    pub const fn dimensions(self) -> usize {
        match self {
            BlurTarget::Image => 2,
            BlurTarget::Volume => 3
        }
    }
}

impl Display for BlurTarget {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            BlurTarget::Image => f.write_str("image"),
            BlurTarget::Volume => f.write_str("volume")
        }
    }
}
