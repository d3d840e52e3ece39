/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Global filter options
//!
//! These bound how much work a single blur call may do, engines refuse
//! buffers and kernels that exceed them instead of trying to allocate.

/// Filter options
///
/// Not all options are respected by all filters, e.g `max_depth` only
/// matters for volumes.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct FilterOptions {
    /// Maximum width of a raster or volume
    ///
    /// - Default value: 16384
    max_width:       usize,
    /// Maximum height of a raster or volume
    ///
    /// - Default value: 16384
    max_height:      usize,
    /// Maximum number of slices in a volume
    ///
    /// - Default value: 4096
    max_depth:       usize,
    /// Largest kernel edge length accepted
    ///
    /// Kernels are cubic for volumes, so this grows the
    /// per voxel work with the cube of the value.
    ///
    /// - Default value: 255
    max_kernel_size: usize
}

impl Default for FilterOptions {
    fn default() -> Self {
        Self {
            max_width:       1 << 14,
            max_height:      1 << 14,
            max_depth:       1 << 12,
            max_kernel_size: 255
        }
    }
}

impl FilterOptions {
    /// Get maximum width configured
    #[must_use]
    pub const fn get_max_width(&self) -> usize {
        self.max_width
    }

    /// Get maximum height configured
    #[must_use]
    pub const fn get_max_height(&self) -> usize {
        self.max_height
    }

    /// Get maximum depth configured
    #[must_use]
    pub const fn get_max_depth(&self) -> usize {
        self.max_depth
    }

    /// Get the largest kernel size allowed
    #[must_use]
    pub const fn get_max_kernel_size(&self) -> usize {
        self.max_kernel_size
    }

    /// Set maximum width for which filters will run
    #[must_use]
    pub fn set_max_width(mut self, width: usize) -> Self {
        self.max_width = width;
        self
    }

    /// Set maximum height for which filters will run
    #[must_use]
    pub fn set_max_height(mut self, height: usize) -> Self {
        self.max_height = height;
        self
    }

    /// Set maximum number of volume slices filters will accept
    #[must_use]
    pub fn set_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }

    /// Set the largest kernel size filters will accept
    #[must_use]
    pub fn set_max_kernel_size(mut self, size: usize) -> Self {
        self.max_kernel_size = size;
        self
    }
}

#[cfg(test)]
mod tests {
    use crate::options::FilterOptions;

    #[test]
    fn builder_sets_fields() {
        let options = FilterOptions::default()
            .set_max_width(10)
            .set_max_height(20)
            .set_max_depth(30)
            .set_max_kernel_size(7);

        assert_eq!(options.get_max_width(), 10);
        assert_eq!(options.get_max_height(), 20);
        assert_eq!(options.get_max_depth(), 30);
        assert_eq!(options.get_max_kernel_size(), 7);
    }

    #[test]
    fn defaults() {
        let options = FilterOptions::default();
        assert_eq!(options.get_max_width(), 16384);
        assert_eq!(options.get_max_height(), 16384);
        assert_eq!(options.get_max_depth(), 4096);
        assert_eq!(options.get_max_kernel_size(), 255);
    }
}
