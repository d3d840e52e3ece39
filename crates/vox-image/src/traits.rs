/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Seams every filter plugs into
use vox_core::log::trace;

use crate::errors::ImageErrors;
use crate::image::Image;
use crate::volume::Volume;

/// This encapsulates a filter operation on a raster
///
/// Implementors provide [`execute_impl`](OperationsTrait::execute_impl),
/// callers use [`execute`](OperationsTrait::execute) which checks the raster first.
pub trait OperationsTrait {
    /// Get the name of this operation
    fn get_name(&self) -> &'static str;

    /// Run the operation on a raster already known to be well formed
    ///
    /// Implementations must compute into a separate buffer and only
    /// commit it with [`Image::replace_data`] once everything succeeded.
    ///
    /// # Errors
    /// Any operations error will be propagated to the caller
    fn execute_impl(&self, image: &mut Image) -> Result<(), ImageErrors>;

    /// Execute the operation on the raster
    ///
    /// # Errors
    /// - Degenerate geometry, see [`Image::check_geometry`]
    /// - Anything the operation reports
    ///
    /// # Example
    /// ```
    /// use vox_image::errors::ImageErrors;
    /// use vox_image::image::Image;
    /// use vox_image::traits::OperationsTrait;
    ///
    /// struct Invert;
    ///
    /// impl OperationsTrait for Invert {
    ///     fn get_name(&self) -> &'static str {
    ///         "Invert"
    ///     }
    ///     fn execute_impl(&self, image: &mut Image) -> Result<(), ImageErrors> {
    ///         let out = image.data().iter().map(|x| 255 - x).collect();
    ///         image.replace_data(out)
    ///     }
    /// }
    ///
    /// let mut image = Image::fill(10, 4, 4, 1);
    /// Invert.execute(&mut image)?;
    /// assert_eq!(image.get_sample(0, 0, 0), 245);
    /// # Ok::<(), ImageErrors>(())
    /// ```
    fn execute(&self, image: &mut Image) -> Result<(), ImageErrors> {
        image.check_geometry()?;

        let (width, height) = image.dimensions();

        trace!(
            "Running {} on a {width}x{height} image with {} channel(s)",
            self.get_name(),
            image.channels()
        );
        self.execute_impl(image)
    }
}

/// This encapsulates a filter operation on a voxel grid
pub trait VolumeOperationsTrait {
    /// Get the name of this operation
    fn get_name(&self) -> &'static str;

    /// Run the operation on a volume already known to be well formed
    ///
    /// # Errors
    /// Any operations error will be propagated to the caller
    fn execute_impl(&self, volume: &mut Volume) -> Result<(), ImageErrors>;

    /// Execute the operation on the volume
    ///
    /// # Errors
    /// - Degenerate geometry, see [`Volume::check_geometry`]
    /// - Anything the operation reports
    fn execute(&self, volume: &mut Volume) -> Result<(), ImageErrors> {
        volume.check_geometry()?;

        let (width, height, depth) = volume.dimensions();

        trace!(
            "Running {} on a {width}x{height}x{depth} volume",
            self.get_name()
        );
        self.execute_impl(volume)
    }
}
