/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! A single channel voxel grid
//!
//! Voxels live in one flat buffer, slice after slice, each slice in row
//! major order. All coordinates are 0 based, voxel `(x, y, z)` lives at
//!
//! ```text
//! (z * height + y) * width + x
//! ```
//!
//! Nested `[z][y][x]` data, e.g. a stack of decoded slices, can be
//! brought in with [`Volume::from_slices`] and taken out with [`Volume::to_slices`].
use crate::errors::ImageErrors;
use crate::image::checked_sample_count;

/// Represents a voxel grid
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Volume {
    width:  usize,
    height: usize,
    depth:  usize,
    data:   Vec<u8>
}

impl Volume {
    /// Create a volume from a flat buffer of voxels
    ///
    /// # Errors
    /// - [`ImageErrors::ZeroDimension`] if any dimension is zero
    /// - [`ImageErrors::DimensionsMisMatch`] if `data.len()` is not `width * height * depth`
    pub fn new(
        data: Vec<u8>, width: usize, height: usize, depth: usize
    ) -> Result<Volume, ImageErrors> {
        let expected =
            checked_sample_count(&[("width", width), ("height", height), ("depth", depth)])?;

        if expected != data.len() {
            return Err(ImageErrors::DimensionsMisMatch(expected, data.len()));
        }
        Ok(Volume {
            width,
            height,
            depth,
            data
        })
    }

    /// Create a volume with every voxel set to `value`
    #[must_use]
    pub fn fill(value: u8, width: usize, height: usize, depth: usize) -> Volume {
        // an overflowing size is left empty, check_geometry reports it
        let len = width
            .checked_mul(height)
            .and_then(|x| x.checked_mul(depth))
            .unwrap_or(0);

        Volume {
            width,
            height,
            depth,
            data: vec![value; len]
        }
    }

    /// Create a volume from nested `[z][y][x]` slices
    ///
    /// Every slice must have the same number of rows and every
    /// row the same number of voxels as the first one.
    ///
    /// # Errors
    /// - [`ImageErrors::ZeroDimension`] for no slices, empty slices or empty rows
    /// - [`ImageErrors::DimensionsMisMatch`] if a slice or row disagrees with the first
    pub fn from_slices(slices: &[Vec<Vec<u8>>]) -> Result<Volume, ImageErrors> {
        let depth = slices.len();
        let height = slices.first().map_or(0, Vec::len);
        let width = slices
            .first()
            .and_then(|slice| slice.first())
            .map_or(0, Vec::len);

        let expected =
            checked_sample_count(&[("width", width), ("height", height), ("depth", depth)])?;

        let mut data = Vec::with_capacity(expected);

        for slice in slices {
            if slice.len() != height {
                return Err(ImageErrors::DimensionsMisMatch(height, slice.len()));
            }
            for row in slice {
                if row.len() != width {
                    return Err(ImageErrors::DimensionsMisMatch(width, row.len()));
                }
                data.extend_from_slice(row);
            }
        }
        Ok(Volume {
            width,
            height,
            depth,
            data
        })
    }

    /// Return the voxels as nested `[z][y][x]` vectors
    #[must_use]
    pub fn to_slices(&self) -> Vec<Vec<Vec<u8>>> {
        if self.width == 0 || self.height == 0 {
            return vec![vec![]; self.depth];
        }
        self.data
            .chunks_exact(self.width * self.height)
            .map(|slice| slice.chunks_exact(self.width).map(<[u8]>::to_vec).collect())
            .collect()
    }

    /// Get volume dimensions as a tuple of (width,height,depth)
    #[must_use]
    pub const fn dimensions(&self) -> (usize, usize, usize) {
        (self.width, self.height, self.depth)
    }

    /// Flat index of voxel (x,y,z)
    #[inline]
    #[must_use]
    pub const fn index(&self, x: usize, y: usize, z: usize) -> usize {
        (z * self.height + y) * self.width + x
    }

    /// Return the voxel at (x,y,z)
    ///
    /// # Panics
    /// If the coordinate is outside the volume
    #[must_use]
    pub fn get(&self, x: usize, y: usize, z: usize) -> u8 {
        assert!(
            x < self.width && y < self.height && z < self.depth,
            "Voxel ({x},{y},{z}) out of bounds"
        );
        self.data[self.index(x, y, z)]
    }

    /// Set the voxel at (x,y,z)
    ///
    /// # Panics
    /// If the coordinate is outside the volume
    pub fn set(&mut self, x: usize, y: usize, z: usize, value: u8) {
        assert!(
            x < self.width && y < self.height && z < self.depth,
            "Voxel ({x},{y},{z}) out of bounds"
        );
        let index = self.index(x, y, z);
        self.data[index] = value;
    }

    /// Return slice `z` as a row major `width * height` buffer
    ///
    /// # Panics
    /// If `z` is not less than the depth
    #[must_use]
    pub fn slice(&self, z: usize) -> &[u8] {
        assert!(z < self.depth, "Slice {z} out of bounds");
        let size = self.width * self.height;

        &self.data[z * size..(z + 1) * size]
    }

    /// Return all voxels
    #[must_use]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Return all voxels mutably
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Check that the volume has a non zero size and a buffer matching it
    ///
    /// # Errors
    /// See [`Volume::new`]
    pub fn check_geometry(&self) -> Result<(), ImageErrors> {
        let expected = checked_sample_count(&[
            ("width", self.width),
            ("height", self.height),
            ("depth", self.depth)
        ])?;

        if expected != self.data.len() {
            return Err(ImageErrors::DimensionsMisMatch(expected, self.data.len()));
        }
        Ok(())
    }

    /// Replace every voxel with the contents of `data`
    ///
    /// # Errors
    /// [`ImageErrors::DimensionsMisMatch`] if `data` is not exactly `width * height * depth` long
    pub fn replace_data(&mut self, data: Vec<u8>) -> Result<(), ImageErrors> {
        let expected = self
            .width
            .saturating_mul(self.height)
            .saturating_mul(self.depth);

        if data.len() != expected {
            return Err(ImageErrors::DimensionsMisMatch(expected, data.len()));
        }
        self.data = data;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::errors::ImageErrors;
    use crate::volume::Volume;

    #[test]
    fn slices_round_trip_through_flat_storage() {
        let slices = vec![
            vec![vec![1, 2, 3], vec![4, 5, 6]],
            vec![vec![7, 8, 9], vec![10, 11, 12]]
        ];
        let volume = Volume::from_slices(&slices).unwrap();

        assert_eq!(volume.dimensions(), (3, 2, 2));
        assert_eq!(volume.get(0, 1, 1), 10);
        assert_eq!(volume.get(2, 0, 0), 3);
        assert_eq!(volume.slice(1), &[7, 8, 9, 10, 11, 12]);
        assert_eq!(volume.to_slices(), slices);
    }

    #[test]
    fn ragged_rows_are_rejected() {
        let slices = vec![vec![vec![1, 2, 3], vec![4, 5]]];
        assert!(matches!(
            Volume::from_slices(&slices),
            Err(ImageErrors::DimensionsMisMatch(3, 2))
        ));
    }

    #[test]
    fn ragged_slices_are_rejected() {
        let slices = vec![vec![vec![1, 2]], vec![vec![1, 2], vec![3, 4]]];
        assert!(matches!(
            Volume::from_slices(&slices),
            Err(ImageErrors::DimensionsMisMatch(1, 2))
        ));
    }

    #[test]
    fn empty_input_is_rejected() {
        assert!(matches!(
            Volume::from_slices(&[]),
            Err(ImageErrors::ZeroDimension(_))
        ));
    }

    #[test]
    fn set_then_get() {
        let mut volume = Volume::fill(0, 4, 3, 2);
        volume.set(3, 2, 1, 99);
        assert_eq!(volume.get(3, 2, 1), 99);
        assert_eq!(volume.data()[volume.index(3, 2, 1)], 99);
        assert_eq!(volume.data().iter().filter(|x| **x == 99).count(), 1);
    }

    #[test]
    fn overflowing_fill_is_empty_and_rejected() {
        let volume = Volume::fill(1, usize::MAX, usize::MAX, 3);
        assert!(volume.data().is_empty());
        assert!(volume.check_geometry().is_err());
    }
}
