/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! How windows treat neighbours that fall outside the buffer
//!
//! 2D filters replicate the border, 3D filters drop the missing
//! neighbours. The two are not interchangeable, edge samples come out
//! different under each.

/// Boundary policy of a filter
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum BoundaryPolicy {
    /// Replace an out of range coordinate with the nearest valid one
    ///
    /// ```text
    ///  a,b,c
    ///  d,e,f
    /// ```
    /// Is read as
    /// ```text
    /// a a,b,c c
    /// a a,b,c c
    /// d d,e,f f
    /// d d,e,f f
    /// ```
    Clamp,
    /// Leave out of range neighbours out of the window entirely,
    /// weights are renormalized over the neighbours that remain
    Exclude
}

/// Clamp `position + offset` to `[0, len - 1]`
///
/// `len` must not be zero.
#[inline]
#[allow(clippy::cast_possible_wrap, clippy::cast_sign_loss)]
pub(crate) fn clamp_index(position: usize, offset: isize, len: usize) -> usize {
    let index = position as isize + offset;

    index.clamp(0, len as isize - 1) as usize
}

/// Return `position + offset` if it lies in `[0, len)`
#[inline]
#[allow(clippy::cast_possible_wrap, clippy::cast_sign_loss)]
pub(crate) fn offset_index(position: usize, offset: isize, len: usize) -> Option<usize> {
    let index = position as isize + offset;

    if index < 0 || index >= len as isize {
        None
    } else {
        Some(index as usize)
    }
}

/// Half the kernel edge, as a signed offset
#[inline]
#[allow(clippy::cast_possible_wrap)]
pub(crate) const fn signed_radius(kernel_size: usize) -> isize {
    (kernel_size / 2) as isize
}

#[cfg(test)]
mod tests {
    use crate::boundary::{clamp_index, offset_index, signed_radius};

    #[test]
    fn clamp_replicates_edges() {
        assert_eq!(clamp_index(0, -2, 5), 0);
        assert_eq!(clamp_index(4, 3, 5), 4);
        assert_eq!(clamp_index(2, 1, 5), 3);
        assert_eq!(clamp_index(0, 5, 1), 0);
    }

    #[test]
    fn exclude_drops_outside() {
        assert_eq!(offset_index(0, -1, 5), None);
        assert_eq!(offset_index(4, 1, 5), None);
        assert_eq!(offset_index(3, 1, 5), Some(4));
    }

    #[test]
    fn radius_is_half_the_size() {
        assert_eq!(signed_radius(1), 0);
        assert_eq!(signed_radius(3), 1);
        assert_eq!(signed_radius(7), 3);
    }
}
