/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Errors possible during filtering
use std::fmt::{Debug, Display, Formatter};

use vox_core::kind::{BlurKind, BlurTarget};

/// All possible errors that can occur.
///
/// A filter that returns any of these has left its
/// input buffer untouched.
pub enum ImageErrors {
    /// Kernel size was zero, even or larger than the configured maximum
    InvalidKernelSize(usize),
    /// Sigma was not a finite positive number
    InvalidSigma(f32),
    /// The filter needs a sigma and none was given
    MissingSigma(BlurKind),
    /// A sigma was given to a filter that has no use for it
    UnexpectedSigma(BlurKind),
    /// The filter is not implemented for the target
    UnsupportedCombination(BlurKind, BlurTarget),
    /// The request names one target but a buffer of the other shape was passed
    ///
    /// Contains (requested, passed)
    TargetMismatch(BlurTarget, BlurTarget),
    /// One of the dimensions is zero, contains the dimension name
    ZeroDimension(&'static str),
    /// Sample count does not match what the dimensions imply
    ///
    /// Contains (expected, found)
    DimensionsMisMatch(usize, usize),
    /// A dimension exceeds the configured limit
    ///
    /// Contains (dimension name, limit, found)
    TooLargeDimensions(&'static str, usize, usize),
    GenericStr(&'static str),
    GenericString(String)
}

impl ImageErrors {
    /// Return true if this error reports a bad numeric parameter
    /// or degenerate geometry, checked before any buffer work starts
    #[must_use]
    pub const fn is_precondition(&self) -> bool {
        matches!(
            self,
            Self::InvalidKernelSize(_)
                | Self::InvalidSigma(_)
                | Self::ZeroDimension(_)
                | Self::DimensionsMisMatch(..)
                | Self::TooLargeDimensions(..)
        )
    }

    /// Return true if this error reports a filter, target and sigma
    /// combination that cannot be executed
    #[must_use]
    pub const fn is_invalid_combination(&self) -> bool {
        matches!(
            self,
            Self::MissingSigma(_)
                | Self::UnexpectedSigma(_)
                | Self::UnsupportedCombination(..)
                | Self::TargetMismatch(..)
        )
    }
}

impl Debug for ImageErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidKernelSize(size) => {
                writeln!(
                    f,
                    "Invalid kernel size {size}, expected an odd size greater than zero"
                )
            }
            Self::InvalidSigma(sigma) => {
                writeln!(f, "Invalid sigma {sigma}, expected a finite value above zero")
            }
            Self::MissingSigma(kind) => {
                writeln!(f, "The {kind} filter requires a sigma but none was given")
            }
            Self::UnexpectedSigma(kind) => {
                writeln!(f, "The {kind} filter does not take a sigma")
            }
            Self::UnsupportedCombination(kind, target) => {
                writeln!(f, "The {kind} filter is not supported on a {target}")
            }
            Self::TargetMismatch(requested, passed) => {
                writeln!(
                    f,
                    "Request was for a {requested} but a {passed} was passed"
                )
            }
            Self::ZeroDimension(name) => {
                writeln!(f, "The {name} is zero, cannot filter an empty buffer")
            }
            Self::DimensionsMisMatch(expected, found) => {
                writeln!(
                    f,
                    "Dimensions mismatch, expected {expected} samples but found {found}"
                )
            }
            Self::TooLargeDimensions(name, limit, found) => {
                writeln!(
                    f,
                    "Too large {name}, {found} exceeds the configured limit of {limit}"
                )
            }
            Self::GenericStr(err) => writeln!(f, "{err}"),
            Self::GenericString(err) => writeln!(f, "{err}")
        }
    }
}

impl Display for ImageErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{self:?}")
    }
}

impl std::error::Error for ImageErrors {}

impl From<String> for ImageErrors {
    fn from(s: String) -> ImageErrors {
        ImageErrors::GenericString(s)
    }
}

impl From<&'static str> for ImageErrors {
    fn from(s: &'static str) -> ImageErrors {
        ImageErrors::GenericStr(s)
    }
}
