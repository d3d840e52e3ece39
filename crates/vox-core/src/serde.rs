/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

#![cfg(feature = "serde")]

use serde::ser::*;

use crate::kind::{BlurKind, BlurTarget};
use crate::options::FilterOptions;

impl Serialize for BlurKind {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        // kind serialization is simply it's debug value
        serializer.serialize_str(&format!("{self:?}"))
    }
}

impl Serialize for BlurTarget {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        serializer.serialize_str(&format!("{self:?}"))
    }
}

impl Serialize for FilterOptions {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        let mut state = serializer.serialize_struct("FilterOptions", 4)?;

        state.serialize_field("max_width", &self.get_max_width())?;
        state.serialize_field("max_height", &self.get_max_height())?;
        state.serialize_field("max_depth", &self.get_max_depth())?;
        state.serialize_field("max_kernel_size", &self.get_max_kernel_size())?;

        state.end()
    }
}
