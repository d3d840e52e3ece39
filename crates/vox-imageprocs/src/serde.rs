/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

#![cfg(feature = "serde-support")]

use serde::ser::*;

use crate::blur::BlurRequest;

impl Serialize for BlurRequest {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        let mut state = serializer.serialize_struct("BlurRequest", 4)?;

        state.serialize_field("kind", &self.kind)?;
        state.serialize_field("target", &self.target)?;
        state.serialize_field("kernel_size", &self.kernel_size)?;
        state.serialize_field("sigma", &self.sigma)?;

        state.end()
    }
}
