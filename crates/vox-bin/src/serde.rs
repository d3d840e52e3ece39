/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::ffi::OsStr;

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use vox_imageprocs::blur::BlurRequest;

pub struct Summary<'a> {
    input:      &'a OsStr,
    output:     &'a OsStr,
    request:    &'a BlurRequest,
    dimensions: Vec<usize>
}

impl<'a> Summary<'a> {
    pub fn new(
        input: &'a OsStr, output: &'a OsStr, request: &'a BlurRequest, dimensions: Vec<usize>
    ) -> Summary<'a> {
        Summary {
            input,
            output,
            request,
            dimensions
        }
    }
}

impl<'a> Serialize for Summary<'a> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        let mut state = serializer.serialize_struct("Summary", 4)?;

        state.serialize_field("input", &self.input.to_string_lossy())?;
        state.serialize_field("output", &self.output.to_string_lossy())?;
        state.serialize_field("request", &self.request)?;
        state.serialize_field("dimensions", &self.dimensions)?;

        state.end()
    }
}
