/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Raw sample files
//!
//! Files carry no header, just the samples in row major order,
//! so the caller supplies the geometry and the length must agree.
use std::ffi::OsStr;
use std::fs::{File, OpenOptions};
use std::io::{BufReader, BufWriter, Read, Write};

use log::info;
use vox_image::errors::ImageErrors;

pub struct RawFile<'a> {
    file_path: &'a OsStr
}

impl<'a> RawFile<'a> {
    pub fn new(file_path: &'a OsStr) -> RawFile<'a> {
        RawFile { file_path }
    }

    /// Read the whole file, which must hold exactly `expected` samples
    pub fn read_samples(&self, expected: usize) -> Result<Vec<u8>, ImageErrors> {
        let fd = File::open(self.file_path).map_err(|e| self.io_error(&e))?;
        let file_len = fd.metadata().map_err(|e| self.io_error(&e))?.len();

        if u64::try_from(expected).map_or(true, |expected| expected != file_len) {
            return Err(self.size_error(file_len, expected));
        }
        let mut data = Vec::new();

        BufReader::new(fd)
            .take(file_len)
            .read_to_end(&mut data)
            .map_err(|e| self.io_error(&e))?;

        // the file may have changed after the size check
        if data.len() != expected {
            return Err(self.size_error(data.len() as u64, expected));
        }
        info!("Read {} samples from {:?}", data.len(), self.file_path);
        Ok(data)
    }

    pub fn write_samples(&self, data: &[u8]) -> Result<(), ImageErrors> {
        let fd = OpenOptions::new()
            .write(true)
            .truncate(true)
            .create(true)
            .open(self.file_path)
            .map_err(|e| self.io_error(&e))?;
        let mut writer = BufWriter::new(fd);

        writer.write_all(data).map_err(|e| self.io_error(&e))?;
        writer.flush().map_err(|e| self.io_error(&e))?;

        info!("Wrote {} samples to {:?}", data.len(), self.file_path);
        Ok(())
    }

    fn size_error(&self, found: u64, expected: usize) -> ImageErrors {
        ImageErrors::GenericString(format!(
            "{:?} holds {} samples but the geometry needs {}",
            self.file_path, found, expected
        ))
    }

    fn io_error(&self, err: &std::io::Error) -> ImageErrors {
        ImageErrors::GenericString(format!("{:?}: {}", self.file_path, err))
    }
}
