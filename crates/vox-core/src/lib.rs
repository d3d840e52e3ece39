/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Core routines shared by all vox crates
//!
//! This crate provides a set of primitives shared by the
//! buffer types and the blur engine under the `vox` umbrella
//!
//! It currently contains
//!
//! - The filter kind and target enums used to describe a blur request
//! - Filter options that bound the work an engine is allowed to do
//! - A logging facade that compiles to nothing unless the `log` feature is on
//!
//! # Features
//!  - `log`: Route the logging macros to the [`log`](https://docs.rs/log) crate.
//!
//!  - `serde`: Enables serializing of some of the data structures
//!     present in the crate
//!
#![macro_use]

pub mod kind;
pub mod log;
pub mod options;
pub mod serde;
