/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

pub(crate) mod arg_parsers;

use clap::{value_parser, Arg, ArgAction, ArgGroup, Command};

use crate::cmd_args::arg_parsers::IBlurKind;

#[rustfmt::skip]
pub fn create_cmd_args() -> Command {
    Command::new("vox")
        .about("Blur raw rasters and voxel volumes")
        .arg(Arg::new("in")
            .short('i')
            .long("input")
            .help("Raw file to read samples from")
            .long_help("Headerless file holding width*height*channels samples for a raster\nor width*height*depth samples for a volume, one byte per sample")
            .required(true))
        .arg(Arg::new("out")
            .short('o')
            .long("output")
            .help("File to write the blurred samples to")
            .required(true))
        .arg(Arg::new("width")
            .long("width")
            .help_heading("GEOMETRY")
            .help("Width of the raster or volume")
            .value_parser(value_parser!(usize))
            .required(true))
        .arg(Arg::new("height")
            .long("height")
            .help_heading("GEOMETRY")
            .help("Height of the raster or volume")
            .value_parser(value_parser!(usize))
            .required(true))
        .arg(Arg::new("channels")
            .long("channels")
            .help_heading("GEOMETRY")
            .help("Interleaved channels per pixel, defaults to 1")
            .value_parser(value_parser!(usize)))
        .arg(Arg::new("depth")
            .long("depth")
            .help_heading("GEOMETRY")
            .help("Number of slices, treats the input as a volume")
            .value_parser(value_parser!(usize)))
        .group(ArgGroup::new("target")
            .args(["channels", "depth"])
            .multiple(false))
        .arg(Arg::new("filter")
            .long("filter")
            .short('f')
            .help_heading("FILTER")
            .help("Blur to apply")
            .value_parser(value_parser!(IBlurKind))
            .required(true))
        .arg(Arg::new("kernel-size")
            .long("kernel-size")
            .short('k')
            .help_heading("FILTER")
            .help("Side length of the window, must be odd")
            .value_parser(value_parser!(usize))
            .required(true))
        .arg(Arg::new("sigma")
            .long("sigma")
            .short('s')
            .help_heading("FILTER")
            .help("Standard deviation of the gaussian, required for gaussian blur only")
            .value_parser(value_parser!(f32)))
        .arg(Arg::new("max-width")
            .long("max-width")
            .help_heading("ADVANCED")
            .help("Refuse inputs wider than this")
            .value_parser(value_parser!(usize)))
        .arg(Arg::new("max-height")
            .long("max-height")
            .help_heading("ADVANCED")
            .help("Refuse inputs taller than this")
            .value_parser(value_parser!(usize)))
        .arg(Arg::new("max-depth")
            .long("max-depth")
            .help_heading("ADVANCED")
            .help("Refuse volumes with more slices than this")
            .value_parser(value_parser!(usize)))
        .arg(Arg::new("max-kernel-size")
            .long("max-kernel-size")
            .help_heading("ADVANCED")
            .help("Refuse kernels with a larger edge than this")
            .value_parser(value_parser!(usize)))
        .arg(Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print a json summary of the applied blur"))
        .arg(Arg::new("debug")
            .long("debug")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display debug information and higher"))
        .arg(Arg::new("trace")
            .long("trace")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display very verbose information"))
        .arg(Arg::new("warn")
            .long("warn")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display warnings and errors"))
        .arg(Arg::new("info")
            .long("info")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display information about the applied filter"))
}
