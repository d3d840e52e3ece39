/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::ffi::OsStr;

use clap::ArgMatches;
use log::{debug, info};
use vox_core::kind::BlurTarget;
use vox_image::errors::ImageErrors;
use vox_image::image::{checked_sample_count, Image};
use vox_image::volume::Volume;
use vox_imageprocs::blur::{apply_blur_volume_with_options, apply_blur_with_options, BlurRequest};

use crate::cmd_args::arg_parsers::IBlurKind;
use crate::cmd_parsers::global_options::CmdOptions;
use crate::file_io::RawFile;
use crate::serde::Summary;

fn raw_path<'a>(args: &'a ArgMatches, id: &str) -> Result<&'a OsStr, ImageErrors> {
    args.get_raw(id)
        .and_then(|mut values| values.next())
        .ok_or(ImageErrors::GenericStr("Missing file argument"))
}

fn required<T: Copy + Send + Sync + 'static>(
    args: &ArgMatches, id: &'static str
) -> Result<T, ImageErrors> {
    args.get_one::<T>(id)
        .copied()
        .ok_or_else(|| ImageErrors::GenericString(format!("Missing argument --{id}")))
}

fn check_limit(name: &'static str, limit: usize, found: usize) -> Result<(), ImageErrors> {
    if found > limit {
        return Err(ImageErrors::TooLargeDimensions(name, limit, found));
    }
    Ok(())
}

/// Build the request described by the command line
pub(crate) fn request_from_args(args: &ArgMatches) -> Result<BlurRequest, ImageErrors> {
    let kind = required::<IBlurKind>(args, "filter")?.to_blur_kind();
    let kernel_size = required::<usize>(args, "kernel-size")?;

    let target = if args.get_one::<usize>("depth").is_some() {
        BlurTarget::Volume
    } else {
        BlurTarget::Image
    };
    let mut request = BlurRequest::new(kind, target, kernel_size);

    if let Some(sigma) = args.get_one::<f32>("sigma") {
        request = request.with_sigma(*sigma);
    }
    debug!("Parsed request {:?}", request);

    Ok(request)
}

pub(crate) fn create_and_exec_workflow_from_cmd(
    args: &ArgMatches, cmd_opts: &CmdOptions
) -> Result<(), ImageErrors> {
    info!("Creating workflow from input");

    let request = request_from_args(args)?;
    // reject bad parameters and geometry before touching the file system
    request.validate_with_options(&cmd_opts.filter_options)?;

    let in_file = RawFile::new(raw_path(args, "in")?);
    let out_file = RawFile::new(raw_path(args, "out")?);

    let width = required::<usize>(args, "width")?;
    let height = required::<usize>(args, "height")?;
    let options = &cmd_opts.filter_options;

    check_limit("width", options.get_max_width(), width)?;
    check_limit("height", options.get_max_height(), height)?;

    let dimensions = match request.target() {
        BlurTarget::Image => {
            let channels = args.get_one::<usize>("channels").copied().unwrap_or(1);
            let expected = checked_sample_count(&[
                ("width", width),
                ("height", height),
                ("channel count", channels)
            ])?;

            let mut image = Image::new(in_file.read_samples(expected)?, width, height, channels)?;
            apply_blur_with_options(&request, &mut image, options)?;
            out_file.write_samples(image.data())?;

            vec![width, height, channels]
        }
        BlurTarget::Volume => {
            let depth = required::<usize>(args, "depth")?;
            check_limit("depth", options.get_max_depth(), depth)?;

            let expected =
                checked_sample_count(&[("width", width), ("height", height), ("depth", depth)])?;

            let mut volume = Volume::new(in_file.read_samples(expected)?, width, height, depth)?;
            apply_blur_volume_with_options(&request, &mut volume, options)?;
            out_file.write_samples(volume.data())?;

            vec![width, height, depth]
        }
    };
    info!("Applied {} blur", request.kind());

    if cmd_opts.print_json {
        let summary = Summary::new(raw_path(args, "in")?, raw_path(args, "out")?, &request, dimensions);

        match serde_json::to_string_pretty(&summary) {
            Ok(json) => println!("{json}"),
            Err(err) => return Err(ImageErrors::GenericString(err.to_string()))
        }
    }
    Ok(())
}
