/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use clap::ArgMatches;
use log::{info, Level};
use vox_core::options::FilterOptions;

#[derive(Debug, Copy, Clone)]
pub struct CmdOptions {
    pub filter_options: FilterOptions,
    pub print_json:     bool
}

impl CmdOptions {
    pub fn new() -> CmdOptions {
        CmdOptions {
            filter_options: FilterOptions::default(),
            print_json:     false
        }
    }
}

fn flag_set(options: &ArgMatches, id: &str) -> bool {
    options.get_one::<bool>(id).copied().unwrap_or(false)
}

pub fn parse_options(options: &ArgMatches) -> CmdOptions {
    let mut cmd_options = CmdOptions::new();
    let mut filter_options = cmd_options.filter_options;

    if let Some(width) = options.get_one::<usize>("max-width") {
        info!("Setting maximum width to {}", width);
        filter_options = filter_options.set_max_width(*width);
    }
    if let Some(height) = options.get_one::<usize>("max-height") {
        info!("Setting maximum height to {}", height);
        filter_options = filter_options.set_max_height(*height);
    }
    if let Some(depth) = options.get_one::<usize>("max-depth") {
        info!("Setting maximum depth to {}", depth);
        filter_options = filter_options.set_max_depth(*depth);
    }
    if let Some(kernel_size) = options.get_one::<usize>("max-kernel-size") {
        info!("Setting maximum kernel size to {}", kernel_size);
        filter_options = filter_options.set_max_kernel_size(*kernel_size);
    }
    cmd_options.filter_options = filter_options;
    cmd_options.print_json = flag_set(options, "json");

    cmd_options
}

/// Set up logging options
pub fn setup_logger(options: &ArgMatches) {
    let log_level;

    if flag_set(options, "debug") {
        log_level = Level::Debug;
    } else if flag_set(options, "trace") {
        log_level = Level::Trace;
    } else if flag_set(options, "warn") {
        log_level = Level::Warn;
    } else if flag_set(options, "info") {
        log_level = Level::Info;
    } else {
        log_level = Level::Warn;
    }

    if let Err(err) = simple_logger::init_with_level(log_level) {
        eprintln!("Could not initialize logger: {err}");
        return;
    }

    info!("Initialized logger");
    info!("Log level :{}", log_level);
}

#[cfg(test)]
mod tests {
    use crate::cmd_args::create_cmd_args;
    use crate::cmd_parsers::global_options::parse_options;

    #[test]
    fn limits_reach_filter_options() {
        let matches = create_cmd_args()
            .try_get_matches_from([
                "vox", "-i", "a.raw", "-o", "b.raw", "--width", "4", "--height", "4",
                "--filter", "box", "-k", "3", "--max-width", "64", "--max-depth", "2", "--max-kernel-size", "9",
                "--json"
            ])
            .unwrap();
        let options = parse_options(&matches);

        assert_eq!(options.filter_options.get_max_width(), 64);
        assert_eq!(options.filter_options.get_max_depth(), 2);
        assert_eq!(options.filter_options.get_max_height(), 1 << 14);
        assert_eq!(options.filter_options.get_max_kernel_size(), 9);
        assert!(options.print_json);
    }
}
