// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use pixelseam::{
    box_blur, box_blur_with, convolve_with, decode, energy_map, energy_to_image, CarveOptions,
    Error, Filter, Finder, PixelGrid, RedInfluence, Result, SeamCarver,
};
use std::fs;
use std::process;
use std::str::FromStr;

extern crate clap;
extern crate image;

use clap::{App, AppSettings, Arg, ArgMatches, SubCommand};
use image::{DynamicImage, ImageFormat};
use log::{error, info};

fn load(path: &str) -> Result<PixelGrid> {
    decode(&fs::read(path)?)
}

// JPEG has no alpha channel, and the GIF encoder only takes RGBA.
fn save(image: DynamicImage, path: &str) -> Result<()> {
    let image = match ImageFormat::from_path(path) {
        Ok(ImageFormat::Jpeg) => DynamicImage::ImageRgb8(image.to_rgb8()),
        Ok(ImageFormat::Gif) => DynamicImage::ImageRgba8(image.to_rgba8()),
        _ => image,
    };
    image.save(path).map_err(Error::Encode)?;
    info!("wrote {}", path);
    Ok(())
}

fn number(matches: &ArgMatches, name: &str, default: u32) -> Result<u32> {
    match matches.value_of(name) {
        None => Ok(default),
        Some(v) => u32::from_str(v).map_err(|_| Error::Argument {
            reason: format!("--{} expects a whole number, got '{}'", name, v),
        }),
    }
}

fn run_filter(matches: &ArgMatches) -> Result<()> {
    let filter = Filter::from_str(matches.value_of("name").unwrap_or_default())?;
    let grid = load(matches.value_of("input").unwrap_or_default())?;
    let red = matches.is_present("red-influence");
    let result = match (filter, matches.is_present("radius")) {
        (Filter::AverageBlur, true) if red => {
            box_blur_with(&grid, number(matches, "radius", 1)?, &RedInfluence)?
        }
        (Filter::AverageBlur, true) => box_blur(&grid, number(matches, "radius", 1)?)?,
        (_, true) => {
            return Err(Error::Argument {
                reason: format!("--radius only applies to the blur preset, not {}", filter),
            })
        }
        (_, false) if red => convolve_with(&grid, &filter.kernel(), &RedInfluence)?,
        (_, false) => filter.apply(&grid)?,
    };
    save(
        DynamicImage::ImageRgba8(result.to_image()),
        matches.value_of("output").unwrap_or_default(),
    )
}

fn run_carve(matches: &ArgMatches) -> Result<()> {
    let grid = load(matches.value_of("input").unwrap_or_default())?;
    let defaults = CarveOptions::default();
    let options = CarveOptions {
        lookahead: number(matches, "lookahead", defaults.lookahead)?,
        seams: number(matches, "seams", defaults.seams)?,
        finder: if matches.is_present("optimal") {
            Finder::Optimal
        } else {
            Finder::Lookahead
        },
    };
    let carved = SeamCarver::new(&grid, options).carve()?;
    for seam in &carved.seams {
        info!("marked seam through rows {:?}", seam.rows());
    }
    save(
        DynamicImage::ImageRgba8(carved.grid.to_image()),
        matches.value_of("output").unwrap_or_default(),
    )
}

fn run_energy(matches: &ArgMatches) -> Result<()> {
    let grid = load(matches.value_of("input").unwrap_or_default())?;
    let energy = energy_map(&grid)?;
    save(
        DynamicImage::ImageLuma8(energy_to_image(&energy)),
        matches.value_of("output").unwrap_or_default(),
    )
}

fn files<'a, 'b>(command: App<'a, 'b>) -> App<'a, 'b> {
    command
        .arg(
            Arg::with_name("input")
                .help("The image to read")
                .required(true),
        )
        .arg(
            Arg::with_name("output")
                .help("Where to write the result; the extension picks the format")
                .required(true),
        )
}

fn main() {
    env_logger::init();

    let matches = App::new("pixelseam")
        .version("0.1.0")
        .author("Elf M. Sternberg <elf.sternberg@gmail.com>")
        .about("Convolution filters and seam marking for PNG, JPEG and GIF images")
        .setting(AppSettings::SubcommandRequiredElseHelp)
        .subcommand(SubCommand::with_name("filters").about("List the filter presets"))
        .subcommand(files(
            SubCommand::with_name("filter")
                .about("Apply a filter preset")
                .arg(
                    Arg::with_name("name")
                        .help("The preset to apply; see `pixelseam filters`")
                        .required(true),
                )
                .arg(
                    Arg::with_name("radius")
                        .long("radius")
                        .takes_value(true)
                        .help("Blur radius, for the blur preset"),
                )
                .arg(
                    Arg::with_name("red-influence")
                        .long("red-influence")
                        .help("Let strongly red neighbors pull harder"),
                ),
        ))
        .subcommand(files(
            SubCommand::with_name("carve")
                .about("Mark the lowest-energy horizontal seams in magenta")
                .arg(
                    Arg::with_name("lookahead")
                        .long("lookahead")
                        .takes_value(true)
                        .help("Steps to explore before committing (default 3)"),
                )
                .arg(
                    Arg::with_name("seams")
                        .long("seams")
                        .takes_value(true)
                        .help("How many seams to mark (default 1)"),
                )
                .arg(
                    Arg::with_name("optimal")
                        .long("optimal")
                        .help("Use the exhaustive search instead of the lookahead"),
                ),
        ))
        .subcommand(files(
            SubCommand::with_name("energy").about("Render the energy of every pixel"),
        ))
        .get_matches();

    let outcome = match matches.subcommand() {
        ("filters", _) => {
            for filter in Filter::ALL.iter() {
                println!("{}", filter);
            }
            Ok(())
        }
        ("filter", Some(m)) => run_filter(m),
        ("carve", Some(m)) => run_carve(m),
        ("energy", Some(m)) => run_energy(m),
        _ => Ok(()),
    };

    if let Err(err) = outcome {
        error!("{}", err);
        eprintln!("pixelseam: {}", err);
        process::exit(1);
    }
}
