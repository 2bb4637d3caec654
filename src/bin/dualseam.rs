// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use dualseam::dump::{energy_table, energy_to_image};
use dualseam::{calculate_energy, resize, CarverConfig, Orientation, SeamCarver, SeamFinder};
use std::io;
use std::process;

extern crate clap;
extern crate image;

use clap::{App, Arg, ArgMatches};
use env_logger::Env;
use failure::{format_err, Error, ResultExt};
use image::pnm::{PNMSubtype, SampleEncoding};
use image::{DynamicImage, ImageOutputFormat, RgbImage};
use itertools::Itertools;
use log::info;

fn parse_dimension(matches: &ArgMatches, name: &str) -> Result<u32, Error> {
    let raw = matches
        .value_of(name)
        .ok_or_else(|| format_err!("--{} is required", name))?;
    let value = raw
        .parse::<u32>()
        .with_context(|_| format!("--{} expects a whole number, got {:?}", name, raw))?;
    Ok(value)
}

fn parse_config(matches: &ArgMatches) -> Result<CarverConfig, Error> {
    match matches.value_of("border-energy") {
        Some(raw) => {
            let border_energy = raw
                .parse::<f64>()
                .with_context(|_| format!("--border-energy expects a number, got {:?}", raw))?;
            Ok(CarverConfig::with_border_energy(border_energy))
        }
        None => Ok(CarverConfig::default()),
    }
}

// The energy tables and the first seam in each direction, before any
// carving happens.
fn show_seams(name: &str, image: &RgbImage, config: CarverConfig) -> Result<(), Error> {
    let carver = SeamCarver::with_config(image.clone(), config)?;
    println!("{} ({}-by-{} image)", name, carver.width(), carver.height());
    println!();
    println!("The table gives the dual-gradient energies of each pixel.");
    println!("The asterisks denote a minimum energy vertical or horizontal seam.");
    println!();

    let vertical = carver.find_vertical_seam();
    println!("Vertical seam: {{ {} }}", vertical.iter().join(" "));
    println!("{}", energy_table(&carver, &vertical, Orientation::Vertical));

    let horizontal = carver.find_horizontal_seam();
    println!("Horizontal seam: {{ {} }}", horizontal.iter().join(" "));
    println!("{}", energy_table(&carver, &horizontal, Orientation::Horizontal));
    Ok(())
}

fn run() -> Result<(), Error> {
    let matches = App::new("dualseam")
        .version("0.1.0")
        .about("Content-aware image resizing by seam carving")
        .arg(
            Arg::with_name("input")
                .help("The image to resize")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::with_name("width")
                .help("Width of the resized image; must be less than the input's")
                .short("w")
                .long("width")
                .takes_value(true)
                .required(true),
        )
        .arg(
            Arg::with_name("height")
                .help("Height of the resized image; must be less than the input's")
                .short("H")
                .long("height")
                .takes_value(true)
                .required(true),
        )
        .arg(
            Arg::with_name("output")
                .help("Where to write the result; binary PPM on stdout if omitted")
                .short("o")
                .long("output")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("border-energy")
                .help("Energy given to the pixels on the image frame")
                .long("border-energy")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("show-seams")
                .help("Print the energy table and first seams before carving")
                .long("show-seams"),
        )
        .arg(
            Arg::with_name("energy-map")
                .help("Also write the input's energy as a greyscale image")
                .long("energy-map")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("verbose")
                .help("Log more; repeat for more still")
                .short("v")
                .multiple(true),
        )
        .get_matches();

    let level = match matches.occurrences_of("verbose") {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(Env::default().default_filter_or(level)).init();

    let input = matches
        .value_of("input")
        .ok_or_else(|| format_err!("an input image is required"))?;
    let width = parse_dimension(&matches, "width")?;
    let height = parse_dimension(&matches, "height")?;
    let config = parse_config(&matches)?;

    let image = image::open(input)
        .with_context(|_| format!("could not read {}", input))?
        .to_rgb8();

    if matches.is_present("show-seams") {
        show_seams(input, &image, config)?;
    }

    if let Some(path) = matches.value_of("energy-map") {
        energy_to_image(&calculate_energy(&image, config.border_energy))
            .save(path)
            .with_context(|_| format!("could not write {}", path))?;
        info!("energy map written to {}", path);
    }

    let resized = resize(&image, width, height, config)?;
    match matches.value_of("output") {
        Some(path) => resized
            .save(path)
            .with_context(|_| format!("could not write {}", path))?,
        None => DynamicImage::ImageRgb8(resized)
            .write_to(
                &mut io::stdout(),
                ImageOutputFormat::Pnm(PNMSubtype::Pixmap(SampleEncoding::Binary)),
            )
            .context("could not write the image to stdout")?,
    }
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("dualseam: {}", err);
        for cause in err.iter_causes() {
            eprintln!("  caused by: {}", cause);
        }
        process::exit(1);
    }
}
