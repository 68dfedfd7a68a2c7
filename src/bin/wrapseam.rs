use clap::{App, Arg, ArgMatches};
use failure::{err_msg, Error};
use log::info;
use std::process;
use wrapseam::{energy_field, energy_to_image, Orientation, Raster, SeamCarver};

fn target(matches: &ArgMatches, name: &str, current: u32) -> Result<u32, Error> {
    match matches.value_of(name) {
        Some(value) => Ok(value.parse()?),
        None => Ok(current),
    }
}

fn run() -> Result<(), Error> {
    let matches = App::new("wrapseam")
        .version("0.1.0")
        .about("Shrink an image by removing its lowest-energy seams")
        .arg(
            Arg::with_name("input")
                .help("The image to carve")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::with_name("output")
                .help("Where to write the result")
                .required(true)
                .index(2),
        )
        .arg(
            Arg::with_name("width")
                .long("width")
                .takes_value(true)
                .help("Target width (default: unchanged)"),
        )
        .arg(
            Arg::with_name("height")
                .long("height")
                .takes_value(true)
                .help("Target height (default: unchanged)"),
        )
        .arg(
            Arg::with_name("energy")
                .long("energy")
                .help("Write the energy field of the input instead of carving"),
        )
        .get_matches();

    let input = matches
        .value_of("input")
        .ok_or_else(|| err_msg("missing input"))?;
    let output = matches
        .value_of("output")
        .ok_or_else(|| err_msg("missing output"))?;

    let raster = Raster::from_image(&image::open(input)?.to_rgb8())?;

    if matches.is_present("energy") {
        energy_to_image(&energy_field(&raster, Orientation::Vertical)).save(output)?;
        return Ok(());
    }

    let new_width = target(&matches, "width", raster.width())?;
    let new_height = target(&matches, "height", raster.height())?;
    info!(
        "carving {}x{} to {}x{}",
        raster.width(),
        raster.height(),
        new_width,
        new_height
    );

    let mut carver = SeamCarver::new(raster);
    carver.carve(new_width, new_height)?;
    carver.into_picture().into_image().save(output)?;
    Ok(())
}

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("wrapseam: {}", err);
        process::exit(1);
    }
}
