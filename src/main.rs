use clap::{crate_authors, crate_description, crate_name, crate_version, App, Arg, ArgMatches};
use log::{error, info};
use skg_glasgow::{
    glasgow::{convert_and_write, output_paths},
    skg::{read_edge_list, DEFAULT_COMMENT},
    Err, Result,
};
use std::path::Path;

fn handle_convert(matches: &ArgMatches) -> Result<()> {
    let input_file = Path::new(matches.value_of("input-file").unwrap_or_default());
    let output_base = matches.value_of("output-base").unwrap_or_default();
    if !input_file.is_file() {
        return Err(Err::InputNotFound(input_file.to_path_buf()));
    }
    let comment = matches
        .value_of("comment")
        .and_then(|comment| comment.chars().next())
        .unwrap_or(DEFAULT_COMMENT);
    let (pairs_path, ndds_path) = output_paths(output_base);
    info!(
        "taking input from {} and outputting to {} and {}",
        input_file.display(),
        pairs_path.display(),
        ndds_path.display()
    );
    let edges = read_edge_list(input_file, comment)?;
    let summary = convert_and_write(&edges, output_base)?;
    if matches.is_present("summary") {
        println!("{}", summary);
    }
    info!("done");
    Ok(())
}

fn is_single_char(value: String) -> std::result::Result<(), String> {
    if value.chars().count() == 1 {
        Ok(())
    } else {
        Err(String::from("the comment marker must be a single character"))
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let matches = App::new(crate_name!())
        .about(crate_description!())
        .author(crate_authors!())
        .version(crate_version!())
        .arg(
            Arg::with_name("input-file")
                .help("Path to the SKG edge list file")
                .long("input-file")
                .takes_value(true)
                .required(true),
        )
        .arg(
            Arg::with_name("output-base")
                .help("Base path of the Glasgow output files (.ginput and .gndds are appended)")
                .long("output-base")
                .takes_value(true)
                .required(true),
        )
        .arg(
            Arg::with_name("comment")
                .help("Lines starting with this character are skipped")
                .long("comment")
                .takes_value(true)
                .default_value("#")
                .validator(is_single_char),
        )
        .arg(
            Arg::with_name("summary")
                .help("Prints vertex and edge counts of both output files")
                .long("summary")
                .takes_value(false),
        )
        .get_matches();
    if let Err(e) = handle_convert(&matches) {
        error!("{}; quitting", e);
        eprintln!("{}: {}", crate_name!(), e);
        std::process::exit(1);
    }
}
