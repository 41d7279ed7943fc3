use std::process::exit;

use clap::{App, Arg};
use log::error;
use nbt_tree::{
    nbt,
    stream::{Endian, Mode, Options, StringEncoding},
};

fn main() {
    env_logger::init();

    let matches = App::new("nbt-dump")
        .about("Print the tags in an uncompressed NBT file")
        .arg(Arg::with_name("file").required(true).index(1))
        .arg(
            Arg::with_name("network")
                .long("network")
                .help("ints and lengths are VarInts, strings are UTF-8"),
        )
        .arg(
            Arg::with_name("little-endian")
                .long("little-endian")
                .help("fixed width values are little endian"),
        )
        .arg(
            Arg::with_name("json")
                .long("json")
                .help("print as JSON instead of the tree layout"),
        )
        .get_matches();

    let path = matches.value_of("file").unwrap();
    let (mut options, mode) = if matches.is_present("network") {
        (Options::network(), Mode::Network)
    } else {
        (Options::java(), Mode::File)
    };
    if matches.is_present("little-endian") {
        options = options.with_endian(Endian::Little);
    }
    if mode == Mode::File && options.endian == Endian::Little {
        options = options.with_strings(StringEncoding::Utf8);
    }

    let data = match std::fs::read(path) {
        Ok(data) => data,
        Err(e) => {
            error!("could not read {}: {}", path, e);
            exit(1);
        }
    };

    let tags = match nbt::from_bytes_multiple(&data, options, mode) {
        Ok(tags) => tags,
        Err(e) => {
            error!("could not parse {}: {}", path, e);
            exit(1);
        }
    };

    for tag in tags {
        if matches.is_present("json") {
            match serde_json::to_string_pretty(&tag) {
                Ok(json) => println!("{}", json),
                Err(e) => {
                    error!("could not render json: {}", e);
                    exit(1);
                }
            }
        } else {
            println!("{}", tag);
        }
    }
}
