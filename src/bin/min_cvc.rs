use std::error;
use std::fs::File;
use std::io::{self, BufReader};
use std::process;
use std::time::Instant;
use clap::{Arg, Command};
use itertools::Itertools;

use cvc_solver::{graph::Graph, bitmasking::mask_to_vertices, cust_errors::ProcessingError};

fn read_input(file: Option<&str>) -> Result<Graph, Box<dyn error::Error>> {
    let graph = match file {
        Some(path) => Graph::read_graph(BufReader::new(File::open(path)?))?,
        None => Graph::read_graph(io::stdin().lock())?,
    };
    Ok(graph)
}

pub fn main() -> Result<(), Box<dyn error::Error>> {
    let m = Command::new("min_cvc")
        .about("Computes a minimum connected vertex cover")
        .arg(Arg::new("bitmasking")
             .short('m')
             .help("Enumerate vertex sets as bitmasks instead of branch and bound (at most 64 vertices)"))
        .arg(Arg::new("count")
             .short('c')
             .help("Only print the size of the cover"))
        .arg(Arg::new("file")
             .takes_value(true)
             .short('f'))
        .arg(Arg::new("verbose")
             .short('v'))
        .get_matches();
    let verbose = m.is_present("verbose");

    let graph = read_input(m.value_of("file"))?;
    if verbose {
        eprintln!("n = {}, m = {}", graph.order(), graph.size());
    }

    let start = Instant::now();
    let result = if m.is_present("bitmasking") {
        graph.find_cvc_by_bitmasking().map(mask_to_vertices)
    } else {
        graph.find_cvc_by_backtracking()
    };
    let cover = match result {
        Ok(cover) => cover,
        Err(err) => {
            eprintln!("{}", err);
            process::exit(1);
        },
    };
    if verbose {
        eprintln!("search took {:?}, cover size {}", start.elapsed(), cover.len());
    }
    if !graph.selection_is_cvc(&cover)? {
        return Err(Box::new(ProcessingError::InvalidSolution));
    }

    if m.is_present("count") {
        println!("{}", cover.len());
    } else {
        println!("{}", cover.iter().join(" "));
    }
    Ok(())
}
