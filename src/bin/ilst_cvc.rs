use std::error;
use std::fs::File;
use std::io::{self, BufReader};
use std::process;
use std::time::Instant;
use clap::{Arg, Command};
use itertools::Itertools;

use cvc_solver::{graph::Graph, ordering::{ordering_to_priorities, Heuristic}, cust_errors::ProcessingError};

fn read_input(file: Option<&str>) -> Result<Graph, Box<dyn error::Error>> {
    let graph = match file {
        Some(path) => Graph::read_graph(BufReader::new(File::open(path)?))?,
        None => Graph::read_graph(io::stdin().lock())?,
    };
    Ok(graph)
}

/// Builds the ILST for `ordering` and reads the cover off it.
fn approximate(graph: &Graph, ordering: &[usize], verbose: bool) -> Result<Vec<usize>, ProcessingError> {
    let start = Instant::now();
    let tree = graph.ilst(&ordering_to_priorities(ordering))?;
    let cover = graph.cvc_from_ilst(&tree);
    if verbose {
        eprintln!("ilst and cover took {:?}, cover size {}", start.elapsed(), cover.len());
    }
    Ok(cover)
}

pub fn main() -> Result<(), Box<dyn error::Error>> {
    let m = Command::new("ilst_cvc")
        .about("Approximates a minimum connected vertex cover by independent spanning trees")
        .arg(Arg::new("heuristic")
             .required(true)
             .possible_values(["dd", "sl", "sll", "sd", "dg"]))
        .arg(Arg::new("rounds")
             .takes_value(true)
             .short('r')
             .help("Vertices per round of the sll heuristic, 1 to 32"))
        .arg(Arg::new("file")
             .takes_value(true)
             .short('f')
             .help("Edge list to read instead of stdin"))
        .arg(Arg::new("verbose")
             .short('v'))
        .get_matches();
    let verbose = m.is_present("verbose");
    let name = m.value_of("heuristic").expect("is required");
    let rounds = match m.value_of("rounds") {
        Some(r) => r.parse::<usize>()?,
        None if name == "sll" => {
            eprintln!("The sll heuristic needs the parameter -r");
            process::exit(1);
        },
        None => 0,
    };
    let heuristic = Heuristic::from_name(name, rounds).expect("clap only accepts known names");

    let graph = read_input(m.value_of("file"))?;
    if graph.order() < 2 {
        eprintln!("Graph must have at least 2 vertices");
        process::exit(1);
    }
    if !graph.is_connected() {
        eprintln!("Graph must be connected");
        process::exit(1);
    }
    if verbose {
        eprintln!("n = {}, m = {}, heuristic {:?}", graph.order(), graph.size(), heuristic);
    }

    let start = Instant::now();
    let mut ordering = match graph.ordering(heuristic) {
        Ok(ordering) => ordering,
        Err(err) => {
            eprintln!("{}", err);
            process::exit(1);
        },
    };
    if verbose {
        eprintln!("ordering took {:?}", start.elapsed());
    }

    // forward
    let cover = approximate(&graph, &ordering, verbose)?;
    if !graph.selection_is_cvc(&cover)? {
        println!("-1");
        return Err(Box::new(ProcessingError::InvalidSolution));
    }
    println!("{}", cover.iter().join(" "));

    // reverse
    ordering.reverse();
    let cover = approximate(&graph, &ordering, verbose)?;
    if !graph.selection_is_cvc(&cover)? {
        return Err(Box::new(ProcessingError::InvalidSolution));
    }
    println!("{}", cover.iter().join(" "));
    Ok(())
}
