use std::error;
use std::fs::File;
use std::io::{self, BufReader};
use clap::{Arg, Command};
use itertools::Itertools;

use cvc_solver::{graph::Graph, ordering::ordering_to_priorities};

pub fn main() -> Result<(), Box<dyn error::Error>> {
    let m = Command::new("degeneracy")
        .about("Prints the degeneracy ordering and the core number of every vertex")
        .arg(Arg::new("file")
             .takes_value(true)
             .short('f'))
        .arg(Arg::new("tree")
             .short('t')
             .help("Also print the spanning tree built from the degeneracy ordering"))
        .get_matches();

    let graph = match m.value_of("file") {
        Some(path) => Graph::read_graph(BufReader::new(File::open(path)?))?,
        None => Graph::read_graph(io::stdin().lock())?,
    };

    let (ordering, cores) = graph.degeneracy_ordering_and_cores();
    println!("{}", ordering.iter().join(" "));
    println!("{}", cores.iter().join(" "));

    if m.is_present("tree") {
        let tree = graph.ilst(&ordering_to_priorities(&ordering))?;
        tree.write_graph(io::stdout().lock())?;
    }
    Ok(())
}
