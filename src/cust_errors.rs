//! Errors raised while building graphs, importing edge lists and running the solvers.

use std::error::Error;
use std::fmt;
use std::io;
use std::num::ParseIntError;

/// Structural violations detected by the graph store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphError {
    /// A graph needs at least one vertex.
    InvalidOrder,
    /// An edge from a vertex to itself was requested.
    SelfLoop(usize),
    /// A vertex id outside of `0..order` was used.
    OutOfRange { vertex: usize, order: usize },
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraphError::InvalidOrder => write!(f, "order must be positive"),
            GraphError::SelfLoop(v) => write!(f, "edges must not be self-loops (vertex {})", v),
            GraphError::OutOfRange { vertex, order } =>
                write!(f, "vertex {} is out of range for a graph of order {}", vertex, order),
        }
    }
}

impl Error for GraphError {}

#[derive(Debug)]
pub enum ImportError {
    IoError(io::Error),
    ParseError(ParseIntError),
    InputMalformedError,
    GraphError(GraphError),
}

impl fmt::Display for ImportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImportError::IoError(io_error) => write!(f, "{}", io_error),
            ImportError::ParseError(parse_error) => write!(f, "{}", parse_error),
            ImportError::InputMalformedError => write!(f, "input malformed"),
            ImportError::GraphError(graph_error) => write!(f, "{}", graph_error),
        }
    }
}

impl Error for ImportError {}

impl From<io::Error> for ImportError {
    fn from(err: io::Error) -> Self {
        ImportError::IoError(err)
    }
}

impl From<ParseIntError> for ImportError {
    fn from(err: ParseIntError) -> Self {
        ImportError::ParseError(err)
    }
}

impl From<GraphError> for ImportError {
    fn from(err: GraphError) -> Self {
        ImportError::GraphError(err)
    }
}

/// Failures of the ordering, tree and cover computations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProcessingError {
    /// The bitmask solver only handles graphs with up to 64 vertices.
    TooManyVertices(usize),
    /// The smallest-log-last parameter has to be in `1..=MAX_ROUNDS`.
    InvalidRounds(usize),
    /// A priority array has to hold exactly one entry per vertex.
    InvalidPriority { expected: usize, found: usize },
    /// The search space was exhausted, which only happens on disconnected graphs.
    NoCoverFound,
    InvalidSolution,
    GraphError(GraphError),
}

impl fmt::Display for ProcessingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessingError::TooManyVertices(n) =>
                write!(f, "bitmasking supports at most 64 vertices, got {}", n),
            ProcessingError::InvalidRounds(r) =>
                write!(f, "r must be in the range [1, 32], got {}", r),
            ProcessingError::InvalidPriority { expected, found } =>
                write!(f, "expected {} priorities, got {}", expected, found),
            ProcessingError::NoCoverFound => write!(f, "graph has no connected vertex cover"),
            ProcessingError::InvalidSolution => write!(f, "computed set is not a connected vertex cover"),
            ProcessingError::GraphError(graph_error) => write!(f, "{}", graph_error),
        }
    }
}

impl Error for ProcessingError {}

impl From<GraphError> for ProcessingError {
    fn from(err: GraphError) -> Self {
        ProcessingError::GraphError(err)
    }
}
