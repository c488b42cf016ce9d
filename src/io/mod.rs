/*!
# IO

Utilities for reading graphs from and writing graphs and results to text.

## Edge List Format

The input consists of whitespace-separated tokens: the first token is the number of nodes `n`,
followed by any number of pairs `u v` of 0-based endpoints. Pairs may be spread over lines
arbitrarily. Lines starting with `#` are comments.

```text
# two triangles joined by the edge {2, 3}
6
0 1  1 2  2 0
3 4  4 5  5 3
2 3
```

Results (wide bridges) are written one edge per line as `g w`; articulation points one node per line.

## Traits

To generalize over reading/writing:
- [`GraphReader`] and [`GraphWriter`] are implemented by readers and writers for a specific format.
- [`EdgeListRead`] and [`EdgeListWrite`] are shorthands implemented on the graphs themselves.
*/

pub mod edge_list;

use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, ErrorKind, Result, Write},
    path::Path,
};

use crate::prelude::*;

pub use edge_list::*;

/// Trait for types that can read graphs in a specific format.
///
/// This trait provides both a low-level method to read from any
/// [`BufRead`] instance and a convenience wrapper to read directly
/// from files.
pub trait GraphReader<G> {
    /// Reads a graph from the given reader according to the settings in `self`.
    ///
    /// # Errors
    /// Returns an error if the input is not a valid representation
    /// of a graph in the expected format.
    fn try_read_graph<R>(&self, reader: R) -> Result<G>
    where
        R: BufRead;

    /// Reads a graph from a file according to the settings in `self`.
    ///
    /// # Errors
    /// Returns an error if the file cannot be opened or if its contents
    /// are not a valid representation of a graph in the expected format.
    fn try_read_graph_file<P>(&self, path: P) -> Result<G>
    where
        P: AsRef<Path>,
    {
        self.try_read_graph(BufReader::new(File::open(path)?))
    }
}

/// Trait for types that can write graphs in a specific format.
pub trait GraphWriter<G> {
    /// Writes the given graph to the provided writer according to the settings in `self`.
    ///
    /// # Errors
    /// Returns an error if writing fails (e.g., IO errors).
    fn try_write_graph<W>(&self, graph: &G, writer: W) -> Result<()>
    where
        W: Write;

    /// Writes the given graph to a file according to the settings in `self`.
    ///
    /// # Errors
    /// Returns an error if the file cannot be created or if writing fails.
    fn try_write_graph_file<P>(&self, graph: &G, path: P) -> Result<()>
    where
        P: AsRef<Path>,
    {
        self.try_write_graph(graph, BufWriter::new(File::create(path)?))
    }
}

/// Writes one edge `u v` per line
pub fn write_edges<W, I>(mut writer: W, edges: I) -> Result<()>
where
    W: Write,
    I: IntoIterator<Item = Edge>,
{
    for Edge(u, v) in edges {
        writeln!(writer, "{u} {v}")?;
    }
    writer.flush()
}

/// Writes one node per line
pub fn write_nodes<W, I>(mut writer: W, nodes: I) -> Result<()>
where
    W: Write,
    I: IntoIterator<Item = Node>,
{
    for u in nodes {
        writeln!(writer, "{u}")?;
    }
    writer.flush()
}

/// Shorthand for creating a new IO-error
macro_rules! io_error {
    ($kind: expr, $info: expr) => {
        std::io::Error::new($kind, $info)
    };
}

/// Shorthand for returning `Err(std::io::Error)` early when a condition fails
macro_rules! raise_error_unless {
    ($cond : expr, $kind : expr, $info : expr) => {
        if !($cond) {
            return Err(io_error!($kind, $info));
        }
    };
}

/// Tries to parse the next value in an iterator and returns early if it fails
macro_rules! parse_next_value {
    ($iterator : expr, $name : expr) => {{
        let next = $iterator.next();
        raise_error_unless!(
            next.is_some(),
            ErrorKind::InvalidData,
            format!("Premature end of input when parsing {}.", $name)
        );

        let parsed = next.unwrap().parse();
        raise_error_unless!(
            parsed.is_ok(),
            ErrorKind::InvalidData,
            format!("Invalid value found. Cannot parse {}.", $name)
        );

        parsed.unwrap()
    }};
}

use io_error;
use parse_next_value;
use raise_error_unless;

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn write_results() {
        let mut buffer = Vec::new();
        write_edges(&mut buffer, [Edge(2, 1), Edge(2, 3)]).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), "2 1\n2 3\n");

        let mut buffer = Vec::new();
        write_nodes(&mut buffer, [3, 0]).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), "3\n0\n");

        let mut buffer = Vec::new();
        write_edges(&mut buffer, []).unwrap();
        assert!(buffer.is_empty());
    }
}
