//! # EdgeList
//!
//! The EdgeList-Format consists of the number of nodes `n`, followed by pairs `u v`
//! representing an (undirected) edge `Edge(u, v)` with `0 <= u, v < n`.
//! All tokens are separated by arbitrary whitespace; lines starting with the comment identifier are skipped.

use std::io::{BufRead, ErrorKind};

use super::*;

/// A GraphReader for the EdgeList-Format
#[derive(Debug, Clone)]
pub struct EdgeListReader {
    /// Lines starting with `comment_identifier` are skipped when reading
    comment_identifier: String,
    /// If *true*, self-loops and repeated edges are dropped
    simple: bool,
}

impl Default for EdgeListReader {
    fn default() -> Self {
        Self {
            comment_identifier: "#".to_string(),
            simple: false,
        }
    }
}

impl EdgeListReader {
    /// Creates a new (default) reader
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the comment identifier
    pub fn comment_identifier<S: Into<String>>(mut self, c: S) -> EdgeListReader {
        self.comment_identifier = c.into();
        self
    }

    /// If set, self-loops and repeated edges are dropped while reading
    pub fn simple(mut self, simple: bool) -> EdgeListReader {
        self.simple = simple;
        self
    }

    /// Parses the number of nodes and all edges.
    /// Every endpoint is checked against the number of nodes.
    pub fn try_read_edges<R: BufRead>(&self, mut reader: R) -> Result<(NumNodes, Vec<Edge>)> {
        let mut content = String::new();
        reader.read_to_string(&mut content)?;

        let mut tokens = content
            .lines()
            .filter(|line| !line.trim_start().starts_with(self.comment_identifier.as_str()))
            .flat_map(str::split_whitespace)
            .peekable();

        let n: NumNodes = parse_next_value!(tokens, "number of nodes");

        let mut edges = Vec::new();
        while tokens.peek().is_some() {
            let u: Node = parse_next_value!(tokens, "first endpoint");
            let v: Node = parse_next_value!(tokens, "second endpoint");

            raise_error_unless!(
                u < n && v < n,
                ErrorKind::InvalidData,
                format!("Edge ({u},{v}) has an endpoint outside of 0..{n}.")
            );

            edges.push(Edge(u, v));
        }

        Ok((n, edges))
    }
}

impl<G: GraphFromScratch> GraphReader<G> for EdgeListReader {
    fn try_read_graph<R: BufRead>(&self, reader: R) -> Result<G> {
        let (n, edges) = self.try_read_edges(reader)?;

        let graph = if self.simple {
            G::try_from_simple_edges(n, edges)
        } else {
            G::try_from_edges(n, edges)
        };

        graph.map_err(|err| io_error!(ErrorKind::InvalidData, err))
    }
}

/// Trait for creating graphs form an EdgeListReader.
/// Used as shorthand for default EdgeListReader settings
pub trait EdgeListRead: Sized {
    /// Tries to read the graph from a given reader
    fn try_read_edge_list<R: BufRead>(reader: R) -> Result<Self>;

    /// Tries to read the graph from a given file
    fn try_read_edge_list_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::try_read_edge_list(BufReader::new(File::open(path)?))
    }
}

impl<G> EdgeListRead for G
where
    G: GraphFromScratch,
{
    fn try_read_edge_list<R: BufRead>(reader: R) -> Result<Self> {
        EdgeListReader::default().try_read_graph(reader)
    }
}

/// A writer for the EdgeList-Format
#[derive(Debug, Clone)]
pub struct EdgeListWriter {
    /// If *true*, one edge is written per line; otherwise all edges share a single line
    one_edge_per_line: bool,
}

impl Default for EdgeListWriter {
    fn default() -> Self {
        Self {
            one_edge_per_line: true,
        }
    }
}

impl EdgeListWriter {
    /// Shorthand for default
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the line layout
    pub fn one_edge_per_line(mut self, one_edge_per_line: bool) -> EdgeListWriter {
        self.one_edge_per_line = one_edge_per_line;
        self
    }
}

impl<G: AdjacencyList + GraphEdgeOrder> GraphWriter<G> for EdgeListWriter {
    fn try_write_graph<W: Write>(&self, graph: &G, mut writer: W) -> Result<()> {
        writeln!(writer, "{}", graph.number_of_nodes())?;

        let separator = if self.one_edge_per_line { "\n" } else { " " };
        let mut first = true;
        for Edge(u, v) in graph.edges(true) {
            if !first {
                write!(writer, "{separator}")?;
            }
            write!(writer, "{u} {v}")?;
            first = false;
        }

        if !first {
            writeln!(writer)?;
        }

        writer.flush()
    }
}

/// Trait for writing a graph to a writer in the EdgeList-Format.
/// Shorthand for default settings.
pub trait EdgeListWrite {
    /// Tries to write the graph to a writer
    fn try_write_edge_list<W: Write>(&self, writer: W) -> Result<()>;

    /// Tries to write the graph to a file
    fn try_write_edge_list_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let writer = BufWriter::new(File::create(path)?);
        self.try_write_edge_list(writer)
    }
}

impl<G: AdjacencyList + GraphEdgeOrder> EdgeListWrite for G {
    fn try_write_edge_list<W: Write>(&self, writer: W) -> Result<()> {
        EdgeListWriter::new().try_write_graph(self, writer)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use itertools::Itertools;

    fn read(input: &str) -> Result<AdjArrayUndir> {
        AdjArrayUndir::try_read_edge_list(input.as_bytes())
    }

    #[test]
    fn read_whitespace_separated() {
        let graph = read("# two triangles\n6\n0 1  1 2\n2\n0\n\t3 4 4 5 5 3 2 3\n# done\n").unwrap();

        assert_eq!(graph.number_of_nodes(), 6);
        assert_eq!(graph.number_of_edges(), 7);
        assert_eq!(
            graph.ordered_edges(true).collect_vec(),
            vec![
                Edge(0, 1),
                Edge(0, 2),
                Edge(1, 2),
                Edge(2, 3),
                Edge(3, 4),
                Edge(3, 5),
                Edge(4, 5)
            ]
        );
    }

    #[test]
    fn read_without_edges() {
        let graph = read("3").unwrap();
        assert_eq!(graph.number_of_nodes(), 3);
        assert_eq!(graph.number_of_edges(), 0);

        let graph = read("0\n").unwrap();
        assert!(graph.is_empty());
    }

    #[test]
    fn read_keeps_or_drops_parallel_edges() {
        let input = "3\n0 1\n1 0\n1 1\n1 2\n";

        let graph = read(input).unwrap();
        assert_eq!(graph.number_of_edges(), 4);
        assert_eq!(graph.degree_of(1), 4);

        let graph: AdjArrayUndir = EdgeListReader::new()
            .simple(true)
            .try_read_graph(input.as_bytes())
            .unwrap();
        assert_eq!(graph.number_of_edges(), 2);
        assert_eq!(graph.degree_of(1), 2);
    }

    #[test]
    fn reject_malformed_input() {
        for input in ["", "# only a comment\n", "x", "-1", "3\n0 1\n2", "3\n0 a", "3\n0 3", "2 5 0"] {
            let err = read(input).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidData, "input {input:?}");
        }
    }

    #[test]
    fn custom_comment_identifier() {
        let graph: AdjArrayUndir = EdgeListReader::new()
            .comment_identifier("c")
            .try_read_graph("c comment\n2\n0 1\n".as_bytes())
            .unwrap();
        assert_eq!(graph.number_of_edges(), 1);
    }

    #[test]
    fn write_and_read_back() {
        let graph = AdjArrayUndir::from_edges(4, [(0, 1), (1, 0), (2, 2), (3, 1)]);

        let mut buffer = Vec::new();
        graph.try_write_edge_list(&mut buffer).unwrap();
        assert_eq!(
            String::from_utf8(buffer.clone()).unwrap(),
            "4\n0 1\n0 1\n1 3\n2 2\n"
        );

        let copy = AdjArrayUndir::try_read_edge_list(buffer.as_slice()).unwrap();
        assert_eq!(copy.number_of_edges(), graph.number_of_edges());
        assert_eq!(copy.edges(true).collect_vec(), graph.edges(true).collect_vec());

        let mut buffer = Vec::new();
        EdgeListWriter::new()
            .one_edge_per_line(false)
            .try_write_graph(&AdjArrayUndir::new(2), &mut buffer)
            .unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), "2\n");
    }
}
