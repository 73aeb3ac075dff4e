//! Reading and writing graphs in a plain text edge list format.
//!
//! The input consists of whitespace-separated non-negative integers. The first
//! two are the vertex count `n` and the edge count `m`, followed by `m` pairs
//! `u v`, each denoting an edge from `u` to `v`. Conventionally, the counts are
//! on the first line and every edge on its own line:
//!
//! ```text
//! 4 3
//! 0 1
//! 1 2
//! 0 3
//! ```
//!
//! The edges are added in the given order, which determines the neighbor
//! order in the traversals. Anything after the `m`-th pair is ignored.

use std::{
    io::{self, BufRead, Write},
    str::FromStr,
};

use thiserror::Error;

use crate::{core::Error, graph::DirectedGraph};

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("reading input failed: {0}")]
    Io(#[from] io::Error),

    #[error("invalid {expected} {token:?} on line {line}")]
    Parse {
        token: String,
        line: usize,
        expected: &'static str,
    },

    #[error("unexpected end of input, expected {expected}")]
    UnexpectedEof { expected: &'static str },

    #[error("graph with {vertex_count} vertices is too large")]
    TooLarge { vertex_count: usize },

    #[error(transparent)]
    Graph(#[from] Error),
}

/// Reads a graph from given reader.
///
/// Construction is aborted on the first error, including an edge endpoint
/// which is not a vertex of the graph.
pub fn read_from<R: BufRead>(reader: R) -> Result<DirectedGraph, LoadError> {
    let mut tokens = Tokens::new(reader);

    let vertex_count = tokens.next_usize("vertex count")?;
    let edge_count = tokens.next_usize("edge count")?;

    tracing::debug!(vertex_count, edge_count, "loading graph");

    let mut graph = DirectedGraph::try_new(vertex_count).map_err(|error| {
        tracing::debug!(vertex_count, %error, "allocating vertices failed");
        LoadError::TooLarge { vertex_count }
    })?;

    for _ in 0..edge_count {
        let u = tokens.next_usize("edge source")?;
        let v = tokens.next_usize("edge destination")?;

        graph.add_edge(u, v).map_err(|error| {
            tracing::debug!(u, v, line = tokens.line, %error, "invalid edge");
            error
        })?;
    }

    Ok(graph)
}

/// Writes the graph in the format accepted by [`read_from`].
///
/// Reading the output back gives an equal graph.
pub fn write_to<W: Write>(graph: &DirectedGraph, mut out: W) -> io::Result<()> {
    writeln!(out, "{} {}", graph.vertex_count(), graph.edge_count())?;

    for (u, v) in graph.edges() {
        writeln!(out, "{u} {v}")?;
    }

    tracing::debug!(
        vertex_count = graph.vertex_count(),
        edge_count = graph.edge_count(),
        "graph written"
    );

    Ok(())
}

impl FromStr for DirectedGraph {
    type Err = LoadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        read_from(s.as_bytes())
    }
}

struct Tokens<R> {
    reader: R,
    buf: String,
    pos: usize,
    line: usize,
}

impl<R: BufRead> Tokens<R> {
    fn new(reader: R) -> Self {
        Self {
            reader,
            buf: String::new(),
            pos: 0,
            line: 0,
        }
    }

    // Returns the next token together with the (1-based) line it is on.
    fn next_token(&mut self) -> io::Result<Option<(usize, &str)>> {
        loop {
            let rest = &self.buf[self.pos..];
            let trimmed = rest.trim_start();

            if !trimmed.is_empty() {
                let start = self.pos + (rest.len() - trimmed.len());
                let len = trimmed
                    .find(char::is_whitespace)
                    .unwrap_or(trimmed.len());

                self.pos = start + len;
                return Ok(Some((self.line, &self.buf[start..start + len])));
            }

            self.buf.clear();
            self.pos = 0;

            if self.reader.read_line(&mut self.buf)? == 0 {
                return Ok(None);
            }

            self.line += 1;
        }
    }

    fn next_usize(&mut self, expected: &'static str) -> Result<usize, LoadError> {
        match self.next_token()? {
            Some((line, token)) => token.parse().map_err(|_| LoadError::Parse {
                token: token.to_string(),
                line,
                expected,
            }),
            None => Err(LoadError::UnexpectedEof { expected }),
        }
    }
}
