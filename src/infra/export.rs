use std::{
    fmt::Display,
    io::{self, Cursor, Write},
};

use crate::graph::DirectedGraph;

pub trait Export<G> {
    fn export<W: Write>(&self, graph: &G, out: &mut W) -> io::Result<()>;
}

/// Export to the [DOT language](https://graphviz.org/doc/info/lang.html) of
/// Graphviz.
pub struct Dot {
    name: String,
    get_vertex_label: Box<dyn Fn(usize) -> String>,
}

impl Dot {
    pub fn new<F>(name: Option<String>, get_vertex_label: F) -> Self
    where
        F: Fn(usize) -> String + 'static,
    {
        Self {
            name: name.unwrap_or_else(|| String::from("G")),
            get_vertex_label: Box::new(get_vertex_label),
        }
    }

    /// Labels the vertices by the values in given vector, indexed by vertex,
    /// typically traversal records mapped to something readable. Vertices
    /// without a label are labeled by their index.
    pub fn with_labels<L: Display + 'static>(name: Option<String>, labels: Vec<L>) -> Self {
        Self::new(name, move |v| match labels.get(v) {
            Some(label) => format!("{label}"),
            None => v.to_string(),
        })
    }

    pub fn to_string(&self, graph: &DirectedGraph) -> String {
        let mut cursor = Cursor::new(Vec::new());
        self.export(graph, &mut cursor)
            .expect("writing to vec in cursor does not fail");

        String::from_utf8(cursor.into_inner()).expect("dot format is text format")
    }
}

impl Default for Dot {
    fn default() -> Self {
        Self::new(None, |v| v.to_string())
    }
}

impl Export<DirectedGraph> for Dot {
    fn export<W: Write>(&self, graph: &DirectedGraph, out: &mut W) -> io::Result<()> {
        out.write_all(b"digraph ")?;
        out.write_all(self.name.as_bytes())?;
        out.write_all(b" {\n")?;

        for v in 0..graph.vertex_count() {
            writeln!(out, "    v{} [label={:?}];", v, (self.get_vertex_label)(v))?;
        }

        for (u, v) in graph.edges() {
            writeln!(out, "    v{u} -> v{v};")?;
        }

        out.write_all(b"}\n")?;

        Ok(())
    }
}
