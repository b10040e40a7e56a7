//! Reads line-oriented edge-list files into an in-memory graph.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use serde::Serialize;

use crate::graph::AdjacencyList;
use crate::types::{GraphError, GraphResult, DEFAULT_WEIGHT};

/// Lines between progress log messages.
const PROGRESS_INTERVAL: usize = 1_000_000;

/// Text layout of an edge-list file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeListFormat {
    /// `<id> <neighbor>,<weight> <neighbor>,<weight> ...`, one source per line.
    Adjacency,
    /// `<from> <to> [weight]`; lines starting with `#` are comments.
    #[serde(rename = "edges")]
    EdgePairs,
}

impl EdgeListFormat {
    /// Return a human-readable name for this format.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Adjacency => "adjacency",
            Self::EdgePairs => "edges",
        }
    }

    /// Parse a format from a string name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "adjacency" | "adj" => Some(Self::Adjacency),
            "edges" | "edge_pairs" | "pairs" | "snap" => Some(Self::EdgePairs),
            _ => None,
        }
    }
}

impl std::fmt::Display for EdgeListFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Options controlling how a file is turned into a graph.
#[derive(Debug, Clone, Copy)]
pub struct LoadOptions {
    /// Line layout.
    pub format: EdgeListFormat,
    /// Add every edge in both directions.
    pub undirected: bool,
    /// Weight for `EdgePairs` lines without a third column.
    pub default_weight: f64,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            format: EdgeListFormat::Adjacency,
            undirected: false,
            default_weight: DEFAULT_WEIGHT,
        }
    }
}

/// Reader for edge-list text files.
pub struct EdgeListReader;

impl EdgeListReader {
    /// Read a file into a new graph.
    pub fn read_from_file(path: &Path, options: LoadOptions) -> GraphResult<AdjacencyList> {
        let file = File::open(path)?;
        log::info!("loading {} ({} format)", path.display(), options.format);
        Self::read_from(BufReader::new(file), options)
    }

    /// Read from any buffered reader into a new graph.
    pub fn read_from(reader: impl BufRead, options: LoadOptions) -> GraphResult<AdjacencyList> {
        let mut graph = AdjacencyList::new();
        Self::read_into(&mut graph, reader, options)?;
        Ok(graph)
    }

    /// Add the contents of `reader` to an existing graph.
    ///
    /// Returns the number of lines that contributed vertices or edges.
    pub fn read_into(
        graph: &mut AdjacencyList,
        reader: impl BufRead,
        options: LoadOptions,
    ) -> GraphResult<usize> {
        let mut applied = 0usize;
        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            let number = index + 1;
            if number % PROGRESS_INTERVAL == 0 {
                log::info!("progress: {} lines, {} vertices", number, graph.num_vertices());
            }

            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            if trimmed.starts_with('#') {
                if options.format == EdgeListFormat::EdgePairs {
                    continue;
                }
                log::warn!("line {}: skipping comment in adjacency file", number);
                continue;
            }

            match options.format {
                EdgeListFormat::Adjacency => parse_adjacency_line(graph, trimmed, number, &options)?,
                EdgeListFormat::EdgePairs => parse_pair_line(graph, trimmed, number, &options)?,
            }
            applied += 1;
        }

        log::info!(
            "loaded {} lines: {} vertices, {} edges",
            applied,
            graph.num_vertices(),
            graph.num_edges()
        );
        Ok(applied)
    }
}

fn parse_adjacency_line(
    graph: &mut AdjacencyList,
    line: &str,
    number: usize,
    options: &LoadOptions,
) -> GraphResult<()> {
    let mut fields = line.split_whitespace();
    let source = fields.next().ok_or_else(|| parse_error(number, "missing vertex id"))?;
    graph.add_vertex(source);

    for token in fields {
        let (target, weight) = token
            .split_once(',')
            .ok_or_else(|| parse_error(number, format!("expected <id>,<weight>, got {:?}", token)))?;
        if target.is_empty() {
            return Err(parse_error(number, format!("empty neighbor id in {:?}", token)));
        }
        let weight = parse_weight(weight, number)?;
        insert(graph, source, target, weight, options.undirected)?;
    }
    Ok(())
}

fn parse_pair_line(
    graph: &mut AdjacencyList,
    line: &str,
    number: usize,
    options: &LoadOptions,
) -> GraphResult<()> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    let (from, to, weight) = match fields.as_slice() {
        [from, to] => (*from, *to, options.default_weight),
        [from, to, weight] => (*from, *to, parse_weight(weight, number)?),
        _ => {
            return Err(parse_error(
                number,
                format!("expected 2 or 3 fields, got {}", fields.len()),
            ))
        }
    };
    graph.add_vertex(from);
    insert(graph, from, to, weight, options.undirected)
}

fn insert(
    graph: &mut AdjacencyList,
    from: &str,
    to: &str,
    weight: f64,
    undirected: bool,
) -> GraphResult<()> {
    if undirected {
        graph.add_undirected_edge(from, to, weight)
    } else {
        graph.add_directed_edge(from, to, weight)
    }
}

fn parse_weight(token: &str, number: usize) -> GraphResult<f64> {
    let weight: f64 = token
        .trim_end_matches(',')
        .parse()
        .map_err(|_| parse_error(number, format!("invalid weight {:?}", token)))?;
    if !weight.is_finite() {
        return Err(parse_error(number, format!("non-finite weight {:?}", token)));
    }
    Ok(weight)
}

fn parse_error(line: usize, message: impl Into<String>) -> GraphError {
    GraphError::Parse {
        line,
        message: message.into(),
    }
}
