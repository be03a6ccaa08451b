//! Delimited edge-list format.
//!
//! One edge per line: `source<delim>destination[<delim>ignored...]`.
//! Fields are trimmed. Blank lines and lines starting with `#` are skipped.

use crate::{Error, Graph, GraphKind, Result};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Field separator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Delimiter {
    #[default]
    Space,
    Comma,
    Tab,
}

impl Delimiter {
    fn byte(self) -> u8 {
        match self {
            Self::Space => b' ',
            Self::Comma => b',',
            Self::Tab => b'\t',
        }
    }
}

/// Edge-list reader options.
#[derive(Debug, Clone, Copy, Default)]
pub struct EdgeListConfig {
    pub delimiter: Delimiter,
    /// Skip the first record.
    pub has_header: bool,
}

/// Edge-list format handler.
pub struct EdgeList;

impl EdgeList {
    /// Read edges into a new graph of the given kind.
    ///
    /// ```
    /// use netrank_core::formats::{EdgeList, EdgeListConfig};
    /// use netrank_core::GraphKind;
    ///
    /// let input = "a b\nb c\n# comment\n\nc a\n";
    /// let g = EdgeList::read(input.as_bytes(), GraphKind::Directed, EdgeListConfig::default()).unwrap();
    /// assert_eq!(g.node_count(), 3);
    /// assert_eq!(g.edge_count(), 3);
    /// ```
    pub fn read<R: Read>(reader: R, kind: GraphKind, config: EdgeListConfig) -> Result<Graph> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(config.delimiter.byte())
            .has_headers(config.has_header)
            .flexible(true)
            .trim(csv::Trim::All)
            .comment(Some(b'#'))
            .from_reader(reader);

        let mut graph = Graph::new(kind);

        for result in reader.records() {
            let record = result?;
            let line = record.position().map_or(0, csv::Position::line);

            // csv yields a single empty field for whitespace-only lines.
            if record.iter().all(str::is_empty) {
                continue;
            }
            if record.len() < 2 {
                return Err(Error::Parse {
                    line,
                    message: format!("expected 2 fields, found {}", record.len()),
                });
            }

            graph
                .add_edge(&record[0], &record[1])
                .map_err(|e| Error::Parse {
                    line,
                    message: e.to_string(),
                })?;
        }

        Ok(graph)
    }

    /// Read an edge-list file.
    pub fn read_file(
        path: impl AsRef<Path>,
        kind: GraphKind,
        config: EdgeListConfig,
    ) -> Result<Graph> {
        let file = File::open(path)?;
        Self::read(BufReader::new(file), kind, config)
    }
}
