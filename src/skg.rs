//! The SKG edge list format.
//!
//! Every line that does not start with the comment marker holds an edge as
//! two whitespace separated integers, `<from> <to>`. Any further tokens on
//! the line are ignored.

use crate::{
    error::{Err, Result},
    types::{Edge, VId},
};
use log::{debug, info};
use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

pub const DEFAULT_COMMENT: char = '#';

/// An edge list stored as two parallel sequences in input order.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct EdgeList {
    sources: Vec<VId>,
    targets: Vec<VId>,
}

impl EdgeList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, source: VId, target: VId) {
        self.sources.push(source);
        self.targets.push(target);
    }

    pub fn sources(&self) -> &[VId] {
        &self.sources
    }

    pub fn targets(&self) -> &[VId] {
        &self.targets
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = Edge> + '_ {
        self.sources
            .iter()
            .copied()
            .zip(self.targets.iter().copied())
    }
}

impl std::iter::FromIterator<Edge> for EdgeList {
    fn from_iter<I: IntoIterator<Item = Edge>>(iter: I) -> Self {
        let (sources, targets) = iter.into_iter().unzip();
        Self { sources, targets }
    }
}

/// Reads the edge list stored in the SKG file at `path`.
pub fn read_edge_list<P: AsRef<Path>>(path: P, comment: char) -> Result<EdgeList> {
    let path = path.as_ref();
    info!("reading SKG edge list from {}", path.display());
    let edges = parse_edge_list(BufReader::new(File::open(path)?), comment)?;
    info!("read {} edges", edges.len());
    Ok(edges)
}

pub fn parse_edge_list<R: BufRead>(reader: R, comment: char) -> Result<EdgeList> {
    let mut edges = EdgeList::new();
    let mut num_skipped = 0;
    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        if line.starts_with(comment) || line.trim().is_empty() {
            num_skipped += 1;
            continue;
        }
        let (source, target) = parse_edge(&line).ok_or_else(|| Err::ParseError {
            line: i + 1,
            content: line.clone(),
        })?;
        edges.push(source, target);
    }
    debug!("skipped {} comment or blank lines", num_skipped);
    Ok(edges)
}

fn parse_edge(line: &str) -> Option<Edge> {
    let mut tokens = line.split_ascii_whitespace();
    let source = tokens.next()?.parse().ok()?;
    let target = tokens.next()?.parse().ok()?;
    Some((source, target))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn parse(input: &str) -> Result<EdgeList> {
        parse_edge_list(input.as_bytes(), DEFAULT_COMMENT)
    }

    #[test]
    fn test_parse_edge_list() {
        let edges = parse("# SKG\n# nodes: 3\n0 1\n1\t2 0.5 extra\n\n2 1\n").unwrap();
        assert_eq!(edges.sources(), &[0, 1, 2]);
        assert_eq!(edges.targets(), &[1, 2, 1]);
        assert_eq!(edges.iter().collect::<Vec<_>>(), vec![(0, 1), (1, 2), (2, 1)]);
    }

    #[test]
    fn test_parse_crlf() {
        let edges = parse("#c\r\n5 6\r\n").unwrap();
        assert_eq!(edges.iter().collect::<Vec<_>>(), vec![(5, 6)]);
    }

    #[test]
    fn test_parse_error() {
        match parse("0 1\nfoo bar\n") {
            Err(Err::ParseError { line, content }) => {
                assert_eq!(line, 2);
                assert_eq!(content, "foo bar");
            }
            other => panic!("unexpected {:?}", other),
        }
        assert!(matches!(
            parse("7\n"),
            Err(Err::ParseError { line: 1, .. })
        ));
    }

    #[test]
    fn test_indented_comment_is_not_a_comment() {
        assert!(matches!(
            parse("  # not a comment\n"),
            Err(Err::ParseError { line: 1, .. })
        ));
    }

    #[test]
    fn test_custom_comment() {
        let edges = parse_edge_list("% header\n3 4\n".as_bytes(), '%').unwrap();
        assert_eq!(edges.iter().collect::<Vec<_>>(), vec![(3, 4)]);
        assert!(parse_edge_list("# header\n".as_bytes(), '%').is_err());
    }

    #[test]
    fn test_comment_only() {
        assert!(parse("# nothing\n").unwrap().is_empty());
        assert!(parse("").unwrap().is_empty());
    }

    #[test]
    fn test_read_edge_list() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "# generated\n10 20\n20 30\n").unwrap();
        let edges = read_edge_list(file.path(), DEFAULT_COMMENT).unwrap();
        assert_eq!(edges.len(), 2);
        assert_eq!(edges.sources(), &[10, 20]);
    }

    #[test]
    fn test_read_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            read_edge_list(dir.path().join("missing.txt"), DEFAULT_COMMENT),
            Err(Err::Io(_))
        ));
    }
}
