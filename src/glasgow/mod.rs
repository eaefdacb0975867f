//! The Glasgow format.
//!
//! A graph is written as two files sharing one base name. `<base>.ginput`
//! holds the edges leaving pairs and `<base>.gndds` the edges leaving
//! altruists (non-directed donors):
//!
//! ```text
//! <num vertices>	<num edges>
//! <source>	<target>	<weight>
//! ...
//! -1	-1	-1
//! ```
//!
//! Sources are indexed in the space of their own category, targets are
//! always pairs.

pub use classify::Classification;
pub use writer::{GlasgowWriter, SENTINEL};

use crate::{
    error::{Err, Result},
    skg::EdgeList,
    types::{Category, Weight},
};
use log::{debug, info};
use std::{
    ffi::OsString,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};
use tempfile::NamedTempFile;

mod classify;
mod writer;

pub const PAIRS_EXTENSION: &str = "ginput";
pub const NDDS_EXTENSION: &str = "gndds";

/// Vertex and edge counts of a conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub num_pairs: usize,
    pub num_pair_edges: usize,
    pub num_altruists: usize,
    pub num_altruist_edges: usize,
}

impl std::fmt::Display for Summary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "|    category |    vertices |       edges |")?;
        writeln!(f, "+-------------+-------------+-------------+")?;
        writeln!(
            f,
            "|{:>12} |{:>12} |{:>12} |",
            Category::Pair.to_string(),
            self.num_pairs,
            self.num_pair_edges
        )?;
        writeln!(
            f,
            "|{:>12} |{:>12} |{:>12} |",
            Category::Altruist.to_string(),
            self.num_altruists,
            self.num_altruist_edges
        )?;
        write!(f, "+-------------+-------------+-------------+")
    }
}

/// Returns the paths of the pairs file and the altruists file for `base`.
pub fn output_paths<P: AsRef<Path>>(base: P) -> (PathBuf, PathBuf) {
    let with_extension = |extension: &str| {
        let mut path = OsString::from(base.as_ref().as_os_str());
        path.push(".");
        path.push(extension);
        PathBuf::from(path)
    };
    (
        with_extension(PAIRS_EXTENSION),
        with_extension(NDDS_EXTENSION),
    )
}

/// Writes the classified edges as a pairs stream and an altruists stream.
///
/// Fails with `Err::InvariantViolation` on the first edge whose target is not
/// a pair. Records already written to the streams are left as they are.
pub fn emit<P, N>(classification: &Classification, pairs: P, ndds: N) -> Result<Summary>
where
    P: Write,
    N: Write,
{
    let summary = Summary {
        num_pairs: classification.num_vertices(Category::Pair),
        num_pair_edges: classification.num_edges(Category::Pair),
        num_altruists: classification.num_vertices(Category::Altruist),
        num_altruist_edges: classification.num_edges(Category::Altruist),
    };
    let mut pairs = GlasgowWriter::new(pairs);
    let mut ndds = GlasgowWriter::new(ndds);
    pairs.write_header(summary.num_pairs, summary.num_pair_edges)?;
    ndds.write_header(summary.num_altruists, summary.num_altruist_edges)?;
    for &(source, target) in classification.edges() {
        let violation = || Err::InvariantViolation { source, target };
        let target_index = match classification.index(target) {
            Some((Category::Pair, index)) => index,
            _ => return Err(violation()),
        };
        match classification.index(source) {
            Some((Category::Altruist, index)) => {
                ndds.write_edge(index, target_index, Weight::UNIT)?
            }
            Some((Category::Pair, index)) => {
                pairs.write_edge(index, target_index, Weight::UNIT)?
            }
            None => return Err(violation()),
        }
    }
    pairs.write_sentinel()?;
    ndds.write_sentinel()?;
    pairs.flush()?;
    ndds.flush()?;
    debug!(
        "wrote {} pair edges and {} altruist edges",
        pairs.num_edges(),
        ndds.num_edges()
    );
    Ok(summary)
}

/// Converts `edges` into `<output_base>.ginput` and `<output_base>.gndds`.
///
/// Both files are first written to temporary files next to their targets and
/// only renamed into place once the whole conversion has succeeded.
pub fn convert_and_write<P: AsRef<Path>>(edges: &EdgeList, output_base: P) -> Result<Summary> {
    let (pairs_path, ndds_path) = output_paths(&output_base);
    info!(
        "converting {} edges into {} and {}",
        edges.len(),
        pairs_path.display(),
        ndds_path.display()
    );
    let classification = Classification::new(edges);
    info!(
        "found {} pairs and {} altruists",
        classification.num_vertices(Category::Pair),
        classification.num_vertices(Category::Altruist)
    );
    let mut pairs_file = temp_file_beside(&pairs_path)?;
    let mut ndds_file = temp_file_beside(&ndds_path)?;
    let summary = emit(
        &classification,
        BufWriter::new(&mut pairs_file),
        BufWriter::new(&mut ndds_file),
    )?;
    pairs_file.persist(&pairs_path).map_err(|e| e.error)?;
    ndds_file.persist(&ndds_path).map_err(|e| e.error)?;
    info!("done writing to two files");
    Ok(summary)
}

fn temp_file_beside(path: &Path) -> Result<NamedTempFile> {
    let dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    Ok(tempfile::Builder::new()
        .prefix(".skg2glasgow")
        .tempfile_in(dir)?)
}
