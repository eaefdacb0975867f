use crate::types::{Index, Weight};
use itertools::Itertools;
use std::{
    fmt::Display,
    io::{self, Write},
};

/// The record terminating every Glasgow file.
pub const SENTINEL: [i32; 3] = [-1, -1, -1];

/// Writes the records of one Glasgow file, one tab separated record per line.
pub struct GlasgowWriter<W: Write> {
    inner: W,
    num_edges: usize,
}

impl<W: Write> GlasgowWriter<W> {
    pub fn new(inner: W) -> Self {
        Self {
            inner,
            num_edges: 0,
        }
    }

    pub fn write_header(&mut self, num_vertices: usize, num_edges: usize) -> io::Result<()> {
        self.write_record(&[&num_vertices, &num_edges])
    }

    pub fn write_edge(&mut self, source: Index, target: Index, weight: Weight) -> io::Result<()> {
        self.num_edges += 1;
        self.write_record(&[&source, &target, &weight])
    }

    pub fn write_sentinel(&mut self) -> io::Result<()> {
        let [a, b, c] = SENTINEL;
        self.write_record(&[&a, &b, &c])
    }

    /// The number of edge records written so far.
    pub fn num_edges(&self) -> usize {
        self.num_edges
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }

    pub fn into_inner(self) -> W {
        self.inner
    }

    fn write_record(&mut self, fields: &[&dyn Display]) -> io::Result<()> {
        writeln!(self.inner, "{}", fields.iter().format("\t"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glasgow_writer() {
        let mut writer = GlasgowWriter::new(Vec::new());
        writer.write_header(2, 1).unwrap();
        writer.write_edge(0, 1, Weight::UNIT).unwrap();
        writer.write_sentinel().unwrap();
        assert_eq!(writer.num_edges(), 1);
        assert_eq!(
            String::from_utf8(writer.into_inner()).unwrap(),
            "2\t1\n0\t1\t1.0\n-1\t-1\t-1\n"
        );
    }
}
