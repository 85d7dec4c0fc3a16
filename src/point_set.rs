//! Point storage and the textual point-record reader.
//!
//! Each non-empty line that does not start with `#` is one point. Fields are separated by
//! commas and/or whitespace. Whether the first field is a label is decided once per file
//! (see [`LabelMode`]), never line by line, so numeric ids such as `17,1.5,2.0` are read as
//! labels when the file is labelled.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{Error, Result};

/// A single input point, referenced elsewhere only by its index.
#[derive(Debug, Clone, PartialEq)]
pub struct Point {
    pub label: Option<String>,
    pub coords: Vec<f64>,
}

/// How the first field of every record is interpreted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LabelMode {
    /// Decided by the first record: labelled iff its first field is not a number.
    #[default]
    Auto,
    /// The first field of every record is the label, numeric or not.
    Labelled,
    /// Every field is a coordinate.
    Unlabelled,
}

/// All points of one run, in input order.
#[derive(Debug, Clone, Default)]
pub struct PointSet {
    points: Vec<Point>,
    dim: usize,
}

impl PointSet {
    /// Build a set from unlabelled coordinate vectors.
    pub fn from_coords(coords: Vec<Vec<f64>>) -> Result<Self> {
        let mut set = PointSet::default();
        for (i, c) in coords.into_iter().enumerate() {
            set.push(i + 1, None, c)?;
        }
        Ok(set)
    }

    /// Read a point file. Fails with `Error::Io` naming the path when it cannot be opened.
    pub fn from_path(path: impl AsRef<Path>, mode: LabelMode) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| Error::io(path, e))?;
        Self::from_reader_with(BufReader::new(file), mode).map_err(|e| match e {
            Error::Io { source, .. } => Error::io(path, source),
            other => other,
        })
    }

    /// Parse point records from any buffered reader, detecting labels from the first record.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        Self::from_reader_with(reader, LabelMode::Auto)
    }

    pub fn from_reader_with<R: BufRead>(reader: R, mode: LabelMode) -> Result<Self> {
        let mut set = PointSet::default();
        let mut labelled = match mode {
            LabelMode::Auto => None,
            LabelMode::Labelled => Some(true),
            LabelMode::Unlabelled => Some(false),
        };

        for (line_idx, line) in reader.lines().enumerate() {
            let line = line.map_err(|e| Error::io("<input>", e))?;
            let line_no = line_idx + 1;
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }

            let mut fields = trimmed
                .split(|c: char| c == ',' || c.is_whitespace())
                .filter(|f| !f.is_empty())
                .peekable();

            let has_label = *labelled.get_or_insert_with(|| {
                fields
                    .peek()
                    .is_some_and(|first| first.parse::<f64>().is_err())
            });
            let label = if has_label {
                fields.next().map(str::to_string)
            } else {
                None
            };

            let coords = fields
                .map(|f| {
                    f.parse::<f64>().map_err(|_| Error::Parse {
                        line: line_no,
                        message: format!("invalid coordinate '{f}'"),
                    })
                })
                .collect::<Result<Vec<f64>>>()?;

            set.push(line_no, label, coords)?;
        }

        Ok(set)
    }

    fn push(&mut self, line: usize, label: Option<String>, coords: Vec<f64>) -> Result<()> {
        if coords.is_empty() {
            return Err(Error::Parse {
                line,
                message: "point has no coordinates".to_string(),
            });
        }
        if let Some(bad) = coords.iter().find(|c| !c.is_finite()) {
            return Err(Error::Parse {
                line,
                message: format!("coordinate {bad} is not finite"),
            });
        }
        if self.points.is_empty() {
            self.dim = coords.len();
        } else if coords.len() != self.dim {
            return Err(Error::DimensionMismatch {
                line,
                expected: self.dim,
                found: coords.len(),
            });
        }
        self.points.push(Point { label, coords });
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Number of coordinates per point (0 for an empty set).
    pub fn dim(&self) -> usize {
        self.dim
    }

    pub fn coords(&self, i: usize) -> &[f64] {
        &self.points[i].coords
    }

    pub fn label(&self, i: usize) -> Option<&str> {
        self.points[i].label.as_deref()
    }

    /// Output name of point `i`: its label, or its 0-based index when unlabelled.
    pub fn name(&self, i: usize) -> String {
        match self.label(i) {
            Some(label) => label.to_string(),
            None => i.to_string(),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Point> {
        self.points.iter()
    }
}
