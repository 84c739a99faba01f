//! Reading point datasets
//!
//! Two sources are supported:
//! - a text stream of datasets, each one a point count followed by that many
//!   `x y` pairs; a count of `0` (or the end of the stream) ends the input
//! - a CSV file with `x,y` columns holding a single dataset

use crate::closest::{Point, PointList};
use csv::ReaderBuilder;
use std::collections::VecDeque;
use std::io::BufRead;
use std::path::Path;

/// Upper bound for the up-front allocation of a dataset, whatever count it claims
const MAX_PREALLOC: usize = 1 << 16;

/// Errors produced while reading datasets
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("line {line}: invalid point count {token:?}")]
    InvalidCount { token: String, line: usize },

    #[error("line {line}: invalid coordinate {token:?}")]
    InvalidCoordinate { token: String, line: usize },

    #[error("unexpected end of input: expected {expected} points, found {found}")]
    UnexpectedEof { expected: usize, found: usize },

    #[error("line {line}: dataset needs at least 2 points, got {count}")]
    TooFewPoints { count: usize, line: usize },

    #[error("read error: {0}")]
    Io(#[from] std::io::Error),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
}

/// Iterator over the datasets of a text stream
///
/// Tokens are pulled lazily, one line at a time, so datasets are handed out
/// as soon as they are complete. Iteration stops after the first error.
pub struct DatasetReader<R> {
    reader: R,
    /// Pending tokens with the line they came from
    tokens: VecDeque<(usize, String)>,
    line: usize,
    done: bool,
}

impl<R: BufRead> DatasetReader<R> {
    pub fn new(reader: R) -> Self {
        DatasetReader {
            reader,
            tokens: VecDeque::new(),
            line: 0,
            done: false,
        }
    }

    fn next_token(&mut self) -> Result<Option<(usize, String)>, InputError> {
        loop {
            if let Some(token) = self.tokens.pop_front() {
                return Ok(Some(token));
            }

            let mut buf = String::new();
            if self.reader.read_line(&mut buf)? == 0 {
                return Ok(None);
            }
            self.line += 1;
            let line = self.line;
            self.tokens
                .extend(buf.split_whitespace().map(|t| (line, t.to_string())));
        }
    }

    /// Reads the next dataset, `None` once the input is over
    fn read_dataset(&mut self) -> Result<Option<PointList>, InputError> {
        let (line, token) = match self.next_token()? {
            Some(t) => t,
            None => return Ok(None),
        };

        let count = match token.parse::<usize>() {
            Ok(count) => count,
            Err(_) => return Err(InputError::InvalidCount { token, line }),
        };
        match count {
            0 => return Ok(None),
            1 => return Err(InputError::TooFewPoints { count, line }),
            _ => {}
        }

        let mut points = PointList::with_capacity(count.min(MAX_PREALLOC));
        for found in 0..count {
            let x = self.coordinate(count, found)?;
            let y = self.coordinate(count, found)?;
            points.push(Point([x, y]));
        }

        Ok(Some(points))
    }

    fn coordinate(&mut self, expected: usize, found: usize) -> Result<f64, InputError> {
        let (line, token) = self
            .next_token()?
            .ok_or(InputError::UnexpectedEof { expected, found })?;

        // NaN and infinities have no place in a coordinate ordering
        match token.parse::<f64>() {
            Ok(v) if v.is_finite() => Ok(v),
            _ => Err(InputError::InvalidCoordinate { token, line }),
        }
    }
}

impl<R: BufRead> Iterator for DatasetReader<R> {
    type Item = Result<PointList, InputError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        match self.read_dataset() {
            Ok(Some(points)) => Some(Ok(points)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}

/// Reads a single dataset from a CSV file
///
/// Expected format: `x,y` (header row is optional). Rows with fewer than two
/// columns or with unparsable coordinates are skipped.
pub fn read_points_csv(filename: &Path) -> Result<PointList, InputError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(filename)?;

    let mut points = PointList::new();
    let mut first = true;

    for result in reader.records() {
        let record = result?;
        let is_first = std::mem::replace(&mut first, false);

        if record.len() < 2 {
            continue;
        }

        let x = record[0].trim().parse::<f64>();
        let y = record[1].trim().parse::<f64>();
        match (x, y) {
            (Ok(x), Ok(y)) if x.is_finite() && y.is_finite() => points.push(Point([x, y])),
            // Non-numeric first row is the header
            _ if is_first => log::debug!("skipping header row {:?}", record),
            _ => log::warn!("skipping malformed row {:?}", record),
        }
    }

    if points.len() < 2 {
        return Err(InputError::TooFewPoints {
            count: points.len(),
            line: 0,
        });
    }

    Ok(points)
}
