use crate::core::models::elements;
use crate::core::models::geometry::{Geometry, ValidationError};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use thiserror::Error;

/// Conversion factor from ångström (the XYZ convention) to bohr.
pub const ANGSTROM_TO_BOHR: f64 = 1.889_726_124_625_770_2;

#[derive(Debug, Error)]
pub enum XyzError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("line {line}: expected an atom count, found '{found}'")]
    InvalidAtomCount { line: usize, found: String },

    #[error("line {line}: expected 'symbol x y z', found '{found}'")]
    InvalidRecord { line: usize, found: String },

    #[error("line {line}: unknown element symbol '{symbol}'")]
    UnknownElement { line: usize, symbol: String },

    #[error("expected {expected} atom records, found {found}")]
    TruncatedFile { expected: usize, found: usize },

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Reads a molecular structure from an XYZ file.
///
/// The format is the plain two-header-line convention: an atom count, a
/// comment line, then one `symbol x y z` record per atom with coordinates
/// in ångström. Coordinates are converted to bohr on the way in, and the
/// assembled arrays pass through the full [`Geometry`] validation.
pub fn read_xyz(path: impl AsRef<Path>) -> Result<Geometry, XyzError> {
    let file = File::open(path.as_ref())?;
    read_xyz_from(BufReader::new(file))
}

/// Reads an XYZ document from any buffered reader; see [`read_xyz`].
pub fn read_xyz_from(reader: impl BufRead) -> Result<Geometry, XyzError> {
    let mut lines = reader.lines().enumerate();

    let (_, header) = lines.next().ok_or(XyzError::TruncatedFile {
        expected: 1,
        found: 0,
    })?;
    let header = header?;
    let expected: usize =
        header
            .trim()
            .parse()
            .map_err(|_| XyzError::InvalidAtomCount {
                line: 1,
                found: header.trim().to_string(),
            })?;

    // Comment line; content is ignored.
    if let Some((_, comment)) = lines.next() {
        comment?;
    }

    let mut numbers = Vec::with_capacity(expected);
    let mut coordinates = Vec::with_capacity(expected * 3);
    for (index, line) in lines {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        if numbers.len() == expected {
            break;
        }

        let mut fields = trimmed.split_whitespace();
        let symbol = fields.next().ok_or_else(|| XyzError::InvalidRecord {
            line: index + 1,
            found: trimmed.to_string(),
        })?;
        let number =
            elements::atomic_number(symbol).ok_or_else(|| XyzError::UnknownElement {
                line: index + 1,
                symbol: symbol.to_string(),
            })?;

        let mut xyz = [0.0f64; 3];
        for value in &mut xyz {
            let field = fields.next().ok_or_else(|| XyzError::InvalidRecord {
                line: index + 1,
                found: trimmed.to_string(),
            })?;
            *value = field.parse().map_err(|_| XyzError::InvalidRecord {
                line: index + 1,
                found: trimmed.to_string(),
            })?;
        }

        numbers.push(number);
        coordinates.extend(xyz.iter().map(|c| c * ANGSTROM_TO_BOHR));
    }

    if numbers.len() != expected {
        return Err(XyzError::TruncatedFile {
            expected,
            found: numbers.len(),
        });
    }

    Ok(Geometry::from_arrays(&numbers, &coordinates, None, None)?)
}
