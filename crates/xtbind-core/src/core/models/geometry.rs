use super::elements::MAX_ATOMIC_NUMBER;
use nalgebra::{Matrix3, Point3};
use thiserror::Error;

/// Errors detected by local input validation, before any engine is touched.
///
/// Every variant is recoverable by correcting the offending input; a failed
/// validation never leaves prior state mutated.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Structure must contain at least one atom")]
    EmptyStructure,

    #[error("Unknown element: atomic number {number} at position {index} is outside 1..={max}", max = MAX_ATOMIC_NUMBER)]
    UnknownElement { index: usize, number: u32 },

    #[error("Expected triples of Cartesian coordinates, got {components} components")]
    ExpectedTriples { components: usize },

    #[error("Dimension mismatch for positions: expected {expected} atoms, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("Invalid lattice provided: expected 9 components, got {components}")]
    InvalidLattice { components: usize },

    #[error("Invalid lattice provided: periodicity flags require lattice vectors")]
    PeriodicWithoutLattice,
}

/// Validated container for the atomistic input of a calculation: atomic
/// numbers, Cartesian positions, and an optional periodic lattice.
///
/// A `Geometry` can only be obtained through [`Geometry::from_arrays`], so
/// holding one guarantees the shape invariants: one position triple per
/// atomic number, a full 3x3 lattice whenever any direction is periodic.
/// All lengths are in bohr.
#[derive(Debug, Clone, PartialEq)]
pub struct Geometry {
    numbers: Vec<u32>,
    positions: Vec<Point3<f64>>,
    lattice: Option<Matrix3<f64>>,
    periodic: [bool; 3],
}

impl Geometry {
    /// Builds a geometry from the flat arrays a binding caller naturally
    /// holds: `coordinates` is the row-major flattening of an N x 3 array,
    /// `lattice` (if given) the row-major flattening of the 3 x 3 lattice
    /// vectors.
    ///
    /// When a lattice is given without explicit `periodic` flags, all three
    /// directions are treated as periodic.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] describing the first violated shape
    /// invariant; see the variant documentation for the exact conditions.
    pub fn from_arrays(
        numbers: &[u32],
        coordinates: &[f64],
        lattice: Option<&[f64]>,
        periodic: Option<[bool; 3]>,
    ) -> Result<Self, ValidationError> {
        if numbers.is_empty() {
            return Err(ValidationError::EmptyStructure);
        }
        for (index, &number) in numbers.iter().enumerate() {
            if number == 0 || number > MAX_ATOMIC_NUMBER {
                return Err(ValidationError::UnknownElement { index, number });
            }
        }
        if coordinates.len() % 3 != 0 {
            return Err(ValidationError::ExpectedTriples {
                components: coordinates.len(),
            });
        }
        if coordinates.len() / 3 != numbers.len() {
            return Err(ValidationError::DimensionMismatch {
                expected: numbers.len(),
                actual: coordinates.len() / 3,
            });
        }
        let lattice = parse_lattice(lattice)?;
        if periodic.is_some() && lattice.is_none() {
            return Err(ValidationError::PeriodicWithoutLattice);
        }
        let periodic = match (periodic, &lattice) {
            (Some(flags), Some(_)) => flags,
            (None, Some(_)) => [true; 3],
            _ => [false; 3],
        };

        Ok(Self {
            numbers: numbers.to_vec(),
            positions: collect_positions(coordinates),
            lattice,
            periodic,
        })
    }

    /// Returns a copy of this geometry with replaced coordinates (and,
    /// optionally, a replaced lattice), re-validated against the existing
    /// atom count.
    ///
    /// This is the building block for atomic updates: callers validate and
    /// screen the returned candidate before swapping it in, so a rejected
    /// replacement never disturbs the original. Periodicity flags are fixed
    /// at construction and never change on replacement; an omitted lattice
    /// keeps the current one.
    ///
    /// # Errors
    ///
    /// `DimensionMismatch` when the coordinate count is not exactly three
    /// per atom, `InvalidLattice` when a replacement lattice is not 3 x 3.
    pub fn with_coordinates(
        &self,
        coordinates: &[f64],
        lattice: Option<&[f64]>,
    ) -> Result<Self, ValidationError> {
        if coordinates.len() != self.numbers.len() * 3 {
            return Err(ValidationError::DimensionMismatch {
                expected: self.numbers.len(),
                actual: coordinates.len() / 3,
            });
        }
        let lattice = match lattice {
            Some(values) => parse_lattice(Some(values))?,
            None => self.lattice,
        };

        Ok(Self {
            numbers: self.numbers.clone(),
            positions: collect_positions(coordinates),
            lattice,
            periodic: self.periodic,
        })
    }

    /// Number of atoms.
    pub fn len(&self) -> usize {
        self.numbers.len()
    }

    /// Always false: construction rejects empty structures.
    pub fn is_empty(&self) -> bool {
        self.numbers.is_empty()
    }

    /// Atomic numbers, one per atom.
    pub fn numbers(&self) -> &[u32] {
        &self.numbers
    }

    /// Cartesian positions in bohr, one per atom.
    pub fn positions(&self) -> &[Point3<f64>] {
        &self.positions
    }

    /// Lattice vectors (rows) in bohr, when the structure is periodic.
    pub fn lattice(&self) -> Option<&Matrix3<f64>> {
        self.lattice.as_ref()
    }

    /// Per-direction periodicity flags.
    pub fn periodic(&self) -> [bool; 3] {
        self.periodic
    }

    /// Whether any direction is periodic.
    pub fn is_periodic(&self) -> bool {
        self.periodic.iter().any(|&p| p)
    }
}

fn parse_lattice(lattice: Option<&[f64]>) -> Result<Option<Matrix3<f64>>, ValidationError> {
    match lattice {
        None => Ok(None),
        Some(values) => {
            if values.len() != 9 {
                return Err(ValidationError::InvalidLattice {
                    components: values.len(),
                });
            }
            Ok(Some(Matrix3::from_row_slice(values)))
        }
    }
}

fn collect_positions(coordinates: &[f64]) -> Vec<Point3<f64>> {
    coordinates
        .chunks_exact(3)
        .map(|xyz| Point3::new(xyz[0], xyz[1], xyz[2]))
        .collect()
}
