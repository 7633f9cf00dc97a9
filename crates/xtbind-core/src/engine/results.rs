use crate::core::diagnostics::Diagnostics;
use crate::engine::calculator::Calculator;
use crate::engine::compute::{Evaluation, RestartHint};
use crate::engine::error::EngineError;
use nalgebra::{DMatrix, Matrix3, Vector3};
use std::fmt;
use tracing::warn;

/// The properties a single-point evaluation can populate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Property {
    Energy,
    Gradient,
    Dipole,
    Charges,
    BondOrders,
    Virial,
}

impl Property {
    pub const ALL: [Property; 6] = [
        Property::Energy,
        Property::Gradient,
        Property::Dipole,
        Property::Charges,
        Property::BondOrders,
        Property::Virial,
    ];

    /// The not-available message for this property, with number agreement
    /// ("Virial is …", "Bond orders are …").
    pub(crate) fn unavailable(self) -> String {
        let verb = match self {
            Property::Charges | Property::BondOrders => "are",
            _ => "is",
        };
        format!("{self} {verb} not available")
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Property::Energy => "Energy",
            Property::Gradient => "Gradient",
            Property::Dipole => "Dipole",
            Property::Charges => "Partial charges",
            Property::BondOrders => "Bond orders",
            Property::Virial => "Virial",
        };
        f.write_str(name)
    }
}

/// Container for the outputs of a single-point calculation.
///
/// Every field is independently available or not: a field holds a value
/// only after a successful evaluation populated it. The `get_*` accessors
/// fail fast with [`EngineError::NotAvailable`] and otherwise return the
/// value by copy; the plain accessors return `Option`s for callers that
/// prefer to branch. A freshly created or cloned `Results` can seed a
/// restart: its populated fields are offered to the engine as an initial
/// guess by [`Calculator::singlepoint_restart`].
///
/// `Clone` deep-copies every populated field; the clone shares only the
/// diagnostic-log handle.
#[derive(Debug, Clone)]
pub struct Results {
    diagnostics: Diagnostics,
    energy: Option<f64>,
    gradient: Option<Vec<Vector3<f64>>>,
    dipole: Option<Vector3<f64>>,
    charges: Option<Vec<f64>>,
    bond_orders: Option<DMatrix<f64>>,
    virial: Option<Matrix3<f64>>,
}

impl Results {
    /// Creates an empty container bound to the calculator's diagnostic
    /// log. No field is available until a single-point call populates it.
    pub fn new(calculator: &Calculator) -> Self {
        Self::empty(calculator.diagnostics().clone())
    }

    pub(crate) fn empty(diagnostics: Diagnostics) -> Self {
        Self {
            diagnostics,
            energy: None,
            gradient: None,
            dipole: None,
            charges: None,
            bond_orders: None,
            virial: None,
        }
    }

    /// Total energy in hartree.
    pub fn get_energy(&self) -> Result<f64, EngineError> {
        self.energy.ok_or(EngineError::NotAvailable {
            property: Property::Energy,
        })
    }

    /// Energy gradient in hartree/bohr, one row per atom.
    pub fn get_gradient(&self) -> Result<Vec<Vector3<f64>>, EngineError> {
        self.gradient.clone().ok_or(EngineError::NotAvailable {
            property: Property::Gradient,
        })
    }

    /// Dipole moment in atomic units.
    pub fn get_dipole(&self) -> Result<Vector3<f64>, EngineError> {
        self.dipole.ok_or(EngineError::NotAvailable {
            property: Property::Dipole,
        })
    }

    /// Atomic partial charges in units of the elementary charge.
    pub fn get_charges(&self) -> Result<Vec<f64>, EngineError> {
        self.charges.clone().ok_or(EngineError::NotAvailable {
            property: Property::Charges,
        })
    }

    /// Wiberg/Mayer-style bond orders as an N x N matrix.
    pub fn get_bond_orders(&self) -> Result<DMatrix<f64>, EngineError> {
        self.bond_orders.clone().ok_or(EngineError::NotAvailable {
            property: Property::BondOrders,
        })
    }

    /// Virial tensor in hartree.
    pub fn get_virial(&self) -> Result<Matrix3<f64>, EngineError> {
        self.virial.ok_or(EngineError::NotAvailable {
            property: Property::Virial,
        })
    }

    pub fn energy(&self) -> Option<f64> {
        self.energy
    }

    pub fn gradient(&self) -> Option<&[Vector3<f64>]> {
        self.gradient.as_deref()
    }

    pub fn dipole(&self) -> Option<&Vector3<f64>> {
        self.dipole.as_ref()
    }

    pub fn charges(&self) -> Option<&[f64]> {
        self.charges.as_deref()
    }

    pub fn bond_orders(&self) -> Option<&DMatrix<f64>> {
        self.bond_orders.as_ref()
    }

    pub fn virial(&self) -> Option<&Matrix3<f64>> {
        self.virial.as_ref()
    }

    /// Whether `property` has been populated.
    pub fn is_available(&self, property: Property) -> bool {
        match property {
            Property::Energy => self.energy.is_some(),
            Property::Gradient => self.gradient.is_some(),
            Property::Dipole => self.dipole.is_some(),
            Property::Charges => self.charges.is_some(),
            Property::BondOrders => self.bond_orders.is_some(),
            Property::Virial => self.virial.is_some(),
        }
    }

    /// The populated properties, in [`Property::ALL`] order.
    pub fn available_properties(&self) -> Vec<Property> {
        Property::ALL
            .into_iter()
            .filter(|&p| self.is_available(p))
            .collect()
    }

    /// Flushes pending diagnostic text, prefixed by `message`; same
    /// contract as [`Structure::show`](crate::engine::structure::Structure::show).
    pub fn show(&self, message: &str) {
        if let Err(error) = self.diagnostics.flush(message) {
            warn!(%error, "failed to flush diagnostics");
        }
    }

    /// The initial-guess view of the currently populated fields.
    pub(crate) fn restart_hint(&self) -> RestartHint<'_> {
        RestartHint {
            energy: self.energy,
            charges: self.charges.as_deref(),
        }
    }

    /// Installs a successful evaluation; all fields change together.
    pub(crate) fn apply(&mut self, evaluation: Evaluation) {
        self.energy = Some(evaluation.energy);
        self.gradient = Some(evaluation.gradient);
        self.dipole = evaluation.dipole;
        self.charges = evaluation.charges;
        self.bond_orders = evaluation.bond_orders;
        self.virial = evaluation.virial;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_results() -> Results {
        Results::empty(Diagnostics::new())
    }

    fn populated_results() -> Results {
        let mut results = empty_results();
        results.apply(Evaluation {
            energy: -40.0,
            gradient: vec![Vector3::new(0.1, 0.0, 0.0); 2],
            dipole: Some(Vector3::new(-0.8, 1.6, 0.0)),
            charges: Some(vec![0.2, -0.2]),
            bond_orders: Some(DMatrix::from_element(2, 2, 0.9)),
            virial: None,
        });
        results
    }

    #[test]
    fn every_getter_fails_before_population() {
        let results = empty_results();

        assert!(matches!(
            results.get_energy(),
            Err(EngineError::NotAvailable {
                property: Property::Energy
            })
        ));
        assert!(results.get_gradient().is_err());
        assert!(results.get_dipole().is_err());
        assert!(results.get_charges().is_err());
        assert_eq!(
            results.get_bond_orders().unwrap_err().to_string(),
            "Bond orders are not available"
        );
        assert_eq!(
            results.get_virial().unwrap_err().to_string(),
            "Virial is not available"
        );
        assert!(results.available_properties().is_empty());
    }

    #[test]
    fn populated_fields_are_returned_and_reported() {
        let results = populated_results();

        assert_eq!(results.get_energy().unwrap(), -40.0);
        assert_eq!(results.get_gradient().unwrap().len(), 2);
        assert_eq!(results.get_charges().unwrap(), vec![0.2, -0.2]);
        assert_eq!(
            results.available_properties(),
            vec![
                Property::Energy,
                Property::Gradient,
                Property::Dipole,
                Property::Charges,
                Property::BondOrders
            ]
        );
        assert!(!results.is_available(Property::Virial));
    }

    #[test]
    fn getters_return_independent_copies() {
        let results = populated_results();

        let mut charges = results.get_charges().unwrap();
        charges[0] = 99.0;

        assert_eq!(results.get_charges().unwrap()[0], 0.2);
    }

    #[test]
    fn clone_is_a_deep_copy() {
        let original = populated_results();
        let mut copy = original.clone();

        copy.apply(Evaluation::new(-1.0, vec![Vector3::zeros(); 2]));

        assert_eq!(original.get_energy().unwrap(), -40.0);
        assert_eq!(copy.get_energy().unwrap(), -1.0);
        // Fields the new evaluation did not produce are gone in the copy
        // but untouched in the original.
        assert!(copy.get_dipole().is_err());
        assert!(original.get_dipole().is_ok());
    }

    #[test]
    fn restart_hint_exposes_only_populated_fields() {
        let empty = empty_results();
        assert!(empty.restart_hint().is_empty());

        let populated = populated_results();
        let hint = populated.restart_hint();
        assert_eq!(hint.energy, Some(-40.0));
        assert_eq!(hint.charges, Some(&[0.2, -0.2][..]));
    }
}
