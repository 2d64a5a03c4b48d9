//! Static rod parameters.

use nalgebra::Vector6;
use rv_core::{Length, Real, ensure_positive, m, meters};
use serde::{Deserialize, Serialize};

use crate::error::{RodError, RodResult};

/// Constitutive model used by the solver.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RodModel {
    #[default]
    Inextensible,
    ExtensibleShearable,
}

/// Physical and discretization parameters of a rod.
#[derive(Clone, Debug, PartialEq)]
pub struct RodParameters {
    /// Section radius
    pub radius: Length,
    /// Integration interval of the rod equations (normalized length)
    pub integration_time: Real,
    /// Number of discretization nodes, base included
    pub num_nodes: usize,
    /// Inverse-compliance coefficients (torsion, two bendings, stretch, two shears)
    pub stiffness_coefficients: Vector6<Real>,
    pub rod_model: RodModel,
}

impl Default for RodParameters {
    fn default() -> Self {
        Self {
            radius: m(0.01),
            integration_time: 1.0,
            num_nodes: 100,
            stiffness_coefficients: Vector6::repeat(1.0),
            rod_model: RodModel::default(),
        }
    }
}

impl RodParameters {
    /// Validated parameters with default stiffness and model.
    pub fn new(radius: Length, integration_time: Real, num_nodes: usize) -> RodResult<Self> {
        let params = Self {
            radius,
            integration_time,
            num_nodes,
            ..Self::default()
        };
        params.validate()?;
        Ok(params)
    }

    pub fn with_stiffness(mut self, coefficients: Vector6<Real>) -> RodResult<Self> {
        self.stiffness_coefficients = coefficients;
        self.validate()?;
        Ok(self)
    }

    pub fn with_model(mut self, rod_model: RodModel) -> Self {
        self.rod_model = rod_model;
        self
    }

    pub fn validate(&self) -> RodResult<()> {
        ensure_positive(meters(self.radius), "radius")?;
        ensure_positive(self.integration_time, "integration_time")?;
        if self.num_nodes < 2 {
            return Err(RodError::InvalidParameter {
                what: "num_nodes must be at least 2",
            });
        }
        for c in self.stiffness_coefficients.iter() {
            ensure_positive(*c, "stiffness coefficient")?;
        }
        Ok(())
    }

    /// Radius in meters.
    pub fn radius_m(&self) -> Real {
        meters(self.radius)
    }

    /// Integration step between two consecutive nodes.
    pub fn delta_t(&self) -> Real {
        self.integration_time / (self.num_nodes - 1) as Real
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rv_core::{RvError, mm};

    #[test]
    fn new_validates() {
        let p = RodParameters::new(mm(10.0), 0.05, 3).unwrap();
        assert!((p.radius_m() - 0.01).abs() < 1e-15);
        assert_eq!(p.num_nodes, 3);
        assert_eq!(p.rod_model, RodModel::Inextensible);
    }

    #[test]
    fn rejects_bad_values() {
        assert!(matches!(
            RodParameters::new(m(0.0), 1.0, 10),
            Err(RodError::Core(RvError::InvalidArg { what: "radius" }))
        ));
        assert!(RodParameters::new(m(0.01), -1.0, 10).is_err());
        assert!(matches!(
            RodParameters::new(m(0.01), 1.0, 1),
            Err(RodError::InvalidParameter { .. })
        ));
        let p = RodParameters::default();
        assert!(p.with_stiffness(Vector6::new(1.0, 1.0, 0.0, 1.0, 1.0, 1.0)).is_err());
    }

    #[test]
    fn delta_t_splits_interval() {
        let p = RodParameters::new(m(0.01), 0.05, 3).unwrap();
        assert!((p.delta_t() - 0.025).abs() < 1e-15);
    }

    #[test]
    fn default_is_valid() {
        RodParameters::default().validate().unwrap();
    }
}
