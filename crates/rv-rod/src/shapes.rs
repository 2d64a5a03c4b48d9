//! Closed-form rod configurations, handy for demos and viewer checks.

use nalgebra::{UnitQuaternion, Vector3};
use rv_core::Real;

use crate::displacement::Displacement;
use crate::error::RodResult;
use crate::parameters::RodParameters;
use crate::state::WorkspaceState;

/// Below this curvature an arc is treated as a straight rod.
const MIN_CURVATURE: Real = 1e-9;

/// Straight rod along the local x-axis of `base`.
pub fn straight(parameters: &RodParameters, base: Displacement) -> RodResult<WorkspaceState> {
    planar_arc(parameters, base, 0.0)
}

/// Rod of constant curvature bent in the local x-y plane of `base`.
///
/// Node `i` sits at arc length `i * delta_t()`, its frame tangent to the arc.
pub fn planar_arc(
    parameters: &RodParameters,
    base: Displacement,
    curvature: Real,
) -> RodResult<WorkspaceState> {
    parameters.validate()?;
    let ds = parameters.delta_t();

    let nodes = (0..parameters.num_nodes)
        .map(|i| {
            let s = i as Real * ds;
            let local = if curvature.abs() < MIN_CURVATURE {
                Displacement::from_translation(Vector3::new(s, 0.0, 0.0))
            } else {
                let theta = curvature * s;
                Displacement::from_parts(
                    Vector3::new(theta.sin() / curvature, (1.0 - theta.cos()) / curvature, 0.0),
                    UnitQuaternion::from_axis_angle(&Vector3::z_axis(), theta),
                )
            };
            base * local
        })
        .collect();

    WorkspaceState::new(base, nodes, parameters.clone())
}
