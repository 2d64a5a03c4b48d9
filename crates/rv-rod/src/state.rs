//! Rod configurations produced by a solver step.

use crate::displacement::Displacement;
use crate::error::{RodError, RodResult};
use crate::parameters::RodParameters;

/// Read-only view of a solved rod configuration.
pub trait RodState {
    /// Displacement of the rod base.
    fn base(&self) -> Displacement;

    fn num_nodes(&self) -> usize;

    /// Displacement of node `i`, `0 <= i < num_nodes()`.
    fn node(&self, i: usize) -> RodResult<Displacement>;
}

/// Rod configuration expressed in the workspace frame.
#[derive(Clone, Debug, PartialEq)]
pub struct WorkspaceState {
    base: Displacement,
    nodes: Vec<Displacement>,
    parameters: RodParameters,
}

impl WorkspaceState {
    /// The node count must match `parameters.num_nodes`.
    pub fn new(
        base: Displacement,
        nodes: Vec<Displacement>,
        parameters: RodParameters,
    ) -> RodResult<Self> {
        parameters.validate()?;
        if nodes.len() != parameters.num_nodes {
            return Err(RodError::NodeCount {
                expected: parameters.num_nodes,
                found: nodes.len(),
            });
        }
        Ok(Self {
            base,
            nodes,
            parameters,
        })
    }

    pub fn nodes(&self) -> &[Displacement] {
        &self.nodes
    }

    pub fn parameters(&self) -> &RodParameters {
        &self.parameters
    }

    /// Last node of the rod.
    pub fn tip(&self) -> Displacement {
        // new() guarantees at least two nodes
        self.nodes[self.nodes.len() - 1]
    }
}

impl RodState for WorkspaceState {
    fn base(&self) -> Displacement {
        self.base
    }

    fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    fn node(&self, i: usize) -> RodResult<Displacement> {
        self.nodes
            .get(i)
            .copied()
            .ok_or(RodError::NodeOutOfRange {
                index: i,
                num_nodes: self.nodes.len(),
            })
    }
}
