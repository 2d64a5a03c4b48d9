//! Viewer-side mirror of one rod.

use rv_core::Tq;
use rv_rod::{Displacement, Rod, RodState, displacement_to_tq};
use rv_viewer::{Color, SharedViewer, ViewerClient};
use tracing::{debug, trace, warn};

use crate::error::VisualResult;

/// Maps a node displacement to the pose sent to the viewer.
pub type Converter = fn(&Displacement) -> Tq;

/// Name of the capsule the viewer creates for node `index` of rod `name`.
pub fn cap_name(name: &str, index: usize) -> String {
    format!("{name}_cap{index}")
}

/// A rod registered with a viewer session.
///
/// Construction registers the rod (and optionally puts it in a group); each
/// `plot` sends the base pose, every node pose, then one refresh.
pub struct RodVisual<V: ViewerClient> {
    name: String,
    viewer: SharedViewer<V>,
    convert: Converter,
    node_names: Vec<String>,
}

impl<V: ViewerClient> RodVisual<V> {
    pub fn new<R: Rod + ?Sized>(
        viewer: SharedViewer<V>,
        rod: &R,
        name: &str,
        color: Color,
        group: Option<&str>,
    ) -> VisualResult<Self> {
        Self::with_converter(viewer, rod, name, color, group, displacement_to_tq)
    }

    pub fn with_converter<R: Rod + ?Sized>(
        viewer: SharedViewer<V>,
        rod: &R,
        name: &str,
        color: Color,
        group: Option<&str>,
        convert: Converter,
    ) -> VisualResult<Self> {
        let params = rod.parameters();
        {
            let mut client = viewer.borrow_mut();
            client.add_rod(
                name,
                color,
                params.radius_m(),
                params.integration_time,
                params.num_nodes,
            )?;
            if let Some(group) = group {
                client.add_to_group(name, group)?;
            }
        }
        debug!(
            rod = name,
            num_nodes = params.num_nodes,
            group = group.unwrap_or(""),
            "registered rod with viewer"
        );

        Ok(Self {
            name: name.to_string(),
            viewer,
            convert,
            node_names: (0..params.num_nodes).map(|i| cap_name(name, i)).collect(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Node count the rod was registered with.
    pub fn num_nodes(&self) -> usize {
        self.node_names.len()
    }

    pub fn node_names(&self) -> &[String] {
        &self.node_names
    }

    pub fn node_name(&self, index: usize) -> Option<&str> {
        self.node_names.get(index).map(String::as_str)
    }

    /// Push the current poses of `state` and refresh the viewer.
    ///
    /// Stops at the first error; nothing is retried.
    pub fn plot<S: RodState + ?Sized>(&self, state: &S) -> VisualResult<()> {
        let num_nodes = state.num_nodes();
        if num_nodes != self.node_names.len() {
            warn!(
                rod = %self.name,
                registered = self.node_names.len(),
                state = num_nodes,
                "rod state node count differs from registration"
            );
        }

        let mut client = self.viewer.borrow_mut();
        client.apply_configuration(&self.name, &(self.convert)(&state.base()))?;
        for i in 0..num_nodes {
            let node = state.node(i)?;
            let transform = (self.convert)(&node);
            match self.node_names.get(i) {
                Some(cap) => client.apply_configuration(cap, &transform)?,
                None => client.apply_configuration(&cap_name(&self.name, i), &transform)?,
            }
        }
        client.refresh()?;
        trace!(rod = %self.name, num_nodes, "plotted rod state");
        Ok(())
    }
}
