//! The remote call surface of a 3D viewer.

use std::cell::RefCell;
use std::rc::Rc;

use rv_core::{Real, Tq};

use crate::color::Color;
use crate::error::ViewerResult;

/// Calls a viewer session accepts.
///
/// Implementations are blocking; each call returns once the viewer has
/// acknowledged it.
pub trait ViewerClient {
    /// Register a rod made of `num_nodes` capsules named `<name>_cap<i>`.
    fn add_rod(
        &mut self,
        name: &str,
        color: Color,
        radius: Real,
        integration_time: Real,
        num_nodes: usize,
    ) -> ViewerResult<()>;

    fn add_to_group(&mut self, name: &str, group: &str) -> ViewerResult<()>;

    /// Set the pose of a registered object.
    fn apply_configuration(&mut self, object_name: &str, transform: &Tq) -> ViewerResult<()>;

    /// Redraw the scene with all pending configurations.
    fn refresh(&mut self) -> ViewerResult<()>;
}

/// Viewer connection shared by every object of one session.
///
/// Single-threaded: callers serialize access, there is no locking.
pub type SharedViewer<V> = Rc<RefCell<V>>;

pub fn share<V: ViewerClient>(viewer: V) -> SharedViewer<V> {
    Rc::new(RefCell::new(viewer))
}
