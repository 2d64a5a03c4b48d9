//! In-memory viewer that records calls instead of sending them.

use rv_core::{Real, Tq};

use crate::client::ViewerClient;
use crate::color::Color;
use crate::error::{ViewerError, ViewerResult};
use crate::protocol::ViewerCall;

/// Records every call in order. Optionally fails one call by index to
/// exercise error paths.
#[derive(Debug, Default)]
pub struct RecordingViewer {
    calls: Vec<ViewerCall>,
    attempts: usize,
    fail_at: Option<usize>,
}

impl RecordingViewer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the call with 0-based index `index` fail with `ViewerError::Injected`.
    /// The failing call is not recorded.
    pub fn failing_at(index: usize) -> Self {
        Self {
            fail_at: Some(index),
            ..Self::default()
        }
    }

    pub fn calls(&self) -> &[ViewerCall] {
        &self.calls
    }

    pub fn take_calls(&mut self) -> Vec<ViewerCall> {
        std::mem::take(&mut self.calls)
    }

    /// Number of recorded calls with the given wire method name.
    pub fn count(&self, method: &str) -> usize {
        self.calls.iter().filter(|c| c.method() == method).count()
    }

    fn record(&mut self, call: ViewerCall) -> ViewerResult<()> {
        let index = self.attempts;
        self.attempts += 1;
        if self.fail_at == Some(index) {
            return Err(ViewerError::Injected {
                call_index: index,
                method: call.method(),
            });
        }
        self.calls.push(call);
        Ok(())
    }
}

impl ViewerClient for RecordingViewer {
    fn add_rod(
        &mut self,
        name: &str,
        color: Color,
        radius: Real,
        integration_time: Real,
        num_nodes: usize,
    ) -> ViewerResult<()> {
        self.record(ViewerCall::AddRod(
            name.to_string(),
            color,
            radius,
            integration_time,
            num_nodes,
        ))
    }

    fn add_to_group(&mut self, name: &str, group: &str) -> ViewerResult<()> {
        self.record(ViewerCall::AddToGroup(name.to_string(), group.to_string()))
    }

    fn apply_configuration(&mut self, object_name: &str, transform: &Tq) -> ViewerResult<()> {
        self.record(ViewerCall::ApplyConfiguration(
            object_name.to_string(),
            transform.to_array(),
        ))
    }

    fn refresh(&mut self) -> ViewerResult<()> {
        self.record(ViewerCall::Refresh)
    }
}
