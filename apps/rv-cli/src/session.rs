//! Drive a viewer from a sequence of rod states.

use std::io::Write;
use std::time::Duration;

use rv_core::Real;
use rv_rod::{Displacement, RodParameters, RodSpec, WorkspaceState, shapes};
use rv_viewer::{
    Color, RecordingViewer, SharedViewer, TcpViewerClient, ViewerClient, ViewerConfig, share,
};
use rv_visual::RodVisual;
use tracing::info;

use crate::error::{CliError, CliResult};

/// How the rod shows up in the viewer.
#[derive(Debug, Clone)]
pub struct RodDisplay {
    pub name: String,
    pub color: Color,
    pub group: Option<String>,
}

/// Where viewer calls go.
#[derive(Debug, Clone)]
pub enum Target {
    Viewer(ViewerConfig),
    /// Print calls as JSON lines instead of sending them
    DryRun,
}

/// Register the rod, then plot every state. Returns the number of frames sent.
pub fn play(
    target: &Target,
    rod: &RodSpec,
    display: &RodDisplay,
    states: &[WorkspaceState],
    period: Option<Duration>,
) -> CliResult<usize> {
    match target {
        Target::Viewer(config) => {
            let client = TcpViewerClient::connect(config)?;
            info!(address = %config.address, peer = %client.peer(), "connected to viewer");
            let viewer = share(client);
            run(viewer, rod, display, states, period, |_| Ok(()))
        }
        Target::DryRun => dry_run(&mut std::io::stdout().lock(), rod, display, states, period),
    }
}

/// Record every viewer call and write it to `out` as one JSON object per line.
pub fn dry_run<W: Write>(
    out: &mut W,
    rod: &RodSpec,
    display: &RodDisplay,
    states: &[WorkspaceState],
    period: Option<Duration>,
) -> CliResult<usize> {
    let viewer = share(RecordingViewer::new());
    run(viewer, rod, display, states, period, |v| {
        for call in v.borrow_mut().take_calls() {
            serde_json::to_writer(&mut *out, &call)?;
            writeln!(out)?;
        }
        Ok(())
    })
}

fn run<V, F>(
    viewer: SharedViewer<V>,
    rod: &RodSpec,
    display: &RodDisplay,
    states: &[WorkspaceState],
    period: Option<Duration>,
    mut flush: F,
) -> CliResult<usize>
where
    V: ViewerClient,
    F: FnMut(&SharedViewer<V>) -> CliResult<()>,
{
    let visual = RodVisual::new(
        viewer.clone(),
        rod,
        &display.name,
        display.color,
        display.group.as_deref(),
    )?;
    flush(&viewer)?;

    for (i, state) in states.iter().enumerate() {
        if i > 0 {
            if let Some(period) = period {
                std::thread::sleep(period);
            }
        }
        visual.plot(state)?;
        flush(&viewer)?;
    }
    Ok(states.len())
}

/// One bending cycle: curvature follows `max_curvature * sin` over `frames` steps.
pub fn demo_states(
    parameters: &RodParameters,
    frames: usize,
    max_curvature: Real,
) -> CliResult<Vec<WorkspaceState>> {
    if frames == 0 {
        return Err(CliError::InvalidInput("frames must be positive".to_string()));
    }
    (0..frames)
        .map(|k| -> CliResult<WorkspaceState> {
            let phase = std::f64::consts::TAU * k as Real / frames as Real;
            Ok(shapes::planar_arc(
                parameters,
                Displacement::identity(),
                max_curvature * phase.sin(),
            )?)
        })
        .collect()
}

/// `None` when `rate_hz` is not positive.
pub fn frame_period(rate_hz: Real) -> CliResult<Option<Duration>> {
    if !(rate_hz > 0.0 && rate_hz.is_finite()) {
        return Ok(None);
    }
    Duration::try_from_secs_f64(1.0 / rate_hz)
        .map(Some)
        .map_err(|e| CliError::InvalidInput(format!("rate {rate_hz} Hz: {e}")))
}
