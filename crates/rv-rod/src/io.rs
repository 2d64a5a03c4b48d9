//! Recorded rod trajectories on disk (YAML or JSON).

use std::path::Path;

use nalgebra::Vector6;
use rv_core::{Real, m};
use serde::{Deserialize, Serialize};

use crate::displacement::{Displacement, displacement_to_tq};
use crate::error::{RodError, RodResult};
use crate::parameters::{RodModel, RodParameters};
use crate::state::{RodState, WorkspaceState};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RodRecording {
    pub parameters: ParametersDef,
    #[serde(default)]
    pub frames: Vec<FrameDef>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ParametersDef {
    pub radius_m: Real,
    pub integration_time: Real,
    pub num_nodes: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stiffness_coefficients: Option<[Real; 6]>,
    #[serde(default)]
    pub rod_model: RodModel,
}

/// One solver step. Poses are `[x, y, z, qx, qy, qz, qw]`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FrameDef {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_s: Option<Real>,
    pub base: [Real; 7],
    pub nodes: Vec<[Real; 7]>,
}

impl ParametersDef {
    pub fn to_parameters(&self) -> RodResult<RodParameters> {
        let mut params = RodParameters::new(m(self.radius_m), self.integration_time, self.num_nodes)?
            .with_model(self.rod_model);
        if let Some(k) = self.stiffness_coefficients {
            params = params.with_stiffness(Vector6::from_row_slice(&k))?;
        }
        Ok(params)
    }
}

impl From<&RodParameters> for ParametersDef {
    fn from(p: &RodParameters) -> Self {
        let k = &p.stiffness_coefficients;
        Self {
            radius_m: p.radius_m(),
            integration_time: p.integration_time,
            num_nodes: p.num_nodes,
            stiffness_coefficients: Some([k[0], k[1], k[2], k[3], k[4], k[5]]),
            rod_model: p.rod_model,
        }
    }
}

impl FrameDef {
    pub fn from_state(state: &dyn RodState, time_s: Option<Real>) -> RodResult<Self> {
        let nodes = (0..state.num_nodes())
            .map(|i| -> RodResult<[Real; 7]> {
                Ok(displacement_to_tq(&state.node(i)?).to_array())
            })
            .collect::<RodResult<Vec<_>>>()?;
        Ok(Self {
            time_s,
            base: displacement_to_tq(&state.base()).to_array(),
            nodes,
        })
    }

    pub fn to_state(&self, parameters: &RodParameters) -> RodResult<WorkspaceState> {
        let base = Displacement::from_tq_array(self.base)?;
        let nodes = self
            .nodes
            .iter()
            .map(|a| Displacement::from_tq_array(*a))
            .collect::<RodResult<Vec<_>>>()?;
        WorkspaceState::new(base, nodes, parameters.clone())
    }
}

impl RodRecording {
    pub fn new(parameters: &RodParameters) -> Self {
        Self {
            parameters: parameters.into(),
            frames: Vec::new(),
        }
    }

    pub fn push_state(&mut self, state: &dyn RodState, time_s: Option<Real>) -> RodResult<()> {
        self.frames.push(FrameDef::from_state(state, time_s)?);
        Ok(())
    }

    /// Check parameters and that every frame is well formed and sized to `num_nodes`.
    pub fn validate(&self) -> RodResult<()> {
        let params = self.parameters.to_parameters()?;
        for (i, frame) in self.frames.iter().enumerate() {
            if frame.nodes.len() != params.num_nodes {
                return Err(RodError::Frame {
                    frame: i,
                    what: format!(
                        "has {} nodes, expected {}",
                        frame.nodes.len(),
                        params.num_nodes
                    ),
                });
            }
            frame.to_state(&params).map_err(|e| RodError::Frame {
                frame: i,
                what: e.to_string(),
            })?;
        }
        Ok(())
    }

    pub fn states(&self) -> RodResult<Vec<WorkspaceState>> {
        let params = self.parameters.to_parameters()?;
        self.frames.iter().map(|f| f.to_state(&params)).collect()
    }
}

pub fn load_yaml(path: &Path) -> RodResult<RodRecording> {
    let content = std::fs::read_to_string(path)?;
    let recording: RodRecording = serde_yaml::from_str(&content)?;
    recording.validate()?;
    Ok(recording)
}

pub fn save_yaml(path: &Path, recording: &RodRecording) -> RodResult<()> {
    recording.validate()?;
    let content = serde_yaml::to_string(recording)?;
    std::fs::write(path, content)?;
    Ok(())
}

pub fn load_json(path: &Path) -> RodResult<RodRecording> {
    let content = std::fs::read_to_string(path)?;
    let recording: RodRecording = serde_json::from_str(&content)?;
    recording.validate()?;
    Ok(recording)
}

pub fn save_json(path: &Path, recording: &RodRecording) -> RodResult<()> {
    recording.validate()?;
    let content = serde_json::to_string_pretty(recording)?;
    std::fs::write(path, content)?;
    Ok(())
}

/// Pick the format from the file extension (`.json`, anything else is YAML).
pub fn load(path: &Path) -> RodResult<RodRecording> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("json") => load_json(path),
        _ => load_yaml(path),
    }
}
