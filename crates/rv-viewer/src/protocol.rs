//! Wire messages of the newline-delimited JSON viewer protocol.
//!
//! Request:  `{"id":1,"method":"addRod","params":["rod1",[1,0,0,1],0.01,1.0,10]}`
//! Response: `{"id":1,"ok":true}` or `{"id":1,"ok":false,"error":"..."}`

use rv_core::Real;
use serde::{Deserialize, Serialize};

use crate::color::Color;

/// One call on the viewer surface, in wire form.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "method", content = "params", rename_all = "camelCase")]
pub enum ViewerCall {
    /// name, color, radius, integration time, node count
    AddRod(String, Color, Real, Real, usize),
    /// name, group
    AddToGroup(String, String),
    /// object name, `[x, y, z, qx, qy, qz, qw]`
    ApplyConfiguration(String, [Real; 7]),
    Refresh,
}

impl ViewerCall {
    pub fn method(&self) -> &'static str {
        match self {
            ViewerCall::AddRod(..) => "addRod",
            ViewerCall::AddToGroup(..) => "addToGroup",
            ViewerCall::ApplyConfiguration(..) => "applyConfiguration",
            ViewerCall::Refresh => "refresh",
        }
    }
}

#[derive(Debug, Serialize)]
pub struct Request<'a> {
    pub id: u64,
    #[serde(flatten)]
    pub call: &'a ViewerCall,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Response {
    pub id: u64,
    pub ok: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
