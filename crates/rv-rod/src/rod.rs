//! Rod descriptors.

use crate::error::RodResult;
use crate::parameters::RodParameters;

/// Anything that can describe the rod it discretizes.
pub trait Rod {
    fn parameters(&self) -> &RodParameters;
}

/// Plain rod descriptor carrying validated parameters.
#[derive(Clone, Debug, PartialEq)]
pub struct RodSpec {
    parameters: RodParameters,
}

impl RodSpec {
    pub fn new(parameters: RodParameters) -> RodResult<Self> {
        parameters.validate()?;
        Ok(Self { parameters })
    }
}

impl Rod for RodSpec {
    fn parameters(&self) -> &RodParameters {
        &self.parameters
    }
}

impl<R: Rod + ?Sized> Rod for &R {
    fn parameters(&self) -> &RodParameters {
        (**self).parameters()
    }
}
