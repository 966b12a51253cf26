//! Infrastructure-level errors

use std::io;

use thiserror::Error;

use crate::application::ApplicationError;

#[derive(Error, Debug)]
pub enum InfraError {
    #[error("{0}")]
    Application(#[from] ApplicationError),

    /// Writing rendered output outside the region service, e.g. `export -o -`
    #[error("cannot write region output to {target}")]
    Output {
        target: String,
        #[source]
        source: io::Error,
    },
}

impl InfraError {
    pub fn output(target: impl Into<String>, source: io::Error) -> Self {
        Self::Output {
            target: target.into(),
            source,
        }
    }
}
