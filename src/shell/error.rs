use std::io;
use thiserror::Error;

/// Failure to start or talk to an external pipeline stage.
#[derive(Debug, Error)]
pub enum LaunchError {
    #[error("Command not found: {0}")]
    NotFound(String),

    #[error("Error running command {program}: {source}")]
    Failed {
        program: String,
        #[source]
        source: io::Error,
    },
}

impl LaunchError {
    pub fn failed(program: &str, source: io::Error) -> Self {
        if source.kind() == io::ErrorKind::NotFound {
            return Self::NotFound(program.to_string());
        }
        Self::Failed {
            program: program.to_string(),
            source,
        }
    }
}
