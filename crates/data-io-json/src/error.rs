use std::io;
use std::path::PathBuf;

use data_io_path::PathError;
use thiserror::Error;

use crate::kind::NodeKind;

#[derive(Debug, Error)]
pub enum DataIoError {
    #[error("IO: could not open {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("PARSE: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("NOT_A_CONTAINER: cannot add a child to a {0} node")]
    NotAContainer(NodeKind),
    #[error("NON_FINITE_NUMBER: {0} has no JSON representation")]
    NonFiniteNumber(f64),
    #[error(transparent)]
    Path(#[from] PathError),
}
