//! Dotted data paths over JSON values.
//!
//! A data path is a `.`-separated list of segments such as `devices.0.name`.
//! Each segment selects an object member or an array element depending on the
//! kind of node it meets, so the same text works across mixed object/array
//! structure.
//!
//! # Example
//!
//! ```
//! use data_io_path::{get, Path, ResolveOptions};
//!
//! let doc = serde_json::json!({"a": {"b": [1, 2, 3]}});
//! let opts = ResolveOptions::default();
//!
//! assert_eq!(get(&doc, &Path::parse("a.b.1"), &opts), Some(&serde_json::json!(2)));
//! assert_eq!(get(&doc, &Path::parse("a.b.9"), &opts), None);
//!
//! // Built paths resolve the same way as parsed ones.
//! let built = Path::new().key("a").key("b").index(2);
//! assert_eq!(get(&doc, &built, &opts), Some(&serde_json::json!(3)));
//! ```

use thiserror::Error;

pub mod types;
pub use types::{IndexPolicy, Path, PathSegment, ResolveOptions};

pub mod validate;
pub use validate::{validate_path, validate_path_str, MAX_PATH_DEPTH, MAX_PATH_LENGTH};

mod util;
pub use util::{is_integer, parse_index, parse_index_permissive, split_path, SEPARATOR};

mod get;
pub use get::{get, get_mut};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PathError {
    #[error("PATH_TOO_LONG: {len} bytes, at most {max} allowed")]
    PathTooLong { len: usize, max: usize },
    #[error("PATH_TOO_DEEP: {depth} segments, at most {max} allowed")]
    PathTooDeep { depth: usize, max: usize },
}
