//! Path-addressed typed access to JSON documents.
//!
//! A [`Document`] is read through dotted paths such as `devices.0.name`.
//! Typed getters return the stored value, or the caller's default when the
//! path does not resolve or reaches a node of another kind. Documents are
//! built one level at a time: [`Document::add_level`] and
//! [`Document::add_list`] return handles that take further children.
//!
//! # Example
//!
//! ```
//! use data_io_json::Document;
//!
//! let doc = Document::load_str(r#"{"a": {"b": [1, 2, 3]}}"#).unwrap();
//! assert_eq!(doc.get_list_size("a.b"), 3);
//! assert_eq!(doc.get_number(-1.0, "a.b.1"), 2.0);
//! assert_eq!(doc.get_number(-1.0, "a.b.9"), -1.0);
//!
//! let mut doc = Document::create_empty();
//! let mut config = doc.add_level("config").unwrap();
//! config.set_string("name", "node1").unwrap();
//! let mut axes = config.add_list("axes").unwrap();
//! axes.set_number("", 0.5).unwrap();
//! assert_eq!(doc.get_string("?", "config.name"), "node1");
//! assert_eq!(doc.to_data_string(), r#"{"config":{"name":"node1","axes":[0.5]}}"#);
//! ```
//!
//! Stored documents are files under a base directory, see [`Storage`].

mod error;
pub use error::DataIoError;

mod kind;
pub use kind::NodeKind;

pub mod number;
pub use number::format_general;

mod node;
pub use node::{DataMut, DataRef};

mod document;
pub use document::{Document, EMPTY_DATA};

pub mod storage;
pub use storage::{Storage, StorageListing, StorageOptions, STORAGE_SUFFIX};

pub use data_io_path::{IndexPolicy, Path, PathSegment, ResolveOptions};
