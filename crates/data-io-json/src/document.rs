use std::fmt;
use std::str::FromStr;

use data_io_path::{Path, ResolveOptions};
use serde_json::{Map, Value};

use crate::kind::NodeKind;
use crate::node::{DataMut, DataRef};
use crate::DataIoError;

/// Text a document is created from when none is given.
pub const EMPTY_DATA: &str = "{}";

/// An owned JSON document addressed by dotted paths.
///
/// Handles returned by the accessors borrow from the document, so they cannot
/// outlive it.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    root: Value,
    options: ResolveOptions,
}

impl Document {
    /// A document holding an empty object.
    pub fn create_empty() -> Self {
        Self::from_value(Value::Object(Map::new()))
    }

    /// Parse document text.
    ///
    /// # Errors
    ///
    /// [`DataIoError::Parse`] if the text is not valid JSON.
    pub fn load_str(text: &str) -> Result<Self, DataIoError> {
        let root: Value = serde_json::from_str(text)
            .inspect_err(|e| tracing::debug!(error = %e, "document text did not parse"))?;
        Ok(Self::from_value(root))
    }

    /// Parse document text, treating `None` as [`EMPTY_DATA`].
    pub fn load_opt(text: Option<&str>) -> Result<Self, DataIoError> {
        Self::load_str(text.unwrap_or(EMPTY_DATA))
    }

    pub fn from_value(root: Value) -> Self {
        Self {
            root,
            options: ResolveOptions::default(),
        }
    }

    pub fn with_options(mut self, options: ResolveOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> ResolveOptions {
        self.options
    }

    pub fn root(&self) -> DataRef<'_> {
        DataRef::new(&self.root, self.options)
    }

    pub fn root_mut(&mut self) -> DataMut<'_> {
        DataMut::new(&mut self.root, self.options)
    }

    pub fn value(&self) -> &Value {
        &self.root
    }

    pub fn into_value(self) -> Value {
        self.root
    }

    pub fn kind(&self) -> NodeKind {
        NodeKind::of(&self.root)
    }

    /// Compact text form.
    pub fn to_data_string(&self) -> String {
        self.root.to_string()
    }

    /// Indented text form.
    pub fn to_pretty_string(&self) -> String {
        format!("{:#}", self.root)
    }

    /// Destroy the document and everything it owns.
    pub fn unload(self) {
        drop(self);
    }

    // Accessors on the root node.

    pub fn get_sub_data(&self, path: impl Into<Path>) -> Option<DataRef<'_>> {
        self.root().get_sub_data(path)
    }

    pub fn get_sub_data_mut(&mut self, path: impl Into<Path>) -> Option<DataMut<'_>> {
        self.root_mut().into_sub_data(path)
    }

    pub fn get_string<'s>(&'s self, default: &'s str, path: impl Into<Path>) -> &'s str {
        self.root().get_string(default, path)
    }

    pub fn get_number(&self, default: f64, path: impl Into<Path>) -> f64 {
        self.root().get_number(default, path)
    }

    pub fn get_bool(&self, default: bool, path: impl Into<Path>) -> bool {
        self.root().get_bool(default, path)
    }

    pub fn get_list_size(&self, path: impl Into<Path>) -> usize {
        self.root().get_list_size(path)
    }

    pub fn has_key(&self, path: impl Into<Path>) -> bool {
        self.root().has_key(path)
    }

    pub fn set_string(&mut self, key: &str, value: &str) -> Result<(), DataIoError> {
        self.root_mut().set_string(key, value)
    }

    pub fn set_number(&mut self, key: &str, value: f64) -> Result<(), DataIoError> {
        self.root_mut().set_number(key, value)
    }

    pub fn set_bool(&mut self, key: &str, value: bool) -> Result<(), DataIoError> {
        self.root_mut().set_bool(key, value)
    }

    pub fn add_list(&mut self, key: &str) -> Result<DataMut<'_>, DataIoError> {
        self.root_mut().into_list(key)
    }

    pub fn add_level(&mut self, key: &str) -> Result<DataMut<'_>, DataIoError> {
        self.root_mut().into_level(key)
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::create_empty()
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.root, f)
    }
}

impl FromStr for Document {
    type Err = DataIoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Document::load_str(s)
    }
}

impl From<Value> for Document {
    fn from(root: Value) -> Self {
        Document::from_value(root)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_create_empty() {
        let doc = Document::create_empty();
        assert_eq!(doc.to_data_string(), EMPTY_DATA);
        assert_eq!(doc.kind(), NodeKind::Object);
        assert_eq!(Document::default(), doc);
    }

    #[test]
    fn test_load_opt_none_is_empty() {
        assert_eq!(Document::load_opt(None).unwrap(), Document::create_empty());
        assert_eq!(
            Document::load_opt(Some("[1]")).unwrap().value(),
            &json!([1])
        );
    }

    #[test]
    fn test_load_str_parse_failure() {
        assert!(matches!(
            Document::load_str("{\"a\": "),
            Err(DataIoError::Parse(_))
        ));
        assert!("not json".parse::<Document>().is_err());
    }

    #[test]
    fn test_pretty_string() {
        let doc = Document::load_str(r#"{"a":[1]}"#).unwrap();
        assert_eq!(doc.to_pretty_string(), "{\n  \"a\": [\n    1\n  ]\n}");
        assert_eq!(doc.to_string(), r#"{"a":[1]}"#);
    }

    #[test]
    fn test_add_level_then_set() {
        let mut doc = Document::create_empty();
        doc.add_level("config")
            .unwrap()
            .set_string("name", "node1")
            .unwrap();
        assert_eq!(doc.get_string("?", "config.name"), "node1");
    }

    #[test]
    fn test_sub_data_mut_writes_into_existing_structure() {
        let mut doc = Document::load_str(r#"{"devices":[{"name":"a"}]}"#).unwrap();
        let mut device = doc.get_sub_data_mut("devices.0").unwrap();
        device.set_number("gain", 2.5).unwrap();
        assert_eq!(doc.get_number(0.0, "devices.0.gain"), 2.5);
        assert!(doc.get_sub_data_mut("").is_none());
        doc.get_sub_data_mut("..")
            .unwrap()
            .set_bool("ready", true)
            .unwrap();
        assert!(doc.get_bool(false, "ready"));
        assert!(doc.get_sub_data_mut("devices.4").is_none());
    }
}
