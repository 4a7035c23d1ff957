//! Borrowed node handles and the typed accessors built on them.
//!
//! Reads take a path and fall back to a caller default when the path does not
//! resolve or resolves to a node of another kind. Writes take one parent and
//! one key and add exactly one child.

use data_io_path::{get, get_mut, validate_path, Path, ResolveOptions};
use serde_json::map::Entry;
use serde_json::Value;

use crate::kind::NodeKind;
use crate::number::number_value;
use crate::DataIoError;

/// Read-only handle to a node inside a [`Document`](crate::Document).
#[derive(Debug, Clone, Copy)]
pub struct DataRef<'a> {
    node: &'a Value,
    options: ResolveOptions,
}

impl<'a> DataRef<'a> {
    pub fn new(node: &'a Value, options: ResolveOptions) -> Self {
        Self { node, options }
    }

    pub fn value(&self) -> &'a Value {
        self.node
    }

    pub fn kind(&self) -> NodeKind {
        NodeKind::of(self.node)
    }

    pub fn options(&self) -> ResolveOptions {
        self.options
    }

    /// The node at `path`, whatever its kind.
    pub fn get_value(&self, path: impl Into<Path>) -> Option<&'a Value> {
        get(self.node, &path.into(), &self.options)
    }

    /// Handle to the subtree at `path`.
    ///
    /// Empty path text yields `None`. Text made only of separators, such as
    /// `"..."`, resolves to the node itself.
    pub fn get_sub_data(&self, path: impl Into<Path>) -> Option<DataRef<'a>> {
        let path = path.into();
        if path.is_blank() {
            return None;
        }
        get(self.node, &path, &self.options).map(|node| DataRef::new(node, self.options))
    }

    /// Like [`DataRef::get_sub_data`], but rejects over-long or over-deep
    /// path text instead of truncating it.
    pub fn lookup(&self, path: &str) -> Result<Option<DataRef<'a>>, DataIoError> {
        let path = Path::parse_strict(path)?;
        validate_path(&path)?;
        Ok(self.get_sub_data(path))
    }

    /// Stored text of the string at `path`, or `default`.
    pub fn get_string<'s>(&self, default: &'s str, path: impl Into<Path>) -> &'s str
    where
        'a: 's,
    {
        match self.get_value(path) {
            Some(Value::String(text)) => text.as_str(),
            _ => default,
        }
    }

    /// Value of the number at `path`, or `default`.
    pub fn get_number(&self, default: f64, path: impl Into<Path>) -> f64 {
        match self.get_value(path) {
            Some(Value::Number(number)) => number.as_f64().unwrap_or(default),
            _ => default,
        }
    }

    /// Value of the boolean at `path`, or `default`.
    pub fn get_bool(&self, default: bool, path: impl Into<Path>) -> bool {
        match self.get_value(path) {
            Some(Value::Bool(flag)) => *flag,
            _ => default,
        }
    }

    /// Number of elements of the array at `path`; 0 for anything else.
    pub fn get_list_size(&self, path: impl Into<Path>) -> usize {
        match self.get_value(path) {
            Some(Value::Array(items)) => items.len(),
            _ => 0,
        }
    }

    /// Whether `path` resolves to any node.
    pub fn has_key(&self, path: impl Into<Path>) -> bool {
        self.get_value(path).is_some()
    }
}

/// Mutable handle to a node inside a [`Document`](crate::Document).
#[derive(Debug)]
pub struct DataMut<'a> {
    node: &'a mut Value,
    options: ResolveOptions,
}

impl<'a> DataMut<'a> {
    pub fn new(node: &'a mut Value, options: ResolveOptions) -> Self {
        Self { node, options }
    }

    /// Read access to the same node.
    pub fn view(&self) -> DataRef<'_> {
        DataRef::new(&*self.node, self.options)
    }

    pub fn into_ref(self) -> DataRef<'a> {
        DataRef::new(self.node, self.options)
    }

    pub fn kind(&self) -> NodeKind {
        NodeKind::of(&*self.node)
    }

    /// Mutable handle to the existing subtree at `path`.
    pub fn get_sub_data_mut(&mut self, path: impl Into<Path>) -> Option<DataMut<'_>> {
        DataMut::new(&mut *self.node, self.options).into_sub_data(path)
    }

    /// Consuming form of [`DataMut::get_sub_data_mut`].
    pub fn into_sub_data(self, path: impl Into<Path>) -> Option<DataMut<'a>> {
        let path = path.into();
        if path.is_blank() {
            return None;
        }
        let options = self.options;
        get_mut(self.node, &path, &options).map(|node| DataMut::new(node, options))
    }

    pub fn set_string(&mut self, key: &str, value: &str) -> Result<(), DataIoError> {
        self.add_node(key, Value::String(value.to_string()))?;
        Ok(())
    }

    /// Stores `value` rounded to its `%g` text form.
    pub fn set_number(&mut self, key: &str, value: f64) -> Result<(), DataIoError> {
        let number = number_value(value)?;
        self.add_node(key, number)?;
        Ok(())
    }

    pub fn set_bool(&mut self, key: &str, value: bool) -> Result<(), DataIoError> {
        self.add_node(key, Value::Bool(value))?;
        Ok(())
    }

    /// Add an empty array and return a handle to it.
    pub fn add_list(&mut self, key: &str) -> Result<DataMut<'_>, DataIoError> {
        DataMut::new(&mut *self.node, self.options).into_list(key)
    }

    /// Add an empty object and return a handle to it.
    pub fn add_level(&mut self, key: &str) -> Result<DataMut<'_>, DataIoError> {
        DataMut::new(&mut *self.node, self.options).into_level(key)
    }

    /// Consuming form of [`DataMut::add_list`]; the new handle keeps the
    /// parent's borrow.
    pub fn into_list(self, key: &str) -> Result<DataMut<'a>, DataIoError> {
        let options = self.options;
        let node = add_child(self.node, key, Value::Array(Vec::new()))?;
        Ok(DataMut::new(node, options))
    }

    /// Consuming form of [`DataMut::add_level`].
    pub fn into_level(self, key: &str) -> Result<DataMut<'a>, DataIoError> {
        let options = self.options;
        let node = add_child(self.node, key, Value::Object(Default::default()))?;
        Ok(DataMut::new(node, options))
    }

    fn add_node(&mut self, key: &str, child: Value) -> Result<&mut Value, DataIoError> {
        add_child(&mut *self.node, key, child)
    }
}

/// Objects take the child under `key` (replacing a child already stored
/// there); arrays append it and ignore `key`.
fn add_child<'v>(
    parent: &'v mut Value,
    key: &str,
    child: Value,
) -> Result<&'v mut Value, DataIoError> {
    match parent {
        Value::Object(map) => Ok(match map.entry(key) {
            Entry::Occupied(mut slot) => {
                slot.insert(child);
                slot.into_mut()
            }
            Entry::Vacant(slot) => slot.insert(child),
        }),
        Value::Array(items) => {
            let idx = items.len();
            items.push(child);
            Ok(&mut items[idx])
        }
        other => {
            let kind = NodeKind::of(other);
            tracing::debug!(key, %kind, "write rejected: parent is not a container");
            Err(DataIoError::NotAContainer(kind))
        }
    }
}
