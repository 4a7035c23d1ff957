use serde_json::Value;

use crate::types::{Path, PathSegment, ResolveOptions};

/// Get a value from a JSON document by path.
///
/// Objects are entered by key, arrays by position; a scalar with segments
/// left ends the walk. Never creates nodes.
pub fn get<'a>(val: &'a Value, path: &Path, options: &ResolveOptions) -> Option<&'a Value> {
    let mut current = val;
    for segment in path.segments() {
        match step(current, segment, options) {
            Some(next) => current = next,
            None => {
                tracing::trace!(%path, %segment, "path did not resolve");
                return None;
            }
        }
    }
    Some(current)
}

/// Get a mutable reference to a value in a JSON document by path.
pub fn get_mut<'a>(
    val: &'a mut Value,
    path: &Path,
    options: &ResolveOptions,
) -> Option<&'a mut Value> {
    let mut current = val;
    for segment in path.segments() {
        match step_mut(current, segment, options) {
            Some(next) => current = next,
            None => {
                tracing::trace!(%path, %segment, "path did not resolve");
                return None;
            }
        }
    }
    Some(current)
}

fn step<'a>(
    current: &'a Value,
    segment: &PathSegment,
    options: &ResolveOptions,
) -> Option<&'a Value> {
    match current {
        Value::Object(map) => map.get(&*segment.as_key()),
        Value::Array(arr) => arr.get(segment.to_index(options.index_policy)?),
        _ => None,
    }
}

fn step_mut<'a>(
    current: &'a mut Value,
    segment: &PathSegment,
    options: &ResolveOptions,
) -> Option<&'a mut Value> {
    match current {
        Value::Object(map) => map.get_mut(&*segment.as_key()),
        Value::Array(arr) => arr.get_mut(segment.to_index(options.index_policy)?),
        _ => None,
    }
}
