//! Validation functions for data paths.

use crate::types::Path;
use crate::PathError;

/// Size of the path text buffer, terminator included.
pub const MAX_PATH_LENGTH: usize = 256;

/// Maximum number of segments in a path accepted by [`validate_path`].
///
/// Unlike [`MAX_PATH_LENGTH`] this is not a buffer size. Parsing never
/// enforces it; only callers that validate explicitly, such as strict
/// lookups, reject deeper paths.
pub const MAX_PATH_DEPTH: usize = 128;

/// Validate path text against the path buffer.
///
/// # Errors
///
/// Returns [`PathError::PathTooLong`] if the text does not fit in
/// `MAX_PATH_LENGTH` bytes with its terminator.
///
/// # Example
///
/// ```
/// use data_io_path::validate_path_str;
///
/// validate_path_str("devices.0.name").unwrap();
/// validate_path_str(&"a".repeat(300)).unwrap_err();
/// ```
pub fn validate_path_str(text: &str) -> Result<(), PathError> {
    let max = MAX_PATH_LENGTH - 1;
    if text.len() > max {
        return Err(PathError::PathTooLong {
            len: text.len(),
            max,
        });
    }
    Ok(())
}

/// Validate a parsed or built path.
///
/// # Errors
///
/// Returns [`PathError::PathTooDeep`] if the path has more than
/// `MAX_PATH_DEPTH` segments.
pub fn validate_path(path: &Path) -> Result<(), PathError> {
    if path.len() > MAX_PATH_DEPTH {
        return Err(PathError::PathTooDeep {
            depth: path.len(),
            max: MAX_PATH_DEPTH,
        });
    }
    Ok(())
}
