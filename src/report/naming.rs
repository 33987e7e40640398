use crate::domain::ports::PathKind;
use std::path::{Path, PathBuf, MAIN_SEPARATOR};

pub const FILENAME_TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";
pub const CONTENT_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Builds the report path for `base_path` with `_<timestamp>` appended to the file name.
///
/// `kind` is what `base_path` currently is in storage. The base is treated as a directory
/// when it ends with a separator, is an existing directory, or has no `.` and is not an
/// existing file; the file is then named `<default_prefix>_<timestamp>.<extension>` inside
/// it. Otherwise the last component is a file name: a matching extension
/// (case-insensitive) is replaced after the stem, anything else keeps the full name and
/// gains `.<extension>`.
pub fn timestamped_path(
    base_path: &str,
    kind: PathKind,
    timestamp: &str,
    extension: &str,
    default_prefix: &str,
) -> PathBuf {
    let base = if base_path.trim().is_empty() {
        "."
    } else {
        base_path
    };
    let path = Path::new(base);

    let is_directory = base.ends_with('/')
        || base.ends_with(MAIN_SEPARATOR)
        || kind == PathKind::Directory
        || (!base.contains('.') && kind != PathKind::File);

    if is_directory {
        return path.join(format!("{}_{}.{}", default_prefix, timestamp, extension));
    }

    let parent = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(default_prefix);

    let new_name = match file_name.rfind('.') {
        Some(dot) if dot > 0 && dot < file_name.len() - 1 => {
            let (stem, ext) = (&file_name[..dot], &file_name[dot + 1..]);
            if ext.eq_ignore_ascii_case(extension) {
                format!("{}_{}.{}", stem, timestamp, extension)
            } else {
                format!("{}_{}.{}", file_name, timestamp, extension)
            }
        }
        _ => format!("{}_{}.{}", file_name, timestamp, extension),
    };

    parent.join(new_name)
}
