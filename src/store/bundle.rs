//! File-backed bundle store.
//!
//! Reads a bundle's `Info.plist` (XML or binary) once and serves lookups from
//! the parsed dictionary.

use std::io::Cursor;
use std::path::{Path, PathBuf};

use super::MetadataStore;
use crate::error::{BundleError, Result};
use crate::types::InfoDictionary;

const INFO_PLIST: &str = "Info.plist";

/// An application bundle and its information dictionary.
#[derive(Debug, Clone, Default)]
pub struct Bundle {
    path: Option<PathBuf>,
    info_plist_path: Option<PathBuf>,
    info: InfoDictionary,
}

impl Bundle {
    /// The bundle containing the running executable.
    ///
    /// An executable at `X.app/Contents/MacOS/x` belongs to `X.app`; any other
    /// executable belongs to its parent directory (the flat iOS layout).
    pub fn main() -> Result<Self> {
        let exe = std::env::current_exe()
            .map_err(|e| BundleError::MainBundleUnavailable(e.to_string()))?;
        let root = bundle_root_for_executable(&exe).ok_or_else(|| {
            BundleError::MainBundleUnavailable(format!(
                "executable has no parent directory: {}",
                exe.display()
            ))
        })?;
        tracing::debug!(
            target: "bundle_manager::bundle",
            exe = %exe.display(),
            bundle = %root.display(),
            "resolved main bundle"
        );
        Self::at(root)
    }

    /// Open the bundle rooted at `path`.
    ///
    /// Looks for `Contents/Info.plist` (macOS layout) first, then `Info.plist`.
    pub fn at(path: impl AsRef<Path>) -> Result<Self> {
        let root = path.as_ref();
        let info_plist = [root.join("Contents").join(INFO_PLIST), root.join(INFO_PLIST)]
            .into_iter()
            .find(|candidate| candidate.is_file())
            .ok_or_else(|| BundleError::NotFound {
                path: root.to_path_buf(),
            })?;

        let mut bundle = Self::from_info_plist(&info_plist)?;
        bundle.path = Some(root.to_path_buf());
        Ok(bundle)
    }

    /// Load a property list file directly.
    pub fn from_info_plist(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|e| BundleError::io(path, e))?;
        let info = parse_info_dictionary(&bytes).map_err(|err| match err {
            BundleError::NotADictionary { .. } => BundleError::NotADictionary {
                path: path.to_path_buf(),
            },
            other => other,
        })?;

        tracing::debug!(
            target: "bundle_manager::bundle",
            path = %path.display(),
            keys = info.len(),
            "loaded Info.plist"
        );

        Ok(Self {
            path: None,
            info_plist_path: Some(path.to_path_buf()),
            info,
        })
    }

    /// Parse an in-memory property list.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        Ok(Self::from_dictionary(parse_info_dictionary(bytes)?))
    }

    /// Wrap an already decoded dictionary.
    pub fn from_dictionary(info: InfoDictionary) -> Self {
        Self {
            path: None,
            info_plist_path: None,
            info,
        }
    }

    /// Bundle root directory, when opened from disk with [`Bundle::at`] or
    /// [`Bundle::main`].
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Location of the property list this bundle was read from.
    pub fn info_plist_path(&self) -> Option<&Path> {
        self.info_plist_path.as_deref()
    }

    pub fn info_dictionary(&self) -> &InfoDictionary {
        &self.info
    }
}

impl MetadataStore for Bundle {
    fn value(&self, key: &str) -> Option<serde_json::Value> {
        self.info.get(key).cloned()
    }
}

fn bundle_root_for_executable(exe: &Path) -> Option<PathBuf> {
    let dir = exe.parent()?;
    if dir.file_name().is_some_and(|name| name == "MacOS")
        && let Some(contents) = dir.parent()
        && contents.file_name().is_some_and(|name| name == "Contents")
        && let Some(root) = contents.parent()
    {
        return Some(root.to_path_buf());
    }
    Some(dir.to_path_buf())
}

fn parse_info_dictionary(bytes: &[u8]) -> Result<InfoDictionary> {
    let root = plist::Value::from_reader(Cursor::new(bytes))?;
    let dict = root.into_dictionary().ok_or_else(|| BundleError::NotADictionary {
        path: PathBuf::new(),
    })?;
    Ok(dict
        .into_iter()
        .map(|(key, value)| (key, plist_to_json(value)))
        .collect())
}

/// Convert a property list value into the dynamic value type stores expose.
///
/// Dates become their XML (RFC 3339) text, data blobs become byte arrays and
/// UIDs (keyed-archive only) become null.
fn plist_to_json(value: plist::Value) -> serde_json::Value {
    use serde_json::Value as Json;

    match value {
        plist::Value::String(s) => Json::String(s),
        plist::Value::Boolean(b) => Json::Bool(b),
        plist::Value::Integer(i) => match (i.as_signed(), i.as_unsigned()) {
            (Some(n), _) => Json::from(n),
            (None, Some(n)) => Json::from(n),
            (None, None) => Json::Null,
        },
        plist::Value::Real(f) => serde_json::Number::from_f64(f)
            .map(Json::Number)
            .unwrap_or(Json::Null),
        plist::Value::Date(date) => Json::String(date.to_xml_format()),
        plist::Value::Data(bytes) => Json::Array(bytes.into_iter().map(Json::from).collect()),
        plist::Value::Array(items) => Json::Array(items.into_iter().map(plist_to_json).collect()),
        plist::Value::Dictionary(dict) => Json::Object(
            dict.into_iter()
                .map(|(key, value)| (key, plist_to_json(value)))
                .collect(),
        ),
        _ => Json::Null,
    }
}
