use std::path::Path;

use crate::errors::errors::{Error, ErrorImpl};

pub const CONTENT_TYPE: &str = "Make";

pub const FILE_EXTENSIONS: [&str; 2] = [".mke", ".mki"];

/// Resolves the content type for `path` from its extension. Matching ignores
/// ASCII case.
pub fn content_type_for(path: &Path) -> Result<&'static str, Error> {
    let Some(extension) = path.extension() else {
        return Err(Error::new(ErrorImpl::MissingExtension {
            path: path.to_string_lossy().into_owned(),
        }));
    };

    let extension = extension.to_string_lossy();
    let known = FILE_EXTENSIONS
        .iter()
        .any(|known| known[1..].eq_ignore_ascii_case(&extension));

    if known {
        Ok(CONTENT_TYPE)
    } else {
        Err(Error::new(ErrorImpl::UnsupportedExtension {
            extension: extension.into_owned(),
        }))
    }
}

pub fn is_bmake_file(path: &Path) -> bool {
    content_type_for(path).is_ok()
}
