use std::path::{Path, PathBuf};

use crate::foundation::error::{BackdropError, BackdropResult};
use crate::media::library::MediaLibrary;
use crate::options::config::ImageMeta;

/// Media library backed by a directory of image files.
///
/// Attachment references are paths relative to `root`. Dimensions come from the image header; the
/// pixel data is never decoded.
#[derive(Clone, Debug)]
pub struct FsMediaLibrary {
    root: PathBuf,
    url_prefix: String,
}

impl FsMediaLibrary {
    pub fn new(root: impl Into<PathBuf>, url_prefix: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            url_prefix: url_prefix.into(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn url_prefix(&self) -> &str {
        &self.url_prefix
    }

    /// Like [`MediaLibrary::lookup`], but reports why an image is unavailable.
    pub fn probe(&self, attachment_ref: &str) -> BackdropResult<ImageMeta> {
        let norm_path = normalize_rel_path(attachment_ref.trim())?;
        let path = self.root.join(Path::new(&norm_path));
        let (width, height) = image::image_dimensions(&path).map_err(|e| {
            BackdropError::Other(anyhow::anyhow!(
                "read image header '{}': {e}",
                path.display()
            ))
        })?;

        Ok(ImageMeta {
            url: join_url(&self.url_prefix, &norm_path),
            attachment_ref: norm_path,
            width,
            height,
        })
    }
}

impl MediaLibrary for FsMediaLibrary {
    fn lookup(&self, attachment_ref: &str) -> Option<ImageMeta> {
        match self.probe(attachment_ref) {
            Ok(meta) => Some(meta),
            Err(err) => {
                tracing::warn!(attachment_ref, error = %err, "background image unavailable");
                None
            }
        }
    }
}

/// Normalize and validate a library-relative image path.
///
/// The result uses `/` separators and drops `.` segments. Absolute paths and parent traversals
/// (`..`) are rejected.
pub fn normalize_rel_path(source: &str) -> BackdropResult<String> {
    let s = source.replace('\\', "/");
    if s.is_empty() {
        return Err(BackdropError::validation("image path must be non-empty"));
    }
    if s.starts_with('/') || has_drive_prefix(&s) {
        return Err(BackdropError::validation("image paths must be relative"));
    }

    let mut out = Vec::<&str>::new();
    for part in s.split('/') {
        if part.is_empty() || part == "." {
            continue;
        }
        if part == ".." {
            return Err(BackdropError::validation("image paths must not contain '..'"));
        }
        out.push(part);
    }

    if out.is_empty() {
        return Err(BackdropError::validation("image path must contain a file name"));
    }
    Ok(out.join("/"))
}

fn has_drive_prefix(s: &str) -> bool {
    let b = s.as_bytes();
    b.len() >= 2 && b[0].is_ascii_alphabetic() && b[1] == b':'
}

fn join_url(prefix: &str, path: &str) -> String {
    if prefix.is_empty() || prefix.ends_with('/') {
        format!("{prefix}{path}")
    } else {
        format!("{prefix}/{path}")
    }
}

#[cfg(test)]
#[path = "../../tests/unit/media/fs.rs"]
mod tests;
