//! Local media loading for the webview.
//!
//! The webview cannot reach arbitrary paths on disk, so library files are
//! inlined as base64 data URIs.

use std::path::Path;

use base64::Engine;

/// Read a library file into a data URI. Returns `None` (and logs) when the
/// file has gone missing since the scan.
pub fn data_uri(path: &Path) -> Option<String> {
    let bytes = match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::warn!(path = %path.display(), "failed to read media file: {e}");
            return None;
        }
    };
    let encoded = base64::engine::general_purpose::STANDARD.encode(&bytes);
    Some(format!("data:{};base64,{}", mime_for(path), encoded))
}

fn mime_for(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "mp3" => "audio/mpeg",
        "ogg" => "audio/ogg",
        "wav" => "audio/wav",
        "flac" => "audio/flac",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mime_covers_library_extensions() {
        assert_eq!(mime_for(Path::new("a.JPG")), "image/jpeg");
        assert_eq!(mime_for(Path::new("b.mp3")), "audio/mpeg");
        assert_eq!(mime_for(Path::new("c.unknown")), "application/octet-stream");
    }

    #[test]
    fn missing_file_is_none() {
        assert!(data_uri(Path::new("/definitely/not/here.png")).is_none());
    }
}
