//! Media library scanning for the music player and photo views.
//!
//! The galleries and the player render whatever files sit under the data
//! directory; a missing folder is an empty library with an on-screen hint,
//! not an error.

use std::path::{Path, PathBuf};

use rand::Rng;

/// Audio formats the player will list.
pub const AUDIO_EXTENSIONS: &[&str] = &["mp3", "ogg", "wav", "flac"];

/// Image formats the galleries will list.
pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "webp"];

/// One playable audio file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Track {
    pub title: String,
    pub path: PathBuf,
}

/// One image in a gallery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Photo {
    pub title: String,
    pub path: PathBuf,
}

/// One photo card for the memories wall, with a little display tilt.
#[derive(Debug, Clone, PartialEq)]
pub struct MemoryCard {
    pub title: String,
    pub path: PathBuf,
    /// Tilt in degrees, within [-8, 8]
    pub rotation: f64,
}

/// List the audio files under `dir`, sorted by title.
pub fn scan_tracks(dir: &Path) -> Vec<Track> {
    let mut tracks: Vec<Track> = matching_files(dir, AUDIO_EXTENSIONS)
        .into_iter()
        .map(|path| Track {
            title: display_title(&path),
            path,
        })
        .collect();
    tracks.sort_by(|a, b| a.title.cmp(&b.title));
    tracks
}

/// List the image files under `dir`, sorted by filename.
pub fn scan_photos(dir: &Path) -> Vec<Photo> {
    matching_files(dir, IMAGE_EXTENSIONS)
        .into_iter()
        .map(|path| Photo {
            title: display_title(&path),
            path,
        })
        .collect()
}

/// List the image files under `dir` as tilted memory cards.
pub fn scan_memories<R: Rng + ?Sized>(dir: &Path, rng: &mut R) -> Vec<MemoryCard> {
    scan_photos(dir)
        .into_iter()
        .map(|photo| MemoryCard {
            title: photo.title,
            path: photo.path,
            rotation: rng.random_range(-8.0..=8.0),
        })
        .collect()
}

/// File stem with underscores read as spaces.
fn display_title(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().replace('_', " "))
        .unwrap_or_else(|| "Untitled".to_string())
}

fn matching_files(dir: &Path, extensions: &[&str]) -> Vec<PathBuf> {
    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            tracing::debug!(dir = %dir.display(), "media directory unavailable: {e}");
            return Vec::new();
        }
    };

    let mut files: Vec<PathBuf> = entries
        .flatten()
        .map(|entry| entry.path())
        .filter(|path| {
            path.is_file()
                && path
                    .extension()
                    .map(|ext| {
                        let ext = ext.to_string_lossy().to_lowercase();
                        extensions.contains(&ext.as_str())
                    })
                    .unwrap_or(false)
        })
        .collect();
    files.sort();
    files
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use tempfile::TempDir;

    fn touch(dir: &Path, name: &str) {
        std::fs::write(dir.join(name), b"x").unwrap();
    }

    #[test]
    fn missing_directory_is_an_empty_library() {
        let dir = TempDir::new().unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        assert!(scan_tracks(&dir.path().join("nope")).is_empty());
        assert!(scan_memories(&dir.path().join("nope"), &mut rng).is_empty());
    }

    #[test]
    fn tracks_are_filtered_and_titled() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "rainy_evening.mp3");
        touch(dir.path(), "soft_piano.OGG");
        touch(dir.path(), "cover.png");
        touch(dir.path(), "notes.txt");

        let tracks = scan_tracks(dir.path());
        let titles: Vec<&str> = tracks.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["rainy evening", "soft piano"]);
    }

    #[test]
    fn memories_carry_bounded_rotation() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "first_snow.jpg");
        touch(dir.path(), "beach day.webp");
        touch(dir.path(), "song.mp3");

        let mut rng = StdRng::seed_from_u64(42);
        let cards = scan_memories(dir.path(), &mut rng);
        assert_eq!(cards.len(), 2);
        for card in &cards {
            assert!(card.rotation >= -8.0 && card.rotation <= 8.0);
            assert!(!card.title.contains('_'));
        }
    }
}
