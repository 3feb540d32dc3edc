use std::path::{Path, PathBuf};

use crate::audio::AudioData;

/// Extension of every artifact; storage keys and content type assume MP3
pub const ARTIFACT_EXTENSION: &str = "mp3";

/// Persists synthesized audio as `{podcast_id}.mp3` in a fixed directory
#[derive(Debug, Clone)]
pub struct AudioWriter {
    dir: PathBuf,
}

impl AudioWriter {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the artifact for `podcast_id`
    pub fn artifact_path(&self, podcast_id: &str) -> PathBuf {
        self.dir.join(format!("{podcast_id}.{ARTIFACT_EXTENSION}"))
    }

    /// Write the audio, replacing any artifact left by an earlier attempt
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error if the directory cannot be created or
    /// the file cannot be written
    pub async fn write(&self, podcast_id: &str, audio: &AudioData) -> std::io::Result<PathBuf> {
        let path = self.artifact_path(podcast_id);

        tokio::fs::create_dir_all(&self.dir).await?;
        tokio::fs::write(&path, &audio.bytes).await?;

        tracing::debug!(path = %path.display(), bytes = audio.len(), "audio artifact written");

        Ok(path)
    }

    /// Delete a local artifact once it is safely in storage
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error; a file that is already gone is not
    /// an error
    pub async fn remove(&self, path: &Path) -> std::io::Result<()> {
        match tokio::fs::remove_file(path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn artifact_is_named_after_identifier() {
        let writer = AudioWriter::new("/var/podcasts");
        assert_eq!(writer.artifact_path("abc123"), Path::new("/var/podcasts/abc123.mp3"));
    }

    #[tokio::test]
    async fn write_creates_directory_and_file() {
        let root = tempfile::tempdir().unwrap();
        let writer = AudioWriter::new(root.path().join("nested"));

        let path = writer
            .write("abc123", &AudioData::new(b"ID3-audio".to_vec(), "audio/mpeg"))
            .await
            .unwrap();

        assert_eq!(path, root.path().join("nested").join("abc123.mp3"));
        assert_eq!(tokio::fs::read(&path).await.unwrap(), b"ID3-audio");
    }

    #[tokio::test]
    async fn write_overwrites_previous_attempt() {
        let root = tempfile::tempdir().unwrap();
        let writer = AudioWriter::new(root.path());

        writer
            .write("abc123", &AudioData::new(b"first attempt".to_vec(), "audio/mpeg"))
            .await
            .unwrap();
        let path = writer
            .write("abc123", &AudioData::new(b"second".to_vec(), "audio/mpeg"))
            .await
            .unwrap();

        assert_eq!(tokio::fs::read(&path).await.unwrap(), b"second");
    }

    #[tokio::test]
    async fn write_into_a_file_path_fails() {
        let root = tempfile::tempdir().unwrap();
        let blocker = root.path().join("not-a-dir");
        tokio::fs::write(&blocker, b"x").await.unwrap();

        let writer = AudioWriter::new(&blocker);
        let result = writer.write("abc123", &AudioData::new(vec![1, 2, 3], "audio/mpeg")).await;

        assert!(result.is_err());
    }

    #[tokio::test]
    async fn remove_tolerates_missing_file() {
        let root = tempfile::tempdir().unwrap();
        let writer = AudioWriter::new(root.path());

        writer.remove(&writer.artifact_path("never-written")).await.unwrap();
    }
}
