//! JSON-file corpus repository.
//!
//! Stores the whole corpus as one JSON array of records. Small corpora
//! only; a database-backed repository replaces this behind the same
//! trait when the story count warrants it.

use async_trait::async_trait;
use chrono::Utc;
use nocturne_error::{CorpusError, CorpusErrorKind, NocturneResult};
use nocturne_interface::{CorpusRepository, NewStory, StoryRecord};
use std::path::{Path, PathBuf};
use tokio::sync::RwLock;
use tracing::{debug, info};

/// File-backed story corpus.
///
/// Records live in memory behind a lock and are flushed to disk on
/// every save. Writes are atomic: temp file, then rename.
#[derive(Debug)]
pub struct JsonCorpus {
    path: PathBuf,
    stories: RwLock<Vec<StoryRecord>>,
}

impl JsonCorpus {
    /// Open a corpus file, creating an empty corpus if none exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or
    /// parsed.
    pub async fn open(path: impl Into<PathBuf>) -> NocturneResult<Self> {
        let path = path.into();
        let stories = match tokio::fs::read(&path).await {
            Ok(bytes) => serde_json::from_slice(&bytes).map_err(|e| {
                CorpusError::new(CorpusErrorKind::Read(format!(
                    "{}: {}",
                    path.display(),
                    e
                )))
            })?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Vec::new(),
            Err(e) => {
                return Err(CorpusError::new(CorpusErrorKind::Read(format!(
                    "{}: {}",
                    path.display(),
                    e
                )))
                .into());
            }
        };

        info!(path = %path.display(), count = stories.len(), "Opened story corpus");
        Ok(Self {
            path,
            stories: RwLock::new(stories),
        })
    }

    /// Open the corpus at the default per-user data location.
    ///
    /// # Errors
    ///
    /// Returns an error if no user data directory can be determined or
    /// the corpus file is unreadable.
    pub async fn open_default() -> NocturneResult<Self> {
        let data_dir = dirs::data_dir().ok_or_else(|| {
            CorpusError::new(CorpusErrorKind::Read(
                "No user data directory available".to_string(),
            ))
        })?;
        Self::open(data_dir.join("nocturne").join("stories.json")).await
    }

    /// Where this corpus is stored.
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn flush(&self, stories: &[StoryRecord]) -> NocturneResult<()> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await.map_err(|e| {
                CorpusError::new(CorpusErrorKind::Save(format!(
                    "{}: {}",
                    parent.display(),
                    e
                )))
            })?;
        }

        let bytes = serde_json::to_vec_pretty(stories).map_err(|e| {
            CorpusError::new(CorpusErrorKind::Save(format!("serialize: {}", e)))
        })?;

        let temp = self.path.with_extension("json.tmp");
        tokio::fs::write(&temp, &bytes).await.map_err(|e| {
            CorpusError::new(CorpusErrorKind::Save(format!("{}: {}", temp.display(), e)))
        })?;
        tokio::fs::rename(&temp, &self.path).await.map_err(|e| {
            CorpusError::new(CorpusErrorKind::Save(format!(
                "{}: {}",
                self.path.display(),
                e
            )))
        })?;

        debug!(path = %self.path.display(), count = stories.len(), "Flushed corpus to disk");
        Ok(())
    }
}

#[async_trait]
impl CorpusRepository for JsonCorpus {
    async fn list_plot_summaries(&self) -> NocturneResult<Vec<String>> {
        let stories = self.stories.read().await;
        Ok(stories
            .iter()
            .map(|story| story.plot_summary().clone())
            .collect())
    }

    async fn count_stories(&self) -> NocturneResult<u64> {
        Ok(self.stories.read().await.len() as u64)
    }

    async fn save_story(&self, story: NewStory) -> NocturneResult<StoryRecord> {
        let mut stories = self.stories.write().await;
        if stories
            .iter()
            .any(|existing| existing.story_id() == story.story_id())
        {
            return Err(CorpusError::new(CorpusErrorKind::DuplicateId(*story.story_id())).into());
        }

        let record = StoryRecord::from_new(story, Utc::now());
        stories.push(record.clone());
        if let Err(e) = self.flush(&stories).await {
            stories.pop();
            return Err(e);
        }
        Ok(record)
    }

    async fn find_story(&self, story_id: i64) -> NocturneResult<Option<StoryRecord>> {
        let stories = self.stories.read().await;
        Ok(stories
            .iter()
            .find(|story| *story.story_id() == story_id)
            .cloned())
    }

    async fn list_stories(&self) -> NocturneResult<Vec<StoryRecord>> {
        Ok(self.stories.read().await.clone())
    }
}
