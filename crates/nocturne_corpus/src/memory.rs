//! In-memory corpus repository.

use async_trait::async_trait;
use chrono::Utc;
use nocturne_error::{CorpusError, CorpusErrorKind, NocturneResult};
use nocturne_interface::{CorpusRepository, NewStory, StoryRecord};
use tokio::sync::RwLock;
use tracing::debug;

/// In-process story corpus.
///
/// Records are kept in insertion order. Stories are immutable once
/// saved; there is no update or delete.
#[derive(Debug, Default)]
pub struct InMemoryCorpus {
    stories: RwLock<Vec<StoryRecord>>,
}

impl InMemoryCorpus {
    /// Create an empty corpus.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a corpus pre-seeded with records, for tests and demos.
    pub fn with_records(records: Vec<StoryRecord>) -> Self {
        Self {
            stories: RwLock::new(records),
        }
    }
}

#[async_trait]
impl CorpusRepository for InMemoryCorpus {
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
        debug!(story_id = record.story_id(), "Saved story to corpus");
        stories.push(record.clone());
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
