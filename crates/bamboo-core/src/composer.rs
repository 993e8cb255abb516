//! Admin composer - the in-memory editing session behind the "new post" screen.
//!
//! A composer holds one [`PostDraft`]. Field setters never validate; validation
//! runs once on [`Composer::save`]. Both `generate` and `save` take `&mut self`,
//! so a single composer never has two of them in flight.

use std::sync::Arc;

use chrono::Utc;

use crate::domain::{BlogPost, Generation, NewBlogPost, PostDraft, PostStatus};
use crate::error::ComposerError;
use crate::ports::{BlogGenerator, ContentService};
use crate::slug::derive_slug;
use crate::validation::validate_post;

const GENERATION_TONE: &str = "professional";

pub struct Composer {
    content: Arc<dyn ContentService>,
    generator: Arc<dyn BlogGenerator>,
    credential: Option<String>,
    draft: PostDraft,
}

impl Composer {
    pub fn new(
        content: Arc<dyn ContentService>,
        generator: Arc<dyn BlogGenerator>,
        credential: Option<String>,
    ) -> Self {
        Self {
            content,
            generator,
            credential,
            draft: PostDraft::default(),
        }
    }

    /// Start from an existing form state, e.g. one submitted over HTTP.
    pub fn with_draft(mut self, draft: PostDraft) -> Self {
        self.draft = draft;
        self
    }

    pub fn draft(&self) -> &PostDraft {
        &self.draft
    }

    /// Set the title and re-derive the slug from it.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.draft.title = title.into();
        self.rederive_slug();
    }

    pub fn set_slug(&mut self, slug: impl Into<String>) {
        self.draft.slug = slug.into();
    }

    pub fn set_excerpt(&mut self, excerpt: impl Into<String>) {
        self.draft.excerpt = excerpt.into();
    }

    pub fn set_content(&mut self, content: impl Into<String>) {
        self.draft.content = content.into();
    }

    pub fn set_thumbnail_url(&mut self, url: impl Into<String>) {
        self.draft.thumbnail_url = url.into();
    }

    pub fn set_status(&mut self, status: impl Into<String>) {
        self.draft.status = status.into();
    }

    pub fn set_status_value(&mut self, status: PostStatus) {
        self.draft.status = status.as_str().to_string();
    }

    /// Overwrite the slug with one derived from the current title.
    pub fn rederive_slug(&mut self) {
        self.draft.slug = derive_slug(&self.draft.title);
    }

    /// Ask the generator for a draft and merge it into the form.
    ///
    /// On success title, excerpt and content are replaced and the slug is
    /// re-derived. On failure the draft is left as it was.
    pub async fn generate(&mut self, topic: &str) -> Result<Generation, ComposerError> {
        let topic = topic.trim();
        if topic.is_empty() {
            return Err(ComposerError::TopicRequired);
        }
        let credential = self
            .credential
            .as_deref()
            .ok_or(ComposerError::Unauthenticated)?;

        let generation = self
            .generator
            .generate(credential, topic, GENERATION_TONE)
            .await?;

        if generation.degraded {
            tracing::warn!(topic, "Generated draft could not be parsed, using raw text");
        }

        self.draft.title = generation.post.title.clone();
        self.draft.excerpt = generation.post.excerpt.clone();
        self.draft.content = generation.post.content.clone();
        self.rederive_slug();

        Ok(generation)
    }

    /// Validate the draft and persist it as a new post authored by the caller.
    pub async fn save(&mut self) -> Result<BlogPost, ComposerError> {
        let validated = validate_post(&self.draft)?;

        let credential = self
            .credential
            .as_deref()
            .ok_or(ComposerError::Unauthenticated)?;
        let identity = self.content.get_identity(credential).await.map_err(|e| {
            tracing::debug!(error = %e, "Save attempted with unusable credential");
            ComposerError::Unauthenticated
        })?;

        let record = NewBlogPost::stamp(validated, identity.id, Utc::now());
        let post = self.content.insert(record).await.map_err(|e| {
            tracing::error!(user_id = %identity.id, error = %e, "Failed to save blog post");
            ComposerError::from(e)
        })?;

        tracing::info!(post_id = %post.id, slug = %post.slug, status = %post.status, "Blog post saved");
        Ok(post)
    }
}
