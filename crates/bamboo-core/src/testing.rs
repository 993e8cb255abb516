//! Fake ports shared by the unit tests of this crate.

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::domain::{BlogPost, Generation, Identity, NewBlogPost, PostStatus, Role};
use crate::error::{GatewayError, RepoError};
use crate::ports::{
    AuthError, BlogGenerator, ChatPrompt, ContentService, TextGenerator, UpstreamError,
};

pub const ADMIN_TOKEN: &str = "admin-token";
pub const MEMBER_TOKEN: &str = "member-token";

/// Content service with two known credentials and call counters.
pub struct FakeContent {
    identities: HashMap<String, Identity>,
    admins: HashSet<Uuid>,
    pub fail_role_lookup: bool,
    pub fail_insert: bool,
    pub posts: Mutex<Vec<BlogPost>>,
    pub insert_calls: AtomicUsize,
    pub role_calls: AtomicUsize,
}

impl FakeContent {
    pub fn new() -> Self {
        let admin = Identity::new(Uuid::new_v4()).with_email("admin@bamboo.dev");
        let member = Identity::new(Uuid::new_v4()).with_email("member@bamboo.dev");

        Self {
            admins: HashSet::from([admin.id]),
            identities: HashMap::from([
                (ADMIN_TOKEN.to_string(), admin),
                (MEMBER_TOKEN.to_string(), member),
            ]),
            fail_role_lookup: false,
            fail_insert: false,
            posts: Mutex::new(Vec::new()),
            insert_calls: AtomicUsize::new(0),
            role_calls: AtomicUsize::new(0),
        }
    }

    pub fn identity(&self, token: &str) -> Identity {
        self.identities[token].clone()
    }

    pub fn inserts(&self) -> usize {
        self.insert_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ContentService for FakeContent {
    async fn insert(&self, post: NewBlogPost) -> Result<BlogPost, RepoError> {
        self.insert_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_insert {
            return Err(RepoError::Connection("store offline".to_string()));
        }

        let post = post.into_post(Uuid::new_v4(), Utc::now());
        self.posts.lock().unwrap().push(post.clone());
        Ok(post)
    }

    async fn get_identity(&self, credential: &str) -> Result<Identity, AuthError> {
        self.identities
            .get(credential)
            .cloned()
            .ok_or_else(|| AuthError::InvalidToken("unknown credential".to_string()))
    }

    async fn has_role(&self, identity_id: Uuid, role: Role) -> Result<bool, RepoError> {
        self.role_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_role_lookup {
            return Err(RepoError::Query("role table unavailable".to_string()));
        }
        Ok(role == Role::Admin && self.admins.contains(&identity_id))
    }

    async fn list_published(
        &self,
        offset: u64,
        limit: u64,
    ) -> Result<(Vec<BlogPost>, u64), RepoError> {
        let posts = self.posts.lock().unwrap();
        let published: Vec<_> = posts
            .iter()
            .filter(|p| p.status == PostStatus::Published)
            .cloned()
            .collect();
        let total = published.len() as u64;
        let page = published
            .into_iter()
            .skip(offset as usize)
            .take(limit as usize)
            .collect();
        Ok((page, total))
    }

    async fn get_by_slug(&self, slug: &str, status: PostStatus) -> Result<BlogPost, RepoError> {
        self.posts
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.slug == slug && p.status == status)
            .cloned()
            .ok_or(RepoError::NotFound)
    }

    async fn count_posts(&self) -> Result<u64, RepoError> {
        Ok(self.posts.lock().unwrap().len() as u64)
    }
}

/// What the fake upstream does when called.
pub enum Script {
    Reply(String),
    Status(u16, String),
    RateLimited,
    QuotaExhausted,
    MissingApiKey,
    Timeout,
    /// Never answers.
    Hang,
}

/// Upstream text generator that follows a script and records prompts.
pub struct FakeUpstream {
    script: Script,
    pub calls: AtomicUsize,
    pub last_prompt: Mutex<Option<ChatPrompt>>,
}

impl FakeUpstream {
    pub fn new(script: Script) -> Self {
        Self {
            script,
            calls: AtomicUsize::new(0),
            last_prompt: Mutex::new(None),
        }
    }

    pub fn replying(reply: impl Into<String>) -> Self {
        Self::new(Script::Reply(reply.into()))
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TextGenerator for FakeUpstream {
    async fn complete(&self, prompt: &ChatPrompt) -> Result<String, UpstreamError> {
        if matches!(self.script, Script::MissingApiKey) {
            return Err(UpstreamError::MissingApiKey);
        }

        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_prompt.lock().unwrap() = Some(prompt.clone());

        match &self.script {
            Script::Reply(reply) => Ok(reply.clone()),
            Script::Status(status, body) => Err(UpstreamError::Status {
                status: *status,
                body: body.clone(),
            }),
            Script::RateLimited => Err(UpstreamError::RateLimited),
            Script::QuotaExhausted => Err(UpstreamError::QuotaExhausted),
            Script::MissingApiKey => Err(UpstreamError::MissingApiKey),
            Script::Timeout => Err(UpstreamError::Timeout),
            Script::Hang => {
                tokio::time::sleep(Duration::from_secs(3600)).await;
                Err(UpstreamError::Timeout)
            }
        }
    }
}

/// Blog generator returning a fixed result.
pub struct FakeGenerator {
    result: Mutex<Option<Result<Generation, GatewayError>>>,
    pub calls: AtomicUsize,
    pub last_call: Mutex<Option<(String, String, String)>>,
}

impl FakeGenerator {
    pub fn returning(result: Result<Generation, GatewayError>) -> Self {
        Self {
            result: Mutex::new(Some(result)),
            calls: AtomicUsize::new(0),
            last_call: Mutex::new(None),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl BlogGenerator for FakeGenerator {
    async fn generate(
        &self,
        credential: &str,
        topic: &str,
        tone: &str,
    ) -> Result<Generation, GatewayError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_call.lock().unwrap() =
            Some((credential.to_string(), topic.to_string(), tone.to_string()));

        self.result
            .lock()
            .unwrap()
            .take()
            .unwrap_or(Err(GatewayError::Cancelled))
    }
}
