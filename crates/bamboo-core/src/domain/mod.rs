//! Domain entities - the core business objects.

mod generation;
mod identity;
mod pagination;
mod post;

pub use generation::{GeneratedPost, Generation, GenerationRequest};
pub use identity::{Identity, Role};
pub use pagination::Pagination;
pub use post::{BlogPost, NewBlogPost, PostDraft, PostStatus, ValidatedPost};
