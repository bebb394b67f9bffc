//! Domain entities - the core business objects.

mod post;
mod session;
mod user;

pub use post::{Post, PostInput, PostPatch, derive_summary, normalize_tags, validate_post};
pub use session::Session;
pub use user::{Role, User};
