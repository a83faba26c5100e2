//! Domain entities - the core business objects.

mod post;
mod user;

pub use post::{FieldUpdate, NewPost, Post, PostPatch};
pub use user::UserRecord;
