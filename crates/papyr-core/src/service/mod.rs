//! Application services - the operations exposed to the routing layer.

mod posts;

pub use posts::{AuthorRef, PostService};
