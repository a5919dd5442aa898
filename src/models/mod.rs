//! Data model shared by the client, the query adapter and the view model.

mod new_post;
mod page;
mod post;
mod query;
mod user;

pub use new_post::{ImageUpload, NewPost, NewPostForm};
pub use page::Page;
pub use post::{LikeInfo, LikeUser, Post, PostAuthor, Tag};
pub use query::{QueryState, QueryUpdate, DEFAULT_LIMIT, DEFAULT_PAGE};
pub use user::{CurrentUser, UserRole};
