//! Client for the remote posts collection.

mod client;
pub mod routes;
mod wire;

pub use client::PostsClient;
pub use routes::Routes;
