//! ChitChat - client and list view model for the ChitChatConnect posts service
//!
//! This library exposes modules for use in integration tests and the
//! `chitchat` binary.

pub mod adapters;
pub mod card;
pub mod cli;
pub mod config;
pub mod error;
pub mod image;
pub mod models;
pub mod pagination;
pub mod posts;
pub mod query_state;
pub mod render;
pub mod traits;
pub mod validation;
pub mod view_model;
