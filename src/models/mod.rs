//! Data models for the SkillBridge marketplace.
//!
//! Field names serialize to the camelCase shape the frontend persists.

mod chat;
mod datastore;
mod message;
mod seed;
mod task;

pub use chat::*;
pub use datastore::*;
pub use message::*;
pub use seed::*;
pub use task::*;
