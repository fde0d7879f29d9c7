//! roost-core - Core library for Roost
//!
//! This crate contains the shared models and the derived state the Roost
//! components render: day grouping for chat, draft checks, unread totals,
//! note badge counts, priority lookup, and reorder arithmetic for the
//! sortable note board.

pub mod chat;
pub mod config;
pub mod error;
pub mod models;
pub mod sortable;
pub mod util;

pub use error::{Error, Result};
pub use models::{Message, MessageId, Note, NoteId, User, UserId};
