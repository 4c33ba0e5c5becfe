//! The authoritative store of users added during this session.
//!
//! Backed by a [`ResourceActor`] keyed by [`UserId::Local`] ids drawn from a
//! monotonically increasing counter.

pub mod entity;
pub mod error;

pub use error::*;

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::actor_framework::ResourceActor;
use crate::clients::LocalUsersClient;
use crate::domain::{LocalUser, UserId};

/// Builds the local user store and the client handed to the form and directory.
pub fn local_user_store(buffer_size: usize) -> (ResourceActor<LocalUser>, LocalUsersClient) {
    let counter = Arc::new(AtomicU64::new(1));
    let next_id = move || UserId::Local(counter.fetch_add(1, Ordering::SeqCst));

    let (actor, inner) = ResourceActor::<LocalUser>::new(buffer_size, next_id);
    (actor, LocalUsersClient::new(inner))
}
