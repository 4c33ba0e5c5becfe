//! # User Directory
//!
//! A small user directory built from three cooperating services:
//!
//! - **Form** ([`form::FormService`]) collects and validates a new user and
//!   hands it to the local store, then shows a success banner for three seconds.
//! - **Local user store** ([`local_users::local_user_store`]) owns every user
//!   added this session, in insertion order.
//! - **Directory** ([`directory::DirectoryService`]) fetches the remote listing
//!   once, merges it with the local store, filters by name and deletes from
//!   whichever source owns an id.
//!
//! Every service is an actor: a tokio task owning its state, reached only
//! through a cloneable client ([`clients`]). [`app_system::DirectorySystem`]
//! starts and stops them together.
//!
//! ```rust,ignore
//! let system = DirectorySystem::start(&config, Arc::new(source));
//! system.directory_client.wait_until_settled().await?;
//!
//! system.form_client.set_field(FormField::Name, "Ada".into()).await?;
//! // ...remaining fields...
//! let outcome = system.form_client.submit().await?;
//!
//! let view = system.directory_client.view().await?;
//! println!("{}", render_directory(&view));
//!
//! system.shutdown().await?;
//! ```

pub mod actor_framework;
pub mod app_system;
pub mod clients;
pub mod directory;
pub mod domain;
pub mod fetch;
pub mod form;
pub mod local_users;
pub mod messages;
pub mod view;

#[cfg(test)]
mod mock_framework;
