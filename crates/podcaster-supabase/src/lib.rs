//! Supabase clients for podcast artifacts and records
//!
//! [`PodcastStorage`] uploads audio to a Storage bucket and [`PodcastTable`]
//! flips the record status through PostgREST. Both share one
//! [`SupabaseClient`].

#![allow(clippy::must_use_candidate)]

mod client;
mod database;
mod error;
mod storage;

use podcaster_config::Config;

pub use client::{SupabaseClient, UploadOptions};
pub use database::PodcastTable;
pub use error::{DatabaseError, StorageError};
pub use storage::PodcastStorage;

/// Build the storage and database clients from configuration
///
/// # Errors
///
/// Returns an error if the HTTP client cannot be built
pub fn from_config(config: &Config) -> Result<(PodcastStorage, PodcastTable), reqwest::Error> {
    let client = SupabaseClient::new(
        config.supabase.url.clone(),
        config.supabase.key.clone(),
        config.supabase.timeout,
    )?;

    Ok((
        PodcastStorage::new(client.clone(), &config.storage),
        PodcastTable::new(client, config.database.clone()),
    ))
}
