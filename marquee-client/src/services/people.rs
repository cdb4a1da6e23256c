//! Person details and filmography service.

use std::sync::Arc;

use async_trait::async_trait;

use marquee_model::{Movie, Person, PersonCredits};

use crate::api_client::CatalogClient;
use crate::services::swallow;

/// Operations behind the person screen.
#[async_trait]
pub trait PeopleService: Send + Sync {
    async fn person_details(&self, person_id: u64) -> Option<Person>;

    /// Movies the person appeared in; empty on failure.
    async fn person_movies(&self, person_id: u64) -> Vec<Movie>;
}

/// [`PeopleService`] backed by the HTTP gateway.
#[derive(Debug, Clone)]
pub struct PeopleApiAdapter {
    client: Arc<CatalogClient>,
}

impl PeopleApiAdapter {
    pub fn new(client: Arc<CatalogClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl PeopleService for PeopleApiAdapter {
    async fn person_details(&self, person_id: u64) -> Option<Person> {
        swallow(
            "person details",
            self.client.person_details(person_id).await,
        )
    }

    async fn person_movies(&self, person_id: u64) -> Vec<Movie> {
        cast_movies(swallow(
            "person movie credits",
            self.client.person_movie_credits(person_id).await,
        ))
    }
}

/// Flatten a credits payload to its cast movie list; failure reads as an
/// empty filmography.
fn cast_movies(credits: Option<PersonCredits>) -> Vec<Movie> {
    credits.map(|credits| credits.cast).unwrap_or_default()
}
