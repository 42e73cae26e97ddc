//! Places API endpoints

use crate::client::TravelClient;
use crate::error::ApiResult;
use wanderstay_core::models::Place;

/// Places API interface
#[derive(Clone)]
pub struct PlacesApi {
    client: TravelClient,
}

impl PlacesApi {
    pub(crate) fn new(client: TravelClient) -> Self {
        Self { client }
    }

    /// Full-text search over places, or all places when `query` is empty
    ///
    /// GET /places?q=<query>
    pub async fn list(&self, query: Option<&str>) -> ApiResult<Vec<Place>> {
        match query.map(str::trim).filter(|q| !q.is_empty()) {
            Some(q) => self.client.get("places", &[("q", q)]).await,
            None => self.client.get("places", &[]).await,
        }
    }

    /// GET /places/<id>
    pub async fn get(&self, id: &str) -> ApiResult<Place> {
        self.client.get(&format!("places/{id}"), &[]).await
    }
}
