//! Packages API endpoints

use crate::client::TravelClient;
use crate::error::ApiResult;
use wanderstay_core::models::Package;

/// Packages API interface
#[derive(Clone)]
pub struct PackagesApi {
    client: TravelClient,
}

impl PackagesApi {
    pub(crate) fn new(client: TravelClient) -> Self {
        Self { client }
    }

    /// GET /packages
    pub async fn list(&self) -> ApiResult<Vec<Package>> {
        self.client.get("packages", &[]).await
    }

    /// GET /packages/<id>
    pub async fn get(&self, id: &str) -> ApiResult<Package> {
        self.client.get(&format!("packages/{id}"), &[]).await
    }
}
