//! Hotels API endpoints

use crate::client::TravelClient;
use crate::error::ApiResult;
use serde::Serialize;
use wanderstay_core::models::Hotel;

/// Hotels API interface
#[derive(Clone)]
pub struct HotelsApi {
    client: TravelClient,
}

impl HotelsApi {
    pub(crate) fn new(client: TravelClient) -> Self {
        Self { client }
    }

    /// List hotels, optionally only those of one place
    ///
    /// GET /hotels?placeId=<id>
    pub async fn list(&self, place_id: Option<&str>) -> ApiResult<Vec<Hotel>> {
        match place_id {
            Some(id) => self.client.get("hotels", &[("placeId", id)]).await,
            None => self.client.get("hotels", &[]).await,
        }
    }

    /// GET /hotels/<id>
    pub async fn get(&self, id: &str) -> ApiResult<Hotel> {
        self.client.get(&format!("hotels/{id}"), &[]).await
    }

    /// Overwrite the available room count
    ///
    /// PATCH /hotels/<id> {"roomsAvailable": n}
    pub async fn set_rooms_available(&self, id: &str, rooms_available: u32) -> ApiResult<Hotel> {
        self.client
            .patch(&format!("hotels/{id}"), &RoomsPatch { rooms_available })
            .await
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RoomsPatch {
    rooms_available: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rooms_patch_body() {
        let body = serde_json::to_value(RoomsPatch { rooms_available: 3 }).unwrap();
        assert_eq!(body, serde_json::json!({ "roomsAvailable": 3 }));
    }
}
