use crate::model::InventoryItem as InventoryItemModel;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq)]
pub struct InventoryItemResponse {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "Widget")]
    pub name: String,
    #[schema(nullable)]
    pub description: Option<String>,
    #[schema(example = 50)]
    pub quantity: i32,
    #[schema(example = "Warehouse A")]
    pub location: String,
    pub created_at: DateTime<Utc>,
    #[schema(nullable)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<InventoryItemModel> for InventoryItemResponse {
    fn from(value: InventoryItemModel) -> Self {
        InventoryItemResponse {
            id: value.id,
            name: value.name,
            description: value.description,
            quantity: value.quantity,
            location: value.location,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    #[test]
    fn serializes_nulls_and_rfc3339_timestamps() {
        let created_at = Utc.with_ymd_and_hms(2025, 1, 2, 3, 4, 5).unwrap();
        let response = InventoryItemResponse::from(InventoryItemModel {
            id: 1,
            name: "Widget".into(),
            description: None,
            quantity: 50,
            location: "Warehouse A".into(),
            created_at,
            updated_at: None,
        });

        assert_eq!(
            serde_json::to_value(response).unwrap(),
            json!({
                "id": 1,
                "name": "Widget",
                "description": null,
                "quantity": 50,
                "location": "Warehouse A",
                "created_at": "2025-01-02T03:04:05Z",
                "updated_at": null
            })
        );
    }
}
