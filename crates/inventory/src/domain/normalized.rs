use crate::domain::requests::Patch;
use chrono::{DateTime, Utc};

/// A validated create request, ready for insertion.
#[derive(Debug, Clone, PartialEq)]
pub struct NewInventoryItem {
    pub name: String,
    pub description: Option<String>,
    pub quantity: i32,
    pub location: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// A validated partial update. `None` and `Patch::Untouched` leave the stored
/// column alone; timestamps are never part of it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InventoryItemChanges {
    pub name: Option<String>,
    pub description: Patch<String>,
    pub quantity: Option<i32>,
    pub location: Option<String>,
}

impl InventoryItemChanges {
    pub fn is_empty(&self) -> bool {
        self.changed_fields().is_empty()
    }

    pub fn changed_fields(&self) -> Vec<&'static str> {
        let mut fields = Vec::with_capacity(4);
        if self.name.is_some() {
            fields.push("name");
        }
        if self.description.is_present() {
            fields.push("description");
        }
        if self.quantity.is_some() {
            fields.push("quantity");
        }
        if self.location.is_some() {
            fields.push("location");
        }
        fields
    }
}
