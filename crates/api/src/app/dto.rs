use serde::{Deserialize, Deserializer};

// Every field is optional at the wire level; presence rules live in
// `catalog_products` so they are enforced the same way for every caller.

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductRequest {
    pub sku: Option<String>,
    pub product_name: Option<String>,
    pub price: Option<i64>,
    pub is_available: Option<bool>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProductRequest {
    pub product_name: Option<String>,
    pub price: Option<i64>,
    /// Outer `None`: key absent. `Some(None)`: key sent as `null`.
    #[serde(default, deserialize_with = "present")]
    pub is_available: Option<Option<bool>>,
}

impl UpdateProductRequest {
    /// Update checks `isAvailable` for presence only; an explicit `null` is
    /// present and stored as unavailable.
    pub fn availability(&self) -> Option<bool> {
        self.is_available.map(|v| v.unwrap_or(false))
    }
}

/// Marks a field as present whenever its key appears, even with `null`.
fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn update(body: serde_json::Value) -> UpdateProductRequest {
        serde_json::from_value(body).unwrap()
    }

    #[test]
    fn update_availability_distinguishes_null_from_absent() {
        let absent = update(serde_json::json!({ "productName": "W", "price": 1 }));
        assert_eq!(absent.availability(), None);

        let null = update(serde_json::json!({
            "productName": "W", "price": 1, "isAvailable": null
        }));
        assert_eq!(null.availability(), Some(false));

        let set = update(serde_json::json!({
            "productName": "W", "price": 1, "isAvailable": true
        }));
        assert_eq!(set.availability(), Some(true));
    }
}
