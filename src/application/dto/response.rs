//! Response DTOs
//!
//! amis API envelope: `{"status": 0, "msg": "", "data": ...}`.
//! A zero `status` means success; errors use `shared::error::ErrorResponse`.

use serde::Serialize;

/// Successful amis API response.
#[derive(Debug, Serialize)]
pub struct AmisResponse<T> {
    pub status: u16,
    pub msg: String,
    pub data: T,
}

impl<T> AmisResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            status: 0,
            msg: String::new(),
            data,
        }
    }
}

/// List payload consumed by amis `crud` and `table` components.
#[derive(Debug, Serialize)]
pub struct ItemsResponse<T> {
    pub items: Vec<T>,
}

impl<T> From<Vec<T>> for ItemsResponse<T> {
    fn from(items: Vec<T>) -> Self {
        Self { items }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_envelope_shape() {
        let response = AmisResponse::ok(ItemsResponse::from(vec![1, 2]));

        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({"status": 0, "msg": "", "data": {"items": [1, 2]}})
        );
    }
}
