//! Keyed response envelope helpers: every success body is a single-key object.

use axum::{http::StatusCode, Json};
use serde::ser::{Serialize, SerializeMap, Serializer};

/// `{ "<key>": data }`
pub struct Keyed<T> {
    pub key: &'static str,
    pub data: T,
}

impl<T: Serialize> Serialize for Keyed<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(self.key, &self.data)?;
        map.end()
    }
}

pub fn success<T: Serialize>(key: &'static str, data: T) -> (StatusCode, Json<Keyed<T>>) {
    (StatusCode::OK, Json(Keyed { key, data }))
}

pub fn created<T: Serialize>(key: &'static str, data: T) -> (StatusCode, Json<Keyed<T>>) {
    (StatusCode::CREATED, Json(Keyed { key, data }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyed_serializes_as_single_entry_object() {
        let body = Keyed { key: "topics", data: vec!["mitch", "cats"] };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json, serde_json::json!({ "topics": ["mitch", "cats"] }));
    }

    #[test]
    fn created_uses_201() {
        let (status, _) = created("comment", 1);
        assert_eq!(status, StatusCode::CREATED);
    }
}
