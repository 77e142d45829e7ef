//! Shared response envelope types for API handlers.
//!
//! Paginated endpoints return [`archivist_core::pagination::Page`] as-is.
//! Unpaginated collections use [`Listing`], which names the collection key
//! per endpoint (`{ "episodes": [...], "count": 6 }`).

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// `{ "<key>": [...], "count": n, ...extra }` response envelope.
#[derive(Debug)]
pub struct Listing<T> {
    key: &'static str,
    items: Vec<T>,
    extra: Option<(&'static str, String)>,
}

impl<T> Listing<T> {
    pub fn new(key: &'static str, items: Vec<T>) -> Self {
        Self {
            key,
            items,
            extra: None,
        }
    }

    /// Echo a request parameter back next to the results.
    pub fn with(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.extra = Some((key, value.into()));
        self
    }
}

impl<T: Serialize> Serialize for Listing<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let len = if self.extra.is_some() { 3 } else { 2 };
        let mut map = serializer.serialize_map(Some(len))?;
        map.serialize_entry(self.key, &self.items)?;
        map.serialize_entry("count", &self.items.len())?;
        if let Some((key, value)) = &self.extra {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn listing_names_its_collection() {
        let value = serde_json::to_value(Listing::new("brands", vec!["Acme", "Sonora"])).unwrap();
        assert_eq!(value, json!({ "brands": ["Acme", "Sonora"], "count": 2 }));
    }

    #[test]
    fn listing_echoes_extra_parameter() {
        let value =
            serde_json::to_value(Listing::new("characters", Vec::<u8>::new()).with("query", "sky"))
                .unwrap();
        assert_eq!(value, json!({ "characters": [], "count": 0, "query": "sky" }));
    }
}
