//! Response values independent of the HTTP framework.

use crate::domain::GalleryItem;
use serde_json::json;

/// Headers sent with every response.
const JSON_HEADERS: [(&str, &str); 1] = [("content-type", "application/json")];

/// Extra headers on a successful gallery listing.
const GALLERY_HEADERS: [(&str, &str); 2] = [
    ("access-control-allow-origin", "*"),
    ("cache-control", "no-store, max-age=0"),
];

/// A status, lowercase header pairs and a JSON body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    /// HTTP status code.
    pub status: u16,
    /// Header names and values.
    pub headers: Vec<(&'static str, &'static str)>,
    /// Serialized JSON body.
    pub body: String,
}

impl ApiResponse {
    fn json(status: u16, body: String) -> Self {
        Self {
            status,
            headers: JSON_HEADERS.to_vec(),
            body,
        }
    }

    /// `200` with the rows, uncached and readable from any origin.
    #[must_use]
    pub fn gallery(items: &[GalleryItem]) -> Self {
        match serde_json::to_string(items) {
            Ok(body) => {
                let mut response = Self::json(200, body);
                response.headers.extend(GALLERY_HEADERS);
                response
            }
            Err(e) => Self::database_error(&e.to_string()),
        }
    }

    /// `500` for a missing connection string.
    #[must_use]
    pub fn incomplete_configuration(message: &str) -> Self {
        Self::json(
            500,
            json!({ "error": "Incomplete configuration", "message": message }).to_string(),
        )
    }

    /// `500` for a failed connection or query.
    #[must_use]
    pub fn database_error(details: &str) -> Self {
        Self::json(500, json!({ "error": "Database error", "details": details }).to_string())
    }

    /// `200 {"status":"ok"}`.
    #[must_use]
    pub fn health() -> Self {
        Self::json(200, json!({ "status": "ok" }).to_string())
    }

    /// First value of header `name`, case-insensitive.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| *value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gallery_uses_wire_field_names_and_cache_headers() {
        let response = ApiResponse::gallery(&[GalleryItem::new(7, "Mar", "https://img/7.jpg")]);

        assert_eq!(response.status, 200);
        assert_eq!(response.body, r#"[{"id":7,"carpeta":"Mar","url":"https://img/7.jpg"}]"#);
        assert_eq!(response.header("Access-Control-Allow-Origin"), Some("*"));
        assert_eq!(response.header("cache-control"), Some("no-store, max-age=0"));
    }

    #[test]
    fn errors_are_json_without_cache_headers() {
        let response = ApiResponse::database_error("relation \"gallery\" does not exist");
        let body: serde_json::Value = serde_json::from_str(&response.body).unwrap();

        assert_eq!(response.status, 500);
        assert_eq!(body["error"], "Database error");
        assert_eq!(response.header("content-type"), Some("application/json"));
        assert_eq!(response.header("cache-control"), None);
    }
}
