//! Payload rules shared by bookmark creation and partial updates.

use serde_json::Value as JsonValue;
use url::Url;

use super::model::{BookmarkPatch, BookmarkPayload, NewBookmark};
use crate::error::ValidationError;

pub const MIN_RATING: i64 = 0;
pub const MAX_RATING: i64 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationMode {
    Create,
    Update,
}

/// Checks `payload` under `mode` and returns the trimmed, typed fields.
///
/// Presence means the key exists with a non-null value, so `rating: 0` and
/// `description: ""` are honoured as supplied values. In `Create` mode the
/// required fields are checked in the order `title`, `url`, `rating` before
/// any value is inspected.
pub fn validate(payload: &BookmarkPayload, mode: ValidationMode) -> Result<BookmarkPatch, ValidationError> {
    match mode {
        ValidationMode::Create => {
            let required = [
                ("title", &payload.title),
                ("url", &payload.url),
                ("rating", &payload.rating),
            ];
            for (field, value) in required {
                if value.is_none() {
                    return Err(ValidationError::MissingField(field));
                }
            }
        }
        ValidationMode::Update => {
            if payload.is_empty() {
                return Err(ValidationError::EmptyUpdate);
            }
        }
    }

    let title = payload.title.as_ref().map(parse_title).transpose()?;
    let rating = payload.rating.as_ref().map(parse_rating).transpose()?;
    let url = payload
        .url
        .as_ref()
        .map(|value| parse_url(value, mode))
        .transpose()?;
    let description = payload
        .description
        .as_ref()
        .map(|value| text("description", value).map(|s| s.trim().to_string()))
        .transpose()?;

    Ok(BookmarkPatch {
        title,
        url,
        description,
        rating,
    })
}

pub fn validate_new(payload: &BookmarkPayload) -> Result<NewBookmark, ValidationError> {
    let patch = validate(payload, ValidationMode::Create)?;

    let Some(title) = patch.title else {
        return Err(ValidationError::MissingField("title"));
    };
    let Some(url) = patch.url else {
        return Err(ValidationError::MissingField("url"));
    };
    let Some(rating) = patch.rating else {
        return Err(ValidationError::MissingField("rating"));
    };

    Ok(NewBookmark {
        title,
        url,
        description: patch.description.unwrap_or_default(),
        rating,
    })
}

pub fn validate_patch(payload: &BookmarkPayload) -> Result<BookmarkPatch, ValidationError> {
    validate(payload, ValidationMode::Update)
}

/// Accepts http and https URIs that carry a `://` authority with a host.
///
/// `Url::parse` repairs `http:example.com` into `http://example.com/`, so the
/// authority marker is checked on the raw input as well.
pub fn is_web_uri(candidate: &str) -> bool {
    let candidate = candidate.trim();
    match Url::parse(candidate) {
        Ok(url) => {
            matches!(url.scheme(), "http" | "https")
                && candidate
                    .get(url.scheme().len()..)
                    .is_some_and(|rest| rest.starts_with("://"))
                && url.host_str().is_some_and(|h| !h.is_empty())
        }
        Err(_) => false,
    }
}

fn text<'v>(field: &'static str, value: &'v JsonValue) -> Result<&'v str, ValidationError> {
    value.as_str().ok_or(ValidationError::InvalidText(field))
}

fn parse_title(value: &JsonValue) -> Result<String, ValidationError> {
    let title = text("title", value)?.trim();
    if title.is_empty() {
        return Err(ValidationError::MissingField("title"));
    }
    Ok(title.to_string())
}

fn parse_url(value: &JsonValue, mode: ValidationMode) -> Result<String, ValidationError> {
    let url = text("url", value)?.trim();
    if url.is_empty() && mode == ValidationMode::Create {
        return Err(ValidationError::MissingField("url"));
    }
    if !is_web_uri(url) {
        return Err(ValidationError::InvalidUrl);
    }
    Ok(url.to_string())
}

fn parse_rating(value: &JsonValue) -> Result<i64, ValidationError> {
    let JsonValue::Number(number) = value else {
        return Err(ValidationError::InvalidRating);
    };

    let rating = match number.as_i64() {
        Some(i) => i,
        None => match number.as_f64() {
            Some(f) if f.fract() == 0.0 && f >= MIN_RATING as f64 && f <= MAX_RATING as f64 => f as i64,
            _ => return Err(ValidationError::InvalidRating),
        },
    };

    if !(MIN_RATING..=MAX_RATING).contains(&rating) {
        return Err(ValidationError::InvalidRating);
    }
    Ok(rating)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn payload(value: JsonValue) -> BookmarkPayload {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn create_accepts_minimal_payload() {
        let new = validate_new(&payload(json!({
            "title": "A",
            "url": "http://example.com",
            "rating": 3
        })))
        .unwrap();

        assert_eq!(
            new,
            NewBookmark {
                title: "A".to_string(),
                url: "http://example.com".to_string(),
                description: String::new(),
                rating: 3,
            }
        );
    }

    #[test]
    fn create_rating_bounds() {
        for r in MIN_RATING..=MAX_RATING {
            let result = validate_new(&payload(json!({
                "title": "A", "url": "https://example.com", "rating": r
            })));
            assert!(result.is_ok(), "rating {r} should be accepted");
        }

        for bad in [json!(-1), json!(6), json!(9), json!(2.5), json!("3"), json!("invalid"), json!(true)] {
            let result = validate_new(&payload(json!({
                "title": "A", "url": "https://example.com", "rating": bad
            })));
            assert_eq!(result, Err(ValidationError::InvalidRating), "rating {bad} should fail");
        }
    }

    #[test]
    fn whole_float_rating_is_an_integer() {
        let new = validate_new(&payload(json!({
            "title": "A", "url": "https://example.com", "rating": 4.0
        })))
        .unwrap();
        assert_eq!(new.rating, 4);
    }

    #[test]
    fn create_reports_missing_fields_in_order() {
        assert_eq!(
            validate_new(&payload(json!({"url": "https://x.com", "rating": 1}))),
            Err(ValidationError::MissingField("title"))
        );
        assert_eq!(
            validate_new(&payload(json!({"title": "t", "rating": 1}))),
            Err(ValidationError::MissingField("url"))
        );
        assert_eq!(
            validate_new(&payload(json!({"title": "t", "url": "https://x.com"}))),
            Err(ValidationError::MissingField("rating"))
        );
        assert_eq!(
            validate_new(&payload(json!({}))),
            Err(ValidationError::MissingField("title"))
        );
    }

    #[test]
    fn blank_title_is_missing() {
        assert_eq!(
            validate_new(&payload(json!({"title": "   ", "url": "https://x.com", "rating": 1}))),
            Err(ValidationError::MissingField("title"))
        );
        assert_eq!(
            validate_patch(&payload(json!({"title": ""}))),
            Err(ValidationError::MissingField("title"))
        );
    }

    #[test]
    fn rating_zero_is_present_on_create() {
        let new = validate_new(&payload(json!({
            "title": "A", "url": "https://example.com", "rating": 0
        })))
        .unwrap();
        assert_eq!(new.rating, 0);
    }

    #[test]
    fn url_must_be_web_uri() {
        assert!(is_web_uri("http://example.com"));
        assert!(is_web_uri("https://example.com/path?q=1"));
        assert!(!is_web_uri("ftp://x"));
        assert!(!is_web_uri("not-a-url"));
        assert!(!is_web_uri("https:/"));
        assert!(!is_web_uri("http:example.com"));
        assert!(!is_web_uri("https:/x"));
        assert!(is_web_uri("HTTPS://Example.com"));
        assert!(!is_web_uri("mailto:someone@example.com"));

        assert_eq!(
            validate_new(&payload(json!({"title": "A", "url": "ftp://x", "rating": 1}))),
            Err(ValidationError::InvalidUrl)
        );
        assert_eq!(
            validate_new(&payload(json!({"title": "A", "url": "http:example.com", "rating": 1}))),
            Err(ValidationError::InvalidUrl)
        );
        assert_eq!(
            validate_patch(&payload(json!({"url": "not-a-url"}))),
            Err(ValidationError::InvalidUrl)
        );
        assert_eq!(
            validate_patch(&payload(json!({"url": ""}))),
            Err(ValidationError::InvalidUrl)
        );
    }

    #[test]
    fn non_string_text_fields_are_rejected() {
        assert_eq!(
            validate_new(&payload(json!({"title": 12, "url": "https://x.com", "rating": 1}))),
            Err(ValidationError::InvalidText("title"))
        );
        assert_eq!(
            validate_patch(&payload(json!({"description": ["x"]}))),
            Err(ValidationError::InvalidText("description"))
        );
    }

    #[test]
    fn empty_update_is_rejected() {
        assert_eq!(validate_patch(&payload(json!({}))), Err(ValidationError::EmptyUpdate));
        assert_eq!(
            validate_patch(&payload(json!({"id": "x", "other": 1}))),
            Err(ValidationError::EmptyUpdate)
        );
    }

    #[test]
    fn update_keeps_explicitly_supplied_falsy_values() {
        let patch = validate_patch(&payload(json!({"rating": 0, "description": ""}))).unwrap();
        assert_eq!(
            patch,
            BookmarkPatch {
                rating: Some(0),
                description: Some(String::new()),
                ..Default::default()
            }
        );
    }

    #[test]
    fn values_are_trimmed() {
        let patch = validate_patch(&payload(json!({
            "title": "  Docs ", "url": " https://docs.rs ", "description": " crates "
        })))
        .unwrap();
        assert_eq!(patch.title.as_deref(), Some("Docs"));
        assert_eq!(patch.url.as_deref(), Some("https://docs.rs"));
        assert_eq!(patch.description.as_deref(), Some("crates"));
    }
}
