use serde::Serialize;

use super::model::Bookmark;

/// Client-facing view of a bookmark. Free-text fields are entity-encoded.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SerializedBookmark {
    pub id: String,
    pub title: String,
    pub url: String,
    pub description: String,
    pub rating: i64,
}

pub fn serialize(bookmark: &Bookmark) -> SerializedBookmark {
    SerializedBookmark {
        id: bookmark.id.clone(),
        title: escape_html(&bookmark.title),
        url: bookmark.url.clone(),
        description: escape_html(&bookmark.description),
        rating: bookmark.rating,
    }
}

pub fn serialize_all(bookmarks: &[Bookmark]) -> Vec<SerializedBookmark> {
    bookmarks.iter().map(serialize).collect()
}

pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

/// Reads a stored rating into its numeric form. Older rows may hold the rating
/// as a real or as text.
pub fn coerce_rating(value: &libsql::Value) -> anyhow::Result<i64> {
    use libsql::Value::*;
    match value {
        Integer(i) => Ok(*i),
        Real(f) if f.fract() == 0.0 => Ok(*f as i64),
        Text(s) => s
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|f| f.fract() == 0.0)
            .map(|f| f as i64)
            .ok_or_else(|| anyhow::anyhow!("rating is not numeric: {s}")),
        Null => Ok(0),
        other => anyhow::bail!("unexpected rating value: {:?}", other),
    }
}
