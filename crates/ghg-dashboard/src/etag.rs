//! ETags for the static page and script.
//!
//! Both bodies are fixed once the server starts, so the tag is a SHA-256 of
//! the bytes, computed once.

use axum::http::{HeaderMap, header};
use sha2::{Digest, Sha256};

/// Quoted hex SHA-256 of `body`.
pub fn compute_etag(body: &[u8]) -> String {
  format!("\"{}\"", hex::encode(Sha256::digest(body)))
}

/// Whether the request's `If-None-Match` matches `etag`.
///
/// Accepts `*`, weak tags (`W/"…"`), comma-separated lists, and tags sent
/// without the surrounding quotes.
pub fn if_none_match(headers: &HeaderMap, etag: &str) -> bool {
  let Some(value) = headers
    .get(header::IF_NONE_MATCH)
    .and_then(|v| v.to_str().ok())
  else {
    return false;
  };
  let bare = etag.trim_matches('"');
  value.split(',').map(str::trim).any(|candidate| {
    candidate == "*"
      || candidate.trim_start_matches("W/").trim_matches('"') == bare
  })
}

#[cfg(test)]
mod tests {
  use axum::http::HeaderValue;

  use super::*;

  fn headers(value: &str) -> HeaderMap {
    let mut h = HeaderMap::new();
    h.insert(header::IF_NONE_MATCH, HeaderValue::from_str(value).unwrap());
    h
  }

  #[test]
  fn etag_is_quoted_and_content_addressed() {
    let a = compute_etag(b"hello");
    assert!(a.starts_with('"') && a.ends_with('"'));
    assert_eq!(a.len(), 66);
    assert_eq!(a, compute_etag(b"hello"));
    assert_ne!(a, compute_etag(b"hello!"));
  }

  #[test]
  fn matching_forms() {
    let tag = compute_etag(b"page");
    let bare = tag.trim_matches('"').to_string();
    assert!(if_none_match(&headers(&tag), &tag));
    assert!(if_none_match(&headers(&bare), &tag));
    assert!(if_none_match(&headers(&format!("W/{tag}")), &tag));
    assert!(if_none_match(&headers(&format!("\"other\", {tag}")), &tag));
    assert!(if_none_match(&headers("*"), &tag));
  }

  #[test]
  fn non_matching_forms() {
    let tag = compute_etag(b"page");
    assert!(!if_none_match(&HeaderMap::new(), &tag));
    assert!(!if_none_match(&headers("\"stale\""), &tag));
  }
}
