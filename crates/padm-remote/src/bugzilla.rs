//! Bug tracker REST client.
//!
//! Read paths (bug record, comments, component queries) work anonymously on
//! public bugs; commenting sends the configured API key.

use std::collections::HashMap;

use async_trait::async_trait;
use padm_core::{Bug, BugComment, BugFlag, OpenBug};

use crate::error::RemoteError;
use crate::http::check_response;
use crate::traits::BugTracker;

const API_KEY_HEADER: &str = "X-BUGZILLA-API-KEY";

/// Normalize a ticket reference into a numeric bug id.
///
/// Accepts a raw numeric id, or a ticket URL: the value of an `id=` query
/// parameter when one is present, otherwise the URL's final path segment.
///
/// # Errors
///
/// [`RemoteError::InvalidBugRef`] when no numeric id can be extracted.
pub fn parse_bug_ref(reference: &str) -> Result<u64, RemoteError> {
    let reference = reference.trim();
    if let Ok(id) = reference.parse::<u64>() {
        return Ok(id);
    }

    let candidate = if let Some((_, tail)) = reference.split_once("id=") {
        tail.split('&').next().unwrap_or(tail)
    } else {
        reference.rsplit('/').next().unwrap_or(reference)
    };

    candidate
        .parse::<u64>()
        .map_err(|_| RemoteError::InvalidBugRef(reference.to_string()))
}

#[derive(serde::Deserialize)]
struct BugsResponse {
    bugs: Vec<BugPayload>,
}

#[derive(serde::Deserialize)]
struct BugPayload {
    id: u64,
    summary: String,
    creator: String,
    #[serde(default)]
    status: String,
    #[serde(default)]
    flags: Vec<FlagPayload>,
}

#[derive(serde::Deserialize)]
struct FlagPayload {
    name: String,
    status: String,
    setter: String,
}

#[derive(serde::Deserialize)]
struct CommentsResponse {
    bugs: HashMap<String, BugComments>,
}

#[derive(serde::Deserialize)]
struct BugComments {
    comments: Vec<CommentPayload>,
}

#[derive(serde::Deserialize)]
struct CommentPayload {
    /// Modern Bugzilla calls the comment author `creator`; older deployments
    /// still say `author`.
    #[serde(alias = "author")]
    creator: String,
}

/// HTTP client for the bug tracker REST API.
pub struct BugzillaClient {
    http: reqwest::Client,
    base: String,
    api_key: Option<String>,
}

impl BugzillaClient {
    #[must_use]
    pub fn new(base_url: &str, api_key: Option<String>) -> Self {
        Self {
            http: crate::build_http_client(),
            base: base_url.trim_end_matches('/').to_string(),
            api_key,
        }
    }

    /// Fetch the full bug record: summary, creator, flags and comments.
    ///
    /// # Errors
    ///
    /// [`RemoteError::NotFound`] if the tracker does not know the bug id;
    /// transport/API errors otherwise.
    pub async fn bug(&self, id: u64) -> Result<Bug, RemoteError> {
        let url = format!(
            "{}/rest/bug/{id}?include_fields=id,summary,creator,flags",
            self.base
        );
        let resp = self.http.get(&url).send().await?;
        if resp.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(RemoteError::not_found(format!("bug {id}")));
        }
        let resp = check_response(resp).await?;
        let data: BugsResponse = resp.json().await?;
        let Some(payload) = data.bugs.into_iter().next() else {
            return Err(RemoteError::not_found(format!("bug {id}")));
        };

        let comments = self.comments(id).await?;
        Ok(Bug {
            id: payload.id,
            summary: payload.summary,
            creator: payload.creator,
            flags: payload
                .flags
                .into_iter()
                .map(|flag| BugFlag {
                    name: flag.name,
                    status: flag.status,
                    setter: flag.setter,
                })
                .collect(),
            comments,
        })
    }

    /// List open review bugs (NEW, ASSIGNED, NEEDINFO) for a component.
    ///
    /// # Errors
    ///
    /// Transport/API errors.
    pub async fn open_bugs(&self, component: &str) -> Result<Vec<OpenBug>, RemoteError> {
        let url = format!(
            "{}/rest/bug?component={}&bug_status=NEW&bug_status=ASSIGNED&bug_status=NEEDINFO\
             &include_fields=id,summary,creator,status",
            self.base,
            urlencoding::encode(component)
        );
        let resp = check_response(self.http.get(&url).send().await?).await?;
        let data: BugsResponse = resp.json().await?;
        Ok(data
            .bugs
            .into_iter()
            .map(|bug| OpenBug {
                id: bug.id,
                summary: bug.summary,
                status: bug.status,
            })
            .collect())
    }

    /// Post a comment on a bug. Requires a configured API key.
    ///
    /// # Errors
    ///
    /// [`RemoteError::Auth`] when the tracker rejects the API key;
    /// transport/API errors otherwise.
    pub async fn add_comment(&self, id: u64, comment: &str) -> Result<(), RemoteError> {
        let url = format!("{}/rest/bug/{id}/comment", self.base);
        let mut request = self
            .http
            .post(&url)
            .json(&serde_json::json!({ "comment": comment }));
        if let Some(key) = &self.api_key {
            request = request.header(API_KEY_HEADER, key);
        }
        check_response(request.send().await?).await?;
        Ok(())
    }

    async fn comments(&self, id: u64) -> Result<Vec<BugComment>, RemoteError> {
        let url = format!("{}/rest/bug/{id}/comment", self.base);
        let resp = check_response(self.http.get(&url).send().await?).await?;
        let data: CommentsResponse = resp.json().await?;
        Ok(data
            .bugs
            .get(&id.to_string())
            .map(|entry| {
                entry
                    .comments
                    .iter()
                    .map(|comment| BugComment {
                        author: comment.creator.clone(),
                    })
                    .collect()
            })
            .unwrap_or_default())
    }
}

#[async_trait]
impl BugTracker for BugzillaClient {
    async fn bug(&self, id: u64) -> Result<Bug, RemoteError> {
        Self::bug(self, id).await
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn raw_numeric_id() {
        assert_eq!(parse_bug_ref("1234").unwrap(), 1234);
        assert_eq!(parse_bug_ref("  1234 ").unwrap(), 1234);
    }

    #[test]
    fn id_query_parameter_wins() {
        assert_eq!(
            parse_bug_ref("https://bugzilla.redhat.com/show_bug.cgi?id=1234").unwrap(),
            1234
        );
        assert_eq!(
            parse_bug_ref("https://bugzilla.redhat.com/show_bug.cgi?id=1234&format=plain").unwrap(),
            1234
        );
    }

    #[test]
    fn final_path_segment_fallback() {
        assert_eq!(parse_bug_ref("https://tracker.example/ticket/987").unwrap(), 987);
    }

    #[test]
    fn garbage_is_rejected() {
        let err = parse_bug_ref("https://tracker.example/ticket/not-a-number").unwrap_err();
        assert!(matches!(err, RemoteError::InvalidBugRef(_)));
        assert!(parse_bug_ref("").is_err());
    }

    const BUG_FIXTURE: &str = r#"{
        "bugs": [
            {
                "id": 1234,
                "summary": "Review Request: guake - A drop-down terminal",
                "creator": "alice@example.com",
                "status": "ASSIGNED",
                "flags": [
                    {"name": "fedora-review", "status": "+", "setter": "bob@example.com"},
                    {"name": "needinfo", "status": "?", "setter": "alice@example.com"}
                ]
            }
        ]
    }"#;

    const COMMENTS_FIXTURE: &str = r#"{
        "bugs": {
            "1234": {
                "comments": [
                    {"creator": "alice@example.com"},
                    {"author": "bob@example.com"}
                ]
            }
        }
    }"#;

    #[test]
    fn parses_bug_payload() {
        let data: BugsResponse = serde_json::from_str(BUG_FIXTURE).unwrap();
        let bug = &data.bugs[0];
        assert_eq!(bug.id, 1234);
        assert_eq!(bug.creator, "alice@example.com");
        assert_eq!(bug.flags.len(), 2);
        assert_eq!(bug.flags[0].name, "fedora-review");
        assert_eq!(bug.flags[0].status, "+");
        assert_eq!(bug.flags[0].setter, "bob@example.com");
    }

    #[test]
    fn parses_comments_under_both_field_names() {
        let data: CommentsResponse = serde_json::from_str(COMMENTS_FIXTURE).unwrap();
        let entry = &data.bugs["1234"];
        let authors: Vec<&str> = entry
            .comments
            .iter()
            .map(|comment| comment.creator.as_str())
            .collect();
        assert_eq!(authors, vec!["alice@example.com", "bob@example.com"]);
    }

    #[test]
    fn missing_flags_default_to_empty() {
        let data: BugsResponse = serde_json::from_str(
            r#"{"bugs": [{"id": 7, "summary": "s", "creator": "c"}]}"#,
        )
        .unwrap();
        assert!(data.bugs[0].flags.is_empty());
        assert!(data.bugs[0].status.is_empty());
    }
}
