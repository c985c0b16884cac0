//! Package database client.

use async_trait::async_trait;
use padm_core::PackageInfo;

use crate::error::RemoteError;
use crate::http::check_response;
use crate::traits::PackageDatabase;

#[derive(serde::Deserialize)]
struct PackageResponse {
    output: String,
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    packages: Vec<PackagePayload>,
}

#[derive(serde::Deserialize)]
struct PackagePayload {
    collection: CollectionPayload,
}

#[derive(serde::Deserialize)]
struct CollectionPayload {
    branchname: String,
}

impl PackageResponse {
    fn into_package_info(self, name: &str) -> Result<PackageInfo, RemoteError> {
        if self.output != "ok" {
            tracing::debug!(
                package = name,
                error = self.error.as_deref().unwrap_or("unspecified"),
                "package database rejected the lookup"
            );
            return Err(RemoteError::not_found(format!("package {name}")));
        }
        Ok(PackageInfo {
            name: name.to_string(),
            branches: self
                .packages
                .into_iter()
                .map(|pkg| pkg.collection.branchname)
                .collect(),
        })
    }
}

/// HTTP client for the package database read API.
pub struct PkgDbClient {
    http: reqwest::Client,
    base: String,
}

impl PkgDbClient {
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        Self {
            http: crate::build_http_client(),
            base: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Fetch a package record by name.
    ///
    /// # Errors
    ///
    /// [`RemoteError::NotFound`] when the database does not know the
    /// package; [`RemoteError`] transport/API variants otherwise.
    pub async fn package(&self, name: &str) -> Result<PackageInfo, RemoteError> {
        let url = format!(
            "{}/api/package/?pkgname={}",
            self.base,
            urlencoding::encode(name)
        );
        let resp = self.http.get(&url).send().await?;
        if resp.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(RemoteError::not_found(format!("package {name}")));
        }
        let resp = check_response(resp).await?;
        let data: PackageResponse = resp.json().await?;
        data.into_package_info(name)
    }
}

#[async_trait]
impl PackageDatabase for PkgDbClient {
    async fn package(&self, name: &str) -> Result<PackageInfo, RemoteError> {
        Self::package(self, name).await
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const FIXTURE: &str = r#"{
        "output": "ok",
        "packages": [
            {"collection": {"branchname": "master"}, "status": "Approved"},
            {"collection": {"branchname": "f30"}, "status": "Approved"},
            {"collection": {"branchname": "el7"}, "status": "Approved"}
        ]
    }"#;

    const NOT_FOUND_FIXTURE: &str = r#"{
        "output": "notok",
        "error": "No package of this name found."
    }"#;

    #[test]
    fn maps_branches_from_collections() {
        let data: PackageResponse = serde_json::from_str(FIXTURE).unwrap();
        let info = data.into_package_info("guake").expect("package maps");
        assert_eq!(info.name, "guake");
        assert_eq!(info.branches, vec!["master", "f30", "el7"]);
        assert!(info.has_branch("f30"));
    }

    #[test]
    fn notok_output_is_not_found() {
        let data: PackageResponse = serde_json::from_str(NOT_FOUND_FIXTURE).unwrap();
        let err = data.into_package_info("nosuchpkg").unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "package nosuchpkg not found");
    }

    #[test]
    fn empty_package_list_still_maps() {
        let data: PackageResponse =
            serde_json::from_str(r#"{"output": "ok", "packages": []}"#).unwrap();
        let info = data.into_package_info("orphaned").expect("package maps");
        assert!(info.branches.is_empty());
    }
}
