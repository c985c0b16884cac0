//! Input describing a package-review request.

use serde::{Deserialize, Serialize};

/// The metadata an administrator supplies when validating a new-package
/// review: what the package is, where it should land, and who maintains it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewInfo {
    /// Package name under review.
    pub pkg_name: String,
    /// One-line package summary; must match the review bug title.
    pub pkg_summary: String,
    /// Target collection branch (e.g. `f30`, `el7`).
    pub pkg_collection: String,
    /// Requested point of contact (username or email).
    pub pkg_poc: String,
}

impl ReviewInfo {
    /// The exact bug title a well-formed review request carries.
    #[must_use]
    pub fn expected_bug_title(&self) -> String {
        format!("Review Request: {} - {}", self.pkg_name, self.pkg_summary)
    }
}

#[cfg(test)]
mod tests {
    use super::ReviewInfo;

    #[test]
    fn expected_title_template() {
        let info = ReviewInfo {
            pkg_name: "guake".to_string(),
            pkg_summary: "A drop-down terminal".to_string(),
            pkg_collection: "f30".to_string(),
            pkg_poc: "alice".to_string(),
        };
        assert_eq!(
            info.expected_bug_title(),
            "Review Request: guake - A drop-down terminal"
        );
    }
}
