//! Package-creation (review approval) check.

use padm_core::{CheckReport, ReviewInfo};
use padm_remote::{BugTracker, FeedSource, IdentityService, PackageDatabase, RemoteError};

use crate::branch::check_branch_request;

/// Flag whose `+` status records review approval.
const REVIEW_FLAG: &str = "fedora-review";

/// Validate that a review bug satisfies the criteria for creating the
/// package described by `info`.
///
/// Findings, in order:
/// 1. the bug title matches `Review Request: {name} - {summary}` exactly;
/// 2. every involved user (comment authors + creator) is a packager — one
///    "bad" entry per non-packager;
/// 3. the `fedora-review` flag is `+` and was set by a packager; a non-`+`
///    status is reported verbatim; a bug with no such flag produces no
///    approval finding at all;
/// 4. the branch-eligibility findings for the target collection, with the
///    package treated as new.
///
/// # Errors
///
/// Transport failures, or [`RemoteError::NotFound`] when the bug does not
/// exist.
pub async fn check_package_creation(
    bugs: &impl BugTracker,
    pkgdb: &impl PackageDatabase,
    identity: &impl IdentityService,
    feed: &impl FeedSource,
    info: &ReviewInfo,
    bug_id: u64,
) -> Result<CheckReport, RemoteError> {
    let mut report = CheckReport::new();

    let bug = bugs.bug(bug_id).await?;

    let expected = info.expected_bug_title();
    if bug.summary == expected {
        report.push_good(format!("Summary of bug {bug_id} is: {}", bug.summary));
    } else {
        report.push_bad(format!(
            "The bug title does not fit the expected one\n   exp: \"{expected}\" vs obs: \"{}\"",
            bug.summary
        ));
    }

    for user in bug.involved_users() {
        if !identity.is_packager(&user).await? {
            report.push_bad(format!("Non-packager {user} commented on review bug"));
        }
    }

    for flag in &bug.flags {
        if flag.name != REVIEW_FLAG {
            continue;
        }
        if flag.status == "+" {
            if identity.is_packager(&flag.setter).await? {
                report.push_good(format!("Review approved by packager {}", flag.setter));
            } else {
                report.push_bad(format!("Review approved by non-packager {}", flag.setter));
            }
        } else {
            report.push_bad(format!("Review not approved, flag set to: {}", flag.status));
        }
    }

    let branch_report = check_branch_request(
        pkgdb,
        identity,
        feed,
        &info.pkg_name,
        &info.pkg_collection,
        &info.pkg_poc,
        true,
    )
    .await?;
    report.merge(branch_report);

    Ok(report)
}
