//! Branch-eligibility check.

use padm_core::CheckReport;
use padm_remote::{FeedSource, IdentityService, PackageDatabase, RemoteError};

/// Validate a request to add `branch` to `pkg_name` on behalf of
/// `requester`.
///
/// With `new_pkg` set, the package-existence and branch-presence checks are
/// skipped: they are meaningless for a package that is yet to be created.
///
/// Check order, each appending to the report:
/// 1. package exists (unless `new_pkg`) — a missing package short-circuits,
///    returning only that finding;
/// 2. requested branch not already present;
/// 3. requester holds an approved packager role;
/// 4. for `el*`/`epel*` targets, absence from the enterprise OS feed for
///    the release named by the branch's final character.
///
/// # Errors
///
/// Transport failures from any service. Expected negative outcomes are
/// findings, not errors.
pub async fn check_branch_request(
    pkgdb: &impl PackageDatabase,
    identity: &impl IdentityService,
    feed: &impl FeedSource,
    pkg_name: &str,
    branch: &str,
    requester: &str,
    new_pkg: bool,
) -> Result<CheckReport, RemoteError> {
    let mut report = CheckReport::new();

    if !new_pkg {
        let info = match pkgdb.package(pkg_name).await {
            Ok(info) => info,
            Err(error) if error.is_not_found() => {
                // Deliberate early return: none of the remaining checks make
                // sense against a package the database does not know.
                report.push_bad(format!("Package {pkg_name} not found in pkgdb"));
                return Ok(report);
            }
            Err(error) => return Err(error),
        };

        if info.has_branch(branch) {
            report.push_bad(format!(
                "Package {pkg_name} already has the requested branch `{branch}`"
            ));
        }
    }

    if identity.is_packager(requester).await? {
        report.push_good(format!("Requester {requester} is a packager"));
    } else {
        report.push_bad(format!("Requester {requester} is not a packager"));
    }

    let lowered = branch.to_lowercase();
    if lowered.starts_with("el") || lowered.starts_with("epel") {
        if let Some(release) = branch.chars().last().map(String::from) {
            tracing::debug!(%release, "enterprise target, consulting OS feed");
            let snapshot = feed.snapshot(&release).await?;
            match snapshot.package(pkg_name) {
                Some(entry) => report.push_bad(format!(
                    "`{pkg_name}` is present in RHEL {release} with version: {} on arch: {}",
                    entry.version,
                    entry.arch_list()
                )),
                None => report.push_good(format!(
                    "`{pkg_name}` is *not* present in RHEL {release}"
                )),
            }
        }
    }

    Ok(report)
}
