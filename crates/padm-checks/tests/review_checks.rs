//! Behavior tests for the branch-eligibility and package-creation checks,
//! run against in-memory service stubs.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::Mutex;

use async_trait::async_trait;
use pretty_assertions::assert_eq;

use padm_checks::{check_branch_request, check_package_creation};
use padm_core::{
    Bug, BugComment, BugFlag, FeedPackage, FeedSnapshot, PackageInfo, ReviewInfo,
};
use padm_remote::{BugTracker, FeedSource, IdentityService, PackageDatabase, RemoteError};

// ── Stub services ──────────────────────────────────────────────────

struct StubPkgDb {
    info: Option<PackageInfo>,
    calls: Mutex<Vec<String>>,
}

impl StubPkgDb {
    fn knows(info: PackageInfo) -> Self {
        Self {
            info: Some(info),
            calls: Mutex::new(Vec::new()),
        }
    }

    fn empty() -> Self {
        Self {
            info: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    fn lookups(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl PackageDatabase for StubPkgDb {
    async fn package(&self, name: &str) -> Result<PackageInfo, RemoteError> {
        self.calls.lock().unwrap().push(name.to_string());
        self.info.clone().ok_or(RemoteError::NotFound {
            resource: format!("package {name}"),
        })
    }
}

struct StubIdentity {
    packagers: BTreeSet<String>,
    calls: Mutex<Vec<String>>,
}

impl StubIdentity {
    fn packagers(users: &[&str]) -> Self {
        Self {
            packagers: users.iter().map(ToString::to_string).collect(),
            calls: Mutex::new(Vec::new()),
        }
    }

    fn lookups(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl IdentityService for StubIdentity {
    async fn is_packager(&self, user: &str) -> Result<bool, RemoteError> {
        self.calls.lock().unwrap().push(user.to_string());
        Ok(self.packagers.contains(user))
    }
}

struct StubBugs {
    bug: Bug,
}

#[async_trait]
impl BugTracker for StubBugs {
    async fn bug(&self, _id: u64) -> Result<Bug, RemoteError> {
        Ok(self.bug.clone())
    }
}

struct StubFeed {
    packages: BTreeMap<String, FeedPackage>,
    requested: Mutex<Vec<String>>,
}

impl StubFeed {
    fn empty() -> Self {
        Self {
            packages: BTreeMap::new(),
            requested: Mutex::new(Vec::new()),
        }
    }

    fn with(name: &str, version: &str, arches: &[&str]) -> Self {
        let mut packages = BTreeMap::new();
        packages.insert(
            name.to_string(),
            FeedPackage {
                version: version.to_string(),
                arch: arches.iter().map(ToString::to_string).collect(),
            },
        );
        Self {
            packages,
            requested: Mutex::new(Vec::new()),
        }
    }

    fn requested_releases(&self) -> Vec<String> {
        self.requested.lock().unwrap().clone()
    }
}

#[async_trait]
impl FeedSource for StubFeed {
    async fn snapshot(&self, release: &str) -> Result<FeedSnapshot, RemoteError> {
        self.requested.lock().unwrap().push(release.to_string());
        Ok(FeedSnapshot {
            packages: self.packages.clone(),
        })
    }
}

// ── Fixtures ───────────────────────────────────────────────────────

fn review_info(branch: &str) -> ReviewInfo {
    ReviewInfo {
        pkg_name: "guake".to_string(),
        pkg_summary: "A drop-down terminal".to_string(),
        pkg_collection: branch.to_string(),
        pkg_poc: "alice".to_string(),
    }
}

fn review_bug(summary: &str, flags: Vec<BugFlag>, authors: &[&str]) -> Bug {
    Bug {
        id: 1234,
        summary: summary.to_string(),
        creator: "alice@example.com".to_string(),
        flags,
        comments: authors
            .iter()
            .map(|author| BugComment {
                author: (*author).to_string(),
            })
            .collect(),
    }
}

fn approved_flag(setter: &str) -> BugFlag {
    BugFlag {
        name: "fedora-review".to_string(),
        status: "+".to_string(),
        setter: setter.to_string(),
    }
}

const EVERYONE: &[&str] = &["alice", "alice@example.com", "bob@example.com"];

// ── Package-creation checks ────────────────────────────────────────

#[tokio::test]
async fn matching_title_yields_one_good_summary_entry() {
    let bugs = StubBugs {
        bug: review_bug("Review Request: guake - A drop-down terminal", vec![], &[]),
    };
    let identity = StubIdentity::packagers(EVERYONE);

    let report = check_package_creation(
        &bugs,
        &StubPkgDb::empty(),
        &identity,
        &StubFeed::empty(),
        &review_info("f30"),
        1234,
    )
    .await
    .expect("check runs");

    let summary_entries: Vec<&String> = report
        .good
        .iter()
        .filter(|entry| entry.starts_with("Summary of bug"))
        .collect();
    assert_eq!(summary_entries.len(), 1);
    assert_eq!(
        *summary_entries[0],
        "Summary of bug 1234 is: Review Request: guake - A drop-down terminal"
    );
    assert!(!report.bad.iter().any(|entry| entry.contains("bug title")));
}

#[tokio::test]
async fn mismatched_title_names_expected_and_observed() {
    let bugs = StubBugs {
        bug: review_bug("Review Request: guake - Something else", vec![], &[]),
    };
    let identity = StubIdentity::packagers(EVERYONE);

    let report = check_package_creation(
        &bugs,
        &StubPkgDb::empty(),
        &identity,
        &StubFeed::empty(),
        &review_info("f30"),
        1234,
    )
    .await
    .expect("check runs");

    let title_entries: Vec<&String> = report
        .bad
        .iter()
        .filter(|entry| entry.contains("bug title"))
        .collect();
    assert_eq!(title_entries.len(), 1);
    assert!(title_entries[0].contains("Review Request: guake - A drop-down terminal"));
    assert!(title_entries[0].contains("Review Request: guake - Something else"));
}

#[tokio::test]
async fn non_packager_participants_are_each_reported() {
    let bugs = StubBugs {
        bug: review_bug(
            "Review Request: guake - A drop-down terminal",
            vec![],
            &["bob@example.com", "mallory@example.com"],
        ),
    };
    // mallory (commenter) and the creator alice@example.com are not packagers
    let identity = StubIdentity::packagers(&["alice", "bob@example.com"]);

    let report = check_package_creation(
        &bugs,
        &StubPkgDb::empty(),
        &identity,
        &StubFeed::empty(),
        &review_info("f30"),
        1234,
    )
    .await
    .expect("check runs");

    let offenders: Vec<&String> = report
        .bad
        .iter()
        .filter(|entry| entry.contains("commented on review bug"))
        .collect();
    assert_eq!(offenders.len(), 2);
    assert!(offenders.iter().any(|entry| entry.contains("alice@example.com")));
    assert!(offenders.iter().any(|entry| entry.contains("mallory@example.com")));
}

#[tokio::test]
async fn approval_by_packager_is_good() {
    let bugs = StubBugs {
        bug: review_bug(
            "Review Request: guake - A drop-down terminal",
            vec![approved_flag("bob@example.com")],
            &[],
        ),
    };
    let identity = StubIdentity::packagers(EVERYONE);

    let report = check_package_creation(
        &bugs,
        &StubPkgDb::empty(),
        &identity,
        &StubFeed::empty(),
        &review_info("f30"),
        1234,
    )
    .await
    .expect("check runs");

    let approvals: Vec<&String> = report
        .good
        .iter()
        .filter(|entry| entry.contains("Review approved"))
        .collect();
    assert_eq!(approvals.len(), 1);
    assert_eq!(*approvals[0], "Review approved by packager bob@example.com");
}

#[tokio::test]
async fn approval_by_non_packager_is_bad() {
    let bugs = StubBugs {
        bug: review_bug(
            "Review Request: guake - A drop-down terminal",
            vec![approved_flag("mallory@example.com")],
            &[],
        ),
    };
    let identity = StubIdentity::packagers(EVERYONE);

    let report = check_package_creation(
        &bugs,
        &StubPkgDb::empty(),
        &identity,
        &StubFeed::empty(),
        &review_info("f30"),
        1234,
    )
    .await
    .expect("check runs");

    assert_eq!(
        report
            .bad
            .iter()
            .filter(|entry| **entry == "Review approved by non-packager mallory@example.com")
            .count(),
        1
    );
}

#[tokio::test]
async fn unapproved_flag_status_is_quoted_verbatim() {
    let mut flag = approved_flag("bob@example.com");
    flag.status = "?".to_string();
    let bugs = StubBugs {
        bug: review_bug("Review Request: guake - A drop-down terminal", vec![flag], &[]),
    };
    let identity = StubIdentity::packagers(EVERYONE);

    let report = check_package_creation(
        &bugs,
        &StubPkgDb::empty(),
        &identity,
        &StubFeed::empty(),
        &review_info("f30"),
        1234,
    )
    .await
    .expect("check runs");

    assert_eq!(
        report
            .bad
            .iter()
            .filter(|entry| **entry == "Review not approved, flag set to: ?")
            .count(),
        1
    );
}

#[tokio::test]
async fn missing_review_flag_produces_no_approval_finding() {
    let bugs = StubBugs {
        bug: review_bug("Review Request: guake - A drop-down terminal", vec![], &[]),
    };
    let identity = StubIdentity::packagers(EVERYONE);

    let report = check_package_creation(
        &bugs,
        &StubPkgDb::empty(),
        &identity,
        &StubFeed::empty(),
        &review_info("f30"),
        1234,
    )
    .await
    .expect("check runs");

    assert!(!report.good.iter().any(|entry| entry.contains("Review approved")));
    assert!(!report.bad.iter().any(|entry| entry.contains("Review")));
}

#[tokio::test]
async fn creation_treats_package_as_new() {
    let bugs = StubBugs {
        bug: review_bug("Review Request: guake - A drop-down terminal", vec![], &[]),
    };
    let identity = StubIdentity::packagers(EVERYONE);
    let pkgdb = StubPkgDb::empty();

    let report = check_package_creation(
        &bugs,
        &pkgdb,
        &identity,
        &StubFeed::empty(),
        &review_info("f30"),
        1234,
    )
    .await
    .expect("check runs");

    // new_pkg skips the existence lookup entirely
    assert!(pkgdb.lookups().is_empty());
    assert!(report.good.iter().any(|entry| entry == "Requester alice is a packager"));
}

// ── Branch-eligibility checks ──────────────────────────────────────

fn existing_package(branches: &[&str]) -> PackageInfo {
    PackageInfo {
        name: "guake".to_string(),
        branches: branches.iter().map(ToString::to_string).collect(),
    }
}

#[tokio::test]
async fn requesting_an_existing_branch_is_reported() {
    let pkgdb = StubPkgDb::knows(existing_package(&["master", "f30"]));
    let identity = StubIdentity::packagers(&["alice"]);
    let feed = StubFeed::empty();

    let report = check_branch_request(&pkgdb, &identity, &feed, "guake", "f30", "alice", false)
        .await
        .expect("check runs");

    let conflicts: Vec<&String> = report
        .bad
        .iter()
        .filter(|entry| entry.contains("already has the requested branch"))
        .collect();
    assert_eq!(conflicts.len(), 1);
    assert!(conflicts[0].contains("guake"));
    assert!(conflicts[0].contains("`f30`"));
}

#[tokio::test]
async fn requesting_a_new_branch_passes() {
    let pkgdb = StubPkgDb::knows(existing_package(&["master", "f30"]));
    let identity = StubIdentity::packagers(&["alice"]);
    let feed = StubFeed::empty();

    let report = check_branch_request(&pkgdb, &identity, &feed, "guake", "f31", "alice", false)
        .await
        .expect("check runs");

    assert!(!report.bad.iter().any(|entry| entry.contains("already has")));
    assert_eq!(report.good, vec!["Requester alice is a packager"]);
}

#[tokio::test]
async fn non_packager_requester_is_reported() {
    let pkgdb = StubPkgDb::knows(existing_package(&["master"]));
    let identity = StubIdentity::packagers(&[]);
    let feed = StubFeed::empty();

    let report = check_branch_request(&pkgdb, &identity, &feed, "guake", "f31", "mallory", false)
        .await
        .expect("check runs");

    assert_eq!(report.bad, vec!["Requester mallory is not a packager"]);
}

#[tokio::test]
async fn enterprise_branch_consults_the_feed_for_its_release() {
    let pkgdb = StubPkgDb::knows(existing_package(&["master"]));
    let identity = StubIdentity::packagers(&["alice"]);
    let feed = StubFeed::empty();

    let report = check_branch_request(&pkgdb, &identity, &feed, "mypkg", "el7", "alice", false)
        .await
        .expect("check runs");

    assert_eq!(feed.requested_releases(), vec!["7"]);
    assert!(report.good.iter().any(|entry| entry == "`mypkg` is *not* present in RHEL 7"));
}

#[tokio::test]
async fn epel_branch_is_also_an_enterprise_target() {
    let pkgdb = StubPkgDb::knows(existing_package(&["master"]));
    let identity = StubIdentity::packagers(&["alice"]);
    let feed = StubFeed::empty();

    check_branch_request(&pkgdb, &identity, &feed, "mypkg", "EPEL8", "alice", false)
        .await
        .expect("check runs");

    assert_eq!(feed.requested_releases(), vec!["8"]);
}

#[tokio::test]
async fn feed_conflict_quotes_version_and_arches() {
    let pkgdb = StubPkgDb::knows(existing_package(&["master"]));
    let identity = StubIdentity::packagers(&["alice"]);
    let feed = StubFeed::with("mypkg", "1.2.3", &["x86_64", "ppc64le"]);

    let report = check_branch_request(&pkgdb, &identity, &feed, "mypkg", "el7", "alice", false)
        .await
        .expect("check runs");

    assert_eq!(
        report
            .bad
            .iter()
            .filter(|entry| **entry
                == "`mypkg` is present in RHEL 7 with version: 1.2.3 on arch: x86_64, ppc64le")
            .count(),
        1
    );
}

#[tokio::test]
async fn non_enterprise_branch_never_touches_the_feed() {
    let pkgdb = StubPkgDb::knows(existing_package(&["master"]));
    let identity = StubIdentity::packagers(&["alice"]);
    let feed = StubFeed::with("guake", "1.0", &["x86_64"]);

    let report = check_branch_request(&pkgdb, &identity, &feed, "guake", "f31", "alice", false)
        .await
        .expect("check runs");

    assert!(feed.requested_releases().is_empty());
    assert!(!report.bad.iter().any(|entry| entry.contains("RHEL")));
}

#[tokio::test]
async fn unknown_package_short_circuits_all_other_checks() {
    let pkgdb = StubPkgDb::empty();
    let identity = StubIdentity::packagers(&["alice"]);
    let feed = StubFeed::empty();

    let report = check_branch_request(&pkgdb, &identity, &feed, "ghost", "el7", "alice", false)
        .await
        .expect("check runs");

    assert_eq!(report.bad, vec!["Package ghost not found in pkgdb"]);
    assert!(report.good.is_empty());
    assert!(identity.lookups().is_empty());
    assert!(feed.requested_releases().is_empty());
}

#[tokio::test]
async fn new_package_skips_existence_and_branch_checks() {
    let pkgdb = StubPkgDb::empty();
    let identity = StubIdentity::packagers(&["alice"]);
    let feed = StubFeed::empty();

    let report = check_branch_request(&pkgdb, &identity, &feed, "brandnew", "f31", "alice", true)
        .await
        .expect("check runs");

    assert!(pkgdb.lookups().is_empty());
    assert_eq!(report.good, vec!["Requester alice is a packager"]);
    assert!(report.bad.is_empty());
}
