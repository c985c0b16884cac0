//! # padm-core
//!
//! Shared domain types for the pkgdb-admin review checks:
//! - the good/bad check report accumulator,
//! - read-only views of remote records (bug, identity, package, feed),
//! - the review-request input structure.
//!
//! Remote clients live in `padm-remote`; the business rules that consume
//! these types live in `padm-checks`.

pub mod bug;
pub mod feed;
pub mod identity;
pub mod package;
pub mod report;
pub mod review;

pub use bug::{Bug, BugComment, BugFlag, OpenBug};
pub use feed::{FeedPackage, FeedSnapshot};
pub use identity::{Person, RoleMembership};
pub use package::PackageInfo;
pub use report::CheckReport;
pub use review::ReviewInfo;
