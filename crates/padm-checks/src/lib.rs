//! # padm-checks
//!
//! The business rules an administrator runs before touching the package
//! database: branch-eligibility and package-creation validation.
//!
//! Both checks accumulate human-readable findings into a
//! [`padm_core::CheckReport`] and only raise errors for transport failures
//! and the package-not-found short circuit. Expected negative outcomes (a
//! non-packager requester, a branch conflict, a feed presence) are "bad"
//! entries, never errors.
//!
//! Checks are written against the service traits in [`padm_remote::traits`]
//! so tests run with in-memory stubs.

pub mod branch;
pub mod creation;

pub use branch::check_branch_request;
pub use creation::check_package_creation;
