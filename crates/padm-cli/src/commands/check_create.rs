use padm_core::ReviewInfo;
use padm_remote::parse_bug_ref;

use crate::cli::{CheckCreateArgs, GlobalFlags};
use crate::context::AppContext;
use crate::output::print_report;

pub async fn run(
    args: &CheckCreateArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<bool> {
    let bug_id = parse_bug_ref(&args.bug)?;
    let info = ReviewInfo {
        pkg_name: args.pkg_name.clone(),
        pkg_summary: args.summary.clone(),
        pkg_collection: args.branch.clone(),
        pkg_poc: args.poc.clone(),
    };

    tracing::info!(package = %info.pkg_name, bug_id, "validating package creation");
    let report = padm_checks::check_package_creation(
        &ctx.bugzilla,
        &ctx.pkgdb,
        &ctx.fas,
        &ctx.feed,
        &info,
        bug_id,
    )
    .await?;

    print_report(&report, flags.format)?;
    Ok(!report.has_failures())
}
