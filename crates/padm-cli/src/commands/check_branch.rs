use crate::cli::{CheckBranchArgs, GlobalFlags};
use crate::context::AppContext;
use crate::output::print_report;

pub async fn run(
    args: &CheckBranchArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<bool> {
    tracing::info!(
        package = %args.pkg_name,
        branch = %args.branch,
        "validating branch request"
    );
    let report = padm_checks::check_branch_request(
        &ctx.pkgdb,
        &ctx.fas,
        &ctx.feed,
        &args.pkg_name,
        &args.branch,
        &args.requester,
        false,
    )
    .await?;

    print_report(&report, flags.format)?;
    Ok(!report.has_failures())
}
