use padm_remote::parse_bug_ref;

use crate::cli::GlobalFlags;
use crate::context::AppContext;

pub async fn run(
    bug: &str,
    text: &str,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<bool> {
    let bug_id = parse_bug_ref(bug)?;
    ctx.bugzilla.add_comment(bug_id, text).await?;
    if !flags.quiet {
        println!("commented on bug {bug_id}");
    }
    Ok(true)
}
