use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(component: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<bool> {
    let bugs = ctx.bugzilla.open_bugs(component).await?;
    if bugs.is_empty() && !flags.quiet {
        eprintln!("no open review bugs for component {component}");
    }
    output(&bugs, flags.format)?;
    Ok(true)
}
