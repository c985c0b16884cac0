use crate::cli::GlobalFlags;
use crate::context::AppContext;

pub fn run(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<bool> {
    let removed = padm_remote::prune_stale(&ctx.feed_cache_dir)?;
    if !flags.quiet {
        println!("removed {removed} stale feed cache file(s)");
    }
    Ok(true)
}
