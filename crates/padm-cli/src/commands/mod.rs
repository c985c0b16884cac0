pub mod bugs;
pub mod cache_clean;
pub mod check_branch;
pub mod check_create;
pub mod comment;
pub mod is_packager;

use crate::cli::{Commands, GlobalFlags};
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
///
/// Returns `false` when the command produced findings an administrator must
/// act on (the process then exits non-zero).
pub async fn dispatch(
    command: Commands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<bool> {
    match command {
        Commands::CheckCreate(args) => check_create::run(&args, ctx, flags).await,
        Commands::CheckBranch(args) => check_branch::run(&args, ctx, flags).await,
        Commands::IsPackager { user } => is_packager::run(&user, ctx, flags).await,
        Commands::Bugs { component } => bugs::run(&component, ctx, flags).await,
        Commands::Comment { bug, text } => comment::run(&bug, &text, ctx, flags).await,
        Commands::CacheClean => cache_clean::run(ctx, flags),
    }
}
