use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct PackagerStatus {
    user: String,
    packager: bool,
}

pub async fn run(user: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<bool> {
    let packager = ctx.fas.is_packager(user).await?;
    output(
        &PackagerStatus {
            user: user.to_string(),
            packager,
        },
        flags.format,
    )?;
    Ok(packager)
}
