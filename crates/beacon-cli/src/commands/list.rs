use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::render_companies;
use crate::progress::Progress;

/// Handle `bcn list`.
pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let spinner = Progress::spinner("Loading companies");
    ctx.directory.open().await?;
    spinner.finish_clear();

    println!("{}", render_companies(&ctx.directory.store().snapshot(), flags.format)?);
    Ok(())
}
