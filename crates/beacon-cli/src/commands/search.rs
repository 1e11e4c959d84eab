use beacon_session::Outcome;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SearchArgs;
use crate::context::AppContext;
use crate::output::render_search;
use crate::progress::Progress;

/// Handle `bcn search`.
pub async fn handle(args: &SearchArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let session = ctx.directory.search();

    let spinner = Progress::spinner("Searching");
    let outcome = session.submit(&args.text()).await?;
    spinner.finish_clear();

    if outcome == Outcome::Skipped {
        return Ok(());
    }
    if let Some(result) = session.result() {
        println!("{}", render_search(&result, flags.format)?);
    }
    Ok(())
}
