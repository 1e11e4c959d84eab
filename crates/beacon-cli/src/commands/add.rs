use crate::cli::GlobalFlags;
use crate::cli::root_commands::AddArgs;
use crate::context::AppContext;
use crate::output::render_companies;
use crate::progress::Progress;

/// Handle `bcn add`.
pub async fn handle(args: &AddArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    ctx.directory.form().fill(args.draft());

    let spinner = Progress::spinner("Adding company");
    ctx.directory.add_company().await?;
    spinner.finish_clear();

    let state = ctx.directory.store().state();
    if state.loaded {
        println!("{}", render_companies(&state.companies, flags.format)?);
    }
    Ok(())
}
