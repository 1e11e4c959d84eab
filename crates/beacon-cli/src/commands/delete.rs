use crate::cli::GlobalFlags;
use crate::cli::root_commands::DeleteArgs;
use crate::context::AppContext;
use crate::output::render_companies;
use crate::progress::Progress;

/// Handle `bcn delete`.
pub async fn handle(args: &DeleteArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let spinner = Progress::spinner("Deleting company");
    ctx.directory.store().remove_input(&args.id).await?;
    spinner.finish_clear();

    let state = ctx.directory.store().state();
    if state.loaded {
        println!("{}", render_companies(&state.companies, flags.format)?);
    }
    Ok(())
}
