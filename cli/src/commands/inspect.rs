use anyhow::{anyhow, Result};
use vernamap::ViewEvent;

pub fn run(_cli: &crate::cli::Cli, args: &crate::cli::InspectArgs) -> Result<()> {
    let mut view = super::open_view(&args.source, None)?;

    let id = view.find_by_name(&args.name)
        .ok_or_else(|| anyhow!("[inspect] no feature named {:?}", args.name))?;
    view.handle(ViewEvent::Click(id));
    if args.expand {
        view.handle(ViewEvent::Expand);
    }

    let panel = view.panel().ok_or_else(|| anyhow!("[inspect] {:?} cannot be selected", args.name))?;
    print!("{panel}");

    Ok(())
}
