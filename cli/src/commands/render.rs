use anyhow::{bail, Result};
use tracing::info;
use vernamap::{SvgOptions, ViewEvent};

pub fn run(_cli: &crate::cli::Cli, args: &crate::cli::RenderArgs) -> Result<()> {
    let out_path = args.output.clone().unwrap_or("./map.svg".into());
    let mut view = super::open_view(&args.source, args.zoom)?;

    if let Some(name) = &args.select {
        let Some(id) = view.find_by_name(name) else { bail!("[render] no feature named {name:?}") };
        view.handle(ViewEvent::Click(id));
        if args.expand && !view.handle(ViewEvent::Expand).panel {
            info!("[render] {name:?} has no more text to expand");
        }
    }
    if args.about {
        view.handle(ViewEvent::ShowAbout);
    }

    info!("[render] writing snapshot at zoom {} to {}", view.zoom(), out_path.display());
    view.to_svg(&out_path, &SvgOptions { width: args.width, ..SvgOptions::default() })?;
    println!("{}", out_path.display());

    Ok(())
}
