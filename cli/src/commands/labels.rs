use anyhow::Result;
use tracing::info;

pub fn run(_cli: &crate::cli::Cli, args: &crate::cli::LabelsArgs) -> Result<()> {
    let view = super::open_view(&args.source, args.zoom)?;

    for label in view.labels().labels() {
        println!("{}\t{:.3} km²\t{:.5},{:.5}", label.text, label.area_m2 / 1e6, label.anchor.y(), label.anchor.x());
    }
    info!("[labels] {} labels at zoom {}", view.labels().len(), view.zoom());

    Ok(())
}
