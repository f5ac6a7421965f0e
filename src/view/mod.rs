mod event;
mod io;
mod panel;
pub mod preview;
mod selection;
mod view;

pub use event::{Changes, ViewEvent};
pub use io::SvgOptions;
pub use panel::{PanelControl, PanelView, Tooltip, TooltipDirection};
pub use selection::Selection;
pub use view::{MapView, StyledFeature};
