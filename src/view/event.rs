use std::ops::{BitOr, BitOrAssign};

use anyhow::Result;

use crate::feature::{FeatureCollection, FeatureRef, LayerKind};

/// Everything that can change the view after construction.
#[derive(Debug)]
pub enum ViewEvent {
    /// One-shot completion of a layer load; errors leave the layer absent.
    Loaded(LayerKind, Result<FeatureCollection>),
    ZoomChanged(f64),
    Click(FeatureRef),
    Expand,
    Collapse,
    Close,
    ShowAbout,
    HideAbout,
}

/// Which parts of the view an event touched, so a surface can redraw only those.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Changes {
    pub layers: bool,
    pub labels: bool,
    pub panel: bool,
    pub about: bool,
}

impl Changes {
    pub const NONE: Changes = Changes { layers: false, labels: false, panel: false, about: false };

    #[inline]
    pub fn any(&self) -> bool { self.layers || self.labels || self.panel || self.about }
}

impl BitOr for Changes {
    type Output = Changes;

    fn bitor(self, rhs: Changes) -> Changes {
        Changes {
            layers: self.layers || rhs.layers,
            labels: self.labels || rhs.labels,
            panel: self.panel || rhs.panel,
            about: self.about || rhs.about,
        }
    }
}

impl BitOrAssign for Changes {
    fn bitor_assign(&mut self, rhs: Changes) { *self = *self | rhs }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn changes_merge_field_by_field() {
        let layers = Changes { layers: true, ..Changes::NONE };
        let panel = Changes { panel: true, ..Changes::NONE };
        let merged = layers | panel;
        assert!(merged.layers && merged.panel);
        assert!(!merged.labels && !merged.about);

        let mut acc = Changes::NONE;
        acc |= Changes::NONE;
        assert!(!acc.any());
        acc |= panel;
        assert_eq!(acc, panel);
    }
}
