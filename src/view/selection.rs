use serde::Serialize;

use crate::feature::FeatureRef;

/// Which feature, if any, drives the info panel, and whether its text is expanded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(tag = "state", content = "feature", rename_all = "lowercase")]
pub enum Selection {
    #[default]
    Idle,
    Selected(FeatureRef),
    Expanded(FeatureRef),
}

impl Selection {
    #[inline]
    pub fn feature(&self) -> Option<FeatureRef> {
        match *self {
            Selection::Idle => None,
            Selection::Selected(f) | Selection::Expanded(f) => Some(f),
        }
    }

    #[inline] pub fn is_expanded(&self) -> bool { matches!(self, Selection::Expanded(_)) }

    /// Select `feature` from any state. Expansion is always reset.
    pub fn click(&mut self, feature: FeatureRef) -> bool {
        let next = Selection::Selected(feature);
        let changed = *self != next;
        *self = next;
        changed
    }

    /// Expand the current selection if its text has more than the preview shows.
    pub fn expand(&mut self, expandable: bool) -> bool {
        match *self {
            Selection::Selected(f) if expandable => {
                *self = Selection::Expanded(f);
                true
            }
            _ => false,
        }
    }

    pub fn collapse(&mut self) -> bool {
        match *self {
            Selection::Expanded(f) => {
                *self = Selection::Selected(f);
                true
            }
            _ => false,
        }
    }

    /// Clear the selection from any state.
    pub fn close(&mut self) -> bool {
        let changed = *self != Selection::Idle;
        *self = Selection::Idle;
        changed
    }
}
