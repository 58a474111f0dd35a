//! Collapse/expand state machine for the panel body.

/// Visual state of the panel body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelVisibility {
    Expanded,
    Collapsed,
}

/// Owns the collapse state together with the capability flag gating it.
///
/// A capability-flag transition force-resets the state to `Expanded`: content
/// collapsed while collapsing was allowed must never stay unreachable after
/// the capability goes away.
#[derive(Debug, Clone)]
pub struct VisibilityController {
    allow_collapse: bool,
    state: PanelVisibility,
}

impl VisibilityController {
    /// Content starts visible regardless of the capability flag.
    pub fn new(allow_collapse: bool) -> Self {
        Self {
            allow_collapse,
            state: PanelVisibility::Expanded,
        }
    }

    pub fn allow_collapse(&self) -> bool {
        self.allow_collapse
    }

    pub fn state(&self) -> PanelVisibility {
        self.state
    }

    pub fn is_expanded(&self) -> bool {
        self.state == PanelVisibility::Expanded
    }

    /// Re-seeds the machine when the capability flag changes. Same-value
    /// writes leave the current state untouched.
    pub fn set_allow_collapse(&mut self, allow_collapse: bool) {
        if self.allow_collapse == allow_collapse {
            return;
        }
        self.allow_collapse = allow_collapse;
        self.state = PanelVisibility::Expanded;
    }

    /// User toggle request; ignored while the capability is disabled.
    pub fn toggle(&mut self) {
        if !self.allow_collapse {
            return;
        }
        self.state = match self.state {
            PanelVisibility::Expanded => PanelVisibility::Collapsed,
            PanelVisibility::Collapsed => PanelVisibility::Expanded,
        };
    }
}
