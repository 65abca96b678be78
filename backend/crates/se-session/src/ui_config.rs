use serde::{Deserialize, Serialize};

/// Chrome the rendering engine should hide inside the embedded view
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiConfig {
    pub hide_title: bool,
    pub hide_tab: bool,
    pub hide_chart_controls: bool,
}

const HIDE_TITLE: u8 = 1;
const HIDE_TAB: u8 = 2;
const HIDE_CHART_CONTROLS: u8 = 8;

impl UiConfig {
    /// Bit set understood by the engine's `uiConfig` query parameter
    pub fn flags(&self) -> u8 {
        let mut flags = 0;
        if self.hide_title {
            flags |= HIDE_TITLE;
        }
        if self.hide_tab {
            flags |= HIDE_TAB;
        }
        if self.hide_chart_controls {
            flags |= HIDE_CHART_CONTROLS;
        }
        flags
    }
}
