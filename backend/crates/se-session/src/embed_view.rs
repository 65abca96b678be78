use crate::UiConfig;

use std::fmt;

/// What a mounted view looks like from the mount target's side
#[derive(Clone, PartialEq, Eq)]
pub struct EmbedView {
    /// Frame source: `{engine_url}/embedded/{resource_ref}?uiConfig={flags}`
    pub src: String,
    pub resource_ref: String,
    /// Credential handed to the frame; never printed by `Debug`
    pub guest_token: String,
}

impl EmbedView {
    pub fn new(engine_url: &str, resource_ref: &str, ui: UiConfig, guest_token: String) -> Self {
        Self {
            src: format!(
                "{}/embedded/{}?uiConfig={}",
                engine_url.trim_end_matches('/'),
                resource_ref,
                ui.flags()
            ),
            resource_ref: resource_ref.to_string(),
            guest_token,
        }
    }
}

impl fmt::Debug for EmbedView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EmbedView")
            .field("src", &self.src)
            .field("resource_ref", &self.resource_ref)
            .field("guest_token", &"<redacted>")
            .finish()
    }
}
