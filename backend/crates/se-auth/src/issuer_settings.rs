/// Everything the issuer needs besides the scope and the clock
#[derive(Clone)]
pub struct IssuerSettings {
    /// Pre-shared HS256 secret, also known to the rendering engine
    pub secret: Vec<u8>,
    /// Value of the `aud` claim; must match the engine's own base URL
    pub audience: String,
    /// Identifier of the embeddable view the credential unlocks
    pub resource_ref: String,
}

impl std::fmt::Debug for IssuerSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IssuerSettings")
            .field("secret", &"<redacted>")
            .field("audience", &self.audience)
            .field("resource_ref", &self.resource_ref)
            .finish()
    }
}
