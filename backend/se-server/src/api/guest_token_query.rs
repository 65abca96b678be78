use serde::Deserialize;

/// Query string of `GET /scope/guest-token`.
///
/// `scope_id` stays a string so that a missing or malformed value becomes an
/// `INVALID_SCOPE` body. The handler maps query strings serde cannot decode at
/// all (a repeated `scopeId`, say) to the same body.
#[derive(Debug, Default, Deserialize)]
pub struct GuestTokenQuery {
    #[serde(rename = "scopeId")]
    pub scope_id: Option<String>,
    pub subject: Option<String>,
}
