
use crate::{CredentialIssuer, IssuerSettings};

pub(crate) const TEST_SECRET: &[u8] = b"test-secret-key-at-least-32-bytes";
pub(crate) const TEST_AUDIENCE: &str = "http://superset:8088/";
pub(crate) const TEST_RESOURCE: &str = "7aaabc03-2c47-4540-8233-f22bbdb2cc81";

pub(crate) fn test_issuer() -> CredentialIssuer {
    CredentialIssuer::new(IssuerSettings {
        secret: TEST_SECRET.to_vec(),
        audience: TEST_AUDIENCE.to_string(),
        resource_ref: TEST_RESOURCE.to_string(),
    })
    .unwrap()
}
