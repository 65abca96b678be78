mod embed;
mod session;

use std::env;

use tempfile::TempDir;

pub(crate) const VALID_SECRET: &str = "12345678901234567890123456789012";

/// RAII guard for environment variables - automatically restores on drop
pub(crate) struct EnvGuard {
    key: &'static str,
    original: Option<String>,
}

impl EnvGuard {
    pub(crate) fn set(key: &'static str, value: &str) -> Self {
        unsafe {
            let original = env::var(key).ok();
            env::set_var(key, value);
            Self { key, original }
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        unsafe {
            match &self.original {
                Some(val) => env::set_var(self.key, val),
                None => env::remove_var(self.key),
            }
        }
    }
}

/// Create a temp config directory and set SE_CONFIG_DIR
pub(crate) fn setup_config_dir() -> (TempDir, EnvGuard) {
    let temp = TempDir::new().unwrap();
    let guard = EnvGuard::set("SE_CONFIG_DIR", temp.path().to_str().unwrap());
    (temp, guard)
}

/// Set the values validation requires and that have no default
pub(crate) fn set_required_env() -> Vec<EnvGuard> {
    vec![
        EnvGuard::set("SE_AUTH_SIGNING_SECRET", VALID_SECRET),
        EnvGuard::set("SE_EMBED_DASHBOARD_ID", "12"),
        EnvGuard::set(
            "SE_EMBED_RESOURCE_REF",
            "7aaabc03-2c47-4540-8233-f22bbdb2cc81",
        ),
    ]
}
