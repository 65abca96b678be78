use crate::ToolkitResult;

use std::fmt;
use std::sync::Arc;

use futures::future::{BoxFuture, FutureExt};

type FetchFn = dyn Fn() -> BoxFuture<'static, ToolkitResult<String>> + Send + Sync;

/// Callback the toolkit uses to obtain the credential for a mount
#[derive(Clone)]
pub struct TokenFetcher {
    fetch: Arc<FetchFn>,
}

impl TokenFetcher {
    pub fn new<F>(fetch: F) -> Self
    where
        F: Fn() -> BoxFuture<'static, ToolkitResult<String>> + Send + Sync + 'static,
    {
        Self {
            fetch: Arc::new(fetch),
        }
    }

    /// Always resolves to the given, already obtained credential
    pub fn from_token(token: String) -> Self {
        let token: Arc<str> = Arc::from(token);
        Self::new(move || {
            let token = Arc::clone(&token);
            async move { Ok(token.to_string()) }.boxed()
        })
    }

    pub fn fetch(&self) -> BoxFuture<'static, ToolkitResult<String>> {
        (self.fetch)()
    }
}

impl fmt::Debug for TokenFetcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("TokenFetcher")
    }
}
