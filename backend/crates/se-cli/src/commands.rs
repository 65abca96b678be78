use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// List the configured scopes
    Scopes,

    /// Fetch a guest credential for one scope
    Token {
        /// Scope id (validated by the server)
        scope_id: String,

        /// Subject name carried in the credential
        #[arg(long)]
        subject: Option<String>,
    },

    /// Switch the embedded view through each scope in turn
    Switch {
        /// Scope ids, in request order
        #[arg(required = true, num_args = 1..)]
        scope_ids: Vec<i64>,

        /// Fire all switches at once instead of waiting for each
        #[arg(long)]
        concurrent: bool,

        /// Pause between clearing and remounting, in milliseconds
        #[arg(long)]
        remount_delay_ms: Option<u64>,
    },

    /// Verify a credential with the locally configured secret
    Verify {
        /// Compact credential string
        token: String,
    },
}
