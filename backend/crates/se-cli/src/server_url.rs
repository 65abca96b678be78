use crate::DEFAULT_SERVER_URL;

use se_config::Config;

/// Where the server listens according to configuration
pub fn server_url_from(config: &Config) -> String {
    let port = config.server.port;
    match config.server.host.as_str() {
        // An OS-assigned port cannot be known from here
        _ if port == 0 => DEFAULT_SERVER_URL.to_string(),
        // A wildcard bind is reachable on loopback
        "0.0.0.0" | "::" => format!("http://127.0.0.1:{port}"),
        host => format!("http://{host}:{port}"),
    }
}
