//! Session Config

use clap::Args;

/// Customer session cookie settings.
#[derive(Debug, Args)]
pub struct SessionConfig {
    /// Name of the cookie carrying the session id
    #[arg(long, env = "SESSION_COOKIE_NAME", default_value = "gearlock_session")]
    pub session_cookie_name: String,

    /// Only send the session cookie over HTTPS
    #[arg(long, env = "SESSION_COOKIE_SECURE", default_value_t = false)]
    pub session_cookie_secure: bool,
}
