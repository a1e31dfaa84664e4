//! State

use std::sync::Arc;

use gearlock_app::context::AppContext;

use crate::config::session::SessionConfig;

/// How the customer session cookie is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SessionCookie {
    pub(crate) name: String,
    pub(crate) secure: bool,
}

impl Default for SessionCookie {
    fn default() -> Self {
        Self {
            name: "gearlock_session".to_string(),
            secure: false,
        }
    }
}

impl From<&SessionConfig> for SessionCookie {
    fn from(config: &SessionConfig) -> Self {
        Self {
            name: config.session_cookie_name.clone(),
            secure: config.session_cookie_secure,
        }
    }
}

#[derive(Clone)]
pub(crate) struct State {
    pub(crate) app: AppContext,
    pub(crate) session_cookie: SessionCookie,
}

impl State {
    #[must_use]
    pub(crate) fn new(app: AppContext, session_cookie: SessionCookie) -> Self {
        Self {
            app,
            session_cookie,
        }
    }

    #[must_use]
    pub(crate) fn from_app_context(app: AppContext, session_cookie: SessionCookie) -> Arc<Self> {
        Arc::new(Self::new(app, session_cookie))
    }
}
