//! Stubbed identity provider. Sign-in resolves after a configured delay and
//! only then emits the navigation signal; the attempt is cancellable and
//! cancels on drop, so a dismissed login screen can no longer navigate a
//! disposed view.

use std::time::Duration;

use serde::Serialize;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

use crate::config::AuthConfig;

/// Where a completed login sends the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthRoute {
    Main,
    EmailLogin,
}

/// The boolean "authenticated" signal plus its navigation target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LoginOutcome {
    pub authenticated: bool,
    pub navigate_to: AuthRoute,
}

/// Fake OAuth provider with a fixed resolution delay.
#[derive(Debug, Clone)]
pub struct SimulatedAuthenticator {
    delay: Duration,
}

impl SimulatedAuthenticator {
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            delay: config.login_delay,
        }
    }

    pub fn with_delay(delay: Duration) -> Self {
        Self { delay }
    }

    /// Begin a sign-in. The returned attempt is tied to the caller's
    /// lifetime: dropping it aborts the timer and suppresses the signal.
    pub fn sign_in(&self) -> LoginAttempt {
        let (tx, rx) = oneshot::channel();
        let delay = self.delay;
        let task = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = tx.send(LoginOutcome {
                authenticated: true,
                navigate_to: AuthRoute::Main,
            });
        });
        LoginAttempt { task, signal: rx }
    }

    /// The e-mail path skips the timer entirely.
    pub fn email_sign_in_route(&self) -> AuthRoute {
        AuthRoute::EmailLogin
    }
}

/// An in-flight sign-in.
#[derive(Debug)]
pub struct LoginAttempt {
    task: JoinHandle<()>,
    signal: oneshot::Receiver<LoginOutcome>,
}

impl LoginAttempt {
    /// Abort the pending timer. Resolution after this yields no outcome.
    pub fn cancel(&self) {
        self.task.abort();
    }

    /// Wait for the outcome; `None` when the attempt was cancelled.
    pub async fn resolve(mut self) -> Option<LoginOutcome> {
        (&mut self.signal).await.ok()
    }
}

impl Drop for LoginAttempt {
    fn drop(&mut self) {
        self.task.abort();
    }
}
