//! Expiry-driven token refresh coordination.

use std::sync::Arc;

use alumnet_domain::{CredentialPair, TokenClaims, is_expired};
use tokio::sync::Mutex;

use crate::ports::{Clock, CredentialStore, TokenRefresher};

/// Session state for status displays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionStatus {
    /// No credential pair stored.
    Unauthenticated,
    /// Access token valid beyond the refresh margin.
    Active {
        /// Seconds until the token expires.
        expires_in_secs: i64,
    },
    /// Access token expired or inside the refresh margin; the next
    /// authenticated call will attempt a refresh.
    Expired,
}

/// The refresh coordinator.
///
/// Owns the check-then-refresh sequence over the credential store. All
/// concurrent callers of [`AuthSession::access_token`] during an expired
/// window funnel through one async mutex, so at most one network refresh is
/// ever in flight and every caller observes the same outcome: the new
/// access token, or `None` after the store was cleared.
///
/// Refresh failure is terminal for the attempt: credentials are cleared,
/// forcing re-login; there is no automatic retry. The guard is released
/// when the attempt settles, so a later expiry starts a fresh attempt.
pub struct AuthSession<S, R, C> {
    store: Arc<S>,
    refresher: R,
    clock: C,
    refresh_gate: Mutex<()>,
}

impl<S, R, C> AuthSession<S, R, C>
where
    S: CredentialStore,
    R: TokenRefresher,
    C: Clock,
{
    /// Creates a session over the given store, refresher, and clock.
    pub fn new(store: Arc<S>, refresher: R, clock: C) -> Self {
        Self {
            store,
            refresher,
            clock,
            refresh_gate: Mutex::new(()),
        }
    }

    /// Returns a valid access token, refreshing it if needed.
    ///
    /// `None` means the caller is unauthenticated: nothing stored, or the
    /// refresh attempt failed and the store was cleared.
    pub async fn access_token(&self) -> Option<String> {
        let pair = self.load_pair().await?;
        if !is_expired(&pair.access_token, self.clock.now_ms()) {
            return Some(pair.access_token);
        }
        self.refresh().await
    }

    /// Current session state for display purposes. Never triggers a refresh.
    pub async fn status(&self) -> SessionStatus {
        let Some(pair) = self.load_pair().await else {
            return SessionStatus::Unauthenticated;
        };
        let now_ms = self.clock.now_ms();
        if is_expired(&pair.access_token, now_ms) {
            return SessionStatus::Expired;
        }
        let expires_in_secs = TokenClaims::decode(&pair.access_token)
            .map_or(0, |claims| (claims.expires_at_ms() - now_ms) / 1000);
        SessionStatus::Active { expires_in_secs }
    }

    /// The single-flight refresh path.
    async fn refresh(&self) -> Option<String> {
        let _guard = self.refresh_gate.lock().await;

        // A queued caller arrives after the guard holder settled the
        // attempt: the store now holds either a fresh pair or nothing.
        let pair = self.load_pair().await?;
        if !is_expired(&pair.access_token, self.clock.now_ms()) {
            return Some(pair.access_token);
        }

        tracing::debug!("access token expired, refreshing");
        match self.refresher.refresh(&pair.refresh_token).await {
            Ok(new_pair) => {
                let token = new_pair.access_token.clone();
                if let Err(err) = self.store.store(new_pair).await {
                    // The session still works with the in-hand token; it
                    // just will not survive a restart.
                    tracing::warn!(error = %err, "failed to persist refreshed credentials");
                }
                Some(token)
            }
            Err(err) => {
                tracing::warn!(error = %err, "token refresh failed, clearing credentials");
                if let Err(clear_err) = self.store.clear().await {
                    tracing::warn!(error = %clear_err, "failed to clear credentials");
                }
                None
            }
        }
    }

    async fn load_pair(&self) -> Option<CredentialPair> {
        match self.store.load().await {
            Ok(pair) => pair,
            Err(err) => {
                // Unreadable storage counts as unauthenticated.
                tracing::warn!(error = %err, "failed to load credentials");
                None
            }
        }
    }
}
