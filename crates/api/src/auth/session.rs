//! The admin session manager: login verification, token issuance,
//! rotate-on-use refresh, and the require-auth decision procedure.
//!
//! The manager is generic over [`AuthStore`] so the whole state machine runs
//! unchanged against Postgres in production and against the in-memory store
//! in unit tests. It returns pure decision values ([`AuthOutcome`],
//! [`CookieOp`]); the HTTP layer alone applies cookie side effects.

use std::sync::Arc;

use chrono::{Duration, Utc};

use evermore_core::tokens::{generate_refresh_secret, hash_refresh_secret};
use evermore_core::types::{DbId, Timestamp};
use evermore_db::models::admin_user::AdminUser;
use evermore_db::models::login_log::CreateLoginLog;
use evermore_db::models::refresh_token::CreateRefreshToken;
use evermore_db::store::AuthStore;

use crate::auth::cookies::{clear_both, CookieOp};
use crate::auth::jwt::{self, Claims, JwtConfig};
use crate::auth::password::verify_password;

/// The single user-visible message for every credential failure. Unknown
/// username, inactive account, and wrong password must be indistinguishable
/// to the caller.
pub const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid username or password";

/// Internal failure reasons recorded in the login audit log. Operator-facing
/// only; never surfaced to the end user.
mod failure_reasons {
    pub const UNKNOWN_USERNAME: &str = "unknown_username";
    pub const INACTIVE_ACCOUNT: &str = "inactive_account";
    pub const PASSWORD_MISMATCH: &str = "password_mismatch";
}

/// Request-scoped client metadata recorded for audit.
#[derive(Debug, Clone, Default)]
pub struct ClientInfo {
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
}

/// The authenticated identity attached to a request.
#[derive(Debug, Clone)]
pub struct AdminPrincipal {
    pub user_id: DbId,
    pub username: String,
    pub role: String,
}

impl From<&Claims> for AdminPrincipal {
    fn from(claims: &Claims) -> Self {
        Self {
            user_id: claims.sub,
            username: claims.username.clone(),
            role: claims.role.clone(),
        }
    }
}

/// Freshly issued token pair returned by [`SessionManager::issue_session`].
pub struct IssuedSession {
    pub access_token: String,
    /// The raw opaque secret. Sent to the client once; only its hash is stored.
    pub refresh_token: String,
    pub refresh_expires_at: Timestamp,
}

/// Terminal result of the require-auth decision procedure.
#[derive(Debug)]
pub enum AuthOutcome {
    /// Request is authenticated. `cookies` is non-empty only when a silent
    /// refresh rotated the session on this request.
    Authenticated {
        principal: AdminPrincipal,
        cookies: Vec<CookieOp>,
    },
    /// No usable credentials. `cookies` clears both session cookies.
    Rejected { cookies: Vec<CookieOp> },
}

/// Errors surfaced by login and issuance.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// Collapsed credential failure: the message is identical regardless of
    /// which check failed.
    #[error("{INVALID_CREDENTIALS_MESSAGE}")]
    InvalidCredentials,

    /// A store or signing failure. The detail is logged, never surfaced.
    #[error("Authentication backend failure")]
    Internal(String),
}

/// Refresh-token rotation failures. Resolved locally by the state machine;
/// callers only ever observe the resulting [`AuthOutcome`].
#[derive(Debug, thiserror::Error)]
enum RotationError {
    /// No matching active ledger row: unknown hash, revoked, or expired.
    /// Store lookup errors are folded in here as well (fail closed).
    #[error("Refresh token not found, revoked, or expired")]
    Invalid,
}

/// The admin session manager.
pub struct SessionManager<S: AuthStore> {
    store: Arc<S>,
    config: JwtConfig,
}

impl<S: AuthStore> SessionManager<S> {
    pub fn new(store: Arc<S>, config: JwtConfig) -> Self {
        Self { store, config }
    }

    pub fn config(&self) -> &JwtConfig {
        &self.config
    }

    /// Verify a username/password pair.
    ///
    /// Every failure path returns [`AuthError::InvalidCredentials`] so the
    /// caller cannot tell which check failed; the specific reason goes to the
    /// audit log only. On success, `last_login_at` is updated and a success
    /// row is appended.
    pub async fn verify_login(
        &self,
        username: &str,
        password: &str,
        client: &ClientInfo,
    ) -> Result<AdminUser, AuthError> {
        let user = self
            .store
            .find_user_by_username(username)
            .await
            .map_err(|e| AuthError::Internal(e.to_string()))?;

        let user = match user {
            Some(user) => user,
            None => {
                self.log_attempt(None, username, client, false, failure_reasons::UNKNOWN_USERNAME)
                    .await;
                return Err(AuthError::InvalidCredentials);
            }
        };

        if !user.is_active {
            self.log_attempt(
                Some(user.id),
                username,
                client,
                false,
                failure_reasons::INACTIVE_ACCOUNT,
            )
            .await;
            return Err(AuthError::InvalidCredentials);
        }

        let password_valid = verify_password(password, &user.password_hash)
            .map_err(|e| AuthError::Internal(format!("Password verification error: {e}")))?;

        if !password_valid {
            self.log_attempt(
                Some(user.id),
                username,
                client,
                false,
                failure_reasons::PASSWORD_MISMATCH,
            )
            .await;
            return Err(AuthError::InvalidCredentials);
        }

        self.store
            .touch_last_login(user.id)
            .await
            .map_err(|e| AuthError::Internal(e.to_string()))?;

        self.log_success(user.id, username, client).await;

        Ok(user)
    }

    /// Issue a fresh access token and refresh secret for a verified user.
    ///
    /// The access token is a short-lived HS256 JWT; the refresh secret is
    /// opaque and high-entropy, persisted only as a SHA-256 hash alongside
    /// its expiry and the issuing client's IP.
    pub async fn issue_session(
        &self,
        user: &AdminUser,
        client: &ClientInfo,
    ) -> Result<IssuedSession, AuthError> {
        let access_token =
            jwt::generate_access_token(user.id, &user.username, &user.role, &self.config)
                .map_err(|e| AuthError::Internal(format!("Token generation error: {e}")))?;

        let secret = generate_refresh_secret();
        let refresh_expires_at = Utc::now() + Duration::days(self.config.refresh_token_expiry_days);

        let input = CreateRefreshToken {
            admin_user_id: user.id,
            token_hash: secret.hash,
            expires_at: refresh_expires_at,
            ip_address: client.ip_address.clone(),
        };
        self.store
            .insert_refresh_token(&input)
            .await
            .map_err(|e| AuthError::Internal(e.to_string()))?;

        Ok(IssuedSession {
            access_token,
            refresh_token: secret.plaintext,
            refresh_expires_at,
        })
    }

    /// The require-auth decision procedure.
    ///
    /// Evaluated in order, each step a deterministic decision with no
    /// retries:
    ///
    /// 1. A valid access token with more than the refresh threshold remaining
    ///    is accepted with zero store access.
    /// 2. A valid access token inside the threshold, plus a refresh cookie,
    ///    attempts rotation; rotation failure falls back to accepting the
    ///    still-valid token. Refresh failure never rejects a request holding
    ///    a valid access token.
    /// 3. With no usable access token, a present refresh cookie is the last
    ///    chance: successful rotation authenticates, anything else rejects
    ///    and clears both cookies.
    pub async fn require_auth(
        &self,
        access_token: Option<&str>,
        refresh_token: Option<&str>,
        client: &ClientInfo,
    ) -> AuthOutcome {
        let now = Utc::now().timestamp();

        if let Some(raw) = access_token {
            if let Ok(claims) = jwt::validate_token(raw, &self.config) {
                // Expiry is exclusive: zero seconds remaining is expired.
                let remaining = claims.exp - now;
                if remaining > 0 {
                    if remaining > self.config.refresh_threshold_secs {
                        return AuthOutcome::Authenticated {
                            principal: AdminPrincipal::from(&claims),
                            cookies: Vec::new(),
                        };
                    }

                    // Near expiry: proactively rotate so an active session is
                    // extended without the admin ever seeing a login prompt.
                    if let Some(refresh_raw) = refresh_token {
                        match self.rotate(refresh_raw, client).await {
                            Ok((principal, cookies)) => {
                                return AuthOutcome::Authenticated { principal, cookies };
                            }
                            Err(e) => {
                                tracing::debug!(
                                    error = %e,
                                    "Near-expiry rotation failed; keeping still-valid access token"
                                );
                            }
                        }
                    }

                    return AuthOutcome::Authenticated {
                        principal: AdminPrincipal::from(&claims),
                        cookies: Vec::new(),
                    };
                }
            }
        }

        // No usable access token; the refresh cookie is the last chance.
        match refresh_token {
            None => AuthOutcome::Rejected {
                cookies: clear_both(),
            },
            Some(raw) => match self.rotate(raw, client).await {
                Ok((principal, cookies)) => AuthOutcome::Authenticated { principal, cookies },
                Err(_) => AuthOutcome::Rejected {
                    cookies: clear_both(),
                },
            },
        }
    }

    /// Best-effort logout: revoke the presented refresh token if it is still
    /// active, and always clear both cookies. Idempotent -- a stale or
    /// already-revoked cookie is not an error.
    pub async fn logout(&self, refresh_token: Option<&str>) -> Vec<CookieOp> {
        if let Some(raw) = refresh_token {
            let hash = hash_refresh_secret(raw);
            match self.store.find_active_refresh_token(&hash).await {
                Ok(Some(row)) => {
                    if let Err(e) = self.store.revoke_refresh_token(row.id).await {
                        tracing::warn!(error = %e, "Failed to revoke refresh token on logout");
                    }
                }
                Ok(None) => {}
                Err(e) => {
                    tracing::warn!(error = %e, "Refresh token lookup failed on logout");
                }
            }
        }

        clear_both()
    }

    /// Revoke every active refresh token the user holds, across all devices
    /// and browsers. The caller's cookies are cleared like a normal logout.
    pub async fn logout_all(&self, user_id: DbId) -> Result<(u64, Vec<CookieOp>), AuthError> {
        let revoked = self
            .store
            .revoke_all_for_user(user_id)
            .await
            .map_err(|e| AuthError::Internal(e.to_string()))?;
        Ok((revoked, clear_both()))
    }

    /// Rotate-on-use refresh.
    ///
    /// Consumes the presented secret exactly once: the matched ledger row is
    /// revoked before a replacement pair is issued, so a replayed secret (or
    /// the loser of a concurrent two-tab race) finds `revoked_at` set and is
    /// rejected. Any store error fails closed as an invalid token.
    async fn rotate(
        &self,
        refresh_raw: &str,
        client: &ClientInfo,
    ) -> Result<(AdminPrincipal, Vec<CookieOp>), RotationError> {
        let hash = hash_refresh_secret(refresh_raw);

        let row = self
            .store
            .find_active_refresh_token(&hash)
            .await
            .map_err(|_| RotationError::Invalid)?
            .ok_or(RotationError::Invalid)?;

        // Single-use enforcement: only the caller that performs the
        // revocation may continue.
        let revoked = self
            .store
            .revoke_refresh_token(row.id)
            .await
            .map_err(|_| RotationError::Invalid)?;
        if !revoked {
            return Err(RotationError::Invalid);
        }

        let user = self
            .store
            .find_user_by_id(row.admin_user_id)
            .await
            .map_err(|_| RotationError::Invalid)?
            .ok_or(RotationError::Invalid)?;

        if !user.is_active {
            return Err(RotationError::Invalid);
        }

        let issued = self
            .issue_session(&user, client)
            .await
            .map_err(|_| RotationError::Invalid)?;

        let refresh_max_age = (issued.refresh_expires_at - Utc::now()).num_seconds().max(0);
        let cookies = vec![
            CookieOp::SetAccess {
                value: issued.access_token,
                max_age_secs: self.config.access_token_expiry_mins * 60,
            },
            CookieOp::SetRefresh {
                value: issued.refresh_token,
                max_age_secs: refresh_max_age,
            },
        ];

        let principal = AdminPrincipal {
            user_id: user.id,
            username: user.username,
            role: user.role,
        };

        Ok((principal, cookies))
    }

    async fn log_attempt(
        &self,
        admin_user_id: Option<DbId>,
        username: &str,
        client: &ClientInfo,
        success: bool,
        failure_reason: &str,
    ) {
        let input = CreateLoginLog {
            admin_user_id,
            username: username.to_string(),
            ip_address: client.ip_address.clone(),
            user_agent: client.user_agent.clone(),
            success,
            failure_reason: if success {
                None
            } else {
                Some(failure_reason.to_string())
            },
        };
        // The audit trail is best-effort: a logging failure must not block
        // the login decision.
        if let Err(e) = self.store.log_attempt(&input).await {
            tracing::warn!(error = %e, username, "Failed to append login audit row");
        }
    }

    async fn log_success(&self, admin_user_id: DbId, username: &str, client: &ClientInfo) {
        self.log_attempt(Some(admin_user_id), username, client, true, "")
            .await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use assert_matches::assert_matches;
    use uuid::Uuid;

    use evermore_db::store::MemoryAuthStore;

    use crate::auth::password::hash_password;

    const PASSWORD: &str = "correct-horse-battery-staple";

    fn test_config() -> JwtConfig {
        JwtConfig {
            secret: "test-secret-that-is-long-enough-for-hmac".to_string(),
            access_token_expiry_mins: 15,
            refresh_token_expiry_days: 7,
            refresh_threshold_secs: 120,
        }
    }

    fn manager_with_store() -> (SessionManager<MemoryAuthStore>, Arc<MemoryAuthStore>) {
        let store = Arc::new(MemoryAuthStore::new());
        let manager = SessionManager::new(Arc::clone(&store), test_config());
        (manager, store)
    }

    fn seed_admin(store: &MemoryAuthStore, username: &str, is_active: bool) -> AdminUser {
        let hash = hash_password(PASSWORD).expect("hashing should succeed");
        store.seed_user(username, &hash, "admin", is_active)
    }

    /// Sign an access token for `user` with a chosen expiry instant.
    fn token_with_exp(user: &AdminUser, exp: i64, config: &JwtConfig) -> String {
        let claims = Claims {
            sub: user.id,
            username: user.username.clone(),
            role: user.role.clone(),
            exp,
            iat: exp - 900,
            jti: Uuid::new_v4().to_string(),
        };
        jwt::encode_claims(&claims, config).expect("encoding should succeed")
    }

    // -- Credential verification -------------------------------------------

    #[tokio::test]
    async fn failure_message_is_identical_for_all_causes() {
        let (manager, store) = manager_with_store();
        seed_admin(&store, "active_admin", true);
        seed_admin(&store, "retired_admin", false);
        let client = ClientInfo::default();

        let unknown = manager
            .verify_login("ghost", PASSWORD, &client)
            .await
            .unwrap_err();
        let inactive = manager
            .verify_login("retired_admin", PASSWORD, &client)
            .await
            .unwrap_err();
        let wrong_password = manager
            .verify_login("active_admin", "not-the-password", &client)
            .await
            .unwrap_err();

        assert_eq!(unknown.to_string(), INVALID_CREDENTIALS_MESSAGE);
        assert_eq!(inactive.to_string(), unknown.to_string());
        assert_eq!(wrong_password.to_string(), unknown.to_string());
    }

    #[tokio::test]
    async fn failed_attempts_log_internal_reasons() {
        let (manager, store) = manager_with_store();
        seed_admin(&store, "active_admin", true);
        seed_admin(&store, "retired_admin", false);
        let client = ClientInfo::default();

        let _ = manager.verify_login("ghost", PASSWORD, &client).await;
        let _ = manager.verify_login("retired_admin", PASSWORD, &client).await;
        let _ = manager.verify_login("active_admin", "wrong", &client).await;

        let logs = store.login_logs();
        assert_eq!(logs.len(), 3);
        assert!(logs.iter().all(|l| !l.success));
        let reasons: Vec<_> = logs
            .iter()
            .map(|l| l.failure_reason.as_deref().unwrap())
            .collect();
        assert_eq!(
            reasons,
            vec!["unknown_username", "inactive_account", "password_mismatch"]
        );
    }

    #[tokio::test]
    async fn successful_login_touches_last_login_and_logs() {
        let (manager, store) = manager_with_store();
        let user = seed_admin(&store, "admin", true);
        let client = ClientInfo {
            ip_address: Some("203.0.113.7".to_string()),
            user_agent: Some("test-agent".to_string()),
        };

        let verified = manager
            .verify_login("admin", PASSWORD, &client)
            .await
            .expect("login should succeed");
        assert_eq!(verified.id, user.id);

        let logs = store.login_logs();
        assert_eq!(logs.len(), 1);
        assert!(logs[0].success);
        assert_eq!(logs[0].failure_reason, None);
        assert_eq!(logs[0].ip_address.as_deref(), Some("203.0.113.7"));

        let refreshed = store
            .find_user_by_id(user.id)
            .await
            .unwrap()
            .expect("user should exist");
        assert!(refreshed.last_login_at.is_some());
    }

    // -- Issuance ----------------------------------------------------------

    #[tokio::test]
    async fn issued_access_token_round_trips_the_principal() {
        let (manager, store) = manager_with_store();
        let user = seed_admin(&store, "admin", true);

        let issued = manager
            .issue_session(&user, &ClientInfo::default())
            .await
            .expect("issuance should succeed");

        let claims =
            jwt::validate_token(&issued.access_token, manager.config()).expect("token is valid");
        assert_eq!(claims.sub, user.id);
        assert_eq!(claims.username, user.username);
        assert_eq!(claims.role, user.role);
    }

    #[tokio::test]
    async fn issuance_persists_only_the_hash() {
        let (manager, store) = manager_with_store();
        let user = seed_admin(&store, "admin", true);

        let issued = manager
            .issue_session(&user, &ClientInfo::default())
            .await
            .expect("issuance should succeed");

        let tokens = store.refresh_tokens();
        assert_eq!(tokens.len(), 1);
        assert_ne!(tokens[0].token_hash, issued.refresh_token);
        assert_eq!(
            tokens[0].token_hash,
            hash_refresh_secret(&issued.refresh_token)
        );
        assert!(tokens[0].revoked_at.is_none());
    }

    // -- Require-auth fast path --------------------------------------------

    #[tokio::test]
    async fn fresh_token_accepted_with_zero_store_access() {
        let (manager, store) = manager_with_store();
        let user = seed_admin(&store, "admin", true);
        let seeding_ops = store.operation_count();

        let exp = Utc::now().timestamp() + 600; // well outside the 120s window
        let token = token_with_exp(&user, exp, manager.config());

        let outcome = manager
            .require_auth(Some(&token), None, &ClientInfo::default())
            .await;

        assert_matches!(outcome, AuthOutcome::Authenticated { principal, cookies } => {
            assert_eq!(principal.user_id, user.id);
            assert_eq!(principal.username, "admin");
            assert!(cookies.is_empty(), "fast path must not touch cookies");
        });
        assert_eq!(
            store.operation_count(),
            seeding_ops,
            "fast path must perform no store access"
        );
    }

    #[tokio::test]
    async fn missing_both_cookies_is_rejected() {
        let (manager, _store) = manager_with_store();

        let outcome = manager.require_auth(None, None, &ClientInfo::default()).await;

        assert_matches!(outcome, AuthOutcome::Rejected { cookies } => {
            assert_eq!(cookies, clear_both());
        });
    }

    #[tokio::test]
    async fn token_at_exact_expiry_instant_is_expired() {
        let (manager, store) = manager_with_store();
        let user = seed_admin(&store, "admin", true);

        let token = token_with_exp(&user, Utc::now().timestamp(), manager.config());

        let outcome = manager
            .require_auth(Some(&token), None, &ClientInfo::default())
            .await;

        assert_matches!(outcome, AuthOutcome::Rejected { .. });
    }

    #[tokio::test]
    async fn garbage_access_token_without_refresh_is_rejected() {
        let (manager, _store) = manager_with_store();

        let outcome = manager
            .require_auth(Some("not.a.jwt"), None, &ClientInfo::default())
            .await;

        assert_matches!(outcome, AuthOutcome::Rejected { cookies } => {
            assert_eq!(cookies, clear_both());
        });
    }

    // -- Silent refresh ----------------------------------------------------

    #[tokio::test]
    async fn near_expiry_rotation_replaces_the_ledger_row() {
        let (manager, store) = manager_with_store();
        let user = seed_admin(&store, "admin", true);

        let issued = manager
            .issue_session(&user, &ClientInfo::default())
            .await
            .expect("issuance should succeed");

        let near_expiry = Utc::now().timestamp() + 60; // inside the 120s window
        let token = token_with_exp(&user, near_expiry, manager.config());

        let outcome = manager
            .require_auth(
                Some(&token),
                Some(&issued.refresh_token),
                &ClientInfo::default(),
            )
            .await;

        assert_matches!(outcome, AuthOutcome::Authenticated { principal, cookies } => {
            assert_eq!(principal.user_id, user.id);
            assert_matches!(&cookies[..], [
                CookieOp::SetAccess { .. },
                CookieOp::SetRefresh { value, .. },
            ] => {
                assert_ne!(value, &issued.refresh_token, "refresh secret must rotate");
            });
        });

        // Exactly one new row; the prior row is revoked.
        let tokens = store.refresh_tokens();
        assert_eq!(tokens.len(), 2);
        let old = &tokens[0];
        let new = &tokens[1];
        assert!(old.revoked_at.is_some(), "consumed token must be revoked");
        assert!(new.revoked_at.is_none());
    }

    #[tokio::test]
    async fn replayed_refresh_token_is_rejected_with_cleared_cookies() {
        let (manager, store) = manager_with_store();
        let user = seed_admin(&store, "admin", true);

        let issued = manager
            .issue_session(&user, &ClientInfo::default())
            .await
            .expect("issuance should succeed");

        // First use rotates successfully.
        let outcome = manager
            .require_auth(None, Some(&issued.refresh_token), &ClientInfo::default())
            .await;
        assert_matches!(outcome, AuthOutcome::Authenticated { .. });

        // Replay of the consumed secret must be rejected and clear cookies.
        let replay = manager
            .require_auth(None, Some(&issued.refresh_token), &ClientInfo::default())
            .await;
        assert_matches!(replay, AuthOutcome::Rejected { cookies } => {
            assert_eq!(cookies, clear_both());
        });
    }

    #[tokio::test]
    async fn rotation_failure_falls_back_to_valid_access_token() {
        let (manager, store) = manager_with_store();
        let user = seed_admin(&store, "admin", true);

        let near_expiry = Utc::now().timestamp() + 60;
        let token = token_with_exp(&user, near_expiry, manager.config());

        // The refresh cookie is garbage, but the access token is still valid:
        // the request must be accepted with the original payload.
        let outcome = manager
            .require_auth(Some(&token), Some("bogus-secret"), &ClientInfo::default())
            .await;

        assert_matches!(outcome, AuthOutcome::Authenticated { principal, cookies } => {
            assert_eq!(principal.user_id, user.id);
            assert!(cookies.is_empty(), "failed rotation must not emit cookie ops");
        });
    }

    #[tokio::test]
    async fn expired_access_with_valid_refresh_rotates() {
        let (manager, store) = manager_with_store();
        let user = seed_admin(&store, "admin", true);

        let issued = manager
            .issue_session(&user, &ClientInfo::default())
            .await
            .expect("issuance should succeed");

        let expired = token_with_exp(&user, Utc::now().timestamp() - 300, manager.config());

        let outcome = manager
            .require_auth(
                Some(&expired),
                Some(&issued.refresh_token),
                &ClientInfo::default(),
            )
            .await;

        assert_matches!(outcome, AuthOutcome::Authenticated { cookies, .. } => {
            assert_eq!(cookies.len(), 2, "rotation must set both cookies");
        });
    }

    #[tokio::test]
    async fn deactivated_user_cannot_rotate() {
        let (manager, store) = manager_with_store();
        let user = seed_admin(&store, "admin", true);

        let issued = manager
            .issue_session(&user, &ClientInfo::default())
            .await
            .expect("issuance should succeed");

        store.deactivate_user(user.id);

        let outcome = manager
            .require_auth(None, Some(&issued.refresh_token), &ClientInfo::default())
            .await;

        assert_matches!(outcome, AuthOutcome::Rejected { .. });
    }

    // -- Logout ------------------------------------------------------------

    #[tokio::test]
    async fn logout_revokes_and_is_idempotent() {
        let (manager, store) = manager_with_store();
        let user = seed_admin(&store, "admin", true);

        let issued = manager
            .issue_session(&user, &ClientInfo::default())
            .await
            .expect("issuance should succeed");

        let first = manager.logout(Some(&issued.refresh_token)).await;
        assert_eq!(first, clear_both());
        assert!(store.refresh_tokens()[0].revoked_at.is_some());

        // Second logout with the now-revoked cookie must not error and must
        // still clear cookies.
        let second = manager.logout(Some(&issued.refresh_token)).await;
        assert_eq!(second, clear_both());
    }

    #[tokio::test]
    async fn logout_all_revokes_every_active_token() {
        let (manager, store) = manager_with_store();
        let user = seed_admin(&store, "admin", true);

        // Two live sessions, e.g. desktop and phone.
        manager
            .issue_session(&user, &ClientInfo::default())
            .await
            .expect("issuance should succeed");
        manager
            .issue_session(&user, &ClientInfo::default())
            .await
            .expect("issuance should succeed");

        let (revoked, ops) = manager
            .logout_all(user.id)
            .await
            .expect("logout-all should succeed");
        assert_eq!(revoked, 2);
        assert_eq!(ops, clear_both());
        assert!(store
            .refresh_tokens()
            .iter()
            .all(|t| t.revoked_at.is_some()));
    }

    #[tokio::test]
    async fn logout_without_cookie_still_clears() {
        let (manager, _store) = manager_with_store();
        let ops = manager.logout(None).await;
        assert_eq!(ops, clear_both());
    }
}
