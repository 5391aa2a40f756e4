//! Session cookie descriptions and their HTTP application.
//!
//! The session state machine stays pure by returning [`CookieOp`] values;
//! only this module turns them into `Set-Cookie` headers. Both cookies are
//! HTTP-only with `SameSite=Lax`, and carry `Secure` when the server is
//! configured for HTTPS.

use axum::http::header::SET_COOKIE;
use axum::http::{HeaderMap, HeaderValue};

/// Cookie carrying the signed access token.
pub const ACCESS_COOKIE: &str = "admin_access_token";

/// Cookie carrying the opaque refresh secret.
pub const REFRESH_COOKIE: &str = "admin_refresh_token";

/// A cookie side effect decided by the session state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CookieOp {
    SetAccess { value: String, max_age_secs: i64 },
    SetRefresh { value: String, max_age_secs: i64 },
    ClearAccess,
    ClearRefresh,
}

/// The standard pair of clearing ops issued on rejection and logout.
pub fn clear_both() -> Vec<CookieOp> {
    vec![CookieOp::ClearAccess, CookieOp::ClearRefresh]
}

/// Render one op as a `Set-Cookie` header string.
fn render(op: &CookieOp, secure: bool) -> String {
    let secure_attr = if secure { "; Secure" } else { "" };
    match op {
        CookieOp::SetAccess { value, max_age_secs } => format!(
            "{ACCESS_COOKIE}={value}; Path=/; HttpOnly; SameSite=Lax; Max-Age={max_age_secs}{secure_attr}"
        ),
        CookieOp::SetRefresh { value, max_age_secs } => format!(
            "{REFRESH_COOKIE}={value}; Path=/; HttpOnly; SameSite=Lax; Max-Age={max_age_secs}{secure_attr}"
        ),
        // Clearing sets an empty value expiring immediately.
        CookieOp::ClearAccess => format!(
            "{ACCESS_COOKIE}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0{secure_attr}"
        ),
        CookieOp::ClearRefresh => format!(
            "{REFRESH_COOKIE}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0{secure_attr}"
        ),
    }
}

/// Append `Set-Cookie` headers for each op to a response header map.
pub fn apply_ops(headers: &mut HeaderMap, ops: &[CookieOp], secure: bool) {
    for op in ops {
        match HeaderValue::from_str(&render(op, secure)) {
            Ok(value) => {
                headers.append(SET_COOKIE, value);
            }
            Err(e) => {
                // Token values are base64url/alphanumeric, so this should
                // never fire; log rather than drop the response.
                tracing::error!(error = %e, "Failed to encode Set-Cookie header");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_access_renders_all_attributes() {
        let op = CookieOp::SetAccess {
            value: "tok".to_string(),
            max_age_secs: 900,
        };
        let rendered = render(&op, true);
        assert_eq!(
            rendered,
            "admin_access_token=tok; Path=/; HttpOnly; SameSite=Lax; Max-Age=900; Secure"
        );
    }

    #[test]
    fn clear_sets_zero_max_age() {
        let rendered = render(&CookieOp::ClearRefresh, false);
        assert!(rendered.starts_with("admin_refresh_token=;"));
        assert!(rendered.contains("Max-Age=0"));
        assert!(!rendered.contains("Secure"));
    }

    #[test]
    fn apply_ops_appends_one_header_per_op() {
        let mut headers = HeaderMap::new();
        apply_ops(&mut headers, &clear_both(), false);
        assert_eq!(headers.get_all(SET_COOKIE).iter().count(), 2);
    }
}
