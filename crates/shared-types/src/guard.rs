use crate::{Session, UserRole};

/// Outcome of checking a session against a page's required role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthorizationState {
    /// Session not known yet.
    Unresolved,
    /// Not authenticated, or authenticated with another role.
    Unauthorized,
    Authorized,
}

impl AuthorizationState {
    /// Whether the page should navigate away.
    pub fn should_redirect(&self) -> bool {
        matches!(self, AuthorizationState::Unauthorized)
    }
}

/// Check a session against the role a page requires.
///
/// `None` means the session provider has not reported yet. An authenticated
/// session with no user record counts as a role mismatch. `Other` roles never
/// satisfy a gate, even when the strings are equal.
pub fn authorize(session: Option<&Session>, required: &UserRole) -> AuthorizationState {
    let Some(session) = session else {
        return AuthorizationState::Unresolved;
    };
    if !session.is_authenticated {
        return AuthorizationState::Unauthorized;
    }
    match session.role() {
        Some(UserRole::Other(_)) | None => AuthorizationState::Unauthorized,
        Some(role) if role == required => AuthorizationState::Authorized,
        Some(_) => AuthorizationState::Unauthorized,
    }
}
