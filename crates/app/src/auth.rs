use dioxus::prelude::*;
use shared_types::{authorize, AuthUser, AuthorizationState, Session, UserRole};

use crate::routes::Route;

/// Global session state.
///
/// `None` until the initial session arrives from the server. Sign-out keeps
/// `Some(anonymous)` so gated pages can tell "signed out" from "not loaded".
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AuthState {
    pub session: Signal<Option<Session>>,
}

impl AuthState {
    pub fn new() -> Self {
        Self {
            session: Signal::new(None),
        }
    }

    /// Install the session reported at load. Ignored once a session exists,
    /// so a late response cannot undo a sign-in.
    pub fn initialize(&mut self, session: Session) {
        if self.session.peek().is_none() {
            self.session.set(Some(session));
        }
    }

    pub fn sign_in(&mut self, user: AuthUser) {
        self.session.set(Some(Session::signed_in(user)));
    }

    pub fn sign_out(&mut self) {
        self.session.set(Some(Session::anonymous()));
    }

    pub fn current_user(&self) -> Option<AuthUser> {
        self.session
            .read()
            .as_ref()
            .filter(|s| s.is_authenticated)
            .and_then(|s| s.user.clone())
    }
}

/// Hook to access auth state.
pub fn use_auth() -> AuthState {
    use_context::<AuthState>()
}

/// Authorization for `required`, re-derived whenever the session changes.
pub fn use_authorization(required: UserRole) -> Memo<AuthorizationState> {
    let auth = use_auth();
    use_memo(move || authorize(auth.session.read().as_ref(), &required))
}

/// Renders `children` only for a session holding `role`.
///
/// Anyone else is sent home with a history replace and sees nothing. While
/// the session is still loading a short notice is shown instead.
#[component]
pub fn RoleGate(role: UserRole, children: Element) -> Element {
    let state = use_authorization(role);
    let nav = navigator();

    use_effect(move || {
        if state().should_redirect() {
            tracing::debug!("role gate redirecting home");
            nav.replace(Route::Home {});
        }
    });

    rsx! {
        GateContent { state: state(), {children} }
    }
}

/// What a gated page shows for `state`. Unauthorized visitors get nothing
/// while the redirect runs.
#[component]
fn GateContent(state: AuthorizationState, children: Element) -> Element {
    match state {
        AuthorizationState::Authorized => children,
        AuthorizationState::Unresolved => rsx! {
            div { class: "auth-guard-loading",
                p { "Checking your session..." }
            }
        },
        AuthorizationState::Unauthorized => rsx! {},
    }
}
