use shared_types::{AppError, AuthUser, Session, SessionConfig, UserRole};

/// Mock identity handed out for a role. There is no credential check.
pub fn demo_user(role: &UserRole) -> Result<AuthUser, AppError> {
    let (id, name) = match role {
        UserRole::Candidate => ("candidate-1", "Alex Candidate"),
        UserRole::Recruiter => ("recruiter-1", "Riley Recruiter"),
        UserRole::Other(other) => {
            return Err(AppError::bad_request(format!("Unknown role: {other}")));
        }
    };
    Ok(AuthUser {
        id: id.to_string(),
        name: name.to_string(),
        role: role.clone(),
    })
}

/// Session a browser starts with, from the `[session]` config section.
///
/// No role configured means nobody is signed in. An unknown role is logged
/// and ignored.
pub fn initial_session(config: &SessionConfig) -> Session {
    let Some(role) = config.role.as_deref() else {
        return Session::anonymous();
    };
    match demo_user(&UserRole::parse(role)) {
        Ok(mut user) => {
            if let Some(name) = config.name.as_deref().filter(|n| !n.trim().is_empty()) {
                user.name = name.to_string();
            }
            Session::signed_in(user)
        }
        Err(e) => {
            tracing::warn!(role, error = %e, "ignoring configured session");
            Session::anonymous()
        }
    }
}
