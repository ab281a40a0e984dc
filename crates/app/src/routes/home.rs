use dioxus::prelude::*;
use shared_types::{AppError, AuthUser, UserRole};
use shared_ui::{
    Button, ButtonVariant, Card, CardContent, CardDescription, CardFooter, CardHeader, CardTitle,
};

use crate::auth::use_auth;
use crate::routes::Route;

/// Landing page for each role.
fn home_route(role: &UserRole) -> Option<Route> {
    match role {
        UserRole::Candidate => Some(Route::CandidateDashboard {}),
        UserRole::Recruiter => Some(Route::RequisitionList {}),
        UserRole::Other(_) => None,
    }
}

/// Landing page: demo sign-in for either role, or a shortcut to the signed-in
/// user's area.
#[component]
pub fn Home() -> Element {
    let mut auth = use_auth();
    let mut error = use_signal(|| None::<String>);
    let user = auth.current_user();

    let sign_in = move |role: UserRole| {
        spawn(async move {
            match server::api::sign_in(role.as_str().to_string()).await {
                Ok(user) => {
                    tracing::info!(user = %user.id, role = user.role.as_str(), "signed in");
                    let target = home_route(&user.role);
                    auth.sign_in(user);
                    error.set(None);
                    if let Some(target) = target {
                        navigator().push(target);
                    }
                }
                Err(e) => {
                    tracing::error!(error = %e, "sign-in failed");
                    error.set(Some(AppError::friendly_message(&e.to_string())));
                }
            }
        });
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./home.css") }

        section { class: "home-hero",
            h1 { "Hiring, without the hassle." }
            p { class: "home-lede",
                "Browse open roles as a candidate, or manage your requisitions as a recruiter."
            }
        }

        match user {
            Some(user) => rsx! {
                WelcomeCard { user }
            },
            None => rsx! {
                div { class: "home-roles",
                    RoleCard {
                        title: "I'm looking for a job",
                        description: "Track applications and interviews from your dashboard.",
                        action: "Continue as Candidate",
                        on_select: move |_| sign_in(UserRole::Candidate),
                    }
                    RoleCard {
                        title: "I'm hiring",
                        description: "Review open requisitions and their applicant pipelines.",
                        action: "Continue as Recruiter",
                        on_select: move |_| sign_in(UserRole::Recruiter),
                    }
                }
            },
        }

        if let Some(message) = error() {
            p { class: "home-error", role: "alert", "{message}" }
        }
    }
}

#[component]
fn WelcomeCard(user: AuthUser) -> Element {
    let role = user.role.as_str().to_string();
    let target = home_route(&user.role);

    rsx! {
        Card { class: "home-welcome",
            CardHeader {
                CardTitle { "Welcome back, {user.name}" }
                CardDescription { "You are signed in as a {role}." }
            }
            if let Some(target) = target {
                CardFooter {
                    Link { to: target, class: "home-continue", "Continue" }
                }
            }
        }
    }
}

#[component]
fn RoleCard(
    title: String,
    description: String,
    action: String,
    on_select: EventHandler<MouseEvent>,
) -> Element {
    rsx! {
        Card { class: "home-role",
            CardHeader {
                CardTitle { "{title}" }
                CardDescription { "{description}" }
            }
            CardContent {
                Button {
                    variant: ButtonVariant::Primary,
                    onclick: move |evt| on_select.call(evt),
                    "{action}"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_role_lands_on_its_own_area() {
        assert_eq!(
            home_route(&UserRole::Candidate),
            Some(Route::CandidateDashboard {})
        );
        assert_eq!(
            home_route(&UserRole::Recruiter),
            Some(Route::RequisitionList {})
        );
        assert_eq!(home_route(&UserRole::Other("admin".into())), None);
    }

    #[test]
    fn role_card_renders_action() {
        let html = dioxus_ssr::render_element(rsx! {
            RoleCard {
                title: "I'm hiring",
                description: "Review requisitions.",
                action: "Continue as Recruiter",
                on_select: |_| {},
            }
        });
        assert!(html.contains("Continue as Recruiter"), "{html}");
        assert!(html.contains("I&#39;m hiring") || html.contains("I'm hiring"), "{html}");
    }
}
