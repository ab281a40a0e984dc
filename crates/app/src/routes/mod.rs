pub mod candidate;
pub mod home;
pub mod not_found;
pub mod recruiter;

use crate::auth::{use_auth, RoleGate};
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdBriefcase, LdLayoutDashboard, LdLogOut};
use dioxus_free_icons::Icon;
use shared_types::UserRole;
use shared_ui::{Button, ButtonVariant};

use candidate::CandidateDashboard;
use home::Home;
use not_found::NotFound;
use recruiter::{RequisitionDetail, RequisitionList};

/// Application routes.
#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(AppLayout)]
        #[route("/")]
        Home {},
        #[layout(CandidateGuard)]
            #[route("/candidate/dashboard")]
            CandidateDashboard {},
        #[end_layout]
        #[layout(RecruiterGuard)]
            #[route("/recruiter/requisitions")]
            RequisitionList {},
            #[route("/recruiter/requisitions/:id")]
            RequisitionDetail { id: String },
        #[end_layout]
    #[end_layout]
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

#[component]
fn CandidateGuard() -> Element {
    rsx! {
        RoleGate { role: UserRole::Candidate, Outlet::<Route> {} }
    }
}

#[component]
fn RecruiterGuard() -> Element {
    rsx! {
        RoleGate { role: UserRole::Recruiter, Outlet::<Route> {} }
    }
}

/// Top bar with the brand, role-specific navigation and sign-out.
#[component]
fn AppLayout() -> Element {
    let route: Route = use_route();
    let mut auth = use_auth();
    let user = auth.current_user();
    let dashboard_class = nav_class(matches!(route, Route::CandidateDashboard {}));
    let requisitions_class = nav_class(matches!(
        route,
        Route::RequisitionList {} | Route::RequisitionDetail { .. }
    ));
    let signed_in_as = user
        .as_ref()
        .map(|u| (u.name.clone(), u.role.as_str().to_string()));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./layout.css") }

        header { class: "topbar",
            Link { to: Route::Home {}, class: "topbar-brand", "Hirewire" }

            nav { class: "topbar-nav",
                match user.as_ref().map(|u| &u.role) {
                    Some(UserRole::Candidate) => rsx! {
                        Link {
                            to: Route::CandidateDashboard {},
                            class: dashboard_class,
                            Icon::<LdLayoutDashboard> { icon: LdLayoutDashboard, width: 16, height: 16 }
                            "Dashboard"
                        }
                    },
                    Some(UserRole::Recruiter) => rsx! {
                        Link {
                            to: Route::RequisitionList {},
                            class: requisitions_class,
                            Icon::<LdBriefcase> { icon: LdBriefcase, width: 16, height: 16 }
                            "Requisitions"
                        }
                    },
                    _ => rsx! {},
                }
            }

            if let Some((name, role)) = signed_in_as {
                div { class: "topbar-user",
                    span { class: "topbar-user-name", "{name}" }
                    span { class: "topbar-user-role", "{role}" }
                    Button {
                        variant: ButtonVariant::Ghost,
                        onclick: move |_| {
                            tracing::info!("signing out");
                            auth.sign_out();
                            navigator().push(Route::Home {});
                        },
                        Icon::<LdLogOut> { icon: LdLogOut, width: 16, height: 16 }
                        "Sign out"
                    }
                }
            }
        }

        main { class: "page",
            Outlet::<Route> {}
        }
    }
}

fn nav_class(active: bool) -> String {
    if active {
        "topbar-link active".to_string()
    } else {
        "topbar-link".to_string()
    }
}
