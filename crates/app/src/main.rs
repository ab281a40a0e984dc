use dioxus::prelude::*;
use shared_types::Session;

mod auth;
mod format_helpers;
mod routes;
use auth::AuthState;
use routes::Route;

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    #[cfg(feature = "server")]
    dioxus::serve(|| async move {
        let config = server::config::load_config();

        if config.features.telemetry {
            server::telemetry::init_telemetry();
        }
        server::health::record_start_time();

        let state = server::state::AppState::shared();
        tracing::info!(postings = state.directory.len(), "job directory ready");

        let mut router = dioxus::server::router(App).merge(server::openapi::api_router(state));

        if config.features.telemetry {
            router = router.layer(axum::middleware::from_fn(server::telemetry::otel_trace));
        }

        let router = router
            .layer(tower_http::trace::TraceLayer::new_for_http())
            .layer(tower_http::request_id::PropagateRequestIdLayer::x_request_id())
            .layer(tower_http::request_id::SetRequestIdLayer::x_request_id(
                tower_http::request_id::MakeRequestUuid,
            ));
        Ok(router)
    });

    #[cfg(not(feature = "server"))]
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let mut auth = use_context_provider(AuthState::new);

    // The session provider is initialized exactly once, from the server's
    // view of who is signed in. Pages only read it afterwards.
    let initial = use_server_future(move || async move { server::api::get_session().await })?;

    use_effect(move || match &*initial.read() {
        Some(Ok(session)) => auth.initialize(session.clone()),
        Some(Err(e)) => {
            tracing::error!(error = %e, "failed to load session, continuing signed out");
            auth.initialize(Session::anonymous());
        }
        None => {}
    });

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        SuspenseBoundary {
            fallback: |_| rsx! {
                div { class: "auth-guard-loading",
                    p { "Loading..." }
                }
            },
            Router::<Route> {}
        }
    }
}
