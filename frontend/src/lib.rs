//! msgdesk web front-end.
//!
//! Context-driven layout:
//! - `web::router`: History-backed router, guarded by `msgdesk::route`
//! - `auth`: session status signal over `msgdesk::SessionGuard`
//! - `components`: one component per page, plus shared widgets

mod auth;
pub mod config;
mod components {
    pub mod login;
    pub mod message_detail;
    pub mod message_form;
    pub mod message_list;
    pub mod notice;
}

pub(crate) mod web;

use crate::auth::{AuthContext, init_auth};
use crate::components::login::LoginPage;
use crate::components::message_detail::MessageDetailPage;
use crate::components::message_form::MessageFormPage;
use crate::components::message_list::MessageListPage;
use crate::config::AppConfig;
use crate::web::router::{Router, RouterOutlet};

use leptos::prelude::*;
use msgdesk::AppRoute;
use msgdesk::forms::FormMode;
use msgdesk::text;

fn route_matcher(route: AppRoute) -> AnyView {
    match route {
        AppRoute::Login => view! { <LoginPage /> }.into_any(),
        AppRoute::MessageList => view! { <MessageListPage /> }.into_any(),
        AppRoute::NewMessage => view! { <MessageFormPage mode=FormMode::Create /> }.into_any(),
        AppRoute::EditMessage(id) => view! { <MessageFormPage mode=FormMode::Edit(id) /> }.into_any(),
        AppRoute::MessageDetail(id) => view! { <MessageDetailPage id=id /> }.into_any(),
        // The guard always redirects unknown paths.
        AppRoute::NotFound => ().into_any(),
    }
}

fn set_document_title(title: &str) {
    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        document.set_title(title);
    }
}

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    set_document_title(text::APP_TITLE);
    provide_context(config.api.clone());

    let auth_ctx = AuthContext::new(&config.api);
    provide_context(auth_ctx);
    init_auth(&auth_ctx);

    view! {
        <Router auth_status=auth_ctx.status_signal()>
            <RouterOutlet matcher=route_matcher />
        </Router>
    }
}
