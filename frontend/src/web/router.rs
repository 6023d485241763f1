//! Router service.
//!
//! All `window.history` access lives here. Every navigation goes through
//! the route guard in `msgdesk::route`: request -> resolve -> record -> render.

use leptos::prelude::*;
use msgdesk::{AppRoute, AuthStatus, RouteDecision};
use wasm_bindgen::prelude::*;

fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

fn write_history(path: &str, use_push: bool) {
    let Some(history) = web_sys::window().and_then(|w| w.history().ok()) else {
        return;
    };
    let _ = if use_push {
        history.push_state_with_url(&JsValue::NULL, "", Some(path))
    } else {
        history.replace_state_with_url(&JsValue::NULL, "", Some(path))
    };
}

/// Route state driven by signals. The session status is injected, so the
/// router knows nothing about how sessions are stored.
#[derive(Clone, Copy)]
pub struct RouterService {
    /// Requested route. While the session is being checked this is held
    /// as-is and resolved once the status settles.
    current_route: ReadSignal<AppRoute>,
    set_route: WriteSignal<AppRoute>,
    auth_status: Signal<AuthStatus>,
}

impl RouterService {
    fn new(auth_status: Signal<AuthStatus>) -> Self {
        let (current_route, set_route) = signal(AppRoute::from_path(&current_path()));
        Self {
            current_route,
            set_route,
            auth_status,
        }
    }

    pub fn current_route(&self) -> ReadSignal<AppRoute> {
        self.current_route
    }

    pub fn navigate(&self, path: &str) {
        self.apply(AppRoute::from_path(path), true);
    }

    pub fn navigate_to(&self, route: AppRoute) {
        self.apply(route, true);
    }

    /// Run `target` through the guard, record it in history and show it.
    fn apply(&self, target: AppRoute, use_push: bool) {
        let shown = match target.resolve(self.auth_status.get_untracked()) {
            RouteDecision::Render(route) => route,
            RouteDecision::Redirect(route) => {
                log::info!("[router] {} not allowed, redirecting to {}", target, route);
                route
            }
            RouteDecision::Wait => target,
        };

        write_history(&shown.to_path(), use_push);
        if self.current_route.get_untracked() != shown {
            self.set_route.set(shown);
        }
    }

    /// Back/forward buttons go through the same guard.
    fn init_popstate_listener(&self) {
        let router = *self;
        let closure = Closure::<dyn Fn()>::new(move || {
            router.apply(AppRoute::from_path(&current_path()), false);
        });

        if let Some(window) = web_sys::window() {
            let _ = window.add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
        }

        // Lives as long as the page.
        closure.forget();
    }

    /// Re-run the guard when the session status changes.
    fn setup_auth_redirect(&self) {
        let router = *self;
        let auth_status = self.auth_status;
        let current_route = self.current_route;

        Effect::new(move |prev: Option<AuthStatus>| {
            let next = auth_status.get();
            let route = current_route.get_untracked();

            match prev {
                // First settle after the initial check: resolve what the URL asked for.
                None | Some(AuthStatus::Checking) => router.apply(route, false),
                Some(previous) => {
                    if let Some(redirect) = route.on_auth_change(previous, next) {
                        log::info!("[router] session {:?} -> {:?}, leaving {}", previous, next, route);
                        router.apply(redirect, true);
                    }
                }
            }
            next
        });
    }
}

fn provide_router(auth_status: Signal<AuthStatus>) -> RouterService {
    let router = RouterService::new(auth_status);
    router.init_popstate_listener();
    router.setup_auth_redirect();
    provide_context(router);
    router
}

pub fn use_router() -> RouterService {
    use_context::<RouterService>().expect("RouterService not found in context. Ensure Router is provided.")
}

// ============================================================================
// Components
// ============================================================================

#[component]
pub fn Router(auth_status: Signal<AuthStatus>, children: Children) -> impl IntoView {
    provide_router(auth_status);
    children()
}

/// Renders the current route once the guard lets it through; a spinner
/// while the session is still being checked.
#[component]
pub fn RouterOutlet(matcher: fn(AppRoute) -> AnyView) -> impl IntoView {
    let router = use_router();
    let decision = Memo::new(move |_| router.current_route().get().resolve(router.auth_status.get()));

    move || match decision.get() {
        RouteDecision::Render(route) => matcher(route),
        RouteDecision::Wait | RouteDecision::Redirect(_) => view! {
            <div class="flex items-center justify-center min-h-screen">
                <span class="loading loading-spinner loading-lg text-primary"></span>
            </div>
        }
        .into_any(),
    }
}

/// In-app link; navigates through the router instead of reloading.
#[component]
pub fn Link(
    #[prop(into)] to: String,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let router = use_router();
    let target = to.clone();
    let on_click = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        router.navigate(&target);
    };

    view! {
        <a href=to class=class on:click=on_click>
            {children()}
        </a>
    }
}
