use crate::auth::{login, use_api, use_auth};
use crate::components::notice::{FieldHint, NoticeToast};
use crate::web::router::use_router;
use leptos::prelude::*;
use leptos::task::spawn_local;
use msgdesk::forms::{Field, FieldErrors, LoginForm};
use msgdesk::text;
use msgdesk::view_state::{MountGuard, Notice, NoticeKind};

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth();
    let router = use_router();
    let api = use_api();

    let mount = MountGuard::new();
    on_cleanup({
        let mount = mount.clone();
        move || mount.release()
    });

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let errors = RwSignal::new(FieldErrors::new());
    let notice = RwSignal::new(Option::<Notice>::None);
    let submitting = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }

        let form = LoginForm {
            username: username.get_untracked(),
            password: password.get_untracked(),
        };
        let credentials = match form.validate() {
            Ok(credentials) => credentials,
            Err(invalid) => {
                errors.set(invalid);
                return;
            }
        };

        errors.set(FieldErrors::new());
        notice.set(None);
        submitting.set(true);

        let api = api.clone();
        let mount = mount.clone();
        spawn_local(async move {
            let result = login(&auth, &api, &credentials).await;
            mount.run_if_alive(|| {
                submitting.set(false);
                match result {
                    Ok(next) => router.navigate_to(next),
                    Err(e) => notice.set(Some(Notice::from_api_error(NoticeKind::Login, &e))),
                }
            });
        });
    };

    view! {
        <NoticeToast notice=notice />
        <div class="hero min-h-screen bg-base-200">
            <div class="hero-content flex-col w-full max-w-md">
                <div class="text-center mb-4">
                    <h1 class="text-3xl font-bold">{text::APP_TITLE}</h1>
                    <p class="text-base-content/70">"Entre com seu usuário e senha"</p>
                </div>

                <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                    <form class="card-body" on:submit=on_submit novalidate>
                        <div class="form-control">
                            <label class="label" for="username">
                                <span class="label-text">"Usuário"</span>
                            </label>
                            <input
                                id="username"
                                type="text"
                                autocomplete="username"
                                on:input=move |ev| username.set(event_target_value(&ev))
                                prop:value=username
                                class="input input-bordered"
                            />
                            <FieldHint errors=errors field=Field::Username />
                        </div>
                        <div class="form-control">
                            <label class="label" for="password">
                                <span class="label-text">"Senha"</span>
                            </label>
                            <input
                                id="password"
                                type="password"
                                autocomplete="current-password"
                                placeholder="••••••••"
                                on:input=move |ev| password.set(event_target_value(&ev))
                                prop:value=password
                                class="input input-bordered"
                            />
                            <FieldHint errors=errors field=Field::Password />
                        </div>
                        <div class="form-control mt-6">
                            <button class="btn btn-primary" disabled=move || submitting.get()>
                                {move || if submitting.get() {
                                    view! { <span class="loading loading-spinner"></span> "Entrando..." }.into_any()
                                } else {
                                    "Entrar".into_any()
                                }}
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </div>
    }
}
