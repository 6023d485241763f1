//! Create/edit page.
//!
//! One component for both modes: edit mode loads the record first and locks
//! the author field.

mod fields;
mod form_state;

use self::fields::MessageFields;
use self::form_state::FormState;
use crate::auth::use_api;
use crate::components::notice::{ErrorPanel, NoticeToast};
use crate::web::router::{Link, use_router};
use leptos::prelude::*;
use leptos::task::spawn_local;
use msgdesk::AppRoute;
use msgdesk::forms::{FormMode, SubmitError, submit_draft};
use msgdesk::view_state::{LoadState, MountGuard, Notice, NoticeKind};

#[component]
pub fn MessageFormPage(mode: FormMode) -> impl IntoView {
    let api = use_api();
    let router = use_router();

    let mount = MountGuard::new();
    on_cleanup({
        let mount = mount.clone();
        move || mount.release()
    });

    let form = FormState::new();
    let notice = RwSignal::new(Option::<Notice>::None);
    let submitting = RwSignal::new(false);
    let prefill = RwSignal::new(LoadState::<()>::Ready(()));

    if let FormMode::Edit(id) = &mode {
        prefill.set(LoadState::Loading);
        let api = api.clone();
        let mount = mount.clone();
        let id = id.clone();
        spawn_local(async move {
            let result = api.get_message(&id).await;
            mount.run_if_alive(|| match result {
                Ok(message) => {
                    form.fill(&message);
                    prefill.set(LoadState::Ready(()));
                }
                Err(e) => prefill.set(LoadState::Failed(Notice::from_api_error(NoticeKind::LoadMessage, &e))),
            });
        });
    }

    let is_edit = mode.is_edit();
    let mode = StoredValue::new(mode);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        form.errors.set(Default::default());
        notice.set(None);
        submitting.set(true);

        let draft = form.to_draft();
        let mode = mode.get_value();
        let api = api.clone();
        let mount = mount.clone();
        spawn_local(async move {
            let result = submit_draft(&api, &draft, &mode).await;
            mount.run_if_alive(|| {
                submitting.set(false);
                match result {
                    Ok(_) => router.navigate_to(AppRoute::MessageList),
                    Err(SubmitError::Invalid(errors)) => form.errors.set(errors),
                    Err(SubmitError::Api(e)) => notice.set(Some(Notice::from_api_error(NoticeKind::Save, &e))),
                }
            });
        });
    };

    let heading = if is_edit { "Editar mensagem" } else { "Nova mensagem" };

    view! {
        <NoticeToast notice=notice />
        <div class="min-h-screen bg-base-200 p-4 md:p-8">
            <div class="max-w-3xl mx-auto space-y-4">
                <Link to="/" class="btn btn-ghost btn-sm">"← Voltar"</Link>
                <h1 class="text-2xl font-bold">{heading}</h1>

                {move || match prefill.get() {
                    LoadState::Loading => view! {
                        <div class="text-center py-8 text-base-content/50">
                            <span class="loading loading-spinner loading-md"></span> " Carregando..."
                        </div>
                    }
                    .into_any(),
                    LoadState::Failed(failure) => view! {
                        <ErrorPanel notice=failure>
                            <Link to="/" class="btn btn-sm">"Voltar à lista"</Link>
                        </ErrorPanel>
                    }
                    .into_any(),
                    LoadState::Ready(()) => {
                        let on_submit = on_submit.clone();
                        view! {
                            <form class="card bg-base-100 shadow-xl" on:submit=on_submit novalidate>
                                <div class="card-body space-y-2">
                                    <MessageFields state=form author_locked=is_edit />
                                    <div class="card-actions justify-end mt-4">
                                        <Link to="/" class="btn btn-ghost">"Cancelar"</Link>
                                        <button type="submit" class="btn btn-primary" disabled=move || submitting.get()>
                                            {move || if submitting.get() {
                                                view! { <span class="loading loading-spinner"></span> "Salvando..." }.into_any()
                                            } else {
                                                "Salvar".into_any()
                                            }}
                                        </button>
                                    </div>
                                </div>
                            </form>
                        }
                        .into_any()
                    }
                }}
            </div>
        </div>
    }
}
