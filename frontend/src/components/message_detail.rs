use crate::auth::use_api;
use crate::components::message_list::StatusBadge;
use crate::components::notice::ErrorPanel;
use crate::web::router::Link;
use leptos::prelude::*;
use leptos::task::spawn_local;
use msgdesk::view_state::{LoadState, MountGuard, Notice, NoticeKind};
use msgdesk::{AppRoute, Message};

#[component]
pub fn MessageDetailPage(id: String) -> impl IntoView {
    let api = use_api();

    let mount = MountGuard::new();
    on_cleanup({
        let mount = mount.clone();
        move || mount.release()
    });

    let state = RwSignal::new(LoadState::<Message>::Loading);

    {
        let id = id.clone();
        let mount = mount.clone();
        spawn_local(async move {
            let result = api.get_message(&id).await;
            mount.run_if_alive(|| {
                state.set(match result {
                    Ok(message) => LoadState::Ready(message),
                    Err(e) => LoadState::Failed(Notice::from_api_error(NoticeKind::LoadMessage, &e)),
                })
            });
        });
    }

    let edit_path = AppRoute::EditMessage(id).to_path();

    view! {
        <div class="min-h-screen bg-base-200 p-4 md:p-8">
            <div class="max-w-3xl mx-auto space-y-4">
                <Link to="/" class="btn btn-ghost btn-sm">"← Voltar"</Link>

                {move || match state.get() {
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
                    LoadState::Ready(message) => view! {
                        <MessageView message=message edit_path=edit_path.clone() />
                    }
                    .into_any(),
                }}
            </div>
        </div>
    }
}

#[component]
fn MessageView(message: Message, edit_path: String) -> impl IntoView {
    let created = message.created_label();
    let updated = message.updated_label();

    view! {
        <div class="card bg-base-100 shadow-xl">
            <div class="card-body space-y-2">
                <div class="flex items-start justify-between gap-2">
                    <h1 class="card-title text-2xl">{message.title}</h1>
                    <StatusBadge status=message.status />
                </div>
                <p class="whitespace-pre-wrap">{message.body}</p>
                <dl class="grid grid-cols-[auto_1fr] gap-x-4 gap-y-1 text-sm text-base-content/70">
                    <dt>"ID"</dt>
                    <dd class="font-mono">{message.id}</dd>
                    <dt>"Autor"</dt>
                    <dd>{message.author}</dd>
                    <dt>"Criado em"</dt>
                    <dd>{created.unwrap_or_else(|| "-".to_string())}</dd>
                    <dt>"Atualizado em"</dt>
                    <dd>{updated.unwrap_or_else(|| "-".to_string())}</dd>
                </dl>
                <div class="card-actions justify-end">
                    <Link to=edit_path class="btn btn-primary btn-sm">"Editar"</Link>
                </div>
            </div>
        </div>
    }
}
