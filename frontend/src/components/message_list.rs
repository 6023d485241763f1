use crate::auth::{logout, use_api, use_auth};
use crate::components::notice::{ErrorPanel, NoticeToast};
use crate::web::confirm;
use crate::web::router::Link;
use leptos::prelude::*;
use leptos::task::spawn_local;
use msgdesk::text;
use msgdesk::view_state::{
    DeleteOutcome, LoadState, MessageList, MountGuard, Notice, NoticeKind, delete_with_confirmation,
};
use msgdesk::{AppRoute, Message};

#[component]
pub fn MessageListPage() -> impl IntoView {
    let auth = use_auth();
    let api = use_api();

    let mount = MountGuard::new();
    on_cleanup({
        let mount = mount.clone();
        move || mount.release()
    });

    let state = RwSignal::new(LoadState::<MessageList>::Loading);
    let notice = RwSignal::new(Option::<Notice>::None);

    let load = {
        let api = api.clone();
        let mount = mount.clone();
        move || {
            state.set(LoadState::Loading);
            let api = api.clone();
            let mount = mount.clone();
            spawn_local(async move {
                let result = api.list_messages().await;
                mount.run_if_alive(|| {
                    state.set(match result {
                        Ok(items) => LoadState::Ready(MessageList::new(items)),
                        Err(e) => LoadState::Failed(Notice::from_api_error(NoticeKind::LoadList, &e)),
                    })
                });
            });
        }
    };

    load();

    let handle_delete = {
        let api = api.clone();
        let mount = mount.clone();
        Callback::new(move |id: String| {
            let api = api.clone();
            let mount = mount.clone();
            spawn_local(async move {
                let result = delete_with_confirmation(&api, &id, || confirm(text::CONFIRM_DELETE)).await;
                mount.run_if_alive(|| match result {
                    Ok(DeleteOutcome::Deleted) => {
                        state.update(|s| {
                            if let LoadState::Ready(list) = s {
                                list.remove(&id);
                            }
                        });
                        notice.set(Some(Notice::success(NoticeKind::Delete, text::DELETED)));
                    }
                    Ok(DeleteOutcome::Cancelled) => {}
                    Err(e) => notice.set(Some(Notice::from_api_error(NoticeKind::Delete, &e))),
                });
            });
        })
    };

    let on_logout = move |_| logout(&auth);
    let reload = load.clone();
    let retry = load;

    let count = move || state.with(|s| s.ready().map(MessageList::len).unwrap_or(0));
    let phase = Memo::new(move |_| state.with(ListPhase::of));
    let rows = move || state.with(|s| s.ready().map(MessageList::keyed_rows).unwrap_or_default());

    view! {
        <NoticeToast notice=notice />
        <div class="min-h-screen bg-base-200 p-4 md:p-8 font-sans">
            <div class="max-w-5xl mx-auto space-y-6">
                <div class="navbar bg-base-100 rounded-box shadow-xl">
                    <div class="flex-1 gap-2">
                        <span class="btn btn-ghost text-xl">"Mensagens"</span>
                        <span class="badge badge-neutral">{count}</span>
                    </div>
                    <div class="flex-none gap-2">
                        <button
                            class="btn btn-ghost"
                            disabled=move || state.with(LoadState::is_loading)
                            on:click=move |_| reload()
                        >
                            "Atualizar"
                        </button>
                        <Link to="/messages/new" class="btn btn-primary">"Nova mensagem"</Link>
                        <button on:click=on_logout class="btn btn-outline btn-error">"Sair"</button>
                    </div>
                </div>

                {move || match phase.get() {
                    ListPhase::Loading => view! {
                        <div class="text-center py-8 text-base-content/50">
                            <span class="loading loading-spinner loading-md"></span> " Carregando..."
                        </div>
                    }
                    .into_any(),
                    ListPhase::Failed(failure) => {
                        let retry = retry.clone();
                        view! {
                            <ErrorPanel notice=failure>
                                <button class="btn btn-sm" on:click=move |_| retry()>"Tentar novamente"</button>
                            </ErrorPanel>
                        }
                        .into_any()
                    }
                    ListPhase::Empty => view! {
                        <div class="text-center py-8 text-base-content/50">"Nenhuma mensagem encontrada."</div>
                    }
                    .into_any(),
                    ListPhase::Data => view! {
                        <div class="grid gap-4">
                            <For
                                each=rows
                                key=|(key, _)| key.clone()
                                children=move |(_, message)| view! { <MessageCard message=message on_delete=handle_delete /> }
                            />
                        </div>
                    }
                    .into_any(),
                }}
            </div>
        </div>
    }
}

/// Which rendering the list is in; rows are diffed separately.
#[derive(Debug, Clone, PartialEq)]
enum ListPhase {
    Loading,
    Failed(Notice),
    Empty,
    Data,
}

impl ListPhase {
    fn of(state: &LoadState<MessageList>) -> Self {
        match state {
            LoadState::Loading => Self::Loading,
            LoadState::Failed(notice) => Self::Failed(notice.clone()),
            LoadState::Ready(list) if list.is_empty() => Self::Empty,
            LoadState::Ready(_) => Self::Data,
        }
    }
}

#[component]
fn MessageCard(message: Message, on_delete: Callback<String>) -> impl IntoView {
    let id = message.id.clone();
    let created = message.created_label();
    // A record without an id cannot be opened, edited or deleted.
    let actions = (!id.is_empty()).then(|| {
        let detail = AppRoute::MessageDetail(id.clone()).to_path();
        let edit = AppRoute::EditMessage(id.clone()).to_path();
        view! {
            <div class="card-actions justify-end">
                <Link to=detail class="btn btn-sm btn-ghost">"Ver"</Link>
                <Link to=edit class="btn btn-sm">"Editar"</Link>
                <button class="btn btn-sm btn-error" on:click=move |_| on_delete.run(id.clone())>
                    "Deletar"
                </button>
            </div>
        }
    });

    view! {
        <div class="card bg-base-100 shadow">
            <div class="card-body">
                <div class="flex items-start justify-between gap-2">
                    <h2 class="card-title">{message.title}</h2>
                    <StatusBadge status=message.status />
                </div>
                <p class="whitespace-pre-wrap">{message.body}</p>
                <div class="text-sm text-base-content/60 flex flex-wrap gap-4">
                    <span>"ID: " {message.id}</span>
                    <span>"Autor: " {message.author}</span>
                    {created.map(|c| view! { <span>"Criado em: " {c}</span> })}
                </div>
                {actions}
            </div>
        </div>
    }
}

#[component]
pub fn StatusBadge(#[prop(into)] status: String) -> impl IntoView {
    view! { <span class="badge badge-outline whitespace-nowrap">{status}</span> }
}
