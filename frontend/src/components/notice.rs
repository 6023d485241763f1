//! Feedback widgets: the page toast for `Notice`s and inline field hints.

use leptos::prelude::*;
use msgdesk::forms::{Field, FieldErrors};
use msgdesk::view_state::{Notice, Severity};
use std::time::Duration;

fn alert_class(severity: Severity) -> &'static str {
    match severity {
        Severity::Success => "alert alert-success shadow-lg",
        Severity::Error => "alert alert-error shadow-lg",
    }
}

/// Tells a dismiss timer whether the notice it was started for is still the
/// one on screen. Every write to the channel opens a new generation, even a
/// write of an equal notice.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct DismissClock {
    generation: u64,
}

impl DismissClock {
    fn advance(&mut self) -> u64 {
        self.generation += 1;
        self.generation
    }

    fn owns(&self, ticket: u64) -> bool {
        self.generation == ticket
    }
}

/// Toast for a page's notice channel. Success notices clear themselves after
/// 3 seconds unless something else was shown meanwhile; errors stay until
/// dismissed.
#[component]
pub fn NoticeToast(notice: RwSignal<Option<Notice>>) -> impl IntoView {
    let clock = StoredValue::new(DismissClock::default());

    Effect::new(move |_| {
        let is_success = notice.with(|n| n.as_ref().is_some_and(|n| n.severity == Severity::Success));
        let Some(ticket) = clock.try_update_value(DismissClock::advance) else {
            return;
        };
        if is_success {
            set_timeout(
                move || {
                    if clock.try_with_value(|c| c.owns(ticket)).unwrap_or(false) {
                        notice.set(None);
                    }
                },
                Duration::from_secs(3),
            );
        }
    });

    move || {
        notice.get().map(|n| {
            view! {
                <div class="toast toast-top toast-end z-50">
                    <div role="alert" class=alert_class(n.severity)>
                        <span>{n.message}</span>
                        <button class="btn btn-ghost btn-xs" on:click=move |_| notice.set(None)>
                            "✕"
                        </button>
                    </div>
                </div>
            }
        })
    }
}

/// Full-width error block for a view that failed to load.
#[component]
pub fn ErrorPanel(notice: Notice, children: Children) -> impl IntoView {
    view! {
        <div role="alert" class=alert_class(notice.severity)>
            <span>{notice.message}</span>
            <div>{children()}</div>
        </div>
    }
}

/// Validation message under an input, if that field failed.
#[component]
pub fn FieldHint(errors: RwSignal<FieldErrors>, field: Field) -> impl IntoView {
    move || {
        errors.with(|e| e.get(field)).map(|message| {
            view! {
                <label class="label">
                    <span class="label-text-alt text-error">{message}</span>
                </label>
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newer_notice_outlives_older_timer() {
        let mut clock = DismissClock::default();
        let success = clock.advance();
        let error = clock.advance();
        assert!(!clock.owns(success));
        assert!(clock.owns(error));
    }

    #[test]
    fn repeated_success_gets_its_own_timer() {
        let mut clock = DismissClock::default();
        let first = clock.advance();
        let second = clock.advance();
        assert!(!clock.owns(first));
        assert!(clock.owns(second));
    }

    #[test]
    fn untouched_success_is_cleared() {
        let mut clock = DismissClock::default();
        let ticket = clock.advance();
        assert!(clock.owns(ticket));
    }
}
