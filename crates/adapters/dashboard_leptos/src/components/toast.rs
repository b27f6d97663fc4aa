//! Toast notifications. The browser side of the controllers' [`Notifier`].

use camwatch_app::ports::{Notice, NoticeKind, Notifier};
use leptos::prelude::*;
use leptos::task::spawn_local;

const DISMISS_AFTER_MS: u32 = 5000;

/// A single toast message.
#[derive(Debug, Clone)]
pub struct ToastMessage {
    /// Unique id for keyed rendering.
    pub id: u32,
    pub notice: Notice,
}

fn icon(kind: NoticeKind) -> &'static str {
    match kind {
        NoticeKind::Info => "fas fa-info-circle",
        NoticeKind::Success => "fas fa-check-circle",
        NoticeKind::Error => "fas fa-exclamation-circle",
    }
}

/// Reactive context providing toast mutation methods.
#[derive(Debug, Clone)]
pub struct ToastProvider {
    set_toasts: WriteSignal<Vec<ToastMessage>>,
    next_id: ReadSignal<u32>,
    set_next_id: WriteSignal<u32>,
}

impl ToastProvider {
    /// Push a new toast. It auto-dismisses after 5 seconds.
    pub fn push(&self, notice: Notice) {
        let id = self.next_id.get_untracked();
        self.set_next_id.set(id.wrapping_add(1));

        self.set_toasts.update(|list| {
            list.push(ToastMessage { id, notice });
        });

        let set_toasts = self.set_toasts;
        spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(DISMISS_AFTER_MS).await;
            set_toasts.update(|list| {
                list.retain(|t| t.id != id);
            });
        });
    }

    /// Dismiss a toast immediately by id.
    pub fn dismiss(&self, id: u32) {
        self.set_toasts.update(|list| {
            list.retain(|t| t.id != id);
        });
    }
}

impl Notifier for ToastProvider {
    fn notify(&self, notice: Notice) {
        tracing::debug!(kind = %notice.kind, text = %notice.text, "toast");
        self.push(notice);
    }
}

/// Access the toast provider from Leptos context.
///
/// Must be called within a component tree that has a [`ToastContainer`] ancestor.
pub fn use_toasts() -> ToastProvider {
    use_context::<ToastProvider>().expect("ToastProvider not found in context")
}

/// Container component that provides toast context and renders active toasts.
#[component]
pub fn ToastContainer(children: Children) -> impl IntoView {
    let (toasts, set_toasts) = signal(Vec::<ToastMessage>::new());
    let (next_id, set_next_id) = signal(0_u32);

    let provider = ToastProvider {
        set_toasts,
        next_id,
        set_next_id,
    };

    provide_context(provider.clone());

    view! {
        {children()}
        <div class="toast-container">
            {move || {
                toasts
                    .get()
                    .into_iter()
                    .map(|toast| {
                        let id = toast.id;
                        let p = provider.clone();
                        let kind = toast.notice.kind;
                        let class = format!("toast toast-{kind}");
                        view! {
                            <div class=class>
                                <i class=icon(kind)></i>
                                <span class="toast-text">{toast.notice.text}</span>
                                <button class="toast-dismiss" on:click=move |_| p.dismiss(id)>
                                    "\u{00D7}"
                                </button>
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}
