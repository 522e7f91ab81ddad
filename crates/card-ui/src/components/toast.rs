use card_types::CardPadding;
use leptos::prelude::*;

use crate::components::card::Card;

const DISMISS_AFTER: std::time::Duration = std::time::Duration::from_secs(3);

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ToastLevel {
    Info,
    Success,
}

impl ToastLevel {
    fn accent_class(self) -> &'static str {
        match self {
            ToastLevel::Info => "border-l-4 border-l-sky-400",
            ToastLevel::Success => "border-l-4 border-l-emerald-400",
        }
    }
}

#[derive(Clone, Debug)]
pub struct Toast {
    pub id: u64,
    pub message: String,
    pub level: ToastLevel,
}

#[derive(Clone, Copy)]
pub struct ToastContext {
    set_toasts: WriteSignal<Vec<Toast>>,
    next_id: StoredValue<u64>,
}

impl ToastContext {
    pub fn push(&self, message: impl Into<String>, level: ToastLevel) {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);

        let message = message.into();
        tracing::debug!(id, ?level, "toast: {message}");
        self.set_toasts.update(|toasts| {
            toasts.push(Toast { id, message, level });
        });

        let setToasts = self.set_toasts;
        set_timeout(
            move || {
                setToasts.update(|toasts| toasts.retain(|t| t.id != id));
            },
            DISMISS_AFTER,
        );
    }
}

/// Provides [`ToastContext`] to its children and renders the toast stack.
/// Each toast is itself a small [`Card`].
#[component]
pub fn ToastProvider(children: Children) -> impl IntoView {
    let (toasts, setToasts) = signal(Vec::<Toast>::new());

    provide_context(ToastContext {
        set_toasts: setToasts,
        next_id: StoredValue::new(0),
    });

    view! {
        {children()}
        <div class="fixed bottom-4 right-4 flex flex-col gap-2">
            <For each=move || toasts.get() key=|toast| toast.id let:toast>
                <Card padding=CardPadding::Small class=toast.level.accent_class()>
                    <span class="text-sm">{toast.message.clone()}</span>
                </Card>
            </For>
        </div>
    }
}
