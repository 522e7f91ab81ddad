use card_types::CardPadding;
use leptos::callback::Callback;
use leptos::prelude::*;

use crate::components::card::Card;
use crate::components::toast::{ToastContext, ToastLevel};

#[component]
pub fn GalleryPage() -> impl IntoView {
    view! {
        <div class="mx-auto max-w-5xl space-y-12 px-8 py-10">
            <PaddingSection />
            <HoverSection />
            <ClickSection />
        </div>
    }
}

#[component]
fn Section(id: &'static str, title: &'static str, children: Children) -> impl IntoView {
    view! {
        <section id=id class="space-y-4">
            <h2 class="text-xl font-semibold">{title}</h2>
            <div class="grid gap-6 md:grid-cols-3">{children()}</div>
        </section>
    }
}

#[component]
fn PaddingSection() -> impl IntoView {
    view! {
        <Section id="padding" title="Padding">
            {CardPadding::ALL
                .into_iter()
                .map(|padding| {
                    view! {
                        <Card padding=padding>
                            <div class="font-medium">{padding.to_string()}</div>
                            <code class="text-xs text-slate-400">{padding.spacing_class()}</code>
                        </Card>
                    }
                })
                .collect_view()}
        </Section>
    }
}

#[component]
fn HoverSection() -> impl IntoView {
    view! {
        <Section id="hover" title="Hover">
            <Card>
                <div class="font-medium">"Static"</div>
                <p class="text-sm text-slate-400">"No hover affordance."</p>
            </Card>
            <Card hoverable=true>
                <div class="font-medium">"Hoverable"</div>
                <p class="text-sm text-slate-400">"Lifts and highlights under the pointer."</p>
            </Card>
            <Card padding=CardPadding::Large hoverable=true class="md:col-span-1 ring-1 ring-sky-400/30">
                <div class="font-medium">"Hoverable with extra classes"</div>
                <p class="text-sm text-slate-400">"Caller classes land after the computed ones."</p>
            </Card>
        </Section>
    }
}

#[component]
fn ClickSection() -> impl IntoView {
    let (clicks, setClicks) = signal(0u32);
    let toasts = use_context::<ToastContext>();

    let onClick = Callback::new(move |_: ()| {
        setClicks.update(|n| *n += 1);
        if let Some(toasts) = toasts {
            let count = clicks.get_untracked();
            toasts.push(format!("Card clicked ({count})"), ToastLevel::Success);
        }
    });

    view! {
        <Section id="click" title="Click">
            <Card hoverable=true on_click=onClick>
                <div class="font-medium">"Clickable"</div>
                <p class="text-sm text-slate-400">
                    "Clicked " {move || clicks.get()} " times"
                </p>
            </Card>
            <Card>
                <div class="font-medium">"Inert"</div>
                <p class="text-sm text-slate-400">"No click listener, default cursor."</p>
            </Card>
        </Section>
    }
}

#[cfg(test)]
mod tests {
    use card_types::CLICKABLE_CLASS;

    use super::*;

    #[test]
    fn gallery_shows_every_padding_and_one_clickable_card() {
        let owner = Owner::new();
        let html = owner.with(|| view! { <GalleryPage /> }.to_html());

        for padding in CardPadding::ALL {
            assert!(html.contains(padding.spacing_class()), "{padding}");
        }
        assert_eq!(html.matches(CLICKABLE_CLASS).count(), 1, "{html}");
        assert!(html.contains("Clicked "));
    }
}
