use leptos::prelude::*;

/// In-page links to the gallery sections.
#[component]
pub fn Nav() -> impl IntoView {
    let sections = [
        ("#padding", "Padding"),
        ("#hover", "Hover"),
        ("#click", "Click"),
    ];

    view! {
        <nav class="flex items-center justify-between border-b border-white/10 px-8 py-4">
            <span class="text-lg font-semibold">"Card Kit"</span>
            <ul class="flex gap-6 text-sm text-slate-300">
                {sections
                    .into_iter()
                    .map(|(href, label)| {
                        view! {
                            <li>
                                <a class="hover:text-white" href=href>
                                    {label}
                                </a>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </nav>
    }
}
