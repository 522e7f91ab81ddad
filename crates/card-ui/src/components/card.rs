use card_types::{CardPadding, CardStyle};
use leptos::callback::{Callable, Callback};
use leptos::prelude::*;

/// Styled container around arbitrary content.
///
/// The class list is computed once per render from `padding`, `hoverable`,
/// whether `on_click` is set, and `class` (appended last). Without `on_click`
/// no click listener is attached at all.
///
/// ```rust,ignore
/// view! {
///     <Card padding=CardPadding::Large hoverable=true class="md:col-span-2">
///         <h3>"Title"</h3>
///     </Card>
/// }
/// ```
#[component]
pub fn Card(
    /// Card content, forwarded untouched
    children: Children,
    /// Extra classes appended after the computed ones
    #[prop(optional, into)]
    class: Option<String>,
    /// Inner spacing, defaults to medium
    #[prop(optional)]
    padding: CardPadding,
    /// Lift and highlight the card on pointer hover
    #[prop(optional)]
    hoverable: bool,
    /// Click response; also gives the card a pointer cursor
    #[prop(optional, into)]
    on_click: Option<Callback<()>>,
) -> impl IntoView {
    let style = CardStyle {
        padding,
        hoverable,
        clickable: on_click.is_some(),
        class,
    };
    let classes = style.class_list();

    match on_click {
        Some(onClick) => view! {
            <div class=classes on:click=move |_| respond_to_click(&onClick)>
                {children()}
            </div>
        }
        .into_any(),
        // No handler, no listener.
        None => view! { <div class=classes>{children()}</div> }.into_any(),
    }
}

fn respond_to_click(on_click: &Callback<()>) {
    tracing::debug!("card clicked");
    on_click.run(());
}
