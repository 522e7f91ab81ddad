use leptos::prelude::*;
use leptos_meta::*;

use crate::components::nav::Nav;
use crate::components::toast::ToastProvider;
use crate::pages::gallery::GalleryPage;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <link rel="icon" href="/favicon.svg" type="image/svg+xml" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <MetaTags />
            </head>
            <body class="min-h-screen bg-slate-950 text-slate-100">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/card-console.css" />
        <Title text="Card Kit" />
        <ToastProvider>
            <Nav />
            <main>
                <GalleryPage />
            </main>
        </ToastProvider>
    }
}
