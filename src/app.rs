use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Meta, MetaTags, Stylesheet, Title};
use leptos_router::{
    components::{Route, Router, Routes},
    StaticSegment,
};

use crate::components::PlaceholderPage;
use crate::content::{DOCUMENT_LANG, SITE_NAME, SUBTITLE};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang=DOCUMENT_LANG>
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone() />
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        // injects a stylesheet into the document <head>
        // id=leptos means cargo-leptos will hot-reload this stylesheet
        <Stylesheet id="leptos" href="/pkg/deleon.css"/>

        <Title text=SITE_NAME/>
        <Meta name="description" content=SUBTITLE/>

        // every path shows the placeholder until the real site ships
        <Router>
            <main>
                <Routes fallback=|| view! { <PlaceholderPage/> }>
                    <Route path=StaticSegment("") view=PlaceholderPage/>
                </Routes>
            </main>
        </Router>
    }
}
