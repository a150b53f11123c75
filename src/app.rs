mod contact;
mod header;
mod homepage;
mod projects;

use chrono::DateTime;
use contact::ContactPage;
use header::Header;
use homepage::HomePage;
use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};
use projects::ProjectsPage;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="font-sans bg-background text-foreground min-h-screen flex flex-col">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        <Title formatter=|title| format!("Alex Moreno - {title}") />
        <Meta
            name="description"
            content="Portfolio of Alex Moreno, full-stack engineer: projects, experience and contact."
        />

        <Router>
            <Header />
            <main class="flex flex-col flex-grow items-center mx-auto w-full max-w-7xl px-4">
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/projects") view=ProjectsPage />
                    <Route path=path!("/contact") view=ContactPage />
                </Routes>
            </main>
            <Footer />
        </Router>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    #[cfg(feature = "ssr")]
    {
        let resp = expect_context::<leptos_axum::ResponseOptions>();
        resp.set_status(http::StatusCode::NOT_FOUND);
    }
    view! {
        <Title text="Not Found" />
        <div class="my-24 text-center">
            <h1 class="text-3xl font-bold mb-4">"404"</h1>
            <p class="text-muted mb-6">"There's nothing at this address."</p>
            <A href="/" attr:class="text-cyan hover:underline">
                "Back to the start"
            </A>
        </div>
    }
}

fn build_date() -> Option<String> {
    DateTime::parse_from_rfc3339(env!("BUILD_TIME"))
        .ok()
        .map(|d| d.format("%B %Y").to_string())
}

#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="mt-16 py-6 border-t border-muted/30 text-center text-sm text-muted">
            <span>"© Alex Moreno"</span>
            {build_date().map(|d| view! { <span>" · Last updated " {d}</span> })}
        </footer>
    }
}
