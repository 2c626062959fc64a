mod about;
mod contact;
mod footer;
mod header;
mod hero;
mod projects;
mod skills;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::theme::{self, Theme};

use about::About;
use contact::Contact;
use footer::Footer;
use header::Header;
use hero::Hero;
use projects::Projects;
use skills::Skills;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en" data-theme="dark">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark light" />
                <link rel="icon" type="image/svg+xml" href="/favicon.svg" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body>
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    // The theme has a single writer (the header's toggle); every section
    // gets the read side passed in explicitly.
    let (theme, set_theme) = signal(Theme::Dark);

    // One-shot startup resolution: stored choice, then system preference
    Effect::watch(
        || (),
        move |_, _, _| {
            let initial = Theme::initial(theme::stored_theme(), theme::system_prefers_dark());
            log::debug!("startup theme resolved to {initial}");
            theme::apply_theme(initial);
            set_theme(initial);
        },
        true,
    );

    // Every change after that restyles the document and persists
    Effect::watch(
        move || theme.get(),
        move |current, _, _| {
            theme::apply_theme(*current);
            theme::persist_theme(*current);
        },
        false,
    );

    view! {
        // sets the document title
        <Title formatter=|title| format!("Muhammad Hassan Khan - {title}") />

        <Router>
            <Header theme set_theme />
            <main>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=path!("/") view=move || view! { <LandingPage theme /> } />
                </Routes>
            </main>
            <Footer theme />
        </Router>
    }
}

/// The whole site is one page; the sections stack in the order the
/// scroll-spy expects them.
#[component]
fn LandingPage(theme: ReadSignal<Theme>) -> impl IntoView {
    view! {
        <Title text="Portfolio" />
        <Hero theme />
        <About theme />
        <Skills theme />
        <Projects theme />
        <Contact theme />
    }
}
