use leptos::{ev, prelude::*};
use leptos_use::{use_event_listener, use_window};

use crate::data::PERSONAL;
use crate::sections::{self, Section, HEADER_OFFSET};
use crate::theme::Theme;

fn desktop_link_class(theme: Theme, is_active: bool) -> String {
    let state = match (theme, is_active) {
        (Theme::Dark, true) => "text-blue-400 bg-blue-500/10",
        (Theme::Light, true) => "text-blue-600 bg-blue-500/10",
        (Theme::Dark, false) => "text-gray-300 hover:text-blue-400",
        (Theme::Light, false) => "text-gray-600 hover:text-blue-600",
    };
    format!("flex items-center space-x-2 px-3 py-2 rounded-lg transition-all duration-300 {state}")
}

fn mobile_link_class(theme: Theme, is_active: bool) -> String {
    let state = match (theme, is_active) {
        (Theme::Dark, true) => "text-blue-400 bg-blue-500/10",
        (Theme::Light, true) => "text-blue-600 bg-blue-500/10",
        (Theme::Dark, false) => "text-gray-300 hover:text-blue-400 hover:bg-gray-800",
        (Theme::Light, false) => "text-gray-600 hover:text-blue-600 hover:bg-gray-100",
    };
    format!(
        "flex items-center space-x-3 px-4 py-3 rounded-lg transition-all duration-300 text-left {state}"
    )
}

#[component]
pub fn Header(theme: ReadSignal<Theme>, set_theme: WriteSignal<Theme>) -> impl IntoView {
    let (active, set_active) = signal(Section::Home);
    let (menu_open, set_menu_open) = signal(false);

    // Track which section sits under the fixed header as the page moves.
    // A probe outside every section keeps the last match active.
    let _ = use_event_listener(use_window(), ev::scroll, move |_| {
        let probe = sections::scroll_position() + HEADER_OFFSET;
        if let Some(section) = sections::active_section(&sections::measure_all(), probe) {
            set_active(section);
        }
    });

    let navigate_to = move |section: Section| {
        sections::scroll_to(section);
        set_menu_open(false);
    };

    view! {
        <header class=move || {
            if theme().is_dark() {
                "fixed top-0 left-0 right-0 z-50 transition-all duration-300 border-b bg-gray-900/90 backdrop-blur-md border-gray-800"
            } else {
                "fixed top-0 left-0 right-0 z-50 transition-all duration-300 border-b bg-white/90 backdrop-blur-md border-gray-200"
            }
        }>
            <div class="container mx-auto px-6 py-4">
                <div class="flex items-center justify-between">
                    <div class="flex items-center space-x-2">
                        <div class="w-10 h-10 rounded-full bg-gradient-to-r from-blue-500 to-teal-500 flex items-center justify-center text-white font-bold">
                            {PERSONAL.initials}
                        </div>
                        <span class=move || {
                            if theme().is_dark() {
                                "text-xl font-bold text-white"
                            } else {
                                "text-xl font-bold text-gray-800"
                            }
                        }>{PERSONAL.name}</span>
                    </div>

                    <nav class="hidden lg:flex items-center space-x-8">
                        {Section::ALL
                            .iter()
                            .map(|&section| {
                                view! {
                                    <button
                                        on:click=move |_| navigate_to(section)
                                        class=move || desktop_link_class(theme(), active() == section)
                                    >
                                        {section.label()}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </nav>

                    <div class="flex items-center space-x-4">
                        <button
                            on:click=move |_| set_theme.update(|t| *t = t.toggled())
                            aria-label="Toggle theme"
                            class=move || {
                                if theme().is_dark() {
                                    "p-2 rounded-lg transition-all duration-300 text-yellow-400 bg-yellow-400/10 hover:bg-yellow-400/20"
                                } else {
                                    "p-2 rounded-lg transition-all duration-300 text-gray-600 bg-gray-100 hover:bg-gray-200"
                                }
                            }
                        >
                            {move || if theme().is_dark() { "\u{2600}" } else { "\u{263E}" }}
                        </button>

                        <button
                            on:click=move |_| set_menu_open.update(|open| *open = !*open)
                            aria-label="Toggle navigation menu"
                            class=move || {
                                if theme().is_dark() {
                                    "lg:hidden p-2 rounded-lg transition-all duration-300 text-white bg-gray-800 hover:bg-gray-700"
                                } else {
                                    "lg:hidden p-2 rounded-lg transition-all duration-300 text-gray-600 bg-gray-100 hover:bg-gray-200"
                                }
                            }
                        >
                            {move || if menu_open() { "\u{2715}" } else { "\u{2630}" }}
                        </button>
                    </div>
                </div>

                <div class=move || {
                    if menu_open() {
                        "lg:hidden overflow-hidden transition-all duration-300 max-h-96 mt-4"
                    } else {
                        "lg:hidden overflow-hidden transition-all duration-300 max-h-0"
                    }
                }>
                    <nav class="flex flex-col space-y-2 py-2">
                        {Section::ALL
                            .iter()
                            .map(|&section| {
                                view! {
                                    <button
                                        on:click=move |_| navigate_to(section)
                                        class=move || mobile_link_class(theme(), active() == section)
                                    >
                                        {section.label()}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </nav>
                </div>
            </div>
        </header>
    }
}
