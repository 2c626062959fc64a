use chrono::Local;
use leptos::prelude::*;

use crate::data::{
    self, LanguageLevel, CURRENT_LEARNING, EDUCATION, GOALS, LANGUAGES, PERSONAL, REFERENCES,
    SOFT_SKILLS,
};
use crate::theme::Theme;

fn card_class(theme: Theme) -> &'static str {
    if theme.is_dark() {
        "p-8 rounded-2xl backdrop-blur-sm border bg-gray-800/50 border-gray-700 shadow-xl"
    } else {
        "p-8 rounded-2xl backdrop-blur-sm border bg-white/50 border-gray-200 shadow-xl"
    }
}

fn card_title_class(theme: Theme) -> &'static str {
    if theme.is_dark() {
        "text-2xl font-bold mb-6 text-white"
    } else {
        "text-2xl font-bold mb-6 text-gray-900"
    }
}

fn body_text_class(theme: Theme) -> &'static str {
    if theme.is_dark() {
        "text-gray-300"
    } else {
        "text-gray-700"
    }
}

fn tile_class(theme: Theme) -> &'static str {
    if theme.is_dark() {
        "flex items-center gap-3 p-4 rounded-lg bg-gray-700/30"
    } else {
        "flex items-center gap-3 p-4 rounded-lg bg-gray-100/50"
    }
}

fn language_badge_class(level: LanguageLevel) -> &'static str {
    match level {
        LanguageLevel::Native => {
            "px-3 py-1 rounded-full text-sm font-medium bg-green-100 text-green-800"
        }
        LanguageLevel::Fluent => {
            "px-3 py-1 rounded-full text-sm font-medium bg-blue-100 text-blue-800"
        }
        LanguageLevel::Basic => {
            "px-3 py-1 rounded-full text-sm font-medium bg-gray-100 text-gray-800"
        }
    }
}

#[component]
pub fn About(theme: ReadSignal<Theme>) -> impl IntoView {
    let age = data::age_on(Local::now().date_naive());
    let born = data::birth_date().format("%b %-d, %Y").to_string();
    let education = &EDUCATION[0];

    view! {
        <section
            id="about"
            class=move || {
                if theme().is_dark() { "py-20 px-6 bg-gray-900" } else { "py-20 px-6 bg-gray-50" }
            }
        >
            <div class="container mx-auto">
                <div class="text-center mb-16">
                    <h2 class=move || {
                        if theme().is_dark() {
                            "text-4xl md:text-5xl font-bold mb-4 text-white"
                        } else {
                            "text-4xl md:text-5xl font-bold mb-4 text-gray-900"
                        }
                    }>
                        "About "
                        <span class="bg-gradient-to-r from-blue-500 to-teal-500 bg-clip-text text-transparent">
                            "Me"
                        </span>
                    </h2>
                    <p class=move || {
                        if theme().is_dark() {
                            "text-lg max-w-2xl mx-auto text-gray-400"
                        } else {
                            "text-lg max-w-2xl mx-auto text-gray-600"
                        }
                    }>"Get to know more about my journey, background, and aspirations"</p>
                </div>

                <div class="grid lg:grid-cols-2 gap-12 items-start">
                    <div class="space-y-8">
                        <div class=move || card_class(theme())>
                            <h3 class=move || card_title_class(theme())>"Personal Information"</h3>
                            <div class="space-y-4">
                                <div class="flex items-center gap-3">
                                    <span class="text-blue-500">"🎂"</span>
                                    <span class=move || body_text_class(theme())>
                                        <strong>"Age: "</strong>
                                        {age}
                                        " years old (Born "
                                        {born}
                                        ")"
                                    </span>
                                </div>
                                <div class="flex items-center gap-3">
                                    <span class="text-teal-500">"📍"</span>
                                    <span class=move || body_text_class(theme())>
                                        <strong>"Location: "</strong>
                                        {PERSONAL.location}
                                    </span>
                                </div>
                                <div class="flex items-center gap-3">
                                    <span class="text-orange-500">"🎓"</span>
                                    <span class=move || body_text_class(theme())>
                                        <strong>"Education: "</strong>
                                        {education.degree}
                                        " - "
                                        {education.institution}
                                        " ("
                                        {education.period}
                                        ")"
                                        <span class="ml-2 px-2 py-0.5 rounded-full text-xs font-medium bg-orange-100 text-orange-800">
                                            {education.status}
                                        </span>
                                    </span>
                                </div>
                            </div>
                        </div>

                        <div class=move || card_class(theme())>
                            <h3 class=move || card_title_class(theme())>"🌐 Languages"</h3>
                            <div class="space-y-3">
                                {LANGUAGES
                                    .iter()
                                    .map(|lang| {
                                        view! {
                                            <div class="flex justify-between items-center">
                                                <span class=move || {
                                                    body_text_class(theme())
                                                }>{lang.name}</span>
                                                <span class=language_badge_class(
                                                    lang.level,
                                                )>{lang.level.label()}</span>
                                            </div>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </div>
                    </div>

                    <div class="space-y-8">
                        <div class=move || card_class(theme())>
                            <h3 class=move || card_title_class(theme())>"🎯 Goals & Dreams"</h3>
                            <div class="grid gap-4">
                                {GOALS
                                    .iter()
                                    .map(|goal| {
                                        view! {
                                            <div class=move || tile_class(theme())>
                                                <div class="w-2 h-2 bg-gradient-to-r from-blue-500 to-teal-500 rounded-full"></div>
                                                <span class=move || body_text_class(theme())>{*goal}</span>
                                            </div>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </div>

                        <div class=move || card_class(theme())>
                            <h3 class=move || card_title_class(theme())>"💪 Soft Skills"</h3>
                            <div class="flex flex-wrap gap-3">
                                {SOFT_SKILLS
                                    .iter()
                                    .map(|skill| {
                                        view! {
                                            <span class=move || {
                                                if theme().is_dark() {
                                                    "px-4 py-2 rounded-full text-sm font-medium transition-all duration-300 hover:scale-105 bg-gradient-to-r from-blue-500/20 to-teal-500/20 text-blue-300 border border-blue-500/30"
                                                } else {
                                                    "px-4 py-2 rounded-full text-sm font-medium transition-all duration-300 hover:scale-105 bg-gradient-to-r from-blue-500/10 to-teal-500/10 text-blue-700 border border-blue-500/20"
                                                }
                                            }>{*skill}</span>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </div>

                        <div class=move || card_class(theme())>
                            <h3 class=move || card_title_class(theme())>"Currently Learning"</h3>
                            <div class="space-y-3">
                                {CURRENT_LEARNING
                                    .iter()
                                    .map(|item| {
                                        view! {
                                            <div class=move || tile_class(theme())>
                                                <div class="w-2 h-2 bg-gradient-to-r from-orange-500 to-red-500 rounded-full animate-pulse"></div>
                                                <span class=move || body_text_class(theme())>{*item}</span>
                                            </div>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </div>
                    </div>
                </div>

                <div class="mt-12">
                    <div class=move || format!("{} text-center", card_class(theme()))>
                        <h3 class=move || card_title_class(theme())>"References"</h3>
                        {REFERENCES
                            .iter()
                            .map(|reference| {
                                view! {
                                    <div class="max-w-md mx-auto">
                                        <p class=move || {
                                            if theme().is_dark() {
                                                "text-lg font-semibold text-gray-200"
                                            } else {
                                                "text-lg font-semibold text-gray-800"
                                            }
                                        }>{reference.name}</p>
                                        <p class=move || {
                                            if theme().is_dark() {
                                                "text-sm text-gray-400"
                                            } else {
                                                "text-sm text-gray-600"
                                            }
                                        }>{reference.role} " | " {reference.relationship}</p>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}
