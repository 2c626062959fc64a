use chrono::{DateTime, Datelike, Local};
use leptos::prelude::*;

use crate::data::PERSONAL;
use crate::sections;
use crate::theme::Theme;

#[component]
pub fn Footer(theme: ReadSignal<Theme>) -> impl IntoView {
    let year = Local::now().year();
    let last_updated = match DateTime::parse_from_rfc3339(env!("BUILD_TIME")) {
        Ok(stamp) => stamp.format("%B %Y").to_string(),
        Err(_) => String::from("recently"),
    };

    view! {
        <footer class=move || {
            if theme().is_dark() {
                "py-12 px-6 bg-gray-900 border-t border-gray-800"
            } else {
                "py-12 px-6 bg-gray-100 border-t border-gray-200"
            }
        }>
            <div class="container mx-auto">
                <div class="grid md:grid-cols-3 gap-12 mb-12">
                    <div>
                        <div class="flex items-center gap-3 mb-4">
                            <span class="w-10 h-10 flex items-center justify-center rounded-lg bg-gradient-to-r from-blue-500 to-teal-500 text-white font-bold">
                                {PERSONAL.initials}
                            </span>
                            <span class=move || {
                                if theme().is_dark() {
                                    "text-xl font-bold text-white"
                                } else {
                                    "text-xl font-bold text-gray-900"
                                }
                            }>{PERSONAL.name}</span>
                        </div>
                        <p class=move || {
                            if theme().is_dark() {
                                "text-sm mb-2 text-gray-400"
                            } else {
                                "text-sm mb-2 text-gray-600"
                            }
                        }>{PERSONAL.title}</p>
                        <p class=move || {
                            if theme().is_dark() {
                                "text-sm text-gray-500"
                            } else {
                                "text-sm text-gray-500"
                            }
                        }>"Building the future with AI and modern web technologies"</p>
                    </div>

                    <div>
                        <h3 class=move || {
                            if theme().is_dark() {
                                "text-lg font-semibold mb-4 text-white"
                            } else {
                                "text-lg font-semibold mb-4 text-gray-900"
                            }
                        }>"Quick Links"</h3>
                        <div class="space-y-2">
                            <a
                                href="#about"
                                class=move || {
                                    if theme().is_dark() {
                                        "block text-gray-400 hover:text-blue-400 transition-colors"
                                    } else {
                                        "block text-gray-600 hover:text-blue-600 transition-colors"
                                    }
                                }
                            >
                                "About Me"
                            </a>
                            <a
                                href="#skills"
                                class=move || {
                                    if theme().is_dark() {
                                        "block text-gray-400 hover:text-blue-400 transition-colors"
                                    } else {
                                        "block text-gray-600 hover:text-blue-600 transition-colors"
                                    }
                                }
                            >
                                "Skills"
                            </a>
                            <a
                                href="#projects"
                                class=move || {
                                    if theme().is_dark() {
                                        "block text-gray-400 hover:text-blue-400 transition-colors"
                                    } else {
                                        "block text-gray-600 hover:text-blue-600 transition-colors"
                                    }
                                }
                            >
                                "Projects"
                            </a>
                            <a
                                href="#contact"
                                class=move || {
                                    if theme().is_dark() {
                                        "block text-gray-400 hover:text-blue-400 transition-colors"
                                    } else {
                                        "block text-gray-600 hover:text-blue-600 transition-colors"
                                    }
                                }
                            >
                                "Contact"
                            </a>
                        </div>
                    </div>

                    <div>
                        <h3 class=move || {
                            if theme().is_dark() {
                                "text-lg font-semibold mb-4 text-white"
                            } else {
                                "text-lg font-semibold mb-4 text-gray-900"
                            }
                        }>"Get In Touch"</h3>
                        <div class=move || {
                            if theme().is_dark() {
                                "space-y-2 text-sm text-gray-400"
                            } else {
                                "space-y-2 text-sm text-gray-600"
                            }
                        }>
                            <p>"📧 " {PERSONAL.email}</p>
                            <p>"📞 " {PERSONAL.phone}</p>
                            <p>"📍 " {PERSONAL.location}</p>
                        </div>
                    </div>
                </div>

                <div class=move || {
                    if theme().is_dark() {
                        "pt-8 border-t border-gray-800 flex flex-col md:flex-row items-center justify-between gap-4"
                    } else {
                        "pt-8 border-t border-gray-200 flex flex-col md:flex-row items-center justify-between gap-4"
                    }
                }>
                    <p class=move || {
                        if theme().is_dark() {
                            "text-sm text-gray-500"
                        } else {
                            "text-sm text-gray-500"
                        }
                    }>"© " {year} " " {PERSONAL.name} ". Made with ♥ in Pakistan"</p>
                    <button
                        on:click=|_| sections::scroll_to_top()
                        class=move || {
                            if theme().is_dark() {
                                "px-4 py-2 rounded-lg text-sm bg-gray-800 text-gray-300 hover:bg-gray-700 transition-colors"
                            } else {
                                "px-4 py-2 rounded-lg text-sm bg-gray-200 text-gray-700 hover:bg-gray-300 transition-colors"
                            }
                        }
                    >
                        "↑ Back to Top"
                    </button>
                </div>

                <div class=move || {
                    if theme().is_dark() {
                        "mt-8 text-center text-xs text-gray-600"
                    } else {
                        "mt-8 text-center text-xs text-gray-400"
                    }
                }>
                    <p>"This portfolio is continuously evolving as I learn and grow."</p>
                    <p class="mt-1">
                        "Built with Leptos, Rust & Tailwind CSS. Last updated " {last_updated} "."
                    </p>
                </div>
            </div>
        </footer>
    }
}
