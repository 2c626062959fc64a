use leptos::leptos_dom::helpers::{set_timeout_with_handle, TimeoutHandle};
use leptos::prelude::*;

use crate::data::{PERSONAL, ROLES};
use crate::sections::{self, Section};
use crate::theme::Theme;
use crate::typewriter::Typewriter;

fn chip_class(theme: Theme) -> &'static str {
    if theme.is_dark() {
        "flex items-center gap-2 px-4 py-2 rounded-full bg-gray-800 text-gray-300"
    } else {
        "flex items-center gap-2 px-4 py-2 rounded-full bg-gray-100 text-gray-700"
    }
}

fn social_link_class(theme: Theme) -> &'static str {
    if theme.is_dark() {
        "p-3 rounded-full transition-all duration-300 hover:scale-110 bg-gray-800 text-gray-300 hover:text-blue-400 hover:bg-gray-700"
    } else {
        "p-3 rounded-full transition-all duration-300 hover:scale-110 bg-gray-100 text-gray-600 hover:text-blue-600 hover:bg-gray-200"
    }
}

#[component]
pub fn Hero(theme: ReadSignal<Theme>) -> impl IntoView {
    let machine = RwSignal::new(Typewriter::new(&ROLES));
    let pending = StoredValue::new(None::<TimeoutHandle>);

    // Re-armed single-shot timer: every mutation reruns this effect, which
    // schedules exactly one next tick at the current phase's delay.
    Effect::new(move |_| {
        let delay = machine.with(|m| m.delay());
        if let Ok(handle) =
            set_timeout_with_handle(move || machine.update(|m| m.advance()), delay)
        {
            pending.set_value(Some(handle));
        }
    });

    // A tick must never touch the machine once the hero is gone
    on_cleanup(move || {
        if let Some(handle) = pending.get_value() {
            handle.clear();
        }
    });

    view! {
        <section
            id="home"
            class=move || {
                if theme().is_dark() {
                    "min-h-screen flex items-center justify-center pt-20 px-6 bg-gradient-to-br from-gray-900 via-gray-900 to-blue-900"
                } else {
                    "min-h-screen flex items-center justify-center pt-20 px-6 bg-gradient-to-br from-white via-blue-50 to-teal-50"
                }
            }
        >
            <div class="container mx-auto">
                <div class="grid lg:grid-cols-2 gap-12 items-center">
                    <div class="space-y-8">
                        <div class="space-y-4">
                            <h1 class=move || {
                                if theme().is_dark() {
                                    "text-5xl md:text-6xl font-bold text-white"
                                } else {
                                    "text-5xl md:text-6xl font-bold text-gray-900"
                                }
                            }>
                                "Hi, I'm "
                                <span class="bg-gradient-to-r from-blue-500 to-teal-500 bg-clip-text text-transparent">
                                    {PERSONAL.name}
                                </span>
                            </h1>

                            <div class="h-20">
                                <h2 class=move || {
                                    if theme().is_dark() {
                                        "text-2xl md:text-3xl font-semibold text-gray-300"
                                    } else {
                                        "text-2xl md:text-3xl font-semibold text-gray-700"
                                    }
                                }>
                                    {move || machine.with(|m| m.text().to_string())}
                                    <span class="animate-blink">"|"</span>
                                </h2>
                            </div>
                        </div>

                        <p class=move || {
                            if theme().is_dark() {
                                "text-lg leading-relaxed max-w-2xl text-gray-400"
                            } else {
                                "text-lg leading-relaxed max-w-2xl text-gray-600"
                            }
                        }>
                            "Passionate about creating innovative solutions with cutting-edge technology. Currently focusing on AI development and modern web technologies to build the future of digital experiences."
                        </p>

                        <div class="flex flex-wrap gap-4 text-sm">
                            <div class=move || chip_class(theme())>
                                <span>"📧 " {PERSONAL.email}</span>
                            </div>
                            <div class=move || chip_class(theme())>
                                <span>"📞 " {PERSONAL.phone}</span>
                            </div>
                            <div class=move || chip_class(theme())>
                                <span>"📍 " {PERSONAL.location}</span>
                            </div>
                        </div>

                        <div class="flex flex-wrap gap-4">
                            <button
                                on:click=move |_| sections::scroll_to(Section::About)
                                class="flex items-center gap-2 bg-gradient-to-r from-blue-500 to-teal-500 text-white px-6 py-3 rounded-lg font-semibold hover:scale-105 transition-all duration-300 shadow-lg hover:shadow-xl"
                            >
                                <span>"Get In Touch"</span>
                            </button>

                            <button class=move || {
                                if theme().is_dark() {
                                    "flex items-center gap-2 px-6 py-3 rounded-lg font-semibold transition-all duration-300 border-2 border-gray-700 text-gray-300 hover:bg-gray-800"
                                } else {
                                    "flex items-center gap-2 px-6 py-3 rounded-lg font-semibold transition-all duration-300 border-2 border-gray-300 text-gray-700 hover:bg-gray-50"
                                }
                            }>
                                <span>"Download CV"</span>
                            </button>
                        </div>

                        <div class="flex gap-4">
                            <a href="#" aria-label="GitHub" class=move || social_link_class(theme())>
                                <i class="devicon-github-plain"></i>
                            </a>
                            <a href="#" aria-label="LinkedIn" class=move || social_link_class(theme())>
                                <i class="devicon-linkedin-plain"></i>
                            </a>
                            <a
                                href=format!("mailto:{}", PERSONAL.email)
                                aria-label="Email"
                                class=move || social_link_class(theme())
                            >
                                "📧"
                            </a>
                        </div>
                    </div>

                    <div class="flex justify-center lg:justify-end">
                        <div class="relative group">
                            <div class="absolute -inset-4 bg-gradient-to-r from-blue-500 to-teal-500 rounded-full blur opacity-30 group-hover:opacity-60 transition-opacity duration-300"></div>
                            <div class="relative">
                                <img
                                    src=PERSONAL.profile_image
                                    alt="Profile"
                                    class="w-80 h-80 rounded-full object-cover border-4 border-white/20 shadow-2xl group-hover:scale-105 transition-transform duration-300"
                                />
                                <div class="absolute inset-0 rounded-full bg-gradient-to-t from-blue-500/20 to-transparent"></div>
                            </div>
                        </div>
                    </div>
                </div>

                <div class="flex justify-center mt-16 animate-bounce">
                    <button
                        on:click=move |_| sections::scroll_to(Section::About)
                        aria-label="Scroll to the next section"
                        class=move || {
                            if theme().is_dark() {
                                "p-3 rounded-full text-gray-400 hover:text-white transition-colors duration-300"
                            } else {
                                "p-3 rounded-full text-gray-500 hover:text-gray-800 transition-colors duration-300"
                            }
                        }
                    >
                        "↓"
                    </button>
                </div>
            </div>
        </section>
    }
}
