use leptos::prelude::*;

use crate::data::{self, PROJECTS};
use crate::theme::Theme;

fn card_class(theme: Theme) -> &'static str {
    if theme.is_dark() {
        "rounded-2xl overflow-hidden backdrop-blur-sm border bg-gray-800/50 border-gray-700 shadow-xl transition-all duration-300 hover:scale-105 hover:shadow-2xl"
    } else {
        "rounded-2xl overflow-hidden backdrop-blur-sm border bg-white/50 border-gray-200 shadow-xl transition-all duration-300 hover:scale-105 hover:shadow-2xl"
    }
}

fn stat_class(theme: Theme) -> &'static str {
    if theme.is_dark() {
        "p-6 rounded-2xl backdrop-blur-sm border bg-gray-800/50 border-gray-700 text-center"
    } else {
        "p-6 rounded-2xl backdrop-blur-sm border bg-white/50 border-gray-200 text-center"
    }
}

#[component]
pub fn Projects(theme: ReadSignal<Theme>) -> impl IntoView {
    view! {
        <section
            id="projects"
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
                        "My "
                        <span class="bg-gradient-to-r from-blue-500 to-teal-500 bg-clip-text text-transparent">
                            "Projects"
                        </span>
                    </h2>
                    <p class=move || {
                        if theme().is_dark() {
                            "text-lg max-w-2xl mx-auto text-gray-400"
                        } else {
                            "text-lg max-w-2xl mx-auto text-gray-600"
                        }
                    }>"A showcase of my recent work and the technologies behind it"</p>
                </div>

                <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8">
                    {PROJECTS
                        .iter()
                        .map(|project| {
                            view! {
                                <div class=move || card_class(theme())>
                                    <div class="relative group">
                                        <img
                                            src=project.image
                                            alt=project.title
                                            class="w-full h-48 object-cover"
                                        />
                                        <div class="absolute inset-0 bg-gradient-to-t from-black/60 to-transparent opacity-0 group-hover:opacity-100 transition-opacity duration-300 flex items-end justify-center pb-4 gap-4">
                                            <a
                                                href=project.live_demo
                                                target="_blank"
                                                rel="noopener noreferrer"
                                                class="px-4 py-2 bg-white/90 text-gray-900 rounded-lg text-sm font-medium hover:bg-white transition-colors"
                                            >
                                                "Live Demo"
                                            </a>
                                            <a
                                                href=project.github
                                                target="_blank"
                                                rel="noopener noreferrer"
                                                class="px-4 py-2 bg-gray-900/90 text-white rounded-lg text-sm font-medium hover:bg-gray-900 transition-colors"
                                            >
                                                "GitHub"
                                            </a>
                                        </div>
                                    </div>
                                    <div class="p-6">
                                        <h3 class=move || {
                                            if theme().is_dark() {
                                                "text-xl font-bold mb-3 text-white"
                                            } else {
                                                "text-xl font-bold mb-3 text-gray-900"
                                            }
                                        }>{project.title}</h3>
                                        <p class=move || {
                                            if theme().is_dark() {
                                                "mb-4 text-sm leading-relaxed text-gray-400"
                                            } else {
                                                "mb-4 text-sm leading-relaxed text-gray-600"
                                            }
                                        }>{project.description}</p>
                                        <div class="flex flex-wrap gap-2">
                                            {project
                                                .technologies
                                                .iter()
                                                .map(|tech| {
                                                    view! {
                                                        <span class=move || {
                                                            if theme().is_dark() {
                                                                "px-3 py-1 rounded-full text-xs font-medium bg-blue-500/20 text-blue-300"
                                                            } else {
                                                                "px-3 py-1 rounded-full text-xs font-medium bg-blue-500/10 text-blue-700"
                                                            }
                                                        }>{*tech}</span>
                                                    }
                                                })
                                                .collect_view()}
                                        </div>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="mt-16 grid grid-cols-1 md:grid-cols-3 gap-8 max-w-3xl mx-auto">
                    <div class=move || stat_class(theme())>
                        <div class="text-4xl font-bold bg-gradient-to-r from-blue-500 to-teal-500 bg-clip-text text-transparent">
                            {PROJECTS.len()}
                        </div>
                        <div class=move || {
                            if theme().is_dark() {
                                "mt-2 text-gray-400"
                            } else {
                                "mt-2 text-gray-600"
                            }
                        }>"Completed Projects"</div>
                    </div>
                    <div class=move || stat_class(theme())>
                        <div class="text-4xl font-bold bg-gradient-to-r from-teal-500 to-green-500 bg-clip-text text-transparent">
                            {format!("{}+", data::technology_count())}
                        </div>
                        <div class=move || {
                            if theme().is_dark() {
                                "mt-2 text-gray-400"
                            } else {
                                "mt-2 text-gray-600"
                            }
                        }>"Technologies Used"</div>
                    </div>
                    <div class=move || stat_class(theme())>
                        <div class="text-4xl font-bold bg-gradient-to-r from-orange-500 to-red-500 bg-clip-text text-transparent">
                            "2024"
                        </div>
                        <div class=move || {
                            if theme().is_dark() {
                                "mt-2 text-gray-400"
                            } else {
                                "mt-2 text-gray-600"
                            }
                        }>"Most Recent Work"</div>
                    </div>
                </div>

                <div class="mt-16 text-center">
                    <div class=move || {
                        if theme().is_dark() {
                            "inline-block p-8 rounded-2xl backdrop-blur-sm border bg-gray-800/50 border-gray-700"
                        } else {
                            "inline-block p-8 rounded-2xl backdrop-blur-sm border bg-white/50 border-gray-200"
                        }
                    }>
                        <h3 class=move || {
                            if theme().is_dark() {
                                "text-2xl font-bold mb-3 text-white"
                            } else {
                                "text-2xl font-bold mb-3 text-gray-900"
                            }
                        }>"Interested in collaborating?"</h3>
                        <p class=move || {
                            if theme().is_dark() {
                                "mb-6 text-gray-400"
                            } else {
                                "mb-6 text-gray-600"
                            }
                        }>"I'm always open to discussing new projects and opportunities."</p>
                        <a
                            href="#contact"
                            class="inline-block px-8 py-3 bg-gradient-to-r from-blue-500 to-teal-500 text-white rounded-lg font-medium hover:shadow-lg hover:scale-105 transition-all duration-300"
                        >
                            "Let's Talk"
                        </a>
                    </div>
                </div>
            </div>
        </section>
    }
}
