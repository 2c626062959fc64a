use leptos::prelude::*;

use crate::data::{self, SkillCategory, SKILLS};
use crate::theme::Theme;

fn category_gradient(category: SkillCategory) -> &'static str {
    match category {
        SkillCategory::Frontend => "from-blue-500 to-blue-600",
        SkillCategory::Programming => "from-teal-500 to-teal-600",
        SkillCategory::AiMl => "from-purple-500 to-purple-600",
        SkillCategory::Tools => "from-orange-500 to-orange-600",
        SkillCategory::Integration => "from-green-500 to-green-600",
    }
}

fn card_class(theme: Theme) -> &'static str {
    if theme.is_dark() {
        "p-6 rounded-2xl backdrop-blur-sm border bg-gray-800/50 border-gray-700 shadow-xl"
    } else {
        "p-6 rounded-2xl backdrop-blur-sm border bg-white/50 border-gray-200 shadow-xl"
    }
}

#[component]
pub fn Skills(theme: ReadSignal<Theme>) -> impl IntoView {
    view! {
        <section
            id="skills"
            class=move || {
                if theme().is_dark() {
                    "py-20 px-6 bg-gradient-to-br from-gray-900 via-gray-800 to-gray-900"
                } else {
                    "py-20 px-6 bg-gradient-to-br from-gray-50 via-white to-gray-50"
                }
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
                            "Skills"
                        </span>
                    </h2>
                    <p class=move || {
                        if theme().is_dark() {
                            "text-lg max-w-2xl mx-auto text-gray-400"
                        } else {
                            "text-lg max-w-2xl mx-auto text-gray-600"
                        }
                    }>"Technologies and tools I work with to bring ideas to life"</p>
                </div>

                <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8">
                    {SkillCategory::ALL
                        .iter()
                        .filter_map(|&category| {
                            let skills = data::skills_in(category);
                            if skills.is_empty() {
                                return None;
                            }
                            Some(
                                view! {
                                    <div class=move || card_class(theme())>
                                        <h3 class=move || {
                                            if theme().is_dark() {
                                                "text-xl font-bold mb-6 text-white"
                                            } else {
                                                "text-xl font-bold mb-6 text-gray-900"
                                            }
                                        }>{category.label()}</h3>
                                        <div class="space-y-5">
                                            {skills
                                                .into_iter()
                                                .map(|skill| {
                                                    view! {
                                                        <div>
                                                            <div class="flex justify-between items-center mb-2">
                                                                <span class=move || {
                                                                    if theme().is_dark() {
                                                                        "font-medium text-gray-300"
                                                                    } else {
                                                                        "font-medium text-gray-700"
                                                                    }
                                                                }>{skill.name}</span>
                                                                <span class=move || {
                                                                    if theme().is_dark() {
                                                                        "text-sm text-gray-400"
                                                                    } else {
                                                                        "text-sm text-gray-500"
                                                                    }
                                                                }>{skill.level} "%"</span>
                                                            </div>
                                                            <div class=move || {
                                                                if theme().is_dark() {
                                                                    "w-full h-2 rounded-full bg-gray-700"
                                                                } else {
                                                                    "w-full h-2 rounded-full bg-gray-200"
                                                                }
                                                            }>
                                                                <div
                                                                    class=format!(
                                                                        "h-2 rounded-full bg-gradient-to-r {} transition-all duration-1000",
                                                                        category_gradient(category),
                                                                    )
                                                                    style=format!("width: {}%", skill.level)
                                                                ></div>
                                                            </div>
                                                        </div>
                                                    }
                                                })
                                                .collect_view()}
                                        </div>
                                    </div>
                                },
                            )
                        })
                        .collect_view()}
                </div>

                <div class="mt-16 grid grid-cols-2 gap-8 max-w-lg mx-auto text-center">
                    <div class=move || card_class(theme())>
                        <div class="text-4xl font-bold bg-gradient-to-r from-blue-500 to-teal-500 bg-clip-text text-transparent">
                            {SKILLS.len()}
                        </div>
                        <div class=move || {
                            if theme().is_dark() {
                                "mt-2 text-gray-400"
                            } else {
                                "mt-2 text-gray-600"
                            }
                        }>"Total Skills"</div>
                    </div>
                    <div class=move || card_class(theme())>
                        <div class="text-4xl font-bold bg-gradient-to-r from-orange-500 to-red-500 bg-clip-text text-transparent">
                            {data::average_skill_level()}
                            "%"
                        </div>
                        <div class=move || {
                            if theme().is_dark() {
                                "mt-2 text-gray-400"
                            } else {
                                "mt-2 text-gray-600"
                            }
                        }>"Avg. Proficiency"</div>
                    </div>
                </div>
            </div>
        </section>
    }
}
