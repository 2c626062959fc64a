use leptos::ev::SubmitEvent;
use leptos::leptos_dom::helpers::{set_timeout_with_handle, TimeoutHandle};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::data::PERSONAL;
use crate::mailer::{self, ContactForm, SubmitStatus};
use crate::theme::Theme;

fn card_class(theme: Theme) -> &'static str {
    if theme.is_dark() {
        "p-8 rounded-2xl backdrop-blur-sm border bg-gray-800/50 border-gray-700 shadow-xl"
    } else {
        "p-8 rounded-2xl backdrop-blur-sm border bg-white/50 border-gray-200 shadow-xl"
    }
}

#[component]
pub fn Contact(theme: ReadSignal<Theme>) -> impl IntoView {
    let form = RwSignal::new(ContactForm::default());
    let (status, set_status) = signal(SubmitStatus::Idle);
    let reset_handle = StoredValue::new(None::<TimeoutHandle>);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        // A reset armed by the previous outcome must not fire into this
        // submission and re-enable the button mid-flight.
        if let Some(handle) = reset_handle.get_value() {
            handle.clear();
            reset_handle.set_value(None);
        }
        set_status(SubmitStatus::Sending);
        spawn_local(async move {
            let draft = form.get_untracked();
            let result = mailer::send_message(&draft).await;
            if let Err(err) = &result {
                log::warn!("contact message delivery failed: {err}");
            }
            // The request can outlive the section, so signal writes past
            // this point are fallible.
            let Some(outcome) = form.try_update(|f| mailer::apply_submit_result(f, &result))
            else {
                return;
            };
            let _ = set_status.try_set(outcome);
            if let Ok(handle) = set_timeout_with_handle(
                move || {
                    let _ = set_status.try_update(|s| *s = mailer::reset_status(*s));
                },
                mailer::STATUS_RESET_DELAY,
            ) {
                reset_handle.set_value(Some(handle));
            }
        });
    };

    on_cleanup(move || {
        // A pending status reset must not fire into a disposed scope.
        if let Some(handle) = reset_handle.get_value() {
            handle.clear();
        }
    });

    let contact_links = [
        (
            "📧",
            "Email",
            PERSONAL.email,
            format!("mailto:{}", PERSONAL.email),
            "from-blue-500 to-blue-600",
        ),
        (
            "📞",
            "Phone",
            PERSONAL.phone,
            format!("tel:{}", PERSONAL.phone),
            "from-teal-500 to-teal-600",
        ),
        (
            "📍",
            "Location",
            PERSONAL.location,
            String::from("#"),
            "from-orange-500 to-orange-600",
        ),
    ];

    view! {
        <section
            id="contact"
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
                        "Get In "
                        <span class="bg-gradient-to-r from-blue-500 to-teal-500 bg-clip-text text-transparent">
                            "Touch"
                        </span>
                    </h2>
                    <p class=move || {
                        if theme().is_dark() {
                            "text-lg max-w-2xl mx-auto text-gray-400"
                        } else {
                            "text-lg max-w-2xl mx-auto text-gray-600"
                        }
                    }>
                        "Have a project in mind or just want to chat? I'd love to hear from you!"
                    </p>
                </div>

                <div class="grid lg:grid-cols-2 gap-12 items-start max-w-5xl mx-auto">
                    <div class="space-y-8">
                        <h3 class=move || {
                            if theme().is_dark() {
                                "text-2xl font-bold text-white"
                            } else {
                                "text-2xl font-bold text-gray-900"
                            }
                        }>"Let's Connect"</h3>
                        <p class=move || {
                            if theme().is_dark() {
                                "leading-relaxed text-gray-400"
                            } else {
                                "leading-relaxed text-gray-600"
                            }
                        }>
                            "I'm always excited to discuss new opportunities, collaborate on projects, or simply talk about technology. Feel free to reach out through any of these channels."
                        </p>
                        <div class="space-y-4">
                            {contact_links
                                .into_iter()
                                .map(|(icon, label, value, href, gradient)| {
                                    view! {
                                        <a
                                            href=href
                                            class=move || {
                                                if theme().is_dark() {
                                                    "flex items-center gap-4 p-4 rounded-xl border bg-gray-800/50 border-gray-700 hover:border-blue-500/50 transition-colors"
                                                } else {
                                                    "flex items-center gap-4 p-4 rounded-xl border bg-white/50 border-gray-200 hover:border-blue-500/50 transition-colors"
                                                }
                                            }
                                        >
                                            <span class=format!(
                                                "w-12 h-12 flex items-center justify-center rounded-lg bg-gradient-to-r {gradient} text-xl",
                                            )>{icon}</span>
                                            <span>
                                                <span class=move || {
                                                    if theme().is_dark() {
                                                        "block text-sm text-gray-400"
                                                    } else {
                                                        "block text-sm text-gray-500"
                                                    }
                                                }>{label}</span>
                                                <span class=move || {
                                                    if theme().is_dark() {
                                                        "block font-medium text-gray-200"
                                                    } else {
                                                        "block font-medium text-gray-800"
                                                    }
                                                }>{value}</span>
                                            </span>
                                        </a>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>

                    <div class=move || card_class(theme())>
                        {move || {
                            let (class, text) = match status() {
                                SubmitStatus::Success => {
                                    (
                                        "mb-6 p-4 rounded-lg bg-green-100 text-green-800 border border-green-200",
                                        "Message sent successfully! I'll get back to you soon.",
                                    )
                                }
                                SubmitStatus::Error => {
                                    (
                                        "mb-6 p-4 rounded-lg bg-red-100 text-red-800 border border-red-200",
                                        "Something went wrong. Please try again.",
                                    )
                                }
                                _ => return None,
                            };
                            Some(view! { <div class=class>{text}</div> })
                        }}
                        <form on:submit=on_submit class="space-y-6">
                            <div class="grid md:grid-cols-2 gap-6">
                                <input
                                    type="text"
                                    placeholder="Your Name *"
                                    required
                                    prop:value=move || form.with(|f| f.name.clone())
                                    on:input=move |ev| {
                                        form.update(|f| f.name = event_target_value(&ev))
                                    }
                                    class="w-full p-3 rounded border bg-gray-200"
                                />
                                <input
                                    type="email"
                                    placeholder="Your Email *"
                                    required
                                    prop:value=move || form.with(|f| f.email.clone())
                                    on:input=move |ev| {
                                        form.update(|f| f.email = event_target_value(&ev))
                                    }
                                    class="w-full p-3 rounded border bg-gray-200"
                                />
                            </div>
                            <input
                                type="text"
                                placeholder="Subject *"
                                required
                                prop:value=move || form.with(|f| f.subject.clone())
                                on:input=move |ev| {
                                    form.update(|f| f.subject = event_target_value(&ev))
                                }
                                class="w-full p-3 rounded border bg-gray-200"
                            />
                            <textarea
                                rows="5"
                                placeholder="Message *"
                                required
                                prop:value=move || form.with(|f| f.message.clone())
                                on:input=move |ev| {
                                    form.update(|f| f.message = event_target_value(&ev))
                                }
                                class="w-full p-3 rounded border bg-gray-200 resize-none"
                            ></textarea>
                            <button
                                type="submit"
                                disabled=move || status() == SubmitStatus::Sending
                                class="w-full py-3 bg-gradient-to-r from-blue-500 to-teal-500 text-white rounded-lg font-medium hover:shadow-lg transition-all duration-300 disabled:opacity-60 disabled:cursor-not-allowed"
                            >
                                {move || {
                                    if status() == SubmitStatus::Sending {
                                        "Sending..."
                                    } else {
                                        "Send Message"
                                    }
                                }}
                            </button>
                        </form>
                    </div>
                </div>
            </div>
        </section>
    }
}
