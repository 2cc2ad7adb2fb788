use leptos::{
    either::Either, ev::SubmitEvent, prelude::*, server_fn::codec::Json, task::spawn_local,
};

use super::homepage::SectionHeading;
use crate::contact::{ContactForm, Field, FormData, SubmitOutcome, Transport, TransportError};
use crate::content::PROFILE;

const SENT_ACK: &str = "Message sent successfully! I'll get back to you soon.";

/// Simulated delivery: the message is logged, never stored or forwarded.
#[server(input = Json)]
pub async fn send_contact_message(
    message: FormData,
) -> Result<Result<(), TransportError>, ServerFnError> {
    use crate::config::ContactConfig;

    let config = use_context::<ContactConfig>().unwrap_or_default();
    let delivery = async {
        tokio::time::sleep(config.delivery_delay).await;
        tracing::info!(
            name = %message.name,
            email = %message.email,
            subject = %message.subject,
            chars = message.message.chars().count(),
            "contact message received"
        );
    };
    match tokio::time::timeout(config.delivery_timeout, delivery).await {
        Ok(()) => Ok(Ok(())),
        Err(_) => {
            tracing::warn!(
                timeout_ms = config.delivery_timeout.as_millis() as u64,
                "contact message delivery timed out"
            );
            Ok(Err(TransportError::Timeout))
        }
    }
}

/// Sends through [`send_contact_message`]; a failed round trip is a
/// delivery error like any other.
struct ServerTransport;

impl Transport for ServerTransport {
    async fn send(&self, data: FormData) -> Result<(), TransportError> {
        send_contact_message(data)
            .await
            .unwrap_or_else(|e| Err(TransportError::Delivery(e.to_string())))
    }
}

fn acknowledge() {
    if let Err(e) = window().alert_with_message(SENT_ACK) {
        log::warn!("couldn't show acknowledgment: {e:?}");
    }
}

#[component]
pub fn Contact() -> impl IntoView {
    view! {
        <section id="contact" class="py-20 px-4">
            <div class="max-w-6xl mx-auto">
                <SectionHeading
                    title="Let's Build Something Amazing"
                    subtitle="Have a project in mind? Let's discuss how we can bring your ideas to life."
                />
                <div class="grid lg:grid-cols-2 gap-12">
                    <ContactInfo />
                    <MessageForm />
                </div>
            </div>
        </section>
    }
}

#[component]
fn InfoCard(icon: &'static str, title: &'static str, children: Children) -> impl IntoView {
    view! {
        <div class="bg-slate-800/50 border border-slate-700/50 rounded-xl p-6 hover:border-blue-500/50 transition-all duration-300">
            <div class="flex items-center gap-4">
                <div class="w-12 h-12 bg-blue-500/20 rounded-lg flex items-center justify-center">
                    <i class=format!("{icon} text-xl text-blue-400") />
                </div>
                <div>
                    <h4 class="font-semibold text-white">{title}</h4>
                    {children()}
                </div>
            </div>
        </div>
    }
}

#[component]
fn ContactInfo() -> impl IntoView {
    view! {
        <div class="space-y-6">
            <InfoCard icon="extra-email" title="Email">
                <a href=PROFILE.mailto() class="text-slate-400 hover:text-blue-400 transition-colors">
                    {PROFILE.email}
                </a>
            </InfoCard>
            <InfoCard icon="extra-phone" title="Phone">
                <a href=PROFILE.tel() class="text-slate-400 hover:text-blue-400 transition-colors">
                    {PROFILE.phone}
                </a>
            </InfoCard>
            <InfoCard icon="extra-location" title="Location">
                <span class="text-slate-400">{PROFILE.location}</span>
            </InfoCard>
            <div class="bg-slate-800/50 border border-slate-700/50 rounded-xl p-6">
                <h4 class="font-semibold text-white mb-4">"Connect With Me"</h4>
                <div class="flex gap-4">
                    {PROFILE
                        .socials
                        .iter()
                        .map(|s| {
                            view! {
                                <a
                                    href=s.href
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    aria-label=s.label
                                    class="w-12 h-12 bg-slate-700/50 rounded-lg flex items-center justify-center text-slate-400 hover:text-blue-400 hover:bg-blue-500/20 transition-all duration-300"
                                >
                                    <i class=format!("{} text-xl", s.icon) />
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}

#[component]
fn MessageForm() -> impl IntoView {
    let form = RwSignal::new(ContactForm::new());

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        // invalid or busy forms end here; errors are already on the signal
        let Some(submission) = form.try_update(|f| f.begin_submit().ok()).flatten() else {
            return;
        };
        spawn_local(async move {
            let result = ServerTransport.send(submission.data().clone()).await;
            let outcome = form.try_update(|f| f.finish_submit(submission, result));
            if let Some(SubmitOutcome::Sent) = outcome {
                acknowledge();
            }
        });
    };

    let submitting = move || form.with(|f| f.is_submitting());

    view! {
        <div class="bg-slate-800/50 border border-slate-700/50 rounded-xl p-6">
            <h3 class="text-2xl font-semibold text-white flex items-center gap-2">
                <i class="extra-code text-blue-400" />
                "Send Message"
            </h3>
            <p class="text-slate-400 mt-2 mb-6">
                "Fill out the form below and I'll get back to you as soon as possible."
            </p>
            <form on:submit=on_submit class="space-y-6" novalidate=true>
                <div class="grid md:grid-cols-2 gap-4">
                    <FormField form field=Field::Name />
                    <FormField form field=Field::Email />
                </div>
                <FormField form field=Field::Subject />
                <FormField form field=Field::Message />
                {move || {
                    form.with(|f| f.submit_error().map(|e| e.to_string()))
                        .map(|msg| {
                            view! {
                                <p
                                    role="alert"
                                    class="text-red-400 text-sm bg-red-500/10 border border-red-500/30 rounded-md p-3"
                                >
                                    {msg}
                                </p>
                            }
                        })
                }}
                <button
                    type="submit"
                    disabled=submitting
                    class="w-full bg-gradient-to-r from-blue-600 to-purple-600 hover:from-blue-700 hover:to-purple-700 text-white py-3 rounded-lg transition-all duration-300 disabled:opacity-50"
                >
                    {move || {
                        if submitting() {
                            Either::Left(
                                view! {
                                    <div class="flex items-center justify-center gap-2">
                                        <div class="w-4 h-4 border-2 border-white/30 border-t-white rounded-full animate-spin"></div>
                                        "Sending..."
                                    </div>
                                },
                            )
                        } else {
                            Either::Right(
                                view! {
                                    <div class="flex items-center justify-center gap-2">
                                        <i class="extra-email" />
                                        "Send Message"
                                    </div>
                                },
                            )
                        }
                    }}
                </button>
            </form>
        </div>
    }
}

fn label(field: Field) -> &'static str {
    match field {
        Field::Name => "Name",
        Field::Email => "Email",
        Field::Subject => "Subject",
        Field::Message => "Message",
    }
}

fn placeholder(field: Field) -> &'static str {
    match field {
        Field::Name => "Your name",
        Field::Email => "your.email@example.com",
        Field::Subject => "What's this about?",
        Field::Message => "Tell me about your project...",
    }
}

#[component]
fn FormField(form: RwSignal<ContactForm>, field: Field) -> impl IntoView {
    let id = field.as_str();
    let value = move || form.with(|f| f.value(field).to_string());
    let on_input = move |ev: leptos::ev::Event| {
        form.update(|f| f.set_field(field, event_target_value(&ev)))
    };
    let class = move || {
        if form.with(|f| f.error(field).is_some()) {
            "w-full px-3 py-2 rounded-md bg-slate-700/50 border border-red-500 text-white placeholder:text-slate-400 focus:outline-none focus:border-blue-500"
        } else {
            "w-full px-3 py-2 rounded-md bg-slate-700/50 border border-slate-600 text-white placeholder:text-slate-400 focus:outline-none focus:border-blue-500"
        }
    };

    let input_type = if field == Field::Email { "email" } else { "text" };
    let input = if field == Field::Message {
        Either::Left(view! {
            <textarea
                id=id
                rows=5
                placeholder=placeholder(field)
                class=class
                prop:value=value
                on:input=on_input
            ></textarea>
        })
    } else {
        Either::Right(view! {
            <input
                id=id
                type=input_type
                placeholder=placeholder(field)
                class=class
                prop:value=value
                on:input=on_input
            />
        })
    };

    view! {
        <div class="space-y-2">
            <label for=id class="text-slate-300 text-sm font-medium">
                {label(field)}
            </label>
            {input}
            {move || {
                form.with(|f| f.error(field).map(str::to_string))
                    .map(|msg| view! { <p class="text-red-400 text-sm">{msg}</p> })
            }}
        </div>
    }
}
