use leptos::{ev, html, prelude::*, task::spawn_local};
use leptos_meta::Title;

use crate::{
    contact::{ContactForm, ContactMessage, ContactRelay, Field, RelayError, SubmissionState},
    motion::{
        Anchor, Animation, Color, Distance, Ease, Edge, Scrub, ScrollTrigger, StyleFrame, Timeline,
        Tween,
    },
    nav::Page,
};

use super::motion::{dom_target, use_scoped_animation};

const PURPLE: Color = Color::rgb(0x93, 0x33, 0xea);
const LAVENDER: Color = Color::rgb(0xe9, 0xd5, 0xff);

/// Whether the contact modal is showing, and the form inside it. Shared by
/// the header and the contact section.
#[derive(Debug, Clone, Copy)]
pub struct ModalState {
    open: RwSignal<bool>,
    form: RwSignal<ContactForm>,
}

impl ModalState {
    pub fn new() -> Self {
        Self {
            open: RwSignal::new(false),
            form: RwSignal::new(ContactForm::new()),
        }
    }

    pub fn open(&self) {
        self.open.set(true);
    }

    pub fn close(&self) {
        self.open.set(false);
        self.form.update(ContactForm::reset_status);
    }

    pub fn is_open(&self) -> bool {
        self.open.get()
    }
}

/// Validates the message and posts it to EmailJS from the server. EmailJS
/// rejects calls from outside a browser unless "Allow EmailJS API for
/// non-browser applications" is enabled in the account's security settings.
#[server]
pub async fn send_contact_message(message: ContactMessage) -> Result<(), ServerFnError> {
    use crate::{config::RelayConfig, contact::EmailJsRelay};

    let message = message
        .validated()
        .map_err(|e| ServerFnError::new(e.to_string()))?;
    EmailJsRelay::new(RelayConfig::from_env())
        .send(message)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}

/// Relays through the `send_contact_message` server function.
struct ServerRelay;

impl ContactRelay for ServerRelay {
    async fn send(&self, message: ContactMessage) -> Result<(), RelayError> {
        send_contact_message(message)
            .await
            .map_err(|e| RelayError::Server(e.to_string()))
    }
}

const INPUT_CLASS: &str = "w-full px-4 py-2 border border-gray-600 rounded-lg focus:ring-2 focus:ring-violet-500 focus:border-violet-500 bg-gray-700";

#[component]
fn FormField(form: RwSignal<ContactForm>, field: Field, placeholder: &'static str) -> impl IntoView {
    let id = field.to_string().to_lowercase();
    let value = move || form.with(|f| f.value(field).to_string());
    let on_input = move |ev: ev::Event| {
        let value = event_target_value(&ev);
        form.update(|f| f.set(field, value));
    };
    let input = match field {
        Field::Message => view! {
            <textarea
                id=id.clone()
                rows=4
                required
                placeholder=placeholder
                class=INPUT_CLASS
                prop:value=value
                on:input=on_input
            ></textarea>
        }
        .into_any(),
        Field::Email | Field::Name => view! {
            <input
                id=id.clone()
                type=if field == Field::Email { "email" } else { "text" }
                required
                placeholder=placeholder
                class=INPUT_CLASS
                prop:value=value
                on:input=on_input
            />
        }
        .into_any(),
    };
    view! {
        <div>
            <label for=id class="block text-sm font-medium text-gray-300 mb-1">
                {field.to_string()}
            </label>
            {input}
        </div>
    }
}

#[component]
pub fn ContactModal() -> impl IntoView {
    let modal = expect_context::<ModalState>();
    let form = modal.form;
    let state = move || form.with(ContactForm::state);

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let Some(Ok(message)) = form.try_update(ContactForm::begin_submit) else {
            return;
        };
        spawn_local(async move {
            let result = ServerRelay.send(message).await;
            form.try_update(|f| f.finish(result));
        });
    };

    view! {
        <Show when=move || modal.is_open()>
            <div class="fixed inset-0 backdrop-blur-md bg-black/60 flex items-center justify-center z-50">
                <div class="bg-gray-800 p-6 rounded-xl max-w-md w-full relative">
                    <button
                        class="absolute top-3 right-3 text-gray-500 hover:text-gray-700"
                        aria-label="Close Contact Form"
                        on:click=move |_| modal.close()
                    >
                        "✕"
                    </button>
                    <h2 class="text-2xl font-bold mb-4 text-gray-300">"Contact Me"</h2>
                    <form class="space-y-4" on:submit=on_submit>
                        <FormField form=form field=Field::Name placeholder="Your Name..." />
                        <FormField form=form field=Field::Email placeholder="Your Email..." />
                        <FormField form=form field=Field::Message placeholder="How can I help you?" />

                        {move || {
                            form.with(|f| f.error().map(|err| err.to_string()))
                                .map(|err| view! { <p class="text-red-500 text-center">{err}</p> })
                        }}
                        {move || {
                            let class = match state() {
                                SubmissionState::Succeeded => "text-green-500 text-center",
                                SubmissionState::Failed => "text-red-500 text-center",
                                _ => "text-violet-300 text-center",
                            };
                            state()
                                .status_message()
                                .map(|status| view! { <p class=class>{status}</p> })
                        }}

                        <button
                            type="submit"
                            class="w-full bg-violet-600 text-white py-2 rounded-lg hover:bg-violet-700 transition"
                            disabled=move || state().is_pending()
                        >
                            {move || if state().is_pending() { "Sending..." } else { "Send Message" }}
                        </button>
                    </form>
                </div>
            </div>
        </Show>
    }
}

#[component]
pub fn ContactSection() -> impl IntoView {
    let modal = expect_context::<ModalState>();
    let section_ref = NodeRef::<html::Section>::new();
    let circle_ref = NodeRef::<html::Div>::new();
    let intro_ref = NodeRef::<html::P>::new();
    let final_ref = NodeRef::<html::Div>::new();

    use_scoped_animation("contact", move |scope| {
        let section = scope.require("section", dom_target(section_ref))?;
        let circle = scope.require("circle", dom_target(circle_ref))?;
        let intro = scope.require("intro text", dom_target(intro_ref))?;
        let outro = scope.require("final text", dom_target(final_ref))?;

        let timeline = Timeline::new()
            .at(
                0.0,
                circle.clone(),
                Tween::from_to(
                    StyleFrame::new().scale(1.0).background(Color::rgb(255, 255, 255)),
                    StyleFrame::new().scale(5.0).background(PURPLE),
                )
                .duration(0.5)
                .ease(Ease::Power1InOut),
            )
            .at(
                0.1,
                intro,
                Tween::from_to(StyleFrame::new().opacity(1.0), StyleFrame::new().opacity(0.0))
                    .duration(0.2)
                    .ease(Ease::Power1Out),
            )
            .at(
                0.5,
                circle,
                Tween::from_to(
                    StyleFrame::new().scale(5.0).background(PURPLE),
                    StyleFrame::new().scale(17.0).background(LAVENDER),
                )
                .duration(0.5)
                .ease(Ease::Power2InOut)
                .deferred(),
            )
            .at(
                0.7,
                outro,
                Tween::from_to(StyleFrame::new().opacity(0.0), StyleFrame::new().opacity(1.0))
                    .duration(0.2)
                    .ease(Ease::Power2In),
            );

        scope.animate(
            Animation::new(timeline).trigger(
                ScrollTrigger::new(Anchor::Element(section))
                    .start(Edge::Top, Edge::Top)
                    .end_after(Distance::ViewportPct(200.0))
                    .scrub(Scrub::Lag(0.5))
                    .pin(),
            ),
        );
        Ok(())
    });

    view! {
        <Title text=Page::Contact.title() />
        <section
            node_ref=section_ref
            id="contact"
            class="h-screen flex items-center justify-center bg-gradient-to-b from-[#9a74cf50] to-black relative w-full"
            style="overscroll-behavior: none"
        >
            <div
                node_ref=circle_ref
                class="w-24 sm:w-28 md:w-32 h-24 sm:h-28 md:h-32 rounded-full flex items-center justify-center relative shadow-violet-300/50 shadow-lg bg-white"
            >
                <p
                    node_ref=intro_ref
                    class="text-black font-bold text-base sm:text-lg md:text-xl absolute inset-0 flex items-center text-center"
                >
                    "SCROLL DOWN"
                </p>
                <div
                    node_ref=final_ref
                    class="text-center relative flex flex-col items-center justify-center opacity-0"
                >
                    <h1 class="text-black md:w-[15rem] w-[20rem] lg:scale-[0.4] sm:scale-[0.25] scale-[0.07] md:font-bold text-sm sm:text-base leading-none mb-5 hero-font uppercase">
                        "Step into the Future"
                        <br />
                        "with Daniel Kurzer"
                    </h1>
                    <p class="text-black lg:w-[47rem] w-[20rem] absolute sm:mt-3 mt-1 md:scale-[0.1] scale-[0.068]">
                        "Ready to transform visions into stunning digital realities?"
                        <br />
                        <br />
                        "As a "
                        <span class="font-bold">"Front-End Alchemist"</span>
                        ", I craft modern, responsive web interfaces that captivate."
                        <br />
                        <br />
                        "Let's create something extraordinary together."
                    </p>
                    <button
                        class="px-10 py-2 rounded-xl bg-black text-white hover:bg-white hover:text-black transition-all duration-500 scale-[0.1] absolute sm:mt-12 mt-10 text-nowrap shadow-xl border hover:border-black"
                        on:click=move |_| modal.open()
                    >
                        "Contact me"
                    </button>
                </div>
            </div>
        </section>
    }
}
