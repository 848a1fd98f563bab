use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::{info, warn};
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::fade_in::FadeIn;
use crate::components::section_header::SectionHeader;
use crate::config;
use crate::contact_form::{ContactForm, FormStatus};
use crate::content::{FormField, InputKind, SiteContent};

#[derive(Properties, PartialEq)]
pub struct ContactSectionProps {
    pub content: Rc<SiteContent>,
}

pub enum ContactMsg {
    Edit(String, String),
    Submit,
    Resolved,
}

pub struct ContactSection {
    form: ContactForm,
    // Dropping it cancels a submission still in flight.
    pending: Option<Timeout>,
}

impl ContactSection {
    fn field_view(&self, ctx: &Context<Self>, field: &FormField) -> Html {
        let name = field.name.clone();
        let value = self.form.value(&field.name).to_string();
        let control = match field.kind {
            InputKind::TextArea => {
                let oninput = ctx.link().callback(move |e: InputEvent| {
                    let input: HtmlTextAreaElement = e.target_unchecked_into();
                    ContactMsg::Edit(name.clone(), input.value())
                });
                html! {
                    <textarea
                        id={field.name.clone()}
                        name={field.name.clone()}
                        rows="4"
                        required=true
                        placeholder={field.placeholder()}
                        {value}
                        {oninput}
                    />
                }
            }
            kind => {
                let oninput = ctx.link().callback(move |e: InputEvent| {
                    let input: HtmlInputElement = e.target_unchecked_into();
                    ContactMsg::Edit(name.clone(), input.value())
                });
                html! {
                    <input
                        type={kind.html_type()}
                        id={field.name.clone()}
                        name={field.name.clone()}
                        required=true
                        placeholder={field.placeholder()}
                        {value}
                        {oninput}
                    />
                }
            }
        };

        html! {
            <div class="form-field" key={field.name.clone()}>
                <label for={field.name.clone()}>{ &field.label }</label>
                { control }
            </div>
        }
    }
}

impl Component for ContactSection {
    type Message = ContactMsg;
    type Properties = ContactSectionProps;

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            form: ContactForm::new(&ctx.props().content.contact.fields, config::SUBMIT_FAILURE_RATE),
            pending: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            ContactMsg::Edit(field, value) => {
                self.form.set_value(&field, value);
                true
            }
            ContactMsg::Submit => {
                if !self.form.submit() {
                    return false;
                }
                info!("Submitting contact request");
                let link = ctx.link().clone();
                self.pending = Some(Timeout::new(config::SUBMIT_DELAY_MS, move || {
                    link.send_message(ContactMsg::Resolved);
                }));
                true
            }
            ContactMsg::Resolved => {
                self.pending = None;
                let roll = web_sys::js_sys::Math::random();
                match self.form.resolve(roll) {
                    FormStatus::Success => info!("Contact request sent"),
                    status => warn!("Contact request ended as {:?}", status),
                }
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let contact = &ctx.props().content.contact;
        let status = self.form.status();
        let onsubmit = ctx.link().callback(|e: SubmitEvent| {
            e.prevent_default();
            ContactMsg::Submit
        });

        let icon = match status {
            FormStatus::Loading => html! { <span class="spinner"></span> },
            FormStatus::Success => html! { <span class="button-icon">{"✓"}</span> },
            FormStatus::Idle | FormStatus::Error => html! { <span class="button-icon">{"✉"}</span> },
        };

        html! {
            <section id="contact" class="contact">
                <div class="contact-background" style={format!("background-image: url(\"{}\");", contact.background_image)}></div>
                <div class="contact-shade"></div>
                <div class="container contact-inner">
                    <SectionHeader title={contact.title.clone()} subtitle={contact.subtitle.clone()} />

                    <div class="contact-panel">
                        <FadeIn delay_ms={0}>
                            <h3>{"Contact Information"}</h3>
                            <p class="contact-intro">{ &contact.intro }</p>
                            <div class="contact-lines">
                                <div class="contact-line">
                                    <span class="contact-icon">{"✉"}</span>
                                    <div>
                                        <p class="contact-label">{"Email"}</p>
                                        <a href={format!("mailto:{}", contact.email)}>{ &contact.email }</a>
                                    </div>
                                </div>
                                <div class="contact-line">
                                    <span class="contact-icon">{"☎"}</span>
                                    <div>
                                        <p class="contact-label">{"Phone"}</p>
                                        <a href={contact.phone_href.clone()}>{ &contact.phone_display }</a>
                                    </div>
                                </div>
                                <div class="contact-line">
                                    <span class="contact-icon">{"⚡"}</span>
                                    <div>
                                        <p class="contact-label">{"Headquarters"}</p>
                                        <p>{ &contact.address }</p>
                                    </div>
                                </div>
                            </div>
                            <div class="contact-hours">
                                <h4>{"Operating Hours"}</h4>
                                <p>{ &contact.hours }</p>
                            </div>
                        </FadeIn>

                        <FadeIn delay_ms={150}>
                            <form class="contact-form" {onsubmit}>
                                { for contact.fields.iter().map(|field| self.field_view(ctx, field)) }
                                <button
                                    type="submit"
                                    class="submit-button"
                                    disabled={status == FormStatus::Loading}
                                >
                                    { icon }
                                    { status.button_label() }
                                </button>
                                if status == FormStatus::Error {
                                    <p class="form-error">{ &contact.error_message }</p>
                                }
                            </form>
                        </FadeIn>
                    </div>
                </div>
                <style>
                    {r#"
                    .contact {
                        background: #020617;
                        overflow: hidden;
                    }
                    .contact-background {
                        position: absolute;
                        inset: 0;
                        background-size: cover;
                        background-position: center;
                        opacity: 0.1;
                    }
                    .contact-shade {
                        position: absolute;
                        inset: 0;
                        background: rgba(2, 6, 23, 0.8);
                    }
                    .contact-inner {
                        position: relative;
                        z-index: 10;
                    }
                    .contact-panel {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(20rem, 1fr));
                        gap: 3rem;
                        padding: 3rem;
                        background: rgba(15, 23, 42, 0.9);
                        backdrop-filter: blur(4px);
                        border: 1px solid #1e293b;
                        border-radius: 1.5rem;
                    }
                    .contact-panel h3 {
                        font-size: 1.875rem;
                        color: #fff;
                        margin: 0 0 1.5rem;
                    }
                    .contact-intro {
                        color: #94a3b8;
                        font-size: 1.125rem;
                        margin: 0 0 2rem;
                    }
                    .contact-line {
                        display: flex;
                        gap: 1rem;
                        margin-bottom: 1.5rem;
                    }
                    .contact-icon {
                        color: #22d3ee;
                        font-size: 1.5rem;
                    }
                    .contact-line p {
                        margin: 0;
                        color: #94a3b8;
                    }
                    .contact-line .contact-label {
                        color: #cbd5e1;
                        font-weight: 700;
                    }
                    .contact-line a {
                        color: #94a3b8;
                        text-decoration: none;
                    }
                    .contact-line a:hover {
                        color: #22d3ee;
                    }
                    .contact-hours {
                        margin-top: 2.5rem;
                        padding-top: 1.5rem;
                        border-top: 1px solid #334155;
                    }
                    .contact-hours h4 {
                        color: #fff;
                        margin: 0 0 0.75rem;
                    }
                    .contact-hours p {
                        color: #94a3b8;
                        margin: 0;
                    }
                    .contact-form {
                        display: flex;
                        flex-direction: column;
                        gap: 1.5rem;
                    }
                    .form-field label {
                        display: block;
                        font-size: 0.875rem;
                        color: #cbd5e1;
                        margin-bottom: 0.5rem;
                    }
                    .form-field input, .form-field textarea {
                        width: 100%;
                        padding: 0.75rem 1rem;
                        background: #1e293b;
                        border: 1px solid #334155;
                        border-radius: 0.5rem;
                        color: #fff;
                        font: inherit;
                    }
                    .form-field textarea {
                        resize: none;
                    }
                    .form-field input:focus, .form-field textarea:focus {
                        outline: none;
                        border-color: #06b6d4;
                    }
                    .submit-button {
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        gap: 0.5rem;
                        width: 100%;
                        padding: 1rem;
                        border: none;
                        border-radius: 0.75rem;
                        background: linear-gradient(135deg, #06b6d4 0%, #7c3aed 100%);
                        color: #fff;
                        font-size: 1.125rem;
                        font-weight: 700;
                        cursor: pointer;
                    }
                    .submit-button:disabled {
                        opacity: 0.5;
                        cursor: not-allowed;
                    }
                    @keyframes spin {
                        to { transform: rotate(360deg); }
                    }
                    .spinner {
                        width: 1.25rem;
                        height: 1.25rem;
                        border: 3px solid rgba(255, 255, 255, 0.25);
                        border-top-color: #fff;
                        border-radius: 9999px;
                        animation: spin 1s linear infinite;
                    }
                    .form-error {
                        color: #f87171;
                        text-align: center;
                        margin: 1rem 0 0;
                    }
                    "#}
                </style>
            </section>
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        self.pending = None;
    }
}
