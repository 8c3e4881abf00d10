use web_sys::{Event, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::components::accordion::{Accordion, AccordionItem};
use crate::components::badge::{Badge, BadgeVariant};
use crate::components::button::{Button, ButtonSize};
use crate::components::scroll::use_scroll_to_top;
use crate::components::toast::use_toast;
use crate::config;
use crate::contact::{self, ContactForm, Field, FieldErrors, HttpRelay, InFlight, InquiryType, SubmitOutcome};

fn event_value(e: &Event) -> Option<String> {
    if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
        return Some(input.value());
    }
    if let Some(area) = e.target_dyn_into::<HtmlTextAreaElement>() {
        return Some(area.value());
    }
    e.target_dyn_into::<HtmlSelectElement>().map(|select| select.value())
}

#[derive(Properties, PartialEq)]
struct FieldProps {
    label: AttrValue,
    name: AttrValue,
    value: AttrValue,
    #[prop_or_default]
    placeholder: AttrValue,
    #[prop_or("text".into())]
    input_type: AttrValue,
    #[prop_or_default]
    multiline: bool,
    #[prop_or_default]
    error: Option<&'static str>,
    oninput: Callback<InputEvent>,
}

#[function_component(FormField)]
fn form_field(props: &FieldProps) -> Html {
    let class = classes!("form-field__input", props.error.is_some().then(|| "has-error"));
    html! {
        <label class="form-field">
            <span class="form-field__label">{ props.label.clone() }</span>
            if props.multiline {
                <textarea
                    name={props.name.clone()}
                    class={class}
                    placeholder={props.placeholder.clone()}
                    value={props.value.clone()}
                    oninput={props.oninput.clone()}
                />
            } else {
                <input
                    type={props.input_type.clone()}
                    name={props.name.clone()}
                    class={class}
                    placeholder={props.placeholder.clone()}
                    value={props.value.clone()}
                    oninput={props.oninput.clone()}
                />
            }
            if let Some(error) = props.error {
                <span class="form-field__error" role="alert">{ error }</span>
            }
        </label>
    }
}

#[function_component(Contact)]
pub fn contact() -> Html {
    use_scroll_to_top();
    let toast = use_toast();
    let form = use_state(ContactForm::default);
    let errors = use_state(FieldErrors::default);
    let is_submitting = use_state(|| false);
    // Read inside async code, so it has to outlive the render that started the request.
    let in_flight = use_mut_ref(InFlight::default);

    let bind = |apply: fn(&mut ContactForm, String), field: Option<Field>| {
        let form = form.clone();
        let errors = errors.clone();
        Callback::from(move |e: InputEvent| {
            let Some(value) = event_value(&e) else { return };
            let mut next = (*form).clone();
            apply(&mut next, value);
            form.set(next);
            if let Some(field) = field {
                if errors.contains(field) {
                    let mut cleared = (*errors).clone();
                    cleared.clear(field);
                    errors.set(cleared);
                }
            }
        })
    };

    let on_inquiry = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let Some(value) = event_value(&e) else { return };
            match InquiryType::from_value(&value) {
                Some(kind) => {
                    let mut next = (*form).clone();
                    next.inquiry_type = kind;
                    form.set(next);
                }
                None => log::warn!("Unknown inquiry type {}", value),
            }
        })
    };

    let onsubmit = {
        let form = form.clone();
        let errors = errors.clone();
        let is_submitting = is_submitting.clone();
        let in_flight = in_flight.clone();
        let toast = toast.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if in_flight.borrow().is_active() {
                log::debug!("Ignoring submit while a request is in flight");
                return;
            }

            let current = (*form).clone();
            if let Err(invalid) = current.validate() {
                errors.set(invalid);
                return;
            }
            errors.set(FieldErrors::default());

            if !in_flight.borrow_mut().try_begin() {
                return;
            }
            is_submitting.set(true);
            let form = form.clone();
            let errors = errors.clone();
            let is_submitting = is_submitting.clone();
            let in_flight = in_flight.clone();
            let toast = toast.clone();
            spawn_local(async move {
                let outcome = contact::submit(&HttpRelay::default(), &current).await;
                if let Some(notice) = outcome.notice() {
                    if let Err(e) = toast.add(notice.kind, notice.message, Some(notice.title.to_string()), None) {
                        log::error!("Could not show contact notice: {}", e);
                    }
                }
                if let SubmitOutcome::Invalid(invalid) = &outcome {
                    errors.set(invalid.clone());
                }
                if let Some(reset) = ContactForm::reset_after(&outcome) {
                    form.set(reset);
                }
                in_flight.borrow_mut().finish();
                is_submitting.set(false);
            });
        })
    };

    let mailto = contact::mailto_fallback(&form);

    html! {
        <div class="contact-page">
            <section class="hero contact-hero">
                <div class="contact-hero__text">
                    <Badge variant={BadgeVariant::Green}>{"Get in touch"}</Badge>
                    <h1>{"Let's engineer your next phase."}</h1>
                    <p>{"Whether you need architectural guidance on Google Cloud, a scalable data foundation, or a production-ready generative AI system, our experts are ready to engage."}</p>
                    <div class="contact-hero__details">
                        <div>
                            <h4>{"Global Headquarters"}</h4>
                            <p>{"1201 3rd Ave, Suite 3400"}<br/>{"Seattle, WA 98101"}</p>
                        </div>
                        <div>
                            <h4>{"Direct Contact"}</h4>
                            <p><a href={mailto}>{ config::CONTACT_EMAIL }</a></p>
                        </div>
                    </div>
                </div>

                <form class="contact-form" onsubmit={onsubmit} novalidate=true>
                    <h3>{"Send an Inquiry"}</h3>
                    <div class="contact-form__row">
                        <FormField label="First name" name="firstName" placeholder="Jane"
                            value={form.first_name.clone()}
                            error={errors.get(Field::FirstName)}
                            oninput={bind(|f, v| f.first_name = v, Some(Field::FirstName))} />
                        <FormField label="Last name" name="lastName" placeholder="Doe"
                            value={form.last_name.clone()}
                            error={errors.get(Field::LastName)}
                            oninput={bind(|f, v| f.last_name = v, Some(Field::LastName))} />
                    </div>
                    <div class="contact-form__row">
                        <FormField label="Work Email" name="email" input_type="email" placeholder="jane@company.com"
                            value={form.email.clone()}
                            error={errors.get(Field::Email)}
                            oninput={bind(|f, v| f.email = v, Some(Field::Email))} />
                        <FormField label="Company" name="company" placeholder="Acme Corp"
                            value={form.company.clone()}
                            oninput={bind(|f, v| f.company = v, None)} />
                    </div>
                    <label class="form-field">
                        <span class="form-field__label">{"What can we help you with?"}</span>
                        <select name="inquiryType" class="form-field__input" onchange={on_inquiry}>
                            { for InquiryType::ALL.iter().map(|kind| html! {
                                <option value={kind.value()} selected={*kind == form.inquiry_type}>{ kind.label() }</option>
                            }) }
                        </select>
                    </label>
                    <FormField label="Project Details" name="message" multiline=true
                        placeholder="Tell us about the challenges you're facing or the goals you're trying to achieve."
                        value={form.message.clone()}
                        error={errors.get(Field::Message)}
                        oninput={bind(|f, v| f.message = v, Some(Field::Message))} />

                    <Button submit=true size={ButtonSize::Lg} disabled={*is_submitting} class={classes!("contact-form__submit")}>
                        { if *is_submitting { "Sending..." } else { "Submit Inquiry" } }
                    </Button>
                    <p class="contact-form__legal">
                        {"By submitting this form, you agree to our Privacy Policy and Terms of Service."}
                    </p>
                </form>
            </section>

            <section class="section contact-faq">
                <h2>{"Frequently Asked Questions"}</h2>
                <Accordion items={vec![
                    AccordionItem::text(
                        "Do you take on projects outside of Google Cloud?",
                        "Our deepest expertise is within Google Cloud, but we regularly architect multi-cloud solutions with AWS or Azure when a client keeps a hybrid footprint.",
                    ),
                    AccordionItem::text(
                        "How quickly will someone get back to me?",
                        "An architect reviews every inquiry and replies within one business day.",
                    ),
                    AccordionItem::text(
                        "Do you sign NDAs before a first call?",
                        "Yes. Send us your template and we will return it before we discuss specifics.",
                    ),
                ]} />
            </section>

            <style>
                {r#"
                .contact-hero {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 4rem;
                    align-items: start;
                }
                .contact-hero__details {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 2rem;
                    font-size: 0.9rem;
                }
                .contact-hero__details p {
                    font-family: monospace;
                    font-size: 0.9rem;
                }
                .contact-form {
                    background: #fff;
                    border: 1px solid var(--border);
                    border-radius: 16px;
                    padding: 2rem;
                    display: flex;
                    flex-direction: column;
                    gap: 1.25rem;
                    box-shadow: 0 16px 40px rgba(0, 0, 0, 0.06);
                }
                .contact-form__row {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 1rem;
                }
                .form-field {
                    display: flex;
                    flex-direction: column;
                    gap: 0.4rem;
                }
                .form-field__label {
                    font-size: 0.875rem;
                    font-weight: 500;
                }
                .form-field__input {
                    border: 1px solid var(--border);
                    border-radius: 8px;
                    padding: 0.75rem 1rem;
                    font: inherit;
                    background: var(--bg);
                }
                textarea.form-field__input {
                    min-height: 120px;
                    resize: vertical;
                }
                .form-field__input.has-error {
                    border-color: var(--red);
                }
                .form-field__error {
                    color: var(--red);
                    font-size: 0.8rem;
                }
                .contact-form__submit {
                    justify-content: center;
                }
                .contact-form__legal {
                    font-size: 0.75rem;
                    color: var(--muted);
                    text-align: center;
                }
                .contact-faq {
                    max-width: 800px;
                }
                @media (max-width: 900px) {
                    .contact-hero,
                    .contact-form__row,
                    .contact-hero__details {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </div>
    }
}
