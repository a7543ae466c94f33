use std::collections::BTreeMap;

use log::{error, info, warn};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use super::submission::{self, FAILURE_MESSAGE, SUCCESS_MESSAGE};
use super::validation::{validate_field, ContactDraft, FieldError, FieldKind, FieldSpec, CONTACT_FIELDS};
use crate::components::notification::{notify, ToastContext, ToastKind};

const ACCENT_RING: &str = "0 0 0 3px hsl(var(--accent-primary)/0.1)";

pub fn group_style(focused: bool) -> String {
    if focused {
        format!("transform: scale(1.02); box-shadow: {};", ACCENT_RING)
    } else {
        "transform: scale(1); box-shadow: none;".to_string()
    }
}

/// Errors win over focus so a rejected field stays red until edited.
pub fn input_style(focused: bool, has_error: bool) -> &'static str {
    if has_error {
        "border-color: hsl(0, 70%, 60%); box-shadow: 0 0 0 3px hsl(0, 70%, 60%, 0.1);"
    } else if focused {
        "border-color: hsl(var(--accent-primary)); box-shadow: 0 0 20px hsl(var(--accent-primary)/0.2);"
    } else {
        "border-color: hsl(var(--accent-primary)/0.2); box-shadow: none;"
    }
}

fn event_value(e: &InputEvent) -> String {
    e.target_dyn_into::<HtmlInputElement>()
        .map(|input| input.value())
        .or_else(|| e.target_dyn_into::<HtmlTextAreaElement>().map(|area| area.value()))
        .unwrap_or_default()
}

#[derive(Properties, PartialEq)]
struct FormFieldProps {
    spec: FieldSpec,
    value: String,
    error: Option<FieldError>,
    on_input: Callback<String>,
    on_blur: Callback<()>,
}

#[function_component(FormField)]
fn form_field(props: &FormFieldProps) -> Html {
    let focused = use_state(|| false);
    let spec = props.spec;

    let oninput = {
        let on_input = props.on_input.clone();
        Callback::from(move |e: InputEvent| on_input.emit(event_value(&e)))
    };
    let onfocus = {
        let focused = focused.clone();
        Callback::from(move |_: FocusEvent| focused.set(true))
    };
    let onblur = {
        let focused = focused.clone();
        let on_blur = props.on_blur.clone();
        Callback::from(move |_: FocusEvent| {
            focused.set(false);
            on_blur.emit(());
        })
    };

    let style = input_style(*focused, props.error.is_some());
    let input = match spec.kind {
        FieldKind::TextArea => html! {
            <textarea id={spec.name} name={spec.name} rows="5" required={spec.required}
                value={props.value.clone()} {style} {oninput} {onfocus} {onblur} />
        },
        FieldKind::Email | FieldKind::Text => html! {
            <input id={spec.name} name={spec.name} required={spec.required}
                type={if spec.kind == FieldKind::Email { "email" } else { "text" }}
                value={props.value.clone()} {style} {oninput} {onfocus} {onblur} />
        },
    };

    html! {
        <div class="form-group" style={group_style(*focused)}>
            <label for={spec.name}>{ spec.label }</label>
            { input }
            if let Some(error) = &props.error {
                <div class="field-error">{ error.to_string() }</div>
            }
        </div>
    }
}

#[function_component(ContactForm)]
pub fn contact_form() -> Html {
    let draft = use_state(ContactDraft::default);
    let errors = use_state(BTreeMap::<&'static str, FieldError>::new);
    let submitting = use_state(|| false);
    let toasts = use_context::<ToastContext>();

    let onsubmit = {
        let draft = draft.clone();
        let errors = errors.clone();
        let submitting = submitting.clone();
        let toasts = toasts.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *submitting {
                return;
            }

            let found = draft.validate();
            if !found.is_empty() {
                errors.set(found);
                return;
            }

            submitting.set(true);
            let draft = draft.clone();
            let errors = errors.clone();
            let submitting = submitting.clone();
            let toasts = toasts.clone();
            spawn_local(async move {
                let result = submission::submit((*draft).clone()).await;
                let (kind, message) = match result {
                    Ok(()) => {
                        info!("Contact form sent");
                        draft.set(ContactDraft::default());
                        errors.set(BTreeMap::new());
                        (ToastKind::Success, SUCCESS_MESSAGE)
                    }
                    Err(err) => {
                        error!("Form submission error: {}", err);
                        (ToastKind::Error, FAILURE_MESSAGE)
                    }
                };
                match &toasts {
                    Some(toasts) => notify(toasts, kind, message),
                    None => warn!("No toast context for: {}", message),
                }
                submitting.set(false);
            });
        })
    };

    let fields = CONTACT_FIELDS.iter().map(|spec| {
        let spec = *spec;
        let on_input = {
            let draft = draft.clone();
            let errors = errors.clone();
            Callback::from(move |value: String| {
                let mut next = (*draft).clone();
                next.set(spec.name, value);
                draft.set(next);
                if errors.contains_key(spec.name) {
                    let mut next = (*errors).clone();
                    next.remove(spec.name);
                    errors.set(next);
                }
            })
        };
        let on_blur = {
            let draft = draft.clone();
            let errors = errors.clone();
            Callback::from(move |_: ()| {
                let mut next = (*errors).clone();
                match validate_field(&spec, draft.value(spec.name)) {
                    Ok(()) => next.remove(spec.name),
                    Err(err) => next.insert(spec.name, err),
                };
                if next != *errors {
                    errors.set(next);
                }
            })
        };
        html! {
            <FormField
                key={spec.name}
                {spec}
                value={draft.value(spec.name).to_string()}
                error={errors.get(spec.name).cloned()}
                {on_input}
                {on_blur}
            />
        }
    });

    html! {
        <form id="contact-form" class="contact-form" novalidate={true} {onsubmit}>
            { for fields }
            <button type="submit" class="submit-btn" disabled={*submitting}>
                if *submitting {
                    <i class="fas fa-spinner fa-spin"></i>{ " Sending..." }
                } else {
                    <i class="fas fa-paper-plane"></i>{ " Send Message" }
                }
            </button>
        </form>
    }
}
