use log::{info, warn};
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::toast::ToastKind;
use crate::content::CONTACT_SERVICES;
use crate::estimate::dialog::SUBMITTED_MESSAGE;
use crate::estimate::form::{ContactRequest, FormError};

#[derive(Properties, PartialEq)]
pub struct ContactFormProps {
    pub notify: Callback<(ToastKind, AttrValue)>,
}

#[function_component(ContactForm)]
pub fn contact_form(props: &ContactFormProps) -> Html {
    let request = use_state(ContactRequest::default);
    let error = use_state(|| None::<FormError>);

    let update = |apply: fn(&mut ContactRequest, String)| {
        let request = request.clone();
        move |value: String| {
            let mut next = (*request).clone();
            apply(&mut next, value);
            request.set(next);
        }
    };

    let on_name = {
        let set = update(|r, v| r.name = v);
        Callback::from(move |e: InputEvent| set(e.target_unchecked_into::<HtmlInputElement>().value()))
    };
    let on_phone = {
        let set = update(|r, v| r.phone = v);
        Callback::from(move |e: InputEvent| set(e.target_unchecked_into::<HtmlInputElement>().value()))
    };
    let on_email = {
        let set = update(|r, v| r.email = v);
        Callback::from(move |e: InputEvent| set(e.target_unchecked_into::<HtmlInputElement>().value()))
    };
    let on_service = {
        let set = update(|r, v| r.service = v);
        Callback::from(move |e: Event| set(e.target_unchecked_into::<HtmlSelectElement>().value()))
    };
    let on_message = {
        let set = update(|r, v| r.message = v);
        Callback::from(move |e: InputEvent| set(e.target_unchecked_into::<HtmlTextAreaElement>().value()))
    };

    let onsubmit = {
        let request = request.clone();
        let error = error.clone();
        let notify = props.notify.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if let Err(e) = request.validate() {
                error.set(Some(e));
                return;
            }
            match serde_json::to_string(&*request) {
                Ok(json) => info!("contact request acknowledged: {}", json),
                Err(e) => warn!("could not serialise contact request: {}", e),
            }
            notify.emit((ToastKind::Success, AttrValue::Static(SUBMITTED_MESSAGE)));
            error.set(None);
            request.set(ContactRequest::default());
        })
    };

    html! {
        <form class="contact-form" {onsubmit}>
            <div class="contact-form-row">
                <div class="estimate-field">
                    <label>{"Name"}</label>
                    <input placeholder="Your name" value={request.name.clone()} oninput={on_name} />
                </div>
                <div class="estimate-field">
                    <label>{"Phone"}</label>
                    <input type="tel" placeholder="(555) 123-4567" value={request.phone.clone()} oninput={on_phone} />
                </div>
            </div>
            <div class="estimate-field">
                <label>{"Email"}</label>
                <input type="email" placeholder="you@company.com" value={request.email.clone()} oninput={on_email} />
            </div>
            <div class="estimate-field">
                <label>{"Service Needed"}</label>
                <select onchange={on_service}>
                    <option value="" selected={request.service.is_empty()} disabled=true>{"Select a service"}</option>
                    {
                        CONTACT_SERVICES.iter().map(|(value, label)| html! {
                            <option value={*value} selected={request.service == *value}>{*label}</option>
                        }).collect::<Html>()
                    }
                </select>
            </div>
            <div class="estimate-field">
                <label>{"Message"}</label>
                <textarea placeholder="Tell us about your project..." value={request.message.clone()} oninput={on_message} />
            </div>
            if let Some(e) = (*error).as_ref() {
                <p class="form-error">{e.to_string()}</p>
            }
            <button type="submit" class="btn-primary estimate-wide">{"➤ Send Request"}</button>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contact_form_acknowledges_like_an_estimate() {
        assert_eq!(
            SUBMITTED_MESSAGE,
            "Estimate request submitted! We'll contact you within 24 hours."
        );
    }
}
