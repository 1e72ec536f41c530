use log::{debug, info, warn};
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::toast::ToastKind;
use crate::content::{ESTIMATE_SERVICES, LOT_SIZES, TIMELINES};
use crate::estimate::form::{EstimateAction, EstimateForm, EstimateStep, Field};

pub const SUBMITTED_MESSAGE: &str = "Estimate request submitted! We'll contact you within 24 hours.";

#[derive(Properties, PartialEq)]
pub struct EstimateDialogProps {
    pub open: bool,
    pub on_close: Callback<()>,
    pub notify: Callback<(ToastKind, AttrValue)>,
}

fn text_input(form: &UseReducerHandle<EstimateForm>, field: Field, value: &str, label: &str, placeholder: &str, kind: &str) -> Html {
    let oninput = {
        let form = form.dispatcher();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.dispatch(EstimateAction::Set(field, input.value()));
        })
    };
    html! {
        <div class="estimate-field">
            <label>{label}</label>
            <input type={kind.to_string()} value={value.to_string()} placeholder={placeholder.to_string()} {oninput} />
        </div>
    }
}

fn select_input(form: &UseReducerHandle<EstimateForm>, field: Field, value: &str, label: &str, placeholder: &str, options: &'static [(&'static str, &'static str)]) -> Html {
    let onchange = {
        let form = form.dispatcher();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            form.dispatch(EstimateAction::Set(field, select.value()));
        })
    };
    html! {
        <div class="estimate-field">
            <label>{label}</label>
            <select {onchange}>
                <option value="" selected={value.is_empty()} disabled=true>{placeholder}</option>
                {
                    options.iter().map(|(option, text)| html! {
                        <option value={*option} selected={value == *option}>{*text}</option>
                    }).collect::<Html>()
                }
            </select>
        </div>
    }
}

/// Three-step "request an estimate" dialog. Nothing leaves the browser: a
/// finished request is logged and acknowledged with a toast.
#[function_component(EstimateDialog)]
pub fn estimate_dialog(props: &EstimateDialogProps) -> Html {
    let form = use_reducer(EstimateForm::default);

    if !props.open {
        return html! {};
    }

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    let keep_open = Callback::from(|e: MouseEvent| e.stop_propagation());

    let on_continue = {
        let form = form.dispatcher();
        Callback::from(move |_: MouseEvent| form.dispatch(EstimateAction::Continue))
    };
    let on_back = {
        let form = form.dispatcher();
        Callback::from(move |_: MouseEvent| form.dispatch(EstimateAction::Back))
    };

    let onsubmit = {
        let form = form.clone();
        let on_close = props.on_close.clone();
        let notify = props.notify.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            // Enter inside an earlier step means "continue", not "send".
            if form.step != EstimateStep::Photos {
                form.dispatch(EstimateAction::Continue);
                return;
            }
            match form.submit() {
                Ok(request) => {
                    match serde_json::to_string(&request) {
                        Ok(json) => info!("estimate request acknowledged: {}", json),
                        Err(e) => warn!("could not serialise estimate request: {}", e),
                    }
                    notify.emit((ToastKind::Success, AttrValue::Static(SUBMITTED_MESSAGE)));
                    form.dispatch(EstimateAction::Reset);
                    on_close.emit(());
                }
                Err(e) => {
                    debug!("estimate submit rejected: {}", e);
                    notify.emit((ToastKind::Error, AttrValue::from(e.to_string())));
                    form.dispatch(EstimateAction::Failed(e));
                }
            }
        })
    };

    let on_photos = {
        let form = form.dispatcher();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut names = Vec::new();
            if let Some(files) = input.files() {
                for i in 0..files.length() {
                    if let Some(file) = files.get(i) {
                        names.push(file.name());
                    }
                }
            }
            form.dispatch(EstimateAction::Photos(names));
        })
    };

    let step = form.step;
    let body = match step {
        EstimateStep::Contact => html! {
            <div class="estimate-step">
                { text_input(&form, Field::Name, &form.contact.name, "Full Name", "John Smith", "text") }
                { text_input(&form, Field::Phone, &form.contact.phone, "Phone Number", "(559) 123-4567", "tel") }
                { text_input(&form, Field::Email, &form.contact.email, "Email", "john@company.com", "email") }
                { text_input(&form, Field::Address, &form.contact.address, "Property Address", "123 Main St, Fresno, CA", "text") }
                <button type="button" class="btn-primary estimate-wide" onclick={on_continue}>
                    {"Continue →"}
                </button>
            </div>
        },
        EstimateStep::Project => {
            let ondetails = {
                let form = form.dispatcher();
                Callback::from(move |e: InputEvent| {
                    let area: HtmlTextAreaElement = e.target_unchecked_into();
                    form.dispatch(EstimateAction::Set(Field::Details, area.value()));
                })
            };
            html! {
                <div class="estimate-step">
                    { select_input(&form, Field::Service, &form.project.service, "Service Type", "Select service", ESTIMATE_SERVICES) }
                    { select_input(&form, Field::LotSize, &form.project.lot_size, "Approximate Lot Size", "Select size", LOT_SIZES) }
                    { select_input(&form, Field::Timeline, &form.project.timeline, "Preferred Timeline", "Select timeline", TIMELINES) }
                    <div class="estimate-field">
                        <label>{"Additional Details"}</label>
                        <textarea
                            value={form.project.details.clone()}
                            placeholder="Any specific requirements or questions..."
                            oninput={ondetails}
                        />
                    </div>
                    <div class="estimate-buttons">
                        <button type="button" class="btn-secondary" onclick={on_back}>{"Back"}</button>
                        <button type="button" class="btn-primary" onclick={on_continue}>{"Continue"}</button>
                    </div>
                </div>
            }
        }
        EstimateStep::Photos => html! {
            <div class="estimate-step">
                <div class="estimate-upload">
                    <span class="estimate-icon">{"📷"}</span>
                    <p class="estimate-upload-title">{"Upload Photos of Your Lot"}</p>
                    <p class="estimate-muted">
                        {"Help us provide a more accurate estimate by sharing photos of your parking area."}
                    </p>
                    <label class="btn-secondary estimate-file">
                        {"⬆ Choose Files"}
                        <input type="file" accept="image/*" multiple=true onchange={on_photos} />
                    </label>
                    if !form.photos.is_empty() {
                        <ul class="estimate-files">
                            { for form.photos.iter().map(|name| html! { <li>{name}</li> }) }
                        </ul>
                    }
                </div>
                <div class="estimate-pin">
                    <span class="estimate-icon">{"🗺️"}</span>
                    <div>
                        <p class="estimate-upload-title">{"Drop a Pin"}</p>
                        <p class="estimate-muted">
                            {"You can also share your location or drop a pin on the map for easier navigation to your property."}
                        </p>
                    </div>
                </div>
                <div class="estimate-buttons">
                    <button type="button" class="btn-secondary" onclick={on_back}>{"Back"}</button>
                    <button type="submit" class="btn-primary">{"➤ Submit Request"}</button>
                </div>
            </div>
        },
    };

    html! {
        <div class="modal-overlay" onclick={close.clone()}>
            <style>
                {r#"
                .modal-overlay {
                    position: fixed;
                    inset: 0;
                    z-index: 80;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    padding: 1rem;
                    background: rgba(30, 42, 59, 0.6);
                    backdrop-filter: blur(4px);
                }
                .modal-content {
                    position: relative;
                    width: 100%;
                    max-width: 480px;
                    max-height: 90vh;
                    overflow-y: auto;
                    background: #fff;
                    border-radius: 16px;
                    padding: 2rem;
                    box-shadow: 0 24px 48px rgba(0, 0, 0, 0.2);
                }
                .modal-close {
                    position: absolute;
                    top: 1rem;
                    right: 1rem;
                    background: none;
                    border: none;
                    font-size: 1.25rem;
                    color: #6B7280;
                    cursor: pointer;
                }
                .modal-content h2 {
                    font-family: 'Bebas Neue', sans-serif;
                    font-size: 1.75rem;
                    color: #1E2A3B;
                    margin-bottom: 1rem;
                }
                .estimate-progress {
                    display: flex;
                    gap: 0.5rem;
                    margin-bottom: 1.5rem;
                }
                .estimate-progress div {
                    width: 2rem;
                    height: 4px;
                    border-radius: 999px;
                    background: #E5E7EB;
                }
                .estimate-progress div.done {
                    background: #C94A4A;
                }
                .estimate-step {
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                }
                .estimate-buttons {
                    display: flex;
                    gap: 0.75rem;
                }
                .estimate-buttons button {
                    flex: 1;
                }
                .estimate-upload {
                    border: 2px dashed #E5E7EB;
                    border-radius: 12px;
                    padding: 1.5rem;
                    text-align: center;
                }
                .estimate-icon {
                    font-size: 2rem;
                }
                .estimate-upload-title {
                    font-weight: 600;
                    color: #1E2A3B;
                }
                .estimate-muted {
                    font-size: 0.85rem;
                    color: #6B7280;
                    margin: 0.5rem 0 1rem;
                }
                .estimate-file input {
                    display: none;
                }
                .estimate-files {
                    list-style: none;
                    padding: 0;
                    margin-top: 1rem;
                    font-size: 0.85rem;
                    color: #1E2A3B;
                }
                .estimate-pin {
                    display: flex;
                    gap: 1rem;
                    padding: 1rem;
                    border-radius: 12px;
                    background: #FAF8F5;
                }
                "#}
            </style>
            <div class="modal-content" onclick={keep_open}>
                <button class="modal-close" onclick={close} aria-label="Close">{"✕"}</button>
                <h2>{step.title()}</h2>
                <div class="estimate-progress">
                    {
                        EstimateStep::ALL.iter().map(|s| html! {
                            <div class={classes!((s.number() <= step.number()).then(|| "done"))} />
                        }).collect::<Html>()
                    }
                </div>
                if let Some(error) = form.error.as_ref() {
                    <p class="form-error">{error.to_string()}</p>
                }
                <form {onsubmit}>
                    { body }
                </form>
            </div>
        </div>
    }
}
