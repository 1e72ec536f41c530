use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::config::TOAST_DURATION_MS;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    /// Bumped for every toast so an identical message still restarts the timer.
    pub serial: u32,
    pub kind: ToastKind,
    pub message: AttrValue,
}

#[derive(Properties, PartialEq)]
pub struct ToasterProps {
    pub toast: Option<Toast>,
    pub on_dismiss: Callback<()>,
}

/// Single toast slot pinned to the top centre of the page.
#[function_component(Toaster)]
pub fn toaster(props: &ToasterProps) -> Html {
    {
        let on_dismiss = props.on_dismiss.clone();
        use_effect_with_deps(
            move |serial: &Option<u32>| {
                let timeout = serial.map(|_| Timeout::new(TOAST_DURATION_MS, move || on_dismiss.emit(())));
                // Dropping the timeout cancels it when a newer toast arrives.
                move || drop(timeout)
            },
            props.toast.as_ref().map(|t| t.serial),
        );
    }

    let Some(toast) = props.toast.as_ref() else {
        return html! {};
    };

    let onclick = {
        let on_dismiss = props.on_dismiss.clone();
        Callback::from(move |_: MouseEvent| on_dismiss.emit(()))
    };
    let kind = match toast.kind {
        ToastKind::Success => "toast-success",
        ToastKind::Error => "toast-error",
    };

    html! {
        <div class="toaster">
            <style>
                {r#"
                .toaster {
                    position: fixed;
                    top: 1.5rem;
                    left: 50%;
                    transform: translateX(-50%);
                    z-index: 100;
                }
                .toast {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    padding: 0.9rem 1.25rem;
                    border-radius: 10px;
                    font-size: 0.95rem;
                    box-shadow: 0 8px 24px rgba(0, 0, 0, 0.15);
                    cursor: pointer;
                    animation: toastIn 0.3s ease-out;
                }
                .toast-success {
                    background: #ECFDF3;
                    color: #027A48;
                    border: 1px solid #A6F4C5;
                }
                .toast-error {
                    background: #FEF3F2;
                    color: #B42318;
                    border: 1px solid #FECDCA;
                }
                @keyframes toastIn {
                    from { opacity: 0; transform: translateY(-10px); }
                    to { opacity: 1; transform: translateY(0); }
                }
                "#}
            </style>
            <div class={classes!("toast", kind)} role="status" {onclick}>
                {&toast.message}
            </div>
        </div>
    }
}
