use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LightboxProps {
    pub image: Option<AttrValue>,
    pub on_close: Callback<()>,
}

/// Full-size preview of a gallery image.
#[function_component(Lightbox)]
pub fn lightbox(props: &LightboxProps) -> Html {
    let open = props.image.is_some();

    // Escape closes; the listener only lives while the preview is open.
    {
        let on_close = props.on_close.clone();
        use_effect_with_deps(
            move |open: &bool| {
                let window = web_sys::window().filter(|_| *open);
                let keydown = Closure::wrap(Box::new(move |e: KeyboardEvent| {
                    if e.key() == "Escape" {
                        on_close.emit(());
                    }
                }) as Box<dyn FnMut(KeyboardEvent)>);
                if let Some(window) = &window {
                    if window.add_event_listener_with_callback("keydown", keydown.as_ref().unchecked_ref()).is_err() {
                        warn!("could not listen for Escape on the lightbox");
                    }
                }
                move || {
                    if let Some(window) = window {
                        let _ = window.remove_event_listener_with_callback("keydown", keydown.as_ref().unchecked_ref());
                    }
                }
            },
            open,
        );
    }

    let Some(image) = props.image.clone() else {
        return html! {};
    };

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    let keep_open = Callback::from(|e: MouseEvent| e.stop_propagation());

    html! {
        <div class="lightbox-overlay" onclick={close.clone()}>
            <style>
                {r#"
                .lightbox-overlay {
                    position: fixed;
                    inset: 0;
                    z-index: 90;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    background: rgba(0, 0, 0, 0.85);
                    animation: lightboxIn 0.2s ease-out;
                }
                .lightbox-frame {
                    position: relative;
                    max-width: 95vw;
                    max-height: 90vh;
                }
                .lightbox-frame img {
                    max-width: 100%;
                    max-height: 85vh;
                    object-fit: contain;
                    border-radius: 8px;
                }
                .lightbox-close {
                    position: absolute;
                    top: -3rem;
                    right: 0;
                    padding: 0.5rem;
                    background: none;
                    border: none;
                    color: #fff;
                    font-size: 2rem;
                    line-height: 1;
                    cursor: pointer;
                    transition: color 0.2s ease;
                }
                .lightbox-close:hover {
                    color: #C94A4A;
                }
                @keyframes lightboxIn {
                    from { opacity: 0; }
                    to { opacity: 1; }
                }
                "#}
            </style>
            <div class="lightbox-frame" onclick={keep_open}>
                <img src={image} alt="Gallery Preview" />
                <button class="lightbox-close" onclick={close} aria-label="Close">{"✕"}</button>
            </div>
        </div>
    }
}
