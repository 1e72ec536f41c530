use yew::prelude::*;
use log::{debug, info, warn};
use web_sys::{HtmlElement, MouseEvent};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

mod config;
mod content;
mod scroll;
mod components {
    pub mod gallery_carousel;
    pub mod comparison_slider;
    pub mod lightbox;
    pub mod toast;
    pub mod reveal;
}
mod estimate {
    pub mod form;
    pub mod dialog;
    pub mod contact_form;
}
mod pages {
    pub mod sections;
    pub mod landing;
}

use components::{
    lightbox::Lightbox,
    toast::{Toast, ToastKind, Toaster},
};
use config::NAV_HEIGHT;
use content::{BUSINESS_NAME, LICENSE, LOGO, PHONE_DISPLAY, PHONE_HREF, SERVICES};
use estimate::dialog::EstimateDialog;
use pages::landing::Landing;
use scroll::{header_over_content, scroll_to_id};

const NAV_LINKS: &[(&str, &str)] = &[
    ("reviews", "Reviews"),
    ("our-work", "Our Work"),
    ("contact", "Contact"),
];

fn hero_height() -> Option<f64> {
    let hero = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id("home"))
        .and_then(|e| e.dyn_into::<HtmlElement>().ok());
    if hero.is_none() {
        warn!("no hero section to measure");
    }
    hero.map(|e| e.offset_height() as f64)
}

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub on_estimate: Callback<()>,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let menu_open = use_state(|| false);
    let services_open = use_state(|| false);
    let mobile_services_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(move |_| {
            let window = web_sys::window();

            let scroll_callback = Closure::wrap(Box::new(move || {
                let scroll_y = web_sys::window()
                    .and_then(|w| w.scroll_y().ok())
                    .unwrap_or(0.0);
                is_scrolled.set(header_over_content(scroll_y, hero_height(), NAV_HEIGHT));
            }) as Box<dyn FnMut()>);

            if let Some(window) = &window {
                if let Err(e) = window.add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref()) {
                    warn!("could not watch scroll: {:?}", e);
                }
            }

            move || {
                if let Some(window) = window {
                    let _ = window.remove_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());
                }
            }
        }, ());
    }

    // Every link scrolls to its section and folds the menus away.
    let go_to = {
        let menu_open = menu_open.clone();
        let services_open = services_open.clone();
        let mobile_services_open = mobile_services_open.clone();
        move |id: &'static str| {
            let menu_open = menu_open.clone();
            let services_open = services_open.clone();
            let mobile_services_open = mobile_services_open.clone();
            Callback::from(move |e: MouseEvent| {
                e.prevent_default();
                scroll_to_id(id);
                menu_open.set(false);
                services_open.set(false);
                mobile_services_open.set(false);
            })
        }
    };

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let toggle_mobile_services = {
        let mobile_services_open = mobile_services_open.clone();
        Callback::from(move |_: MouseEvent| mobile_services_open.set(!*mobile_services_open))
    };

    let open_services = {
        let services_open = services_open.clone();
        Callback::from(move |_: MouseEvent| services_open.set(true))
    };
    let close_services = {
        let services_open = services_open.clone();
        Callback::from(move |_: MouseEvent| services_open.set(false))
    };

    let book_now = {
        let on_estimate = props.on_estimate.clone();
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
            on_estimate.emit(());
        })
    };

    let service_links = |class: &'static str| -> Html {
        SERVICES.iter().map(|service| html! {
            <a href={format!("#{}", service.id)} class={class} onclick={go_to(service.id)}>
                {service.title}
            </a>
        }).collect()
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <style>
                {r#"
                .top-nav {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 50;
                    height: 88px;
                    background: rgba(250, 248, 245, 0.95);
                    backdrop-filter: blur(8px);
                    box-shadow: 0 1px 3px rgba(0, 0, 0, 0.08);
                    transition: background 0.3s ease;
                }
                .top-nav.scrolled {
                    background: transparent;
                    box-shadow: none;
                }
                .nav-content {
                    max-width: 80rem;
                    height: 100%;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }
                .nav-logo {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    color: #1E2A3B;
                    text-decoration: none;
                    font-family: 'Bebas Neue', sans-serif;
                    font-size: 1.25rem;
                }
                .nav-logo img {
                    height: 3.5rem;
                }
                .nav-license {
                    font-family: 'IBM Plex Mono', monospace;
                    font-size: 0.7rem;
                    color: #6B7280;
                }
                .nav-right {
                    display: flex;
                    align-items: center;
                    gap: 2rem;
                }
                .nav-link {
                    color: #1E2A3B;
                    text-decoration: none;
                    font-weight: 500;
                    background: none;
                    border: none;
                    cursor: pointer;
                    font-size: 1rem;
                }
                .nav-link:hover {
                    color: #C94A4A;
                }
                .nav-dropdown {
                    position: relative;
                }
                .nav-dropdown-menu {
                    position: absolute;
                    top: 100%;
                    left: 0;
                    min-width: 240px;
                    padding: 0.5rem 0;
                    background: #fff;
                    border-radius: 12px;
                    box-shadow: 0 12px 32px rgba(30, 42, 59, 0.15);
                }
                .nav-dropdown-link {
                    display: block;
                    padding: 0.6rem 1.25rem;
                    color: #1E2A3B;
                    text-decoration: none;
                }
                .nav-dropdown-link:hover {
                    background: #FAF8F5;
                    color: #C94A4A;
                }
                .nav-phone {
                    color: #1E2A3B;
                    text-decoration: none;
                    font-family: 'IBM Plex Mono', monospace;
                    font-size: 0.9rem;
                }
                .burger-menu {
                    display: none;
                    flex-direction: column;
                    gap: 5px;
                    background: none;
                    border: none;
                    cursor: pointer;
                }
                .burger-menu span {
                    width: 24px;
                    height: 2px;
                    background: #1E2A3B;
                }
                .mobile-services {
                    display: none;
                }
                @media (max-width: 900px) {
                    .burger-menu {
                        display: flex;
                    }
                    .nav-right {
                        display: none;
                    }
                    .nav-right.mobile-menu-open {
                        display: flex;
                        flex-direction: column;
                        align-items: stretch;
                        gap: 1rem;
                        position: absolute;
                        top: 88px;
                        left: 0;
                        right: 0;
                        padding: 1.5rem;
                        background: #fff;
                        box-shadow: 0 12px 24px rgba(30, 42, 59, 0.12);
                    }
                    .nav-dropdown {
                        display: none;
                    }
                    .mobile-services {
                        display: block;
                    }
                    .mobile-services .nav-dropdown-link {
                        padding-left: 1rem;
                    }
                }
                "#}
            </style>
            <div class="nav-content">
                <a href="#home" class="nav-logo" onclick={go_to("home")}>
                    <img src={LOGO} alt={BUSINESS_NAME} />
                    <span class="nav-license">{format!("LIC# {}", LICENSE)}</span>
                </a>

                <button class="burger-menu" onclick={toggle_menu} aria-label="Menu">
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    <a href="#home" class="nav-link" onclick={go_to("home")}>{"Home"}</a>
                    <div class="nav-dropdown" onmouseenter={open_services} onmouseleave={close_services}>
                        <a href="#services" class="nav-link" onclick={go_to("services")}>
                            {"Services ▾"}
                        </a>
                        if *services_open {
                            <div class="nav-dropdown-menu">
                                { service_links("nav-dropdown-link") }
                            </div>
                        }
                    </div>
                    <div class="mobile-services">
                        <button class="nav-link" onclick={toggle_mobile_services}>
                            { if *mobile_services_open { "Services ▴" } else { "Services ▾" } }
                        </button>
                        if *mobile_services_open {
                            { service_links("nav-dropdown-link") }
                        }
                    </div>
                    {
                        NAV_LINKS.iter().map(|(id, label)| html! {
                            <a href={format!("#{}", id)} class="nav-link" onclick={go_to(*id)}>
                                {*label}
                            </a>
                        }).collect::<Html>()
                    }
                    <a href={PHONE_HREF} class="nav-phone">{PHONE_DISPLAY}</a>
                    <button class="btn-primary" onclick={book_now}>
                        {"Book Now"}
                    </button>
                </div>
            </div>
        </nav>
    }
}


#[function_component]
fn App() -> Html {
    let lightbox = use_state(|| None::<AttrValue>);
    let estimate_open = use_state(|| false);
    let toast = use_state(|| None::<Toast>);
    let toast_serial = use_mut_ref(|| 0u32);

    let notify = {
        let toast = toast.clone();
        Callback::from(move |(kind, message): (ToastKind, AttrValue)| {
            let serial = {
                let mut serial = toast_serial.borrow_mut();
                *serial = serial.wrapping_add(1);
                *serial
            };
            toast.set(Some(Toast { serial, kind, message }));
        })
    };

    let dismiss_toast = {
        let toast = toast.clone();
        Callback::from(move |_| toast.set(None))
    };

    let open_estimate = {
        let estimate_open = estimate_open.clone();
        Callback::from(move |_| {
            debug!("estimate dialog opened");
            estimate_open.set(true);
        })
    };
    let close_estimate = {
        let estimate_open = estimate_open.clone();
        Callback::from(move |_| estimate_open.set(false))
    };

    let open_image = {
        let lightbox = lightbox.clone();
        Callback::from(move |src: AttrValue| lightbox.set(Some(src)))
    };
    let close_image = {
        let lightbox = lightbox.clone();
        Callback::from(move |_| lightbox.set(None))
    };

    html! {
        <>
            <Nav on_estimate={open_estimate.clone()} />
            <Landing
                variant={config::page_variant()}
                on_estimate={open_estimate}
                on_image_click={open_image}
                notify={notify.clone()}
            />
            <Lightbox image={(*lightbox).clone()} on_close={close_image} />
            <EstimateDialog open={*estimate_open} on_close={close_estimate} {notify} />
            <Toaster toast={(*toast).clone()} on_dismiss={dismiss_toast} />
        </>
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application ({:?} layout)", config::page_variant());
    yew::Renderer::<App>::new().render();
}
