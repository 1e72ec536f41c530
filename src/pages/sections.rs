use chrono::{Datelike, Local};
use yew::prelude::*;

use crate::components::comparison_slider::ComparisonSlider;
use crate::components::gallery_carousel::GalleryCarousel;
use crate::components::reveal::Reveal;
use crate::components::toast::ToastKind;
use crate::content::{
    BUSINESS_NAME, CITIES, COMPARISONS, EMAIL, GALLERY, GOOGLE_MAPS_URL, HERO_STATS, HERO_VIDEO, HERO_WORDS, HOURS,
    LICENSE, LOGO, MAP_EMBED_URL, OWNERS, PHONE_DISPLAY, PHONE_HREF, PROCESS, SERVICES, TESTIMONIALS, TIKTOK_URL,
    YOUTUBE_URL,
};
use crate::estimate::contact_form::ContactForm;
use crate::scroll::scroll_to_id;

fn go_to(id: &'static str) -> Callback<MouseEvent> {
    Callback::from(move |_: MouseEvent| scroll_to_id(id))
}

fn open_estimate(on_estimate: &Callback<()>) -> Callback<MouseEvent> {
    let on_estimate = on_estimate.clone();
    Callback::from(move |_: MouseEvent| on_estimate.emit(()))
}

#[derive(Properties, PartialEq)]
pub struct EstimateTriggerProps {
    pub on_estimate: Callback<()>,
}

#[function_component(Hero)]
pub fn hero(props: &EstimateTriggerProps) -> Html {
    html! {
        <section id="home" class="hero picket-lines">
            <video src={HERO_VIDEO} autoplay=true loop=true muted=true playsinline=true class="hero-video-bg" />
            <div class="hero-video-overlay" />
            <div class="hero-content">
                <h1 class="hero-title fade-in-up">
                    {"FRESNO'S"}
                    <br />
                    <span class="hero-rotator">
                        <span class="hero-rotator-track">
                            { for HERO_WORDS.iter().map(|word| html! { <span class="accent">{*word}</span> }) }
                        </span>
                    </span>
                    <br />
                    {"EXPERTS"}
                </h1>
                <div class="hero-slogan fade-in-up delay-1">{"QUALITY SERVICE FOR YOUR QUALITY BUSINESS"}</div>
                <p class="hero-subtitle fade-in-up delay-2">
                    {"Where precision meets durability. Professional line striping, sealcoating, and ADA-compliant markings for the Central Valley."}
                </p>
                <div class="hero-ctas fade-in-up delay-3">
                    <button class="btn-primary" onclick={open_estimate(&props.on_estimate)}>{"📅 Book Appointment"}</button>
                    <button class="btn-glass" onclick={go_to("our-work")}>{"See Our Work"}</button>
                </div>
                <div class="hero-stats fade-in-up delay-4">
                    {
                        HERO_STATS.iter().map(|(value, label)| html! {
                            <div>
                                <div class="hero-stat-value">{*value}</div>
                                <div class="mono-label">{*label}</div>
                            </div>
                        }).collect::<Html>()
                    }
                </div>
            </div>
        </section>
    }
}

#[function_component(Services)]
pub fn services() -> Html {
    html! {
        <Reveal id="services" class="section section-white">
            <div class="section-inner">
                <div class="section-heading">
                    <span class="mono-label accent">{"Our Services"}</span>
                    <h2>{"Striping. Sealcoating."}<br /><span class="accent">{"Compliance."}</span></h2>
                    <p>{"We layout, paint, and protect asphalt surfaces—so your lot looks sharp and stays compliant."}</p>
                </div>
                <div class="card-grid">
                    {
                        SERVICES.iter().map(|service| html! {
                            <div class="service-card" onclick={go_to(service.id)}>
                                <div class="card-image">
                                    <img src={service.image} alt={service.title} loading="lazy" />
                                </div>
                                <div class="card-body">
                                    <div class="card-title">
                                        <span class="card-icon">{service.icon}</span>
                                        <h3>{service.title}</h3>
                                    </div>
                                    <p>{service.description}</p>
                                </div>
                            </div>
                        }).collect::<Html>()
                    }
                </div>
                <div class="section-ctas">
                    <button class="btn-primary" onclick={go_to("contact")}>{"Get a Quote"}</button>
                    <button class="btn-secondary" onclick={go_to("our-work")}>{"See Our Work"}</button>
                </div>
            </div>
        </Reveal>
    }
}

#[function_component(Testimonials)]
pub fn testimonials() -> Html {
    html! {
        <Reveal id="reviews" class="section section-dark">
            <div class="section-inner">
                <div class="section-heading">
                    <span class="mono-label accent">{"★ Testimonials"}</span>
                    <h2>{"They Notice The "}<span class="accent">{"Details."}</span></h2>
                </div>
                <div class="card-grid">
                    {
                        TESTIMONIALS.iter().map(|t| html! {
                            <div class="testimonial-card">
                                <div class="stars">{ t.stars() }</div>
                                <p class="quote">{format!("\"{}\"", t.quote)}</p>
                                <div class="reviewer">
                                    <div class="avatar">{t.initial().to_string()}</div>
                                    <div>
                                        <div class="reviewer-name">{t.name}</div>
                                        <div class="reviewer-source">{t.source}</div>
                                    </div>
                                </div>
                            </div>
                        }).collect::<Html>()
                    }
                </div>
            </div>
        </Reveal>
    }
}

#[derive(Properties, PartialEq)]
pub struct OurWorkProps {
    pub on_image_click: Callback<AttrValue>,
}

#[function_component(OurWork)]
pub fn our_work(props: &OurWorkProps) -> Html {
    html! {
        <Reveal id="our-work" class="section section-cream">
            <div class="section-inner">
                <div class="section-heading">
                    <h2>{"Our "}<span class="accent">{"Work"}</span></h2>
                    <p>{"Browse our recent projects across different service categories."}</p>
                </div>
                {
                    GALLERY.iter().map(|category| html! {
                        <div id={category.id} class="gallery-row">
                            <GalleryCarousel
                                title={category.title}
                                images={category.images.iter().copied().map(AttrValue::Static).collect::<Vec<_>>()}
                                on_image_click={props.on_image_click.clone()}
                            />
                        </div>
                    }).collect::<Html>()
                }
            </div>
        </Reveal>
    }
}

#[function_component(BeforeAfter)]
pub fn before_after() -> Html {
    html! {
        <Reveal id="before-after" class="section section-white">
            <div class="section-inner">
                <div class="section-heading">
                    <span class="mono-label accent">{"Before & After"}</span>
                    <h2>{"See The "}<span class="accent">{"Difference."}</span></h2>
                    <p>{"Drag the handle to compare a lot before and after we got to work."}</p>
                </div>
                <div class="comparison-grid">
                    {
                        COMPARISONS.iter().map(|c| html! {
                            <figure>
                                <ComparisonSlider before={c.before} after={c.after} />
                                <figcaption>{c.title}</figcaption>
                            </figure>
                        }).collect::<Html>()
                    }
                </div>
            </div>
        </Reveal>
    }
}

#[function_component(Process)]
pub fn process(props: &EstimateTriggerProps) -> Html {
    html! {
        <Reveal id="process" class="section section-white">
            <div class="section-inner">
                <div class="section-heading">
                    <span class="mono-label accent">{"Our Process"}</span>
                    <h2>{"From Quote To"}<br /><span class="accent">{"Fresh Paint."}</span></h2>
                    <p>{"Our proven three-step process ensures precision, compliance, and complete satisfaction."}</p>
                </div>
                <div class="card-grid">
                    {
                        PROCESS.iter().map(|item| html! {
                            <div class="process-card">
                                <div class="card-image">
                                    <img src={item.image} alt={item.title} loading="lazy" />
                                </div>
                                <div class="card-body">
                                    <div class="process-step">{item.step}</div>
                                    <h3>{item.title}</h3>
                                    <p>{item.description}</p>
                                </div>
                            </div>
                        }).collect::<Html>()
                    }
                </div>
                <div class="section-ctas">
                    <button class="btn-primary" onclick={open_estimate(&props.on_estimate)}>{"Start Your Quote →"}</button>
                </div>
            </div>
        </Reveal>
    }
}

#[function_component(Coverage)]
pub fn coverage() -> Html {
    html! {
        <Reveal id="coverage" class="section section-cream">
            <div class="section-inner narrow">
                <div class="section-heading">
                    <span class="mono-label accent">{"📍 Service Area"}</span>
                    <h2>{"Fresno &"}<br /><span class="accent">{"Central Valley."}</span></h2>
                    <p>{"From downtown lots to warehouse campuses—if it's asphalt, we stripe it."}</p>
                </div>
                <div class="city-chips">
                    { for CITIES.iter().map(|city| html! { <span class="city-chip">{*city}</span> }) }
                </div>
                <div class="coverage-note">
                    <div class="mono-label accent">{"📍 Service Area"}</div>
                    <p>
                        {"We serve Fresno County and surrounding areas within a 75-mile radius. Not sure if we cover your location? Give us a call—we're always expanding our reach."}
                    </p>
                </div>
            </div>
        </Reveal>
    }
}

fn social_links() -> Html {
    html! {
        <div class="socials">
            <a href={TIKTOK_URL} target="_blank" rel="noopener noreferrer" aria-label="TikTok">{"TikTok"}</a>
            <a href={YOUTUBE_URL} target="_blank" rel="noopener noreferrer" aria-label="YouTube">{"YouTube"}</a>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ContactProps {
    pub notify: Callback<(ToastKind, AttrValue)>,
}

#[function_component(Contact)]
pub fn contact(props: &ContactProps) -> Html {
    html! {
        <Reveal id="contact" class="section section-white">
            <div class="section-inner contact-grid">
                <div>
                    <span class="mono-label accent">{"Get in Touch"}</span>
                    <h2>{"Request A Free"}<br /><span class="accent">{"Estimate."}</span></h2>
                    <p class="muted">
                        {"Tell us what you need—striping, sealcoating, ADA updates, or a full restripe. We'll reply within one business day."}
                    </p>
                    <div class="owners">
                        <span class="mono-label">{"Owners"}</span>
                        <h3>{OWNERS}</h3>
                        <span class="muted">{format!("Contractors License #{}", LICENSE)}</span>
                    </div>
                    <a class="contact-line" href={PHONE_HREF}>
                        <span class="contact-icon">{"📞"}</span>
                        <div><div class="mono-label">{"Call or Text"}</div><div>{PHONE_DISPLAY}</div></div>
                    </a>
                    <a class="contact-line" href={format!("mailto:{}", EMAIL)}>
                        <span class="contact-icon">{"✉️"}</span>
                        <div><div class="mono-label">{"Email"}</div><div>{EMAIL}</div></div>
                    </a>
                    <div class="contact-line">
                        <span class="contact-icon">{"📍"}</span>
                        <div><div class="mono-label">{"Service Area"}</div><div>{"Fresno, CA & Central Valley"}</div></div>
                    </div>
                    <p class="muted">{"Follow us on Social Media"}</p>
                    { social_links() }
                </div>
                <div>
                    <ContactForm notify={props.notify.clone()} />
                    <div class="map-frame">
                        <iframe
                            src={MAP_EMBED_URL}
                            width="100%"
                            height="100%"
                            style="border: 0;"
                            loading="lazy"
                            referrerpolicy="no-referrer-when-downgrade"
                            title="S&P - Line Striping and Sealcoating Location"
                        />
                    </div>
                </div>
            </div>
        </Reveal>
    }
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = Local::now().year();
    let links: [(&str, &'static str); 6] = [
        ("Home", "home"),
        ("Services", "services"),
        ("Our Work", "our-work"),
        ("Our Process", "process"),
        ("Reviews", "reviews"),
        ("Contact", "contact"),
    ];

    html! {
        <footer class="footer">
            <div class="footer-grid">
                <div>
                    <div class="brand">
                        <img src={LOGO} alt="S&P Striping Logo" />
                        <span>{"S&P "}<span class="accent">{"STRIPING"}</span></span>
                    </div>
                    <p class="muted">
                        {"Professional line striping and sealcoating services for the Central Valley since 2012. Quality work, honest pricing."}
                    </p>
                    { social_links() }
                    <a class="muted" href={GOOGLE_MAPS_URL} target="_blank" rel="noopener noreferrer">{"Find us on Google"}</a>
                </div>
                <div>
                    <h4>{"Quick Links"}</h4>
                    <ul>
                        {
                            links.iter().map(|(label, id)| html! {
                                <li><button class="footer-link" onclick={go_to(*id)}>{*label}</button></li>
                            }).collect::<Html>()
                        }
                    </ul>
                </div>
                <div>
                    <h4>{"Contact"}</h4>
                    <ul>
                        <li>{"📍 Fresno, CA"}<br />{"Central Valley Service Area"}</li>
                        <li>{"📞 "}<a href={PHONE_HREF}>{PHONE_DISPLAY}</a></li>
                        <li>{"✉️ "}<a href={format!("mailto:{}", EMAIL)}>{EMAIL}</a></li>
                        <li class="muted">{format!("License #{}", LICENSE)}</li>
                    </ul>
                </div>
                <div>
                    <h4>{"Hours"}</h4>
                    <ul>
                        {
                            HOURS.iter().map(|(day, time)| html! {
                                <li class="hours-row"><span>{*day}</span><span>{*time}</span></li>
                            }).collect::<Html>()
                        }
                    </ul>
                    <div class="after-hours">
                        <p class="accent">{"After-Hours Available"}</p>
                        <p class="muted">{"Weekend & overnight work available for businesses that need minimal disruption."}</p>
                    </div>
                </div>
            </div>
            <div class="footer-bottom">
                <span>{format!("© {} {}. All rights reserved.", year, BUSINESS_NAME)}</span>
            </div>
        </footer>
    }
}
