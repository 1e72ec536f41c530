use yew::prelude::*;

use crate::components::toast::ToastKind;
use crate::config::PageVariant;
use crate::pages::sections::{BeforeAfter, Contact, Coverage, Footer, Hero, OurWork, Process, Services, Testimonials};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    Hero,
    BeforeAfter,
    Services,
    Testimonials,
    OurWork,
    Process,
    Coverage,
    Contact,
}

/// Top-to-bottom order of the page for each layout.
pub fn sections(variant: PageVariant) -> &'static [Section] {
    match variant {
        PageVariant::Classic => &[
            Section::Hero,
            Section::Services,
            Section::Testimonials,
            Section::OurWork,
            Section::Process,
            Section::Coverage,
            Section::Contact,
        ],
        PageVariant::Showcase => &[
            Section::Hero,
            Section::BeforeAfter,
            Section::Services,
            Section::OurWork,
            Section::Process,
            Section::Testimonials,
            Section::Coverage,
            Section::Contact,
        ],
    }
}

#[derive(Properties, PartialEq)]
pub struct LandingProps {
    pub variant: PageVariant,
    pub on_estimate: Callback<()>,
    pub on_image_click: Callback<AttrValue>,
    pub notify: Callback<(ToastKind, AttrValue)>,
}

#[function_component(Landing)]
pub fn landing(props: &LandingProps) -> Html {
    // Scroll to top only on initial mount
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );

    let render = |section: &Section| match section {
        Section::Hero => html! { <Hero on_estimate={props.on_estimate.clone()} /> },
        Section::BeforeAfter => html! { <BeforeAfter /> },
        Section::Services => html! { <Services /> },
        Section::Testimonials => html! { <Testimonials /> },
        Section::OurWork => html! { <OurWork on_image_click={props.on_image_click.clone()} /> },
        Section::Process => html! { <Process on_estimate={props.on_estimate.clone()} /> },
        Section::Coverage => html! { <Coverage /> },
        Section::Contact => html! { <Contact notify={props.notify.clone()} /> },
    };

    html! {
        <div class="landing-page">
            <style>
                {r#"
                .landing-page {
                    min-height: 100vh;
                    background: #FAF8F5;
                    color: #1E2A3B;
                    overflow-x: hidden;
                }
                .accent {
                    color: #C94A4A;
                }
                .muted {
                    color: #6B7280;
                }
                .mono-label {
                    font-family: 'IBM Plex Mono', monospace;
                    font-size: 0.75rem;
                    letter-spacing: 0.12em;
                    text-transform: uppercase;
                }

                .hero {
                    position: relative;
                    min-height: 100vh;
                    display: flex;
                    align-items: center;
                    overflow: hidden;
                }
                .hero-video-bg {
                    position: absolute;
                    inset: 0;
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                }
                .hero-video-overlay {
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(90deg, rgba(30, 42, 59, 0.9) 0%, rgba(30, 42, 59, 0.5) 100%);
                }
                .hero-content {
                    position: relative;
                    z-index: 1;
                    max-width: 80rem;
                    margin: 0 auto;
                    padding: 12rem 3rem 8rem;
                    width: 100%;
                }
                .hero-title {
                    font-family: 'Bebas Neue', sans-serif;
                    font-size: clamp(2.5rem, 7vw, 4.5rem);
                    line-height: 1.1;
                    color: #fff;
                    margin-bottom: 1.5rem;
                    max-width: 42rem;
                }
                .hero-rotator {
                    display: inline-block;
                    height: 1.1em;
                    overflow: hidden;
                    vertical-align: bottom;
                }
                .hero-rotator-track {
                    display: flex;
                    flex-direction: column;
                    animation: revolveUp 6s ease-in-out infinite;
                }
                @keyframes revolveUp {
                    0%, 40% { transform: translateY(0); }
                    50%, 90% { transform: translateY(-1.1em); }
                    100% { transform: translateY(-2.2em); }
                }
                .hero-slogan {
                    font-family: 'IBM Plex Mono', monospace;
                    color: #fff;
                    letter-spacing: 0.1em;
                    margin-bottom: 2rem;
                }
                .hero-subtitle {
                    color: #9CA3AF;
                    font-size: 1.125rem;
                    max-width: 28rem;
                    margin-bottom: 2rem;
                }
                .hero-ctas {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 1rem;
                    margin-bottom: 3rem;
                }
                .hero-stats {
                    display: flex;
                    gap: 3rem;
                    color: #9CA3AF;
                }
                .hero-stat-value {
                    font-family: 'Bebas Neue', sans-serif;
                    font-size: 2.25rem;
                    color: #C94A4A;
                }
                .fade-in-up {
                    opacity: 0;
                    animation: fadeInUp 0.8s ease-out forwards;
                }
                .delay-1 { animation-delay: 0.1s; }
                .delay-2 { animation-delay: 0.2s; }
                .delay-3 { animation-delay: 0.3s; }
                .delay-4 { animation-delay: 0.5s; }
                @keyframes fadeInUp {
                    from { opacity: 0; transform: translateY(20px); }
                    to { opacity: 1; transform: translateY(0); }
                }

                .btn-primary,
                .btn-secondary,
                .btn-glass {
                    display: inline-flex;
                    align-items: center;
                    justify-content: center;
                    gap: 0.5rem;
                    padding: 0.75rem 2rem;
                    border-radius: 8px;
                    font-weight: 600;
                    cursor: pointer;
                    transition: all 0.3s ease;
                }
                .btn-primary {
                    background: #C94A4A;
                    color: #fff;
                    border: none;
                }
                .btn-primary:hover {
                    background: #B33E3E;
                    transform: translateY(-2px);
                }
                .btn-secondary {
                    background: #fff;
                    color: #1E2A3B;
                    border: 1px solid #E5E7EB;
                }
                .btn-secondary:hover {
                    background: #FAF8F5;
                }
                .btn-glass {
                    background: rgba(255, 255, 255, 0.1);
                    color: #fff;
                    border: 1px solid rgba(255, 255, 255, 0.2);
                    backdrop-filter: blur(4px);
                }
                .btn-glass:hover {
                    background: rgba(255, 255, 255, 0.2);
                }
                .btn-primary:active,
                .btn-glass:active {
                    transform: scale(0.95);
                }

                .section {
                    padding: 6rem 1.5rem;
                }
                .section-white { background: #fff; }
                .section-cream { background: #FAF8F5; }
                .section-dark {
                    background: #1E2A3B;
                    color: #fff;
                }
                .section-inner {
                    max-width: 80rem;
                    margin: 0 auto;
                }
                .section-inner.narrow {
                    max-width: 56rem;
                }
                .section-heading {
                    text-align: center;
                    margin-bottom: 4rem;
                }
                .section-heading h2,
                .contact-grid h2 {
                    font-family: 'Bebas Neue', sans-serif;
                    font-size: clamp(1.9rem, 5vw, 3rem);
                    margin: 1rem 0 1.5rem;
                }
                .section-heading p {
                    color: #6B7280;
                    max-width: 42rem;
                    margin: 0 auto;
                }
                .reveal > .section-inner {
                    opacity: 0;
                    transform: translateY(40px);
                    transition: opacity 0.8s ease-out, transform 0.8s ease-out;
                }
                .reveal.revealed > .section-inner {
                    opacity: 1;
                    transform: translateY(0);
                }
                .section-ctas {
                    display: flex;
                    justify-content: center;
                    flex-wrap: wrap;
                    gap: 1rem;
                    margin-top: 3rem;
                }

                .card-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
                    gap: 2rem;
                }
                .service-card,
                .process-card,
                .testimonial-card {
                    border-radius: 16px;
                    overflow: hidden;
                    background: #fff;
                    box-shadow: 0 4px 20px rgba(30, 42, 59, 0.08);
                    transition: transform 0.3s ease;
                }
                .service-card {
                    cursor: pointer;
                }
                .service-card:hover {
                    transform: translateY(-4px);
                }
                .card-image {
                    aspect-ratio: 16 / 10;
                    overflow: hidden;
                }
                .card-image img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                }
                .card-body {
                    padding: 1.5rem;
                }
                .card-body p {
                    color: #6B7280;
                }
                .card-title {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    margin-bottom: 0.75rem;
                }
                .card-icon {
                    font-size: 1.5rem;
                }
                .process-step {
                    font-family: 'Bebas Neue', sans-serif;
                    font-size: 2.5rem;
                    color: #C94A4A;
                }

                .testimonial-card {
                    background: rgba(255, 255, 255, 0.05);
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    padding: 2rem;
                }
                .stars {
                    color: #FBBF24;
                    margin-bottom: 1rem;
                }
                .quote {
                    color: #D1D5DB;
                    line-height: 1.7;
                    margin-bottom: 1.5rem;
                }
                .reviewer {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                }
                .avatar {
                    width: 40px;
                    height: 40px;
                    border-radius: 50%;
                    background: #C94A4A;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-weight: 700;
                }
                .reviewer-source {
                    color: #9CA3AF;
                    font-size: 0.8rem;
                }

                .comparison-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(320px, 1fr));
                    gap: 2rem;
                }
                .comparison-grid figcaption {
                    text-align: center;
                    margin-top: 0.75rem;
                    color: #6B7280;
                }

                .city-chips {
                    display: flex;
                    flex-wrap: wrap;
                    justify-content: center;
                    gap: 0.75rem;
                    margin-bottom: 3rem;
                }
                .city-chip {
                    padding: 0.5rem 1.25rem;
                    border-radius: 999px;
                    background: #fff;
                    border: 1px solid #E5E7EB;
                }
                .coverage-note {
                    padding: 2rem;
                    border-radius: 16px;
                    background: #fff;
                    text-align: center;
                }

                .contact-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(320px, 1fr));
                    gap: 4rem;
                }
                .owners {
                    margin: 2rem 0;
                    padding: 1.25rem;
                    border-left: 3px solid #C94A4A;
                    background: #FAF8F5;
                }
                .contact-line {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                    margin-bottom: 1.25rem;
                    color: inherit;
                    text-decoration: none;
                }
                .contact-icon {
                    width: 48px;
                    height: 48px;
                    border-radius: 12px;
                    background: #FAF8F5;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }
                .socials {
                    display: flex;
                    gap: 1rem;
                    margin: 0.75rem 0;
                }
                .socials a {
                    color: inherit;
                }
                .contact-form {
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                }
                .contact-form-row {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 1rem;
                }
                .estimate-field label {
                    display: block;
                    font-size: 0.85rem;
                    color: #1E2A3B;
                    margin-bottom: 0.35rem;
                }
                .estimate-field input,
                .estimate-field select,
                .estimate-field textarea {
                    width: 100%;
                    padding: 0.7rem 0.9rem;
                    border: 1px solid #E5E7EB;
                    border-radius: 8px;
                    font-size: 0.95rem;
                    background: #FAF8F5;
                }
                .estimate-field textarea {
                    min-height: 100px;
                    resize: vertical;
                }
                .estimate-wide {
                    width: 100%;
                }
                .form-error {
                    color: #B42318;
                    font-size: 0.85rem;
                    margin-bottom: 1rem;
                }
                .map-frame {
                    height: 280px;
                    margin-top: 2rem;
                    border-radius: 16px;
                    overflow: hidden;
                }

                .footer {
                    background: #1E2A3B;
                    color: #fff;
                    padding: 4rem 1.5rem 2rem;
                }
                .footer-grid {
                    max-width: 80rem;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
                    gap: 3rem;
                }
                .footer ul {
                    list-style: none;
                    padding: 0;
                }
                .footer li {
                    margin-bottom: 0.75rem;
                }
                .footer a {
                    color: inherit;
                }
                .footer-link {
                    background: none;
                    border: none;
                    color: #9CA3AF;
                    cursor: pointer;
                    padding: 0;
                }
                .footer-link:hover {
                    color: #C94A4A;
                }
                .brand {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    font-family: 'Bebas Neue', sans-serif;
                    font-size: 1.25rem;
                }
                .brand img {
                    height: 2.5rem;
                }
                .hours-row {
                    display: flex;
                    justify-content: space-between;
                }
                .after-hours {
                    margin-top: 1.5rem;
                    padding: 1rem;
                    border-radius: 12px;
                    background: rgba(255, 255, 255, 0.05);
                }
                .footer-bottom {
                    max-width: 80rem;
                    margin: 3rem auto 0;
                    padding-top: 2rem;
                    border-top: 1px solid rgba(255, 255, 255, 0.1);
                    color: #9CA3AF;
                    font-size: 0.85rem;
                }

                @media (max-width: 768px) {
                    .hero-content {
                        padding: 8rem 1.5rem 6rem;
                    }
                    .hero-stats {
                        gap: 2rem;
                    }
                    .contact-form-row {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
            { for sections(props.variant).iter().map(render) }
            <Footer />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_layouts_open_with_hero_and_close_with_contact() {
        for variant in [PageVariant::Classic, PageVariant::Showcase] {
            let order = sections(variant);
            assert_eq!(order.first(), Some(&Section::Hero));
            assert_eq!(order.last(), Some(&Section::Contact));
        }
    }

    #[test]
    fn comparison_only_in_showcase() {
        assert!(!sections(PageVariant::Classic).contains(&Section::BeforeAfter));
        assert_eq!(sections(PageVariant::Showcase)[1], Section::BeforeAfter);
    }

    #[test]
    fn showcase_moves_reviews_below_process() {
        let order = sections(PageVariant::Showcase);
        let position = |s| order.iter().position(|x| *x == s).unwrap();
        assert!(position(Section::Process) < position(Section::Testimonials));

        let order = sections(PageVariant::Classic);
        let position = |s| order.iter().position(|x| *x == s).unwrap();
        assert!(position(Section::Testimonials) < position(Section::OurWork));
    }
}
