//! Static copy and media for the site. Everything here is fixed at build time.

pub const BUSINESS_NAME: &str = "S&P Line Striping & Asphalt Sealcoating";
pub const LICENSE: &str = "1142328";
pub const OWNERS: &str = "Paarth Patel & Shivam Patel";
pub const PHONE_DISPLAY: &str = "(559) 704-3141";
pub const PHONE_HREF: &str = "tel:+15597043141";
pub const EMAIL: &str = "spstripingfresno@gmail.com";
pub const TIKTOK_URL: &str = "https://www.tiktok.com/@spstriping";
pub const YOUTUBE_URL: &str = "https://www.youtube.com/@spstriping";
pub const GOOGLE_MAPS_URL: &str = "https://maps.app.goo.gl/pYWJaN4FPzTqFEpj9";
pub const MAP_EMBED_URL: &str = "https://www.google.com/maps/embed?pb=!1m14!1m8!1m3!1d6388.5498442522085!2d-119.700816!3d36.8119315!3m2!1i1024!2i768!4f13.1!3m3!1m2!1s0x80945d075507a6a3%3A0xc510b68fc9bbf152!2sS%26P%20-%20Line%20Striping%20and%20Sealcoating!5e0!3m2!1sen!2sus";
pub const HERO_VIDEO: &str = "/spstriping hero video 2.mp4";
pub const LOGO: &str = "/logo.png";

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Service {
    /// Anchor id shared by the service card and its gallery row.
    pub id: &'static str,
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
}

pub const SERVICES: &[Service] = &[
    Service {
        id: "service-line-striping",
        icon: "🅿️",
        title: "Line Striping",
        description: "Fresh, crisp lines that define your space and direct traffic flow with precision.",
        image: "/sp-61.jpeg",
    },
    Service {
        id: "service-ada-fire-compliance",
        icon: "🔥",
        title: "ADA + Fire Compliance",
        description: "Full compliance with ADA and fire lane standards for accessible, safe parking.",
        image: "/sp-62.jpeg",
    },
    Service {
        id: "service-signage",
        icon: "🪧",
        title: "Signage",
        description: "Professional pavement markings, directional arrows, and custom stencils.",
        image: "/sp-63.jpeg",
    },
    Service {
        id: "service-recreational-courts",
        icon: "🏆",
        title: "Recreational Courts",
        description: "Basketball, tennis, pickleball—precision court striping for sports facilities.",
        image: "/sp-64.jpeg",
    },
    Service {
        id: "service-seal-coating",
        icon: "💧",
        title: "Seal Coating",
        description: "Protective coating that extends pavement life and restores that like-new black finish.",
        image: "/sp-65.jpeg",
    },
    Service {
        id: "service-crack-filling",
        icon: "🔧",
        title: "Crack Filling",
        description: "Stop cracks before they spread. Hot-pour crack sealing for lasting repairs.",
        image: "/sp-66.jpeg",
    },
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GalleryCategory {
    pub id: &'static str,
    pub title: &'static str,
    pub images: &'static [&'static str],
}

pub const GALLERY: &[GalleryCategory] = &[
    GalleryCategory {
        id: "service-line-striping",
        title: "Line Striping",
        images: &[
            "/sp-1.jpeg", "/sp-2.jpg", "/sp-3.jpg", "/sp-4.jpg", "/sp-5.jpg",
            "/sp-6.jpg", "/sp-7.JPG", "/sp-8.jpg", "/sp-9.jpg", "/sp-10.jpg",
        ],
    },
    GalleryCategory {
        id: "service-ada-fire-compliance",
        title: "ADA + Fire Signage",
        images: &[
            "/sp-11.jpg", "/sp-12.jpg", "/sp-13.jpg", "/sp-14.jpg", "/sp-15.jpeg",
            "/sp-16.jpeg", "/sp-17.jpeg", "/sp-18.jpeg", "/sp-19.jpeg", "/sp-20.jpeg",
        ],
    },
    GalleryCategory {
        id: "service-signage",
        title: "Signage & Markings",
        images: &[
            "/sp-21.jpeg", "/sp-22.jpeg", "/sp-23.jpeg", "/sp-24.jpeg", "/sp-25.jpeg",
            "/sp-26.jpeg", "/sp-27.jpeg", "/sp-28.jpeg", "/sp-29.jpeg", "/sp-30.jpeg",
        ],
    },
    GalleryCategory {
        id: "service-recreational-courts",
        title: "Recreational Courts",
        images: &[
            "/sp-31.jpeg", "/sp-32.jpeg", "/sp-33.jpeg", "/sp-34.jpeg", "/sp-35.jpeg",
            "/sp-36.jpeg", "/sp-37.jpeg", "/sp-38.jpeg", "/sp-39.jpeg", "/sp-40.jpeg",
        ],
    },
    GalleryCategory {
        id: "service-seal-coating",
        title: "Seal Coating",
        images: &[
            "/sp-41.jpeg", "/sp-42.JPG", "/sp-43.JPG", "/sp-44.jpeg", "/sp-45.jpeg",
            "/sp-46.jpeg", "/sp-47.jpeg", "/sp-48.jpeg", "/sp-49.jpeg", "/sp-50.jpeg",
        ],
    },
    GalleryCategory {
        id: "service-crack-filling",
        title: "Crack Filling",
        images: &[
            "/sp-51.jpeg", "/sp-52.jpeg", "/sp-53.jpeg", "/sp-54.jpeg", "/sp-55.jpeg",
            "/sp-56.jpeg", "/sp-57.jpeg", "/sp-58.jpeg", "/sp-59.jpeg", "/sp-60.jpeg",
        ],
    },
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Testimonial {
    pub quote: &'static str,
    pub name: &'static str,
    pub source: &'static str,
    pub rating: u8,
}

impl Testimonial {
    /// Letter shown in the avatar bubble.
    pub fn initial(&self) -> char {
        self.name.chars().next().unwrap_or('?')
    }

    pub fn stars(&self) -> String {
        "★".repeat(self.rating as usize)
    }
}

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        quote: "S&P - Line Striping and Sealcoating did an excellent job for our gym. Their team was both professional and courteous. They paid great attention to detail, ensuring that all lines were accurately drawn—from beneath the basketball hoop to the free throw lines, and the volleyball court was perfectly centered. Shivam and his brother truly did an outstanding job! I highly recommend them for any indoor or outdoor court striping needs!",
        name: "Mitesh Gajjar",
        source: "Google Review",
        rating: 5,
    },
    Testimonial {
        quote: "I highly recommend S&P line striping. They are very responsive and easy to work with. They didn't sell us anything we didn't need, were honest and straight to the point. They resealed our entire parking lot, repaired all lines, arrows, accessible parking, curbs and even custom wording. Very happy with the results!",
        name: "Eric Stoner",
        source: "Google Review",
        rating: 5,
    },
    Testimonial {
        quote: "First and foremost I would like to state how professional this company is when it came to communication and planning. Pricing for striping was extremely reasonable compared to other companies who quoted almost double. The team at S&P Line Striping works fast and does an amazing job. If you're looking for striping for your business this is the company to reach out to!",
        name: "Max Lor",
        source: "Google Review",
        rating: 5,
    },
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProcessStep {
    pub step: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
}

pub const PROCESS: &[ProcessStep] = &[
    ProcessStep {
        step: "01",
        title: "Measure & Layout",
        description: "We survey, chalk, and confirm compliance before paint hits pavement.",
        image: "/sp-67.jpeg",
    },
    ProcessStep {
        step: "02",
        title: "Prep & Paint",
        description: "Clean surface, crisp lines, high-visibility paint or thermoplastic.",
        image: "/sp-68.jpeg",
    },
    ProcessStep {
        step: "03",
        title: "Walkthrough",
        description: "Inspect, touch up, and sign off—no invoice until you're satisfied.",
        image: "/sp-69.jpeg",
    },
];

pub const CITIES: &[&str] = &["Fresno", "Clovis", "Madera", "Visalia", "Hanford", "Selma", "Sanger"];

pub const HOURS: &[(&str, &str)] = &[
    ("Mon - Fri:", "7AM - 6PM"),
    ("Saturday:", "8AM - 4PM"),
    ("Sunday:", "Closed"),
];

pub const HERO_STATS: &[(&str, &str)] = &[
    ("12+", "Years Experience"),
    ("2.4K+", "Projects Complete"),
    ("5.0", "Rating Score"),
];

/// Headline words cycled in the hero; the first repeats so the loop is seamless.
pub const HERO_WORDS: &[&str] = &["STRIPING", "SEALCOATING", "STRIPING"];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Comparison {
    pub title: &'static str,
    pub before: &'static str,
    pub after: &'static str,
}

pub const COMPARISONS: &[Comparison] = &[
    Comparison {
        title: "Sealcoat + Restripe",
        before: "/before-sealcoat.jpeg",
        after: "/after-sealcoat.jpeg",
    },
    Comparison {
        title: "Crack Fill",
        before: "/before-crackfill.jpeg",
        after: "/after-crackfill.jpeg",
    },
];

/// `(value, label)` pairs for the selects in the estimate and contact forms.
pub const ESTIMATE_SERVICES: &[(&str, &str)] = &[
    ("striping", "Line Striping"),
    ("sealcoating", "Sealcoating"),
    ("ada", "ADA Compliance"),
    ("restripe", "Restripe / Refresh"),
    ("full", "Full Package"),
];

pub const LOT_SIZES: &[(&str, &str)] = &[
    ("small", "Small (Under 20 spaces)"),
    ("medium", "Medium (20-50 spaces)"),
    ("large", "Large (50-100 spaces)"),
    ("xlarge", "Extra Large (100+ spaces)"),
];

pub const TIMELINES: &[(&str, &str)] = &[
    ("asap", "ASAP"),
    ("2weeks", "Within 2 weeks"),
    ("month", "Within a month"),
    ("flexible", "Flexible"),
];

pub const CONTACT_SERVICES: &[(&str, &str)] = &[
    ("striping", "Line Striping"),
    ("sealcoating", "Sealcoating"),
    ("ada", "ADA Compliance"),
    ("restripe", "Restripe"),
    ("other", "Other"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_gallery_row_matches_a_service_anchor() {
        for category in GALLERY {
            assert!(SERVICES.iter().any(|s| s.id == category.id), "{}", category.id);
        }
    }

    #[test]
    fn testimonial_initial_is_first_letter() {
        assert_eq!(TESTIMONIALS[0].initial(), 'M');
        assert_eq!(TESTIMONIALS[1].initial(), 'E');
    }

    #[test]
    fn stars_follow_rating() {
        for t in TESTIMONIALS {
            assert_eq!(t.stars().chars().count(), t.rating as usize);
        }
        let three = Testimonial { quote: "", name: "Ana", source: "", rating: 3 };
        assert_eq!(three.stars(), "★★★");
    }
}
