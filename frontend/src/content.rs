//! Copy shown on the page.

use crate::stats::{Stat, StatDisplay};

pub const COMPANY_NAME: &str = "Fire Alarm System & Electrical Testing LTD";

pub struct NavLink {
    pub href: &'static str,
    pub label: &'static str,
}

pub const NAV_LINKS: [NavLink; 4] = [
    NavLink { href: "#home", label: "Home" },
    NavLink { href: "#about", label: "About Us" },
    NavLink { href: "#services", label: "Services" },
    NavLink { href: "#contact", label: "Contact" },
];

pub static STATS: [Stat; 4] = [
    Stat {
        target: 25,
        label: "Years Experience",
        display: StatDisplay::Plain,
    },
    Stat {
        target: 1000,
        label: "Systems Installed",
        display: StatDisplay::SuffixFrom { threshold: 500, suffix: "+" },
    },
    Stat {
        target: 500,
        label: "Happy Clients",
        display: StatDisplay::SuffixFrom { threshold: 500, suffix: "+" },
    },
    Stat {
        target: 24,
        label: "Support Availability",
        display: StatDisplay::PerDenominator(7),
    },
];

pub struct Card {
    pub title: &'static str,
    pub description: &'static str,
    /// Font Awesome class of the icon.
    pub icon: &'static str,
}

pub const FEATURES: [Card; 4] = [
    Card {
        title: "Certified Experts",
        description: "Our team is fully accredited, bringing years of technical knowledge and hands-on expertise.",
        icon: "fa-solid fa-shield-halved",
    },
    Card {
        title: "Cutting-Edge Solutions",
        description: "We use the latest technology to ensure safety, reliability, and efficiency in every project.",
        icon: "fa-solid fa-bolt",
    },
    Card {
        title: "Trusted by Clients",
        description: "Hundreds of businesses and homeowners trust us for reliable fire alarm and electrical services.",
        icon: "fa-solid fa-users",
    },
    Card {
        title: "Award-Winning Service",
        description: "Recognised for excellence in safety, customer satisfaction, and innovative solutions.",
        icon: "fa-solid fa-award",
    },
];

pub const SERVICES: [Card; 5] = [
    Card {
        title: "Fire Alarm Installation",
        description: "Design and installation of fire detection and alarm systems for homes and commercial premises.",
        icon: "fa-solid fa-bell",
    },
    Card {
        title: "Fire Alarm Maintenance",
        description: "Scheduled servicing and testing to keep your system compliant and ready.",
        icon: "fa-solid fa-screwdriver-wrench",
    },
    Card {
        title: "Electrical Testing & EICR",
        description: "Inspection and condition reports carried out by certified engineers.",
        icon: "fa-solid fa-plug-circle-check",
    },
    Card {
        title: "Emergency Lighting",
        description: "Installation and testing of emergency lighting so every exit stays visible.",
        icon: "fa-solid fa-lightbulb",
    },
    Card {
        title: "PAT Testing",
        description: "Portable appliance testing for offices, landlords and workplaces.",
        icon: "fa-solid fa-clipboard-check",
    },
];

pub const SERVICE_AREA: &str = "London and surrounding areas";
