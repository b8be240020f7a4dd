//! Shipped catalog contents.

use super::{Category, Product, Spec};

const CATEGORIES: &[(&str, &str, &str)] = &[
    (
        "structural-testing",
        "Structural Testing Systems",
        "Servo-hydraulic load frames and actuators for full-scale structural load and response testing.",
    ),
    (
        "ndt-equipment",
        "Non-Destructive Testing",
        "Ultrasonic, rebound and ground-penetrating instruments for in-situ inspection without damage.",
    ),
    (
        "geotechnical",
        "Geotechnical & Foundation",
        "Pile, soil and foundation testing equipment for the lab and the field.",
    ),
];

struct ProductRow {
    slug: &'static str,
    category: &'static str,
    name: &'static str,
    summary: &'static str,
    description: &'static str,
    specs: &'static [(&'static str, &'static str)],
}

const PRODUCTS: &[ProductRow] = &[
    ProductRow {
        slug: "lf-2000-load-frame",
        category: "structural-testing",
        name: "LF-2000 Servo-Hydraulic Load Frame",
        summary: "Two-column frame for static and cyclic testing of beams, columns and connections.",
        description: "A stiff two-column frame with an adjustable crosshead and closed-loop servo \
                      control, built for static, cyclic and fatigue tests on full-size members.",
        specs: &[
            ("Capacity", "2,000 kN"),
            ("Stroke", "250 mm"),
            ("Daylight", "0.5 – 3.0 m"),
            ("Control", "Force, displacement or strain"),
        ],
    },
    ProductRow {
        slug: "ha-500-actuator",
        category: "structural-testing",
        name: "HA-500 Hydraulic Actuator",
        summary: "Double-acting fatigue-rated actuator for reaction walls and strong floors.",
        description: "Fatigue-rated double-acting actuator with swivel ends and an integrated load \
                      cell, suited to reaction-wall and strong-floor test setups.",
        specs: &[
            ("Dynamic force", "500 kN"),
            ("Stroke", "±150 mm"),
            ("Frequency", "up to 20 Hz"),
        ],
    },
    ProductRow {
        slug: "daq-64-acquisition",
        category: "structural-testing",
        name: "DAQ-64 Data Acquisition System",
        summary: "64-channel strain, displacement and load acquisition with synchronised sampling.",
        description: "Rack-mount acquisition unit with bridge completion for strain gauges and \
                      synchronised sampling across all channels.",
        specs: &[
            ("Channels", "64"),
            ("Sample rate", "10 kS/s per channel"),
            ("Resolution", "24-bit"),
        ],
    },
    ProductRow {
        slug: "ut-pulse-echo",
        category: "ndt-equipment",
        name: "UT-Pulse Ultrasonic Tester",
        summary: "Pulse-echo and through-transmission testing of concrete and steel.",
        description: "Portable ultrasonic pulse velocity tester for locating voids, cracks and \
                      honeycombing in concrete, and for thickness gauging in steel.",
        specs: &[
            ("Modes", "Pulse-echo, through-transmission"),
            ("Frequency", "24 – 500 kHz"),
            ("Battery", "10 h"),
        ],
    },
    ProductRow {
        slug: "rh-10-rebound-hammer",
        category: "ndt-equipment",
        name: "RH-10 Digital Rebound Hammer",
        summary: "Surface hardness and compressive strength estimation for concrete.",
        description: "Digital rebound hammer with on-device strength conversion curves and \
                      statistics per test area.",
        specs: &[
            ("Impact energy", "2.207 Nm"),
            ("Range", "10 – 70 N/mm²"),
        ],
    },
    ProductRow {
        slug: "gpr-1600",
        category: "ndt-equipment",
        name: "GPR-1600 Concrete Scanner",
        summary: "Ground-penetrating radar for rebar, tendon and conduit location.",
        description: "High-frequency radar scanner that maps reinforcement layout and cover depth \
                      before coring or cutting.",
        specs: &[
            ("Antenna", "1.6 GHz"),
            ("Depth", "up to 600 mm"),
        ],
    },
    ProductRow {
        slug: "pdt-pile-integrity",
        category: "geotechnical",
        name: "PDT Pile Integrity Tester",
        summary: "Low-strain integrity testing of driven and bored piles.",
        description: "Hand-held low-strain tester that records and interprets pile head response \
                      to detect necking, bulging and breaks.",
        specs: &[
            ("Method", "Low-strain pulse echo"),
            ("Sampling", "up to 100 kHz"),
        ],
    },
    ProductRow {
        slug: "spt-auto-hammer",
        category: "geotechnical",
        name: "SPT Automatic Trip Hammer",
        summary: "Standard penetration testing with consistent drop height and energy.",
        description: "Automatic trip hammer delivering repeatable 63.5 kg drops for SPT, with a \
                      blow counter and energy measurement option.",
        specs: &[
            ("Hammer mass", "63.5 kg"),
            ("Drop height", "760 mm"),
        ],
    },
];

/// The shipped categories.
pub(super) fn categories() -> Vec<Category> {
    CATEGORIES
        .iter()
        .map(|(slug, name, summary)| Category {
            slug: (*slug).to_string(),
            name: (*name).to_string(),
            summary: (*summary).to_string(),
        })
        .collect()
}

/// The shipped products.
pub(super) fn products() -> Vec<Product> {
    PRODUCTS
        .iter()
        .map(|row| Product {
            slug: row.slug.to_string(),
            category: row.category.to_string(),
            name: row.name.to_string(),
            summary: row.summary.to_string(),
            description: row.description.to_string(),
            specs: row
                .specs
                .iter()
                .map(|(label, value)| Spec {
                    label: (*label).to_string(),
                    value: (*value).to_string(),
                })
                .collect(),
        })
        .collect()
}
