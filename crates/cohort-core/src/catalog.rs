//! The fixed catalog of six learning personas.
//!
//! The catalog is static data. It does not depend on any generated population,
//! and its order is the tie-break order for every persona reduction.

use std::sync::LazyLock;

use crate::entities::LearningPersona;
use crate::enums::PersonaLabel;

struct Descriptor {
    label: PersonaLabel,
    description: &'static str,
    characteristics: &'static [&'static str],
    color: &'static str,
}

const DESCRIPTORS: [Descriptor; 6] = [
    Descriptor {
        label: PersonaLabel::HighAchiever,
        description: "Students with excellent cognitive skills and high engagement",
        characteristics: &[
            "High comprehension",
            "Strong attention span",
            "Excellent retention",
            "High engagement time",
        ],
        color: "#16a34a",
    },
    Descriptor {
        label: PersonaLabel::EfficientLearner,
        description: "High performers who learn effectively in moderate time",
        characteristics: &[
            "Strong cognitive skills",
            "Efficient study habits",
            "Good time management",
        ],
        color: "#2563eb",
    },
    Descriptor {
        label: PersonaLabel::EngagedLearner,
        description: "Students with moderate skills but high motivation",
        characteristics: &[
            "High engagement",
            "Good effort",
            "Room for skill development",
        ],
        color: "#7c3aed",
    },
    Descriptor {
        label: PersonaLabel::SteadyPerformer,
        description: "Consistent students with balanced performance",
        characteristics: &[
            "Stable performance",
            "Consistent engagement",
            "Reliable progress",
        ],
        color: "#0891b2",
    },
    Descriptor {
        label: PersonaLabel::DevelopingLearner,
        description: "Students showing potential with targeted support",
        characteristics: &[
            "Emerging skills",
            "Variable performance",
            "Growth opportunity",
        ],
        color: "#ea580c",
    },
    Descriptor {
        label: PersonaLabel::NeedsSupport,
        description: "Students requiring additional attention and resources",
        characteristics: &["Low engagement", "Skill gaps", "Requires intervention"],
        color: "#dc2626",
    },
];

static CATALOG: LazyLock<Vec<LearningPersona>> = LazyLock::new(|| {
    DESCRIPTORS
        .iter()
        .map(|d| LearningPersona {
            label: d.label,
            name: d.label.name().to_string(),
            description: d.description.to_string(),
            characteristics: d.characteristics.iter().map(|c| (*c).to_string()).collect(),
            color: d.color.to_string(),
        })
        .collect()
});

/// All six personas, in catalog order.
#[must_use]
pub fn learning_personas() -> &'static [LearningPersona] {
    &CATALOG
}

/// Descriptor for a single persona.
#[must_use]
pub fn persona(label: PersonaLabel) -> &'static LearningPersona {
    &CATALOG[label.index()]
}
