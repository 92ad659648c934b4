//! Static lookup tables behind lesson plan synthesis.

use once_cell::sync::Lazy;
use std::collections::HashMap;

use super::Subject;
use crate::domain::user::LearningStyle;

/// Instructional approach selected by life path number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TeachingStyle {
    pub label: &'static str,
    pub description: &'static str,
}

/// Delivery format selected by learning style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LearningFormat {
    pub label: &'static str,
    pub tools: &'static [&'static str],
}

/// Life path number used when a lookup misses.
pub const FALLBACK_LIFE_PATH: u32 = 1;

/// Teaching styles for exactly {1..9, 11, 22, 33}.
pub static TEACHING_STYLES: Lazy<HashMap<u32, TeachingStyle>> = Lazy::new(|| {
    let entries: [(u32, &'static str, &'static str); 12] = [
        (1, "Challenge-Based", "Independent, fast-paced tasks with clear leadership opportunities."),
        (2, "Collaborative", "Partner work, discussion-based learning, and empathetic connection."),
        (3, "Creative & Expressive", "Artistic projects, presentations, and fun, dynamic storytelling."),
        (4, "Structured & Detailed", "Step-by-step logical progression, checklists, and practical application."),
        (5, "Dynamic & Varied", "Gamified learning, short modules, and freedom to explore multiple angles."),
        (6, "Service-Oriented", "Learning through helping others, community projects, and nurturing themes."),
        (7, "Analytical & Deep", "Independent research, deep-dive investigations, and answering 'why'."),
        (8, "Goal-Oriented", "High-level strategy, business simulations, and results-driven projects."),
        (9, "Humanitarian", "Big-picture concepts, history/culture focus, and emotional resonance."),
        (11, "Inspirational", "Intuitive leaps, connecting disparate concepts, and spiritual/philosophical depth."),
        (22, "Master Builder", "Large-scale systems thinking, practical implementation of big dreams."),
        (33, "Master Teacher", "Mentoring others, joyful expression, and selfless service."),
    ];

    entries
        .into_iter()
        .map(|(number, label, description)| (number, TeachingStyle { label, description }))
        .collect()
});

/// Teaching style registered for `life_path`, if any.
pub fn teaching_style(life_path: u32) -> Option<&'static TeachingStyle> {
    TEACHING_STYLES.get(&life_path)
}

/// Format and tools for a learning style.
pub fn learning_format(style: LearningStyle) -> LearningFormat {
    match style {
        LearningStyle::Visual => LearningFormat {
            label: "Visual/Graphic",
            tools: &["Diagrams", "Flowcharts", "Video Essays", "Color-coding"],
        },
        LearningStyle::Auditory => LearningFormat {
            label: "Aural/Verbal",
            tools: &["Podcasts", "Discussion", "Mnemonics", "Recorded Summaries"],
        },
        LearningStyle::ReadingWriting => LearningFormat {
            label: "Textual/Reflective",
            tools: &["Essays", "Reports", "Detailed Notes", "Lists"],
        },
        LearningStyle::Kinesthetic => LearningFormat {
            label: "Tactile/Active",
            tools: &["Models", "Experiments", "Roleplay", "Field Work"],
        },
    }
}

/// Ordered activities for a subject and learning style.
pub fn activities(subject: Subject, style: LearningStyle) -> &'static [&'static str] {
    use LearningStyle::*;
    use Subject::*;

    match (subject, style) {
        (SpiPhysics, Visual) => &[
            "Draw the sound beam shape including near/far zones",
            "Create a diagram of transducer components",
        ],
        (SpiPhysics, Auditory) => &[
            "Listen to a lecture on the piezoelectric effect",
            "Explain the range equation out loud",
        ],
        (SpiPhysics, ReadingWriting) => &[
            "Write definitions for key wave parameters",
            "Create a cheat sheet for resolution acronyms (LARRD, LATA)",
        ],
        (SpiPhysics, Kinesthetic) => &[
            "Use a slinky to demonstrate longitudinal waves",
            "Manipulate TGC controls on a machine (or simulator)",
        ],

        (SpiHemodynamics, Visual) => &[
            "Map out the circulatory system flow",
            "Draw laminar vs turbulent flow profiles",
        ],
        (SpiHemodynamics, Auditory) => &[
            "Discuss the Doppler effect pitch changes",
            "Listen to different Doppler audio signals",
        ],
        (SpiHemodynamics, ReadingWriting) => &[
            "Write a summary of Bernoulli's Principle",
            "List the factors affecting resistance",
        ],
        (SpiHemodynamics, Kinesthetic) => &[
            "Use a water hose analogy to feel pressure/resistance",
            "Practice adjusting Doppler angle on a phantom",
        ],

        (SpiArtifacts, Visual) => &[
            "Identify artifacts in sample images",
            "Draw the path of sound for mirror image",
        ],
        (SpiArtifacts, Auditory) => &[
            "Describe how reverberation is created",
            "Quiz a partner on artifact causes",
        ],
        (SpiArtifacts, ReadingWriting) => &[
            "Catalog artifacts by their cause (attenuation vs propagation)",
            "Write case studies involving artifacts",
        ],
        (SpiArtifacts, Kinesthetic) => &[
            "Create shadow artifacts using different materials",
            "Adjust gain to create/eliminate noise",
        ],

        (VascularTechnology, Visual) => &[
            "Trace the Circle of Willis",
            "Color-code venous vs arterial flow diagrams",
        ],
        (VascularTechnology, Auditory) => &[
            "Listen to triphasic vs monophasic waveforms",
            "Verbalize the path of blood from heart to toe",
        ],
        (VascularTechnology, ReadingWriting) => &[
            "Write a protocol for a DVT study",
            "Summarize diagnostic criteria for stenosis",
        ],
        (VascularTechnology, Kinesthetic) => &[
            "Practice probe positioning for carotid artery",
            "Simulate augmentation techniques",
        ],

        (AbdominalSonography, Visual) => &[
            "Draw the segmental anatomy of the liver",
            "Label a cross-section of the kidney",
        ],
        (AbdominalSonography, Auditory) => &[
            "Listen to a case review of gallstones",
            "Describe the sonographic appearance of the pancreas",
        ],
        (AbdominalSonography, ReadingWriting) => &[
            "Write a report for a normal abdomen scan",
            "Create flashcards for organ echogenicity",
        ],
        (AbdominalSonography, Kinesthetic) => &[
            "Practice breath-hold instructions",
            "Roleplay patient positioning",
        ],

        (ObGyn, Visual) => &[
            "Chart the menstrual cycle hormones",
            "Draw fetal lie and presentation",
        ],
        (ObGyn, Auditory) => &[
            "Listen to fetal heart tones",
            "Discuss biometric measurement techniques",
        ],
        (ObGyn, ReadingWriting) => &[
            "Write a summary of first-trimester milestones",
            "List indications for transvaginal exams",
        ],
        (ObGyn, Kinesthetic) => &[
            "Practice biometric measurements on a phantom",
            "Simulate transducer orientation for uterus",
        ],
    }
}
