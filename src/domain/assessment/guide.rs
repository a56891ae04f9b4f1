//! Interview guides for each assessment dimension.
//!
//! Every dimension interview behaves the same way; only the framing
//! differs. The guides are therefore plain data in a static table
//! rather than types with behavior.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::domain::foundation::Dimension;

/// Static interview framing for one dimension.
#[derive(Debug, Clone)]
pub struct DimensionGuide {
    /// The dimension this guide covers.
    pub dimension: Dimension,
    /// What the interview is trying to learn.
    pub purpose: &'static str,
    /// The question that opens the interview.
    pub opening_question: &'static str,
    /// Follow-up probes the interviewer can draw on.
    pub probes: &'static [&'static str],
}

static GUIDES: Lazy<HashMap<Dimension, DimensionGuide>> = Lazy::new(|| {
    Dimension::all()
        .iter()
        .map(|dim| (*dim, build_guide(*dim)))
        .collect()
});

/// Returns the interview guide for a dimension.
pub fn guide_for(dimension: Dimension) -> &'static DimensionGuide {
    &GUIDES[&dimension]
}

fn build_guide(dimension: Dimension) -> DimensionGuide {
    match dimension {
        Dimension::Personality => DimensionGuide {
            dimension,
            purpose: "Uncover natural work style and behavioral preferences",
            opening_question: "When you're at your best at work or study, what does that \
                               usually look like: heads-down focus, collaborating with \
                               others, or switching between the two?",
            probes: &[
                "How do you usually react when plans change at the last minute?",
                "Do you recharge around people or on your own?",
                "What kind of feedback lands well with you?",
            ],
        },
        Dimension::Interests => DimensionGuide {
            dimension,
            purpose: "Surface the topics and activities that genuinely engage the user",
            opening_question: "What topics could you spend hours learning about without it \
                               feeling like work?",
            probes: &[
                "What do you read or watch in your free time that relates to work at all?",
                "Which parts of past roles or classes felt like play rather than work?",
                "What problems in the world do you catch yourself thinking about?",
            ],
        },
        Dimension::Aspirations => DimensionGuide {
            dimension,
            purpose: "Define the career vision and the lifestyle it should support",
            opening_question: "Picture your working life five years from now going well. \
                               What are you doing day to day?",
            probes: &[
                "What would make that future feel like success to you?",
                "Is there an impact you want your work to have on others?",
                "How does work-life balance figure into that picture?",
            ],
        },
        Dimension::Skills => DimensionGuide {
            dimension,
            purpose: "Inventory current abilities across technical and soft skills",
            opening_question: "What skills do people come to you for, at work or outside it?",
            probes: &[
                "Which tools or technologies are you most fluent with?",
                "What's a skill you've picked up recently, and how did you learn it?",
                "Where do you feel most out of your depth right now?",
            ],
        },
        Dimension::MotivationsValues => DimensionGuide {
            dimension,
            purpose: "Identify core values and the conditions that make work meaningful",
            opening_question: "Think of a time work felt genuinely worthwhile. What made it \
                               feel that way?",
            probes: &[
                "What would you refuse to compromise on in a job?",
                "Does recognition matter to you, and in what form?",
                "How much autonomy do you need to do your best work?",
            ],
        },
        Dimension::CognitiveAbilities => DimensionGuide {
            dimension,
            purpose: "Understand thinking style and problem-solving approach",
            opening_question: "When you face a hard, unfamiliar problem, what do you \
                               actually do first?",
            probes: &[
                "Do you prefer working from first principles or from examples?",
                "How do you keep track of complex information: notes, diagrams, memory?",
                "What kinds of puzzles or analyses come easily to you?",
            ],
        },
        Dimension::LearningPreferences => DimensionGuide {
            dimension,
            purpose: "Discover how the user learns and processes new material best",
            opening_question: "Think of something you learned quickly and well. How did you \
                               go about it?",
            probes: &[
                "Do you prefer structured courses or self-directed exploration?",
                "Do you learn better alone, with a partner, or in a group?",
                "What kind of feedback helps you improve fastest?",
            ],
        },
        Dimension::PhysicalContext => DimensionGuide {
            dimension,
            purpose: "Identify the ideal work setting and environmental conditions",
            opening_question: "Where do you do your best work: at home, in an office, \
                               outdoors, on the move?",
            probes: &[
                "How do you feel about travel as part of a job?",
                "Do you want work that keeps you physically active?",
                "What does your ideal workday rhythm look like?",
            ],
        },
        Dimension::StrengthsWeaknesses => DimensionGuide {
            dimension,
            purpose: "Map energizing strengths against draining growth areas",
            opening_question: "What kinds of tasks give you energy, and which ones reliably \
                               drain you?",
            probes: &[
                "What do you consider your greatest strengths?",
                "What activities put you in a flow state?",
                "Where would the people who know you best say you could grow?",
            ],
        },
        Dimension::EmotionalIntelligence => DimensionGuide {
            dimension,
            purpose: "Assess interpersonal awareness and emotional regulation",
            opening_question: "Tell me about a time you had to navigate a tense situation \
                               with someone. How did you handle it?",
            probes: &[
                "How do you usually notice you're stressed before others do?",
                "How do you approach giving difficult feedback?",
                "What role do you tend to play when a group is in conflict?",
            ],
        },
        Dimension::TrackRecord => DimensionGuide {
            dimension,
            purpose: "Review education, experience, and the patterns behind past successes",
            opening_question: "Walk me through the accomplishments you're proudest of so \
                               far. What did they have in common?",
            probes: &[
                "Which roles or projects taught you the most?",
                "Have you taken on leadership, formally or informally?",
                "What patterns do you notice across the work you've done well?",
            ],
        },
        Dimension::Constraints => DimensionGuide {
            dimension,
            purpose: "Identify practical factors that bound the realistic option set",
            opening_question: "What practical realities does your next career move need to \
                               respect: location, finances, family, health?",
            probes: &[
                "Are you able to relocate, or is geography fixed?",
                "What income level does your situation require?",
                "Are there time commitments a job would have to fit around?",
            ],
        },
    }
}
