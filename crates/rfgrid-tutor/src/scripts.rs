//! Tutor dialogue scripts.
//!
//! Each script is an ordered list of multiple-choice steps. Scripts are
//! static data; progress through them is tracked by `fsm::DialogueState`.

use serde::{Deserialize, Serialize};

/// One answer the player can pick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DialogueOption {
    pub label: &'static str,
    pub is_correct: bool,
    /// What the tutor says when this option is picked.
    pub response: &'static str,
}

/// One tutor question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DialogueStep {
    pub text: &'static str,
    pub options: &'static [DialogueOption],
}

/// Available tutor scripts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DialogueScript {
    /// Shadowing behind the metal bleachers; leads the player to the RIS panel.
    #[default]
    MetalBlockage,
}

/// Get the steps of a script. Every script has at least one step.
pub fn get_script(script: DialogueScript) -> &'static [DialogueStep] {
    match script {
        DialogueScript::MetalBlockage => METAL_BLOCKAGE,
    }
}

const METAL_BLOCKAGE: &[DialogueStep] = &[
    DialogueStep {
        text: "I see the signal didn't quite reach the entire stadium. Notice the red zone behind the metal bleachers?",
        options: &[
            DialogueOption {
                label: "Metal absorbs all RF energy",
                is_correct: false,
                response: "Not quite. While some absorption happens, it's not the primary behavior at 28 GHz.",
            },
            DialogueOption {
                label: "Metal reflects RF waves",
                is_correct: true,
                response: "Correct! At 28 GHz (mmWave), metal structures cause significant shadowing and reflection.",
            },
            DialogueOption {
                label: "Metal is transparent to RF",
                is_correct: false,
                response: "Incorrect. Metal is a conductor and interacts strongly with EM waves.",
            },
        ],
    },
    DialogueStep {
        text: "Since the bleachers block the line-of-sight, how can we get the signal around them without moving the stadium?",
        options: &[
            DialogueOption {
                label: "Increase power to burn through",
                is_correct: false,
                response: "That would violate safety regulations and drain the battery!",
            },
            DialogueOption {
                label: "Use lower frequency",
                is_correct: false,
                response: "We need the bandwidth of 28 GHz for 6G speeds.",
            },
            DialogueOption {
                label: "Reflect the signal",
                is_correct: true,
                response: "Exactly. We can bounce the signal using a passive surface.",
            },
        ],
    },
    DialogueStep {
        text: "Check your toolbox. Which component acts like a 'smart mirror' for radio waves?",
        options: &[
            DialogueOption {
                label: "Phased Array",
                is_correct: false,
                response: "A Phased Array transmits active signals. We need a passive reflector.",
            },
            DialogueOption {
                label: "RIS Panel",
                is_correct: true,
                response: "Spot on. A Reconfigurable Intelligent Surface (RIS) can steer reflections into dead zones.",
            },
        ],
    },
];
