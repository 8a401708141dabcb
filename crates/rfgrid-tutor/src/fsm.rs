//! Tutor dialogue finite state machine.
//!
//! Pure functions that compute the next dialogue state from the current
//! one and a player answer. No timers here: a correct answer on a
//! non-final step only *requests* an advance, and the caller applies
//! `advance` once its own delay has elapsed.

use rfgrid_core::error::CommandError;
use rfgrid_core::state::DialogueView;

use crate::scripts::{get_script, DialogueOption, DialogueScript, DialogueStep};

/// Progress through a dialogue script.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DialogueState {
    pub script: DialogueScript,
    /// Index of the current step.
    pub step: usize,
    /// Option picked on the current step, if any.
    pub selected: Option<usize>,
}

/// Output of answering a question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DialogueUpdate {
    pub new_state: DialogueState,
    pub correct: bool,
    pub response: &'static str,
    /// Caller should schedule `advance` after the answer has been read.
    pub advance_pending: bool,
    /// The final question has been answered correctly.
    pub finished: bool,
}

impl DialogueState {
    /// Start a script from its first step.
    pub fn start(script: DialogueScript) -> Self {
        Self {
            script,
            step: 0,
            selected: None,
        }
    }

    pub fn current_step(&self) -> &'static DialogueStep {
        let steps = get_script(self.script);
        &steps[self.step.min(steps.len() - 1)]
    }

    pub fn step_count(&self) -> usize {
        get_script(self.script).len()
    }

    pub fn is_last_step(&self) -> bool {
        self.step + 1 >= self.step_count()
    }

    fn selected_option(&self) -> Option<&'static DialogueOption> {
        self.selected
            .and_then(|index| self.current_step().options.get(index))
    }

    /// The current step has been answered correctly.
    pub fn answered_correctly(&self) -> bool {
        self.selected_option().is_some_and(|opt| opt.is_correct)
    }
}

/// Answer the current question with option `index`.
///
/// A wrong answer does not lock the step: the player may pick again until
/// they find the correct option, which then locks the step until `advance`.
/// The dialogue itself can be closed at any point, finished or not.
pub fn select(state: &DialogueState, index: usize) -> Result<DialogueUpdate, CommandError> {
    if state.answered_correctly() {
        return Err(CommandError::AnswerLocked);
    }

    let step = state.current_step();
    let option = step.options.get(index).ok_or(CommandError::InvalidOption {
        index,
        available: step.options.len(),
    })?;

    let new_state = DialogueState {
        selected: Some(index),
        ..*state
    };
    let last = state.is_last_step();

    log::debug!(
        "tutor step {} answered with option {} (correct: {})",
        state.step,
        index,
        option.is_correct
    );

    Ok(DialogueUpdate {
        new_state,
        correct: option.is_correct,
        response: option.response,
        advance_pending: option.is_correct && !last,
        finished: option.is_correct && last,
    })
}

/// Move to the next step. No change on the last step or before a correct answer.
pub fn advance(state: &DialogueState) -> DialogueState {
    if state.is_last_step() || !state.answered_correctly() {
        return *state;
    }
    DialogueState {
        step: state.step + 1,
        selected: None,
        ..*state
    }
}

/// Final question answered correctly.
pub fn is_finished(state: &DialogueState) -> bool {
    state.is_last_step() && state.answered_correctly()
}

/// Build the display view of a dialogue.
pub fn view(state: &DialogueState) -> DialogueView {
    let step = state.current_step();
    DialogueView {
        step: state.step,
        step_count: state.step_count(),
        text: step.text.to_string(),
        options: step.options.iter().map(|o| o.label.to_string()).collect(),
        selected: state.selected,
        response: state.selected_option().map(|o| o.response.to_string()),
        answered_correctly: state.answered_correctly(),
        finished: is_finished(state),
    }
}
