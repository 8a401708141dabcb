#[cfg(test)]
mod tests {
    use rfgrid_core::error::CommandError;

    use crate::fsm::{advance, is_finished, select, view, DialogueState};
    use crate::scripts::{get_script, DialogueScript};

    /// Index of the correct option on a step.
    fn correct_index(state: &DialogueState) -> usize {
        state
            .current_step()
            .options
            .iter()
            .position(|o| o.is_correct)
            .expect("every step has a correct option")
    }

    fn wrong_index(state: &DialogueState) -> usize {
        state
            .current_step()
            .options
            .iter()
            .position(|o| !o.is_correct)
            .expect("every step has a wrong option")
    }

    #[test]
    fn test_metal_blockage_script_shape() {
        let steps = get_script(DialogueScript::MetalBlockage);
        assert_eq!(steps.len(), 3);
        for step in steps {
            let correct = step.options.iter().filter(|o| o.is_correct).count();
            assert_eq!(correct, 1, "each step has exactly one correct answer");
        }
        assert_eq!(steps[2].options[1].label, "RIS Panel");
    }

    #[test]
    fn test_start_at_first_step() {
        let state = DialogueState::start(DialogueScript::MetalBlockage);
        assert_eq!(state.step, 0);
        assert_eq!(state.selected, None);
        assert!(!state.is_last_step());
        assert!(!is_finished(&state));
    }

    #[test]
    fn test_correct_answer_requests_advance() {
        let state = DialogueState::start(DialogueScript::MetalBlockage);
        let update = select(&state, correct_index(&state)).unwrap();
        assert!(update.correct);
        assert!(update.advance_pending);
        assert!(!update.finished);
        assert!(update.response.starts_with("Correct!"));

        let next = advance(&update.new_state);
        assert_eq!(next.step, 1);
        assert_eq!(next.selected, None);
    }

    #[test]
    fn test_wrong_answer_can_be_retried() {
        let state = DialogueState::start(DialogueScript::MetalBlockage);
        let update = select(&state, wrong_index(&state)).unwrap();
        assert!(!update.correct);
        assert!(!update.advance_pending);
        assert_eq!(advance(&update.new_state), update.new_state);

        let retry = select(&update.new_state, correct_index(&state)).unwrap();
        assert!(retry.correct);
    }

    #[test]
    fn test_correct_answer_locks_step() {
        let state = DialogueState::start(DialogueScript::MetalBlockage);
        let update = select(&state, correct_index(&state)).unwrap();
        let err = select(&update.new_state, 0).unwrap_err();
        assert_eq!(err, CommandError::AnswerLocked);
    }

    #[test]
    fn test_out_of_range_option_rejected() {
        let state = DialogueState::start(DialogueScript::MetalBlockage);
        let err = select(&state, 7).unwrap_err();
        assert_eq!(
            err,
            CommandError::InvalidOption {
                index: 7,
                available: 3
            }
        );
    }

    #[test]
    fn test_full_walkthrough_finishes() {
        let mut state = DialogueState::start(DialogueScript::MetalBlockage);
        for _ in 0..2 {
            let update = select(&state, correct_index(&state)).unwrap();
            assert!(update.advance_pending);
            state = advance(&update.new_state);
        }
        assert!(state.is_last_step());
        let update = select(&state, correct_index(&state)).unwrap();
        assert!(update.finished);
        assert!(!update.advance_pending);
        assert!(is_finished(&update.new_state));
        // Advancing past the end is a no-op
        assert_eq!(advance(&update.new_state), update.new_state);
    }

    #[test]
    fn test_view_reflects_state() {
        let state = DialogueState::start(DialogueScript::MetalBlockage);
        let v = view(&state);
        assert_eq!(v.step, 0);
        assert_eq!(v.step_count, 3);
        assert_eq!(v.options.len(), 3);
        assert!(v.response.is_none());

        let update = select(&state, wrong_index(&state)).unwrap();
        let v = view(&update.new_state);
        assert_eq!(v.selected, Some(wrong_index(&state)));
        assert!(!v.answered_correctly);
        assert!(v.response.unwrap().starts_with("Not quite"));
    }
}
