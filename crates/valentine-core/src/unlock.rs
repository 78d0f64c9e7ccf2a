//! Unlock gate for the first screen.

/// Shown when the input is empty or whitespace.
pub const EMPTY_ANSWER_HINT: &str = "Please enter an answer";
/// Shown on the accepted answer.
pub const SUCCESS_HINT: &str = "Correct! Unlocking...";
/// Shown on any other answer.
pub const WRONG_ANSWER_HINT: &str = "Not quite right. Try again! 💭";

/// Outcome of one validation attempt
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Verdict {
    Empty,
    Correct,
    Incorrect,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum HintKind {
    Error,
    Success,
}

impl HintKind {
    /// CSS state class
    pub fn class(&self) -> &'static str {
        match self {
            HintKind::Error => "error",
            HintKind::Success => "success",
        }
    }
}

/// Inline hint under the answer input
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Hint {
    pub message: String,
    pub kind: HintKind,
}

/// Validates answers against a fixed string.
///
/// Only surrounding whitespace is trimmed; no case folding, no internal
/// whitespace collapsing, no alternate answers.
#[derive(Clone, Debug)]
pub struct UnlockGate {
    answer: String,
    unlocked: bool,
    hint: Option<Hint>,
    attempts: u32,
}

impl UnlockGate {
    pub fn new(answer: impl Into<String>) -> Self {
        Self {
            answer: answer.into(),
            unlocked: false,
            hint: None,
            attempts: 0,
        }
    }

    /// Judge an answer without touching state.
    pub fn check(&self, raw: &str) -> Verdict {
        match raw.trim() {
            "" => Verdict::Empty,
            answer if answer == self.answer => Verdict::Correct,
            _ => Verdict::Incorrect,
        }
    }

    /// Record an attempt and set the matching hint.
    ///
    /// Returns `None` once unlocked: the input and button are disabled.
    pub fn submit(&mut self, raw: &str) -> Option<Verdict> {
        if self.unlocked {
            return None;
        }
        self.attempts += 1;
        let verdict = self.check(raw);
        let (message, kind) = match verdict {
            Verdict::Empty => (EMPTY_ANSWER_HINT, HintKind::Error),
            Verdict::Correct => {
                self.unlocked = true;
                (SUCCESS_HINT, HintKind::Success)
            }
            Verdict::Incorrect => (WRONG_ANSWER_HINT, HintKind::Error),
        };
        self.hint = Some(Hint {
            message: message.to_string(),
            kind,
        });
        tracing::info!(attempt = self.attempts, ?verdict, "Unlock attempt");
        Some(verdict)
    }

    pub fn is_unlocked(&self) -> bool {
        self.unlocked
    }

    pub fn hint(&self) -> Option<&Hint> {
        self.hint.as_ref()
    }

    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    /// Hide the success hint if `attempt` is still the latest one.
    pub fn clear_success_hint(&mut self, attempt: u32) {
        let is_success = self
            .hint
            .as_ref()
            .is_some_and(|hint| hint.kind == HintKind::Success);
        if is_success && attempt == self.attempts {
            self.hint = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_trims_surrounding_whitespace() {
        let gate = UnlockGate::new("3");
        assert_eq!(gate.check("3"), Verdict::Correct);
        assert_eq!(gate.check(" 3 "), Verdict::Correct);
        assert_eq!(gate.check("\t3\n"), Verdict::Correct);
        assert_eq!(gate.check(""), Verdict::Empty);
        assert_eq!(gate.check("   "), Verdict::Empty);
        assert_eq!(gate.check("three"), Verdict::Incorrect);
        assert_eq!(gate.check("33"), Verdict::Incorrect);
    }

    #[test]
    fn internal_whitespace_and_case_matter() {
        let gate = UnlockGate::new("Paris France");
        assert_eq!(gate.check("paris france"), Verdict::Incorrect);
        assert_eq!(gate.check("Paris  France"), Verdict::Incorrect);
        assert_eq!(gate.check(" Paris France "), Verdict::Correct);
    }

    #[test]
    fn wrong_then_right() {
        let mut gate = UnlockGate::new("3");
        assert_eq!(gate.submit("4"), Some(Verdict::Incorrect));
        let hint = gate.hint().unwrap();
        assert_eq!(hint.message, WRONG_ANSWER_HINT);
        assert_eq!(hint.kind, HintKind::Error);
        assert!(!gate.is_unlocked());

        assert_eq!(gate.submit(""), Some(Verdict::Empty));
        assert_eq!(gate.hint().unwrap().message, EMPTY_ANSWER_HINT);

        assert_eq!(gate.submit("3"), Some(Verdict::Correct));
        assert_eq!(gate.hint().unwrap().kind, HintKind::Success);
        assert!(gate.is_unlocked());
        assert_eq!(gate.attempts(), 3);
    }

    #[test]
    fn unlocked_gate_ignores_input() {
        let mut gate = UnlockGate::new("3");
        gate.submit("3");
        assert_eq!(gate.submit("4"), None);
        assert_eq!(gate.attempts(), 1);
    }

    #[test]
    fn success_hint_clears_only_for_latest_attempt() {
        let mut gate = UnlockGate::new("3");
        gate.submit("3");
        gate.clear_success_hint(0);
        assert!(gate.hint().is_some());
        gate.clear_success_hint(1);
        assert!(gate.hint().is_none());
    }

    #[test]
    fn error_hint_persists() {
        let mut gate = UnlockGate::new("3");
        gate.submit("nope");
        gate.clear_success_hint(1);
        assert_eq!(gate.hint().unwrap().kind, HintKind::Error);
    }
}
