//! Evaluation result types: criteria, score and strength.

use std::fmt;

/// One independent password-composition check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Criterion {
    Length,
    Uppercase,
    Lowercase,
    Number,
    Special,
}

impl Criterion {
    /// All criteria in checklist order.
    pub const ALL: [Criterion; 5] = [
        Criterion::Length,
        Criterion::Uppercase,
        Criterion::Lowercase,
        Criterion::Number,
        Criterion::Special,
    ];

    /// Fixed checklist text shown next to the pass/fail icon.
    pub fn description(self) -> &'static str {
        match self {
            Criterion::Length => "At least 8 characters long",
            Criterion::Uppercase => "Contains an uppercase letter (A-Z)",
            Criterion::Lowercase => "Contains a lowercase letter (a-z)",
            Criterion::Number => "Contains a number (0-9)",
            Criterion::Special => "Contains a special character (!@#$)",
        }
    }
}

/// Outcome of every criterion for a single password.
///
/// The default value (all `false`) is what an empty input shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Criteria {
    pub length: bool,
    pub uppercase: bool,
    pub lowercase: bool,
    pub number: bool,
    pub special: bool,
}

impl Criteria {
    pub fn is_met(&self, criterion: Criterion) -> bool {
        match criterion {
            Criterion::Length => self.length,
            Criterion::Uppercase => self.uppercase,
            Criterion::Lowercase => self.lowercase,
            Criterion::Number => self.number,
            Criterion::Special => self.special,
        }
    }

    pub(crate) fn set(&mut self, criterion: Criterion, met: bool) {
        match criterion {
            Criterion::Length => self.length = met,
            Criterion::Uppercase => self.uppercase = met,
            Criterion::Lowercase => self.lowercase = met,
            Criterion::Number => self.number = met,
            Criterion::Special => self.special = met,
        }
    }

    /// Iterates `(criterion, met)` pairs in checklist order.
    pub fn iter(&self) -> impl Iterator<Item = (Criterion, bool)> + '_ {
        Criterion::ALL.into_iter().map(move |c| (c, self.is_met(c)))
    }

    /// Number of satisfied criteria.
    pub fn count(&self) -> usize {
        self.iter().filter(|(_, met)| *met).count()
    }
}

/// Count of satisfied criteria, always in `0..=5`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PasswordScore(u8);

impl PasswordScore {
    pub const MAX: u8 = 5;

    /// Builds a score, clamping anything above [`PasswordScore::MAX`].
    pub fn new(value: u8) -> Self {
        Self(value.min(Self::MAX))
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

impl From<&Criteria> for PasswordScore {
    fn from(criteria: &Criteria) -> Self {
        // count() is bounded by the five criteria
        Self::new(criteria.count() as u8)
    }
}

impl fmt::Display for PasswordScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.0, Self::MAX)
    }
}

/// Coarse strength classification derived from the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PasswordStrength {
    NotEvaluated,
    VeryWeak,
    Weak,
    Moderate,
    Strong,
    VeryStrong,
}

impl PasswordStrength {
    pub fn from_score(score: PasswordScore) -> Self {
        match score.value() {
            0 | 1 => PasswordStrength::VeryWeak,
            2 => PasswordStrength::Weak,
            3 => PasswordStrength::Moderate,
            4 => PasswordStrength::Strong,
            _ => PasswordStrength::VeryStrong,
        }
    }

    /// Human readable label; empty when nothing was evaluated.
    pub fn label(self) -> &'static str {
        match self {
            PasswordStrength::NotEvaluated => "",
            PasswordStrength::VeryWeak => "Very Weak",
            PasswordStrength::Weak => "Weak",
            PasswordStrength::Moderate => "Moderate",
            PasswordStrength::Strong => "Strong",
            PasswordStrength::VeryStrong => "Very Strong",
        }
    }
}

impl fmt::Display for PasswordStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Result of evaluating one password.
///
/// `score` is `None` when the input was empty or the evaluation was
/// cancelled; in that case every criterion is `false`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PasswordEvaluation {
    pub score: Option<PasswordScore>,
    pub criteria: Criteria,
}

impl PasswordEvaluation {
    pub fn not_evaluated() -> Self {
        Self::default()
    }

    pub fn strength(&self) -> PasswordStrength {
        self.score
            .map(PasswordStrength::from_score)
            .unwrap_or(PasswordStrength::NotEvaluated)
    }

    pub fn is_evaluated(&self) -> bool {
        self.score.is_some()
    }
}
