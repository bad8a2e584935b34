//! Presentation mapping - pure functions from evaluation state to view data.
//!
//! Nothing here touches a UI toolkit; adapters read a [`MeterView`] and copy
//! it into whatever widgets they own.

use std::time::Instant;

use crate::meter::{MeterState, Visibility};
use crate::types::{Criteria, Criterion, PasswordScore};

/// Label and color class for one score level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrengthTier {
    pub level: u8,
    pub label: &'static str,
    pub color_class: &'static str,
}

const TIERS: [StrengthTier; 6] = [
    StrengthTier {
        level: 0,
        label: "Very Weak",
        color_class: "bg-red-600",
    },
    StrengthTier {
        level: 1,
        label: "Very Weak",
        color_class: "bg-red-600",
    },
    StrengthTier {
        level: 2,
        label: "Weak",
        color_class: "bg-orange-500",
    },
    StrengthTier {
        level: 3,
        label: "Moderate",
        color_class: "bg-yellow-500",
    },
    StrengthTier {
        level: 4,
        label: "Strong",
        color_class: "bg-lime-500",
    },
    StrengthTier {
        level: 5,
        label: "Very Strong",
        color_class: "bg-green-500",
    },
];

impl StrengthTier {
    pub fn for_score(score: PasswordScore) -> &'static StrengthTier {
        // PasswordScore is clamped to 0..=5
        &TIERS[score.value() as usize]
    }

    pub fn all() -> &'static [StrengthTier; 6] {
        &TIERS
    }
}

/// Width of the progress indicator, in percent.
pub fn fill_percent(score: PasswordScore) -> f64 {
    f64::from(score.value()) * 100.0 / f64::from(PasswordScore::MAX)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChecklistIcon {
    Check,
    Cross,
}

impl ChecklistIcon {
    pub fn class(self) -> &'static str {
        match self {
            ChecklistIcon::Check => "mr-2 text-green-400",
            ChecklistIcon::Cross => "mr-2 text-red-400",
        }
    }
}

/// One checklist row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChecklistItem {
    pub criterion: Criterion,
    pub satisfied: bool,
    pub description: &'static str,
}

impl ChecklistItem {
    pub fn icon(&self) -> ChecklistIcon {
        if self.satisfied {
            ChecklistIcon::Check
        } else {
            ChecklistIcon::Cross
        }
    }

    pub fn row_class(&self) -> &'static str {
        if self.satisfied {
            "flex items-center transition-colors duration-300 text-gray-200"
        } else {
            "flex items-center transition-colors duration-300 text-gray-400"
        }
    }
}

/// Checklist rows in fixed order.
pub fn checklist(criteria: &Criteria) -> [ChecklistItem; 5] {
    Criterion::ALL.map(|criterion| ChecklistItem {
        criterion,
        satisfied: criteria.is_met(criterion),
        description: criterion.description(),
    })
}

/// Everything a renderer needs to draw the meter.
#[derive(Debug, Clone, PartialEq)]
pub struct MeterView {
    pub strength_text: &'static str,
    pub bar_class: String,
    pub bar_width_percent: f64,
    pub checklist: [ChecklistItem; 5],
    pub digest_field: String,
    pub copy_confirmation_visible: bool,
    pub masked: bool,
}

impl MeterView {
    /// `type` attribute of the password input.
    pub fn input_type(&self) -> &'static str {
        if self.masked { "password" } else { "text" }
    }

    /// CSS width of the progress indicator, e.g. `"60%"`.
    pub fn bar_width(&self) -> String {
        format!("{}%", self.bar_width_percent)
    }
}

/// Renders `state` as of `now`. Pure: the same inputs give the same view.
pub fn render(state: &MeterState, now: Instant) -> MeterView {
    let evaluation = state.evaluation();
    let (strength_text, bar_class, bar_width_percent) = match evaluation.score {
        Some(score) => {
            let tier = StrengthTier::for_score(score);
            (
                tier.label,
                format!("h-2 rounded-full {}", tier.color_class),
                fill_percent(score),
            )
        }
        None => ("", "h-2 rounded-full".to_string(), 0.0),
    };

    MeterView {
        strength_text,
        bar_class,
        bar_width_percent,
        checklist: checklist(&evaluation.criteria),
        digest_field: state
            .digest()
            .map(|d| d.as_str().to_string())
            .unwrap_or_default(),
        copy_confirmation_visible: state.copy_confirmation_visible(now),
        masked: state.visibility() == Visibility::Masked,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PasswordStrength;

    #[test]
    fn test_tiers_cover_every_score() {
        for (i, tier) in StrengthTier::all().iter().enumerate() {
            assert_eq!(tier.level as usize, i);
            let score = PasswordScore::new(tier.level);
            assert_eq!(StrengthTier::for_score(score), tier);
            assert_eq!(tier.label, PasswordStrength::from_score(score).label());
        }
    }

    #[test]
    fn test_tiers_monotonic() {
        let strengths: Vec<_> = StrengthTier::all()
            .iter()
            .map(|t| PasswordStrength::from_score(PasswordScore::new(t.level)))
            .collect();
        assert!(strengths.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_fill_percent() {
        assert_eq!(fill_percent(PasswordScore::new(0)), 0.0);
        assert_eq!(fill_percent(PasswordScore::new(5)), 100.0);
        assert_eq!(fill_percent(PasswordScore::new(3)), 60.0);
    }

    #[test]
    fn test_checklist_order_and_text() {
        let criteria = Criteria {
            length: true,
            uppercase: false,
            lowercase: true,
            number: false,
            special: true,
        };
        let items = checklist(&criteria);
        let texts: Vec<_> = items.iter().map(|i| i.description).collect();
        assert_eq!(
            texts,
            [
                "At least 8 characters long",
                "Contains an uppercase letter (A-Z)",
                "Contains a lowercase letter (a-z)",
                "Contains a number (0-9)",
                "Contains a special character (!@#$)",
            ]
        );
        assert_eq!(items[0].icon(), ChecklistIcon::Check);
        assert_eq!(items[1].icon(), ChecklistIcon::Cross);
        assert!(items[1].row_class().ends_with("text-gray-400"));
        assert!(items[4].satisfied);
    }

    #[test]
    fn test_render_initial_state_is_reset() {
        let view = render(&MeterState::default(), Instant::now());
        assert_eq!(view.strength_text, "");
        assert_eq!(view.bar_width_percent, 0.0);
        assert_eq!(view.bar_class, "h-2 rounded-full");
        assert!(view.checklist.iter().all(|i| !i.satisfied));
        assert_eq!(view.digest_field, "");
        assert!(!view.copy_confirmation_visible);
        assert_eq!(view.input_type(), "password");
    }
}
