//! Password strength evaluator - main evaluation logic.

use secrecy::{ExposeSecret, SecretString};

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::sections::{
    SectionFn, length_section, lowercase_section, number_section, special_section,
    uppercase_section,
};
use crate::types::{Criteria, Criterion, PasswordEvaluation, PasswordScore};

/// Evaluates every composition criterion and counts the satisfied ones.
///
/// An empty password is not evaluated: the result has no score and all
/// criteria are `false`.
///
/// # Arguments
/// * `password` - The password to evaluate
/// * `token` - Optional cancellation token (async feature only)
pub fn evaluate_password_strength(
    password: &SecretString,
    #[cfg(feature = "async")] token: Option<CancellationToken>,
) -> PasswordEvaluation {
    if password.expose_secret().is_empty() {
        return PasswordEvaluation::not_evaluated();
    }

    let sections: [(Criterion, SectionFn); 5] = [
        (Criterion::Length, length_section),
        (Criterion::Uppercase, uppercase_section),
        (Criterion::Lowercase, lowercase_section),
        (Criterion::Number, number_section),
        (Criterion::Special, special_section),
    ];

    let mut criteria = Criteria::default();
    for (criterion, section_fn) in sections {
        #[cfg(feature = "async")]
        {
            if let Some(ref t) = token {
                if t.is_cancelled() {
                    #[cfg(feature = "tracing")]
                    tracing::debug!("evaluation cancelled before {:?}", criterion);
                    return PasswordEvaluation::not_evaluated();
                }
            }
        }

        criteria.set(criterion, section_fn(password));
    }

    PasswordEvaluation {
        score: Some(PasswordScore::from(&criteria)),
        criteria,
    }
}

/// Async version that sends evaluation result via channel.
#[cfg(feature = "async")]
pub async fn evaluate_password_strength_tx(
    password: &SecretString,
    token: CancellationToken,
    tx: mpsc::Sender<PasswordEvaluation>,
) {
    let evaluation = evaluate_password_strength(password, Some(token));

    if let Err(_e) = tx.send(evaluation).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password evaluation result: {}", _e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PasswordStrength;

    fn evaluate(s: &str) -> PasswordEvaluation {
        let pwd = SecretString::new(s.to_string().into());

        #[cfg(feature = "async")]
        let evaluation = evaluate_password_strength(&pwd, None);

        #[cfg(not(feature = "async"))]
        let evaluation = evaluate_password_strength(&pwd);

        evaluation
    }

    #[test]
    fn test_evaluate_lowercase_only() {
        let evaluation = evaluate("abc");
        assert_eq!(
            evaluation.criteria,
            Criteria {
                length: false,
                uppercase: false,
                lowercase: true,
                number: false,
                special: false,
            }
        );
        assert_eq!(evaluation.score, Some(PasswordScore::new(1)));
        assert_eq!(evaluation.strength(), PasswordStrength::VeryWeak);
        assert_eq!(evaluation.strength().label(), "Very Weak");
    }

    #[test]
    fn test_evaluate_all_criteria() {
        let evaluation = evaluate("Abcdef1!");
        assert_eq!(evaluation.criteria.count(), 5);
        assert_eq!(evaluation.score.unwrap().value(), 5);
        assert_eq!(evaluation.strength().label(), "Very Strong");
    }

    #[test]
    fn test_evaluate_empty_password() {
        let evaluation = evaluate("");
        assert!(evaluation.score.is_none());
        assert_eq!(evaluation.criteria, Criteria::default());
        assert_eq!(evaluation.strength(), PasswordStrength::NotEvaluated);
    }

    #[test]
    fn test_evaluate_underscores_are_not_special() {
        let evaluation = evaluate("________");
        // underscores are word characters: only the length criterion holds
        assert!(evaluation.criteria.length);
        assert!(!evaluation.criteria.special);
        assert_eq!(evaluation.score.unwrap().value(), 1);
    }

    #[test]
    fn test_evaluate_non_ascii_letters_are_only_special() {
        let evaluation = evaluate("ÉÀÜ");
        assert_eq!(
            evaluation.criteria,
            Criteria {
                length: false,
                uppercase: false,
                lowercase: false,
                number: false,
                special: true,
            }
        );
        assert_eq!(evaluation.score.unwrap().value(), 1);
    }

    #[test]
    fn test_evaluate_astral_chars_meet_length() {
        let evaluation = evaluate("😀😀😀😀");
        assert!(evaluation.criteria.length);
        assert!(evaluation.criteria.special);
        assert_eq!(evaluation.score.unwrap().value(), 2);
    }

    #[test]
    fn test_evaluate_score_equals_criteria_count() {
        let test_passwords = [
            "a",
            "A",
            "1",
            "!",
            "password",
            "Password",
            "Password1",
            "Password1!",
            "ÀÉÎÕÜ",
            "   ",
            "MyPass123!",
        ];

        for pwd_str in test_passwords {
            let evaluation = evaluate(pwd_str);
            let score = evaluation.score.expect("non-empty input is evaluated");
            assert_eq!(
                score.value() as usize,
                evaluation.criteria.count(),
                "score mismatch for '{}'",
                pwd_str
            );
            assert!(score.value() <= PasswordScore::MAX);
        }
    }
}
