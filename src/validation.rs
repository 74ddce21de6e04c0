//! Referral field validation logic.
//!
//! Free-text fields (needs, expertise, location, availability, update
//! reasons) must be non-empty. Numeric fields are range-checked:
//! - priority: 1-5
//! - anonymity level: 0-3
//! - duration: 15-120 minutes
//! - cost: 0-10000
//! - feedback score: 1-5
//!
//! Enumerated fields arrive on the wire as `Symbol` tokens and are
//! parsed into their typed forms here.

use soroban_sdk::{Env, String, Symbol};

use crate::referral::{Language, PaymentStatus, ReferralStatus, ReferralType};

/// Minimum referral priority.
pub const MIN_PRIORITY: u32 = 1;

/// Maximum referral priority.
pub const MAX_PRIORITY: u32 = 5;

/// Maximum anonymity level (minimum is 0).
pub const MAX_ANONYMITY_LEVEL: u32 = 3;

/// Minimum session duration in minutes.
pub const MIN_DURATION: u32 = 15;

/// Maximum session duration in minutes.
pub const MAX_DURATION: u32 = 120;

/// Maximum referral cost.
pub const MAX_COST: i128 = 10000;

/// Minimum feedback score.
pub const MIN_FEEDBACK: u32 = 1;

/// Maximum feedback score.
pub const MAX_FEEDBACK: u32 = 5;

/// Check that a free-text field has content.
pub fn validate_text(text: &String) -> bool {
    text.len() > 0
}

/// Check that a priority is within 1-5.
pub fn validate_priority(priority: u32) -> bool {
    (MIN_PRIORITY..=MAX_PRIORITY).contains(&priority)
}

/// Check that an anonymity level is within 0-3.
pub fn validate_anonymity_level(level: u32) -> bool {
    level <= MAX_ANONYMITY_LEVEL
}

/// Check that a session duration is within 15-120 minutes.
pub fn validate_duration(duration: u32) -> bool {
    (MIN_DURATION..=MAX_DURATION).contains(&duration)
}

/// Check that a cost is non-negative and at most 10000.
pub fn validate_cost(cost: i128) -> bool {
    (0..=MAX_COST).contains(&cost)
}

/// Check that a feedback score is within 1-5.
pub fn validate_feedback(score: u32) -> bool {
    (MIN_FEEDBACK..=MAX_FEEDBACK).contains(&score)
}

/// Parse a language token (`english`, `spanish`, `french`, `other`).
pub fn parse_language(env: &Env, token: &Symbol) -> Option<Language> {
    if *token == Symbol::new(env, "english") {
        Some(Language::English)
    } else if *token == Symbol::new(env, "spanish") {
        Some(Language::Spanish)
    } else if *token == Symbol::new(env, "french") {
        Some(Language::French)
    } else if *token == Symbol::new(env, "other") {
        Some(Language::Other)
    } else {
        None
    }
}

/// Parse a referral type token (`trauma`, `anxiety`, `depression`,
/// `other`).
pub fn parse_referral_type(env: &Env, token: &Symbol) -> Option<ReferralType> {
    if *token == Symbol::new(env, "trauma") {
        Some(ReferralType::Trauma)
    } else if *token == Symbol::new(env, "anxiety") {
        Some(ReferralType::Anxiety)
    } else if *token == Symbol::new(env, "depression") {
        Some(ReferralType::Depression)
    } else if *token == Symbol::new(env, "other") {
        Some(ReferralType::Other)
    } else {
        None
    }
}

/// Parse a payment status token (`pending`, `paid`, `waived`).
pub fn parse_payment_status(env: &Env, token: &Symbol) -> Option<PaymentStatus> {
    if *token == Symbol::new(env, "pending") {
        Some(PaymentStatus::Pending)
    } else if *token == Symbol::new(env, "paid") {
        Some(PaymentStatus::Paid)
    } else if *token == Symbol::new(env, "waived") {
        Some(PaymentStatus::Waived)
    } else {
        None
    }
}

/// Parse a status token (`open`, `accepted`, `in_progress`,
/// `completed`, `closed`, `rejected`).
pub fn parse_status(env: &Env, token: &Symbol) -> Option<ReferralStatus> {
    if *token == Symbol::new(env, "open") {
        Some(ReferralStatus::Open)
    } else if *token == Symbol::new(env, "accepted") {
        Some(ReferralStatus::Accepted)
    } else if *token == Symbol::new(env, "in_progress") {
        Some(ReferralStatus::InProgress)
    } else if *token == Symbol::new(env, "completed") {
        Some(ReferralStatus::Completed)
    } else if *token == Symbol::new(env, "closed") {
        Some(ReferralStatus::Closed)
    } else if *token == Symbol::new(env, "rejected") {
        Some(ReferralStatus::Rejected)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use soroban_sdk::Env;

    #[test]
    fn test_text_validation() {
        let env = Env::default();

        assert!(validate_text(&String::from_str(&env, "Need help with anxiety")));
        assert!(!validate_text(&String::from_str(&env, "")));
    }

    #[test]
    fn test_numeric_ranges() {
        // Priority 1-5
        assert!(!validate_priority(0));
        assert!(validate_priority(1));
        assert!(validate_priority(5));
        assert!(!validate_priority(6));

        // Anonymity 0-3
        assert!(validate_anonymity_level(0));
        assert!(validate_anonymity_level(3));
        assert!(!validate_anonymity_level(4));

        // Duration 15-120
        assert!(!validate_duration(14));
        assert!(validate_duration(15));
        assert!(validate_duration(120));
        assert!(!validate_duration(121));

        // Cost 0-10000
        assert!(validate_cost(0));
        assert!(validate_cost(10000));
        assert!(!validate_cost(10001));
        assert!(!validate_cost(-1));

        // Feedback 1-5
        assert!(!validate_feedback(0));
        assert!(validate_feedback(1));
        assert!(validate_feedback(5));
        assert!(!validate_feedback(6));
    }

    #[test]
    fn test_parse_language() {
        let env = Env::default();

        assert_eq!(
            parse_language(&env, &Symbol::new(&env, "english")),
            Some(Language::English)
        );
        assert_eq!(
            parse_language(&env, &Symbol::new(&env, "spanish")),
            Some(Language::Spanish)
        );
        assert_eq!(
            parse_language(&env, &Symbol::new(&env, "french")),
            Some(Language::French)
        );
        assert_eq!(
            parse_language(&env, &Symbol::new(&env, "other")),
            Some(Language::Other)
        );
        assert_eq!(parse_language(&env, &Symbol::new(&env, "klingon")), None);
    }

    #[test]
    fn test_parse_referral_type() {
        let env = Env::default();

        assert_eq!(
            parse_referral_type(&env, &Symbol::new(&env, "trauma")),
            Some(ReferralType::Trauma)
        );
        assert_eq!(
            parse_referral_type(&env, &Symbol::new(&env, "anxiety")),
            Some(ReferralType::Anxiety)
        );
        assert_eq!(
            parse_referral_type(&env, &Symbol::new(&env, "depression")),
            Some(ReferralType::Depression)
        );
        assert_eq!(
            parse_referral_type(&env, &Symbol::new(&env, "unknown")),
            None
        );
    }

    #[test]
    fn test_parse_payment_status() {
        let env = Env::default();

        assert_eq!(
            parse_payment_status(&env, &Symbol::new(&env, "pending")),
            Some(PaymentStatus::Pending)
        );
        assert_eq!(
            parse_payment_status(&env, &Symbol::new(&env, "paid")),
            Some(PaymentStatus::Paid)
        );
        assert_eq!(
            parse_payment_status(&env, &Symbol::new(&env, "waived")),
            Some(PaymentStatus::Waived)
        );
        assert_eq!(
            parse_payment_status(&env, &Symbol::new(&env, "refunded")),
            None
        );
    }

    #[test]
    fn test_parse_status() {
        let env = Env::default();

        assert_eq!(
            parse_status(&env, &Symbol::new(&env, "open")),
            Some(ReferralStatus::Open)
        );
        assert_eq!(
            parse_status(&env, &Symbol::new(&env, "accepted")),
            Some(ReferralStatus::Accepted)
        );
        assert_eq!(
            parse_status(&env, &Symbol::new(&env, "in_progress")),
            Some(ReferralStatus::InProgress)
        );
        assert_eq!(
            parse_status(&env, &Symbol::new(&env, "completed")),
            Some(ReferralStatus::Completed)
        );
        assert_eq!(
            parse_status(&env, &Symbol::new(&env, "closed")),
            Some(ReferralStatus::Closed)
        );
        assert_eq!(
            parse_status(&env, &Symbol::new(&env, "rejected")),
            Some(ReferralStatus::Rejected)
        );
        assert_eq!(parse_status(&env, &Symbol::new(&env, "archived")), None);
    }
}
