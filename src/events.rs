//! Event emission helpers for the referral manager contract.

use soroban_sdk::{Address, Env, Symbol};

use crate::referral::ReferralStatus;

/// Emit an event when a referral is created.
pub fn emit_referral_created(env: &Env, referral_id: u64, victim: &Address) {
    let topics = (Symbol::new(env, "referral_created"),);
    env.events().publish(topics, (referral_id, victim.clone()));
}

/// Emit an event when a counselor accepts a referral.
pub fn emit_referral_accepted(env: &Env, referral_id: u64, counselor: &Address) {
    let topics = (Symbol::new(env, "referral_accepted"),);
    env.events().publish(topics, (referral_id, counselor.clone()));
}

/// Emit an event when a referral's status is updated directly.
pub fn emit_status_updated(env: &Env, referral_id: u64, new_status: ReferralStatus) {
    let topics = (Symbol::new(env, "status_updated"),);
    env.events().publish(topics, (referral_id, new_status));
}

/// Emit an event when a victim records feedback.
pub fn emit_feedback_recorded(env: &Env, referral_id: u64, score: u32) {
    let topics = (Symbol::new(env, "feedback_recorded"),);
    env.events().publish(topics, (referral_id, score));
}

/// Emit an event when a referral is closed.
pub fn emit_referral_closed(env: &Env, referral_id: u64, updater: &Address) {
    let topics = (Symbol::new(env, "referral_closed"),);
    env.events().publish(topics, (referral_id, updater.clone()));
}

/// Emit an event when a counselor rejects a referral.
pub fn emit_referral_rejected(env: &Env, referral_id: u64, counselor: &Address) {
    let topics = (Symbol::new(env, "referral_rejected"),);
    env.events().publish(topics, (referral_id, counselor.clone()));
}

/// Emit an event when a counseling session starts.
pub fn emit_session_started(env: &Env, referral_id: u64) {
    let topics = (Symbol::new(env, "session_started"),);
    env.events().publish(topics, referral_id);
}

/// Emit an event when a counseling session completes.
pub fn emit_session_completed(env: &Env, referral_id: u64) {
    let topics = (Symbol::new(env, "session_completed"),);
    env.events().publish(topics, referral_id);
}
