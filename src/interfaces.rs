//! Collaborator contract interfaces.
//!
//! The referral manager delegates identity, credential, and recording
//! concerns to four independently deployed contracts. Their addresses
//! are fixed at `init` and every call is a synchronous cross-contract
//! invocation; a `false` answer from a recorder aborts the operation
//! that triggered it.

use soroban_sdk::{contractclient, Address, Env, Symbol};

/// Role registry for network participants.
#[contractclient(name = "IdentityRegistryClient")]
pub trait IdentityRegistry {
    /// Check whether `principal` is registered with `role`.
    fn has_role(env: Env, principal: Address, role: Symbol) -> bool;
}

/// Credential verification for counselors.
#[contractclient(name = "CounselorVerifierClient")]
pub trait CounselorVerifier {
    /// Check whether `principal` holds verified counselor credentials.
    fn is_verified(env: Env, principal: Address) -> bool;
}

/// Logging of counselor-referral pairings.
#[contractclient(name = "MatchRecorderClient")]
pub trait MatchRecorder {
    /// Record that `counselor` was matched to `referral_id`.
    /// Returns false if the match could not be recorded.
    fn record_match(env: Env, referral_id: u64, counselor: Address) -> bool;
}

/// Logging of session lifecycle events.
#[contractclient(name = "SessionRecorderClient")]
pub trait SessionRecorder {
    /// Record that a session started for `referral_id`.
    /// Returns false if the event could not be recorded.
    fn record_start(env: Env, referral_id: u64) -> bool;

    /// Record that the session for `referral_id` completed.
    /// Returns false if the event could not be recorded.
    fn record_complete(env: Env, referral_id: u64) -> bool;
}
