//! Storage key definitions for the referral manager contract.

use soroban_sdk::{contracttype, Address};

/// Storage keys for the referral manager contract.
///
/// Instance keys hold contract-wide configuration and counters; the
/// remaining keys live in persistent storage, one entry per referral
/// or victim.
#[contracttype]
#[derive(Clone, Debug)]
pub enum DataKey {
    /// Contract administrator address.
    Admin,

    /// Next referral id to assign. Ids are dense, starting at 0.
    ReferralCounter,

    /// Maximum number of referrals that may ever be created.
    MaxReferrals,

    /// Address of the identity registry contract (role lookups).
    IdentityRegistry,

    /// Address of the counselor verifier contract.
    CounselorVerifier,

    /// Address of the match recorder contract.
    MatchRecorder,

    /// Address of the session recorder contract.
    SessionRecorder,

    /// Maps referral id to the Referral struct.
    /// Primary storage for referral data.
    Referral(u64),

    /// Maps referral id to the latest ReferralUpdate.
    /// Overwritten on each recorded transition.
    Update(u64),

    /// Maps victim address to the ordered Vec of referral ids they
    /// created. Append-only.
    VictimReferrals(Address),
}

/// Time-to-live for referral data in ledger entries.
pub const REFERRAL_TTL_THRESHOLD: u32 = 518400; // ~30 days
pub const REFERRAL_TTL_EXTEND: u32 = 2592000; // ~150 days
