//! Referral struct and related types.

use soroban_sdk::{contracttype, Address, String};

/// Lifecycle stage of a referral.
///
/// Guarded transitions move a referral along
/// `Open -> Accepted -> InProgress -> Completed`, with `Rejected`
/// reachable from `Accepted` and `Closed` reachable from any
/// non-closed stage. `update_referral_status` additionally permits
/// any cross transition between distinct stages.
#[contracttype]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ReferralStatus {
    Open,
    Accepted,
    InProgress,
    Completed,
    Closed,
    Rejected,
}

/// Language a victim requests counseling in.
#[contracttype]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Language {
    English,
    Spanish,
    French,
    Other,
}

/// Category of help being requested.
#[contracttype]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ReferralType {
    Trauma,
    Anxiety,
    Depression,
    Other,
}

/// Payment state recorded on a referral.
///
/// Stored for bookkeeping only; this contract never moves funds.
#[contracttype]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum PaymentStatus {
    Pending,
    Paid,
    Waived,
}

/// A tracked request connecting a victim to a counselor.
///
/// This struct contains everything stored for a referral. The victim
/// and creation time never change after creation; the counselor is
/// set on acceptance and cleared again on rejection.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Referral {
    /// Address of the victim who created the referral.
    pub victim: Address,

    /// Assigned counselor, if any. Absent while the referral is open
    /// and after a rejection.
    pub counselor: Option<Address>,

    /// Current lifecycle stage.
    pub status: ReferralStatus,

    /// Ledger sequence when the referral was created.
    pub created_at: u64,

    /// Free-form description of what help is needed.
    pub needs: String,

    /// Requested counseling language.
    pub language: Language,

    /// Free-form description of the expertise sought.
    pub expertise: String,

    /// Urgency, 1 (lowest) through 5 (highest).
    pub priority: u32,

    /// Declared anonymity level, 0 (none) through 3 (full). Stored,
    /// not enforced.
    pub anonymity_level: u32,

    /// Free-form location text.
    pub location: String,

    /// Free-form availability text.
    pub availability: String,

    /// Whether a follow-up is expected after completion.
    pub followup_required: bool,

    /// Victim's rating, 1-5. Absent until the victim provides it on a
    /// completed referral.
    pub feedback_score: Option<u32>,

    /// Whether this is an emergency request.
    pub emergency_flag: bool,

    /// Category of help being requested.
    pub referral_type: ReferralType,

    /// Expected session duration in minutes.
    pub duration: u32,

    /// Agreed cost. Bookkeeping only.
    pub cost: i128,

    /// Payment state. Bookkeeping only.
    pub payment_status: PaymentStatus,
}

impl Referral {
    /// Check whether `who` is a party to this referral (its victim or
    /// its currently assigned counselor).
    pub fn is_party(&self, who: &Address) -> bool {
        if self.victim == *who {
            return true;
        }
        match &self.counselor {
            Some(counselor) => counselor == who,
            None => false,
        }
    }
}

/// The most recent status transition recorded for a referral.
///
/// One record is kept per referral and overwritten on each recorded
/// transition, keeping bookkeeping O(1) per referral.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ReferralUpdate {
    /// Status the referral moved to.
    pub status: ReferralStatus,

    /// Ledger sequence when the transition happened.
    pub timestamp: u64,

    /// Address that performed the transition.
    pub updater: Address,

    /// Caller-supplied reason for the transition.
    pub reason: String,
}
