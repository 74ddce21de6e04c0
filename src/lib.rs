//! # Soroban Referral Manager
//!
//! Counseling referral lifecycle manager for the Soroban blockchain.
//!
//! This contract tracks referrals connecting help-seekers ("victims")
//! to service providers ("counselors") through a bounded lifecycle,
//! enforcing who may create, accept, transition, reject, and close
//! each referral. Features include:
//!
//! - Field-validated referral creation with a hard capacity ceiling
//! - Guarded lifecycle transitions (accept, reject, close, sessions)
//! - A general status-update path for the referral's own parties
//! - Per-referral update records and a per-victim referral index
//! - Delegated identity, credential, and recording checks via four
//!   collaborator contracts
//!
//! ## Usage
//!
//! ```rust,ignore
//! // Create a referral
//! let id = client.create_referral(&victim, &needs, &language, ...);
//!
//! // Counselor accepts, then sessions run
//! client.accept_referral(&id, &counselor, &caller);
//! client.start_session(&id);
//! client.complete_session(&id);
//!
//! // Victim rates the completed referral
//! client.provide_feedback(&id, &4, &victim);
//! ```

#![no_std]

mod events;
mod interfaces;
mod referral;
mod storage;
mod validation;

pub use interfaces::{
    CounselorVerifier, IdentityRegistry, MatchRecorder, SessionRecorder,
};
pub use referral::{
    Language, PaymentStatus, Referral, ReferralStatus, ReferralType, ReferralUpdate,
};
pub use storage::DataKey;
pub use validation::{
    MAX_ANONYMITY_LEVEL, MAX_COST, MAX_DURATION, MAX_FEEDBACK, MAX_PRIORITY, MIN_DURATION,
    MIN_FEEDBACK, MIN_PRIORITY,
};

use soroban_sdk::{
    contract, contracterror, contractimpl, symbol_short, Address, BytesN, Env, String, Symbol, Vec,
};

use crate::events::*;
use crate::interfaces::{
    CounselorVerifierClient, IdentityRegistryClient, MatchRecorderClient, SessionRecorderClient,
};
use crate::storage::{REFERRAL_TTL_EXTEND, REFERRAL_TTL_THRESHOLD};

/// Error codes for the referral manager contract.
///
/// The numeric values are part of the contract's public interface;
/// downstream consumers match on them.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum Error {
    /// Contract has already been initialized.
    AlreadyInitialized = 1,
    /// Contract has not been initialized.
    NotInitialized = 2,
    /// Caller is not a party to the referral.
    NotAuthorized = 100,
    /// Needs description is empty.
    InvalidNeeds = 101,
    /// Language token is not recognized.
    InvalidLanguage = 102,
    /// Expertise description is empty.
    InvalidExpertise = 103,
    /// Priority is outside 1-5.
    InvalidPriority = 104,
    /// No referral exists with the given id.
    ReferralNotFound = 106,
    /// Referral is not in a status that permits the operation.
    InvalidStatus = 107,
    /// Counselor is not verified (or no counselor is assigned).
    CounselorNotVerified = 109,
    /// Victim is not registered with the identity registry.
    VictimNotRegistered = 110,
    /// A match or session recorder call failed.
    MatchingFailed = 111,
    /// New status equals the current status.
    StatusUpdateNotAllowed = 112,
    /// Update reason is empty.
    InvalidUpdateReason = 113,
    /// The referral capacity has been reached.
    MaxReferralsExceeded = 114,
    /// Anonymity level is outside 0-3.
    InvalidAnonymityLevel = 115,
    /// Location is empty.
    InvalidLocation = 116,
    /// Availability is empty.
    InvalidAvailability = 117,
    /// Feedback score is outside 1-5.
    InvalidFeedback = 119,
    /// Referral type token is not recognized.
    InvalidReferralType = 121,
    /// Duration is outside 15-120 minutes.
    InvalidDuration = 122,
    /// Cost is negative or above 10000.
    InvalidCost = 123,
    /// Payment status token is not recognized.
    InvalidPaymentStatus = 124,
}

/// Role the identity registry must report for referral creators.
const VICTIM_ROLE: Symbol = symbol_short!("victim");

#[contract]
pub struct ReferralContract;

#[contractimpl]
impl ReferralContract {
    // ========== Initialization ==========

    /// Initialize the contract.
    ///
    /// Stores the admin, the four collaborator contract addresses, and
    /// the referral capacity. Must be called once before any other
    /// operation.
    pub fn init(
        env: Env,
        admin: Address,
        identity_registry: Address,
        counselor_verifier: Address,
        match_recorder: Address,
        session_recorder: Address,
        max_referrals: u64,
    ) -> Result<(), Error> {
        if env.storage().instance().has(&DataKey::Admin) {
            return Err(Error::AlreadyInitialized);
        }

        admin.require_auth();

        env.storage().instance().set(&DataKey::Admin, &admin);
        env.storage()
            .instance()
            .set(&DataKey::IdentityRegistry, &identity_registry);
        env.storage()
            .instance()
            .set(&DataKey::CounselorVerifier, &counselor_verifier);
        env.storage()
            .instance()
            .set(&DataKey::MatchRecorder, &match_recorder);
        env.storage()
            .instance()
            .set(&DataKey::SessionRecorder, &session_recorder);
        env.storage()
            .instance()
            .set(&DataKey::MaxReferrals, &max_referrals);
        env.storage()
            .instance()
            .set(&DataKey::ReferralCounter, &0u64);

        Ok(())
    }

    /// Get the admin address.
    pub fn admin(env: Env) -> Result<Address, Error> {
        env.storage()
            .instance()
            .get(&DataKey::Admin)
            .ok_or(Error::NotInitialized)
    }

    // ========== Referral Creation ==========

    /// Create a new referral.
    ///
    /// The referral starts in `Open` status with no counselor
    /// assigned. Checks run in a fixed order and the first failure
    /// wins; the victim's registration with the identity registry is
    /// checked last.
    ///
    /// # Returns
    /// The id of the new referral. Ids are dense and assigned in
    /// strictly increasing order starting at 0.
    #[allow(clippy::too_many_arguments)]
    pub fn create_referral(
        env: Env,
        victim: Address,
        needs: String,
        language: Symbol,
        expertise: String,
        priority: u32,
        anonymity_level: u32,
        location: String,
        availability: String,
        followup_required: bool,
        emergency_flag: bool,
        referral_type: Symbol,
        duration: u32,
        cost: i128,
        payment_status: Symbol,
    ) -> Result<u64, Error> {
        victim.require_auth();

        let referral_id = Self::counter(&env)?;
        let max_referrals: u64 = env
            .storage()
            .instance()
            .get(&DataKey::MaxReferrals)
            .ok_or(Error::NotInitialized)?;
        if referral_id >= max_referrals {
            return Err(Error::MaxReferralsExceeded);
        }

        if !validation::validate_text(&needs) {
            return Err(Error::InvalidNeeds);
        }
        let language =
            validation::parse_language(&env, &language).ok_or(Error::InvalidLanguage)?;
        if !validation::validate_text(&expertise) {
            return Err(Error::InvalidExpertise);
        }
        if !validation::validate_priority(priority) {
            return Err(Error::InvalidPriority);
        }
        if !validation::validate_anonymity_level(anonymity_level) {
            return Err(Error::InvalidAnonymityLevel);
        }
        if !validation::validate_text(&location) {
            return Err(Error::InvalidLocation);
        }
        if !validation::validate_text(&availability) {
            return Err(Error::InvalidAvailability);
        }
        let referral_type = validation::parse_referral_type(&env, &referral_type)
            .ok_or(Error::InvalidReferralType)?;
        if !validation::validate_duration(duration) {
            return Err(Error::InvalidDuration);
        }
        if !validation::validate_cost(cost) {
            return Err(Error::InvalidCost);
        }
        let payment_status = validation::parse_payment_status(&env, &payment_status)
            .ok_or(Error::InvalidPaymentStatus)?;

        let registry = IdentityRegistryClient::new(&env, &Self::collaborator(&env, &DataKey::IdentityRegistry)?);
        if !registry.has_role(&victim, &VICTIM_ROLE) {
            return Err(Error::VictimNotRegistered);
        }

        let referral = Referral {
            victim: victim.clone(),
            counselor: None,
            status: ReferralStatus::Open,
            created_at: env.ledger().sequence() as u64,
            needs,
            language,
            expertise,
            priority,
            anonymity_level,
            location,
            availability,
            followup_required,
            feedback_score: None,
            emergency_flag,
            referral_type,
            duration,
            cost,
            payment_status,
        };

        Self::write_referral(&env, referral_id, &referral);

        // Append to the victim's index
        let key = DataKey::VictimReferrals(victim.clone());
        let mut index: Vec<u64> = env
            .storage()
            .persistent()
            .get(&key)
            .unwrap_or_else(|| Vec::new(&env));
        index.push_back(referral_id);
        env.storage().persistent().set(&key, &index);
        env.storage()
            .persistent()
            .extend_ttl(&key, REFERRAL_TTL_THRESHOLD, REFERRAL_TTL_EXTEND);

        env.storage()
            .instance()
            .set(&DataKey::ReferralCounter, &(referral_id + 1));

        emit_referral_created(&env, referral_id, &victim);

        Ok(referral_id)
    }

    // ========== Lifecycle Transitions ==========

    /// Accept an open referral on behalf of a verified counselor.
    ///
    /// The counselor must pass credential verification and the match
    /// recorder must log the pairing; either failure aborts the whole
    /// operation with no state change.
    pub fn accept_referral(
        env: Env,
        referral_id: u64,
        counselor: Address,
        caller: Address,
    ) -> Result<(), Error> {
        caller.require_auth();

        let mut referral = Self::read_referral(&env, referral_id)?;
        if referral.status != ReferralStatus::Open {
            return Err(Error::InvalidStatus);
        }

        let verifier = CounselorVerifierClient::new(
            &env,
            &Self::collaborator(&env, &DataKey::CounselorVerifier)?,
        );
        if !verifier.is_verified(&counselor) {
            return Err(Error::CounselorNotVerified);
        }

        let recorder =
            MatchRecorderClient::new(&env, &Self::collaborator(&env, &DataKey::MatchRecorder)?);
        if !recorder.record_match(&referral_id, &counselor) {
            return Err(Error::MatchingFailed);
        }

        referral.counselor = Some(counselor.clone());
        referral.status = ReferralStatus::Accepted;
        Self::write_referral(&env, referral_id, &referral);
        Self::record_update(
            &env,
            referral_id,
            ReferralStatus::Accepted,
            &caller,
            String::from_str(&env, "Counselor accepted the referral"),
        );

        emit_referral_accepted(&env, referral_id, &counselor);

        Ok(())
    }

    /// Update a referral's status directly.
    ///
    /// Only the referral's victim or its assigned counselor may call
    /// this. Any transition between distinct statuses is permitted;
    /// only self-transitions are rejected. This coexists with the
    /// guarded single-purpose transitions as a deliberate escape
    /// hatch.
    pub fn update_referral_status(
        env: Env,
        referral_id: u64,
        new_status: Symbol,
        reason: String,
        caller: Address,
    ) -> Result<(), Error> {
        caller.require_auth();

        let mut referral = Self::read_referral(&env, referral_id)?;
        if !referral.is_party(&caller) {
            return Err(Error::NotAuthorized);
        }
        let new_status =
            validation::parse_status(&env, &new_status).ok_or(Error::InvalidStatus)?;
        if !validation::validate_text(&reason) {
            return Err(Error::InvalidUpdateReason);
        }
        if referral.status == new_status {
            return Err(Error::StatusUpdateNotAllowed);
        }

        referral.status = new_status;
        Self::write_referral(&env, referral_id, &referral);
        Self::record_update(&env, referral_id, new_status, &caller, reason);

        emit_status_updated(&env, referral_id, new_status);

        Ok(())
    }

    /// Record the victim's feedback score for a completed referral.
    ///
    /// No update record is written for feedback.
    pub fn provide_feedback(
        env: Env,
        referral_id: u64,
        score: u32,
        caller: Address,
    ) -> Result<(), Error> {
        caller.require_auth();

        let mut referral = Self::read_referral(&env, referral_id)?;
        if referral.victim != caller {
            return Err(Error::NotAuthorized);
        }
        if referral.status != ReferralStatus::Completed {
            return Err(Error::InvalidStatus);
        }
        if !validation::validate_feedback(score) {
            return Err(Error::InvalidFeedback);
        }

        referral.feedback_score = Some(score);
        Self::write_referral(&env, referral_id, &referral);

        emit_feedback_recorded(&env, referral_id, score);

        Ok(())
    }

    /// Close a referral.
    ///
    /// Reachable from every status except `Closed`, including `Open`
    /// and `Rejected`. The record persists for audit; nothing is
    /// deleted.
    pub fn close_referral(
        env: Env,
        referral_id: u64,
        reason: String,
        caller: Address,
    ) -> Result<(), Error> {
        caller.require_auth();

        let mut referral = Self::read_referral(&env, referral_id)?;
        if !referral.is_party(&caller) {
            return Err(Error::NotAuthorized);
        }
        if referral.status == ReferralStatus::Closed {
            return Err(Error::InvalidStatus);
        }
        if !validation::validate_text(&reason) {
            return Err(Error::InvalidUpdateReason);
        }

        referral.status = ReferralStatus::Closed;
        Self::write_referral(&env, referral_id, &referral);
        Self::record_update(&env, referral_id, ReferralStatus::Closed, &caller, reason);

        emit_referral_closed(&env, referral_id, &caller);

        Ok(())
    }

    /// Reject an accepted referral.
    ///
    /// Only the currently assigned counselor may reject. The counselor
    /// assignment is cleared, returning the referral to an unassigned
    /// state.
    pub fn reject_referral(
        env: Env,
        referral_id: u64,
        reason: String,
        caller: Address,
    ) -> Result<(), Error> {
        caller.require_auth();

        let mut referral = Self::read_referral(&env, referral_id)?;
        // An absent counselor can never equal the caller, so this also
        // covers unassigned referrals.
        if referral.counselor != Some(caller.clone()) {
            return Err(Error::NotAuthorized);
        }
        if referral.status != ReferralStatus::Accepted {
            return Err(Error::InvalidStatus);
        }
        if !validation::validate_text(&reason) {
            return Err(Error::InvalidUpdateReason);
        }

        referral.status = ReferralStatus::Rejected;
        referral.counselor = None;
        Self::write_referral(&env, referral_id, &referral);
        Self::record_update(&env, referral_id, ReferralStatus::Rejected, &caller, reason);

        emit_referral_rejected(&env, referral_id, &caller);

        Ok(())
    }

    // ========== Sessions ==========

    /// Start a counseling session on an accepted referral.
    ///
    /// Carries no caller identity check: any caller may start a
    /// session once a referral is accepted. The session recorder must
    /// log the start; its failure aborts the operation.
    pub fn start_session(env: Env, referral_id: u64) -> Result<(), Error> {
        let mut referral = Self::read_referral(&env, referral_id)?;
        if referral.status != ReferralStatus::Accepted {
            return Err(Error::InvalidStatus);
        }
        if referral.counselor.is_none() {
            return Err(Error::CounselorNotVerified);
        }

        let recorder =
            SessionRecorderClient::new(&env, &Self::collaborator(&env, &DataKey::SessionRecorder)?);
        if !recorder.record_start(&referral_id) {
            return Err(Error::MatchingFailed);
        }

        referral.status = ReferralStatus::InProgress;
        Self::write_referral(&env, referral_id, &referral);

        emit_session_started(&env, referral_id);

        Ok(())
    }

    /// Complete an in-progress counseling session.
    pub fn complete_session(env: Env, referral_id: u64) -> Result<(), Error> {
        let mut referral = Self::read_referral(&env, referral_id)?;
        if referral.status != ReferralStatus::InProgress {
            return Err(Error::InvalidStatus);
        }

        let recorder =
            SessionRecorderClient::new(&env, &Self::collaborator(&env, &DataKey::SessionRecorder)?);
        if !recorder.record_complete(&referral_id) {
            return Err(Error::MatchingFailed);
        }

        referral.status = ReferralStatus::Completed;
        Self::write_referral(&env, referral_id, &referral);

        emit_session_completed(&env, referral_id);

        Ok(())
    }

    // ========== Queries ==========

    /// Get a referral by id.
    pub fn get_referral(env: Env, referral_id: u64) -> Option<Referral> {
        env.storage()
            .persistent()
            .get(&DataKey::Referral(referral_id))
    }

    /// Get the latest update record for a referral.
    pub fn get_referral_update(env: Env, referral_id: u64) -> Option<ReferralUpdate> {
        env.storage().persistent().get(&DataKey::Update(referral_id))
    }

    /// Get the ids of all referrals created by a victim, in creation
    /// order.
    pub fn get_victim_referrals(env: Env, victim: Address) -> Vec<u64> {
        env.storage()
            .persistent()
            .get(&DataKey::VictimReferrals(victim))
            .unwrap_or_else(|| Vec::new(&env))
    }

    /// Get the number of referrals created so far.
    pub fn referral_count(env: Env) -> u64 {
        env.storage()
            .instance()
            .get(&DataKey::ReferralCounter)
            .unwrap_or(0)
    }

    /// Get the referral capacity.
    pub fn max_referrals(env: Env) -> u64 {
        env.storage()
            .instance()
            .get(&DataKey::MaxReferrals)
            .unwrap_or(0)
    }

    // ========== Admin Functions ==========

    /// Upgrade the contract WASM (admin only).
    pub fn upgrade(env: Env, new_wasm_hash: BytesN<32>) -> Result<(), Error> {
        let admin: Address = env
            .storage()
            .instance()
            .get(&DataKey::Admin)
            .ok_or(Error::NotInitialized)?;

        admin.require_auth();

        env.deployer().update_current_contract_wasm(new_wasm_hash);

        Ok(())
    }

    // ========== Internal Helpers ==========

    fn counter(env: &Env) -> Result<u64, Error> {
        env.storage()
            .instance()
            .get(&DataKey::ReferralCounter)
            .ok_or(Error::NotInitialized)
    }

    fn collaborator(env: &Env, key: &DataKey) -> Result<Address, Error> {
        env.storage().instance().get(key).ok_or(Error::NotInitialized)
    }

    fn read_referral(env: &Env, referral_id: u64) -> Result<Referral, Error> {
        env.storage()
            .persistent()
            .get(&DataKey::Referral(referral_id))
            .ok_or(Error::ReferralNotFound)
    }

    fn write_referral(env: &Env, referral_id: u64, referral: &Referral) {
        let key = DataKey::Referral(referral_id);
        env.storage().persistent().set(&key, referral);
        env.storage()
            .persistent()
            .extend_ttl(&key, REFERRAL_TTL_THRESHOLD, REFERRAL_TTL_EXTEND);
    }

    fn record_update(
        env: &Env,
        referral_id: u64,
        status: ReferralStatus,
        updater: &Address,
        reason: String,
    ) {
        let update = ReferralUpdate {
            status,
            timestamp: env.ledger().sequence() as u64,
            updater: updater.clone(),
            reason,
        };
        let key = DataKey::Update(referral_id);
        env.storage().persistent().set(&key, &update);
        env.storage()
            .persistent()
            .extend_ttl(&key, REFERRAL_TTL_THRESHOLD, REFERRAL_TTL_EXTEND);
    }
}
