//! Request canonicalization.
//!
//! The identifier of a request is computed in three stages:
//!
//! 1. two sub-digests, one over the validity window and one over the full pre/post call arrays,
//!    so the variable-length part is hashed once and folded in as a fixed 32 bytes;
//! 2. a request digest over the protocol instance, both chain ids, every scalar field and the two
//!    sub-digests, with the chain id pair appended once more;
//! 3. the wallet raw-message wrapping (`<Bytes>` .. `</Bytes>`) hashed again, so a signature over
//!    the identifier is what a wallet produces when asked to sign the request digest and can
//!    never double as a transaction signature.

use crate::{
  Config,
  types::{CallsOf, Request},
};
use alloc::vec::Vec;
use codec::Encode;
use frame::hashing::blake2_256;

pub const SIGNED_MESSAGE_PREFIX: &[u8] = b"<Bytes>";
pub const SIGNED_MESSAGE_SUFFIX: &[u8] = b"</Bytes>";

pub fn window_digest(valid_until: u64, valid_after: u64) -> [u8; 32] {
  (valid_until, valid_after).using_encoded(blake2_256)
}

pub fn calls_digest<T: Config>(pre_calls: &CallsOf<T>, post_calls: &CallsOf<T>) -> [u8; 32] {
  (pre_calls, post_calls).using_encoded(blake2_256)
}

/// Digest binding every field of `request` to the protocol `instance`.
pub fn request_digest<T: Config>(request: &Request<T>, instance: &T::AccountId) -> [u8; 32] {
  let calls = calls_digest::<T>(&request.pre_calls, &request.post_calls);
  let window = window_digest(request.valid_until, request.valid_after);
  (
    instance,
    request.claim_chain_id,
    request.withdraw_chain_id,
    &request.asset,
    &request.amount,
    &request.fee,
    &request.recipient,
    request.nonce,
    calls,
    window,
    (request.claim_chain_id, request.withdraw_chain_id),
  )
    .using_encoded(blake2_256)
}

/// Applies the signed-message domain separation to a 32-byte digest.
pub fn signing_digest(message: &[u8; 32]) -> [u8; 32] {
  let mut wrapped = Vec::with_capacity(
    SIGNED_MESSAGE_PREFIX.len() + message.len() + SIGNED_MESSAGE_SUFFIX.len(),
  );
  wrapped.extend_from_slice(SIGNED_MESSAGE_PREFIX);
  wrapped.extend_from_slice(message);
  wrapped.extend_from_slice(SIGNED_MESSAGE_SUFFIX);
  blake2_256(&wrapped)
}
