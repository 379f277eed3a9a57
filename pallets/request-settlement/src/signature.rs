//! Signer recovery for request signatures.

use frame::{hashing::blake2_256, prelude::*};
use polkadot_sdk::{sp_core::ecdsa, sp_io};

/// Recovers the identity that produced `signature` over a 32-byte digest.
///
/// Deciding whether that identity is authorized is left to the caller. Implementations must
/// return `None` for malformed or unrecoverable signatures rather than a placeholder identity.
pub trait RecoverSigner<AccountId> {
  type Signature: Parameter;

  fn recover(digest: &[u8; 32], signature: &Self::Signature) -> Option<AccountId>;
}

/// secp256k1 recovery. The identity is `blake2_256(compressed_public_key)`, the account a
/// `MultiSigner::Ecdsa` resolves to.
pub struct EcdsaRecovery;

impl<AccountId: From<[u8; 32]>> RecoverSigner<AccountId> for EcdsaRecovery {
  type Signature = ecdsa::Signature;

  fn recover(digest: &[u8; 32], signature: &Self::Signature) -> Option<AccountId> {
    let raw = <[u8; 65]>::try_from(AsRef::<[u8]>::as_ref(signature)).ok()?;
    sp_io::crypto::secp256k1_ecdsa_recover_compressed(&raw, digest)
      .ok()
      .map(|public| blake2_256(&public).into())
  }
}
