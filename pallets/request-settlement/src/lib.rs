//! Request Settlement Pallet
//!
//! Lets an operator front funds from a shared liquidity pool to a user on this ledger, while the
//! user's collateral on another ledger is later seized to pay the pool back plus a fee.
//!
//! A [`Request`] is authored and signed off-chain. It enters the withdraw path on the ledger named
//! by `withdraw_chain_id` (signed by an operator) and, independently, the claim path on the ledger
//! named by `claim_chain_id` (signed by the staking user). The paths share the request hash but
//! keep separate status bits, so they can execute in either order, on different ledgers, without
//! coordination. Each half settles at most once per request hash.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub use pallet::*;

pub mod adapters;
pub use adapters::{AssetOps, FungibleAssetOps, LiquidityPool, OperatorRegistry, StakeLedger};

mod executor;
pub mod hashing;

pub mod paths;
pub use paths::{
  AuthorityCheck, ClaimPath, OperatorAuthority, RequestPath, StakeholderAuthority, WithdrawPath,
};

pub mod signature;
pub use signature::{EcdsaRecovery, RecoverSigner};

pub mod types;
pub use types::{Request, RequestStatus, SideEffectCall, SignatureOf, StatusKind};

pub mod weights;
pub use weights::WeightInfo;


#[cfg(feature = "runtime-benchmarks")]
mod benchmarking;

pub(crate) const LOG_TARGET: &str = "runtime::settlement";

/// Runtime support needed to set up signed requests in benchmarks
#[cfg(feature = "runtime-benchmarks")]
pub trait BenchmarkHelper<AccountId, AssetId, Balance, Signature> {
  /// Asset the benchmarked requests move.
  fn asset() -> AssetId;
  /// Identity of the key at `index`.
  fn signer(index: u32) -> AccountId;
  /// Signs `digest` with the key at `index`.
  fn sign(index: u32, digest: &[u8; 32]) -> Signature;
  fn make_operator(who: &AccountId);
  fn fund_account(
    who: &AccountId,
    asset: AssetId,
    amount: Balance,
  ) -> frame::deps::sp_runtime::DispatchResult;
  fn fund_pool(asset: AssetId, amount: Balance) -> frame::deps::sp_runtime::DispatchResult;
  fn fund_stake(
    who: &AccountId,
    asset: AssetId,
    amount: Balance,
  ) -> frame::deps::sp_runtime::DispatchResult;
}

#[frame::pallet]
pub mod pallet {
  use super::{
    AssetOps, ClaimPath, LiquidityPool, OperatorRegistry, RecoverSigner, StakeLedger, WeightInfo,
    WithdrawPath,
    paths::{AuthorityCheck, RequestPath},
    types::{Request, RequestStatus, SignatureOf, StatusKind},
  };
  use alloc::{boxed::Box, vec::Vec};
  use frame::prelude::*;
  use polkadot_sdk::{
    frame_support::{PalletId, storage::with_storage_layer, traits::UnixTime},
    sp_core::H256,
    sp_runtime::traits::AccountIdConversion,
  };

  #[pallet::config]
  pub trait Config: frame_system::Config<RuntimeEvent: From<Event<Self>>> {
    type AssetId: Parameter + Member + Copy + MaxEncodedLen;

    type Balance: Parameter + Member + AtLeast32BitUnsigned + Default + Copy + MaxEncodedLen;

    /// Asset that side-effect call values are paid in
    #[pallet::constant]
    type NativeAsset: Get<Self::AssetId>;

    /// Token transfer primitive
    type AssetOps: AssetOps<Self::AccountId, Self::AssetId, Self::Balance>;

    /// Collateral ledger seized on claim
    type StakeLedger: StakeLedger<Self::AccountId, Self::AssetId, Self::Balance>;

    /// Pool withdrawals are fronted from
    type LiquidityPool: LiquidityPool<Self::AccountId, Self::AssetId, Self::Balance>;

    /// Identities allowed to authorize withdrawals
    type OperatorRegistry: OperatorRegistry<Self::AccountId>;

    /// Signature scheme of requests
    type SignerRecovery: RecoverSigner<Self::AccountId>;

    /// Clock the validity window is checked against
    type TimeProvider: UnixTime;

    /// Identifier of this ledger, compared with a request's chain ids
    #[pallet::constant]
    type ChainId: Get<u64>;

    /// Derives the settlement account, which is also the protocol instance identity
    #[pallet::constant]
    type PalletId: Get<PalletId>;

    /// Origin that may replace the owner
    type AdminOrigin: EnsureOrigin<Self::RuntimeOrigin>;

    /// Maximum pre-calls, and separately post-calls, per request
    #[pallet::constant]
    type MaxCalls: Get<u32>;

    /// Maximum encoded length of one side-effect payload
    #[pallet::constant]
    type MaxPayloadLen: Get<u32>;

    /// Maximum requests per `claim_many`
    #[pallet::constant]
    type MaxClaimBatch: Get<u32>;

    /// Weight charged for, and the ceiling on, each dispatched side-effect call
    #[pallet::constant]
    type MaxCallWeight: Get<Weight>;

    type WeightInfo: WeightInfo;

    #[cfg(feature = "runtime-benchmarks")]
    type BenchmarkHelper: crate::BenchmarkHelper<
        Self::AccountId,
        Self::AssetId,
        Self::Balance,
        SignatureOf<Self>,
      >;
  }

  #[pallet::pallet]
  pub struct Pallet<T>(_);

  /// Replay guard: settlement status per request hash
  #[pallet::storage]
  pub type RequestStatuses<T> = StorageMap<_, Identity, H256, RequestStatus, ValueQuery>;

  /// Receives claim fees
  #[pallet::storage]
  #[pallet::getter(fn owner)]
  pub type Owner<T: Config> = StorageValue<_, T::AccountId, OptionQuery>;

  /// Set while a path is executing, to reject nested entry into the same path
  #[pallet::storage]
  pub type ExecutingPath<T> = StorageMap<_, Twox64Concat, StatusKind, bool, ValueQuery>;

  #[pallet::event]
  #[pallet::generate_deposit(pub(super) fn deposit_event)]
  pub enum Event<T: Config> {
    /// One half of a request settled
    RequestSettled {
      request_hash: H256,
      kind: StatusKind,
    },
    /// Fee recipient replaced
    OwnerChanged {
      old: Option<T::AccountId>,
      new: T::AccountId,
    },
  }

  #[pallet::error]
  pub enum Error<T> {
    /// Request targets another ledger
    WrongChain,
    /// Past `valid_until`
    Expired,
    /// Before `valid_after`
    NotYetValid,
    /// Signature is malformed or does not recover to a key
    InvalidSignature,
    /// Withdraw signer is not a registered operator
    UnauthorizedOperator,
    /// This half of the request already settled
    AlreadyUsed,
    /// Nested call into a path that is already executing
    Reentrancy,
    /// `claim_many` with no requests
    EmptyBatch,
    /// A fee is due but no owner is set
    OwnerNotSet,
    /// Caller is neither the owner nor the admin origin
    NotOwner,
    /// Side-effect payload is not a valid runtime call
    UndecodableCall,
    /// Side-effect call declares more weight than `MaxCallWeight`
    CallTooHeavy,
    ArithmeticOverflow,
  }

  #[pallet::genesis_config]
  #[derive(frame::prelude::DefaultNoBound)]
  pub struct GenesisConfig<T: Config> {
    pub owner: Option<T::AccountId>,
  }

  #[pallet::genesis_build]
  impl<T: Config> BuildGenesisConfig for GenesisConfig<T> {
    fn build(&self) {
      if let Some(owner) = &self.owner {
        Owner::<T>::put(owner);
      }
      // Settlement account only holds funds in transit and must survive a zero balance
      frame_system::Pallet::<T>::inc_providers(&Pallet::<T>::account_id());
    }
  }

  #[pallet::call]
  impl<T: Config> Pallet<T> {
    /// Front `request.amount` from the pool to `request.recipient`, authorized by an operator
    /// signature over the request hash. Any signed account may submit; it pays the native
    /// `value` of every attached call.
    #[pallet::call_index(0)]
    #[pallet::weight(Pallet::<T>::withdraw_weight(request))]
    pub fn withdraw(
      origin: OriginFor<T>,
      request: Box<Request<T>>,
      signature: SignatureOf<T>,
    ) -> DispatchResult {
      let who = ensure_signed(origin)?;
      Self::settle::<WithdrawPath<T>>(&who, &request, &signature)
    }

    /// Reimburse the pool for `request` from the signer's own stake.
    #[pallet::call_index(1)]
    #[pallet::weight(T::WeightInfo::claim())]
    pub fn claim(
      origin: OriginFor<T>,
      request: Box<Request<T>>,
      signature: SignatureOf<T>,
    ) -> DispatchResult {
      let who = ensure_signed(origin)?;
      Self::settle::<ClaimPath<T>>(&who, &request, &signature)
    }

    /// Claim several requests. All settle or none do.
    #[pallet::call_index(2)]
    #[pallet::weight(T::WeightInfo::claim_many(claims.len() as u32))]
    pub fn claim_many(
      origin: OriginFor<T>,
      claims: BoundedVec<(Request<T>, SignatureOf<T>), T::MaxClaimBatch>,
    ) -> DispatchResult {
      let who = ensure_signed(origin)?;
      ensure!(!claims.is_empty(), Error::<T>::EmptyBatch);
      with_storage_layer(|| {
        for (request, signature) in claims.iter() {
          Self::settle::<ClaimPath<T>>(&who, request, signature)?;
        }
        Ok(())
      })
    }

    /// Replace the fee recipient. Callable by the admin origin or the current owner.
    #[pallet::call_index(3)]
    #[pallet::weight(T::WeightInfo::set_owner())]
    pub fn set_owner(origin: OriginFor<T>, new_owner: T::AccountId) -> DispatchResult {
      Self::ensure_owner_or_admin(origin)?;
      let old = Owner::<T>::get();
      Owner::<T>::put(&new_owner);
      Self::deposit_event(Event::OwnerChanged {
        old,
        new: new_owner,
      });
      Ok(())
    }
  }

  impl<T: Config> Pallet<T> {
    pub fn account_id() -> T::AccountId {
      T::PalletId::get().into_account_truncating()
    }

    /// Identifier a request is signed under and deduplicated by.
    pub fn request_hash(request: &Request<T>) -> H256 {
      let digest = crate::hashing::request_digest::<T>(request, &Self::account_id());
      H256(crate::hashing::signing_digest(&digest))
    }

    pub fn recover_signer(
      request_hash: &H256,
      signature: &SignatureOf<T>,
    ) -> Result<T::AccountId, DispatchError> {
      T::SignerRecovery::recover(request_hash.as_fixed_bytes(), signature)
        .ok_or_else(|| Error::<T>::InvalidSignature.into())
    }

    pub fn status(request_hash: H256) -> RequestStatus {
      RequestStatuses::<T>::get(request_hash)
    }

    pub fn is_withdrawn(request_hash: H256) -> bool {
      Self::status(request_hash).withdrawn
    }

    pub fn is_claimed(request_hash: H256) -> bool {
      Self::status(request_hash).claimed
    }

    /// Current status of every hash in `hashes`, in order.
    pub fn request_statuses(hashes: &[H256]) -> Vec<RequestStatus> {
      hashes.iter().map(|hash| Self::status(*hash)).collect()
    }

    pub fn withdraw_weight(request: &Request<T>) -> Weight {
      let calls = request
        .pre_calls
        .len()
        .saturating_add(request.post_calls.len()) as u32;
      T::WeightInfo::withdraw(calls)
        .saturating_add(T::MaxCallWeight::get().saturating_mul(u64::from(calls)))
    }

    /// Drives one path for one request. Every write, including those made by collaborators and
    /// side-effect calls, is discarded if any step fails. The status bit is set last.
    pub(crate) fn settle<P: RequestPath<T>>(
      submitter: &T::AccountId,
      request: &Request<T>,
      signature: &SignatureOf<T>,
    ) -> DispatchResult {
      with_storage_layer(|| {
        P::validate(request)?;
        let request_hash = Self::request_hash(request);
        let signer = Self::recover_signer(&request_hash, signature)?;
        P::Authority::authorize(&signer)?;
        ensure!(
          !RequestStatuses::<T>::get(request_hash).is_set(P::KIND),
          Error::<T>::AlreadyUsed
        );
        ensure!(!ExecutingPath::<T>::get(P::KIND), Error::<T>::Reentrancy);

        ExecutingPath::<T>::insert(P::KIND, true);
        P::execute(submitter, request, &signer)?;
        ExecutingPath::<T>::remove(P::KIND);

        RequestStatuses::<T>::mutate(request_hash, |status| status.set(P::KIND));
        log::debug!(
          target: crate::LOG_TARGET,
          "request {request_hash:?} settled {:?} by {signer:?}",
          P::KIND,
        );
        Self::deposit_event(Event::RequestSettled {
          request_hash,
          kind: P::KIND,
        });
        Ok(())
      })
    }

    fn ensure_owner_or_admin(origin: OriginFor<T>) -> DispatchResult {
      match T::AdminOrigin::try_origin(origin) {
        Ok(_) => Ok(()),
        Err(origin) => {
          let who = ensure_signed(origin)?;
          ensure!(
            Owner::<T>::get().as_ref() == Some(&who),
            Error::<T>::NotOwner
          );
          Ok(())
        }
      }
    }
  }
}
