//! Common Test Utilities for Settlement Integration Tests
//!
//! Builds one externality per simulated ledger, with the same genesis on each, and provides the
//! keys and request builders shared by the flow tests.

use crate::runtime::{
  AccountId, Balance, ChainId, LiquidityPool, Runtime, RuntimeOrigin, Settlement, System,
};
use hex_literal::hex;
use polkadot_sdk::frame_support::{BoundedVec, assert_ok};
use polkadot_sdk::sp_core::{Pair, ecdsa};
use polkadot_sdk::sp_io::TestExternalities;
use polkadot_sdk::sp_runtime::{AccountId32, BuildStorage, MultiSigner, traits::IdentifyAccount};
use pallet_request_settlement::Request;
use primitives::AssetKind;

pub const CLAIM_CHAIN: u64 = 1;
pub const WITHDRAW_CHAIN: u64 = 2;

/// Unix seconds both ledgers start at.
pub const NOW: u64 = 1_700_000_000;

pub const ASSET_ID: u32 = 1;
pub const ASSET: AssetKind = AssetKind::Local(ASSET_ID);

pub const INITIAL_BALANCE: Balance = 10_000;
pub const POOL_LIQUIDITY: Balance = 1_000;

pub const RELAYER: AccountId = AccountId32::new([1u8; 32]);
pub const LP_PROVIDER: AccountId = AccountId32::new([2u8; 32]);
pub const RECIPIENT: AccountId = AccountId32::new([3u8; 32]);
pub const OWNER: AccountId = AccountId32::new([4u8; 32]);

const OPERATOR_SEED: [u8; 32] =
  hex!("4c0883a69102937d6231471b5dbb6204fe5129617082792ae468d01a3f362318");
const STAKER_SEED: [u8; 32] =
  hex!("8da4ef21b864d2cc526dbdb2a120bd2874c36c9d0a1fb7f8c63d7f7a8b41de8f");

pub fn operator() -> ecdsa::Pair {
  ecdsa::Pair::from_seed(&OPERATOR_SEED)
}

pub fn staker() -> ecdsa::Pair {
  ecdsa::Pair::from_seed(&STAKER_SEED)
}

pub fn account_of(pair: &ecdsa::Pair) -> AccountId {
  MultiSigner::from(pair.public()).into_account()
}

/// One simulated ledger.
pub struct Ledger {
  chain_id: u64,
  ext: TestExternalities,
}

impl Ledger {
  pub fn execute<R>(&mut self, f: impl FnOnce() -> R) -> R {
    ChainId::set(self.chain_id);
    self.ext.execute_with(f)
  }
}

pub fn ledger(chain_id: u64) -> Ledger {
  let mut t = polkadot_sdk::frame_system::GenesisConfig::<Runtime>::default()
    .build_storage()
    .unwrap();

  polkadot_sdk::pallet_balances::GenesisConfig::<Runtime> {
    balances: vec![(RELAYER, INITIAL_BALANCE), (LP_PROVIDER, INITIAL_BALANCE)],
    ..Default::default()
  }
  .assimilate_storage(&mut t)
  .unwrap();

  polkadot_sdk::pallet_assets::GenesisConfig::<Runtime> {
    assets: vec![(ASSET_ID, LP_PROVIDER, true, 1)],
    metadata: vec![],
    accounts: vec![
      (ASSET_ID, LP_PROVIDER, INITIAL_BALANCE),
      (ASSET_ID, account_of(&staker()), INITIAL_BALANCE),
    ],
    reserves: vec![],
    next_asset_id: None,
  }
  .assimilate_storage(&mut t)
  .unwrap();

  pallet_request_settlement::GenesisConfig::<Runtime> { owner: Some(OWNER) }
    .assimilate_storage(&mut t)
    .unwrap();

  pallet_stake_ledger::GenesisConfig::<Runtime>::default()
    .assimilate_storage(&mut t)
    .unwrap();

  pallet_liquidity_pool::GenesisConfig::<Runtime> {
    operators: vec![account_of(&operator())],
  }
  .assimilate_storage(&mut t)
  .unwrap();

  let mut ledger = Ledger {
    chain_id,
    ext: t.into(),
  };
  ledger.execute(|| {
    System::set_block_number(1);
    polkadot_sdk::pallet_timestamp::Now::<Runtime>::put(NOW * 1000);
    assert_ok!(LiquidityPool::provide_liquidity(
      RuntimeOrigin::signed(LP_PROVIDER),
      ASSET,
      POOL_LIQUIDITY
    ));
  });
  ledger
}

/// A request moving `amount` to `RECIPIENT` on the withdraw ledger, reimbursed on the claim
/// ledger.
pub fn request(amount: Balance, fee: Balance, nonce: u128) -> Request<Runtime> {
  Request {
    asset: ASSET,
    amount,
    fee,
    claim_chain_id: CLAIM_CHAIN,
    withdraw_chain_id: WITHDRAW_CHAIN,
    recipient: RECIPIENT,
    pre_calls: BoundedVec::default(),
    post_calls: BoundedVec::default(),
    valid_until: NOW + 3_600,
    valid_after: 0,
    nonce,
  }
}

pub fn sign(pair: &ecdsa::Pair, request: &Request<Runtime>) -> ecdsa::Signature {
  pair.sign_prehashed(&Settlement::request_hash(request).0)
}

pub fn bond(amount: Balance) {
  assert_ok!(crate::runtime::StakeLedger::bond(
    RuntimeOrigin::signed(account_of(&staker())),
    ASSET,
    amount
  ));
}
