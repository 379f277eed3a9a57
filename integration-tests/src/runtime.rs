//! Test runtime wiring the settlement pallet to its collaborator pallets.

use polkadot_sdk::frame_support::{
  PalletId, construct_runtime, derive_impl, parameter_types,
  traits::{ConstU32, ConstU64, ConstU128},
  weights::Weight,
};
use polkadot_sdk::frame_system;
use polkadot_sdk::sp_runtime::{AccountId32, traits::IdentityLookup};
use primitives::{
  AssetKind,
  ecosystem::{pallet_ids, params},
};

pub type AccountId = AccountId32;
pub type Balance = u128;

type Block = frame_system::mocking::MockBlock<Runtime>;

construct_runtime!(
  pub struct Runtime {
    System: frame_system,
    Balances: polkadot_sdk::pallet_balances,
    Assets: polkadot_sdk::pallet_assets,
    Timestamp: polkadot_sdk::pallet_timestamp,
    Settlement: pallet_request_settlement,
    StakeLedger: pallet_stake_ledger,
    LiquidityPool: pallet_liquidity_pool,
  }
);

#[derive_impl(frame_system::config_preludes::TestDefaultConfig)]
impl frame_system::Config for Runtime {
  type Block = Block;
  type AccountId = AccountId;
  type Lookup = IdentityLookup<Self::AccountId>;
  type AccountData = polkadot_sdk::pallet_balances::AccountData<Balance>;
}

impl polkadot_sdk::pallet_balances::Config for Runtime {
  type MaxLocks = ();
  type MaxReserves = ();
  type ReserveIdentifier = [u8; 8];
  type Balance = Balance;
  type DustRemoval = ();
  type RuntimeEvent = RuntimeEvent;
  type ExistentialDeposit = ConstU128<1>;
  type AccountStore = System;
  type WeightInfo = ();
  type FreezeIdentifier = ();
  type MaxFreezes = ();
  type RuntimeHoldReason = ();
  type RuntimeFreezeReason = ();
  type DoneSlashHandler = ();
}

impl polkadot_sdk::pallet_assets::Config for Runtime {
  type RuntimeEvent = RuntimeEvent;
  type Balance = Balance;
  type AssetId = u32;
  type AssetIdParameter = u32;
  type Currency = Balances;
  type CreateOrigin = polkadot_sdk::frame_support::traits::AsEnsureOriginWithArg<
    frame_system::EnsureSigned<Self::AccountId>,
  >;
  type ForceOrigin = frame_system::EnsureRoot<Self::AccountId>;
  type AssetDeposit = ConstU128<1>;
  type AssetAccountDeposit = ConstU128<1>;
  type MetadataDepositBase = ConstU128<1>;
  type MetadataDepositPerByte = ConstU128<1>;
  type ApprovalDeposit = ConstU128<1>;
  type StringLimit = ConstU32<50>;
  type Freezer = ();
  type Extra = ();
  type ReserveData = ();
  type CallbackHandle = ();
  type WeightInfo = ();
  type RemoveItemsLimit = ConstU32<5>;
  type Holder = ();
}

impl polkadot_sdk::pallet_timestamp::Config for Runtime {
  type Moment = u64;
  type OnTimestampSet = ();
  type MinimumPeriod = ConstU64<1>;
  type WeightInfo = ();
}

pub type AssetOps = pallet_request_settlement::FungibleAssetOps<Balances, Assets>;

parameter_types! {
  pub static ChainId: u64 = 0;
  pub const NativeAsset: AssetKind = AssetKind::Native;
  pub const SettlementPalletId: PalletId = PalletId(*pallet_ids::SETTLEMENT_PALLET_ID);
  pub const StakeLedgerPalletId: PalletId = PalletId(*pallet_ids::STAKE_LEDGER_PALLET_ID);
  pub const LiquidityPoolPalletId: PalletId = PalletId(*pallet_ids::LIQUIDITY_POOL_PALLET_ID);
  pub const MaxCallWeight: Weight = Weight::from_parts(
    params::SETTLEMENT_MAX_CALL_REF_TIME,
    params::SETTLEMENT_MAX_CALL_PROOF_SIZE,
  );
}

/// Unbonding period in blocks; short so tests can step past it.
pub const UNBONDING_PERIOD: u64 = 20;

impl pallet_request_settlement::Config for Runtime {
  type AssetId = AssetKind;
  type Balance = Balance;
  type NativeAsset = NativeAsset;
  type AssetOps = AssetOps;
  type StakeLedger = StakeLedger;
  type LiquidityPool = LiquidityPool;
  type OperatorRegistry = LiquidityPool;
  type SignerRecovery = pallet_request_settlement::EcdsaRecovery;
  type TimeProvider = Timestamp;
  type ChainId = ChainId;
  type PalletId = SettlementPalletId;
  type AdminOrigin = frame_system::EnsureRoot<AccountId>;
  type MaxCalls = ConstU32<{ params::SETTLEMENT_MAX_CALLS }>;
  type MaxPayloadLen = ConstU32<{ params::SETTLEMENT_MAX_PAYLOAD_LEN }>;
  type MaxClaimBatch = ConstU32<{ params::SETTLEMENT_MAX_CLAIM_BATCH }>;
  type MaxCallWeight = MaxCallWeight;
  type WeightInfo = pallet_request_settlement::weights::SubstrateWeight<Runtime>;
}

impl pallet_stake_ledger::Config for Runtime {
  type AssetId = AssetKind;
  type Balance = Balance;
  type AssetOps = AssetOps;
  type PalletId = StakeLedgerPalletId;
  type UnbondingPeriod = ConstU64<UNBONDING_PERIOD>;
  type WeightInfo = pallet_stake_ledger::weights::SubstrateWeight<Runtime>;
}

impl pallet_liquidity_pool::Config for Runtime {
  type AssetId = AssetKind;
  type Balance = Balance;
  type AssetOps = AssetOps;
  type PalletId = LiquidityPoolPalletId;
  type AdminOrigin = frame_system::EnsureRoot<AccountId>;
  type WeightInfo = pallet_liquidity_pool::weights::SubstrateWeight<Runtime>;
}
