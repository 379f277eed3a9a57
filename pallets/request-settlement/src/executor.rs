//! Side-effect execution for pre- and post-calls.

use crate::{Config, Error, LOG_TARGET, types::SideEffectCall};
use codec::DecodeLimit;
use frame::prelude::*;
use polkadot_sdk::{
  frame_support::{dispatch::GetDispatchInfo, storage::with_storage_layer},
  sp_runtime::traits::{Dispatchable, Zero},
};

use crate::AssetOps;

/// Nesting limit when decoding a call payload.
const MAX_CALL_DECODE_DEPTH: u32 = 64;

/// Runs `calls` in order inside one storage layer. The first failure discards the effects of every
/// earlier call in the batch and is returned unchanged.
pub(crate) fn run_all<T: Config>(
  calls: &[SideEffectCall<T>],
  payer: &T::AccountId,
  dispatcher: &T::AccountId,
) -> DispatchResult {
  if calls.is_empty() {
    return Ok(());
  }
  with_storage_layer(|| {
    for (index, call) in calls.iter().enumerate() {
      run_one::<T>(call, payer, dispatcher).inspect_err(|error| {
        log::warn!(
          target: LOG_TARGET,
          "side-effect call {index} to {:?} failed: {error:?}",
          call.target,
        );
      })?;
    }
    Ok(())
  })
}

fn run_one<T: Config>(
  call: &SideEffectCall<T>,
  payer: &T::AccountId,
  dispatcher: &T::AccountId,
) -> DispatchResult {
  if !call.value.is_zero() {
    T::AssetOps::transfer(payer, &call.target, T::NativeAsset::get(), call.value)?;
  }
  if call.payload.is_empty() {
    return Ok(());
  }
  let runtime_call = <T as frame_system::Config>::RuntimeCall::decode_all_with_depth_limit(
    MAX_CALL_DECODE_DEPTH,
    &mut &call.payload[..],
  )
  .map_err(|_| Error::<T>::UndecodableCall)?;
  ensure!(
    runtime_call
      .get_dispatch_info()
      .call_weight
      .all_lte(T::MaxCallWeight::get()),
    Error::<T>::CallTooHeavy
  );
  runtime_call
    .dispatch(frame_system::RawOrigin::Signed(dispatcher.clone()).into())
    .map(|_| ())
    .map_err(|e| e.error)
}
