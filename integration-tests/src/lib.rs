//! Integration tests for the settlement protocol.
//!
//! A single test runtime wires the settlement pallet to the real stake ledger and liquidity pool.
//! Two externalities built from it stand in for the claim ledger and the withdraw ledger; the
//! `ChainId` parameter is switched to match whichever one a closure runs against.

#[cfg(test)]
mod runtime;
