//! Fuzz target: JSON deserialization of a `QuantityUpdate` body.

#![no_main]

use libfuzzer_sys::fuzz_target;
use stock_core::QuantityUpdate;

fuzz_target!(|data: &[u8]| {
    // Errors are expected; panics are not.
    let _ = serde_json::from_slice::<QuantityUpdate>(data);
});
