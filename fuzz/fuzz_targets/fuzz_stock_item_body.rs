//! Fuzz target: JSON deserialization of a `StockItem` create body.
//!
//! Arbitrary bytes must never panic the parser, and anything that does
//! parse must serialize back to an equal item.

#![no_main]

use libfuzzer_sys::fuzz_target;
use stock_core::StockItem;

fuzz_target!(|data: &[u8]| {
    let Ok(item) = serde_json::from_slice::<StockItem>(data) else {
        return;
    };
    let json = serde_json::to_vec(&item).expect("StockItem serialization must not fail");
    let back: StockItem =
        serde_json::from_slice(&json).expect("serialized StockItem must parse again");
    assert_eq!(back, item);
    let _ = item.is_low_stock();
});
