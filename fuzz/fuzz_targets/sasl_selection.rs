#![no_main]

use libfuzzer_sys::fuzz_target;
use proton_sasl::{find_matching_mechanism, LocalPrincipal};
use std::collections::HashSet;

// Treat the input as a NUL-separated mechanism offer. Selection must never
// panic and must only ever return a mechanism the peer offered.
fuzz_target!(|data: &[u8]| {
    let text = String::from_utf8_lossy(data);
    let offer: Vec<&str> = text.split('\0').collect();
    let principal = LocalPrincipal::new("CN=fuzz");
    if let Some(m) = find_matching_mechanism(Some("user"), Some("pass"), Some(&principal), &HashSet::new(), &offer) {
        assert!(offer.contains(&m.name()));
    }
});
