//! Fuzz target: `EcsConfig::from_json`
//!
//! Feeds arbitrary bytes to the config parser and asserts that it never
//! panics and that every accepted config carries an ordered threshold pair
//! which survives a JSON round trip.
//!
//! cargo fuzz run fuzz_config_json

#![no_main]

use ecs::config::EcsConfig;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = core::str::from_utf8(data) else {
        return;
    };

    if let Ok(config) = EcsConfig::from_json(text) {
        assert!(config.lower_threshold <= config.upper_threshold);

        let json = config.to_json().expect("valid config must serialise");
        let again = EcsConfig::from_json(&json).expect("round trip must parse");
        assert_eq!(config, again);
    }
});
