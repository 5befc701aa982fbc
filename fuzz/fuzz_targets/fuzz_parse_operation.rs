#![no_main]

use libfuzzer_sys::fuzz_target;

use smartcalc_core::Operation;

fuzz_target!(|data: &[u8]| {
    let Ok(s) = std::str::from_utf8(data) else {
        return;
    };
    // Parsing never panics; a parsed operation round-trips through its name
    if let Ok(op) = s.parse::<Operation>() {
        assert_eq!(op.name().parse::<Operation>().unwrap(), op);
    }
});
