//! Fuzz target for the DSN parser.
//!
//! Feeds arbitrary strings to the parser. Parsing must never panic and must
//! always preserve the raw input.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_parse
//! ```

#![no_main]

use dsn_parser::{ParsedDsn, decode_parameters, parse_host_list};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        let dsn = ParsedDsn::parse(input);
        assert_eq!(dsn.dsn(), input);
        assert_eq!(dsn.is_valid(), dsn.validate().is_ok());

        for host in dsn.hosts() {
            assert!(!host.host().is_empty());
            assert!(!host.host().contains([':', '/', '?', '#', ',', ';', '(', ')', '@']));
            assert!(!host.host().chars().any(char::is_whitespace));
            assert!(!host.host().starts_with('!'));
        }

        let _ = decode_parameters(input);
        let _ = parse_host_list(input);
    }
});
