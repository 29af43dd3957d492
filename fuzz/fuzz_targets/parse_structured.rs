//! Structured fuzzing for the DSN parser.
//!
//! Builds DSNs from generated parts so the fuzzer spends its time on inputs
//! that get past the protocol stage.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_parse_structured
//! ```

#![no_main]

use arbitrary::Arbitrary;
use dsn_parser::ParsedDsn;
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct FuzzHost {
    name: String,
    port: Option<u16>,
    excluded: bool,
}

#[derive(Debug, Arbitrary)]
struct FuzzDsn {
    protocol: String,
    credentials: Option<(String, Option<String>)>,
    hosts: Vec<FuzzHost>,
    path: Option<String>,
    query: Option<String>,
    fragment: Option<String>,
}

impl FuzzDsn {
    fn to_dsn(&self) -> String {
        let mut dsn = format!("{}://", self.protocol);
        if let Some((ref user, ref pass)) = self.credentials {
            dsn.push_str(user);
            if let Some(pass) = pass {
                dsn.push(':');
                dsn.push_str(pass);
            }
            dsn.push('@');
        }
        let hosts: Vec<String> = self
            .hosts
            .iter()
            .map(|h| {
                let mut s = String::new();
                if h.excluded {
                    s.push('!');
                }
                s.push_str(&h.name);
                if let Some(port) = h.port {
                    s.push_str(&format!(":{}", port));
                }
                s
            })
            .collect();
        dsn.push_str(&hosts.join(","));
        if let Some(ref path) = self.path {
            dsn.push('/');
            dsn.push_str(path);
        }
        if let Some(ref query) = self.query {
            dsn.push('?');
            dsn.push_str(query);
        }
        if let Some(ref fragment) = self.fragment {
            dsn.push('#');
            dsn.push_str(fragment);
        }
        dsn
    }
}

fuzz_target!(|input: FuzzDsn| {
    let raw = input.to_dsn();
    let dsn = ParsedDsn::parse(&raw);
    assert_eq!(dsn.dsn(), raw);
    assert_eq!(dsn.is_valid(), dsn.protocol().is_some() && !dsn.hosts().is_empty());
});
