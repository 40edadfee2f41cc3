//! Hash domain governance lock tests.
//!
//! Proves:
//! 1. Canonical domain set has expected count (catches forgotten additions to ALL)
//! 2. All domain byte strings are unique (prevents domain collision)
//! 3. All domains follow the `GRIDSTAR::*::V1\0` naming convention
//! 4. No raw `GRIDSTAR::` domain literals in production source outside `hash_domain.rs`
//! 5. Equal payloads hash differently under different domains

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use gridstar_kernel::proof::hash::{canonical_hash, HashDomain};

// ---------------------------------------------------------------------------
// 1. Canonical set count
// ---------------------------------------------------------------------------

#[test]
fn hash_domain_canonical_set_count() {
    assert_eq!(
        HashDomain::ALL.len(),
        4,
        "expected 4 domain variants; if you added a new domain, update this count"
    );
}

// ---------------------------------------------------------------------------
// 2. All unique bytes
// ---------------------------------------------------------------------------

#[test]
fn hash_domain_all_unique_bytes() {
    let mut seen = BTreeSet::new();
    for domain in HashDomain::ALL {
        assert!(
            seen.insert(domain.as_bytes()),
            "duplicate domain bytes: {domain}"
        );
    }
}

// ---------------------------------------------------------------------------
// 3. Naming convention
// ---------------------------------------------------------------------------

#[test]
fn hash_domain_all_follow_naming_convention() {
    for domain in HashDomain::ALL {
        let bytes = domain.as_bytes();
        assert!(
            bytes.starts_with(b"GRIDSTAR::"),
            "{domain} does not start with GRIDSTAR::"
        );
        assert!(
            bytes.ends_with(b"::V1\0"),
            "{domain} does not end with ::V1\\0"
        );
    }
}

// ---------------------------------------------------------------------------
// 4. No raw domain literals outside hash_domain.rs
// ---------------------------------------------------------------------------

fn rust_sources(dir: &Path, out: &mut Vec<PathBuf>) {
    let Ok(entries) = std::fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            rust_sources(&path, out);
        } else if path.extension().is_some_and(|e| e == "rs") {
            out.push(path);
        }
    }
}

#[test]
fn no_raw_domain_literals_in_production_source() {
    let root = Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .expect("tests/ exists")
        .parent()
        .expect("workspace root exists");
    let mut files = Vec::new();
    for crate_dir in ["kernel/src", "search/src", "harness/src"] {
        rust_sources(&root.join(crate_dir), &mut files);
    }
    assert!(!files.is_empty(), "no sources found under {}", root.display());

    let needle = concat!("b\"GRIDSTAR", "::");
    for file in files {
        if file.ends_with("hash_domain.rs") {
            continue;
        }
        let text = std::fs::read_to_string(&file).expect("readable source");
        assert!(
            !text.contains(needle),
            "{} contains a raw hash domain literal",
            file.display()
        );
    }
}

// ---------------------------------------------------------------------------
// 5. Domain separation
// ---------------------------------------------------------------------------

#[test]
fn same_payload_differs_across_domains() {
    let payload = b"{}";
    let digests: BTreeSet<String> = HashDomain::ALL
        .iter()
        .map(|d| canonical_hash(*d, payload).as_str().to_string())
        .collect();
    assert_eq!(digests.len(), HashDomain::ALL.len());
}
