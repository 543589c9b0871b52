// Copyright 2026 - developers of the `telepurge` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

// Included by every crate's `lib.rs` under `#[cfg(test)]`. Tests run from
// the crate directory, so both files are found next to each other.
use std::collections::BTreeSet;
use std::fs;

#[test]
fn check_deps_documented() {
    let manifest = fs::read_to_string("Cargo.toml").expect("Cargo.toml must exist");
    let manifest: toml::Table = toml::from_str(&manifest).expect("Cargo.toml must be valid");

    let listed_deps = ["dependencies", "build-dependencies", "dev-dependencies"]
        .iter()
        .filter_map(|key| manifest.get(*key).and_then(toml::Value::as_table))
        .flat_map(|table| table.keys().cloned())
        .collect::<BTreeSet<_>>();

    let documented_deps = fs::read_to_string("DEPS.md")
        .expect("DEPS.md must exist")
        .lines()
        .filter_map(|line| line.strip_prefix("## "))
        .map(|dep| dep.trim().to_string())
        .collect::<BTreeSet<_>>();

    let undocumented = listed_deps.difference(&documented_deps).collect::<Vec<_>>();
    assert!(
        undocumented.is_empty(),
        "some Cargo.toml dependencies are not in DEPS.md: {undocumented:?}"
    );

    let stale = documented_deps.difference(&listed_deps).collect::<Vec<_>>();
    assert!(
        stale.is_empty(),
        "DEPS.md lists dependencies no longer present in Cargo.toml: {stale:?}"
    );
}
