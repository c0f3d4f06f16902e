use std::sync::Arc;

use flagrules::{
    BlacklistCondition, Condition, Dimension, FetchVector, RawFlag, RelationalCondition, Rule,
    WhitelistCondition,
};
use proptest::prelude::*;
use serde_json::{Value, json};

// --- Fixed dimension schema ---
// zone          : one of ZONES
// hostname      : one of HOSTS
// tenant        : one of TENANTS
// vespa-version : "{major}.{minor}.{micro}" with small components

pub const ZONES: &[&str] = &["prod", "staging", "dev", "perf"];
pub const HOSTS: &[&str] = &["host1", "host2", "host3"];
pub const TENANTS: &[&str] = &["acme", "globex", "initech"];

fn arb_version() -> impl Strategy<Value = String> {
    (0_u32..10, 0_u32..5, 0_u32..5).prop_map(|(a, b, c)| format!("{a}.{b}.{c}"))
}

/// Generate a fetch vector where each dimension of the schema may be absent.
pub fn arb_fetch_vector() -> impl Strategy<Value = FetchVector> {
    (
        prop::option::of(prop::sample::select(ZONES)),
        prop::option::of(prop::sample::select(HOSTS)),
        prop::option::of(prop::sample::select(TENANTS)),
        prop::option::of(arb_version()),
    )
        .prop_map(|(zone, host, tenant, version)| {
            let mut v = FetchVector::new();
            if let Some(z) = zone {
                v.insert(Dimension::Zone, z);
            }
            if let Some(h) = host {
                v.insert(Dimension::Hostname, h);
            }
            if let Some(t) = tenant {
                v.insert(Dimension::Tenant, t);
            }
            if let Some(ver) = version {
                v.insert(Dimension::VespaVersion, ver);
            }
            v
        })
}

fn arb_list_dimension() -> impl Strategy<Value = (Dimension, &'static [&'static str])> {
    prop_oneof![
        Just((Dimension::Zone, ZONES)),
        Just((Dimension::Hostname, HOSTS)),
        Just((Dimension::Tenant, TENANTS)),
    ]
}

/// Generate one of the built-in conditions over the schema.
pub fn arb_condition() -> impl Strategy<Value = Arc<dyn Condition>> {
    let list = arb_list_dimension().prop_flat_map(|(dim, domain)| {
        (
            prop::sample::subsequence(domain.to_vec(), 0..=domain.len()),
            any::<bool>(),
        )
            .prop_map(move |(values, white)| -> Arc<dyn Condition> {
                if white {
                    Arc::new(WhitelistCondition::new(dim, values))
                } else {
                    Arc::new(BlacklistCondition::new(dim, values))
                }
            })
    });

    let relational = (
        prop::sample::select(&["<", "<=", ">", ">="][..]),
        arb_version(),
    )
        .prop_map(|(op, version)| -> Arc<dyn Condition> {
            Arc::new(
                RelationalCondition::new(&format!("{op}{version}"))
                    .expect("generated predicate should parse"),
            )
        });

    prop_oneof![3 => list, 1 => relational]
}

/// Generate an optional flag value of a few JSON shapes.
pub fn arb_value() -> impl Strategy<Value = Option<RawFlag>> {
    prop::option::of(prop_oneof![
        any::<bool>().prop_map(RawFlag::from),
        Just(RawFlag::from(Value::Null)),
        any::<i64>().prop_map(RawFlag::from),
        "[a-z]{0,8}".prop_map(|s| RawFlag::from(s.as_str())),
        (any::<bool>(), 0_u32..100)
            .prop_map(|(enabled, limit)| RawFlag::from(json!({"enabled": enabled, "limit": limit}))),
    ])
}

/// Generate a rule with 0..=5 conditions.
pub fn arb_rule() -> impl Strategy<Value = Rule> {
    (prop::collection::vec(arb_condition(), 0..=5), arb_value())
        .prop_map(|(conditions, value)| Rule::new(value, conditions))
}
