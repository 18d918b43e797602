//! Proptest strategies for inventory source drafts.
//!
//! Generated drafts use plausible AWX values: source kinds from the stock
//! choice list, small object ids, and short YAML variable blocks.

use proptest::prelude::*;

use crate::models::{InventorySourceDraft, NamedRef, Verbosity};

/// Source kinds a stock AWX install offers.
pub const SOURCE_KINDS: &[&str] = &[
    "file", "scm", "ec2", "gce", "azure_rm", "vmware", "satellite6", "openstack", "rhv",
    "controller", "insights",
];

/// Strategy for an optional named reference with a positive id.
pub fn arb_named_ref() -> impl Strategy<Value = Option<NamedRef>> {
    proptest::option::of((1u64..100_000, "[a-z][a-z0-9 _-]{0,24}"))
        .prop_map(|r| r.map(|(id, name)| NamedRef::new(id, name)))
}

/// Strategy for a verbosity level.
pub fn arb_verbosity() -> impl Strategy<Value = Verbosity> {
    prop::sample::select(Verbosity::ALL.to_vec())
}

/// Strategy for a YAML `source_vars` block.
pub fn arb_source_vars() -> impl Strategy<Value = String> {
    prop::collection::vec(("[a-z_]{1,12}", "[a-zA-Z0-9]{0,12}"), 0..4).prop_map(|pairs| {
        let mut vars = String::from("---\n");
        for (key, value) in pairs {
            vars.push_str(&format!("{}: \"{}\"\n", key, value));
        }
        vars
    })
}

/// Strategy for a complete draft.
pub fn arb_draft() -> impl Strategy<Value = InventorySourceDraft> {
    (
        (
            "[A-Za-z][A-Za-z0-9 _-]{0,40}",
            "[ -~]{0,60}",
            prop::sample::select(SOURCE_KINDS.to_vec()),
            "[a-z/_.]{0,30}",
            arb_named_ref(),
            arb_named_ref(),
            proptest::option::of(1u64..100_000),
            proptest::option::of(1u64..100_000),
        ),
        (
            arb_source_vars(),
            any::<bool>(),
            0u32..86_400,
            any::<bool>(),
            any::<bool>(),
            arb_verbosity(),
        ),
    )
        .prop_map(
            |(
                (
                    name,
                    description,
                    source,
                    source_path,
                    source_project,
                    credential,
                    source_script,
                    execution_environment,
                ),
                (source_vars, update_on_launch, cache_timeout, overwrite, overwrite_vars, verbosity),
            )| InventorySourceDraft {
                name,
                description,
                source: source.to_string(),
                source_path,
                source_project,
                credential,
                source_script,
                execution_environment,
                source_vars,
                update_on_launch,
                update_cache_timeout: cache_timeout,
                overwrite,
                overwrite_vars,
                verbosity,
            },
        )
}
