// Host-side tests for the catalog registry and the product/weight state.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core {
    pub mod blend {
        include!("../src/core/blend.rs");
    }
    pub mod catalog {
        include!("../src/core/catalog.rs");
    }
    pub mod color {
        include!("../src/core/color.rs");
    }
    pub mod schema {
        include!("../src/core/schema.rs");
    }
    pub mod state {
        include!("../src/core/state.rs");
    }
}

use crate::core::blend::*;
use crate::core::catalog::*;
use crate::core::color::*;
use crate::core::schema::*;
use crate::core::state::*;

fn plain(key: &'static str) -> Ingredient {
    Ingredient {
        key,
        name: key,
        emoji: "",
        color: "#808080",
        health: Attributes(&[("respiratory", 5.0)]),
        flavor: Attributes(&[("sweet", 5.0)]),
    }
}

fn product(id: &'static str, available: bool) -> Product {
    Product {
        id,
        name: id,
        description: "",
        accent: "#000000",
        available,
        ingredients: ["a", "b", "c"],
    }
}

fn small_catalog() -> Catalog {
    Catalog::new(
        vec![plain("a"), plain("b"), plain("c")],
        vec![
            product("open", true),
            product("soon", false),
            product("other", true),
        ],
    )
    .expect("valid catalog")
}

#[test]
fn builtin_catalog_resolves_three_slots_per_product() {
    let catalog = Catalog::builtin().expect("builtin catalog");
    let ids: Vec<_> = catalog.products().iter().map(|p| p.id).collect();
    assert_eq!(ids, ["british", "asian", "hibiscus", "minty"]);
    for p in catalog.products() {
        assert_eq!(catalog.slots(p).len(), SLOT_COUNT, "{}", p.id);
    }
    let british: Vec<_> = catalog
        .slots(catalog.product("british").expect("british"))
        .iter()
        .map(|i| i.name)
        .collect();
    assert_eq!(british, ["카카오", "도라지", "홍차"]);
}

#[test]
fn builtin_ingredients_define_every_axis_in_range() {
    let catalog = Catalog::builtin().expect("builtin catalog");
    for p in catalog.products() {
        for ing in catalog.slots(p) {
            assert!(Rgb::from_hex(ing.color).is_some(), "{} color", ing.key);
            for schema in [HEALTH_SCHEMA, FLAVOR_SCHEMA] {
                for axis in schema.axes {
                    let table = ing.attributes(schema.facet);
                    assert!(
                        table.0.iter().any(|(k, _)| *k == axis.key),
                        "{} lacks {}",
                        ing.key,
                        axis.key
                    );
                    let v = table.get(axis.key);
                    assert!((0.0..=ATTRIBUTE_MAX).contains(&v));
                }
            }
        }
    }
}

#[test]
fn shared_cacao_is_stored_once() {
    let catalog = Catalog::builtin().expect("builtin catalog");
    let hibiscus = catalog.slots(catalog.product("hibiscus").expect("hibiscus"));
    let minty = catalog.slots(catalog.product("minty").expect("minty"));
    assert!(std::ptr::eq(hibiscus[0], minty[0]));
    assert!(std::ptr::eq(hibiscus[0], catalog.ingredient("cacao").expect("cacao")));
    // British and Asian cacao differ in roast color and sweetness.
    let british = catalog.slots(catalog.product("british").expect("british"));
    let asian = catalog.slots(catalog.product("asian").expect("asian"));
    assert_eq!(british[0].color, "#8B4513");
    assert_eq!(asian[0].color, "#5D4037");
    assert_eq!(british[0].flavor.get("sweet"), 3.0);
    assert_eq!(asian[0].flavor.get("sweet"), 1.0);
    assert_eq!(minty[0].flavor.get("sweet"), 2.0);
}

#[test]
fn shared_builtin_catalog_is_built_once_per_thread() {
    let first = Catalog::with_builtin(|c| c.ingredient("cacao").map(|i| i as *const Ingredient))
        .expect("builtin catalog")
        .expect("cacao");
    let second = Catalog::with_builtin(|c| c.ingredient("cacao").map(|i| i as *const Ingredient))
        .expect("builtin catalog")
        .expect("cacao");
    assert_eq!(first, second);

    let british = Catalog::with_builtin(|c| {
        let slots = c.slots(c.product("british").expect("british"));
        Blend::compute(&slots, &Weights::default())
    })
    .expect("builtin catalog");
    let fresh = Catalog::builtin().expect("builtin catalog");
    let expected = Blend::compute(
        &fresh.slots(fresh.product("british").expect("british")),
        &Weights::default(),
    );
    assert_eq!(british, expected);
}

#[test]
fn catalog_rejects_unknown_ingredient() {
    let err = Catalog::new(vec![plain("a"), plain("b")], vec![product("open", true)])
        .expect_err("c is missing");
    assert_eq!(
        err,
        CatalogError::UnknownIngredient {
            product: "open",
            ingredient: "c"
        }
    );
}

#[test]
fn catalog_rejects_duplicates_and_empty() {
    let dup = Catalog::new(
        vec![plain("a"), plain("b"), plain("c")],
        vec![product("x", true), product("x", true)],
    );
    assert_eq!(dup.err(), Some(CatalogError::DuplicateProduct("x")));
    let dup_ingredient = Catalog::new(
        vec![plain("a"), plain("b"), plain("c"), plain("b")],
        vec![product("x", true)],
    );
    assert_eq!(
        dup_ingredient.err(),
        Some(CatalogError::DuplicateIngredient("b"))
    );
    let empty = Catalog::new(vec![plain("a")], vec![]);
    assert_eq!(empty.err(), Some(CatalogError::Empty));
}

#[test]
fn unavailable_product_resolves_to_no_slots() {
    let catalog = small_catalog();
    let soon = catalog.product("soon").expect("soon");
    assert!(catalog.slots(soon).is_empty());
    let blend = Blend::compute(&catalog.slots(soon), &Weights::default());
    assert_eq!(blend.liquid, NEUTRAL_GRAY);
    assert!(blend.health.iter().all(|e| e.value == 0.0));
}

#[test]
fn new_state_starts_on_first_available_product() {
    let state = BlendState::new(Catalog::builtin().expect("builtin")).expect("state");
    assert_eq!(state.active_id(), "british");
    assert_eq!(state.weights(), Weights::new(30, 20, 50));
    assert_eq!(state.active_slots().len(), 3);
}

#[test]
fn switching_product_resets_weights() {
    let mut state = BlendState::new(small_catalog()).expect("state");
    state.set_weight(0, 90);
    state.set_weight(1, 0);
    state.set_weight(2, 7);
    assert_eq!(state.weights(), Weights::new(90, 0, 7));

    let p = state.select_product("other").expect("available");
    assert_eq!(p.id, "other");
    assert_eq!(state.active_id(), "other");
    assert_eq!(state.weights(), Weights::new(30, 20, 50));
}

#[test]
fn reselecting_active_product_also_resets() {
    let mut state = BlendState::new(small_catalog()).expect("state");
    state.set_weight(2, 0);
    state.select_product("open").expect("available");
    assert_eq!(state.weights(), Weights::default());
}

#[test]
fn unavailable_switch_changes_nothing() {
    let mut state = BlendState::new(small_catalog()).expect("state");
    state.set_weight(1, 64);
    let before = state.weights();
    let err = state.select_product("soon").expect_err("unavailable");
    assert_eq!(
        err,
        SwitchError::Unavailable {
            id: "soon",
            name: "soon"
        }
    );
    assert_eq!(state.active_id(), "open");
    assert_eq!(state.weights(), before);
}

#[test]
fn unavailable_switch_error_names_the_product() {
    let soon = Product {
        name: "겨울 한정",
        ..product("winter", false)
    };
    let catalog = Catalog::new(
        vec![plain("a"), plain("b"), plain("c")],
        vec![product("open", true), soon],
    )
    .expect("valid catalog");
    let mut state = BlendState::new(catalog).expect("state");
    let err = state.select_product("winter").expect_err("unavailable");
    assert_eq!(err.to_string(), "겨울 한정 (`winter`) is not available yet");
}

#[test]
fn unknown_switch_changes_nothing() {
    let mut state = BlendState::new(small_catalog()).expect("state");
    state.set_weight(0, 1);
    let err = state.select_product("nope").expect_err("unknown");
    assert_eq!(err, SwitchError::UnknownProduct("nope".to_string()));
    assert_eq!(state.active_id(), "open");
    assert_eq!(state.weights(), Weights::new(1, 20, 50));
}

#[test]
fn set_weight_clamps_and_ignores_bad_slots() {
    let mut state = BlendState::new(small_catalog()).expect("state");
    assert!(state.set_weight(0, 150));
    assert_eq!(state.weights().get(0), Some(WEIGHT_MAX));
    assert!(!state.set_weight(0, 100));
    assert!(!state.set_weight(SLOT_COUNT, 10));
    assert_eq!(state.weights(), Weights::new(100, 20, 50));
}

#[test]
fn derived_tracks_every_mutation() {
    let mut state = BlendState::new(Catalog::builtin().expect("builtin")).expect("state");
    let before = state.derived();
    state.set_weight(0, 0);
    state.set_weight(1, 0);
    state.set_weight(2, 0);
    let zeroed = state.derived();
    assert_ne!(before, zeroed);
    assert_eq!(zeroed.liquid, EMPTY_POT);
    state.select_product("asian").expect("available");
    assert_eq!(state.derived().health.len(), 5);
    assert_ne!(state.derived().liquid, EMPTY_POT);
}

#[test]
fn all_unavailable_catalog_falls_back_to_neutral_output() {
    let catalog = Catalog::new(
        vec![plain("a"), plain("b"), plain("c")],
        vec![product("soon", false)],
    )
    .expect("valid catalog");
    let state = BlendState::new(catalog).expect("state");
    assert_eq!(state.active_id(), "soon");
    let blend = state.derived();
    assert_eq!(blend.liquid, NEUTRAL_GRAY);
    assert!(blend.flavor.iter().all(|e| e.value == 0.0));
}
