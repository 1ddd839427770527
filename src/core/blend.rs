use super::catalog::Ingredient;
use super::color::{liquid_color, Rgba};
use super::schema::{AxisSchema, FLAVOR_SCHEMA, HEALTH_SCHEMA};
use smallvec::SmallVec;

pub const SLOT_COUNT: usize = 3;
pub const WEIGHT_MAX: u32 = 100;
pub const DEFAULT_WEIGHTS: [u32; SLOT_COUNT] = [30, 20, 50];

/// Positional mixing weights: slot `i` always pairs with ingredient `i` of
/// the active product.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Weights(pub [u32; SLOT_COUNT]);

impl Default for Weights {
    fn default() -> Self {
        Self(DEFAULT_WEIGHTS)
    }
}

impl Weights {
    #[inline]
    pub fn new(w0: u32, w1: u32, w2: u32) -> Self {
        Self([w0, w1, w2])
    }

    #[inline]
    pub fn slots(&self) -> &[u32; SLOT_COUNT] {
        &self.0
    }

    #[inline]
    pub fn get(&self, slot: usize) -> Option<u32> {
        self.0.get(slot).copied()
    }

    #[inline]
    pub fn total(&self) -> u64 {
        // Widened so caller-supplied weights near u32::MAX cannot overflow.
        self.0.iter().map(|&w| w as u64).sum()
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProfileEntry {
    pub key: &'static str,
    pub label: &'static str,
    pub value: f64,
    pub full_mark: Option<f64>,
}

pub type Profile = SmallVec<[ProfileEntry; 5]>;

/// Round to one decimal place (half away from zero on the scaled value).
#[inline]
pub fn round_tenths(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}

/// Weighted average of one attribute schema over the active ingredients.
///
/// Used for both the health and the flavor profile. An empty ingredient list
/// or a zero total weight yields every axis at 0.
pub fn profile(schema: &AxisSchema, ingredients: &[&Ingredient], weights: &Weights) -> Profile {
    let total = weights.total();
    let degenerate = ingredients.is_empty() || total == 0;

    schema
        .axes
        .iter()
        .map(|axis| {
            let value = if degenerate {
                0.0
            } else {
                let weighted_sum: f64 = ingredients
                    .iter()
                    .zip(weights.slots().iter())
                    .map(|(ing, &w)| ing.attributes(schema.facet).get(axis.key) * w as f64)
                    .sum();
                round_tenths(weighted_sum / total as f64)
            };
            ProfileEntry {
                key: axis.key,
                label: axis.label,
                value,
                full_mark: schema.full_mark,
            }
        })
        .collect()
}

/// Everything the presentation layer draws for one (ingredients, weights) pair.
#[derive(Clone, Debug, PartialEq)]
pub struct Blend {
    pub liquid: Rgba,
    pub health: Profile,
    pub flavor: Profile,
}

impl Blend {
    pub fn compute(ingredients: &[&Ingredient], weights: &Weights) -> Self {
        Self {
            liquid: liquid_color(ingredients, weights),
            health: profile(&HEALTH_SCHEMA, ingredients, weights),
            flavor: profile(&FLAVOR_SCHEMA, ingredients, weights),
        }
    }
}
