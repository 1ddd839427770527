// Interaction state: which product is active and the three slot weights.
//
// The calculator never reads this directly; callers resolve the active slots
// and hand them to `Blend::compute` after every mutation.

use super::blend::{Blend, Weights, SLOT_COUNT, WEIGHT_MAX};
use super::catalog::{Catalog, CatalogError, Product, Slots};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SwitchError {
    #[error("unknown product `{0}`")]
    UnknownProduct(String),
    #[error("{name} (`{id}`) is not available yet")]
    Unavailable { id: &'static str, name: &'static str },
}

#[derive(Clone, Debug)]
pub struct BlendState {
    catalog: Catalog,
    active: &'static str,
    weights: Weights,
}

impl BlendState {
    /// Start on the catalog's default product with default weights.
    pub fn new(catalog: Catalog) -> Result<Self, CatalogError> {
        let active = catalog.default_product().ok_or(CatalogError::Empty)?.id;
        Ok(Self {
            catalog,
            active,
            weights: Weights::default(),
        })
    }

    #[inline]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[inline]
    pub fn weights(&self) -> Weights {
        self.weights
    }

    #[inline]
    pub fn active_id(&self) -> &'static str {
        self.active
    }

    pub fn active_product(&self) -> Option<&Product> {
        self.catalog.product(self.active)
    }

    /// Ingredients bound to slots 0..3 of the active product.
    pub fn active_slots(&self) -> Slots<'_> {
        match self.active_product() {
            Some(p) => self.catalog.slots(p),
            None => Slots::new(),
        }
    }

    /// Switch the active product. On success the weights go back to the
    /// defaults, whatever the product; on error nothing changes.
    pub fn select_product(&mut self, id: &str) -> Result<&Product, SwitchError> {
        let product = self
            .catalog
            .product(id)
            .ok_or_else(|| SwitchError::UnknownProduct(id.to_string()))?;
        if !product.available {
            return Err(SwitchError::Unavailable {
                id: product.id,
                name: product.name,
            });
        }
        self.active = product.id;
        self.weights = Weights::default();
        log::info!("[state] product={} weights={:?}", product.id, self.weights.0);
        Ok(product)
    }

    /// Set one slot from the slider. Values above the slider range are clamped
    /// and unknown slots are ignored. Returns whether anything changed.
    pub fn set_weight(&mut self, slot: usize, value: u32) -> bool {
        if slot >= SLOT_COUNT {
            return false;
        }
        let value = value.min(WEIGHT_MAX);
        let changed = self.weights.0[slot] != value;
        self.weights.0[slot] = value;
        changed
    }

    /// Recompute everything the widget displays for the current state.
    pub fn derived(&self) -> Blend {
        let slots = self.active_slots();
        let blend = Blend::compute(&slots, &self.weights);
        log::debug!(
            "[blend] product={} weights={:?} liquid={}",
            self.active,
            self.weights.0,
            blend.liquid
        );
        blend
    }
}
