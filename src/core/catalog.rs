// Ingredient registry and product catalog.
//
// Ingredients are stored once, keyed by ingredient key; products only hold
// the keys of their three slots. Lookups go through `Catalog`, which
// validates every reference when it is built.

use super::blend::SLOT_COUNT;
use super::schema::{Attributes, Facet};
use fnv::FnvHashMap;
use smallvec::SmallVec;
use thiserror::Error;

#[derive(Clone, Debug, PartialEq)]
pub struct Ingredient {
    pub key: &'static str,
    pub name: &'static str,
    pub emoji: &'static str,
    /// `#RRGGBB`
    pub color: &'static str,
    pub health: Attributes,
    pub flavor: Attributes,
}

impl Ingredient {
    #[inline]
    pub fn attributes(&self, facet: Facet) -> &Attributes {
        match facet {
            Facet::Health => &self.health,
            Facet::Flavor => &self.flavor,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Product {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub accent: &'static str,
    pub available: bool,
    pub ingredients: [&'static str; SLOT_COUNT],
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("product `{product}` references unknown ingredient `{ingredient}`")]
    UnknownIngredient {
        product: &'static str,
        ingredient: &'static str,
    },
    #[error("duplicate ingredient key `{0}`")]
    DuplicateIngredient(&'static str),
    #[error("duplicate product id `{0}`")]
    DuplicateProduct(&'static str),
    #[error("catalog has no products")]
    Empty,
}

pub type Slots<'a> = SmallVec<[&'a Ingredient; SLOT_COUNT]>;

#[derive(Clone, Debug)]
pub struct Catalog {
    registry: FnvHashMap<&'static str, Ingredient>,
    products: Vec<Product>,
}

impl Catalog {
    pub fn new(ingredients: Vec<Ingredient>, products: Vec<Product>) -> Result<Self, CatalogError> {
        if products.is_empty() {
            return Err(CatalogError::Empty);
        }
        let mut registry = FnvHashMap::default();
        for ing in ingredients {
            let key = ing.key;
            if registry.insert(key, ing).is_some() {
                return Err(CatalogError::DuplicateIngredient(key));
            }
        }
        for (idx, p) in products.iter().enumerate() {
            if products[..idx].iter().any(|q| q.id == p.id) {
                return Err(CatalogError::DuplicateProduct(p.id));
            }
            if let Some(missing) = p.ingredients.iter().find(|k| !registry.contains_key(*k)) {
                return Err(CatalogError::UnknownIngredient {
                    product: p.id,
                    ingredient: *missing,
                });
            }
        }
        Ok(Self { registry, products })
    }

    /// Catalog shipped with the widget.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::new(builtin_ingredients(), builtin_products())
    }

    /// Run `f` against a per-thread builtin catalog, built on first use.
    pub fn with_builtin<R>(f: impl FnOnce(&Catalog) -> R) -> Result<R, CatalogError> {
        thread_local! {
            static BUILTIN: Result<Catalog, CatalogError> = Catalog::builtin();
        }
        BUILTIN.with(|cached| cached.as_ref().map(f).map_err(|e| e.clone()))
    }

    #[inline]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    #[inline]
    pub fn product(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    #[inline]
    pub fn ingredient(&self, key: &str) -> Option<&Ingredient> {
        self.registry.get(key)
    }

    /// First available product, used as the initial selection.
    pub fn default_product(&self) -> Option<&Product> {
        self.products
            .iter()
            .find(|p| p.available)
            .or_else(|| self.products.first())
    }

    /// Resolve a product's slots in order. Unavailable products resolve to no
    /// ingredients, which the calculator maps to its neutral fallbacks.
    pub fn slots(&self, product: &Product) -> Slots<'_> {
        if !product.available {
            return SmallVec::new();
        }
        product
            .ingredients
            .iter()
            .filter_map(|k| self.registry.get(k))
            .collect()
    }
}

const CACAO_HEALTH: Attributes = Attributes(&[
    ("respiratory", 2.0),
    ("immunity", 6.0),
    ("digestion", 4.0),
    ("energy", 5.0),
    ("relaxation", 9.0),
]);

type Table = &'static [(&'static str, f64)];

// Roast variants differ only in color and sweetness.
const CACAO_NIB_FLAVOR: Table = &[("sweet", 3.0), ("bitter", 5.0), ("nutty", 10.0), ("body", 9.0), ("aroma", 6.0)];
const CACAO_DARK_FLAVOR: Table = &[("sweet", 1.0), ("bitter", 5.0), ("nutty", 10.0), ("body", 9.0), ("aroma", 6.0)];
const CACAO_FLAVOR: Table = &[("sweet", 2.0), ("bitter", 5.0), ("nutty", 10.0), ("body", 9.0), ("aroma", 6.0)];

fn cacao(key: &'static str, color: &'static str, flavor: Table) -> Ingredient {
    Ingredient {
        key,
        name: "카카오",
        emoji: "🫘",
        color,
        health: CACAO_HEALTH,
        flavor: Attributes(flavor),
    }
}

fn builtin_ingredients() -> Vec<Ingredient> {
    vec![
        cacao("cacao_nib", "#8B4513", CACAO_NIB_FLAVOR),
        cacao("cacao_dark", "#5D4037", CACAO_DARK_FLAVOR),
        cacao("cacao", "#5D4037", CACAO_FLAVOR),
        Ingredient {
            key: "doraji",
            name: "도라지",
            emoji: "🌾",
            color: "#E8D4A8",
            health: Attributes(&[
                ("respiratory", 10.0),
                ("immunity", 8.0),
                ("digestion", 5.0),
                ("energy", 3.0),
                ("relaxation", 4.0),
            ]),
            flavor: Attributes(&[("sweet", 2.0), ("bitter", 8.0), ("nutty", 5.0), ("body", 4.0), ("aroma", 3.0)]),
        },
        Ingredient {
            key: "black_tea",
            name: "홍차",
            emoji: "🍂",
            color: "#B8423F",
            health: Attributes(&[
                ("respiratory", 3.0),
                ("immunity", 5.0),
                ("digestion", 7.0),
                ("energy", 9.0),
                ("relaxation", 5.0),
            ]),
            flavor: Attributes(&[("sweet", 1.0), ("bitter", 6.0), ("nutty", 4.0), ("body", 6.0), ("aroma", 8.0)]),
        },
        Ingredient {
            key: "oolong",
            name: "우롱차",
            emoji: "🍃",
            color: "#CC9900",
            health: Attributes(&[
                ("respiratory", 4.0),
                ("immunity", 5.0),
                ("digestion", 10.0),
                ("energy", 6.0),
                ("relaxation", 7.0),
            ]),
            flavor: Attributes(&[("sweet", 2.0), ("bitter", 4.0), ("nutty", 6.0), ("body", 5.0), ("aroma", 9.0)]),
        },
        Ingredient {
            key: "yuja",
            name: "유자",
            emoji: "🍋",
            color: "#FFD700",
            health: Attributes(&[
                ("respiratory", 8.0),
                ("immunity", 10.0),
                ("digestion", 7.0),
                ("energy", 8.0),
                ("relaxation", 6.0),
            ]),
            flavor: Attributes(&[("sweet", 1.0), ("bitter", 3.0), ("nutty", 0.0), ("body", 2.0), ("aroma", 10.0)]),
        },
        Ingredient {
            key: "hibiscus",
            name: "히비스커스 꽃잎",
            emoji: "🌺",
            color: "#FF1493",
            health: Attributes(&[
                ("respiratory", 3.0),
                ("immunity", 7.0),
                ("digestion", 10.0),
                ("energy", 6.0),
                ("relaxation", 5.0),
            ]),
            flavor: Attributes(&[("sweet", 1.0), ("bitter", 1.0), ("nutty", 0.0), ("body", 2.0), ("aroma", 9.0)]),
        },
        Ingredient {
            key: "omija",
            name: "문경 오미자",
            emoji: "🫐",
            color: "#DC143C",
            health: Attributes(&[
                ("respiratory", 8.0),
                ("immunity", 9.0),
                ("digestion", 9.0),
                ("energy", 7.0),
                ("relaxation", 4.0),
            ]),
            flavor: Attributes(&[("sweet", 5.0), ("bitter", 4.0), ("nutty", 0.0), ("body", 4.0), ("aroma", 7.0)]),
        },
        Ingredient {
            key: "matcha",
            name: "제주 녹차",
            emoji: "🍵",
            color: "#228B22",
            health: Attributes(&[
                ("respiratory", 5.0),
                ("immunity", 8.0),
                ("digestion", 9.0),
                ("energy", 5.0),
                ("relaxation", 8.0),
            ]),
            flavor: Attributes(&[("sweet", 3.0), ("bitter", 6.0), ("nutty", 5.0), ("body", 5.0), ("aroma", 7.0)]),
        },
        Ingredient {
            key: "mint",
            name: "페퍼민트",
            emoji: "🌿",
            color: "#00FF7F",
            health: Attributes(&[
                ("respiratory", 9.0),
                ("immunity", 4.0),
                ("digestion", 10.0),
                ("energy", 7.0),
                ("relaxation", 9.0),
            ]),
            flavor: Attributes(&[("sweet", 1.0), ("bitter", 2.0), ("nutty", 0.0), ("body", 1.0), ("aroma", 10.0)]),
        },
    ]
}

fn builtin_products() -> Vec<Product> {
    vec![
        Product {
            id: "british",
            name: "브리티쉬 블랙",
            description: "도라지와 홍차의 깊은 풍미",
            accent: "#8B0000",
            available: true,
            ingredients: ["cacao_nib", "doraji", "black_tea"],
        },
        Product {
            id: "asian",
            name: "아시안 골드",
            description: "우롱과 유자의 산뜻한 만남",
            accent: "#D4AF37",
            available: true,
            ingredients: ["cacao_dark", "oolong", "yuja"],
        },
        Product {
            id: "hibiscus",
            name: "히비스커스 프룻",
            description: "오미자와 히비스커스의 완벽한 클렌즈",
            accent: "#E0115F",
            available: true,
            ingredients: ["cacao", "hibiscus", "omija"],
        },
        Product {
            id: "minty",
            name: "민티 쇼콜라",
            description: "제주 녹차와 민트의 상쾌한 휴식",
            accent: "#558B2F",
            available: true,
            ingredients: ["cacao", "matcha", "mint"],
        },
    ]
}
