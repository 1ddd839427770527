// Fixed attribute schemas shared by every ingredient.
//
// A schema is an ordered list of axes; declaration order is display order
// for both the radar (health) and the bar chart (flavor).

/// Which attribute table of an ingredient a schema reads from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Facet {
    Health,
    Flavor,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Axis {
    pub key: &'static str,
    pub label: &'static str,
}

#[derive(Clone, Copy, Debug)]
pub struct AxisSchema {
    pub facet: Facet,
    pub axes: &'static [Axis],
    /// Fixed chart ceiling carried on every profile entry (radar only).
    pub full_mark: Option<f64>,
}

impl AxisSchema {
    #[inline]
    pub fn len(&self) -> usize {
        self.axes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.axes.is_empty()
    }
}

pub const ATTRIBUTE_MAX: f64 = 10.0;

pub const HEALTH_AXES: &[Axis] = &[
    Axis { key: "respiratory", label: "호흡기" },
    Axis { key: "immunity", label: "면역력" },
    Axis { key: "digestion", label: "소화" },
    Axis { key: "energy", label: "에너지" },
    Axis { key: "relaxation", label: "릴렉스" },
];

pub const FLAVOR_AXES: &[Axis] = &[
    Axis { key: "sweet", label: "단맛" },
    Axis { key: "bitter", label: "쓴맛" },
    Axis { key: "nutty", label: "고소함" },
    Axis { key: "body", label: "바디감" },
    Axis { key: "aroma", label: "향" },
];

pub const HEALTH_SCHEMA: AxisSchema = AxisSchema {
    facet: Facet::Health,
    axes: HEALTH_AXES,
    full_mark: Some(ATTRIBUTE_MAX),
};

// Bar chart uses a fixed [0, 10] domain instead of a per-entry ceiling.
pub const FLAVOR_SCHEMA: AxisSchema = AxisSchema {
    facet: Facet::Flavor,
    axes: FLAVOR_AXES,
    full_mark: None,
};

/// Per-ingredient attribute values keyed by axis key.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Attributes(pub &'static [(&'static str, f64)]);

impl Attributes {
    /// Value for `key`, or 0 when the table has no such axis.
    #[inline]
    pub fn get(&self, key: &str) -> f64 {
        self.0
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| *v)
            .unwrap_or(0.0)
    }
}
