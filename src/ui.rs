use crate::charts::ChartCanvas;
use crate::constants::*;
use crate::core::{
    Blend, BlendState, Ingredient, Product, ProfileTween, Weights, ATTRIBUTE_MAX,
    CHART_ANIMATION_SEC, SLOT_COUNT, WEIGHT_MAX,
};
use crate::dom;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct SliderRow {
    pub input: web::HtmlInputElement,
    emoji: web::Element,
    name: web::Element,
    badge: web::Element,
}

/// DOM handles and chart animation state for the whole widget.
pub struct View {
    pub tabs: Vec<(&'static str, web::Element)>,
    pub rows: Vec<SliderRow>,
    health_chart: ChartCanvas,
    flavor_chart: ChartCanvas,
    health_tween: ProfileTween,
    flavor_tween: ProfileTween,
    health_labels: Vec<&'static str>,
    flavor_labels: Vec<&'static str>,
    full_mark: f64,
}

fn create(document: &web::Document, tag: &str, class: &str) -> anyhow::Result<web::Element> {
    let el = document
        .create_element(tag)
        .map_err(|e| anyhow::anyhow!("create <{tag}>: {:?}", e))?;
    el.set_class_name(class);
    Ok(el)
}

fn append(parent: &web::Element, child: &web::Element) -> anyhow::Result<()> {
    parent
        .append_child(child)
        .map(|_| ())
        .map_err(|e| anyhow::anyhow!("append: {:?}", e))
}

fn build_tabs(
    document: &web::Document,
    products: &[Product],
) -> anyhow::Result<Vec<(&'static str, web::Element)>> {
    let container = document
        .get_element_by_id(ID_TABS)
        .ok_or_else(|| anyhow::anyhow!("missing #{ID_TABS}"))?;
    container.set_inner_html("");
    products
        .iter()
        .map(|p| {
            let btn = create(document, "button", TAB_CLASS)?;
            btn.set_text_content(Some(p.name));
            _ = btn.set_attribute("data-product", p.id);
            _ = btn.set_attribute("style", &format!("--accent: {}", p.accent));
            if !p.available {
                _ = btn.class_list().add_1(TAB_DISABLED_CLASS);
            }
            append(&container, &btn)?;
            Ok((p.id, btn))
        })
        .collect()
}

fn build_slider_rows(document: &web::Document) -> anyhow::Result<Vec<SliderRow>> {
    let container = document
        .get_element_by_id(ID_SLIDERS)
        .ok_or_else(|| anyhow::anyhow!("missing #{ID_SLIDERS}"))?;
    container.set_inner_html("");
    (0..SLOT_COUNT)
        .map(|slot| {
            let row = create(document, "div", "slider-row")?;
            let emoji = create(document, "span", "slider-emoji")?;
            let name = create(document, "span", "slider-name")?;
            let input = create(document, "input", "slider-input")?
                .dyn_into::<web::HtmlInputElement>()
                .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
            input.set_type("range");
            input.set_min("0");
            input.set_max(&WEIGHT_MAX.to_string());
            _ = input.set_attribute("data-slot", &slot.to_string());
            let badge = create(document, "span", "slider-badge")?;
            append(&row, &emoji)?;
            append(&row, &name)?;
            append(&row, &input)?;
            append(&row, &badge)?;
            append(&container, &row)?;
            Ok(SliderRow {
                input,
                emoji,
                name,
                badge,
            })
        })
        .collect()
}

impl View {
    pub fn build(document: &web::Document, state: &BlendState) -> anyhow::Result<Self> {
        let tabs = build_tabs(document, state.catalog().products())?;
        let rows = build_slider_rows(document)?;
        let health_chart = ChartCanvas::new(dom::canvas_by_id(document, ID_HEALTH_CHART)?)?;
        let flavor_chart = ChartCanvas::new(dom::canvas_by_id(document, ID_FLAVOR_CHART)?)?;

        let blend = state.derived();
        let health: Vec<f64> = blend.health.iter().map(|e| e.value).collect();
        let flavor: Vec<f64> = blend.flavor.iter().map(|e| e.value).collect();
        let mut view = Self {
            tabs,
            rows,
            health_chart,
            flavor_chart,
            health_tween: ProfileTween::new(&health, CHART_ANIMATION_SEC),
            flavor_tween: ProfileTween::new(&flavor, CHART_ANIMATION_SEC),
            health_labels: blend.health.iter().map(|e| e.label).collect(),
            flavor_labels: blend.flavor.iter().map(|e| e.label).collect(),
            full_mark: blend
                .health
                .first()
                .and_then(|e| e.full_mark)
                .unwrap_or(ATTRIBUTE_MAX),
        };
        view.sync_product(document, state);
        view.apply(document, state.weights(), &blend);
        view.draw();
        Ok(view)
    }

    /// Tab highlight, description and slider labels for the active product.
    pub fn sync_product(&mut self, document: &web::Document, state: &BlendState) {
        let active = state.active_id();
        for (id, el) in &self.tabs {
            _ = el.class_list().toggle_with_force(TAB_ACTIVE_CLASS, *id == active);
        }
        if let Some(p) = state.active_product() {
            dom::set_text(document, ID_DESCRIPTION, p.description);
        }
        let slots = state.active_slots();
        for (i, row) in self.rows.iter().enumerate() {
            let ing: Option<&Ingredient> = slots.get(i).copied();
            row.emoji.set_text_content(ing.map(|x| x.emoji));
            row.name.set_text_content(ing.map(|x| x.name));
        }
    }

    /// Push a freshly computed blend into the DOM and retarget the charts.
    pub fn apply(&mut self, document: &web::Document, weights: Weights, blend: &Blend) {
        for (row, w) in self.rows.iter().zip(weights.slots()) {
            let text = w.to_string();
            if row.input.value() != text {
                row.input.set_value(&text);
            }
            row.badge.set_text_content(Some(format!("{w}%").as_str()));
        }
        let css = blend.liquid.to_css();
        for id in [ID_LIQUID, ID_GLOW, ID_MINI_SWATCH] {
            dom::set_background(document, id, &css);
        }
        let health: Vec<f64> = blend.health.iter().map(|e| e.value).collect();
        let flavor: Vec<f64> = blend.flavor.iter().map(|e| e.value).collect();
        self.health_tween.retarget(&health);
        self.flavor_tween.retarget(&flavor);
    }

    /// Step chart animations; returns true when a redraw happened.
    pub fn animate(&mut self, dt_sec: f32) -> bool {
        if self.health_tween.is_settled() && self.flavor_tween.is_settled() {
            return false;
        }
        self.health_tween.advance(dt_sec);
        self.flavor_tween.advance(dt_sec);
        self.draw();
        true
    }

    pub fn draw(&self) {
        self.health_chart
            .draw_radar(&self.health_labels, self.health_tween.values(), self.full_mark);
        self.flavor_chart
            .draw_bars(&self.flavor_labels, self.flavor_tween.values());
    }

    pub fn resize(&self) {
        dom::sync_canvas_backing_size(&self.health_chart.canvas);
        dom::sync_canvas_backing_size(&self.flavor_chart.canvas);
        self.draw();
    }
}
