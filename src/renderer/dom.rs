//! DOM-backed scene
//!
//! Entities are absolutely-positioned divs inside the play area; the browser
//! repaints when their style coordinates change. Styling beyond position and
//! body color belongs to the page stylesheet.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

use super::Scene;
use crate::sim::GameState;

/// The DOM nodes mirroring one run's entities
pub struct DomScene {
    document: Document,
    area: Element,
    lane_divs: Vec<HtmlElement>,
    obstacle_divs: Vec<HtmlElement>,
    car: Option<HtmlElement>,
}

impl DomScene {
    pub fn new(document: Document, area: Element) -> Self {
        Self {
            document,
            area,
            lane_divs: Vec::new(),
            obstacle_divs: Vec::new(),
            car: None,
        }
    }

    /// Create a classed div inside the play area. A failed DOM call just
    /// drops the node; the simulation must keep running regardless.
    fn make_div(&self, class: &str) -> Option<HtmlElement> {
        let el = self.document.create_element("div").ok()?;
        let _ = el.set_attribute("class", class);
        let _ = self.area.append_child(&el);
        el.dyn_into::<HtmlElement>().ok()
    }
}

fn set_px(el: &HtmlElement, prop: &str, value: f32) {
    let _ = el.style().set_property(prop, &format!("{value}px"));
}

fn set_color(el: &HtmlElement, color: u32) {
    let _ = el
        .style()
        .set_property("background-color", &format!("#{color:06x}"));
}

impl Scene for DomScene {
    fn reset(&mut self, state: &GameState) {
        self.area.set_inner_html("");
        self.lane_divs.clear();
        self.obstacle_divs.clear();
        self.car = None;

        for marker in &state.lane_markers {
            if let Some(el) = self.make_div("line") {
                set_px(&el, "top", marker.y);
                self.lane_divs.push(el);
            }
        }

        if let Some(car) = self.make_div("car") {
            set_px(&car, "left", state.player.pos.x);
            set_px(&car, "top", state.player.pos.y);
            self.car = Some(car);
        }

        for (i, obstacle) in state.obstacles.iter().enumerate() {
            if let Some(el) = self.make_div("enemy") {
                el.set_inner_html(&format!("<br>{}", i + 1));
                set_px(&el, "top", obstacle.pos.y);
                set_px(&el, "left", obstacle.pos.x);
                set_color(&el, obstacle.color);
                self.obstacle_divs.push(el);
            }
        }
    }

    fn draw(&mut self, state: &GameState) {
        for (el, marker) in self.lane_divs.iter().zip(&state.lane_markers) {
            set_px(el, "top", marker.y);
        }

        for (el, obstacle) in self.obstacle_divs.iter().zip(&state.obstacles) {
            set_px(el, "top", obstacle.pos.y);
            set_px(el, "left", obstacle.pos.x);
            set_color(el, obstacle.color);
        }

        if let Some(car) = &self.car {
            set_px(car, "left", state.player.pos.x);
            set_px(car, "top", state.player.pos.y);
        }
    }
}
