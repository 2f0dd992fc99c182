use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use crate::motion::{Extent, Pose, Surface};

/// The live document. Geometry comes from offset layout, so transforms written
/// by the animations never feed back into trigger positions.
pub struct DomSurface;

impl DomSurface {
    fn element(&self, id: &str) -> Option<HtmlElement> {
        document()
            .get_element_by_id(id)?
            .dyn_into::<HtmlElement>()
            .ok()
    }

    fn document_top(el: &HtmlElement) -> f64 {
        let mut top = 0.0;
        let mut node = Some(el.clone());
        while let Some(n) = node {
            top += f64::from(n.offset_top());
            node = n
                .offset_parent()
                .and_then(|p| p.dyn_into::<HtmlElement>().ok());
        }
        top
    }
}

impl Surface for DomSurface {
    fn apply(&mut self, target: &str, pose: &Pose) -> bool {
        let Some(el) = self.element(target) else {
            return false;
        };
        let style = el.style();
        let res = style
            .set_property("transform", &pose.transform())
            .and_then(|_| style.set_property("opacity", &pose.opacity.to_string()));
        if let Err(e) = res {
            log::warn!("couldn't style #{target}: {e:?}");
        }
        true
    }

    fn viewport_top(&self, target: &str) -> Option<f64> {
        let el = self.element(target)?;
        Some(Self::document_top(&el) - self.scroll_y())
    }

    fn extent(&self, target: &str) -> Option<Extent> {
        let el = self.element(target)?;
        Some(Extent {
            top: Self::document_top(&el),
            height: f64::from(el.offset_height()),
        })
    }

    fn viewport_height(&self) -> f64 {
        window()
            .inner_height()
            .ok()
            .and_then(|h| h.as_f64())
            .unwrap_or(0.0)
    }

    fn scroll_y(&self) -> f64 {
        window().scroll_y().unwrap_or(0.0)
    }

    fn jump_to(&mut self, y: f64) {
        window().scroll_to_with_x_and_y(0.0, y);
    }
}
