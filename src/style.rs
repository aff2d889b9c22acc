use crate::core::{ClassTarget, StyleRule, TransformTarget};
use web_sys as web;

impl TransformTarget for web::HtmlElement {
    fn set_transform(&self, css: &str) {
        _ = self.style().set_property("transform", css);
    }
}

impl ClassTarget for web::Element {
    fn set_class(&self, class: &str, on: bool) {
        _ = self.class_list().toggle_with_force(class, on);
    }
}

/// A `<style>` element in `<head>`, keyed by id so remounting reuses it
/// instead of stacking rules.
pub struct StyleSlot {
    element: web::Element,
}

impl StyleSlot {
    pub fn install(document: &web::Document, id: &str) -> anyhow::Result<Self> {
        if let Some(element) = document.get_element_by_id(id) {
            return Ok(Self { element });
        }
        let head = document
            .head()
            .ok_or_else(|| anyhow::anyhow!("document has no <head>"))?;
        let element = document
            .create_element("style")
            .map_err(|e| anyhow::anyhow!("create <style>: {:?}", e))?;
        element.set_id(id);
        head.append_child(&element)
            .map_err(|e| anyhow::anyhow!("append <style>: {:?}", e))?;
        Ok(Self { element })
    }
}

impl StyleRule for StyleSlot {
    fn set_text(&self, css: &str) {
        self.element.set_text_content(Some(css));
    }

    fn remove(&self) {
        self.element.remove();
    }
}
