// ============================================================================
// ELEMENT BUILDER - Construcción fluida de elementos
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{create_element, set_attribute, set_class_name, set_text_content};

/// Builder fluido sobre un elemento recién creado. Las vistas lo usan
/// para el grueso del markup; los hijos se cuelgan con append_child.
pub struct ElementBuilder {
    element: Element,
}

impl ElementBuilder {
    pub fn new(tag: &str) -> Result<Self, JsValue> {
        Ok(Self {
            element: create_element(tag)?,
        })
    }

    /// Reemplaza todas las clases del elemento
    pub fn class(self, class: &str) -> Self {
        set_class_name(&self.element, class);
        self
    }

    pub fn text(self, text: &str) -> Self {
        set_text_content(&self.element, text);
        self
    }

    pub fn attr(self, name: &str, value: &str) -> Result<Self, JsValue> {
        set_attribute(&self.element, name, value)?;
        Ok(self)
    }

    pub fn build(self) -> Element {
        self.element
    }
}
