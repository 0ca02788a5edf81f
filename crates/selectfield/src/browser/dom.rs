//! Mirror element trees into the browser DOM.

use selectfield_core::{Element, Node};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlElement};

/// Create a DOM subtree for `element`.
pub fn build(document: &Document, element: &Element) -> Result<web_sys::Element, JsValue> {
    let node = document.create_element(element.tag())?;
    for attr in element.attributes() {
        node.set_attribute(&attr.name, attr.value.as_deref().unwrap_or(""))?;
    }
    for child in element.children() {
        match child {
            Node::Element(el) => {
                node.append_child(&build(document, el)?)?;
            }
            Node::Text(text) => {
                node.append_child(&document.create_text_node(text))?;
            }
        }
    }
    Ok(node)
}

/// Replace the contents of `container` with `element`.
///
/// Keyboard focus moves to the new root if the old content held it.
pub fn mount(container: &web_sys::Element, element: &Element) -> Result<(), JsValue> {
    let document = container
        .owner_document()
        .ok_or("Container is not attached to a document")?;

    let had_focus = document.active_element().is_some_and(|active| {
        let active: &web_sys::Node = active.as_ref();
        let container: &web_sys::Node = container.as_ref();
        container.contains(Some(active)) && !active.is_same_node(Some(container))
    });

    let root = build(&document, element)?;
    container.set_inner_html("");
    container.append_child(&root)?;

    if had_focus {
        if let Ok(focusable) = root.dyn_into::<HtmlElement>() {
            focusable.focus()?;
        }
    }
    Ok(())
}
