//! WASM entry point for the select component.

use super::dom;
use super::props::{BrowserError, PropsData};
use selectfield_core::{Callback, Event, Widget};
use selectfield_widgets::{SelectField, SelectOption};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{console, window, HtmlSelectElement};

#[wasm_bindgen(typescript_custom_section)]
const TS_TYPES: &'static str = r#"
export interface SelectOption {
    key: string;
    label: string;
}

export interface SelectProps {
    name?: string;
    options: SelectOption[];
    selectedOption?: SelectOption | null;
}
"#;

impl From<BrowserError> for JsValue {
    fn from(err: BrowserError) -> Self {
        Self::from_str(&err.to_string())
    }
}

/// Select component mounted into a container element.
///
/// The host keeps the selection: `on_select` receives the picked option as
/// JSON and the host answers with [`SelectComponent::update`].
#[wasm_bindgen]
pub struct SelectComponent {
    container: web_sys::Element,
    on_select: Callback<SelectOption>,
    field: Rc<RefCell<SelectField>>,
    change_callback: Option<Closure<dyn FnMut(web_sys::Event)>>,
}

#[wasm_bindgen]
impl SelectComponent {
    /// Mount a select into the element with id `container_id`.
    #[wasm_bindgen(constructor)]
    pub fn new(
        container_id: &str,
        props_json: &str,
        on_select: js_sys::Function,
    ) -> Result<SelectComponent, JsValue> {
        console_error_panic_hook::set_once();

        let document = window()
            .ok_or("No window")?
            .document()
            .ok_or("No document")?;

        let container = document
            .get_element_by_id(container_id)
            .ok_or_else(|| BrowserError::Dom(format!("Container '{container_id}' not found")))?;

        let on_select = host_callback(on_select);
        let props = PropsData::from_json(props_json)?.into_props(on_select.clone());

        let mut component = Self {
            container,
            on_select,
            field: Rc::new(RefCell::new(SelectField::new(props))),
            change_callback: None,
        };
        component.render()?;
        component.listen()?;
        Ok(component)
    }

    /// Re-render with new props from the host.
    pub fn update(&self, props_json: &str) -> Result<(), JsValue> {
        let props = PropsData::from_json(props_json)?.into_props(self.on_select.clone());
        self.field.borrow_mut().set_props(props);
        self.render()
    }

    /// Value currently shown by the live `<select>`.
    pub fn selected_key(&self) -> Option<String> {
        self.container
            .query_selector("select")
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<HtmlSelectElement>().ok())
            .map(|select| select.value())
    }

    /// Current markup.
    pub fn html(&self) -> String {
        self.field.borrow().render().to_html()
    }
}

impl SelectComponent {
    fn render(&self) -> Result<(), JsValue> {
        let tree = self.field.borrow().render();
        dom::mount(&self.container, &tree)
    }

    /// Listen for `change` on the container so re-renders keep the listener.
    ///
    /// After each change the control is re-rendered from the current props,
    /// so a pick the host does not accept is rolled back.
    fn listen(&mut self) -> Result<(), JsValue> {
        let field = Rc::clone(&self.field);
        let container = self.container.clone();
        let cb = Closure::<dyn FnMut(web_sys::Event)>::new(move |e: web_sys::Event| {
            let Some(select) = e
                .target()
                .and_then(|target| target.dyn_into::<HtmlSelectElement>().ok())
            else {
                return;
            };
            // The host may call update() from on_select.
            let snapshot = field.borrow().clone();
            if let Err(err) = snapshot.event(&Event::change(select.value())) {
                console::warn_1(&JsValue::from_str(&err.to_string()));
            }
            let tree = field.borrow().render();
            if let Err(err) = dom::mount(&container, &tree) {
                console::error_2(&JsValue::from_str("re-render failed"), &err);
            }
        });
        self.container
            .add_event_listener_with_callback("change", cb.as_ref().unchecked_ref())?;
        self.change_callback = Some(cb);
        Ok(())
    }
}

impl Drop for SelectComponent {
    fn drop(&mut self) {
        if let Some(cb) = self.change_callback.take() {
            let _ = self
                .container
                .remove_event_listener_with_callback("change", cb.as_ref().unchecked_ref());
        }
    }
}

/// Default stylesheet as CSS text.
#[wasm_bindgen]
pub fn stylesheet() -> String {
    SelectField::stylesheet().to_css()
}

fn host_callback(function: js_sys::Function) -> Callback<SelectOption> {
    Callback::new(move |option: SelectOption| match serde_json::to_string(&option) {
        Ok(json) => {
            if let Err(err) = function.call1(&JsValue::NULL, &JsValue::from_str(&json)) {
                console::error_2(&JsValue::from_str("on_select threw"), &err);
            }
        }
        Err(err) => console::error_1(&JsValue::from_str(&format!("JSON error: {err}"))),
    })
}
