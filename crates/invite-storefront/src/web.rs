//! Browser entry point.

use std::cell::RefCell;
use std::rc::Rc;

use invite_mail::{EmailJsSender, EmailSender};
use invite_observability::{SessionId, StructuredLogger};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, EventTarget};

use crate::config::StorefrontConfig;
use crate::events::UiEvent;
use crate::surface::DomSurface;
use crate::timer::pause;
use crate::{Storefront, StorefrontError};

type SharedStorefront = Rc<RefCell<Storefront<DomSurface, EmailJsSender>>>;

/// Buttons found by id and the event each one raises.
const BUTTONS: [(&str, UiEvent); 7] = [
    ("cartBtn", UiEvent::CartButton),
    ("cartClose", UiEvent::CartClose),
    ("clearCartBtn", UiEvent::ClearCart),
    ("checkoutBtn", UiEvent::Checkout),
    ("modalClose", UiEvent::PreviewClose),
    ("closeExpanded", UiEvent::CategoryClose),
    ("customerModalClose", UiEvent::EnquiryClose),
];

/// Backdrops that close their overlay when clicked directly.
const BACKDROPS: [(&str, UiEvent); 2] = [
    ("cartOverlay", UiEvent::CartOverlay),
    ("modalOverlay", UiEvent::PreviewClose),
];

/// Mount the storefront on the current page.
///
/// `config_json` is a storefront config in JSON form.
#[wasm_bindgen(js_name = mountStorefront)]
pub fn mount_storefront(config_json: &str) -> Result<(), JsValue> {
    let config = StorefrontConfig::from_json_str(config_json)
        .map_err(|err| JsValue::from_str(&format!("{err:#}")))?;
    config.validate().map_err(to_js)?;

    let logger = StructuredLogger::new(SessionId::generate())
        .with_min_level(config.logging.level)
        .with_format(config.logging.format);
    let surface = DomSurface::new(logger.clone()).map_err(to_js)?;
    let sender = EmailJsSender::new(config.mail.clone())
        .map_err(|err| to_js(StorefrontError::from(err)))?;

    let mut storefront = Storefront::with_logger(surface, sender, config, logger);
    storefront.mount();
    let document = storefront.surface().document().clone();
    let app: SharedStorefront = Rc::new(RefCell::new(storefront));

    for (id, event) in BUTTONS {
        if let Some(element) = document.get_element_by_id(id) {
            let app = Rc::clone(&app);
            listen(&element, "click", move |_| dispatch(&app, event.clone()))?;
        }
    }

    for (id, event) in BACKDROPS {
        if let Some(backdrop) = document.get_element_by_id(id) {
            let app = Rc::clone(&app);
            let own: JsValue = backdrop.clone().into();
            listen(&backdrop, "click", move |e: Event| {
                if e.target().map(JsValue::from).as_ref() == Some(&own) {
                    dispatch(&app, event.clone());
                }
            })?;
        }
    }

    bind_delegated_clicks(&document, &app)?;
    bind_forms(&document, &app)?;
    Ok(())
}

/// Rendered buttons carry `data-action`; category buttons carry
/// `data-category`. Both are handled with one listener on the document.
fn bind_delegated_clicks(document: &Document, app: &SharedStorefront) -> Result<(), JsValue> {
    let app = Rc::clone(app);
    listen(document, "click", move |e: Event| {
        let Some(target) = e.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
            return;
        };

        if let Ok(Some(button)) = target.closest("[data-action]") {
            let action = button.get_attribute("data-action").unwrap_or_default();
            let id = button
                .get_attribute("data-product-id")
                .or_else(|| button.get_attribute("data-item-id"))
                .unwrap_or_default();
            if let Some(event) = UiEvent::from_action(&action, &id) {
                e.prevent_default();
                dispatch(&app, event);
            }
            return;
        }

        if let Ok(Some(button)) = target.closest(".category-btn") {
            let key = button.get_attribute("data-category").unwrap_or_default();
            if let Some(event) = UiEvent::category(&key) {
                dispatch(&app, event);
            }
        }
    })
}

fn bind_forms(document: &Document, app: &SharedStorefront) -> Result<(), JsValue> {
    if let Some(form) = document.get_element_by_id("customerForm") {
        let app = Rc::clone(app);
        listen(&form, "submit", move |e: Event| {
            e.prevent_default();
            wasm_bindgen_futures::spawn_local(submit(Rc::clone(&app)));
        })?;
    }

    if let Ok(Some(form)) = document.query_selector(".newsletter-form") {
        let app = Rc::clone(app);
        listen(&form, "submit", move |e: Event| {
            e.prevent_default();
            dispatch(&app, UiEvent::NewsletterSubmit);
        })?;
    }

    Ok(())
}

/// Runs the enquiry submission without holding the storefront across
/// awaits, so clicks stay responsive while the email is in flight.
async fn submit(app: SharedStorefront) {
    let Ok(begun) = app.try_borrow_mut().map(|mut app| app.begin_submission()) else {
        return;
    };
    let Ok(pending) = begun else {
        return;
    };

    pause(pending.delay).await;

    let mailer = app.borrow().mailer_handle();
    let delivery = mailer.send(&pending.params);
    app.borrow_mut().dispatched(&pending);
    let result = delivery.await;
    app.borrow_mut().settle(&pending, result);
}

fn dispatch(app: &SharedStorefront, event: UiEvent) {
    if let Ok(mut app) = app.try_borrow_mut() {
        app.handle(event);
    }
}

fn listen<F>(target: &EventTarget, kind: &str, handler: F) -> Result<(), JsValue>
where
    F: FnMut(Event) + 'static,
{
    let callback = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback(kind, callback.as_ref().unchecked_ref())?;
    // Listeners live as long as the page.
    callback.forget();
    Ok(())
}

fn to_js(err: StorefrontError) -> JsValue {
    JsValue::from_str(&err.to_string())
}
