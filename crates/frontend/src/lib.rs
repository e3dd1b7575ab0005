pub mod config;
pub mod dom;
pub mod page_controller;
pub mod styles;

use page_controller::PageController;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

#[wasm_bindgen(start)]
pub fn start() {
    // initializes logging using the `log` crate
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };

    let config = Rc::new(config::load_config(&window, &document));
    styles::inject_fade_in_keyframes(&document, &config.fade_in);

    if document.ready_state() == "loading" {
        let document_for_ready = document.clone();
        let ready = Closure::wrap(Box::new(move |_: web_sys::Event| {
            PageController::from_document(&document_for_ready, config.clone()).install();
        }) as Box<dyn FnMut(web_sys::Event)>);

        let _ = document
            .add_event_listener_with_callback("DOMContentLoaded", ready.as_ref().unchecked_ref());
        // DOMContentLoaded fires once per page; the listener lives as long as the page
        ready.forget();
    } else {
        PageController::from_document(&document, config).install();
    }
}
