//! Lazy Image Loading
//!
//! `img[data-src]` gets its real `src` once it intersects the viewport.
//! Without `IntersectionObserver` every image is loaded right away.

use js_sys::Array;
use leptos_page_events::{data_attr, query_all, PageEvents};
use log::debug;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlImageElement, IntersectionObserver, IntersectionObserverEntry};

/// Swap in `data-src` and drop the `lazy` placeholder class
pub fn reveal_image(el: &Element) {
    let Some(src) = data_attr(el, "src") else { return };
    if let Some(img) = el.dyn_ref::<HtmlImageElement>() {
        img.set_src(&src);
    } else {
        let _ = el.set_attribute("src", &src);
    }
    let _ = el.class_list().remove_1("lazy");
}

pub fn bind_lazy_images(events: PageEvents) {
    let images = query_all("img[data-src]");
    if images.is_empty() {
        return;
    }

    let on_intersect = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else { continue };
                if entry.is_intersecting() {
                    let img = entry.target();
                    reveal_image(&img);
                    observer.unobserve(&img);
                }
            }
        },
    );

    let observer = match IntersectionObserver::new(on_intersect.as_ref().unchecked_ref()) {
        Ok(observer) => observer,
        Err(_) => {
            debug!("IntersectionObserver unavailable, loading {} images eagerly", images.len());
            images.iter().for_each(reveal_image);
            return;
        }
    };

    for img in &images {
        observer.observe(img);
    }
    debug!("Observing {} lazy images", images.len());

    events.on_teardown(move || {
        observer.disconnect();
        drop(on_intersect);
    });
}
