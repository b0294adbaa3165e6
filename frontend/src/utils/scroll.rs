use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

/// Smooth-scrolls the viewport to the element with the given id.
pub fn scroll_to_anchor(id: &str) {
    let element = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(id));

    match element {
        Some(element) => {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            element.scroll_into_view_with_scroll_into_view_options(&options);
        }
        None => log::warn!("No element with id '{}' to scroll to", id),
    }
}
