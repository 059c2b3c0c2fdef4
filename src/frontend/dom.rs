use crate::error::FrontendError;
use crate::theme::Theme;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, ScrollBehavior, ScrollIntoViewOptions, Window};
use yew::NodeRef;

const FALLBACK_VIEWPORT: (f64, f64) = (1280.0, 720.0);

/// The browser window, or `None` when rendering outside a browser.
pub fn window() -> Option<Window> {
    if cfg!(target_arch = "wasm32") {
        web_sys::window()
    } else {
        None
    }
}

pub fn document() -> Option<Document> {
    window()?.document()
}

pub fn scroll_y() -> f64 {
    window()
        .and_then(|win| win.scroll_y().ok())
        .unwrap_or(0.0)
}

pub fn viewport_size() -> (f64, f64) {
    let Some(win) = window() else {
        return FALLBACK_VIEWPORT;
    };

    let width = win
        .inner_width()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(FALLBACK_VIEWPORT.0);
    let height = win
        .inner_height()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(FALLBACK_VIEWPORT.1);

    (width, height)
}

pub fn device_pixel_ratio() -> f64 {
    window()
        .map(|win| win.device_pixel_ratio())
        .filter(|ratio| ratio.is_finite() && *ratio > 0.0)
        .unwrap_or(1.0)
}

pub fn prefers_reduced_motion() -> bool {
    window()
        .and_then(|w| {
            w.match_media("(prefers-reduced-motion: reduce)")
                .ok()
                .flatten()
        })
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

pub fn apply_theme(theme: Theme) -> Result<(), FrontendError> {
    let root = document()
        .ok_or(FrontendError::MissingDocument)?
        .document_element()
        .ok_or(FrontendError::MissingDocument)?;

    root.set_attribute("data-theme", theme.as_str())?;
    // Only the one property, so inline styles set elsewhere survive.
    if let Some(html) = root.dyn_ref::<HtmlElement>() {
        html.style()
            .set_property("color-scheme", theme.color_scheme())?;
    }

    let classes = root.class_list();
    match theme.root_class() {
        Some(class) => classes.add_1(class)?,
        None => classes.remove_1("dark")?,
    }

    Ok(())
}

/// Viewport-relative `(top, height)` of the element behind `node`.
pub fn element_rect(node: &NodeRef) -> Option<(f64, f64)> {
    let rect = node.cast::<Element>()?.get_bounding_client_rect();
    Some((rect.top(), rect.height()))
}

pub fn scroll_to_element(element: &Element, smooth: bool) {
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(if smooth {
        ScrollBehavior::Smooth
    } else {
        ScrollBehavior::Auto
    });
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

pub fn open_in_new_tab(url: &str) -> Result<(), FrontendError> {
    let win = window().ok_or(FrontendError::MissingWindow)?;
    win.open_with_url_and_target_and_features(url, "_blank", "noopener,noreferrer")?;
    Ok(())
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn helpers_fall_back_outside_the_browser() {
        assert!(window().is_none());
        assert_eq!(viewport_size(), FALLBACK_VIEWPORT);
        assert_eq!(scroll_y(), 0.0);
        assert_eq!(device_pixel_ratio(), 1.0);
        assert!(!prefers_reduced_motion());
        assert!(element_rect(&NodeRef::default()).is_none());
    }

    #[test]
    fn theme_and_links_report_missing_browser() {
        assert_eq!(apply_theme(Theme::Dark), Err(FrontendError::MissingDocument));
        assert_eq!(
            open_in_new_tab("https://example.com"),
            Err(FrontendError::MissingWindow)
        );
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};

    wasm_bindgen_test_configure!(run_in_browser);

    fn root() -> HtmlElement {
        document()
            .and_then(|doc| doc.document_element())
            .and_then(|root| root.dyn_into::<HtmlElement>().ok())
            .expect("html element")
    }

    #[wasm_bindgen_test]
    fn theme_switch_keeps_other_inline_styles() {
        let root = root();
        root.style()
            .set_property("--page-accent", "teal")
            .expect("set custom property");

        apply_theme(Theme::Dark).expect("dark theme");
        assert!(root.class_list().contains("dark"));
        assert_eq!(root.get_attribute("data-theme").as_deref(), Some("dark"));

        apply_theme(Theme::Light).expect("light theme");
        assert!(!root.class_list().contains("dark"));
        assert_eq!(
            root.style().get_property_value("color-scheme").as_deref(),
            Ok("light")
        );
        assert_eq!(
            root.style().get_property_value("--page-accent").as_deref(),
            Ok("teal")
        );

        root.style()
            .remove_property("--page-accent")
            .expect("clear custom property");
    }
}
