//! Utility functions for the portfolio generator component.

use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use common::model::portfolio::Portfolio;

/// Splits the comma-separated skills field into displayable chips.
/// Segments are trimmed; blank segments are dropped.
pub fn split_skills(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

/// MD5 digest of the state a Generate would persist right now. Compared
/// against the digest recorded at the last save to drive the unsaved-changes
/// indicator in the tab bar.
pub fn portfolio_digest(portfolio: &Portfolio) -> String {
    let json = serde_json::to_string(&portfolio.snapshot(String::new())).unwrap_or_default();
    format!("{:x}", md5::compute(json))
}

/// Displays a temporary notification message at the bottom of the screen.
/// The toast removes itself after a few seconds.
pub fn show_toast(message: &str) {
    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        if let (Ok(toast), Some(body)) = (document.create_element("div"), document.body()) {
            toast.set_text_content(Some(message));
            let html_toast: HtmlElement = toast.unchecked_into();
            let style = html_toast.style();
            style.set_property("position", "fixed").ok();
            style.set_property("bottom", "20px").ok();
            style.set_property("left", "50%").ok();
            style.set_property("transform", "translateX(-50%)").ok();
            style.set_property("background", "rgba(0, 0, 0, 0.8)").ok();
            style.set_property("color", "#fff").ok();
            style.set_property("padding", "10px 20px").ok();
            style.set_property("border-radius", "4px").ok();
            style.set_property("z-index", "10000").ok();

            if body.append_child(&html_toast).is_ok() {
                wasm_bindgen_futures::spawn_local(async move {
                    gloo_timers::future::TimeoutFuture::new(3000).await;
                    if let Some(parent) = html_toast.parent_node() {
                        parent.remove_child(&html_toast).ok();
                    }
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_skills_trims_and_drops_blanks() {
        assert_eq!(
            split_skills("Rust, Yew , ,TypeScript"),
            vec!["Rust", "Yew", "TypeScript"]
        );
        assert!(split_skills("").is_empty());
        assert!(split_skills(" , ,").is_empty());
    }
}
