pub mod linkify;
pub mod sample_faqs;

/// Blocking user-visible alert; every repository fault surfaces through this.
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}
