//! Browser viewport measurements.

/// Current `window.innerWidth` in CSS pixels, or `None` outside the browser.
pub fn viewport_width() -> Option<f64> {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()?.inner_width().ok()?.as_f64()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}
