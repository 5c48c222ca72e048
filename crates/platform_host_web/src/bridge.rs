//! Target-routed browser interop.

#[cfg(not(target_arch = "wasm32"))]
use non_wasm as imp;
#[cfg(target_arch = "wasm32")]
use wasm as imp;

pub fn open_external_url(url: &str) -> Result<(), String> {
    imp::open_external_url(url)
}

#[cfg(target_arch = "wasm32")]
mod wasm {
    use wasm_bindgen::JsValue;

    fn js_error(err: JsValue) -> String {
        err.as_string()
            .unwrap_or_else(|| format!("browser error: {err:?}"))
    }

    pub fn open_external_url(url: &str) -> Result<(), String> {
        let window = web_sys::window().ok_or_else(|| "browser window is unavailable".to_string())?;
        window
            .open_with_url_and_target(url, "_blank")
            .map_err(js_error)?;
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod non_wasm {
    fn unsupported() -> String {
        "Browser window APIs are only available when compiled for wasm32".to_string()
    }

    pub fn open_external_url(_url: &str) -> Result<(), String> {
        Err(unsupported())
    }
}
