//! SHA-256 through the browser's `crypto.subtle`. The primitive is only exposed
//! in secure contexts (HTTPS or localhost); elsewhere the digest fails and the
//! lookup reports a digest error instead of fetching anything.

use grade_core::{encode_digest, DigestError, Digester};
use js_sys::{ArrayBuffer, Uint8Array};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

pub struct SubtleDigester;

impl Digester for SubtleDigester {
    async fn digest_hex(&self, text: &str) -> Result<String, DigestError> {
        let window = web_sys::window().ok_or_else(|| DigestError("window not found".into()))?;
        let crypto = window.crypto().map_err(|err| DigestError(describe(&err)))?;
        let subtle = crypto.subtle();
        let subtle_value: &JsValue = subtle.as_ref();
        if subtle_value.is_undefined() || subtle_value.is_null() {
            return Err(DigestError(
                "crypto.subtle is unavailable outside secure contexts".into(),
            ));
        }

        let data = Uint8Array::from(text.as_bytes());
        let promise = subtle
            .digest_with_str_and_buffer_source("SHA-256", &data)
            .map_err(|err| DigestError(describe(&err)))?;
        let buffer = JsFuture::from(promise)
            .await
            .map_err(|err| DigestError(describe(&err)))?
            .dyn_into::<ArrayBuffer>()
            .map_err(|_| DigestError("digest did not return an ArrayBuffer".into()))?;

        encode_digest(&Uint8Array::new(&buffer).to_vec())
    }
}

fn describe(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|err| String::from(err.message()))
        })
        .unwrap_or_else(|| "unknown error".to_string())
}
