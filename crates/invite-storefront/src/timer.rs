//! Wall-clock pause before delivery.

use std::time::Duration;

/// Wait for `duration` without blocking the event loop.
#[cfg(not(target_arch = "wasm32"))]
pub async fn pause(duration: Duration) {
    if !duration.is_zero() {
        tokio::time::sleep(duration).await;
    }
}

/// Wait for `duration` without blocking the event loop.
#[cfg(target_arch = "wasm32")]
pub async fn pause(duration: Duration) {
    use js_sys::{Function, Promise};
    use wasm_bindgen::{closure::Closure, JsCast, JsValue};
    use wasm_bindgen_futures::JsFuture;

    if duration.is_zero() {
        return;
    }
    let delay_ms = i32::try_from(duration.as_millis()).unwrap_or(i32::MAX);

    let mut executor = move |resolve: Function, _reject: Function| {
        let Some(window) = web_sys::window() else {
            let _ = resolve.call0(&JsValue::NULL);
            return;
        };

        let callback = Closure::once_into_js(move || {
            let _ = resolve.call0(&JsValue::NULL);
        });

        let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
            callback.unchecked_ref(),
            delay_ms,
        );
    };

    let promise = Promise::new(&mut executor);
    let _ = JsFuture::from(promise).await;
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_zero_pause_returns() {
        pause(Duration::ZERO).await;
    }

    #[tokio::test]
    async fn test_short_pause_waits() {
        let start = std::time::Instant::now();
        pause(Duration::from_millis(20)).await;
        assert!(start.elapsed() >= Duration::from_millis(20));
    }
}
