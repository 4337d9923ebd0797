//! Scheduling hooks the progressive renderer needs from its environment.

use futures::future::LocalBoxFuture;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

/// Clock and suspension point for cooperative rendering.
pub trait Host {
    /// Monotonic time in milliseconds.
    fn now_ms(&self) -> f64;

    /// Future that completes once the host has had a chance to run other
    /// work (input events, painting).
    fn suspend(&self) -> LocalBoxFuture<'static, ()>;
}

/// Future that is pending exactly once, waking itself immediately.
///
/// Lets every other task queued on a single-threaded executor run before
/// the caller continues.
#[derive(Debug, Default)]
pub struct YieldNow {
    yielded: bool,
}

impl Future for YieldNow {
    type Output = ();

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
        if self.yielded {
            return Poll::Ready(());
        }
        self.yielded = true;
        cx.waker().wake_by_ref();
        Poll::Pending
    }
}

/// Host for native executors: `Instant` clock, yields once per suspension.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Clone, Copy, Debug)]
pub struct NativeHost {
    epoch: std::time::Instant,
}

#[cfg(not(target_arch = "wasm32"))]
impl NativeHost {
    pub fn new() -> Self {
        Self {
            epoch: std::time::Instant::now(),
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl Default for NativeHost {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl Host for NativeHost {
    fn now_ms(&self) -> f64 {
        self.epoch.elapsed().as_secs_f64() * 1000.0
    }

    fn suspend(&self) -> LocalBoxFuture<'static, ()> {
        Box::pin(YieldNow::default())
    }
}
