//! Background field rendering with cancellation.
//!
//! A [`FieldRenderer`] owns one output target (the s-plane field or the
//! output-plane field). [`FieldRenderer::render`] starts a worker thread
//! that sweeps a [`FieldRaster`] and returns a [`RenderHandle`] at once.
//! After every row the worker checks its cancellation flag, stopping without
//! publishing if it is set, and otherwise yields before continuing. A
//! finished buffer is published as a [`RenderedField`] on the renderer's
//! channel.
//!
//! Starting a render cancels the one in flight for the same target first.
//! Publishing and cancelling both happen under the target's publish lock,
//! and a worker only publishes while its generation is still current, so
//! once `render` or `cancel` returns the superseded task can no longer
//! deliver a buffer.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use crossbeam_channel::{unbounded, Receiver, Sender};
use parking_lot::Mutex;
use tracing::{debug, trace};

use crate::colorer::ColorFn;
use crate::field_raster::{FieldRaster, FieldRequest};
use crate::rendering_buffer::PixelBuffer;

// ============================================================================
// RenderedField
// ============================================================================

/// A completed field, handed over to the consumer.
#[derive(Debug)]
pub struct RenderedField {
    pub target: &'static str,
    /// Generation of the render that produced it; increases per `render`.
    pub generation: u64,
    pub buffer: PixelBuffer,
}

// ============================================================================
// RenderHandle
// ============================================================================

/// Handle to one in-flight render.
///
/// Dropping the handle detaches from the worker without cancelling it.
#[derive(Debug)]
pub struct RenderHandle {
    generation: u64,
    cancelled: Arc<AtomicBool>,
    thread: Option<JoinHandle<()>>,
}

impl RenderHandle {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Ask the worker to stop at the next row boundary.
    ///
    /// Prefer [`FieldRenderer::cancel`], which also guarantees that nothing
    /// is published afterwards. This only stops future rows.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Release);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }

    /// Wait for the worker to exit. Returns `false` if it panicked.
    pub fn join(mut self) -> bool {
        match self.thread.take() {
            Some(t) => t.join().is_ok(),
            None => true,
        }
    }
}

// ============================================================================
// FieldRenderer
// ============================================================================

/// Publish state shared between a renderer and its workers.
#[derive(Debug, Default)]
struct PublishSlot {
    current: u64,
}

/// Renders fields for one output target, at most one at a time.
pub struct FieldRenderer {
    target: &'static str,
    slot: Arc<Mutex<PublishSlot>>,
    active: Option<Arc<AtomicBool>>,
    tx: Sender<RenderedField>,
}

impl FieldRenderer {
    /// A renderer for `target` and the receiving end of its buffers.
    pub fn new(target: &'static str) -> (Self, Receiver<RenderedField>) {
        let (tx, rx) = unbounded();
        let renderer = Self {
            target,
            slot: Arc::new(Mutex::new(PublishSlot::default())),
            active: None,
            tx,
        };
        (renderer, rx)
    }

    pub fn target(&self) -> &'static str {
        self.target
    }

    /// Cancel the current render, if any, and start a new one.
    pub fn render<C>(&mut self, request: FieldRequest, colorer: C) -> RenderHandle
    where
        C: ColorFn + Send + 'static,
    {
        let cancelled = Arc::new(AtomicBool::new(false));
        let generation = {
            let mut slot = self.slot.lock();
            if let Some(prev) = self.active.replace(cancelled.clone()) {
                prev.store(true, Ordering::Release);
                trace!(target_name = self.target, generation = slot.current, "render superseded");
            }
            slot.current += 1;
            slot.current
        };

        let target = self.target;
        let worker = Worker {
            target,
            generation,
            cancelled: cancelled.clone(),
            slot: self.slot.clone(),
            tx: self.tx.clone(),
        };
        let spawned = thread::Builder::new()
            .name(format!("field-{target}"))
            .spawn(move || worker.run(FieldRaster::new(request, colorer)));

        let thread = match spawned {
            Ok(t) => Some(t),
            Err(err) => {
                debug!(target_name = target, generation, %err, "failed to spawn render worker");
                cancelled.store(true, Ordering::Release);
                None
            }
        };

        RenderHandle {
            generation,
            cancelled,
            thread,
        }
    }

    /// Cancel the current render. Nothing from it is published afterwards.
    pub fn cancel(&mut self) {
        let _slot = self.slot.lock();
        if let Some(prev) = self.active.take() {
            prev.store(true, Ordering::Release);
            trace!(target_name = self.target, "cancelling render");
        }
    }
}

impl Drop for FieldRenderer {
    fn drop(&mut self) {
        self.cancel();
    }
}

// ============================================================================
// Worker
// ============================================================================

struct Worker {
    target: &'static str,
    generation: u64,
    cancelled: Arc<AtomicBool>,
    slot: Arc<Mutex<PublishSlot>>,
    tx: Sender<RenderedField>,
}

impl Worker {
    fn run<C: ColorFn>(self, mut raster: FieldRaster<C>) {
        trace!(
            target_name = self.target,
            generation = self.generation,
            rows = raster.rows_total(),
            "started render"
        );

        loop {
            let more = raster.render_row();
            if self.cancelled.load(Ordering::Acquire) {
                trace!(
                    target_name = self.target,
                    generation = self.generation,
                    rows_done = raster.rows_done(),
                    "render cancelled"
                );
                return;
            }
            if !more {
                break;
            }
            thread::yield_now();
        }

        let slot = self.slot.lock();
        if slot.current != self.generation || self.cancelled.load(Ordering::Acquire) {
            trace!(target_name = self.target, generation = self.generation, "render cancelled");
            return;
        }
        let field = RenderedField {
            target: self.target,
            generation: self.generation,
            buffer: raster.finish(),
        };
        // the receiver may be gone; nobody is waiting for the buffer then
        let _ = self.tx.send(field);
        drop(slot);
        trace!(target_name = self.target, generation = self.generation, "completed render");
    }
}

// ============================================================================
// Tests
// ============================================================================
