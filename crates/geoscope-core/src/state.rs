//! Global state management for geoscope.

use std::sync::{OnceLock, RwLock};

use glam::DVec3;

use crate::bounds::Bounds;
use crate::draw::DrawList;
use crate::error::{GeoscopeError, Result};
use crate::options::Options;
use crate::registry::Registry;

/// Global context singleton.
static CONTEXT: OnceLock<RwLock<Context>> = OnceLock::new();

/// The scene: registered structures plus the options and extents derived
/// from them.
pub struct Context {
    /// Whether geoscope has been initialized.
    pub initialized: bool,

    /// The structure registry.
    pub registry: Registry,

    /// Global options.
    pub options: Options,

    /// Axis-aligned bounding box for all registered structures.
    pub bounding_box: Bounds,
}

impl Default for Context {
    fn default() -> Self {
        Self {
            initialized: false,
            registry: Registry::new(),
            options: Options::default(),
            bounding_box: Bounds::new(DVec3::ZERO, DVec3::ONE),
        }
    }
}

impl Context {
    /// Updates the global bounding box from all enabled structures.
    pub fn update_extents(&mut self) {
        let bounds = self
            .registry
            .iter()
            .filter(|s| s.is_enabled())
            .filter_map(|s| s.bounding_box())
            .reduce(|a, b| a.union(&b));

        self.bounding_box = bounds.unwrap_or(Bounds::new(DVec3::ZERO, DVec3::ONE));
    }

    /// Recomputes extents if [`Options::auto_compute_scene_extents`] is set.
    pub fn structures_changed(&mut self) {
        if self.options.auto_compute_scene_extents {
            self.update_extents();
        }
    }

    /// Scene limits to hand to a renderer: the bounding box, expanded to a
    /// cube when [`Options::equal_aspect`] is set.
    pub fn scene_limits(&self) -> Bounds {
        if self.options.equal_aspect {
            self.bounding_box.equal_aspect()
        } else {
            self.bounding_box
        }
    }

    /// Collects the primitives of every enabled structure.
    pub fn build_draw_list(&self) -> DrawList {
        let mut list = DrawList::new();
        for structure in self.registry.iter().filter(|s| s.is_enabled()) {
            structure.draw(&mut list);
        }
        list
    }
}

/// Initializes the global context.
///
/// This should be called once at the start of the program.
pub fn init_context() -> Result<()> {
    let context = RwLock::new(Context::default());

    CONTEXT
        .set(context)
        .map_err(|_| GeoscopeError::AlreadyInitialized)?;

    with_context_mut(|ctx| {
        ctx.initialized = true;
    });

    Ok(())
}

/// Returns whether the context has been initialized.
pub fn is_initialized() -> bool {
    CONTEXT
        .get()
        .and_then(|lock| lock.read().ok())
        .is_some_and(|ctx| ctx.initialized)
}

/// Access the global context for reading.
///
/// # Panics
///
/// Panics if geoscope has not been initialized.
pub fn with_context<F, R>(f: F) -> R
where
    F: FnOnce(&Context) -> R,
{
    let lock = CONTEXT.get().expect("geoscope not initialized");
    let guard = lock.read().expect("context lock poisoned");
    f(&guard)
}

/// Access the global context for writing.
///
/// # Panics
///
/// Panics if geoscope has not been initialized.
pub fn with_context_mut<F, R>(f: F) -> R
where
    F: FnOnce(&mut Context) -> R,
{
    let lock = CONTEXT.get().expect("geoscope not initialized");
    let mut guard = lock.write().expect("context lock poisoned");
    f(&mut guard)
}

/// Try to access the global context for reading.
///
/// Returns `None` if geoscope has not been initialized.
pub fn try_with_context<F, R>(f: F) -> Option<R>
where
    F: FnOnce(&Context) -> R,
{
    let lock = CONTEXT.get()?;
    let guard = lock.read().ok()?;
    guard.initialized.then(|| f(&guard))
}

/// Try to access the global context for writing.
///
/// Returns `None` if geoscope has not been initialized.
pub fn try_with_context_mut<F, R>(f: F) -> Option<R>
where
    F: FnOnce(&mut Context) -> R,
{
    let lock = CONTEXT.get()?;
    let mut guard = lock.write().ok()?;
    if !guard.initialized {
        return None;
    }
    Some(f(&mut guard))
}

/// Shuts down the global context.
///
/// Note: Due to `OnceLock` semantics, the context cannot be re-initialized
/// after shutdown in the same process.
pub fn shutdown_context() {
    if let Some(lock) = CONTEXT.get() {
        if let Ok(mut ctx) = lock.write() {
            ctx.initialized = false;
            ctx.registry.clear();
        }
    }
}
