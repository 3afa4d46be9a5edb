//! Initialization and lifecycle management for geoscope.
//!
//! This module provides the functions to initialize and shut down the global
//! scene, and to read or replace the scene-wide [`Options`].

use geoscope_core::state;

use crate::{GeoscopeError, Options, Result};

/// Initializes geoscope with default settings.
///
/// This must be called before any other geoscope functions. It installs an
/// `env_logger` logger (unless one is already installed) and sets up the
/// global scene that structures are registered into.
///
/// # Errors
///
/// Returns an error if geoscope has already been initialized.
///
/// # Example
///
/// ```no_run
/// use geoscope::*;
///
/// fn main() -> Result<()> {
///     init()?;
///     register_coordinate_frame("world", Pose::IDENTITY)?;
///     Ok(())
/// }
/// ```
pub fn init() -> Result<()> {
    let _ = env_logger::try_init();
    state::init_context()?;
    log::info!("geoscope initialized");
    Ok(())
}

/// Returns whether geoscope has been initialized.
#[must_use]
pub fn is_initialized() -> bool {
    state::is_initialized()
}

/// Shuts down geoscope and drops all registered structures.
///
/// Note: the global scene lives in a `OnceLock`, so it cannot be initialized
/// again in the same process.
pub fn shutdown() {
    state::shutdown_context();
    log::info!("geoscope shut down");
}

/// Returns a copy of the current scene options.
pub fn options() -> Result<Options> {
    state::try_with_context(|ctx| ctx.options.clone()).ok_or(GeoscopeError::NotInitialized)
}

/// Replaces the scene options and recomputes the scene extents.
pub fn set_options(options: Options) -> Result<()> {
    state::try_with_context_mut(|ctx| {
        ctx.options = options;
        ctx.structures_changed();
    })
    .ok_or(GeoscopeError::NotInitialized)
}
