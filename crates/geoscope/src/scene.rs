//! Scene-wide operations: removal, extents, and rendering.

use geoscope_core::state;
use geoscope_render::Renderer;

use crate::{Bounds, DrawList, GeoscopeError, Result};

/// Removes every structure called `name`, whatever its type.
///
/// A camera registered as both a frustum and an image under one name is
/// removed entirely.
///
/// # Errors
///
/// Returns [`GeoscopeError::StructureNotFound`] if nothing has that name.
pub fn remove_structure(name: &str) -> Result<()> {
    let removed = state::try_with_context_mut(|ctx| {
        let removed = ctx.registry.remove_named(name);
        ctx.structures_changed();
        removed
    })
    .ok_or(GeoscopeError::NotInitialized)?;

    if removed == 0 {
        return Err(GeoscopeError::StructureNotFound(name.to_string()));
    }
    log::debug!("removed {removed} structure(s) named '{name}'");
    Ok(())
}

/// Removes all structures.
pub fn remove_all_structures() -> Result<()> {
    let removed = state::try_with_context_mut(|ctx| {
        let removed = ctx.registry.len();
        ctx.registry.clear();
        ctx.structures_changed();
        removed
    })
    .ok_or(GeoscopeError::NotInitialized)?;
    log::debug!("removed all {removed} structure(s)");
    Ok(())
}

/// Recomputes the scene bounding box from the enabled structures.
///
/// Only needed when [`crate::Options::auto_compute_scene_extents`] is off.
pub fn compute_scene_extents() -> Result<()> {
    state::try_with_context_mut(|ctx| ctx.update_extents()).ok_or(GeoscopeError::NotInitialized)
}

/// Scene limits a renderer should use: the bounding box of all enabled
/// structures, made cubic when [`crate::Options::equal_aspect`] is set.
pub fn scene_bounds() -> Result<Bounds> {
    state::try_with_context(|ctx| ctx.scene_limits()).ok_or(GeoscopeError::NotInitialized)
}

/// Collects the primitives of every enabled structure.
pub fn build_draw_list() -> Result<DrawList> {
    state::try_with_context(|ctx| ctx.build_draw_list()).ok_or(GeoscopeError::NotInitialized)
}

/// Hands the scene limits and the draw list of all enabled structures to
/// `renderer`.
pub fn render(renderer: &mut dyn Renderer) -> Result<()> {
    let (limits, list) =
        state::try_with_context(|ctx| (ctx.scene_limits(), ctx.build_draw_list()))
            .ok_or(GeoscopeError::NotInitialized)?;

    renderer.set_limits(&limits);
    renderer.submit(&list);
    log::debug!(
        "rendered {} primitives ({} segments)",
        list.len(),
        list.segment_count()
    );
    Ok(())
}
