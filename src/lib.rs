//! doomdeck — launch composition core for a retro-FPS frontend.
//!
//! Given a saved package (selected mod files plus metadata) and a
//! configured source port, build the argument vector, resolve the
//! savegame to resume, expand user-parameter templates, and dispatch
//! the engine as a detached child process.

pub mod launch;
pub mod logging;
pub mod store;
