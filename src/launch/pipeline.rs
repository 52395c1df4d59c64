//! Pipeline — ties the launch stages together.

use tracing::debug;

use crate::launch::classifier::{classify, ObligeRequest};
use crate::launch::composer::{compose_args, SAVES_DIRNAME};
use crate::launch::error::LaunchError;
use crate::launch::invoker::{spawn_detached, LaunchCommand};
use crate::launch::savegame::last_save_game;
use crate::store::{Package, SelectionEntry, Store};

/// Outcome of a launch request: the launched package, or the first
/// failure on the way to the spawn call. `Ok` means the child was
/// started, not that the game ran correctly.
pub type LaunchResult = Result<Package, LaunchError>;

/// Compose the platform-shaped command for a launch without
/// dispatching it. This is everything short of the spawn call, so it
/// also backs `--dry-run`.
pub fn build_launch_command(
    store: &Store,
    package: &Package,
    selected: &[SelectionEntry],
    load_last: bool,
    oblige: &ObligeRequest,
) -> Result<LaunchCommand, LaunchError> {
    // Stage 1: collaborator documents
    let settings = store.settings()?;
    let ports = store.sourceports()?;
    let port = ports
        .iter()
        .find(|p| p.id == package.sourceport)
        .ok_or_else(|| LaunchError::SourcePortNotFound {
            id: package.sourceport.clone(),
        })?;

    // Stage 2: classify the selection
    let package_dir = settings.savepath.join(&package.datapath);
    let files = classify(selected, oblige, &package_dir);
    debug!(
        deh = files.deh.len(),
        bex = files.bex.len(),
        data = files.data.len(),
        "classified selection"
    );

    // Stage 3: resolve the savegame to resume (the only filesystem
    // read before the spawn)
    let last_save = if port.has_savedir && load_last {
        last_save_game(&package_dir.join(SAVES_DIRNAME))
    } else {
        None
    };
    if let Some(name) = &last_save {
        debug!(save = %name, "resuming last savegame");
    }

    // Stage 4: compose the vector and shape it for the host
    let args = compose_args(package, port, &settings, &files, last_save.as_deref());
    Ok(LaunchCommand::for_host(&port.binary, args))
}

/// Launch a package: compose the command and dispatch it as a
/// detached child.
///
/// Never panics; every failure comes back as a [`LaunchError`].
/// Concurrent launches share no state beyond the filesystem, which is
/// treated as externally synchronized.
pub async fn launch(
    store: &Store,
    package: &Package,
    selected: &[SelectionEntry],
    load_last: bool,
    oblige: &ObligeRequest,
) -> LaunchResult {
    let command = build_launch_command(store, package, selected, load_last, oblige)?;
    spawn_detached(&command)?;
    Ok(package.clone())
}
