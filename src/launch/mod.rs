//! Launch pipeline for a package on a configured source port.
//!
//! ```text
//! Package + SourcePort + Settings → Classify → Resolve save → Compose → Invoke
//! ```
//!
//! Each stage is a pure function except the savegame resolver (one
//! directory listing) and the final spawn. No stage holds state
//! across launches; repeated calls with the same inputs are
//! independent.

mod classifier;
mod composer;
mod error;
mod invoker;
mod pipeline;
mod savegame;

pub use classifier::{classify, ClassifiedFiles, ObligeRequest, GENERATED_FILENAME};
pub use composer::{compose_args, CommandComposer, SAVES_DIRNAME};
pub use error::LaunchError;
pub use invoker::{spawn_detached, LaunchCommand};
pub use pipeline::{build_launch_command, launch, LaunchResult};
pub use savegame::last_save_game;
