//! Command composer — builds the ordered argument vector for a launch.

use std::path::Path;

use crate::launch::classifier::ClassifiedFiles;
use crate::store::{Package, Settings, SourcePort};

/// Directory name for savegames inside a package directory.
pub const SAVES_DIRNAME: &str = "saves";

/// Builder for the argument vector passed to the source port,
/// excluding the executable itself.
///
/// Stage order is part of the contract: iwad, data files, resume
/// argument, config/save-directory parameters, DEH block, BEX block,
/// expanded user parameters. The resume argument must precede the
/// config/save-directory pair; some ports only honor it there.
#[derive(Debug, Clone)]
pub struct CommandComposer {
    args: Vec<String>,
}

impl CommandComposer {
    /// Start the vector with `-iwad <path>`.
    pub fn new(iwad: &Path) -> Self {
        Self {
            args: vec!["-iwad".into(), path_arg(iwad)],
        }
    }

    /// Emit `-file` followed by every data file, in classified order.
    ///
    /// The `-file` token is emitted even when the list is empty.
    pub fn with_data_files(mut self, data: &[impl AsRef<Path>]) -> Self {
        self.args.push("-file".into());
        self.args.extend(data.iter().map(|p| path_arg(p.as_ref())));
        self
    }

    /// Emit the resume-savegame pair, if a save was resolved.
    ///
    /// `last_save` is the bare file name inside `save_dir`; whether
    /// the emitted argument is the absolute path or the bare name
    /// follows `port.use_full_path`. Nothing is emitted when the port
    /// has no save-directory convention or no save was found.
    pub fn with_load_save(
        mut self,
        port: &SourcePort,
        save_dir: &Path,
        last_save: Option<&str>,
    ) -> Self {
        if !port.has_savedir {
            return self;
        }
        if let Some(name) = last_save {
            let load_arg = if port.use_full_path {
                path_arg(&save_dir.join(name))
            } else {
                name.to_string()
            };
            self.args.push(port.param_load.clone());
            self.args.push(load_arg);
        }
        self
    }

    /// Emit the port's trailing parameters: the config pair (when
    /// `has_config`) followed by the save-directory pair (when
    /// `has_savedir`).
    pub fn with_port_params(mut self, port: &SourcePort, package_dir: &Path) -> Self {
        if port.has_config {
            self.args.push(port.param_config.clone());
            self.args.push(path_arg(&package_dir.join(&port.config_filename)));
        }
        if port.has_savedir {
            self.args.push(port.param_save.clone());
            self.args.push(path_arg(&package_dir.join(SAVES_DIRNAME)));
        }
        self
    }

    /// Emit the `-deh` and `-bex` blocks for non-empty patch buckets.
    pub fn with_patches(mut self, deh: &[impl AsRef<Path>], bex: &[impl AsRef<Path>]) -> Self {
        if !deh.is_empty() {
            self.args.push("-deh".into());
            self.args.extend(deh.iter().map(|p| path_arg(p.as_ref())));
        }
        if !bex.is_empty() {
            self.args.push("-bex".into());
            self.args.extend(bex.iter().map(|p| path_arg(p.as_ref())));
        }
        self
    }

    /// Expand and append the package's free-text user parameters.
    ///
    /// Tokens are shell-like: maximal runs of non-whitespace,
    /// non-quote characters and double-quoted spans, concatenated.
    /// Every occurrence of `<data>` in a token becomes `savepath`,
    /// every `<package>` becomes the package directory; quote
    /// characters never reach the emitted tokens.
    pub fn with_userparams(mut self, raw: &str, savepath: &Path, package_dir: &Path) -> Self {
        if raw.trim().is_empty() {
            return self;
        }
        let data_root = path_arg(savepath);
        let package_root = path_arg(package_dir);
        self.args.extend(
            tokenize(raw)
                .into_iter()
                .map(|t| t.replace("<data>", &data_root).replace("<package>", &package_root)),
        );
        self
    }

    /// Finish and return the argument vector.
    pub fn build(self) -> Vec<String> {
        self.args
    }
}

/// Compose the full argument vector for a package on a port.
///
/// Pure: the caller resolves the last savegame beforehand (see
/// [`crate::launch::last_save_game`]) and passes the name in, so
/// composition itself touches no filesystem state.
pub fn compose_args(
    package: &Package,
    port: &SourcePort,
    settings: &Settings,
    files: &ClassifiedFiles,
    last_save: Option<&str>,
) -> Vec<String> {
    let package_dir = settings.savepath.join(&package.datapath);
    CommandComposer::new(&package.iwad)
        .with_data_files(&files.data)
        .with_load_save(port, &package_dir.join(SAVES_DIRNAME), last_save)
        .with_port_params(port, &package_dir)
        .with_patches(&files.deh, &files.bex)
        .with_userparams(&package.userparams, &settings.savepath, &package_dir)
        .build()
}

fn path_arg(path: &Path) -> String {
    path.display().to_string()
}

/// Split a user-parameter string into tokens.
///
/// A token is a maximal run of non-whitespace, non-quote characters
/// and double-quoted spans; quoted spans may contain whitespace and
/// adjacent runs concatenate (`-warp "my map".wad` is two tokens).
/// An unterminated quote spans to the end of the input. Quote
/// characters are dropped.
fn tokenize(input: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut started = false;
    let mut in_quotes = false;

    for c in input.chars() {
        if in_quotes {
            if c == '"' {
                in_quotes = false;
            } else {
                current.push(c);
            }
        } else if c == '"' {
            in_quotes = true;
            started = true;
        } else if c.is_whitespace() {
            if started {
                tokens.push(std::mem::take(&mut current));
                started = false;
            }
        } else {
            current.push(c);
            started = true;
        }
    }
    if started {
        tokens.push(current);
    }

    tokens
}
