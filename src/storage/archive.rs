//! Saving exchanges under a storage root.

use std::path::{Path, PathBuf};

use log::debug;

use crate::config::ArchiveConfig;
use crate::error_handling::SaveError;
use crate::exchange::{Exchange, RenderMode};
use crate::storage::fs::{ensure_dir, write_artifact};
use crate::storage::naming::{artifact_path, Naming};

impl Exchange {
    /// Saves the exchange under `root` and returns the artifact path.
    ///
    /// `static_output` names the file after the hostname instead of the
    /// content digest; `no_headers` saves only the body. The digest is taken
    /// over whatever is written, so toggling `no_headers` changes the name.
    ///
    /// # Errors
    ///
    /// Returns `SaveError::DirectoryCreation` or `SaveError::Write`, both
    /// carrying the path that was being written.
    pub fn save(
        &self,
        root: impl AsRef<Path>,
        static_output: bool,
        no_headers: bool,
    ) -> Result<PathBuf, SaveError> {
        self.save_with(
            root,
            Naming::from_static_output(static_output),
            RenderMode::from_no_headers(no_headers),
        )
    }

    /// Saves the exchange with an explicit naming and render mode.
    pub fn save_with(
        &self,
        root: impl AsRef<Path>,
        naming: Naming,
        mode: RenderMode,
    ) -> Result<PathBuf, SaveError> {
        let content = self.render(mode);
        let hostname = self.request().hostname();
        let file_name = naming.file_name(hostname, &content);
        let path = artifact_path(root.as_ref(), hostname, &file_name);

        debug!(
            "Saving {} ({:?}, {:?}) to {}",
            self.request().url(),
            naming,
            mode,
            path.display()
        );

        if let Some(dir) = path.parent() {
            if let Err(source) = ensure_dir(dir) {
                return Err(SaveError::DirectoryCreation { path, source });
            }
        }

        if let Err(source) = write_artifact(&path, &content) {
            return Err(SaveError::Write { path, source });
        }

        Ok(path)
    }
}

/// A storage root with default naming and render modes.
///
/// ```no_run
/// use exchange_archive::{Archive, Exchange, Request};
///
/// let archive = Archive::new("captures");
/// let request = Request::new("GET", "example.com").unwrap();
/// let exchange = Exchange::new(request).with_status("200 OK", 200).with_body("hi");
/// let path = archive.save(&exchange).unwrap();
/// println!("saved {}", path.display());
/// ```
#[derive(Debug, Clone)]
pub struct Archive {
    root: PathBuf,
    naming: Naming,
    mode: RenderMode,
}

impl Archive {
    /// Content-hash naming and full renders under `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            naming: Naming::default(),
            mode: RenderMode::default(),
        }
    }

    pub fn from_config(config: &ArchiveConfig) -> Self {
        Self {
            root: config.output_dir.clone(),
            naming: config.naming(),
            mode: config.render_mode(),
        }
    }

    pub fn with_naming(mut self, naming: Naming) -> Self {
        self.naming = naming;
        self
    }

    pub fn with_render_mode(mut self, mode: RenderMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn naming(&self) -> Naming {
        self.naming
    }

    pub fn render_mode(&self) -> RenderMode {
        self.mode
    }

    /// Path `exchange` would be saved to, without touching the filesystem.
    pub fn path_for(&self, exchange: &Exchange) -> PathBuf {
        let content = exchange.render(self.mode);
        let hostname = exchange.request().hostname();
        artifact_path(
            &self.root,
            hostname,
            &self.naming.file_name(hostname, &content),
        )
    }

    /// Saves `exchange` under this archive's root.
    ///
    /// # Errors
    ///
    /// See [`Exchange::save_with`].
    pub fn save(&self, exchange: &Exchange) -> Result<PathBuf, SaveError> {
        exchange.save_with(&self.root, self.naming, self.mode)
    }
}
