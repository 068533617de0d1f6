//! Persisting exchanges to disk.
//!
//! Artifacts land at `<root>/<hostname>/<file name>`, where the file name is
//! either the SHA-1 of the rendered bytes or a static name derived from the
//! hostname (see [`Naming`]).

mod archive;
mod fs;
mod naming;

pub use archive::Archive;
pub use fs::{ensure_dir, write_artifact};
pub use naming::{artifact_path, content_hash_file_name, static_file_name, Naming};
