//! Configuration for a minamo build.
//!
//! Loading happens in two stages. The JSON (or YAML) document is parsed into
//! a [`RawConfig`], where every key is optional and unknown keys are ignored.
//! [`Config::load`] then attaches the values derived at load time (absolute
//! config path, config base name, timestamp, git revision, log target) and
//! produces an immutable [`Config`] snapshot.

mod fields;
mod model;
mod operations;
mod snapshot;
pub mod types;


// Re-export public API
pub use fields::{FieldExtractor, FieldRegistry};
pub use model::{
    AndroidSdkSection, BuildOptions, BuildSection, EditorUserBuildSection, IdentificationSection,
    KeystoreSection, PublishingSection, RawConfig, ResolutionAndPresentationSection,
    ScriptingSection, XrSection,
};
pub use snapshot::{Config, LoadedConfig};
pub use types::{ConfigFormat, DEFAULT_LOG_FILE, LogFile};
