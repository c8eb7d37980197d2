//! Error types emitted by the DeliveryNet CLI.
//!
//! Metrics failures are not listed here: they are part of a report, not a
//! reason to abort the command.

use std::sync::Arc;

use camino::Utf8PathBuf;
use deliverynet_core::DocumentError;
use deliverynet_map::GeoJsonError;
use thiserror::Error;

/// Errors emitted by the DeliveryNet CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        field: &'static str,
        env: &'static str,
    },
    /// A referenced input path does not exist on disk.
    #[error("{field} path {path:?} does not exist")]
    MissingSourceFile {
        field: &'static str,
        path: Utf8PathBuf,
    },
    /// A referenced input path exists but is not a file.
    #[error("{field} path {path:?} exists but is not a file")]
    SourcePathNotFile {
        field: &'static str,
        path: Utf8PathBuf,
    },
    /// A referenced input path could not be inspected due to an IO error.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        field: &'static str,
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Reading the network document failed.
    #[error("failed to read network document at {path:?}: {source}")]
    ReadNetwork {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The network document is malformed or describes an invalid network.
    #[error("network document {path:?} is invalid: {source}")]
    InvalidNetwork {
        path: Utf8PathBuf,
        #[source]
        source: DocumentError,
    },
    /// The requested route is not declared by the network.
    #[error("route {name:?} is not defined by the network")]
    UnknownRoute { name: String },
    /// The network declares no route to evaluate.
    #[error("the network defines no routes; add one to the document")]
    NoRoutes,
    /// The depot override is not a location of the network.
    #[error("depot {depot:?} is not a location of the network")]
    UnknownDepot { depot: String },
    /// Serialising the JSON report failed.
    #[error("failed to serialise report: {0}")]
    SerialiseReport(#[source] serde_json::Error),
    /// Writing the report failed.
    #[error("failed to write report: {0}")]
    WriteReport(#[source] std::io::Error),
    /// Creating the map output file failed.
    #[error("failed to create map output at {path:?}: {source}")]
    CreateMapOutput {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Rendering the map to GeoJSON failed.
    #[error("failed to write map to {path:?}: {source}")]
    RenderMap {
        path: Utf8PathBuf,
        #[source]
        source: GeoJsonError,
    },
}
