//! Loading the network a command works on.

use camino::Utf8Path;
use deliverynet_core::{NamedRoute, Network, NetworkDocument};
use log::debug;

use crate::CliError;

/// Load the network document at `path`, or the built-in sample when `None`.
pub(crate) fn load_network(path: Option<&Utf8Path>) -> Result<Network, CliError> {
    let Some(path) = path else {
        debug!("no network document given, using the sample network");
        return Ok(Network::sample());
    };
    require_existing(path, crate::ARG_NETWORK)?;
    let json = deliverynet_fs::read_utf8_to_string(path).map_err(|source| {
        CliError::ReadNetwork {
            path: path.to_path_buf(),
            source,
        }
    })?;
    NetworkDocument::from_json_str(&json)
        .and_then(NetworkDocument::into_network)
        .map_err(|source| CliError::InvalidNetwork {
            path: path.to_path_buf(),
            source,
        })
}

/// The route called `name`, or the first declared route when `None`.
pub(crate) fn select_route<'a>(
    network: &'a Network,
    name: Option<&str>,
) -> Result<&'a NamedRoute, CliError> {
    match name {
        Some(name) => network.route(name).ok_or_else(|| CliError::UnknownRoute {
            name: name.to_owned(),
        }),
        None => network.default_route().ok_or(CliError::NoRoutes),
    }
}

pub(crate) fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
    match deliverynet_fs::file_is_file(path) {
        Ok(true) => Ok(()),
        Ok(false) => Err(CliError::SourcePathNotFile {
            field,
            path: path.to_path_buf(),
        }),
        Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
            Err(CliError::MissingSourceFile {
                field,
                path: path.to_path_buf(),
            })
        }
        Err(source) => Err(CliError::InspectSourcePath {
            field,
            path: path.to_path_buf(),
            source,
        }),
    }
}
