//! `map` command: export the network as GeoJSON.

use camino::Utf8PathBuf;
use clap::Parser;
use deliverynet_core::{MapRenderer, MapScene};
use deliverynet_map::GeoJsonRenderer;
use log::{debug, info};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use std::io::BufWriter;

use crate::network::{load_network, select_route};
use crate::{ARG_MAP_OUTPUT, ARG_NETWORK, ARG_NO_HIGHLIGHT, ARG_ROUTE, CliError, ENV_MAP_OUTPUT};

/// CLI arguments for the `map` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "map",
    long_about = "Write the delivery network as a GeoJSON feature collection: \
                 one point per location, one line per directed edge and a \
                 travel-time label at each edge midpoint. The selected \
                 route is flagged as highlighted unless --no-highlight is \
                 given.",
    about = "Export the network map as GeoJSON"
)]
#[ortho_config(prefix = "DELIVERYNET")]
pub(crate) struct MapArgs {
    /// Path to a JSON network document.
    #[arg(long = ARG_NETWORK, value_name = "path")]
    #[serde(default)]
    pub(crate) network: Option<Utf8PathBuf>,
    /// Name of the route to highlight. Defaults to the first declared route.
    #[arg(long = ARG_ROUTE, value_name = "name")]
    #[serde(default)]
    pub(crate) route: Option<String>,
    /// Draw the plain network without highlighting a route.
    #[arg(
        long = ARG_NO_HIGHLIGHT,
        value_name = "bool",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true"
    )]
    #[serde(default)]
    pub(crate) no_highlight: Option<bool>,
    /// Destination of the GeoJSON file.
    #[arg(long = ARG_MAP_OUTPUT, value_name = "path")]
    #[serde(default)]
    pub(crate) output: Option<Utf8PathBuf>,
}

impl MapArgs {
    pub(crate) fn into_config(self) -> Result<MapConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        MapConfig::try_from(merged)
    }
}

/// Resolved `map` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct MapConfig {
    /// Network document, or `None` for the sample network.
    pub(crate) network: Option<Utf8PathBuf>,
    /// Route to highlight, or `None` for the first declared route.
    pub(crate) route: Option<String>,
    /// Whether to skip highlighting.
    pub(crate) no_highlight: bool,
    /// GeoJSON destination.
    pub(crate) output: Utf8PathBuf,
}

impl TryFrom<MapArgs> for MapConfig {
    type Error = CliError;

    fn try_from(args: MapArgs) -> Result<Self, Self::Error> {
        let output = args.output.ok_or(CliError::MissingArgument {
            field: ARG_MAP_OUTPUT,
            env: ENV_MAP_OUTPUT,
        })?;
        Ok(Self {
            network: args.network,
            route: args.route,
            no_highlight: args.no_highlight.unwrap_or(false),
            output,
        })
    }
}

pub(super) fn run_map(args: MapArgs) -> Result<(), CliError> {
    let config = args.into_config()?;
    let network = load_network(config.network.as_deref())?;

    let highlight = if config.no_highlight {
        None
    } else if config.route.is_none() && network.routes.is_empty() {
        debug!("network declares no routes, drawing it without a highlight");
        None
    } else {
        Some(select_route(&network, config.route.as_deref())?)
    };
    let scene = MapScene::build(&network.graph, highlight.map(|named| &named.route));

    let file = deliverynet_fs::create_utf8_file(&config.output).map_err(|source| {
        CliError::CreateMapOutput {
            path: config.output.clone(),
            source,
        }
    })?;
    let mut renderer = GeoJsonRenderer::new(BufWriter::new(file));
    renderer
        .render(&scene)
        .map_err(|source| CliError::RenderMap {
            path: config.output.clone(),
            source,
        })?;
    renderer
        .into_inner()
        .into_inner()
        .map_err(|err| CliError::RenderMap {
            path: config.output.clone(),
            source: err.into_error().into(),
        })?;
    info!("wrote map to {}", config.output);
    Ok(())
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<MapConfig, CliError> {
    let merged = MapArgs::merge_from_layers(layers).map_err(CliError::from)?;
    MapConfig::try_from(merged)
}
