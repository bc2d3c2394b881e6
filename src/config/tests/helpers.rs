//! Shared test helpers for configuration tests.

use ortho_config::MergeComposer;
use serde_json::Value;

use crate::ReviewdeskConfig;

/// One configuration source, in increasing order of precedence.
#[derive(Debug, Clone)]
pub enum Layer {
    /// Built-in defaults.
    Defaults(Value),
    /// A discovered configuration file.
    File(Value),
    /// `REVIEWDESK_*` environment variables.
    Environment(Value),
    /// Command-line flags.
    Cli(Value),
}

/// Merges `layers` in the order given into a [`ReviewdeskConfig`].
///
/// The serialised [`ReviewdeskConfig::default`] is always pushed first, as
/// the loader does, so an empty `layers` yields the defaults.
pub fn merge(layers: Vec<Layer>) -> ReviewdeskConfig {
    let mut composer = MergeComposer::new();
    let defaults =
        serde_json::to_value(ReviewdeskConfig::default()).expect("defaults should serialise");
    composer.push_defaults(defaults);
    for layer in layers {
        match layer {
            Layer::Defaults(value) => composer.push_defaults(value),
            Layer::File(value) => composer.push_file(value, None),
            Layer::Environment(value) => composer.push_environment(value),
            Layer::Cli(value) => composer.push_cli(value),
        }
    }

    ReviewdeskConfig::merge_from_layers(composer.layers()).expect("layers should merge")
}
