//! Engine configuration and `.readscore.toml` discovery.

mod core;
mod loader;

pub use self::core::{
    HeuristicsConfig, ReadabilityConfig, DEFAULT_PUNCTUATION, DEFAULT_SENTENCE_BOUNDARY,
};

pub use self::loader::{
    directory_ancestors, load_config, load_config_from, load_config_from_path, parse_config,
    CONFIG_FILE_NAME,
};
