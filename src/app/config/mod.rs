//! Environment-backed configuration loading.
//!
//! Pure schema parsing and validation live in `domain::configuration`.

mod load_config;

pub use load_config::{
    CONFIG_PATH_ENV, RUNTIME_PROGRAM_ENV, TEMPLATE_TIMEOUT_ENV, TEMPLATE_URL_ENV, load_config,
    load_config_with, parse_config_content,
};
