mod core;
mod loader;

pub use self::core::{
    CodemendConfig, LocaleMerge, LocalesConfig, ParamsPromiseConfig, ScenesConfig, SpliceConfig,
    SpliceJob, StatsMockConfig,
};
pub use loader::{
    directory_ancestors, discover_config, load_config, parse_and_validate_config,
    CONFIG_FILE_NAME,
};
