mod coerce_version;
mod get_jvmreq_config;
mod parse_properties;
mod tokio_local_fs;

pub use coerce_version::coerce_version;
pub use get_jvmreq_config::{CONFIG_DIR, CONFIG_FILE, get_jvmreq_config};
pub use parse_properties::{get_property, parse_properties};
pub use tokio_local_fs::TokioLocalFs;
