mod config;
mod constraint;
mod extract;
mod inspect;
mod wrapper;

pub use config::ConfigArgs;
pub use config::handle_config;
pub use constraint::ConstraintArgs;
pub use constraint::handle_constraint;
pub use extract::ExtractArgs;
pub use extract::handle_extract;
pub use inspect::InspectArgs;
pub use inspect::handle_inspect;
pub use wrapper::WrapperArgs;
pub use wrapper::handle_wrapper;
