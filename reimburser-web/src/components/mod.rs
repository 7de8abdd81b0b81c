pub(crate) mod alert;
pub(crate) mod loading;

pub use alert::{Alert, AlertTone};
pub use loading::Loading;
