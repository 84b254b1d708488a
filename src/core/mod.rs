pub mod form;
pub mod history;
pub mod log;
pub mod session;
pub mod validate;
