pub mod history;
pub mod sessions;
