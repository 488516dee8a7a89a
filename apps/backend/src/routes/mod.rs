pub mod analysis;
pub mod history;
pub mod pronunciation;
pub mod quiz;
pub mod settings;
pub mod vocabulary;
