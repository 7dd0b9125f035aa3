pub mod portfolio;
pub mod profile;
pub mod project;
pub mod snapshot;
pub mod template;
