pub mod profile_loader;

pub use profile_loader::ProfileLoader;
