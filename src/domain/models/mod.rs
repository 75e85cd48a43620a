pub mod config;
pub mod metadata;
pub mod profile;
pub mod secret;

pub use config::{
    AuthType, Config, ConnectType, InterfaceSettings, LoggingConfig, MetadataSettings,
    RotationPolicy, ServerSettings,
};
pub use metadata::{MetadataFeature, MetadataTables};
pub use profile::ServerProfile;
pub use secret::{Secret, REDACTED};
