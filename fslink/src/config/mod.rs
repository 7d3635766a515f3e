//! Configuration system for fslink.
//!
//! Settings are merged from several sources, highest precedence first:
//!
//! 1. Programmatic overrides (via `ConfigBuilder::with_config`)
//! 2. Environment variables (`FSLINK_*`)
//! 3. Project config (`fslink.yaml`, nearest ancestor of the working directory)
//! 4. User config (`~/.fslink/config.yaml`)
//! 5. Built-in defaults
//!
//! # Examples
//!
//! ```
//! use fslink::config::{Config, ConfigBuilder};
//! use fslink::path::LinkTargetPolicy;
//!
//! let config = ConfigBuilder::new()
//!     .skip_files()
//!     .skip_env()
//!     .with_config(Config {
//!         link_policy: Some(LinkTargetPolicy::Contained),
//!         ..Default::default()
//!     })
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.link_policy(), LinkTargetPolicy::Contained);
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod merger;
pub mod schema;

pub use builder::ConfigBuilder;
pub use environment::EnvironmentConfig;
pub use loader::{ConfigLoader, ConfigSource};
pub use merger::ConfigMerger;
pub use schema::Config;
