//! CLI command implementations.
//!
//! - `readlink`: print the validated target of a link
//! - `lstat`: link-aware metadata
//! - `stat`: followed metadata
//! - `ls`: directory listing with unfollowed entry metadata
//! - `cat`: file contents

pub mod cat;
pub mod ls;
pub mod lstat;
pub mod readlink;
pub mod stat;

pub use cat::CatCommand;
pub use ls::LsCommand;
pub use lstat::LstatCommand;
pub use readlink::ReadlinkCommand;
pub use stat::StatCommand;
