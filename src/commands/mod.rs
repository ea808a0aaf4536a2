pub mod check_name;
pub mod context;
pub mod files;
pub mod status;
pub mod workspaces;

pub use check_name::*;
pub use context::*;
pub use files::*;
pub use status::*;
pub use workspaces::*;
