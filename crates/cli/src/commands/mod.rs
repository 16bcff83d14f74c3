pub mod apply;
pub mod delete;
pub mod init;

pub use apply::apply_command;
pub use delete::delete_command;
pub use init::init_command;
