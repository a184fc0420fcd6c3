pub mod export;
pub mod formats;
pub mod init;
pub mod json_schema;

pub use export::{ExportArgs, cmd_export};
pub use formats::cmd_formats;
pub use init::cmd_init;
pub use json_schema::{SchemaKind, cmd_json_schema};
