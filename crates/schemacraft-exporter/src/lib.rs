//! Render a schemacraft [`Schema`](schemacraft_core::Schema) into PostgreSQL,
//! MySQL, Prisma, Drizzle, or canonical JSON text.

pub mod canonical;
pub mod dispatch;
pub mod drizzle;
pub mod emitter;
pub mod error;
pub mod prisma;
pub mod sql;
pub mod typemap;

pub use canonical::{CanonicalEmitter, emit_canonical, parse_canonical};
pub use dispatch::{ExportOutput, Exporter, export, export_by_name};
pub use drizzle::DrizzleEmitter;
pub use emitter::SchemaEmitter;
pub use error::ExportError;
pub use prisma::PrismaEmitter;
pub use schemacraft_config::ExportFormat;
pub use sql::{SqlDialect, SqlEmitter};
pub use typemap::{AbstractType, Target, map_type};
