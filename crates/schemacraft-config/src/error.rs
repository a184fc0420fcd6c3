use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unknown export format '{0}' (expected one of: postgresql, mysql, prisma, drizzle, json)")]
    UnknownFormat(String),
}
