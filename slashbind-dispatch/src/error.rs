use slashbind::error::{SchemaError, WireError};

#[non_exhaustive]
#[derive(thiserror::Error, Debug)]
pub enum DispatchError {
    #[error("schema: command={command}, {source}")]
    Schema {
        command: String,
        #[source]
        source: SchemaError,
    },

    #[error("wire: {0}")]
    Wire(#[from] WireError),

    #[error("no tokio runtime available when binding command: {0}")]
    NoRuntime(String),
}
