mod handlers;
mod types;

pub use handlers::{create_reading, list_readings};
pub use types::{CreateReadingRequest, ListReadingsQuery, ReadingResponse};

// Re-export utoipa path structs for OpenAPI documentation
pub use handlers::{__path_create_reading, __path_list_readings};
