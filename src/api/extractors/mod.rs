//! Custom request extractors.

mod id_path;
mod json_body;
mod validated_json;

pub use id_path::IdPath;
pub use json_body::JsonBody;
pub use validated_json::ValidatedJson;
