// Interchange adapters for callmap.

pub mod json_codec;
pub mod structure;

pub use json_codec::{escape, CodecError, JsonGraphCodec};
pub use structure::{check_structure, is_valid_structure, StructureViolation};
