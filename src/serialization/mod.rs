mod codec;
mod error;
mod iso_duration;
mod json_parse_node;
mod json_serialization_writer;
mod parsable;
mod parse_node;
mod registry;
mod serialization_writer;
mod wire_enum;

pub use codec::{decode_as, decode_into, decode_payload, decode_value, encode, encode_to_string};
pub use error::{DecodeError, EncodeError};
pub use iso_duration::{IsoDuration, IsoDurationError};
pub use json_parse_node::JsonParseNode;
pub use json_serialization_writer::JsonSerializationWriter;
pub use parsable::{AdditionalData, Discriminated, ODATA_TYPE_KEY, Parsable, assign_present, new_discriminated};
pub use parse_node::{ElementVisitor, Factory, FieldVisitor, ParseNode, ParseNodeExt};
pub use registry::{Constructor, DiscriminatorRegistry};
pub use serialization_writer::{SerializationWriter, SerializationWriterExt, object_refs};
pub(crate) use wire_enum::impl_wire_enum;
pub use wire_enum::WireEnum;
