/// An enumeration exchanged on the wire by its exact, case-sensitive name.
///
/// Decoding never fails: values added by the server after this model was generated are kept as
/// `Unrecognized(raw)` and written back unchanged.
pub trait WireEnum: Sized {
    fn from_wire(raw: &str) -> Self;

    fn wire_value(&self) -> &str;
}

/// Implements [`WireEnum`] for an enum deriving `strum::EnumString` and `strum::IntoStaticStr` whose catch-all variant
/// is `#[strum(default)] Unrecognized(String)`.
macro_rules! impl_wire_enum {
    ($name:ident) => {
        impl $crate::serialization::WireEnum for $name {
            fn from_wire(raw: &str) -> Self {
                let value = <$name as std::str::FromStr>::from_str(raw).unwrap_or_else(|_| $name::Unrecognized(raw.to_owned()));
                if let $name::Unrecognized(raw) = &value {
                    tracing::debug!(enumeration = stringify!($name), value = raw.as_str(), "Unrecognized enumeration value");
                }
                value
            }

            fn wire_value(&self) -> &str {
                match self {
                    $name::Unrecognized(raw) => raw,
                    known => {
                        let name: &'static str = known.into();
                        name
                    }
                }
            }
        }
    };
}

pub(crate) use impl_wire_enum;
