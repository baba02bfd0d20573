/// Adds `value()` and `from_value()` to a schema enumeration whose text
/// conversions come from the `strum` derives.
///
/// `from_value` reports an unknown literal as `Error::UnknownLiteral`
/// tagged with the given kind.
macro_rules! literal_text {
    ($name:ident, $kind:literal) => {
        impl $name {
            pub fn value(&self) -> &'static str {
                self.into()
            }

            pub fn from_value(value: &str) -> Result<Self, $crate::error::Error> {
                value
                    .parse()
                    .map_err(|_: ::strum::ParseError| $crate::error::Error::UnknownLiteral {
                        kind: $kind,
                        value: value.to_string(),
                    })
            }
        }
    };
}

pub(crate) use literal_text;
