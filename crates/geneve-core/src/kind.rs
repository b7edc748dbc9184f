//! Field kinds declared by a schema.

use std::fmt;
use std::str::FromStr;

use crate::error::GeneveError;

/// The type a schema declares for a field.
///
/// Closed set: solvers are registered per kind, so a missing solver is a
/// registry lookup miss rather than an unknown string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum FieldKind {
    Boolean,
    Long,
    Integer,
    Short,
    Byte,
    Double,
    Float,
    Keyword,
    ConstantKeyword,
    Wildcard,
    Text,
    Ip,
    Date,
}

impl FieldKind {
    pub const ALL: [FieldKind; 13] = [
        FieldKind::Boolean,
        FieldKind::Long,
        FieldKind::Integer,
        FieldKind::Short,
        FieldKind::Byte,
        FieldKind::Double,
        FieldKind::Float,
        FieldKind::Keyword,
        FieldKind::ConstantKeyword,
        FieldKind::Wildcard,
        FieldKind::Text,
        FieldKind::Ip,
        FieldKind::Date,
    ];

    /// Schema type name.
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldKind::Boolean => "boolean",
            FieldKind::Long => "long",
            FieldKind::Integer => "integer",
            FieldKind::Short => "short",
            FieldKind::Byte => "byte",
            FieldKind::Double => "double",
            FieldKind::Float => "float",
            FieldKind::Keyword => "keyword",
            FieldKind::ConstantKeyword => "constant_keyword",
            FieldKind::Wildcard => "wildcard",
            FieldKind::Text => "text",
            FieldKind::Ip => "ip",
            FieldKind::Date => "date",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldKind {
    type Err = GeneveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| GeneveError::UnknownFieldKind(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_type_names() {
        assert_eq!("boolean".parse::<FieldKind>().unwrap(), FieldKind::Boolean);
        assert_eq!(
            "constant_keyword".parse::<FieldKind>().unwrap(),
            FieldKind::ConstantKeyword
        );
        for kind in FieldKind::ALL {
            assert_eq!(kind.to_string().parse::<FieldKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_unknown_type_name() {
        assert_eq!(
            "geo_point".parse::<FieldKind>(),
            Err(GeneveError::UnknownFieldKind("geo_point".to_string()))
        );
    }
}
