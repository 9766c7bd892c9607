//! Declarative helper for string-backed enumerations stored as Postgres enums.

/// Define a closed enumeration backed by a Postgres enum type.
///
/// Generates serde and sqlx mappings from the given string values, plus
/// `ALL`, `as_str()`, `Display`, and a `FromStr` that reports a validation
/// error listing the accepted values.
macro_rules! db_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident as $type_name:literal {
            $(
                $(#[$vmeta:meta])*
                $variant:ident => $value:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash,
            serde::Serialize, serde::Deserialize, sqlx::Type,
        )]
        #[sqlx(type_name = $type_name)]
        $vis enum $name {
            $(
                $(#[$vmeta])*
                #[serde(rename = $value)]
                #[sqlx(rename = $value)]
                $variant,
            )+
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// Return the stored string value.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $value,)+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = fitlink_core::AppError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($value => Ok(Self::$variant),)+
                    _ => {
                        let expected: Vec<&str> = Self::ALL.iter().map(|v| v.as_str()).collect();
                        Err(fitlink_core::AppError::validation(format!(
                            "Invalid {}: '{s}'. Expected one of: {}",
                            $type_name.replace('_', " "),
                            expected.join(", ")
                        )))
                    }
                }
            }
        }
    };
}
