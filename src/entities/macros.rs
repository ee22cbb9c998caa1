//! Macros for reducing boilerplate when defining record types

/// Declare a closed choice enum
///
/// Generates the enum with `Serialize`/`Deserialize` using the stored
/// values, plus [`Choice`](crate::core::Choice), `FromStr` and `Display`
/// (which renders the label).
///
/// # Example
/// ```rust,ignore
/// choice_enum!(
///     /// Laptop manufacturer
///     Brand, "brand", {
///         Apple => ("apple", "Apple"),
///         Hp => ("hp", "Hewlett-Packard"),
///     }
/// );
///
/// assert_eq!("hp".parse::<Brand>()?, Brand::Hp);
/// assert_eq!(Brand::Hp.to_string(), "Hewlett-Packard");
/// ```
#[macro_export]
macro_rules! choice_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $field:literal, {
            $( $variant:ident => ($value:literal, $label:literal) ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            Hash,
            ::serde::Serialize,
            ::serde::Deserialize,
        )]
        pub enum $name {
            $(
                #[serde(rename = $value)]
                $variant,
            )+
        }

        impl $crate::core::Choice for $name {
            const FIELD: &'static str = $field;

            fn all() -> &'static [Self] {
                &[$($name::$variant),+]
            }

            fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $value,)+
                }
            }

            fn label(&self) -> &'static str {
                match self {
                    $($name::$variant => $label,)+
                }
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::core::ChoiceError;

            fn from_str(value: &str) -> ::std::result::Result<Self, Self::Err> {
                <$name as $crate::core::Choice>::parse_choice(value)
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::core::Choice::label(self))
            }
        }

        impl From<$name> for $crate::core::FieldValue {
            fn from(value: $name) -> Self {
                $crate::core::FieldValue::String(
                    $crate::core::Choice::as_str(&value).to_string(),
                )
            }
        }
    };
}
