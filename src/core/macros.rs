//! Macros for declaring drink subtypes.

/// Declare a closed set of drink subtypes for one family.
///
/// Each variant lists its display label followed by the literal defaults a
/// freshly made drink of that subtype carries (name, temperature). The macro
/// derives serde support and generates the `Variant`, `FromStr` and
/// `Display` implementations, so the name→subtype mapping is exhaustive at
/// compile time.
///
/// # Example
///
/// ```
/// use barista::core::Variant;
/// use barista::variant_enum;
///
/// variant_enum! {
///     pub enum JuiceKind for "juice" {
///         Orange => ("Orange", "Orange Juice", 5),
///         Apple => ("Apple", "Apple Juice", 5),
///     }
/// }
///
/// let kind: JuiceKind = "orange".parse().unwrap();
/// assert_eq!(kind, JuiceKind::Orange);
/// assert_eq!(kind.defaults().name, "Orange Juice");
/// assert!("Mango".parse::<JuiceKind>().is_err());
/// ```
#[macro_export]
macro_rules! variant_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident for $family:literal {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => ($label:literal, $default_name:literal, $temperature:literal)
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::Variant for $name {
            const FAMILY: &'static str = $family;

            fn label(&self) -> &'static str {
                match self {
                    $(Self::$variant => $label),*
                }
            }

            fn defaults(&self) -> $crate::core::Defaults {
                match self {
                    $(Self::$variant => $crate::core::Defaults {
                        name: $default_name,
                        temperature: $temperature,
                    }),*
                }
            }

            fn all() -> &'static [Self] {
                &[$(Self::$variant),*]
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::BaristaError;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                <Self as $crate::core::Variant>::all()
                    .iter()
                    .copied()
                    .find(|v| $crate::core::Variant::label(v).eq_ignore_ascii_case(s))
                    .ok_or_else(|| $crate::BaristaError::UnknownVariant {
                        family: $family,
                        name: s.to_string(),
                    })
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::core::Variant::label(self))
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::core::Variant;
    use crate::BaristaError;

    variant_enum! {
        enum TestKind for "test" {
            Hot => ("Hot", "Hot Test", 90),
            Cold => ("Cold", "Cold Test", 4),
        }
    }

    #[test]
    fn variant_enum_macro_generates_trait() {
        assert_eq!(TestKind::FAMILY, "test");
        assert_eq!(TestKind::Hot.label(), "Hot");
        assert_eq!(TestKind::Cold.defaults().name, "Cold Test");
        assert_eq!(TestKind::Cold.defaults().temperature, 4);
        assert_eq!(TestKind::all(), &[TestKind::Hot, TestKind::Cold]);
    }

    #[test]
    fn parsing_ignores_case() {
        assert_eq!("hot".parse::<TestKind>(), Ok(TestKind::Hot));
        assert_eq!("COLD".parse::<TestKind>(), Ok(TestKind::Cold));
    }

    #[test]
    fn padded_label_is_rejected() {
        assert_eq!(
            " Hot ".parse::<TestKind>(),
            Err(BaristaError::UnknownVariant {
                family: "test",
                name: " Hot ".to_string(),
            })
        );
    }

    #[test]
    fn unknown_label_is_rejected() {
        let result = "Lukewarm".parse::<TestKind>();

        assert_eq!(
            result,
            Err(BaristaError::UnknownVariant {
                family: "test",
                name: "Lukewarm".to_string(),
            })
        );
    }

    #[test]
    fn display_prints_label() {
        assert_eq!(TestKind::Hot.to_string(), "Hot");
    }

    #[test]
    fn variant_enum_supports_visibility() {
        variant_enum! {
            pub enum PublicKind for "public" {
                Only => ("Only", "Only One", 1),
            }
        }

        let _kind = PublicKind::Only;
    }
}
