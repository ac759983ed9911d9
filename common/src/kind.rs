//! Macros for defining kind enums.

/// Macro for defining a kind enum.
///
/// Variants are rendered and parsed in `kebab-case`, both by [`strum`] and,
/// with the `serde` feature of the calling crate enabled, by [`serde`].
/// Parsing and deserialization ignore ASCII case.
///
/// # Example
///
/// ```rust,ignore
/// use common::define_kind;
///
/// define_kind! {
///     #[doc = "Shape kind."]
///     enum Kind {
///         #[doc = "A cube"]
///         Cube = 1,
///
///         #[doc = "A sphere"]
///         Sphere = 2,
///     }
/// }
/// ```
///
/// [`serde`]: https://docs.rs/serde
#[expect(clippy::module_name_repetitions, reason = "more readable")]
#[macro_export]
macro_rules! define_kind {
    (
        #[doc = $doc:literal]
        enum $name:ident {
            $(
                #[doc = $variant_doc:literal]
                $variant:ident = $value:expr
            ),* $(,)?
        }
    ) => {
        #[derive(
            Clone,
            Copy,
            Debug,
            $crate::private::strum::Display,
            $crate::private::strum::EnumString,
            $crate::private::strum::VariantArray,
            $crate::private::strum::VariantNames,
            Eq,
            Hash,
            PartialEq,
        )]
        #[cfg_attr(
            feature = "serde",
            derive($crate::private::serde::Serialize),
            serde(rename_all = "kebab-case"),
        )]
        #[doc = $doc]
        #[repr(u8)]
        #[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
        pub enum $name {
            $(
                 #[doc = $variant_doc]
                 $variant = $value,
            )*
        }

        impl $name {
            /// Converts this into its [`u8`] representation.
            #[must_use]
            pub const fn u8(self) -> u8 {
                self as u8
            }
        }

        #[cfg(feature = "serde")]
        impl<'de> $crate::private::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: $crate::private::serde::Deserializer<'de>,
            {
                use $crate::private::serde::de::Error as _;

                let s = <
                    ::std::borrow::Cow<'de, str>
                        as $crate::private::serde::Deserialize<'de>
                >::deserialize(deserializer)?;
                s.parse().map_err(|_| {
                    D::Error::unknown_variant(
                        &s,
                        <Self as $crate::private::strum::VariantNames>
                            ::VARIANTS,
                    )
                })
            }
        }
    };
}
