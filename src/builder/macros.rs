//! Macros for declaring cycle stage enums.

/// Declare a stage enum with labels and terminal/fault classification.
///
/// Generates the enum with the usual value derives plus `label`,
/// `is_final` and `is_error` methods.
///
/// # Example
///
/// ```
/// use washcycle::stage_enum;
///
/// stage_enum! {
///     pub enum RinseStage {
///         Waiting => "waiting",
///         Rinsing => "rinsing",
///         Done => "done",
///         Jammed => "jammed",
///     }
///     final: [Done, Jammed]
///     error: [Jammed]
/// }
///
/// assert_eq!(RinseStage::Rinsing.label(), "rinsing");
/// assert!(RinseStage::Jammed.is_error());
/// ```
#[macro_export]
macro_rules! stage_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => $label:literal
            ),* $(,)?
        }

        $(final: [$($final:ident),* $(,)?])?
        $(error: [$($error:ident),* $(,)?])?
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $name {
            /// Short lowercase label used in logs.
            pub fn label(&self) -> &'static str {
                match self {
                    $(Self::$variant => $label),*
                }
            }

            /// Whether the cycle ends in this stage.
            pub fn is_final(&self) -> bool {
                match self {
                    $($(Self::$final => true,)*)?
                    _ => false,
                }
            }

            /// Whether this stage represents a failed cycle.
            pub fn is_error(&self) -> bool {
                match self {
                    $($(Self::$error => true,)*)?
                    _ => false,
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.label())
            }
        }
    };
}
