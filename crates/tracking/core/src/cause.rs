//! Named provenance records.
//!
//! A [`NamedCause`] pairs a name with an arbitrary value: "this value, known
//! as X, contributed to the current operation". Values are type-erased behind
//! [`CauseObject`] and recovered by downcasting to their concrete type.
use core::any::Any;
use core::fmt;
use std::borrow::Cow;

use crate::capture::CaptureKind;

/// A value that can be registered as a cause.
///
/// Implemented for every `'static` type that is `Debug + PartialEq`, so
/// callers never implement it by hand.
pub trait CauseObject: Any + fmt::Debug {
    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;

    /// Structural equality across erased values; false if the types differ.
    fn dyn_eq(&self, other: &dyn CauseObject) -> bool;

    fn type_name(&self) -> &'static str;
}

impl<T> CauseObject for T
where
    T: Any + fmt::Debug + PartialEq,
{
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn dyn_eq(&self, other: &dyn CauseObject) -> bool {
        other
            .as_any()
            .downcast_ref::<T>()
            .is_some_and(|other| self == other)
    }

    fn type_name(&self) -> &'static str {
        core::any::type_name::<T>()
    }
}

/// Name under which a cause is registered.
///
/// Reserved names are closed variants; everything else is `Custom`.
/// Capture names can only be produced by the context itself when a capture
/// category is declared.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum CauseName {
    /// The direct source of the operation.
    Source,
    /// Slot created by an `add_*_captures` declaration.
    Capture(CaptureKind),
    Custom(Cow<'static, str>),
}

impl CauseName {
    pub const SOURCE: &'static str = "source";

    /// Maps a free-form name to its variant.
    ///
    /// Only the exact string `"source"` is reserved; a custom cause that
    /// happens to reuse a capture name stays custom.
    pub fn parse(name: impl Into<Cow<'static, str>>) -> Self {
        let name = name.into();
        if name == Self::SOURCE {
            Self::Source
        } else {
            Self::Custom(name)
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Source => Self::SOURCE,
            Self::Capture(kind) => kind.as_ref(),
            Self::Custom(name) => name.as_ref(),
        }
    }

    /// Case-insensitive comparison against a lookup name.
    ///
    /// Characters are compared one by one under Unicode case mapping, so
    /// `"état"` matches `"ÉTAT"`.
    pub fn matches(&self, name: &str) -> bool {
        let own = self.as_str();
        own.chars().count() == name.chars().count()
            && own
                .chars()
                .zip(name.chars())
                .all(|(left, right)| chars_match_ignoring_case(left, right))
    }
}

fn chars_match_ignoring_case(left: char, right: char) -> bool {
    left == right
        || left.to_uppercase().eq(right.to_uppercase())
        || left.to_lowercase().eq(right.to_lowercase())
}

impl fmt::Display for CauseName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single `(name, value)` provenance record.
pub struct NamedCause {
    name: CauseName,
    value: Box<dyn CauseObject>,
}

impl NamedCause {
    pub fn of<T: CauseObject>(name: impl Into<Cow<'static, str>>, value: T) -> Self {
        Self {
            name: CauseName::parse(name),
            value: Box::new(value),
        }
    }

    /// Shorthand for a cause named `"source"`.
    pub fn source<T: CauseObject>(value: T) -> Self {
        Self {
            name: CauseName::Source,
            value: Box::new(value),
        }
    }

    pub(crate) fn capture<T: CauseObject>(kind: CaptureKind, supplier: T) -> Self {
        Self {
            name: CauseName::Capture(kind),
            value: Box::new(supplier),
        }
    }

    pub fn name(&self) -> &CauseName {
        &self.name
    }

    pub fn is_source(&self) -> bool {
        self.name == CauseName::Source
    }

    pub fn value(&self) -> &dyn CauseObject {
        self.value.as_ref()
    }

    pub(crate) fn value_mut(&mut self) -> &mut dyn CauseObject {
        self.value.as_mut()
    }

    pub fn is<T: Any>(&self) -> bool {
        self.value().as_any().is::<T>()
    }

    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.value().as_any().downcast_ref::<T>()
    }
}

impl PartialEq for NamedCause {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.value().dyn_eq(other.value())
    }
}

impl fmt::Debug for NamedCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NamedCause")
            .field("name", &self.name.as_str())
            .field("value", &self.value())
            .finish()
    }
}

impl fmt::Display for NamedCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {:?}", self.name, self.value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Player;

    #[test]
    fn only_the_exact_source_name_is_reserved() {
        assert_eq!(CauseName::parse("source"), CauseName::Source);
        assert_eq!(
            CauseName::parse("Source"),
            CauseName::Custom(Cow::Borrowed("Source"))
        );
        assert!(matches!(
            CauseName::parse("captured_blocks"),
            CauseName::Custom(_)
        ));
    }

    #[test]
    fn names_match_case_insensitively() {
        let name = CauseName::Capture(CaptureKind::Blocks);
        assert!(name.matches("CAPTURED_BLOCKS"));
        assert!(!name.matches("captured_block"));
        assert!(CauseName::parse("Tool").matches("tool"));
    }

    #[test]
    fn names_match_across_non_ascii_case() {
        assert!(CauseName::parse("état").matches("ÉTAT"));
        assert!(CauseName::parse("Straße").matches("STRAßE"));
        assert!(CauseName::parse("Ωmega").matches("ωMEGA"));
        assert!(!CauseName::parse("état").matches("etat"));
        assert!(!CauseName::parse("straße").matches("STRASSE"));
    }

    #[test]
    fn erased_equality_requires_same_type_and_value() {
        let steve = Player::named("Steve");
        let a = NamedCause::of("owner", steve.clone());
        let b = NamedCause::of("owner", steve.clone());
        let c = NamedCause::of("owner", "Steve");
        let d = NamedCause::of("notifier", steve);

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_ne!(a, d);
    }

    #[test]
    fn downcast_recovers_concrete_value() {
        let cause = NamedCause::source(42u32);

        assert!(cause.is_source());
        assert!(cause.is::<u32>());
        assert_eq!(cause.downcast_ref::<u32>(), Some(&42));
        assert_eq!(cause.downcast_ref::<i64>(), None);
        assert_eq!(cause.to_string(), "source: 42");
    }
}
