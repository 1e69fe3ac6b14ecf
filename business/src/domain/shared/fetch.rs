/// Result of a screen fetch that never fails outright.
///
/// `Fallback` carries the static sample data (or empty list) shown when the
/// remote call did not succeed.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome<T> {
    Live(T),
    Fallback(T),
}

impl<T> FetchOutcome<T> {
    pub fn is_fallback(&self) -> bool {
        matches!(self, FetchOutcome::Fallback(_))
    }

    pub fn value(&self) -> &T {
        match self {
            FetchOutcome::Live(value) | FetchOutcome::Fallback(value) => value,
        }
    }

    pub fn into_inner(self) -> T {
        match self {
            FetchOutcome::Live(value) | FetchOutcome::Fallback(value) => value,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> FetchOutcome<U> {
        match self {
            FetchOutcome::Live(value) => FetchOutcome::Live(f(value)),
            FetchOutcome::Fallback(value) => FetchOutcome::Fallback(f(value)),
        }
    }
}
