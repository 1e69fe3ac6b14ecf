use serde::{Deserialize, Serialize};

/// Currency amounts in AED.
pub type Money = rust_decimal::Decimal;

macro_rules! string_identifier {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }
    };
}

string_identifier!(
    /// Identifier of a storefront account, assigned by the backend.
    UserId
);

string_identifier!(
    /// Catalog product identifier. Also the key of a cart line item.
    ProductId
);

string_identifier!(
    /// Order number assigned by the backend on submission (e.g. `ORD-001`).
    OrderId
);
