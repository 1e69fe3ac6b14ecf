use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    #[default]
    Pending,
    Confirmed,
    Shipped,
    Delivered,
    Cancelled,
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrderStatus::Pending => write!(f, "pending"),
            OrderStatus::Confirmed => write!(f, "confirmed"),
            OrderStatus::Shipped => write!(f, "shipped"),
            OrderStatus::Delivered => write!(f, "delivered"),
            OrderStatus::Cancelled => write!(f, "cancelled"),
        }
    }
}

impl std::str::FromStr for OrderStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(OrderStatus::Pending),
            "confirmed" => Ok(OrderStatus::Confirmed),
            "shipped" => Ok(OrderStatus::Shipped),
            "delivered" => Ok(OrderStatus::Delivered),
            "cancelled" => Ok(OrderStatus::Cancelled),
            _ => Err(format!("Invalid order status: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentMethod {
    /// Pay when the order arrives.
    #[default]
    #[serde(rename = "cod")]
    CashOnDelivery,
    #[serde(rename = "card")]
    Card,
}

impl std::fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PaymentMethod::CashOnDelivery => write!(f, "cod"),
            PaymentMethod::Card => write!(f, "card"),
        }
    }
}

impl std::str::FromStr for PaymentMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cod" => Ok(PaymentMethod::CashOnDelivery),
            "card" => Ok(PaymentMethod::Card),
            _ => Err(format!("Invalid payment method: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Emirate {
    #[serde(rename = "Abu Dhabi")]
    AbuDhabi,
    Dubai,
    Sharjah,
    Ajman,
    #[serde(rename = "Umm Al Quwain")]
    UmmAlQuwain,
    #[serde(rename = "Ras Al Khaimah")]
    RasAlKhaimah,
    Fujairah,
}

impl Emirate {
    pub const ALL: [Emirate; 7] = [
        Emirate::AbuDhabi,
        Emirate::Dubai,
        Emirate::Sharjah,
        Emirate::Ajman,
        Emirate::UmmAlQuwain,
        Emirate::RasAlKhaimah,
        Emirate::Fujairah,
    ];
}

impl std::fmt::Display for Emirate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Emirate::AbuDhabi => write!(f, "Abu Dhabi"),
            Emirate::Dubai => write!(f, "Dubai"),
            Emirate::Sharjah => write!(f, "Sharjah"),
            Emirate::Ajman => write!(f, "Ajman"),
            Emirate::UmmAlQuwain => write!(f, "Umm Al Quwain"),
            Emirate::RasAlKhaimah => write!(f, "Ras Al Khaimah"),
            Emirate::Fujairah => write!(f, "Fujairah"),
        }
    }
}

impl std::str::FromStr for Emirate {
    type Err = String;

    /// Accepts the display name in any case, with or without spaces.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted: String = s
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect::<String>()
            .to_lowercase();
        Emirate::ALL
            .into_iter()
            .find(|e| {
                e.to_string()
                    .chars()
                    .filter(|c| !c.is_whitespace())
                    .collect::<String>()
                    .to_lowercase()
                    == wanted
            })
            .ok_or_else(|| format!("Invalid emirate: {}", s))
    }
}
