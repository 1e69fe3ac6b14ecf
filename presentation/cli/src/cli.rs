//! Command-line surface: one subcommand per screen.

use clap::{Parser, Subcommand};

use business::domain::auth::model::{RegisterParams, Role};
use business::domain::content::skin::SkinType;
use business::domain::content::training::MaterialKind;
use business::domain::order::model::ShippingAddressProps;
use business::domain::order::use_cases::place::PlaceOrderParams;
use business::domain::order::value_objects::PaymentMethod;
use business::domain::product::filter::{CategoryFilter, ProductFilter};
use business::domain::shared::value_objects::ProductId;

use crate::screens::alert::{Alert, ScreenResult};
use crate::screens::auth::screen::AuthScreen;
use crate::screens::cart::screen::CartScreen;
use crate::screens::content::skin_analysis::SkinAnalysisScreen;
use crate::screens::content::training;
use crate::screens::order::screen::OrderScreen;
use crate::screens::product::screen::ProductScreen;
use crate::setup::dependency_injection::DependencyContainer;

#[derive(Parser)]
#[command(name = "storefront")]
#[command(version)]
#[command(about = "Genosys skincare storefront")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Sign in with email and password
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Create an account and sign in
    Register(RegisterArgs),
    /// Sign out and forget the saved session
    Logout,
    /// Show the signed-in user
    Profile,
    /// Browse the catalog
    Products {
        /// Match against product name or description
        #[arg(short, long)]
        search: Option<String>,
        /// One of the catalog categories, or "All"
        #[arg(short, long, default_value = "All")]
        category: CategoryFilter,
    },
    /// Show one product
    Product { id: String },
    /// Add a product to the cart
    Add {
        id: String,
        #[arg(short, long, default_value_t = 1)]
        quantity: u32,
    },
    /// Show or edit the cart
    Cart {
        #[command(subcommand)]
        command: Option<CartCommands>,
    },
    /// Place an order for the cart contents
    Checkout(CheckoutArgs),
    /// Order history
    Orders,
    /// Professional training materials
    Training {
        /// pdf or video
        #[arg(short, long)]
        kind: Option<MaterialKind>,
    },
    /// Skin type profiles and product recommendations
    SkinAnalysis {
        /// normal, dry, oily, combination, sensitive or mature
        skin_type: Option<SkinType>,
    },
}

#[derive(Subcommand)]
pub enum CartCommands {
    /// Remove an item
    Remove { id: String },
    /// Set an item's quantity; zero or less removes it
    Update {
        id: String,
        #[arg(allow_negative_numbers = true)]
        quantity: i64,
    },
    /// Remove every item
    Clear,
}

#[derive(clap::Args)]
pub struct RegisterArgs {
    #[arg(long)]
    pub first_name: String,
    #[arg(long)]
    pub last_name: String,
    #[arg(long)]
    pub email: String,
    #[arg(long)]
    pub password: String,
    #[arg(long)]
    pub confirm_password: String,
    #[arg(long)]
    pub company: Option<String>,
    #[arg(long)]
    pub phone: Option<String>,
    /// customer, professional or admin
    #[arg(long, default_value = "professional")]
    pub role: Role,
}

impl From<RegisterArgs> for RegisterParams {
    fn from(args: RegisterArgs) -> Self {
        Self {
            first_name: args.first_name,
            last_name: args.last_name,
            email: args.email,
            password: args.password,
            confirm_password: args.confirm_password,
            company: args.company,
            phone: args.phone,
            role: args.role,
        }
    }
}

#[derive(clap::Args)]
pub struct CheckoutArgs {
    #[arg(long, default_value = "")]
    pub full_name: String,
    #[arg(long, default_value = "")]
    pub phone: String,
    #[arg(long, default_value = "")]
    pub address: String,
    #[arg(long, default_value = "")]
    pub city: String,
    /// Abu Dhabi, Dubai, Sharjah, Ajman, Umm Al Quwain, Ras Al Khaimah or Fujairah
    #[arg(long, default_value = "")]
    pub emirate: String,
    #[arg(long)]
    pub postal_code: Option<String>,
    /// cod or card
    #[arg(long, default_value = "cod")]
    pub payment: PaymentMethod,
    #[arg(long, default_value = "")]
    pub notes: String,
}

impl From<CheckoutArgs> for PlaceOrderParams {
    fn from(args: CheckoutArgs) -> Self {
        Self {
            shipping_address: ShippingAddressProps {
                full_name: args.full_name,
                phone: args.phone,
                address: args.address,
                city: args.city,
                emirate: args.emirate,
                postal_code: args.postal_code,
            },
            payment_method: args.payment,
            notes: args.notes,
        }
    }
}

impl Commands {
    /// Screens reachable without signing in.
    fn is_public(&self) -> bool {
        matches!(
            self,
            Commands::Login { .. }
                | Commands::Register(_)
                | Commands::Logout
                | Commands::Profile
                | Commands::Training { .. }
                | Commands::SkinAnalysis { .. }
        )
    }
}

pub async fn run(command: Commands, container: &DependencyContainer) -> ScreenResult {
    if !command.is_public() && !container.auth_store.is_authenticated().await {
        return Err(Alert::sign_in_required());
    }

    let auth_screen = || AuthScreen::new(container.auth_store.clone());
    let product_screen = || {
        ProductScreen::new(
            container.get_all_products_use_case.clone(),
            container.get_product_by_id_use_case.clone(),
            container.add_to_cart_use_case.clone(),
            container.cart_store.clone(),
        )
    };
    let order_screen = || {
        OrderScreen::new(
            container.place_order_use_case.clone(),
            container.get_orders_use_case.clone(),
            container.cart_store.clone(),
        )
    };
    let cart_screen = || CartScreen::new(container.cart_store.clone());

    match command {
        Commands::Login { email, password } => auth_screen().login(&email, &password).await,
        Commands::Register(args) => auth_screen().register(args.into()).await,
        Commands::Logout => auth_screen().logout().await,
        Commands::Profile => auth_screen().profile().await,
        Commands::Products { search, category } => {
            product_screen()
                .list(ProductFilter::new(search, category))
                .await
        }
        Commands::Product { id } => product_screen().detail(ProductId::new(id)).await,
        Commands::Add { id, quantity } => {
            product_screen().add(ProductId::new(id), quantity).await
        }
        Commands::Cart { command } => match command {
            None => cart_screen().show().await,
            Some(CartCommands::Remove { id }) => cart_screen().remove(ProductId::new(id)).await,
            Some(CartCommands::Update { id, quantity }) => {
                cart_screen().update(ProductId::new(id), quantity).await
            }
            Some(CartCommands::Clear) => cart_screen().clear().await,
        },
        Commands::Checkout(args) => order_screen().checkout(args.into()).await,
        Commands::Orders => order_screen().orders().await,
        Commands::Training { kind } => training::show(kind),
        Commands::SkinAnalysis { skin_type } => {
            SkinAnalysisScreen::new(container.get_all_products_use_case.clone())
                .show(skin_type)
                .await
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_default_registration_role_to_professional() {
        let cli = Cli::try_parse_from([
            "storefront",
            "register",
            "--first-name",
            "Layla",
            "--last-name",
            "Haddad",
            "--email",
            "layla@clinic.ae",
            "--password",
            "secret1",
            "--confirm-password",
            "secret1",
        ])
        .unwrap();

        let Commands::Register(args) = cli.command else {
            panic!("expected register");
        };
        assert_eq!(args.role, Role::Professional);
    }

    #[test]
    fn should_parse_category_case_insensitively() {
        let cli = Cli::try_parse_from(["storefront", "products", "--category", "serum"]).unwrap();

        let Commands::Products { category, search } = cli.command else {
            panic!("expected products");
        };
        assert_eq!(category, CategoryFilter::Named("Serum".to_string()));
        assert!(search.is_none());
    }

    #[test]
    fn should_reject_unknown_category() {
        assert!(Cli::try_parse_from(["storefront", "products", "--category", "Shampoo"]).is_err());
    }

    #[test]
    fn should_accept_negative_quantity_update() {
        let cli =
            Cli::try_parse_from(["storefront", "cart", "update", "7", "-1"]).unwrap();

        let Commands::Cart {
            command: Some(CartCommands::Update { id, quantity }),
        } = cli.command
        else {
            panic!("expected cart update");
        };
        assert_eq!(id, "7");
        assert_eq!(quantity, -1);
    }

    #[test]
    fn should_require_session_only_for_private_screens() {
        assert!(Commands::Training { kind: None }.is_public());
        assert!(Commands::Profile.is_public());
        assert!(!Commands::Orders.is_public());
        assert!(!Commands::Cart { command: None }.is_public());
    }
}
