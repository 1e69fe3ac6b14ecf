pub mod application {
    pub mod auth {
        pub mod store;
    }
    pub mod cart {
        pub mod store;
    }
    pub mod order {
        pub mod get_all;
        pub mod place;
    }
    pub mod product {
        pub mod add_to_cart;
        pub mod get_all;
        pub mod get_by_id;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod shared {
        pub mod fetch;
        pub mod value_objects;
    }
    pub mod auth {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod services;
        pub mod store;
    }
    pub mod cart {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod store;
    }
    pub mod content {
        pub mod skin;
        pub mod training;
    }
    pub mod order {
        pub mod errors;
        pub mod model;
        pub mod samples;
        pub mod services;
        pub mod value_objects;
        pub mod use_cases {
            pub mod get_all;
            pub mod place;
        }
    }
    pub mod product {
        pub mod errors;
        pub mod filter;
        pub mod model;
        pub mod samples;
        pub mod services;
        pub mod use_cases {
            pub mod add_to_cart;
            pub mod get_all;
            pub mod get_by_id;
        }
    }
}
