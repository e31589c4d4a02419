pub mod application {
    pub mod product {
        pub mod create;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod product {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod validation;
        pub mod use_cases {
            pub mod create;
        }
    }
}
