pub mod application {
    pub mod product {
        pub mod create;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod inventory {
        pub mod errors;
        pub mod model;
        pub mod value_objects;
    }
    pub mod product {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod value_objects;
        pub mod use_cases {
            pub mod create;
        }
    }
    pub mod shared {
        pub mod value_objects;
    }
}
