pub mod application {
    pub mod cart {
        pub mod add_custom;
        pub mod add_product;
        pub mod clear;
        pub mod get;
        pub mod remove_item;
        pub mod resolve;
        pub mod update_quantity;
    }
    pub mod design {
        pub mod generate;
        pub mod remove_background;
    }
    pub mod order {
        pub mod attach_payment_slip;
        pub mod create;
        pub mod get_all;
        pub mod get_for_user;
        pub mod update_status;
    }
    pub mod product {
        pub mod create;
        pub mod delete;
        pub mod get_all;
        pub mod update;
        pub mod upload_image;
    }
    pub mod stats {
        pub mod get;
    }
    pub mod user {
        pub mod delete;
        pub mod get_all;
        pub mod login;
        pub mod register;
        pub mod update_role;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod shared {
        pub mod assets;
        pub mod temp_file;
        pub mod value_objects;
    }
    pub mod cart {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod add_custom;
            pub mod add_product;
            pub mod clear;
            pub mod get;
            pub mod remove_item;
            pub mod update_quantity;
        }
    }
    pub mod design {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod services;
        pub mod use_cases {
            pub mod generate;
            pub mod remove_background;
        }
    }
    pub mod order {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod attach_payment_slip;
            pub mod create;
            pub mod get_all;
            pub mod get_for_user;
            pub mod update_status;
        }
    }
    pub mod product {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod create;
            pub mod delete;
            pub mod get_all;
            pub mod update;
            pub mod upload_image;
        }
    }
    pub mod stats {
        pub mod errors;
        pub mod model;
        pub mod use_cases {
            pub mod get;
        }
    }
    pub mod user {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod services;
        pub mod use_cases {
            pub mod delete;
            pub mod get_all;
            pub mod login;
            pub mod register;
            pub mod update_role;
        }
    }
}
