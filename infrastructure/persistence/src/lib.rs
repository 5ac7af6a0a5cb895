pub mod db;
mod errors;
mod money;
pub mod cart {
    pub mod document;
    pub mod entity;
    pub mod repository;
}
pub mod design {
    pub mod repository;
}
pub mod order {
    pub mod document;
    pub mod entity;
    pub mod repository;
}
pub mod product {
    pub mod entity;
    pub mod repository;
}
pub mod user {
    pub mod entity;
    pub mod repository;
}
