pub mod db;
pub mod error;
pub mod inventory {
    pub mod entity;
}
pub mod product {
    pub mod entity;
    pub mod repository;
}
