pub mod db;
pub mod cart_item {
    pub mod entity;
    pub mod repository;
}
pub mod session {
    pub mod entity;
    pub mod repository;
}
