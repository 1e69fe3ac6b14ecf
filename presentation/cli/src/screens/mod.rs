pub mod alert;
pub mod error_mapper;
pub mod format;
pub mod auth {
    pub mod error_mapper;
    pub mod screen;
    pub mod view;
}
pub mod cart {
    pub mod screen;
    pub mod view;
}
pub mod content {
    pub mod skin_analysis;
    pub mod training;
}
pub mod order {
    pub mod error_mapper;
    pub mod screen;
    pub mod view;
}
pub mod product {
    pub mod error_mapper;
    pub mod screen;
    pub mod view;
}
