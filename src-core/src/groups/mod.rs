pub(crate) mod groups_model;
pub(crate) mod groups_service;

pub use groups_model::StockGroup;
pub use groups_service::GroupsService;
