mod flyover_service;

pub use flyover_service::FlyoverService;
