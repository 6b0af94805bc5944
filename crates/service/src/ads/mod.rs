//! Ads module: three-layer architecture (domain, repository, service).

pub mod domain;
pub mod repository;
pub mod repo;
pub mod service;

pub use domain::{Ad, CreateAdInput};
pub use repository::AdRepository;
pub use service::AdService;
