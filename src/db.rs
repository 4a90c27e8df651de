pub mod user_repo;
pub use user_repo::UserRepository;
pub mod almoxarifado_repo;
pub use almoxarifado_repo::AlmoxarifadoRepository;
pub mod rh_repo;
pub use rh_repo::RhRepository;
pub mod logistica_repo;
pub use logistica_repo::LogisticaRepository;
