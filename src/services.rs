pub mod acesso;
pub mod admin_service;
pub use admin_service::AdminService;
pub mod almoxarifado_service;
pub use almoxarifado_service::AlmoxarifadoService;
pub mod auth_service;
pub use auth_service::AuthService;
pub mod logistica_service;
pub use logistica_service::LogisticaService;
pub mod rh_service;
pub use rh_service::RhService;
pub mod sessao;
