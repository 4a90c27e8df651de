pub mod auth;
pub mod almoxarifado;
pub mod logistica;
pub mod rh;
