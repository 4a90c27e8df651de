// src/config.rs

use std::{env, time::Duration};

use sqlx::{postgres::PgPoolOptions, PgPool};

use crate::{
    db::{AlmoxarifadoRepository, LogisticaRepository, RhRepository, UserRepository},
    services::{
        AdminService, AlmoxarifadoService, AuthService, LogisticaService, RhService,
    },
};

#[derive(Clone)]
pub struct AppState {
    pub db_pool: PgPool,
    pub auth_service: AuthService,
    pub admin_service: AdminService,
    pub almoxarifado_service: AlmoxarifadoService,
    pub rh_service: RhService,
    pub logistica_service: LogisticaService,
}

impl AppState {
    pub async fn new() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let database_url =
            env::var("DATABASE_URL").map_err(|_| anyhow::anyhow!("DATABASE_URL deve ser definida"))?;

        // Conecta ao banco de dados, usando '?' para propagar erros
        let db_pool = PgPoolOptions::new()
            .max_connections(5)
            .acquire_timeout(Duration::from_secs(3))
            .connect(&database_url)
            .await?;

        tracing::info!("✅ Conexão com o banco de dados estabelecida com sucesso!");

        Ok(Self::com_pool(db_pool))
    }

    /// Monta o gráfico de dependências sobre uma pool já existente
    /// (útil para testes de integração com banco próprio).
    pub fn com_pool(db_pool: PgPool) -> Self {
        let user_repo = UserRepository::new(db_pool.clone());
        let almoxarifado_repo = AlmoxarifadoRepository::new(db_pool.clone());
        let rh_repo = RhRepository::new(db_pool.clone());
        let logistica_repo = LogisticaRepository::new(db_pool.clone());

        let auth_service = AuthService::new(user_repo.clone());
        let admin_service = AdminService::new(user_repo);
        let almoxarifado_service =
            AlmoxarifadoService::new(almoxarifado_repo, db_pool.clone());
        let rh_service = RhService::new(rh_repo);
        let logistica_service = LogisticaService::new(logistica_repo);

        Self {
            db_pool,
            auth_service,
            admin_service,
            almoxarifado_service,
            rh_service,
            logistica_service,
        }
    }
}
