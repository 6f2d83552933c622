use std::ops::Deref;
use std::sync::Arc;

use driver::database::PostgresDatabase;
use kernel::prelude::entity::LateFeePolicy;
use kernel::KernelError;
use vodca::References;

use crate::config::AppConfig;

#[derive(Clone)]
pub struct AppModule(Arc<Handler>);

impl AppModule {
    pub async fn new(config: &AppConfig) -> error_stack::Result<Self, KernelError> {
        Ok(Self(Arc::new(Handler::init(config).await?)))
    }
}

impl Deref for AppModule {
    type Target = Handler;
    fn deref(&self) -> &Self::Target {
        Deref::deref(&self.0)
    }
}

#[derive(References)]
pub struct Handler {
    pgpool: PostgresDatabase,
    late_fee_policy: LateFeePolicy,
}

impl Handler {
    pub async fn init(config: &AppConfig) -> error_stack::Result<Self, KernelError> {
        let pgpool = PostgresDatabase::new().await?;

        Ok(Self {
            pgpool,
            late_fee_policy: config.late_fee_policy,
        })
    }
}
