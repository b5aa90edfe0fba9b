use crate::category_actor::CategoryError;
use crate::config::{ConfigError, PadariaConfig};
use crate::controllers::{CategoryController, ProductController};
use crate::lifecycle::console;
use crate::logger::{EventLogger, FanoutSink, FileSink, LogSink, MemorySink};
use crate::model::{Product, ProductCreate};
use crate::product_actor::ProductError;
use serde_json::json;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;
use tokio::task::{JoinHandle, JoinSet};
use tracing::{error, info, warn};

/// Errors that stop the application.
#[derive(Debug, Error)]
pub enum SystemError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Failed to open log file {path}: {source}")]
    LogFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error(transparent)]
    Category(#[from] CategoryError),

    #[error(transparent)]
    Product(#[from] ProductError),

    #[error("Actor task failed: {0}")]
    ActorTaskFailed(String),
}

/// Outcome of a seeding step.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SeedReport {
    pub created: usize,
    /// Entries that already existed.
    pub skipped: usize,
    pub failed: usize,
}

/// Build the event log for a run: always in memory, plus `log_file` when given.
///
/// The memory sink is returned so the caller can show the log at the end of the run.
pub async fn open_event_log(
    log_file: Option<&Path>,
) -> Result<(EventLogger, Arc<MemorySink>), SystemError> {
    let memory = Arc::new(MemorySink::new());
    let sink: Arc<dyn LogSink> = match log_file {
        Some(path) => {
            let file = FileSink::open(path)
                .await
                .map_err(|source| SystemError::LogFile {
                    path: path.to_path_buf(),
                    source,
                })?;
            Arc::new(FanoutSink::new(vec![memory.clone(), Arc::new(file)]))
        }
        None => memory.clone(),
    };
    Ok((EventLogger::new(sink), memory))
}

/// Runtime orchestrator of the bakery catalog.
///
/// `PadariaSystem` is responsible for:
/// - **Lifecycle Management**: starting and stopping the category and product stores
/// - **Dependency Wiring**: handing the product store the category controller it validates against
/// - **Seeding & Demonstration**: creating the default catalog and exercising it
///
/// # Example
///
/// ```ignore
/// let (logger, _) = open_event_log(None).await?;
/// let system = PadariaSystem::new(PadariaConfig::default(), logger);
/// system.init().await;
/// system.shutdown().await?;
/// ```
pub struct PadariaSystem {
    pub category_controller: CategoryController,
    pub product_controller: ProductController,
    logger: EventLogger,
    config: PadariaConfig,
    handles: Vec<JoinHandle<()>>,
}

impl PadariaSystem {
    /// Spawns both stores. Must be called inside a Tokio runtime.
    pub fn new(config: PadariaConfig, logger: EventLogger) -> Self {
        // 1. Create stores (no dependencies yet)
        let (category_store, category_controller) =
            crate::category_actor::new(config.channel_capacity);
        let (product_store, product_controller) =
            crate::product_actor::new(config.channel_capacity);

        // 2. Start them; products validate against categories
        let category_handle = tokio::spawn(category_store.run(()));
        let product_handle = tokio::spawn(product_store.run(category_controller.clone()));

        Self {
            category_controller,
            product_controller,
            logger,
            config,
            handles: vec![category_handle, product_handle],
        }
    }

    pub fn logger(&self) -> &EventLogger {
        &self.logger
    }

    pub fn config(&self) -> &PadariaConfig {
        &self.config
    }

    /// Seed the catalog and run the demonstration.
    ///
    /// Individual failures are logged and skipped; none of them aborts the run.
    pub async fn init(&self) {
        console::print_banner();
        self.logger.info("Sistema da padaria iniciado", None).await;

        self.seed_categories().await;
        self.seed_products().await;
        self.demonstrate_features().await;

        println!("\n✅ Sistema inicializado com sucesso!");
    }

    /// Create the configured categories. Names that already exist are skipped with a warning.
    pub async fn seed_categories(&self) -> SeedReport {
        console::print_section("📁 Criando categorias padrão...");
        let mut report = SeedReport::default();

        for params in &self.config.seed.categories {
            let name = params.name.clone();
            match self
                .category_controller
                .create_category(params.clone())
                .await
            {
                Ok(_) => {
                    report.created += 1;
                    self.logger
                        .success(format!("Categoria criada: {}", name), None)
                        .await;
                }
                Err(CategoryError::DuplicateKey(_)) => {
                    report.skipped += 1;
                    warn!(category = %name, "Category already exists");
                    println!("⚠️ Categoria \"{}\" já existe", name);
                }
                Err(e) => {
                    report.failed += 1;
                    self.logger
                        .error(
                            format!("Erro ao criar categoria {}", name),
                            Some(json!({ "error": e.to_string() })),
                        )
                        .await;
                }
            }
        }

        info!(?report, "Categories seeded");
        report
    }

    /// Create the configured products. Each is validated against the existing categories.
    pub async fn seed_products(&self) -> SeedReport {
        console::print_section("🍞 Criando produtos de exemplo...");
        let mut report = SeedReport::default();

        for params in &self.config.seed.products {
            let name = params.name.clone();
            match self.create_product(params.clone()).await {
                Ok(_) => report.created += 1,
                Err(_) => report.failed += 1,
            }
            tracing::debug!(product = %name, ?report, "Seed step");
        }

        info!(?report, "Products seeded");
        report
    }

    async fn create_product(&self, params: ProductCreate) -> Result<Product, ProductError> {
        let name = params.name.clone();
        match self.product_controller.create_product(params).await {
            Ok(product) => {
                self.logger
                    .success(format!("Produto criado: {}", name), None)
                    .await;
                Ok(product)
            }
            Err(e) => {
                self.logger
                    .error(
                        format!("Erro ao criar produto {}", name),
                        Some(json!({ "error": e.to_string() })),
                    )
                    .await;
                Err(e)
            }
        }
    }

    /// List, filter and update the catalog, printing each step.
    ///
    /// A failing step ends the demonstration; the failure is logged, not returned.
    pub async fn demonstrate_features(&self) {
        console::print_section("🎯 Demonstrando funcionalidades...");
        if let Err(e) = self.run_demonstration().await {
            error!(error = %e, "Demonstration failed");
            println!("❌ Erro durante demonstração: {}", e);
            self.logger
                .error(
                    "Erro durante demonstração",
                    Some(json!({ "error": e.to_string() })),
                )
                .await;
        }
    }

    async fn run_demonstration(&self) -> Result<(), SystemError> {
        console::print_section("📋 Todos os produtos:");
        let all_products = self.product_controller.get_all_products().await?;
        console::print_products(&all_products);

        console::print_section("📁 Todas as categorias:");
        let all_categories = self.category_controller.get_all_categories().await?;
        console::print_categories(&all_categories);

        let showcase = &self.config.demo.showcase_category;
        console::print_section(&format!("🍞 Produtos da categoria \"{}\":", showcase));
        let by_category = self
            .product_controller
            .get_products_by_category(showcase.as_str())
            .await?;
        console::print_products(&by_category);

        console::print_section("✏️ Atualizando preços...");
        let updated = self.raise_prices(all_products).await;
        console::print_products(&updated);
        if !updated.is_empty() {
            println!("{} produto(s) atualizado(s) com sucesso!", updated.len());
        }

        self.logger
            .success("Demonstração concluída com sucesso!", None)
            .await;
        Ok(())
    }

    /// Add `demo.price_increase` to every product priced below `demo.price_ceiling`.
    ///
    /// The updates run concurrently and are all awaited. Only the products whose update was
    /// applied are returned, ordered by id; failures are logged.
    pub async fn raise_prices(&self, products: Vec<Product>) -> Vec<Product> {
        let demo = &self.config.demo;
        let mut updates = JoinSet::new();

        for mut product in products {
            if product.price >= demo.price_ceiling {
                continue;
            }
            product.price += demo.price_increase;
            let controller = self.product_controller.clone();
            updates.spawn(async move {
                let id = product.id;
                (id, controller.update_product(product).await)
            });
        }

        let mut applied = Vec::new();
        while let Some(joined) = updates.join_next().await {
            match joined {
                Ok((_, Ok(product))) => applied.push(product),
                Ok((id, Err(e))) => {
                    self.logger
                        .error(
                            format!("Erro ao atualizar produto {}", id),
                            Some(json!({ "error": e.to_string() })),
                        )
                        .await;
                }
                Err(e) => {
                    self.logger
                        .error(
                            "Tarefa de atualização falhou",
                            Some(json!({ "error": e.to_string() })),
                        )
                        .await;
                }
            }
        }

        applied.sort_by_key(|product| product.id);
        applied
    }

    pub fn show_menu(&self) {
        console::print_menu();
    }

    /// Gracefully shuts down both stores.
    ///
    /// Dropping the controllers closes the product store; it releases its category controller
    /// on exit, which in turn closes the category store. Clones of the controllers held
    /// elsewhere keep their store alive, so drop them first.
    pub async fn shutdown(self) -> Result<(), SystemError> {
        info!("Shutting down system...");

        drop(self.product_controller);
        drop(self.category_controller);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(SystemError::ActorTaskFailed(e.to_string()));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
