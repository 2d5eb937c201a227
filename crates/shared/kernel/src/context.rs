use crate::error::{KernelError, KernelErrorExt};
use std::ops::Deref;
use std::sync::Arc;
use tracing::info;
use wodi_domain::config::WodiConfig;
use wodi_logger::{DiagnosticSink, diagnostics, install_default_sink, install_default_sink_at};
use wodi_registry::{ContainerKey, ServiceRegistry};
use wodi_value::{StrKind, StrRecord};

#[derive(Debug)]
pub struct KernelInner {
    pub config: WodiConfig,
    pub registry: ServiceRegistry,
}

/// Shared runtime context: the loaded configuration and the service registry.
///
/// Cloning is cheap; clones share the same registry.
#[derive(Debug, Clone)]
pub struct Kernel {
    inner: Arc<KernelInner>,
}

impl Kernel {
    #[must_use]
    pub fn builder() -> KernelBuilder {
        KernelBuilder::default()
    }

    /// The diagnostic sink of the current target container.
    #[must_use]
    pub fn diagnostics(&self) -> Arc<dyn DiagnosticSink> {
        diagnostics(&self.inner.registry)
    }

    /// Sends the advisory notice of `record` to the diagnostic sink, if it has one.
    /// Returns `true` when a notice was reported.
    pub fn report_advisory<K: StrKind>(&self, record: &StrRecord<K>) -> bool {
        let Some(mismatch) = record.advisory_mismatch() else {
            return false;
        };
        self.diagnostics().warning(&format!("{mismatch}: {:?}", record.as_str()));
        true
    }
}

impl Deref for Kernel {
    type Target = KernelInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

#[derive(Debug, Default)]
pub struct KernelBuilder {
    config: Option<WodiConfig>,
    registry: Option<ServiceRegistry>,
}

impl KernelBuilder {
    #[must_use]
    pub fn config(mut self, config: WodiConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Uses an existing registry instead of a fresh one.
    #[must_use]
    pub fn registry(mut self, registry: ServiceRegistry) -> Self {
        self.registry = Some(registry);
        self
    }

    /// Validates the configuration and prepares the registry.
    ///
    /// The default diagnostic sink is installed in the `Default` container first, so a
    /// configured target container created afterwards inherits it.
    ///
    /// # Errors
    /// * [`KernelError::Validation`] if no configuration was provided.
    /// * [`KernelError::Registry`] if `registry.target_key` is not a valid container key.
    pub fn build(self) -> Result<Kernel, KernelError> {
        let config = self.config.ok_or_else(|| KernelError::Validation {
            message: "WodiConfig not provided".into(),
            context: None,
        })?;
        let registry = self.registry.unwrap_or_default();

        let target = config
            .registry
            .target_key
            .as_deref()
            .map(ContainerKey::try_from)
            .transpose()
            .context("registry.target_key")?;

        install_default_sink_at(&registry.scope(ContainerKey::DEFAULT));
        if let Some(target) = target {
            registry.change_target_key(target);
        }
        install_default_sink(&registry);

        info!(
            target_key = %registry.target_key(),
            containers = registry.container_keys().len(),
            "Kernel initialized"
        );

        Ok(Kernel { inner: Arc::new(KernelInner { config, registry }) })
    }
}
