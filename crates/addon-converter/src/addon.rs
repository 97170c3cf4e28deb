//! Add-on lifecycle: construction, load, unload and the host interface.

use std::sync::Arc;

use tracing::info;

use addon_core::config::AppConfig;
use addon_core::traits::{FilePicker, HostLink, HostRoot, Notifier};
use addon_menu::{AddOnInterface, MenuError, MenuRegistry};

use crate::commands::{AboutCommand, RunConverterCommand};
use crate::executor::{ConverterRunner, ProcessRunner};
use crate::menu;
use crate::pipeline::ConversionPipeline;

/// The STL to STEP converter add-on.
///
/// The menu registry is built once in [`ConverterAddOn::new`]. The host
/// root is attached by [`load`](Self::load) and released by
/// [`unload`](Self::unload); conversions started while no root is attached
/// report that the host is unavailable.
#[derive(Debug)]
pub struct ConverterAddOn {
    /// Link to the host root.
    host: Arc<HostLink>,
    /// The menu registry.
    registry: Arc<MenuRegistry>,
    /// The "Run Converter" command, kept for direct invocation.
    run_converter: Arc<RunConverterCommand>,
}

impl ConverterAddOn {
    /// Build the add-on with an explicit converter runner.
    pub fn new(
        config: &AppConfig,
        picker: Arc<dyn FilePicker>,
        notifier: Arc<dyn Notifier>,
        runner: Arc<dyn ConverterRunner>,
    ) -> Result<Self, MenuError> {
        let host = Arc::new(HostLink::new());
        let pipeline = ConversionPipeline::new(config.converter.clone(), runner, Arc::clone(&host));

        let about = Arc::new(AboutCommand::new(Arc::clone(&notifier)));
        let run_converter = Arc::new(RunConverterCommand::new(pipeline, picker, notifier));

        let install_dir = config.converter.effective_install_dir();
        let registry = MenuRegistry::build(menu::definition(
            &config.menu,
            &install_dir,
            about,
            run_converter.clone(),
        ))?;

        info!(
            converter = %config.converter.converter_path().display(),
            icons = config.menu.icons_enabled,
            "Converter add-on initialized"
        );

        Ok(Self {
            host,
            registry: Arc::new(registry),
            run_converter,
        })
    }

    /// Build the add-on with the real process runner.
    pub fn with_process_runner(
        config: &AppConfig,
        picker: Arc<dyn FilePicker>,
        notifier: Arc<dyn Notifier>,
    ) -> Result<Self, MenuError> {
        Self::new(config, picker, notifier, Arc::new(ProcessRunner::new()))
    }

    /// Attach the host root object.
    pub async fn load(&self, root: Arc<dyn HostRoot>) {
        self.host.attach(root).await;
        info!("Converter add-on loaded");
    }

    /// Release the host root object.
    pub async fn unload(&self) {
        self.host.detach().await;
        info!("Converter add-on unloaded");
    }

    /// The interface handed to the host.
    pub fn interface(&self) -> AddOnInterface {
        AddOnInterface::new(Arc::clone(&self.registry), Arc::clone(&self.host))
    }

    /// The menu registry.
    pub fn registry(&self) -> &MenuRegistry {
        &self.registry
    }

    /// The "Run Converter" command.
    pub fn run_converter(&self) -> &RunConverterCommand {
        &self.run_converter
    }

    /// The host link.
    pub fn host(&self) -> &Arc<HostLink> {
        &self.host
    }
}
