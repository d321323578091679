//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single entry
//! point for every ts2date operation, whatever the UI.
//!
//! The facade:
//! - **Resolves configuration** (config file plus overrides) into a processor
//! - **Dispatches** to the appropriate command function
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! It does no printing and no business logic of its own.
//!
//! `Ts2DateApi<S: RecordStore>` is generic over the record store:
//! - Production: `Ts2DateApi<JsonLinesStore<..>>`
//! - Testing: `Ts2DateApi<InMemoryStore>`

use crate::commands;
use crate::config::ProcessorConfig;
use crate::error::Result;
use crate::processor::Timestamp2Date;
use crate::store::RecordStore;

pub struct Ts2DateApi<S: RecordStore> {
    store: S,
    paths: commands::Ts2DatePaths,
}

impl<S: RecordStore> Ts2DateApi<S> {
    pub fn new(store: S, paths: commands::Ts2DatePaths) -> Self {
        Self { store, paths }
    }

    /// The configuration a run would use: the config file, with `attributes`
    /// replacing its list when given.
    pub fn resolve_config(&self, attributes: Option<String>) -> Result<ProcessorConfig> {
        Ok(ProcessorConfig::load(&self.paths.config_dir)?.with_override(attributes))
    }

    /// Convert every queued record. Fails before touching the queue if the
    /// configuration is invalid.
    pub fn convert(&mut self, attributes: Option<String>) -> Result<commands::CmdResult> {
        let config = self.resolve_config(attributes)?;
        let processor = Timestamp2Date::from_config(&config)?;
        commands::convert::run(&mut self.store, &processor)
    }

    pub fn validate(&self, attributes: Option<String>) -> Result<commands::CmdResult> {
        let config = self.resolve_config(attributes)?;
        Ok(commands::validate::run(&config))
    }

    pub fn describe(&self) -> commands::CmdResult {
        commands::describe::run()
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.paths, action)
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, MessageLevel, ProcessorDescription, Ts2DatePaths};
