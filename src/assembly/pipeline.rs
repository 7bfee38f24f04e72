//! Per-argument resolution with the run's error policy.
//!
//! Arguments are processed strictly in order. A listing failure aborts the
//! whole run; every other per-template error is reported and that template
//! is skipped.

use crate::config::CustomRepositories;
use crate::error::{GignrError, Result};
use crate::fetch::{find_descriptor, TemplateCatalog};
use crate::source::{resolve, SourcePrefix, TemplateReference, LOCAL_SOURCE_LABEL};
use crate::store::LocalStore;
use crate::ui::UserInterface;

use super::segment::Segment;

/// Resolves template references into [`Segment`]s.
pub struct Assembler<'a> {
    catalog: &'a dyn TemplateCatalog,
    store: &'a LocalStore,
    repositories: &'a CustomRepositories,
}

impl<'a> Assembler<'a> {
    /// Create an assembler over a remote catalog, the local store and the
    /// custom repositories loaded for this run.
    pub fn new(
        catalog: &'a dyn TemplateCatalog,
        store: &'a LocalStore,
        repositories: &'a CustomRepositories,
    ) -> Self {
        Self {
            catalog,
            store,
            repositories,
        }
    }

    /// Resolve every argument in order.
    ///
    /// Non-fatal errors are reported through `ui` and the argument is
    /// skipped. A fatal error is returned immediately; later arguments are
    /// not processed.
    pub fn collect<S: AsRef<str>>(
        &self,
        arguments: &[S],
        ui: &mut dyn UserInterface,
    ) -> Result<Vec<Segment>> {
        let mut segments = Vec::with_capacity(arguments.len());

        for argument in arguments {
            let reference = TemplateReference::parse(argument.as_ref());
            let mut spinner = ui.start_spinner(&format!("Fetching {}", reference));

            match self.resolve_reference(&reference) {
                Ok(segment) => {
                    spinner.finish_success(&format!("Fetched {}", reference));
                    segments.push(segment);
                }
                Err(e) if e.is_fatal() => {
                    spinner.finish_clear();
                    return Err(e);
                }
                Err(e) => {
                    spinner.finish_clear();
                    tracing::debug!("Skipping {}: {:?}", reference, e);
                    ui.error(&e.to_string());
                }
            }
        }

        Ok(segments)
    }

    /// Resolve a single reference to its content.
    pub fn resolve_reference(&self, reference: &TemplateReference) -> Result<Segment> {
        match reference.prefix() {
            Some(token) => self.resolve_remote(reference, &SourcePrefix::parse(token)),
            None => self.resolve_local(reference),
        }
    }

    fn resolve_remote(
        &self,
        reference: &TemplateReference,
        prefix: &SourcePrefix,
    ) -> Result<Segment> {
        let binding = resolve(prefix, self.repositories)?;
        tracing::debug!("{} resolved to {}", reference, binding);

        let listing =
            self.catalog
                .list_templates(&binding)
                .map_err(|e| GignrError::ListingFailure {
                    source_label: prefix.token().to_string(),
                    message: format!("{:#}", e),
                })?;

        let descriptor = find_descriptor(&listing, reference.name()).ok_or_else(|| {
            GignrError::TemplateNotFound {
                name: reference.name().to_string(),
                source_label: prefix.token().to_string(),
            }
        })?;

        let content =
            self.catalog
                .download(descriptor)
                .map_err(|e| GignrError::FetchFailure {
                    reference: reference.raw().to_string(),
                    message: format!("{:#}", e),
                })?;

        Ok(Segment::new(reference.raw(), prefix.label(), content))
    }

    fn resolve_local(&self, reference: &TemplateReference) -> Result<Segment> {
        let content = self
            .store
            .get(reference.name())
            .map_err(|e| GignrError::FetchFailure {
                reference: reference.raw().to_string(),
                message: e.to_string(),
            })?;

        Ok(Segment::new(reference.raw(), LOCAL_SOURCE_LABEL, content))
    }
}
