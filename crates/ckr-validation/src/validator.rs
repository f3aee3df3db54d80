//! Validator trait and kind-keyed registry.

use crate::error::{PayloadError, RegistryError};
use crate::lookup::KnowledgeDirectory;
use crate::validators;
use async_trait::async_trait;
use ckr_domain::{ChangeAction, TargetKind};
use std::collections::HashMap;
use std::sync::Arc;

/// Referential validation of a proposed change against current state.
///
/// Exactly one validator exists per target kind. Validators never mutate
/// state and must tolerate concurrent mutation of the entities they read.
#[async_trait]
pub trait PayloadValidator: Send + Sync {
    /// The single target kind this validator handles
    fn target_kind(&self) -> TargetKind;

    /// Validate a proposed change. Returns `Ok(())` when the payload parses
    /// under the kind's schema and its referential preconditions hold.
    async fn validate(
        &self,
        action: ChangeAction,
        target_id: Option<u64>,
        payload: &str,
    ) -> Result<(), PayloadError>;
}

/// Kind-keyed validator registry.
///
/// Registration is verified exhaustive over [`TargetKind::ALL`] before the
/// registry is handed to the workflow, so dispatch never misses at runtime.
pub struct ValidatorRegistry {
    validators: HashMap<TargetKind, Arc<dyn PayloadValidator>>,
}

impl std::fmt::Debug for ValidatorRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ValidatorRegistry")
            .field("kinds", &self.validators.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl ValidatorRegistry {
    /// Create an empty registry
    #[must_use]
    pub fn new() -> Self {
        Self {
            validators: HashMap::new(),
        }
    }

    /// Register a validator under its declared kind.
    ///
    /// # Errors
    ///
    /// [`RegistryError::DuplicateValidator`] when the kind is already taken.
    pub fn register(&mut self, validator: Arc<dyn PayloadValidator>) -> Result<(), RegistryError> {
        let kind = validator.target_kind();
        if self.validators.contains_key(&kind) {
            return Err(RegistryError::DuplicateValidator(kind));
        }
        self.validators.insert(kind, validator);
        Ok(())
    }

    /// Verify every target kind has a validator. Run at startup.
    ///
    /// # Errors
    ///
    /// [`RegistryError::MissingValidator`] naming the first uncovered kind.
    pub fn verify_exhaustive(&self) -> Result<(), RegistryError> {
        for kind in TargetKind::ALL {
            if !self.validators.contains_key(&kind) {
                return Err(RegistryError::MissingValidator(kind));
            }
        }
        Ok(())
    }

    /// Validator for a kind, if registered
    #[must_use]
    pub fn get(&self, kind: TargetKind) -> Option<&dyn PayloadValidator> {
        self.validators.get(&kind).map(|v| &**v)
    }

    /// Dispatch validation to the kind's validator.
    ///
    /// # Errors
    ///
    /// `Err(Registry(_))` only when construction skipped
    /// [`ValidatorRegistry::verify_exhaustive`]; otherwise any
    /// [`PayloadError`] the validator raises.
    pub async fn validate(
        &self,
        kind: TargetKind,
        action: ChangeAction,
        target_id: Option<u64>,
        payload: &str,
    ) -> Result<(), DispatchError> {
        let validator = self
            .get(kind)
            .ok_or(RegistryError::MissingValidator(kind))?;
        tracing::debug!(%kind, %action, "validating feedback payload");
        validator
            .validate(action, target_id, payload)
            .await
            .map_err(DispatchError::Payload)
    }
}

impl Default for ValidatorRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Failure surfaced by registry dispatch
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DispatchError {
    /// The payload failed validation
    #[error(transparent)]
    Payload(#[from] PayloadError),

    /// Registry misconfiguration (startup verification was skipped)
    #[error(transparent)]
    Registry(#[from] RegistryError),
}

/// Build the full validator set over a directory, verified exhaustive.
///
/// # Errors
///
/// [`RegistryError`] only if the built-in set ever drifts out of sync with
/// [`TargetKind::ALL`].
pub fn default_validators(
    directory: Arc<dyn KnowledgeDirectory>,
) -> Result<ValidatorRegistry, RegistryError> {
    let mut registry = ValidatorRegistry::new();
    registry.register(Arc::new(validators::RuleExampleValidator::new(directory.clone())))?;
    registry.register(Arc::new(validators::ClassTemplateValidator::new(directory.clone())))?;
    registry.register(Arc::new(validators::CodingRuleValidator::new(directory.clone())))?;
    registry.register(Arc::new(validators::ChecklistItemValidator::new(directory.clone())))?;
    registry.register(Arc::new(validators::ArchUnitTestValidator::new(directory)))?;
    registry.verify_exhaustive()?;
    Ok(registry)
}
