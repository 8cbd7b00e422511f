use tracing::{info, warn};

use orbit_common::error::{OrbitError, Result};

use super::validator::Validator;

const FULL_CIRCLE: usize = 360;

/// Ordered registry of validators, unique by name.
#[derive(Debug, Default, Clone)]
pub struct ValidatorPool {
    validators: Vec<Validator>,
}

impl ValidatorPool {
    pub fn new() -> Self {
        Self { validators: Vec::new() }
    }

    /// Appends a validator and places it on the ring.
    ///
    /// The position is `index * (360 / count_after_insertion)`, computed once.
    /// Earlier validators keep their positions as the pool grows, so the
    /// layout is deliberately uneven (0°, 180°, 240°, 270°, ...).
    pub fn register(&mut self, mut validator: Validator) -> Result<()> {
        if self.get(validator.name()).is_some() {
            warn!("⚠️ Validator [{}] already registered, rejecting", validator.name());
            return Err(OrbitError::DuplicateValidator(validator.name().to_string()));
        }

        let index = self.validators.len();
        let step = FULL_CIRCLE / (index + 1);
        // index * step < 360 for every index, so the cast cannot truncate.
        validator.set_sector_position((index * step) as u16);

        info!(
            "✅ Validator [{}] registered (position: {}°, stake: {})",
            validator.name(),
            validator.sector_position(),
            validator.stake()
        );
        self.validators.push(validator);
        Ok(())
    }

    /// Toggles gating eligibility of the named validator.
    pub fn set_active(&mut self, name: &str, active: bool) -> Result<()> {
        let validator = self
            .validators
            .iter_mut()
            .find(|v| v.name() == name)
            .ok_or_else(|| OrbitError::NotFound(format!("validator {}", name)))?;
        validator.set_active(active);
        info!("🔁 Validator [{}] active = {}", name, active);
        Ok(())
    }

    /// Flips the named validator's active flag and returns the new value.
    pub fn toggle(&mut self, name: &str) -> Result<bool> {
        let validator = self
            .validators
            .iter_mut()
            .find(|v| v.name() == name)
            .ok_or_else(|| OrbitError::NotFound(format!("validator {}", name)))?;
        let active = !validator.is_active();
        validator.set_active(active);
        info!("🔁 Validator [{}] active = {}", name, active);
        Ok(active)
    }

    pub fn get(&self, name: &str) -> Option<&Validator> {
        self.validators.iter().find(|v| v.name() == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Validator> {
        self.validators.iter()
    }

    pub(crate) fn active_mut(&mut self) -> impl Iterator<Item = &mut Validator> {
        self.validators.iter_mut().filter(|v| v.is_active())
    }

    pub fn active_count(&self) -> usize {
        self.validators.iter().filter(|v| v.is_active()).count()
    }

    pub fn len(&self) -> usize {
        self.validators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.validators.is_empty()
    }
}
