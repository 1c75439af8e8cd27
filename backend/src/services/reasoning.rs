//! Flood advisory generation

use shared::{generate_advisory, AdvisoryRequest, AdvisoryResult};
use tracing::debug;

/// Advisory service. Stateless; every request is answered from the tier templates.
#[derive(Clone, Default)]
pub struct ReasoningService;

impl ReasoningService {
    pub fn new() -> Self {
        Self
    }

    /// Build an advisory, substituting defaults for missing or unusable fields
    pub fn advise(&self, request: AdvisoryRequest) -> AdvisoryResult {
        let input = request.normalize();
        let result = generate_advisory(&input);
        debug!(
            district = %input.district,
            rainfall_mm = input.current_rainfall_mm,
            risk_level = %result.risk_level,
            "Generated advisory"
        );
        result
    }

    /// Advisory returned when the request body cannot be read at all
    pub fn fallback(&self) -> AdvisoryResult {
        AdvisoryResult::fallback()
    }
}
