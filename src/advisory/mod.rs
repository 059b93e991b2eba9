//! Advisory seam for outlier placement suggestions.
//!
//! An external collaborator (typically a text-generation service) may be
//! asked for placement ideas for the current outliers. The engine never
//! depends on it: [`request_advice`] works with no advisor at all and turns
//! advisor failures into a logged `None` without touching the result.

mod brief;
mod types;

pub use brief::{render_brief, STRATEGIES};
pub use types::{AdvisoryError, OutlierAdvisor, OutlierProfile};

use crate::bracket::BracketResult;
use tracing::{debug, warn};

/// Asks `advisor` for placement suggestions for the outliers in `result`.
///
/// Returns `None` when no advisor is configured, when there are no
/// outliers, or when the advisor fails.
///
/// # Examples
///
/// ```
/// use u_bracket::advisory::{request_advice, AdvisoryError, OutlierAdvisor, OutlierProfile};
/// use u_bracket::engine::{BracketEngine, EngineConfig};
/// use u_bracket::entrant::RosterGenerator;
///
/// struct Echo;
///
/// impl OutlierAdvisor for Echo {
///     fn advise(&self, outliers: &[OutlierProfile]) -> Result<String, AdvisoryError> {
///         Ok(format!("{} to place", outliers.len()))
///     }
/// }
///
/// let entrants = RosterGenerator::new(1).generate(40);
/// let result = BracketEngine::run(&entrants, &EngineConfig::default());
///
/// assert_eq!(request_advice(None, &result), None);
/// if !result.outliers().is_empty() {
///     assert!(request_advice(Some(&Echo), &result).is_some());
/// }
/// ```
pub fn request_advice(advisor: Option<&dyn OutlierAdvisor>, result: &BracketResult) -> Option<String> {
    let advisor = advisor?;
    let profiles: Vec<OutlierProfile> = result
        .outliers()
        .iter()
        .map(|o| OutlierProfile::from(&o.entrant))
        .collect();
    if profiles.is_empty() {
        debug!(event = "advice_skipped", reason = "no_outliers");
        return None;
    }

    match advisor.advise(&profiles) {
        Ok(text) => Some(text),
        Err(err) => {
            warn!(event = "advice_failed", outliers = profiles.len(), error = %err);
            None
        }
    }
}
