use crate::classifier::classify;
use crate::comment::{line_comment, selection_comment};
use crate::error::Result;
use crate::host::EditorHost;
use crate::placement::plan_insertion;
use crate::types::{AnnotationTarget, InsertionPlan};

/// Entry point composing classification, comment synthesis and placement.
///
/// Holds no state: every invocation classifies fresh, so annotating the same
/// line twice stacks two comments.
#[derive(Debug, Clone, Copy, Default)]
pub struct Annotator;

impl Annotator {
    /// Create a new annotator
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Compute the insertion edit for a target.
    ///
    /// Total: every target yields a plan; unclassifiable content falls back
    /// to the generic description.
    #[must_use]
    pub fn plan_for(&self, target: &AnnotationTarget) -> InsertionPlan {
        match target {
            AnnotationTarget::Caret {
                line, line_text, ..
            } => {
                let classification = classify(line_text);
                let comment = line_comment(&classification);
                plan_insertion(*line, line_text, &comment)
            }
            AnnotationTarget::Selection {
                start_line, text, ..
            } => {
                let comment = selection_comment(text);
                // Indentation comes from the first selected line, the best
                // approximation available through the target contract.
                let first_line = text.lines().next().unwrap_or_default();
                plan_insertion(*start_line, first_line, &comment)
            }
        }
    }

    /// Run one annotation pass against a host.
    ///
    /// No active target is a silent no-op: nothing is classified, nothing is
    /// applied, and `Ok(None)` comes back.
    pub fn run(&self, host: &mut dyn EditorHost) -> Result<Option<InsertionPlan>> {
        let Some(target) = host.capture_target() else {
            log::debug!("no active target, skipping annotation");
            return Ok(None);
        };
        let plan = self.plan_for(&target);
        host.apply(&plan)?;
        Ok(Some(plan))
    }
}
