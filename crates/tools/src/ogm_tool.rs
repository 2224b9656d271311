use ledgerlens_ogm::{OgmValidationResult, OgmValidator};

/// Payment-reference validation exposed as an agent tool.
#[derive(Debug, Clone, Copy, Default)]
pub struct OgmTool {
    validator: OgmValidator,
}

impl OgmTool {
    pub const NAME: &'static str = "validate_ogm";
    pub const DESCRIPTION: &'static str = "Validate a Belgian structured payment reference \
        (+++XXX/XXXX/XXXXX+++ or ***XXX/XXXX/XXXXX***): checks the layout and the mod-97 \
        check digits, and corrects common OCR misreads (O->0, I->1, B->8, S->5, G->6).";

    pub fn new(validator: OgmValidator) -> Self {
        Self { validator }
    }

    /// Structured result for programmatic callers.
    pub fn validate(&self, reference: &str) -> OgmValidationResult {
        self.validator.validate(reference)
    }

    /// Diagnostic line for callers that only accept text output.
    pub fn call(&self, reference: &str) -> String {
        self.validate(reference).diagnostic()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn call_renders_diagnostic() {
        let tool = OgmTool::default();
        assert_eq!(
            tool.call("+++123/4567/89002+++"),
            "VALID: checksum verified. Normalized: +++123/4567/89002+++"
        );
        assert!(tool.call("+++123/4567/89099+++").starts_with("INVALID: checksum failed, expected 02 found 99"));
    }
}
