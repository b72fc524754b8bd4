use crate::prelude::*;
use derive_more::Display;

///
/// RuleId
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum RuleId {
    ReadonlyRecordRequired,
}

impl RuleId {
    /// Stable diagnostic kind string reported to the host.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ReadonlyRecordRequired => "readonly-record-required",
        }
    }

    /// Severity is fixed per rule, not chosen at report time.
    #[must_use]
    pub const fn severity(self) -> Severity {
        match self {
            Self::ReadonlyRecordRequired => Severity::Error,
        }
    }
}

///
/// Severity
///

#[derive(
    Clone, Copy, Debug, Deserialize, Display, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize,
)]
pub enum Severity {
    Warning,
    Error,
}

///
/// Diagnostic
/// Structured finding at a declaration's name token. Message arguments
/// stay separate from the rendered text so hosts with their own message
/// catalogs can format them.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Diagnostic {
    pub rule: RuleId,
    pub severity: Severity,
    pub span: NameSpan,
    pub args: Vec<String>,
}

impl Diagnostic {
    #[must_use]
    pub fn new(rule: RuleId, span: NameSpan, args: Vec<String>) -> Self {
        Self {
            rule,
            severity: rule.severity(),
            span,
            args,
        }
    }

    /// Rendered message for sinks without a message catalog.
    #[must_use]
    pub fn message(&self) -> String {
        let name = self.args.first().map_or("<unknown>", String::as_str);

        match self.rule {
            RuleId::ReadonlyRecordRequired => {
                format!("auto-register options type '{name}' must be a readonly record struct")
            }
        }
    }
}

///
/// DiagnosticSink
/// Host-side receiver for structural diagnostics.
///

pub trait DiagnosticSink {
    fn report(&mut self, diagnostic: Diagnostic);
}

// Collection sink for tests and batch tooling.
impl DiagnosticSink for Vec<Diagnostic> {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_is_fixed_by_rule() {
        let diagnostic = Diagnostic::new(
            RuleId::ReadonlyRecordRequired,
            NameSpan::default(),
            vec!["SyncOptions".to_string()],
        );

        assert_eq!(diagnostic.severity, Severity::Error);
        assert_eq!(diagnostic.rule.as_str(), "readonly-record-required");
    }

    #[test]
    fn message_carries_the_declaration_name() {
        let diagnostic = Diagnostic::new(
            RuleId::ReadonlyRecordRequired,
            NameSpan::default(),
            vec!["SyncOptions".to_string()],
        );

        assert_eq!(
            diagnostic.message(),
            "auto-register options type 'SyncOptions' must be a readonly record struct"
        );
    }
}
