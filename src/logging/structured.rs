use std::collections::BTreeMap;
use tracing::{debug, error, info, trace, warn};

/// Context information for log messages
#[derive(Debug, Clone)]
pub struct LogContext {
    /// Component name (e.g., "web", "tariff", "main")
    pub component: String,
    /// Active tariff policy id, e.g. `five-zone@v2`
    pub policy: Option<String>,
    /// Additional context fields, emitted in key order
    pub extra_fields: BTreeMap<String, String>,
}

impl LogContext {
    /// Create a new log context
    pub fn new(component: &str) -> Self {
        Self {
            component: component.to_string(),
            policy: None,
            extra_fields: BTreeMap::new(),
        }
    }

    /// Set the policy id
    #[must_use]
    pub fn with_policy(mut self, policy: String) -> Self {
        self.policy = Some(policy);
        self
    }

    /// Add extra field
    #[must_use]
    pub fn with_field(mut self, key: &str, value: String) -> Self {
        self.extra_fields.insert(key.to_string(), value);
        self
    }
}

/// Structured logger with context
#[derive(Debug, Clone)]
pub struct StructuredLogger {
    pub(crate) context: LogContext,
}

impl StructuredLogger {
    /// Create a new structured logger with context
    pub const fn new(context: LogContext) -> Self {
        Self { context }
    }

    pub const fn context(&self) -> &LogContext {
        &self.context
    }

    pub fn info(&self, message: &str) {
        let fields = self.format_fields();
        info!(%fields, "{}", message);
    }
    pub fn warn(&self, message: &str) {
        let fields = self.format_fields();
        warn!(%fields, "{}", message);
    }
    pub fn error(&self, message: &str) {
        let fields = self.format_fields();
        error!(%fields, "{}", message);
    }
    pub fn debug(&self, message: &str) {
        let fields = self.format_fields();
        debug!(%fields, "{}", message);
    }
    pub fn trace(&self, message: &str) {
        let fields = self.format_fields();
        trace!(%fields, "{}", message);
    }

    /// Format context fields for logging
    pub(crate) fn format_fields(&self) -> String {
        let mut fields = vec![format!("component={}", self.context.component)];
        if let Some(ref policy) = self.context.policy {
            fields.push(format!("policy={policy}"));
        }
        for (key, value) in &self.context.extra_fields {
            fields.push(format!("{key}={value}"));
        }
        fields.join(",")
    }
}

/// Create a logger for a specific component
pub fn get_logger(component: &str) -> StructuredLogger {
    StructuredLogger::new(LogContext::new(component))
}
/// Create a logger with full context
pub const fn get_logger_with_context(context: LogContext) -> StructuredLogger {
    StructuredLogger::new(context)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_context() {
        let context = LogContext::new("web")
            .with_policy("five-zone@v2".to_string())
            .with_field("port", "8080".to_string());

        assert_eq!(context.component, "web");
        assert_eq!(context.policy.as_deref(), Some("five-zone@v2"));
        assert_eq!(context.extra_fields.get("port"), Some(&"8080".to_string()));
    }

    #[test]
    fn fields_are_ordered() {
        let logger = get_logger_with_context(
            LogContext::new("web")
                .with_policy("five-zone@v2".to_string())
                .with_field("zeta", "1".to_string())
                .with_field("alpha", "2".to_string()),
        );
        assert_eq!(
            logger.format_fields(),
            "component=web,policy=five-zone@v2,alpha=2,zeta=1"
        );
    }

    #[test]
    fn test_structured_logger() {
        let logger = get_logger("tariff");
        assert_eq!(logger.context().component, "tariff");
        // These should not panic without a subscriber
        logger.info("Test info message");
        logger.debug("Test debug message");
        logger.warn("Test warning message");
        logger.error("Test error message");
        logger.trace("Test trace message");
    }
}
