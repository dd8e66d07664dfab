//! Label formatting for progress reports

/// Formats a message template with named parameters
pub trait Localizer: Send + Sync {
    fn localize(&self, template: &str, params: &[(&str, String)]) -> String;
}

/// Replaces `{name}` placeholders; leaves unknown placeholders as written
#[derive(Debug, Default, Clone, Copy)]
pub struct TemplateLocalizer;

impl Localizer for TemplateLocalizer {
    fn localize(&self, template: &str, params: &[(&str, String)]) -> String {
        params.iter().fold(template.to_string(), |acc, (name, value)| {
            acc.replace(&format!("{{{}}}", name), value)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholders_replaced() {
        let label = TemplateLocalizer.localize("Purging {total} pages.", &[("total", "12".to_string())]);
        assert_eq!(label, "Purging 12 pages.");
    }

    #[test]
    fn test_unknown_placeholder_kept() {
        let label = TemplateLocalizer.localize("{missing} of {total}", &[("total", "3".to_string())]);
        assert_eq!(label, "{missing} of 3");
    }
}
