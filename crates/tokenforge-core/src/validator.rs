//! Token document validator — accumulates findings, never fail-fast
//!
//! Runs every rule against the document (and the emitted artifacts, for
//! the size rule) and returns a flat list of categorized findings. Rules
//! are independent: an error in one never suppresses another, so the
//! caller always gets the complete picture.
//!
//! Findings report; they never block. The emitters will happily produce
//! best-effort text for a broken document, and it is the caller's choice
//! whether to trust the artifacts when errors are present.
//!
//! # Rules
//!
//! 1. primary-500 on white below the 4.5:1 AA contrast minimum → warning
//! 2. foreground on background below the 7:1 AAA target → warning
//!    (the stricter threshold here is intentional and preserved)
//! 3. brand/semantic color scales missing any of the 11 stops → error
//! 4. malformed hex in brand scales or background/foreground/border → error
//! 5. empty sans font-family list → error
//! 6. no system fallback in the sans list → warning
//! 7. base font size outside [0.75, 1.25] rem → warning
//! 8. negative spacing values → error
//! 9. artifacts above the 100 KiB budget → warning (CSS) / info (config)
//! 10. fast duration under 100ms → warning; slow over 500ms → info
//! 11. borderRadius.full not 9999 → info
//!
//! Unparseable numbers skip their rule silently; only rule 4 is about
//! format validity.

use serde::{Deserialize, Serialize};

use crate::color::{contrast_ratio, is_valid_hex};
use crate::document::TokenDocument;
use crate::size::{size_bytes, SIZE_WARN_BYTES};

// ── Finding types ──────────────────────────────────────────

/// Severity level for findings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
    Info,
}

/// Category of validation finding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Contrast,
    Missing,
    Invalid,
    Size,
    Accessibility,
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Category::Contrast => write!(f, "contrast"),
            Category::Missing => write!(f, "missing"),
            Category::Invalid => write!(f, "invalid"),
            Category::Size => write!(f, "size"),
            Category::Accessibility => write!(f, "accessibility"),
        }
    }
}

/// A single validation finding
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Finding {
    pub category: Category,
    pub severity: Severity,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token_path: Option<String>,
}

impl std::fmt::Display for Finding {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let prefix = match self.severity {
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Info => "info",
        };
        if let Some(ref path) = self.token_path {
            write!(f, "{} [{}] {}: {}", prefix, self.category, path, self.message)
        } else {
            write!(f, "{} [{}]: {}", prefix, self.category, self.message)
        }
    }
}

/// Result of validating a token document — accumulates all findings
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ValidationResult {
    pub findings: Vec<Finding>,
}

impl ValidationResult {
    pub fn new() -> Self {
        Self {
            findings: Vec::new(),
        }
    }

    /// Returns true if no error-severity findings exist (warnings are OK)
    pub fn is_valid(&self) -> bool {
        !self
            .findings
            .iter()
            .any(|f| f.severity == Severity::Error)
    }

    pub fn errors(&self) -> Vec<&Finding> {
        self.by_severity(Severity::Error)
    }

    pub fn warnings(&self) -> Vec<&Finding> {
        self.by_severity(Severity::Warning)
    }

    pub fn infos(&self) -> Vec<&Finding> {
        self.by_severity(Severity::Info)
    }

    fn by_severity(&self, severity: Severity) -> Vec<&Finding> {
        self.findings
            .iter()
            .filter(|f| f.severity == severity)
            .collect()
    }

    fn add(
        &mut self,
        category: Category,
        severity: Severity,
        message: String,
        suggestion: Option<String>,
        token_path: Option<String>,
    ) {
        self.findings.push(Finding {
            category,
            severity,
            message,
            suggestion,
            token_path,
        });
    }
}

// ── Public API ─────────────────────────────────────────────

/// Validate a token document against every rule.
///
/// Document-level rules run first, then the artifact-size rule against
/// the emitted CSS and config text. The findings list order is stable
/// across runs for identical input.
pub fn validate(doc: &TokenDocument, css: &str, config: &str) -> ValidationResult {
    let mut result = ValidationResult::new();

    check_contrast(doc, &mut result);
    check_scale_completeness(doc, &mut result);
    check_hex_validity(doc, &mut result);
    check_font_families(doc, &mut result);
    check_base_font_size(doc, &mut result);
    check_spacing(doc, &mut result);
    check_animation_timing(doc, &mut result);
    check_radius_canonical(doc, &mut result);
    check_artifact_sizes(css, config, &mut result);

    result
}

// ── Rules 1-2: Contrast ────────────────────────────────────

fn check_contrast(doc: &TokenDocument, result: &mut ValidationResult) {
    // Rule 1: primary-500 on white, AA threshold for normal text.
    if let Some(primary) = doc.colors.primary.get("500") {
        let ratio = contrast_ratio(primary, "#ffffff");
        if ratio < 4.5 {
            result.add(
                Category::Contrast,
                Severity::Warning,
                format!(
                    "primary-500 on white has a contrast ratio of {:.2}:1, below the 4.5:1 AA minimum for normal text",
                    ratio
                ),
                Some("use a darker shade such as primary-600 for text on light backgrounds".to_string()),
                Some("colors.primary.500".to_string()),
            );
        }
    }

    // Rule 2: foreground on background, AAA threshold. Stricter than rule
    // 1 on purpose; body text is the worst case for long-form reading.
    let ratio = contrast_ratio(&doc.colors.foreground, &doc.colors.background);
    if ratio < 7.0 {
        result.add(
            Category::Contrast,
            Severity::Warning,
            format!(
                "foreground on background has a contrast ratio of {:.2}:1, below the 7:1 AAA target for body text",
                ratio
            ),
            Some("darken the foreground or lighten the background".to_string()),
            Some("colors.foreground".to_string()),
        );
    }
}

// ── Rule 3: Scale completeness ─────────────────────────────

fn check_scale_completeness(doc: &TokenDocument, result: &mut ValidationResult) {
    for (group, scale) in doc.colors.checked_scales() {
        let missing = scale.missing_stops();
        if !missing.is_empty() {
            result.add(
                Category::Missing,
                Severity::Error,
                format!(
                    "color scale '{}' is missing stops: {}",
                    group,
                    missing.join(", ")
                ),
                Some(format!("add the missing stops to colors.{}", group)),
                Some(format!("colors.{}", group)),
            );
        }
    }
}

// ── Rule 4: Hex validity ───────────────────────────────────

fn check_hex_validity(doc: &TokenDocument, result: &mut ValidationResult) {
    let brand_scales = [
        ("primary", &doc.colors.primary),
        ("secondary", &doc.colors.secondary),
        ("accent", &doc.colors.accent),
    ];
    for (group, scale) in brand_scales {
        for (stop, value) in scale.stops() {
            if let Some(value) = value {
                if !is_valid_hex(value) {
                    result.add(
                        Category::Invalid,
                        Severity::Error,
                        format!("'{}' is not a valid hex color", value),
                        Some("use 3- or 6-digit hex notation, e.g. #3b82f6".to_string()),
                        Some(format!("colors.{}.{}", group, stop)),
                    );
                }
            }
        }
    }

    let surfaces = [
        ("background", &doc.colors.background),
        ("foreground", &doc.colors.foreground),
        ("border", &doc.colors.border),
    ];
    for (name, value) in surfaces {
        if !is_valid_hex(value) {
            result.add(
                Category::Invalid,
                Severity::Error,
                format!("'{}' is not a valid hex color", value),
                Some("use 3- or 6-digit hex notation, e.g. #ffffff".to_string()),
                Some(format!("colors.{}", name)),
            );
        }
    }
}

// ── Rules 5-6: Font families ───────────────────────────────

fn check_font_families(doc: &TokenDocument, result: &mut ValidationResult) {
    let sans = &doc.typography.font_family.sans;

    // Rule 5: the sans stack must exist with a usable first entry.
    if sans.first().map(String::as_str).unwrap_or("").is_empty() {
        result.add(
            Category::Missing,
            Severity::Error,
            "typography.fontFamily.sans must list at least one font family".to_string(),
            Some("add a primary font, e.g. Inter".to_string()),
            Some("typography.fontFamily.sans".to_string()),
        );
    }

    // Rule 6: a generic or platform fallback keeps text rendering sane
    // when the primary font fails to load.
    const FALLBACKS: [&str; 3] = ["system-ui", "sans-serif", "-apple-system"];
    let has_fallback = sans
        .iter()
        .any(|family| FALLBACKS.contains(&family.as_str()));
    if !has_fallback {
        result.add(
            Category::Accessibility,
            Severity::Warning,
            "sans font stack has no system fallback".to_string(),
            Some("append system-ui or sans-serif to the sans family list".to_string()),
            Some("typography.fontFamily.sans".to_string()),
        );
    }
}

// ── Rule 7: Base font size ─────────────────────────────────

fn check_base_font_size(doc: &TokenDocument, result: &mut ValidationResult) {
    let Some(base) = doc.typography.font_size.get("base") else {
        return;
    };
    let Some(value) = leading_number(base) else {
        return;
    };
    if !(0.75..=1.25).contains(&value) {
        result.add(
            Category::Accessibility,
            Severity::Warning,
            format!(
                "fontSize.base is '{}'; typical body text sits between 0.75rem and 1.25rem",
                base
            ),
            Some("set fontSize.base to 1rem unless the design demands otherwise".to_string()),
            Some("typography.fontSize.base".to_string()),
        );
    }
}

// ── Rule 8: Spacing ────────────────────────────────────────

fn check_spacing(doc: &TokenDocument, result: &mut ValidationResult) {
    for (key, value) in &doc.spacing {
        let Some(number) = leading_number(value) else {
            continue;
        };
        if number < 0.0 {
            result.add(
                Category::Invalid,
                Severity::Error,
                format!("spacing.{} is '{}', which is negative", key, value),
                Some("spacing tokens must be zero or positive lengths".to_string()),
                Some(format!("spacing.{}", key)),
            );
        }
    }
}

// ── Rule 10: Animation timing ──────────────────────────────

fn check_animation_timing(doc: &TokenDocument, result: &mut ValidationResult) {
    let duration = &doc.animation.duration;

    if let Some(fast) = duration_ms(&duration.fast) {
        if fast < 100.0 {
            result.add(
                Category::Accessibility,
                Severity::Warning,
                format!(
                    "animation.duration.fast is '{}'; transitions under 100ms can feel abrupt",
                    duration.fast
                ),
                Some("use at least 100ms for perceivable transitions".to_string()),
                Some("animation.duration.fast".to_string()),
            );
        }
    }

    if let Some(slow) = duration_ms(&duration.slow) {
        if slow > 500.0 {
            result.add(
                Category::Accessibility,
                Severity::Info,
                format!(
                    "animation.duration.slow is '{}'; long animations should respect prefers-reduced-motion",
                    duration.slow
                ),
                Some("gate animations behind a prefers-reduced-motion media query".to_string()),
                Some("animation.duration.slow".to_string()),
            );
        }
    }
}

// ── Rule 11: Full radius canonicalization ──────────────────

fn check_radius_canonical(doc: &TokenDocument, result: &mut ValidationResult) {
    let Some(full) = doc.border_radius.get("full") else {
        return;
    };
    let Some(value) = leading_number(full) else {
        return;
    };
    if value != 9999.0 {
        result.add(
            Category::Invalid,
            Severity::Info,
            format!("borderRadius.full is '{}'", full),
            Some("use 9999px to guarantee circular shapes at any element size".to_string()),
            Some("borderRadius.full".to_string()),
        );
    }
}

// ── Rule 9: Artifact sizes ─────────────────────────────────

fn check_artifact_sizes(css: &str, config: &str, result: &mut ValidationResult) {
    let css_bytes = size_bytes(css);
    if css_bytes > SIZE_WARN_BYTES {
        result.add(
            Category::Size,
            Severity::Warning,
            format!(
                "generated CSS is {}, above the 100 KB budget",
                crate::size::format_file_size(css_bytes)
            ),
            Some("trim unused scales or shorten shadow definitions".to_string()),
            None,
        );
    }

    // Config overruns are informational only; the consuming build tool is
    // expected to tree-shake unused tokens.
    let config_bytes = size_bytes(config);
    if config_bytes > SIZE_WARN_BYTES {
        result.add(
            Category::Size,
            Severity::Info,
            format!(
                "generated config is {}, above the 100 KB budget",
                crate::size::format_file_size(config_bytes)
            ),
            None,
            None,
        );
    }
}

// ── Numeric parsing ────────────────────────────────────────

/// Parse the leading numeric portion of a CSS value (`"-1rem"` → -1.0).
/// Returns `None` when no number leads the string, so "cannot evaluate"
/// is an explicit branch rather than a NaN sentinel.
fn leading_number(input: &str) -> Option<f64> {
    split_number(input).map(|(value, _)| value)
}

/// Parse a CSS time value into milliseconds (`"150ms"` → 150, `"0.3s"` →
/// 300). Bare numbers are taken as milliseconds.
fn duration_ms(input: &str) -> Option<f64> {
    let (value, unit) = split_number(input)?;
    match unit.trim() {
        "s" => Some(value * 1000.0),
        _ => Some(value),
    }
}

fn split_number(input: &str) -> Option<(f64, &str)> {
    let s = input.trim();
    let bytes = s.as_bytes();
    let mut end = 0;
    if end < bytes.len() && (bytes[end] == b'-' || bytes[end] == b'+') {
        end += 1;
    }
    let mut seen_digit = false;
    let mut seen_dot = false;
    while end < bytes.len() {
        match bytes[end] {
            b'0'..=b'9' => {
                seen_digit = true;
                end += 1;
            }
            b'.' if !seen_dot => {
                seen_dot = true;
                end += 1;
            }
            _ => break,
        }
    }
    if !seen_digit {
        return None;
    }
    s[..end].parse().ok().map(|value| (value, &s[end..]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{config::emit_config, css::emit_css};

    fn validate_doc(doc: &TokenDocument) -> ValidationResult {
        let css = emit_css(doc);
        let config = emit_config(doc);
        validate(doc, &css, &config)
    }

    fn findings_in(result: &ValidationResult, category: Category) -> Vec<&Finding> {
        result
            .findings
            .iter()
            .filter(|f| f.category == category)
            .collect()
    }

    #[test]
    fn test_default_document_end_to_end() {
        let result = validate_doc(&TokenDocument::default());

        // Rule 1 fires: contrast(#3b82f6, white) ≈ 3.68 < 4.5.
        let contrast = findings_in(&result, Category::Contrast);
        assert_eq!(contrast.len(), 1);
        assert_eq!(contrast[0].severity, Severity::Warning);
        assert_eq!(
            contrast[0].token_path.as_deref(),
            Some("colors.primary.500")
        );

        // Rule 2 stays silent: contrast(#0f172a, #ffffff) ≈ 17.9 ≥ 7.
        // No errors anywhere in the default document.
        assert!(result.is_valid());
        assert!(result.errors().is_empty());
    }

    #[test]
    fn test_low_foreground_contrast_warns() {
        let mut doc = TokenDocument::default();
        doc.colors.foreground = "#94a3b8".to_string();
        let result = validate_doc(&doc);
        let contrast = findings_in(&result, Category::Contrast);
        assert!(contrast
            .iter()
            .any(|f| f.token_path.as_deref() == Some("colors.foreground")));
        // Still only warnings; contrast never produces errors.
        assert!(result.is_valid());
    }

    #[test]
    fn test_removed_stop_yields_exactly_one_error() {
        for stop in crate::document::COLOR_STOPS {
            let mut doc = TokenDocument::default();
            doc.colors.primary.remove(stop);
            let result = validate_doc(&doc);
            let errors = result.errors();
            assert_eq!(errors.len(), 1, "stop {}", stop);
            assert_eq!(errors[0].category, Category::Missing);
            assert!(errors[0].message.contains(stop));
            assert_eq!(errors[0].token_path.as_deref(), Some("colors.primary"));
            assert!(!result.is_valid());
        }
    }

    #[test]
    fn test_gray_scale_is_not_subject_to_completeness() {
        let mut doc = TokenDocument::default();
        doc.colors.gray.remove("500");
        let result = validate_doc(&doc);
        assert!(result.is_valid());
    }

    #[test]
    fn test_invalid_hex_is_an_error() {
        let mut doc = TokenDocument::default();
        doc.colors.primary.set("300", "#gggggg");
        doc.colors.border = "red".to_string();
        let result = validate_doc(&doc);
        let invalid = findings_in(&result, Category::Invalid);
        assert_eq!(invalid.len(), 2);
        assert!(invalid
            .iter()
            .any(|f| f.token_path.as_deref() == Some("colors.primary.300")));
        assert!(invalid
            .iter()
            .any(|f| f.token_path.as_deref() == Some("colors.border")));
        assert!(!result.is_valid());
    }

    #[test]
    fn test_empty_sans_family_is_an_error() {
        let mut doc = TokenDocument::default();
        doc.typography.font_family.sans.clear();
        let result = validate_doc(&doc);
        assert!(result
            .errors()
            .iter()
            .any(|f| f.token_path.as_deref() == Some("typography.fontFamily.sans")));
    }

    #[test]
    fn test_missing_fallback_is_a_warning() {
        let mut doc = TokenDocument::default();
        doc.typography.font_family.sans = vec!["Inter".to_string()];
        let result = validate_doc(&doc);
        assert!(result.is_valid());
        assert!(result
            .warnings()
            .iter()
            .any(|f| f.message.contains("fallback")));
    }

    #[test]
    fn test_base_font_size_bounds() {
        let mut doc = TokenDocument::default();
        doc.typography
            .font_size
            .insert("base".to_string(), "1.5rem".to_string());
        let result = validate_doc(&doc);
        assert!(result
            .warnings()
            .iter()
            .any(|f| f.token_path.as_deref() == Some("typography.fontSize.base")));

        // Unparseable sizes skip the rule rather than crash it.
        doc.typography
            .font_size
            .insert("base".to_string(), "large".to_string());
        let result = validate_doc(&doc);
        assert!(!result
            .warnings()
            .iter()
            .any(|f| f.token_path.as_deref() == Some("typography.fontSize.base")));
    }

    #[test]
    fn test_negative_spacing_is_an_error() {
        let mut doc = TokenDocument::default();
        doc.spacing.insert("4".to_string(), "-1rem".to_string());
        let result = validate_doc(&doc);
        let errors = result.errors();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].token_path.as_deref(), Some("spacing.4"));
        assert_eq!(errors[0].category, Category::Invalid);
    }

    #[test]
    fn test_animation_timing_rules() {
        let mut doc = TokenDocument::default();
        doc.animation.duration.fast = "50ms".to_string();
        doc.animation.duration.slow = "0.8s".to_string();
        let result = validate_doc(&doc);
        assert!(result
            .warnings()
            .iter()
            .any(|f| f.token_path.as_deref() == Some("animation.duration.fast")));
        assert!(result
            .infos()
            .iter()
            .any(|f| f.token_path.as_deref() == Some("animation.duration.slow")));
    }

    #[test]
    fn test_full_radius_suggestion() {
        let mut doc = TokenDocument::default();
        doc.border_radius
            .insert("full".to_string(), "50%".to_string());
        let result = validate_doc(&doc);
        assert!(result
            .infos()
            .iter()
            .any(|f| f.token_path.as_deref() == Some("borderRadius.full")));
    }

    #[test]
    fn test_size_threshold_is_exclusive() {
        let doc = TokenDocument::default();
        let at_limit = "x".repeat(100 * 1024);
        let over_limit = "x".repeat(100 * 1024 + 1);

        let result = validate(&doc, &at_limit, &at_limit);
        assert!(findings_in(&result, Category::Size).is_empty());

        let result = validate(&doc, &over_limit, &over_limit);
        let size = findings_in(&result, Category::Size);
        assert_eq!(size.len(), 2);
        assert_eq!(size[0].severity, Severity::Warning);
        assert_eq!(size[1].severity, Severity::Info);
    }

    #[test]
    fn test_document_findings_precede_size_findings() {
        let mut doc = TokenDocument::default();
        doc.spacing.insert("4".to_string(), "-1rem".to_string());
        let over_limit = "x".repeat(100 * 1024 + 1);
        let result = validate(&doc, &over_limit, "");
        let spacing_idx = result
            .findings
            .iter()
            .position(|f| f.category == Category::Invalid)
            .unwrap();
        let size_idx = result
            .findings
            .iter()
            .position(|f| f.category == Category::Size)
            .unwrap();
        assert!(spacing_idx < size_idx);
    }

    #[test]
    fn test_leading_number() {
        assert_eq!(leading_number("1rem"), Some(1.0));
        assert_eq!(leading_number("-1rem"), Some(-1.0));
        assert_eq!(leading_number("0.125rem"), Some(0.125));
        assert_eq!(leading_number("  16px "), Some(16.0));
        assert_eq!(leading_number("auto"), None);
        assert_eq!(leading_number(""), None);
    }

    #[test]
    fn test_duration_ms() {
        assert_eq!(duration_ms("150ms"), Some(150.0));
        assert_eq!(duration_ms("0.3s"), Some(300.0));
        assert_eq!(duration_ms("200"), Some(200.0));
        assert_eq!(duration_ms("fast"), None);
    }

    #[test]
    fn test_finding_display() {
        let finding = Finding {
            category: Category::Missing,
            severity: Severity::Error,
            message: "color scale 'primary' is missing stops: 400".to_string(),
            suggestion: None,
            token_path: Some("colors.primary".to_string()),
        };
        assert_eq!(
            finding.to_string(),
            "error [missing] colors.primary: color scale 'primary' is missing stops: 400"
        );
    }
}
