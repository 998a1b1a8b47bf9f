//! CSS artifact emitter — custom properties plus the utility-class catalog
//!
//! Walks the token document and produces one stylesheet string: a `:root`
//! block declaring every token as a `--`-prefixed custom property, followed
//! by a fixed catalog of utility classes that reference those properties.
//!
//! # Guarantees
//!
//! - **Deterministic**: sections are emitted in a fixed sequence and every
//!   keyed section iterates its ordered key constant, so identical
//!   documents produce byte-identical output.
//! - **Never fails**: the emitter does not validate. A missing stop or
//!   field renders as an empty value; the validator is responsible for
//!   having flagged it.
//!
//! Naming templates (stable across versions — downstream artifacts depend
//! on them): `--color-{group}-{stop}`, `--color-{surface}` (kebab-case),
//! `--font-{family|weight}`, `--text-{size}`, `--leading-{name}`,
//! `--tracking-{name}`, `--spacing-{key}`, `--radius-{name}`,
//! `--shadow-{name}`, `--duration-{name}`, `--ease-{name}`, `--z-{level}`,
//! `--{component}-{property}`.

use crate::document::{
    Colors, TokenDocument, FONT_SIZE_KEYS, FONT_WEIGHT_KEYS, LETTER_SPACING_KEYS,
    LINE_HEIGHT_KEYS, RADIUS_KEYS, SHADOW_KEYS, SPACING_KEYS, Z_INDEX_KEYS,
};

/// Emit the complete stylesheet for a token document.
pub fn emit_css(doc: &TokenDocument) -> String {
    let mut out = String::with_capacity(16 * 1024);

    out.push_str(":root {\n");
    emit_scales(&mut out, &doc.colors);
    emit_surfaces(&mut out, &doc.colors);
    emit_typography(&mut out, doc);
    emit_keyed_section(&mut out, "spacing", &SPACING_KEYS, &doc.spacing);
    emit_keyed_section(&mut out, "radius", &RADIUS_KEYS, &doc.border_radius);
    emit_keyed_section(&mut out, "shadow", &SHADOW_KEYS, &doc.box_shadow);
    emit_animation(&mut out, doc);
    emit_keyed_section(&mut out, "z", &Z_INDEX_KEYS, &doc.z_index);
    emit_components(&mut out, doc);
    out.push_str("}\n");

    out.push_str(UTILITY_CLASSES);
    out
}

// ── Section emitters ───────────────────────────────────────

fn emit_scales(out: &mut String, colors: &Colors) {
    for (group, scale) in colors.scale_entries() {
        for (stop, value) in scale.stops() {
            write_var3(out, "color", group, stop, value.unwrap_or(""));
        }
    }
}

fn emit_surfaces(out: &mut String, colors: &Colors) {
    for (name, value) in colors.surface_entries() {
        write_var2(out, "color", &kebab(name), value);
    }
}

fn emit_typography(out: &mut String, doc: &TokenDocument) {
    let fam = &doc.typography.font_family;
    write_var2(out, "font", "sans", &fam.sans.join(", "));
    write_var2(out, "font", "serif", &fam.serif.join(", "));
    write_var2(out, "font", "mono", &fam.mono.join(", "));

    emit_keyed_section(out, "text", &FONT_SIZE_KEYS, &doc.typography.font_size);
    emit_keyed_section(out, "font", &FONT_WEIGHT_KEYS, &doc.typography.font_weight);
    emit_keyed_section(out, "leading", &LINE_HEIGHT_KEYS, &doc.typography.line_height);
    emit_keyed_section(
        out,
        "tracking",
        &LETTER_SPACING_KEYS,
        &doc.typography.letter_spacing,
    );
}

fn emit_keyed_section(
    out: &mut String,
    prefix: &str,
    keys: &[&str],
    values: &std::collections::BTreeMap<String, String>,
) {
    for key in keys {
        let value = values.get(*key).map(String::as_str).unwrap_or("");
        write_var2(out, prefix, &css_key(key), value);
    }
}

fn emit_animation(out: &mut String, doc: &TokenDocument) {
    let d = &doc.animation.duration;
    write_var2(out, "duration", "fast", &d.fast);
    write_var2(out, "duration", "normal", &d.normal);
    write_var2(out, "duration", "slow", &d.slow);

    let e = &doc.animation.easing;
    write_var2(out, "ease", "linear", &e.linear);
    write_var2(out, "ease", "in", &e.ease_in);
    write_var2(out, "ease", "out", &e.ease_out);
    write_var2(out, "ease", "in-out", &e.ease_in_out);
}

fn emit_components(out: &mut String, doc: &TokenDocument) {
    let c = &doc.components;
    let entries: [(&str, &str, &str); 14] = [
        ("button", "padding-x", c.button.padding_x.as_str()),
        ("button", "padding-y", c.button.padding_y.as_str()),
        ("button", "radius", c.button.radius.as_str()),
        ("button", "font-weight", c.button.font_weight.as_str()),
        ("input", "height", c.input.height.as_str()),
        ("input", "padding-x", c.input.padding_x.as_str()),
        ("input", "radius", c.input.radius.as_str()),
        ("input", "border-width", c.input.border_width.as_str()),
        ("card", "padding", c.card.padding.as_str()),
        ("card", "radius", c.card.radius.as_str()),
        ("card", "border-width", c.card.border_width.as_str()),
        ("modal", "max-width", c.modal.max_width.as_str()),
        ("modal", "padding", c.modal.padding.as_str()),
        ("modal", "radius", c.modal.radius.as_str()),
    ];
    for (component, property, value) in entries {
        write_var2(out, component, property, value);
    }
}

// ── Writers ────────────────────────────────────────────────

fn write_var2(out: &mut String, prefix: &str, name: &str, value: &str) {
    out.push_str("  --");
    out.push_str(prefix);
    out.push('-');
    out.push_str(name);
    out.push_str(": ");
    out.push_str(value);
    out.push_str(";\n");
}

fn write_var3(out: &mut String, prefix: &str, group: &str, key: &str, value: &str) {
    out.push_str("  --");
    out.push_str(prefix);
    out.push('-');
    out.push_str(group);
    out.push('-');
    out.push_str(key);
    out.push_str(": ");
    out.push_str(value);
    out.push_str(";\n");
}

/// Sanitize a token key for use inside a custom-property name.
/// `.` is not an ident character in CSS, so `0.5` becomes `0-5`.
fn css_key(key: &str) -> String {
    key.replace('.', "-")
}

/// camelCase field name to kebab-case CSS fragment.
fn kebab(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for ch in name.chars() {
        if ch.is_ascii_uppercase() {
            out.push('-');
            out.push(ch.to_ascii_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}

// ── Utility-class catalog ──────────────────────────────────

// Fixed catalog: token values change what the custom properties resolve
// to, never the shape of these rules.
const UTILITY_CLASSES: &str = "
* {
  box-sizing: border-box;
}

body {
  margin: 0;
  font-family: var(--font-sans);
  font-size: var(--text-base);
  line-height: var(--leading-normal);
  color: var(--color-foreground);
  background-color: var(--color-background);
}

.btn {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  padding: var(--button-padding-y) var(--button-padding-x);
  border: none;
  border-radius: var(--button-radius);
  font-family: var(--font-sans);
  font-size: var(--text-sm);
  font-weight: var(--button-font-weight);
  cursor: pointer;
  transition: background-color var(--duration-fast) var(--ease-out);
}

.btn-primary {
  background-color: var(--color-primary-500);
  color: var(--color-background);
}

.btn-primary:hover {
  background-color: var(--color-primary-600);
}

.btn-secondary {
  background-color: var(--color-secondary-500);
  color: var(--color-background);
}

.btn-secondary:hover {
  background-color: var(--color-secondary-600);
}

.btn-accent {
  background-color: var(--color-accent-500);
  color: var(--color-background);
}

.btn-accent:hover {
  background-color: var(--color-accent-600);
}

.btn-outline {
  background-color: transparent;
  border: 1px solid var(--color-border);
  color: var(--color-foreground);
}

.btn-outline:hover {
  background-color: var(--color-muted);
}

.btn-ghost {
  background-color: transparent;
  color: var(--color-foreground);
}

.btn-ghost:hover {
  background-color: var(--color-muted);
}

.card {
  padding: var(--card-padding);
  border: var(--card-border-width) solid var(--color-border);
  border-radius: var(--card-radius);
  background-color: var(--color-card);
  color: var(--color-card-foreground);
  box-shadow: var(--shadow-sm);
}

.input {
  height: var(--input-height);
  padding: 0 var(--input-padding-x);
  border: var(--input-border-width) solid var(--color-input);
  border-radius: var(--input-radius);
  font-family: var(--font-sans);
  font-size: var(--text-sm);
  color: var(--color-foreground);
  background-color: var(--color-background);
}

.input:focus {
  outline: 2px solid var(--color-ring);
  outline-offset: 2px;
}

.input-error {
  border-color: var(--color-error-500);
}

.badge {
  display: inline-flex;
  align-items: center;
  padding: var(--spacing-0-5) var(--spacing-2);
  border-radius: var(--radius-full);
  font-size: var(--text-xs);
  font-weight: var(--font-medium);
}

.badge-primary {
  background-color: var(--color-primary-100);
  color: var(--color-primary-800);
}

.badge-secondary {
  background-color: var(--color-secondary-100);
  color: var(--color-secondary-800);
}

.badge-success {
  background-color: var(--color-success-100);
  color: var(--color-success-800);
}

.badge-warning {
  background-color: var(--color-warning-100);
  color: var(--color-warning-800);
}

.badge-error {
  background-color: var(--color-error-100);
  color: var(--color-error-800);
}

.alert {
  padding: var(--spacing-4);
  border: 1px solid var(--color-border);
  border-radius: var(--radius-md);
  font-size: var(--text-sm);
}

.alert-success {
  border-color: var(--color-success-300);
  background-color: var(--color-success-50);
  color: var(--color-success-900);
}

.alert-warning {
  border-color: var(--color-warning-300);
  background-color: var(--color-warning-50);
  color: var(--color-warning-900);
}

.alert-error {
  border-color: var(--color-error-300);
  background-color: var(--color-error-50);
  color: var(--color-error-900);
}

.alert-info {
  border-color: var(--color-info-300);
  background-color: var(--color-info-50);
  color: var(--color-info-900);
}
";
