//! Framework-config artifact emitter
//!
//! The same token walk as the CSS emitter, serialized as an importable ES
//! module for a utility-CSS framework build: one exported object literal
//! with framework-idiomatic keys. Color scales stay nested by stop (not
//! flattened to custom-property names) and every map preserves its
//! original keys verbatim, quoted where JavaScript requires it.
//!
//! Deterministic and infallible, like `emit_css`: fixed section order,
//! ordered key constants, empty string values for missing entries.

use std::collections::BTreeMap;

use crate::document::{
    TokenDocument, FONT_SIZE_KEYS, FONT_WEIGHT_KEYS, LETTER_SPACING_KEYS, LINE_HEIGHT_KEYS,
    RADIUS_KEYS, SHADOW_KEYS, SPACING_KEYS, Z_INDEX_KEYS,
};

const HEADER: &str = "/**\n * Design token configuration.\n * Generated by tokenforge; edits will be overwritten on the next build.\n */\nexport default {\n  theme: {\n    extend: {\n";

const FOOTER: &str = "    },\n  },\n};\n";

/// Emit the framework configuration module for a token document.
pub fn emit_config(doc: &TokenDocument) -> String {
    let mut out = String::with_capacity(16 * 1024);
    out.push_str(HEADER);

    emit_colors(&mut out, doc);
    emit_font_families(&mut out, doc);
    emit_map(&mut out, "fontSize", &FONT_SIZE_KEYS, &doc.typography.font_size);
    emit_map(&mut out, "fontWeight", &FONT_WEIGHT_KEYS, &doc.typography.font_weight);
    emit_map(&mut out, "lineHeight", &LINE_HEIGHT_KEYS, &doc.typography.line_height);
    emit_map(
        &mut out,
        "letterSpacing",
        &LETTER_SPACING_KEYS,
        &doc.typography.letter_spacing,
    );
    emit_map(&mut out, "spacing", &SPACING_KEYS, &doc.spacing);
    emit_map(&mut out, "borderRadius", &RADIUS_KEYS, &doc.border_radius);
    emit_map(&mut out, "boxShadow", &SHADOW_KEYS, &doc.box_shadow);
    emit_transitions(&mut out, doc);
    emit_map(&mut out, "zIndex", &Z_INDEX_KEYS, &doc.z_index);

    out.push_str(FOOTER);
    out
}

// ── Section emitters ───────────────────────────────────────

fn emit_colors(out: &mut String, doc: &TokenDocument) {
    out.push_str("      colors: {\n");
    for (group, scale) in doc.colors.scale_entries() {
        out.push_str("        ");
        write_key(out, group);
        out.push_str(": {\n");
        for (stop, value) in scale.stops() {
            out.push_str("          ");
            write_key(out, stop);
            out.push_str(": ");
            write_string(out, value.unwrap_or(""));
            out.push_str(",\n");
        }
        out.push_str("        },\n");
    }
    for (name, value) in doc.colors.surface_entries() {
        out.push_str("        ");
        write_key(out, name);
        out.push_str(": ");
        write_string(out, value);
        out.push_str(",\n");
    }
    out.push_str("      },\n");
}

fn emit_font_families(out: &mut String, doc: &TokenDocument) {
    let fam = &doc.typography.font_family;
    out.push_str("      fontFamily: {\n");
    for (name, list) in [("sans", &fam.sans), ("serif", &fam.serif), ("mono", &fam.mono)] {
        out.push_str("        ");
        out.push_str(name);
        out.push_str(": [");
        for (i, family) in list.iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            write_string(out, family);
        }
        out.push_str("],\n");
    }
    out.push_str("      },\n");
}

fn emit_map(out: &mut String, section: &str, keys: &[&str], values: &BTreeMap<String, String>) {
    out.push_str("      ");
    out.push_str(section);
    out.push_str(": {\n");
    for key in keys {
        let value = values.get(*key).map(String::as_str).unwrap_or("");
        out.push_str("        ");
        write_key(out, key);
        out.push_str(": ");
        write_string(out, value);
        out.push_str(",\n");
    }
    out.push_str("      },\n");
}

fn emit_transitions(out: &mut String, doc: &TokenDocument) {
    let d = &doc.animation.duration;
    out.push_str("      transitionDuration: {\n");
    for (name, value) in [("fast", &d.fast), ("normal", &d.normal), ("slow", &d.slow)] {
        out.push_str("        ");
        out.push_str(name);
        out.push_str(": ");
        write_string(out, value);
        out.push_str(",\n");
    }
    out.push_str("      },\n");

    let e = &doc.animation.easing;
    out.push_str("      transitionTimingFunction: {\n");
    for (name, value) in [
        ("linear", &e.linear),
        ("in", &e.ease_in),
        ("out", &e.ease_out),
        ("in-out", &e.ease_in_out),
    ] {
        out.push_str("        ");
        write_key(out, name);
        out.push_str(": ");
        write_string(out, value);
        out.push_str(",\n");
    }
    out.push_str("      },\n");
}

// ── Writers ────────────────────────────────────────────────

/// Write an object key, quoting it unless it is a plain JS identifier or
/// an all-digit numeric key.
fn write_key(out: &mut String, key: &str) {
    if is_bare_key(key) {
        out.push_str(key);
    } else {
        write_string(out, key);
    }
}

fn is_bare_key(key: &str) -> bool {
    let mut chars = key.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    if key.bytes().all(|b| b.is_ascii_digit()) {
        return true;
    }
    (first.is_ascii_alphabetic() || first == '_' || first == '$')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

/// Write a single-quoted JS string literal, escaping backslashes and
/// quotes so multi-layer shadow values and exotic font names stay valid.
fn write_string(out: &mut String, value: &str) {
    out.push('\'');
    for ch in value.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            _ => out.push(ch),
        }
    }
    out.push('\'');
}
