//! Human-readable summary renderer for diff records.

use crate::diff::model::{DiffKind, DiffRecord};

/// Render a Markdown summary of a diff, grouped by discrepancy category.
///
/// Within a group records keep their original order. The summary is for
/// review output only; the records themselves are the source of truth.
pub fn render_human_summary(records: &[DiffRecord]) -> String {
    let mut out = String::from("## Structural Diff\n\n");

    if records.is_empty() {
        out.push_str("_No differences detected._\n");
        return out;
    }

    out.push_str(&format!("**Differences**: {}\n\n", records.len()));

    let sections: [(&str, fn(&DiffKind) -> bool); 3] = [
        ("Missing Entries", |k| {
            matches!(
                k,
                DiffKind::MissingKey { .. }
                    | DiffKind::MissingIndex { .. }
                    | DiffKind::MissingElements { .. }
            )
        }),
        ("Value Mismatches", |k| {
            matches!(
                k,
                DiffKind::StringMismatch { .. }
                    | DiffKind::FloatMismatch { .. }
                    | DiffKind::IntegerMismatch { .. }
                    | DiffKind::ValueMismatch { .. }
            )
        }),
        ("Type Mismatches", |k| {
            matches!(k, DiffKind::TypeMismatch { .. })
        }),
    ];

    for (title, belongs) in sections {
        let group: Vec<&DiffRecord> = records.iter().filter(|r| belongs(&r.kind)).collect();
        if group.is_empty() {
            continue;
        }
        out.push_str(&format!("### {} ({})\n\n", title, group.len()));
        for record in group {
            out.push_str(&format!("- {}\n", record));
        }
        out.push('\n');
    }

    out
}
