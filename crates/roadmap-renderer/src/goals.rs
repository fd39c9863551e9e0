//! Career goal cards.

use std::fmt::Write;

use roadmap_content::Goal;

use crate::util::escape_html;

/// Render one card per goal, reading `current / target unit`.
///
/// Numeric goals also get a progress bar.
pub fn render_goals(goals: &[Goal], out: &mut String) {
    out.push_str(r#"<main class="goals grid grid-flow-col auto-cols-max gap-4">"#);
    for goal in goals {
        out.push_str(r#"<div class="goal bg-neutral-light rounded-lg p-4 flex flex-col gap-2">"#);
        out.push_str(r#"<h1 class="text-sm text-white/50">"#);
        out.push_str(&escape_html(&goal.goal));
        out.push_str(r#"</h1><p class="text-2xl text-primary">"#);
        let value = match goal.unit.as_deref().filter(|u| !u.is_empty()) {
            Some(unit) => format!("{} / {} {unit}", goal.current, goal.target),
            None => format!("{} / {}", goal.current, goal.target),
        };
        out.push_str(&escape_html(&value));
        out.push_str("</p>");
        if let Some(progress) = goal.progress() {
            write!(
                out,
                r#"<div class="h-1 rounded bg-black/20"><div class="h-1 rounded bg-primary" style="width: {:.0}%"></div></div>"#,
                progress * 100.0
            )
            .unwrap();
        }
        out.push_str("</div>");
    }
    out.push_str("</main>");
}
