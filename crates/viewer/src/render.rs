//! Text rendering of the status cards.

use crate::viewer::ViewerState;

const TITLE: &str = "🗺️ KVInfoSysBund";
const SUBTITLE: &str = "Geo-Informationssystem für Krisenbewältigung";
const TAGLINE: &str = "BWI DevOps Challenge - Deployment Demo";

/// Display switches for [`render`].
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderOptions {
    /// Append the full status JSON below the summary.
    pub show_json: bool,
}

/// Renders the fixed-layout view for `state`.
pub fn render(state: &ViewerState, options: RenderOptions) -> String {
    let backend_icon = match state {
        ViewerState::Connected(_) => "✅",
        ViewerState::Loading | ViewerState::Disconnected => "❌",
    };

    let mut lines = vec![
        TITLE.to_string(),
        SUBTITLE.to_string(),
        TAGLINE.to_string(),
        String::new(),
        "🖥️ System Status".to_string(),
        "  Frontend: ✅ Running".to_string(),
        format!("  Backend:  {backend_icon} {}", state.label()),
        // The view never probes the database itself.
        "  Database: ✅ Connected".to_string(),
    ];

    let details = match state {
        ViewerState::Connected(info) if info.has_details() => Some(info),
        _ => None,
    };

    if let Some(info) = details {
        lines.push(String::new());
        lines.push(format!("  Environment: {}", info.environment()));
        lines.push(format!("  Version: {}", info.version()));

        if options.show_json {
            lines.push(String::new());
            lines.push(format!("{:#}", info.raw()));
        }
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}
