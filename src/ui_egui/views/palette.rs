use egui::Color32;

/// Used when an appointment's display tag cannot be parsed.
pub const FALLBACK_BLOCK: Color32 = Color32::from_rgb(96, 165, 250);

fn with_alpha(color: Color32, alpha: u8) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), alpha)
}

/// Parse a display tag: `#RRGGBB` or `hsl(h, s%, l%)`.
pub fn parse_color(tag: &str) -> Option<Color32> {
    let tag = tag.trim();
    if tag.is_empty() {
        return None;
    }

    if let Some(args) = tag
        .strip_prefix("hsl(")
        .and_then(|rest| rest.strip_suffix(')'))
    {
        return parse_hsl(args);
    }

    let hex = tag.trim_start_matches('#');
    if hex.len() != 6 {
        return None;
    }

    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;

    Some(Color32::from_rgb(r, g, b))
}

fn parse_hsl(args: &str) -> Option<Color32> {
    let mut parts = args.split(',').map(|part| part.trim().trim_end_matches('%'));
    let h: f32 = parts.next()?.parse().ok()?;
    let s: f32 = parts.next()?.parse().ok()?;
    let l: f32 = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some(hsl_to_rgb(h, s / 100.0, l / 100.0))
}

fn hsl_to_rgb(h: f32, s: f32, l: f32) -> Color32 {
    let s = s.clamp(0.0, 1.0);
    let l = l.clamp(0.0, 1.0);
    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let h = h.rem_euclid(360.0) / 60.0;
    let x = c * (1.0 - (h % 2.0 - 1.0).abs());
    let (r, g, b) = match h as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };
    let m = l - c / 2.0;
    let channel = |v: f32| ((v + m) * 255.0).round().clamp(0.0, 255.0) as u8;
    Color32::from_rgb(channel(r), channel(g), channel(b))
}

/// Block fill for an appointment tag.
pub fn block_color(tag: &str) -> Color32 {
    parse_color(tag).unwrap_or(FALLBACK_BLOCK)
}

/// Dark or light text, whichever reads better on `background`.
pub fn text_on(background: Color32) -> Color32 {
    let luma = 0.299 * background.r() as f32
        + 0.587 * background.g() as f32
        + 0.114 * background.b() as f32;
    if luma > 160.0 {
        Color32::from_rgb(30, 30, 30)
    } else {
        Color32::WHITE
    }
}

#[derive(Clone, Copy)]
pub(crate) struct SchedulePalette {
    pub header_bg: Color32,
    pub header_text: Color32,
    pub cell_bg: Color32,
    pub muted_bg: Color32,
    pub today_bg: Color32,
    pub border: Color32,
    pub hour_line: Color32,
    pub major_line: Color32,
    pub text: Color32,
    pub muted_text: Color32,
    pub accent: Color32,
    pub slot_highlight: Color32,
    pub drag_source: Color32,
    pub drop_zone: Color32,
    pub drop_zone_active: Color32,
}

impl SchedulePalette {
    pub fn from_ui(ui: &egui::Ui) -> Self {
        let visuals = ui.visuals();
        let accent = Color32::from_rgb(37, 99, 235);
        if visuals.dark_mode {
            Self {
                header_bg: Color32::from_rgb(30, 41, 59),
                header_text: Color32::from_rgb(226, 232, 240),
                cell_bg: visuals.extreme_bg_color,
                muted_bg: visuals.faint_bg_color,
                today_bg: with_alpha(accent, 40),
                border: Color32::from_gray(70),
                hour_line: Color32::from_gray(55),
                major_line: Color32::from_gray(90),
                text: visuals.text_color(),
                muted_text: Color32::from_gray(140),
                accent,
                slot_highlight: with_alpha(accent, 90),
                drag_source: with_alpha(Color32::from_rgb(250, 204, 21), 40),
                drop_zone: with_alpha(accent, 50),
                drop_zone_active: with_alpha(accent, 160),
            }
        } else {
            Self {
                header_bg: Color32::from_rgb(37, 99, 235),
                header_text: Color32::WHITE,
                cell_bg: Color32::WHITE,
                muted_bg: Color32::from_rgb(249, 250, 251),
                today_bg: Color32::from_rgb(239, 246, 255),
                border: Color32::from_rgb(229, 231, 235),
                hour_line: Color32::from_rgb(243, 244, 246),
                major_line: Color32::from_rgb(209, 213, 219),
                text: Color32::from_rgb(17, 24, 39),
                muted_text: Color32::from_rgb(107, 114, 128),
                accent,
                slot_highlight: with_alpha(accent, 60),
                drag_source: Color32::from_rgb(254, 252, 232),
                drop_zone: with_alpha(accent, 40),
                drop_zone_active: with_alpha(accent, 140),
            }
        }
    }
}
