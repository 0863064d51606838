use crate::codec::Selection;
use crate::palette::{Mood, MoodPalette, mood_palette};
use std::fmt::Write;

pub const POSTER_WIDTH: u32 = 1000;
pub const POSTER_HEIGHT: u32 = 600;
pub const RING_RADII: [u32; 5] = [230, 200, 170, 140, 110];
pub const POSTER_FILENAME: &str = "portato_recommendation.svg";

const POSTER_TITLE: &str = "PORTATO 추천 무드";
const MISSING: &str = "—";

/// Fixed-layout description of the rendered poster: gradient background
/// between the palette's first two colors, concentric rings in the accent,
/// title and subtitle in the ink. Same selection in, same poster out.
#[derive(Debug, Clone, PartialEq)]
pub struct Poster {
    pub width: u32,
    pub height: u32,
    pub palette: MoodPalette,
    pub title: String,
    pub subtitle: String,
}

/// Maps a decoded selection set to its poster description. Pure; the palette
/// is keyed by the mood value, anything unknown falls back to the default.
pub fn render_artifact(selection: &Selection) -> Poster {
    Poster {
        width: POSTER_WIDTH,
        height: POSTER_HEIGHT,
        palette: mood_palette(Mood::resolve(&selection.mood)),
        title: POSTER_TITLE.to_string(),
        subtitle: subtitle(selection),
    }
}

fn or_missing(value: &str) -> &str {
    if value.is_empty() { MISSING } else { value }
}

fn subtitle(selection: &Selection) -> String {
    let mut line = format!(
        "{} · {} · {} · {}",
        or_missing(&selection.place),
        or_missing(&selection.mood),
        or_missing(&selection.flow),
        or_missing(&selection.extras),
    );
    if !selection.instruments.is_empty() {
        let joined = selection
            .instruments
            .iter()
            .map(|name| name.as_str())
            .collect::<Vec<_>>()
            .join(" · ");
        write!(line, " · {joined}").unwrap();
    }
    line
}

impl Poster {
    /// Serializes to a standalone SVG document embedding its own colors.
    pub fn to_svg(&self) -> String {
        let MoodPalette {
            background,
            midtone,
            accent,
            ink,
        } = self.palette;
        let (w, h) = (self.width, self.height);
        let (cx, cy) = (w / 2, h / 2);

        let mut out = String::with_capacity(2048);
        write!(
            out,
            "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 {w} {h}\" \
             role=\"img\" preserveAspectRatio=\"xMidYMid slice\">"
        )
        .unwrap();
        write!(
            out,
            "<defs><linearGradient id=\"g\" x1=\"0\" y1=\"0\" x2=\"1\" y2=\"1\">\
             <stop offset=\"0%\" stop-color=\"{background}\"/>\
             <stop offset=\"100%\" stop-color=\"{midtone}\"/>\
             </linearGradient></defs>"
        )
        .unwrap();
        write!(out, "<rect width=\"{w}\" height=\"{h}\" fill=\"url(#g)\"/>").unwrap();

        for radius in RING_RADII {
            write!(
                out,
                "<circle cx=\"{cx}\" cy=\"{cy}\" r=\"{radius}\" fill=\"none\" \
                 stroke=\"{accent}\" stroke-width=\"1\" opacity=\"0.4\"/>"
            )
            .unwrap();
        }

        write!(out, "<g fill=\"{ink}\">").unwrap();
        write!(
            out,
            "<text x=\"{cx}\" y=\"{}\" text-anchor=\"middle\" \
             font-size=\"36\" font-weight=\"700\">",
            cy - 10
        )
        .unwrap();
        svg_escape_into(&mut out, &self.title);
        out.push_str("</text>");
        write!(
            out,
            "<text x=\"{cx}\" y=\"{}\" text-anchor=\"middle\" \
             font-size=\"18\" opacity=\"0.8\">",
            cy + 28
        )
        .unwrap();
        svg_escape_into(&mut out, &self.subtitle);
        out.push_str("</text></g></svg>");
        out
    }
}

pub fn svg_escape_into(out: &mut String, text: &str) {
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
}

/// Display label for a known step value, in the result summary's terms.
pub fn value_label(key: &str, value: &str) -> Option<&'static str> {
    let label = match (key, value) {
        ("place", "field") => "들판에서",
        ("place", "forest") => "숲속에서",
        ("place", "lake") => "계곡에서",
        ("place", "sea") => "바닷가에서",
        ("mood", "classical") => "우아하고 정제된 선율",
        ("mood", "romantic") => "드라마틱한 감정",
        ("mood", "impressionist") => "몽환적 음색",
        ("mood", "neoclassical") => "자유로운 형식",
        ("flow", "lie") => "편안히 누워",
        ("flow", "sit") => "자유롭게 앉아",
        ("flow", "walk") => "좌석에서 몰입",
        ("flow", "scatter") => "가볍게 돌아다니며",
        ("extras", "talk") => "연주자와 대화",
        ("extras", "tea") => "다과 시간",
        ("extras", "instrument") => "체험 부스",
        ("extras", "campfire") => "캠프파이어",
        _ => return None,
    };
    Some(label)
}

/// `(prompt, display value)` rows for the result summary. Missing or
/// unrecognized values render as a dash.
pub fn summary_lines(selection: &Selection) -> Vec<(&'static str, String)> {
    let scalar = |key, value: &str| value_label(key, value).unwrap_or(MISSING).to_string();
    let instruments = if selection.instruments.is_empty() {
        MISSING.to_string()
    } else {
        selection
            .instruments
            .iter()
            .map(|name| name.as_str())
            .collect::<Vec<_>>()
            .join(" · ")
    };

    vec![
        ("어디에서 음악을 만나고 싶나요?", scalar("place", &selection.place)),
        ("어떤 결의 음악을 기대하나요?", scalar("mood", &selection.mood)),
        ("몸과 시선은 어떻게 흐르면 좋을까요?", scalar("flow", &selection.flow)),
        ("공연의 여운은 어떻게 이어질까요?", scalar("extras", &selection.extras)),
        ("특히 좋아하는 악기", instruments),
    ]
}
