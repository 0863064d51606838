use derive_more::{AsRef, Deref, Display, From, Into};
use serde::{Deserialize, Serialize};

/// Upper bound on the multi-select instrument step.
pub const MAX_INSTRUMENTS: usize = 3;

/// The neutral mood substituted when the handoff string carries none.
pub const DEFAULT_MOOD: &str = "classical";

const INSTRUMENT_DELIMITER: char = ',';

#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display, Deref, From, Into, AsRef,
)]
#[serde(transparent)]
pub struct InstrumentName(String);

impl InstrumentName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }
}

/// The flat key-value string handed from the wizard to the result view.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display, Deref, From, Into, AsRef)]
pub struct QueryString(String);

impl QueryString {
    pub fn new(query: impl Into<String>) -> Self {
        Self(query.into())
    }
}

/// A completed (or decoded) selection set. Scalar steps hold their chosen
/// option value; absent scalars are the empty value, absent mood falls back
/// to [`DEFAULT_MOOD`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub place: String,
    pub mood: String,
    pub flow: String,
    pub extras: String,
    pub instruments: Vec<InstrumentName>,
}

impl Default for Selection {
    fn default() -> Self {
        Self {
            place: String::new(),
            mood: DEFAULT_MOOD.to_string(),
            flow: String::new(),
            extras: String::new(),
            instruments: Vec::new(),
        }
    }
}

/// Serializes a selection set into the flat key-value handoff string. The
/// instrument sequence joins into one delimiter-separated value; everything
/// is percent-escaped, the delimiter included.
pub fn encode(selection: &Selection) -> QueryString {
    let instruments = selection
        .instruments
        .iter()
        .map(|name| name.as_str())
        .collect::<Vec<_>>()
        .join(&INSTRUMENT_DELIMITER.to_string());

    let mut query = form_urlencoded::Serializer::new(String::new());
    query
        .append_pair("place", &selection.place)
        .append_pair("mood", &selection.mood)
        .append_pair("flow", &selection.flow)
        .append_pair("extras", &selection.extras)
        .append_pair("instruments", &instruments);

    QueryString::new(query.finish())
}

/// Inverse of [`encode`]. Missing or empty keys take their defaults, unknown
/// keys are ignored, and the instrument list is truncated to the first
/// [`MAX_INSTRUMENTS`] entries in order.
pub fn decode(raw: &str) -> Selection {
    let mut selection = Selection::default();
    let mut mood_present = false;

    for (key, value) in form_urlencoded::parse(raw.as_bytes()) {
        match key.as_ref() {
            "place" => selection.place = value.into_owned(),
            "mood" if !value.is_empty() => {
                selection.mood = value.into_owned();
                mood_present = true;
            }
            "flow" => selection.flow = value.into_owned(),
            "extras" => selection.extras = value.into_owned(),
            "instruments" => {
                selection.instruments = value
                    .split(INSTRUMENT_DELIMITER)
                    .filter(|name| !name.is_empty())
                    .take(MAX_INSTRUMENTS)
                    .map(InstrumentName::new)
                    .collect();
            }
            _ => {}
        }
    }

    if !mood_present {
        log::debug!("handoff carries no mood, defaulting to '{DEFAULT_MOOD}'");
    }
    selection
}

/// The target the wizard navigates to on completion.
pub fn handoff_path(selection: &Selection) -> String {
    format!("result.html?{}", encode(selection))
}

/// Accepts either a bare query string or a full handoff path.
pub fn query_part(raw: &str) -> &str {
    raw.split_once('?').map_or(raw, |(_, query)| query)
}
