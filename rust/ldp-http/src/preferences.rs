use std::collections::BTreeMap;

/// The media types a client is willing to receive, each with a weight
/// between 0 and 1.
///
/// An empty set of preferences accepts everything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RepresentationPreferences {
    media_types: BTreeMap<String, f32>,
}

impl RepresentationPreferences {
    /// Accept `media_range` with `weight`. Ranges may use `type/*` and
    /// `*/*` wildcards. Weights are clamped to `0..=1`.
    pub fn with_type(mut self, media_range: impl Into<String>, weight: f32) -> Self {
        self.media_types
            .insert(media_range.into().to_ascii_lowercase(), weight.clamp(0.0, 1.0));
        self
    }

    /// Parse the value of an `Accept` header.
    ///
    /// Malformed entries are skipped, as are parameters other than `q`.
    pub fn from_accept(header: &str) -> Self {
        header
            .split(',')
            .filter_map(|entry| {
                let mut parts = entry.split(';').map(str::trim);
                let range = parts.next().filter(|range| range.contains('/'))?;
                let weight = parts
                    .filter_map(|parameter| parameter.strip_prefix("q="))
                    .find_map(|value| value.parse::<f32>().ok())
                    .unwrap_or(1.0);
                Some((range, weight))
            })
            .fold(Self::default(), |preferences, (range, weight)| {
                preferences.with_type(range, weight)
            })
    }

    /// Whether no preference was stated.
    pub fn is_empty(&self) -> bool {
        self.media_types.is_empty()
    }

    /// How much the client wants `media_type`. An exact match wins over a
    /// `type/*` range, which wins over `*/*`.
    pub fn weight_for(&self, media_type: &str) -> f32 {
        if self.is_empty() {
            return 1.0;
        }

        let media_type = media_type.to_ascii_lowercase();
        let main_type = media_type.split('/').next().unwrap_or_default();

        self.media_types
            .get(&media_type)
            .or_else(|| self.media_types.get(&format!("{main_type}/*")))
            .or_else(|| self.media_types.get("*/*"))
            .copied()
            .unwrap_or(0.0)
    }

    /// Whether `media_type` is acceptable at all.
    pub fn accepts(&self, media_type: &str) -> bool {
        self.weight_for(media_type) > 0.0
    }

    /// The acceptable candidate with the highest weight. Ties go to the
    /// earlier candidate.
    pub fn best_match<'a>(&self, candidates: &[&'a str]) -> Option<&'a str> {
        candidates
            .iter()
            .map(|candidate| (*candidate, self.weight_for(candidate)))
            .filter(|(_, weight)| *weight > 0.0)
            .fold(None, |best: Option<(&'a str, f32)>, (candidate, weight)| match best {
                Some((_, best_weight)) if best_weight >= weight => best,
                _ => Some((candidate, weight)),
            })
            .map(|(candidate, _)| candidate)
    }
}
