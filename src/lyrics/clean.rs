//! Line filter that strips section labels and page metadata from scraped lyrics.

/// Lines mentioning "Lyrics" shorter than this are treated as page bylines.
const BYLINE_MAX_CHARS: usize = 30;

pub fn clean_lyrics(raw: &str) -> String {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter(|line| !is_section_label(line))
        .filter(|line| !is_metadata(line))
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}

/// `[Verse 1]`, `[Chorus: Ed Sheeran]` and the like.
fn is_section_label(line: &str) -> bool {
    line.starts_with('[') && line.ends_with(']')
}

fn is_metadata(line: &str) -> bool {
    line.contains("ContributorsTranslations")
        || (line.contains("Lyrics") && line.chars().count() < BYLINE_MAX_CHARS)
}
