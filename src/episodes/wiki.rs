//! Season tables from the wiki's episode list, either fetched through the
//! MediaWiki API or read from a saved copy of the page's wikitext.

use super::{RawEpisodeRow, SeasonTable};
use crate::error::{AppError, Result};
use crate::text::non_empty;
use chrono::NaiveDate;
use regex::Regex;
use serde::Deserialize;
use std::path::PathBuf;

const USER_AGENT: &str = concat!("friends-script/", env!("CARGO_PKG_VERSION"));

/// Where the episode list comes from.
#[derive(Debug, Clone)]
pub enum SeasonSource {
    /// Live page, `{{:Page}}` transclusions expanded one level.
    Wiki { api_url: String, page: String },
    /// Saved wikitext of the list page.
    File(PathBuf),
}

impl SeasonSource {
    pub async fn load_tables(&self) -> Result<Vec<SeasonTable>> {
        let wikitext = match self {
            SeasonSource::Wiki { api_url, page } => {
                let client = reqwest::Client::builder()
                    .user_agent(USER_AGENT)
                    .connect_timeout(std::time::Duration::from_secs(30))
                    .timeout(std::time::Duration::from_secs(120))
                    .build()
                    .map_err(|e| AppError::ExternalFetch(format!("Failed to create HTTP client: {}", e)))?;
                let text = fetch_wikitext(&client, api_url, page).await?;
                expand_transclusions(&client, api_url, &text).await?
            }
            SeasonSource::File(path) => {
                log::info!("Reading episode list from {:?}", path);
                let text = tokio::fs::read_to_string(path)
                    .await
                    .map_err(|e| AppError::ExternalFetch(format!("Failed to read {}: {}", path.display(), e)))?;
                if !transcluded_pages(&text).is_empty() {
                    log::warn!("Saved episode list still contains transclusions; those seasons will be missing");
                }
                text
            }
        };
        parse_season_tables(&wikitext)
    }
}

// ============================================================================
// API response types
// ============================================================================

#[derive(Debug, Deserialize)]
struct WikiParseResponse {
    parse: Option<WikiParsedPage>,
    error: Option<WikiApiError>,
}

#[derive(Debug, Deserialize)]
struct WikiParsedPage {
    title: String,
    wikitext: Option<WikiTextContent>,
}

#[derive(Debug, Deserialize)]
struct WikiTextContent {
    #[serde(rename = "*")]
    content: String,
}

#[derive(Debug, Deserialize)]
struct WikiApiError {
    code: String,
    info: String,
}

async fn fetch_wikitext(client: &reqwest::Client, api_url: &str, page: &str) -> Result<String> {
    let resp = client
        .get(api_url)
        .query(&[
            ("action", "parse"),
            ("page", page),
            ("prop", "wikitext"),
            ("redirects", "1"),
            ("format", "json"),
        ])
        .send()
        .await
        .map_err(|e| AppError::ExternalFetch(format!("Wiki parse request for {} failed: {}", page, e)))?;

    if !resp.status().is_success() {
        return Err(AppError::ExternalFetch(format!(
            "Wiki parse request for {} failed with status: {}",
            page,
            resp.status()
        )));
    }

    let parsed: WikiParseResponse = resp
        .json()
        .await
        .map_err(|e| AppError::ExternalFetch(format!("Failed to parse wiki response for {}: {}", page, e)))?;

    if let Some(err) = parsed.error {
        return Err(AppError::ExternalFetch(format!("Wiki error for {}: {} ({})", page, err.info, err.code)));
    }
    let page_data = parsed
        .parse
        .ok_or_else(|| AppError::ExternalFetch(format!("Wiki returned empty parse result for {}", page)))?;
    let content = page_data
        .wikitext
        .map(|w| w.content)
        .ok_or_else(|| AppError::ExternalFetch(format!("Wiki page {} has no wikitext", page_data.title)))?;

    log::info!("Fetched wiki page: {} ({} bytes)", page_data.title, content.len());
    Ok(content)
}

/// Replace each `{{:Page}}` with the included part of that page.
async fn expand_transclusions(client: &reqwest::Client, api_url: &str, wikitext: &str) -> Result<String> {
    let mut expanded = wikitext.to_string();
    for (marker, page) in transcluded_pages(wikitext) {
        let body = fetch_wikitext(client, api_url, &page).await?;
        expanded = expanded.replacen(&marker, &included_part(&body), 1);
    }
    Ok(expanded)
}

/// `(marker, page title)` for every `{{:Page}}` in document order.
fn transcluded_pages(wikitext: &str) -> Vec<(String, String)> {
    let mut pages = Vec::new();
    let mut rest = wikitext;
    while let Some(start) = rest.find("{{:") {
        let Some(len) = rest[start..].find("}}") else { break };
        let marker = &rest[start..start + len + 2];
        let page = marker[3..marker.len() - 2].split('|').next().unwrap_or("").trim();
        if !page.is_empty() {
            pages.push((marker.to_string(), page.to_string()));
        }
        rest = &rest[start + len + 2..];
    }
    pages
}

/// The `<onlyinclude>` sections of a page, or the whole page when it has none.
fn included_part(page: &str) -> String {
    const OPEN: &str = "<onlyinclude>";
    const CLOSE: &str = "</onlyinclude>";
    let mut parts = Vec::new();
    let mut rest = page;
    while let Some(start) = rest.find(OPEN) {
        let body = &rest[start + OPEN.len()..];
        let end = body.find(CLOSE).unwrap_or(body.len());
        parts.push(&body[..end]);
        rest = &body[(end + CLOSE.len()).min(body.len())..];
    }
    if parts.is_empty() {
        page.to_string()
    } else {
        parts.concat()
    }
}

// ============================================================================
// Wikitext parsing
// ============================================================================

const SERIES_OVERVIEW: &str = "{{Series overview";
const EPISODE_TABLE: &str = "{{Episode table";
const EPISODE_LIST: &str = "{{Episode list";

/// Split the list page into tables in listing order. Position 0 is the
/// series overview (it has no episode rows); each `{{Episode table` that
/// follows is one season or specials table.
pub fn parse_season_tables(wikitext: &str) -> Result<Vec<SeasonTable>> {
    let cleaner = WikitextCleaner::new()?;

    let mut starts: Vec<(usize, bool)> = wikitext
        .match_indices(SERIES_OVERVIEW)
        .map(|(i, _)| (i, true))
        .chain(wikitext.match_indices(EPISODE_TABLE).map(|(i, _)| (i, false)))
        .collect();
    starts.sort_unstable();

    let mut tables = Vec::new();
    for (start, is_overview) in starts {
        if is_overview {
            tables.push(Vec::new());
            continue;
        }
        let end = template_end(wikitext, start).unwrap_or(wikitext.len());
        tables.push(parse_episode_table(&wikitext[start..end], &cleaner));
    }

    if tables.is_empty() {
        return Err(AppError::ExternalFetch("Episode list contains no episode tables".to_string()));
    }
    if !wikitext.contains(SERIES_OVERVIEW) {
        log::warn!("Episode list has no series overview; inserting an empty table 0");
        tables.insert(0, Vec::new());
    }

    log::info!(
        "Parsed {} tables with {} episode rows from the episode list",
        tables.len(),
        tables.iter().map(Vec::len).sum::<usize>()
    );
    Ok(tables)
}

/// Which table columns feed which row fields.
#[derive(Debug, Default)]
struct TableLayout {
    has_overall: bool,
    rating_18_49: Option<String>,
    rating_share: Option<String>,
}

impl TableLayout {
    fn from_header(fields: &[String]) -> Self {
        let mut layout = TableLayout::default();
        for (key, label) in fields.iter().filter_map(|f| key_value(f)) {
            let key = key.to_lowercase();
            if key == "overall" {
                layout.has_overall = true;
            } else if key.starts_with("aux") && key[3..].chars().all(|c| c.is_ascii_digit()) && key.len() > 3 {
                let column = format!("Aux{}", &key[3..]);
                if label.contains("Rating/share") {
                    layout.rating_share = Some(column);
                } else if label.contains("Rating") {
                    layout.rating_18_49 = Some(column);
                }
            }
        }
        layout
    }
}

fn parse_episode_table(table: &str, cleaner: &WikitextCleaner) -> SeasonTable {
    let layout = TableLayout::from_header(&split_template_fields(template_body(table)));

    let mut rows = Vec::new();
    for (start, _) in table.match_indices(EPISODE_LIST) {
        let end = template_end(table, start).unwrap_or(table.len());
        let body = template_body(&table[start..end]);
        rows.push(parse_episode_row(&split_template_fields(body), &layout, cleaner));
    }
    rows
}

fn parse_episode_row(fields: &[String], layout: &TableLayout, cleaner: &WikitextCleaner) -> RawEpisodeRow {
    let mut row = RawEpisodeRow::default();
    for (key, value) in fields.iter().filter_map(|f| key_value(f)) {
        let value = non_empty(&cleaner.clean(value));
        match key {
            "EpisodeNumber" if layout.has_overall => row.overall = value,
            "EpisodeNumber" => row.special_no = value,
            "EpisodeNumber2" => row.in_season = value,
            "Title" => row.title = value,
            "DirectedBy" => row.directed_by = value,
            "WrittenBy" => row.written_by = value,
            "OriginalAirDate" => row.air_date = value,
            "ProdCode" => row.prod_code = value,
            "Viewers" if layout.has_overall => row.us_viewers = value,
            "Viewers" => row.us_viewers_2 = value,
            k if layout.rating_share.as_deref() == Some(k) => row.rating_share = value,
            k if layout.rating_18_49.as_deref() == Some(k) => row.rating_18_49 = value,
            _ => {}
        }
    }
    row
}

/// Template text without its outer braces.
fn template_body(template: &str) -> &str {
    let inner = template.strip_prefix("{{").unwrap_or(template);
    inner.strip_suffix("}}").unwrap_or(inner)
}

fn key_value(field: &str) -> Option<(&str, &str)> {
    field.split_once('=').map(|(k, v)| (k.trim(), v.trim()))
}

/// End (exclusive) of the template opening at `start`.
fn template_end(text: &str, start: usize) -> Option<usize> {
    let mut depth = 0i32;
    for (i, c) in text[start..].char_indices() {
        match c {
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(start + i + 1);
                }
            }
            _ => {}
        }
    }
    None
}

/// Split template content on pipes outside nested links and templates.
fn split_template_fields(content: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut bracket_depth = 0i32;
    let mut brace_depth = 0i32;

    for c in content.chars() {
        match c {
            '[' => bracket_depth += 1,
            ']' => bracket_depth -= 1,
            '{' => brace_depth += 1,
            '}' => brace_depth -= 1,
            '|' if bracket_depth == 0 && brace_depth == 0 => {
                fields.push(std::mem::take(&mut current));
                continue;
            }
            _ => {}
        }
        current.push(c);
    }
    if !current.trim().is_empty() {
        fields.push(current);
    }
    fields
}

/// Reduces a wikitext cell to the text a reader of the rendered page sees.
pub struct WikitextCleaner {
    refs: Regex,
    comments: Regex,
    start_date: Regex,
    template: Regex,
    link: Regex,
    line_break: Regex,
    tag: Regex,
}

/// Footnote templates render nothing in the cell itself.
const NOTE_TEMPLATES: [&str; 4] = ["efn", "refn", "sfn", "r"];

impl WikitextCleaner {
    pub fn new() -> Result<Self> {
        Ok(Self {
            refs: Regex::new(r"(?s)<ref[^>]*/>|<ref[^>]*>.*?</ref>")?,
            comments: Regex::new(r"(?s)<!--.*?-->")?,
            start_date: Regex::new(r"\{\{\s*[Ss]tart date\s*\|\s*(\d{4})\s*\|\s*(\d{1,2})\s*\|\s*(\d{1,2})[^{}]*\}\}")?,
            template: Regex::new(r"\{\{([^{}]*)\}\}")?,
            link: Regex::new(r"\[\[(?:[^|\]]*\|)?([^\]]*)\]\]")?,
            line_break: Regex::new(r"(?i)<br\s*/?>")?,
            tag: Regex::new(r"<[^>]+>")?,
        })
    }

    pub fn clean(&self, text: &str) -> String {
        let mut out = self.refs.replace_all(text, "").into_owned();
        out = self.comments.replace_all(&out, "").into_owned();
        out = self
            .start_date
            .replace_all(&out, |caps: &regex::Captures| render_date(&caps[1], &caps[2], &caps[3]))
            .into_owned();

        // Innermost templates first until none remain
        loop {
            let next = self
                .template
                .replace_all(&out, |caps: &regex::Captures| inline_template(&caps[1]))
                .into_owned();
            if next == out {
                break;
            }
            out = next;
        }

        out = self.link.replace_all(&out, "$1").into_owned();
        out = out.replace("'''", "").replace("''", "");
        out = self.line_break.replace_all(&out, "").into_owned();
        out = out.replace("&nbsp;", "\u{a0}");
        out = self.tag.replace_all(&out, "").into_owned();
        out.trim().to_string()
    }
}

fn render_date(year: &str, month: &str, day: &str) -> String {
    let parsed = match (year.parse(), month.parse(), day.parse()) {
        (Ok(y), Ok(m), Ok(d)) => NaiveDate::from_ymd_opt(y, m, d),
        _ => None,
    };
    match parsed {
        Some(date) => date.format("%B\u{a0}%-d,\u{a0}%Y").to_string(),
        None => format!("{}-{}-{}", year, month, day),
    }
}

/// A template reduced to its first positional argument, or nothing.
fn inline_template(body: &str) -> String {
    let mut parts = body.split('|');
    let name = parts.next().unwrap_or("").trim().to_lowercase();
    if NOTE_TEMPLATES.contains(&name.as_str()) {
        return String::new();
    }
    parts
        .find(|p| !p.contains('='))
        .map(|p| p.trim().to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    const LIST_PAGE: &str = r#"
'''''Friends''''' is an American television sitcom.

==Series overview==
{{Series overview
| color1 = #9ACD32
| link1  = Friends (season 1)
| episodes1 = 24
}}

==Episodes==
===Season 1 (1994–95)===
{{Episode table |background=#9ACD32 |overall=5 |season=5 |title=23 |director=14 |writer=23 |airdate=14 |prodcode=6 |viewers=10 |aux4=Rating/share<br />(households)
 |episodes=
{{Episode list/sublist|Friends (season 1)
 |EpisodeNumber   = 1
 |EpisodeNumber2  = 1
 |Title           = [[The Pilot (Friends)|The One Where Monica Gets a Roommate]]
 |DirectedBy      = [[James Burrows]]
 |WrittenBy       = [[David Crane (producer)|David Crane]] & [[Marta Kauffman]]
 |OriginalAirDate = {{Start date|1994|9|22}}
 |ProdCode        = 456650
 |Viewers         = 21.5<ref name="ratings1">{{cite news|title=Nielsen}}</ref>
 |Aux4            = 14.7/23
 |ShortSummary    = Rachel leaves her fiancé at the altar.
 |LineColor       = 9ACD32
}}
{{Episode list/sublist|Friends (season 1)
 |EpisodeNumber   = 16
 |EpisodeNumber2  = 16
 |Title           = The One with Two Parts{{efn|Aired as one hour.}}
 |DirectedBy      = Michael Lembeck
 |WrittenBy       = ''Story by'' : Marta Kauffman<br />''Teleplay by'' : David Crane
 |OriginalAirDate = {{Start date|1995|2|23}}
 |ProdCode        = 456665
 |Viewers         = {{abbr|26.1|approximate}}
}}
}}

===Specials===
{{Episode table |background=#000000 |title=40 |airdate=30 |viewers=20
 |episodes=
{{Episode list
 |EpisodeNumber   = 1
 |Title           = Friends: The Reunion
 |OriginalAirDate = {{Start date|2021|5|27}}
 |Viewers         = N/A
}}
}}
"#;

    #[test]
    fn test_tables_in_listing_order() {
        let tables = parse_season_tables(LIST_PAGE).unwrap();
        assert_eq!(tables.len(), 3);
        assert!(tables[0].is_empty());
        assert_eq!(tables[1].len(), 2);
        assert_eq!(tables[2].len(), 1);
    }

    #[test]
    fn test_season_row_fields() {
        let tables = parse_season_tables(LIST_PAGE).unwrap();
        let pilot = &tables[1][0];
        assert_eq!(pilot.overall.as_deref(), Some("1"));
        assert_eq!(pilot.in_season.as_deref(), Some("1"));
        assert_eq!(pilot.title.as_deref(), Some("The One Where Monica Gets a Roommate"));
        assert_eq!(pilot.directed_by.as_deref(), Some("James Burrows"));
        assert_eq!(pilot.written_by.as_deref(), Some("David Crane & Marta Kauffman"));
        assert_eq!(pilot.air_date.as_deref(), Some("September\u{a0}22,\u{a0}1994"));
        assert_eq!(pilot.prod_code.as_deref(), Some("456650"));
        assert_eq!(pilot.us_viewers.as_deref(), Some("21.5"));
        assert_eq!(pilot.rating_share.as_deref(), Some("14.7/23"));
        assert_eq!(pilot.rating_18_49, None);
        assert_eq!(pilot.special_no, None);
    }

    #[test]
    fn test_markup_and_notes_removed() {
        let tables = parse_season_tables(LIST_PAGE).unwrap();
        let row = &tables[1][1];
        assert_eq!(row.title.as_deref(), Some("The One with Two Parts"));
        assert_eq!(row.written_by.as_deref(), Some("Story by : Marta KauffmanTeleplay by : David Crane"));
        assert_eq!(row.us_viewers.as_deref(), Some("26.1"));
    }

    #[test]
    fn test_specials_table_without_overall_column() {
        let tables = parse_season_tables(LIST_PAGE).unwrap();
        let reunion = &tables[2][0];
        assert_eq!(reunion.overall, None);
        assert_eq!(reunion.special_no.as_deref(), Some("1"));
        assert_eq!(reunion.us_viewers, None);
        assert_eq!(reunion.us_viewers_2.as_deref(), Some("N/A"));
        assert_eq!(reunion.title.as_deref(), Some("Friends: The Reunion"));
    }

    #[test]
    fn test_missing_overview_gets_placeholder() {
        let page = "{{Episode table |overall=5 |episodes=\n{{Episode list |EpisodeNumber=1 |Title=A}}\n}}";
        let tables = parse_season_tables(page).unwrap();
        assert_eq!(tables.len(), 2);
        assert!(tables[0].is_empty());
        assert_eq!(tables[1][0].title.as_deref(), Some("A"));
    }

    #[test]
    fn test_page_without_tables_is_an_error() {
        assert!(matches!(
            parse_season_tables("Just prose."),
            Err(AppError::ExternalFetch(_))
        ));
    }

    #[test]
    fn test_transclusions_and_onlyinclude() {
        let page = "intro\n{{:Friends (season 1)}}\n{{:Friends (season 2)|x}}\n{{Other}}";
        let pages = transcluded_pages(page);
        assert_eq!(pages.len(), 2);
        assert_eq!(pages[0].0, "{{:Friends (season 1)}}");
        assert_eq!(pages[0].1, "Friends (season 1)");
        assert_eq!(pages[1].1, "Friends (season 2)");

        let season = "Lead text.<onlyinclude>{{Episode table}}</onlyinclude>Trailing text.";
        assert_eq!(included_part(season), "{{Episode table}}");
        assert_eq!(included_part("no markers"), "no markers");
    }

    #[test]
    fn test_cleaner_invalid_date_left_readable() {
        let cleaner = WikitextCleaner::new().unwrap();
        assert_eq!(cleaner.clean("{{Start date|1995|2|30}}"), "1995-2-30");
        assert_eq!(cleaner.clean("a&nbsp;b <!-- hidden -->"), "a\u{a0}b");
    }
}
