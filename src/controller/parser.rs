use crate::controller::time::{DisplayZone, diff_in_hours, game_to_local_time, to_iso8601};
use crate::error::AppError;
use crate::model::{Category, Game, Score, Side, Team};
use chrono::{DateTime, FixedOffset};
use scraper::{ElementRef, Html, Selector};

/// What to do with a row given its distance from now.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowWindow {
    Skip,
    Keep,
    /// Rows are chronological, so nothing after this one can be in the window.
    Stop,
}

#[must_use]
pub fn row_window(category: Category, diff_in_hours: i64) -> RowWindow {
    match category {
        Category::Future if diff_in_hours < 0 => RowWindow::Skip,
        Category::Future if diff_in_hours > 24 => RowWindow::Stop,
        Category::Past if diff_in_hours < -24 => RowWindow::Skip,
        Category::Past if diff_in_hours > 0 => RowWindow::Stop,
        _ => RowWindow::Keep,
    }
}

struct Selectors {
    table: Selector,
    tbody: Selector,
    row: Selector,
    header: Selector,
    cell: Selector,
    link: Selector,
    home_team: Selector,
    away_team: Selector,
    home_pts: Selector,
    away_pts: Selector,
}

impl Selectors {
    fn new() -> Result<Self, AppError> {
        Ok(Self {
            table: selector("table#schedule")?,
            tbody: selector("tbody")?,
            row: selector("tr")?,
            header: selector("th")?,
            cell: selector("td")?,
            link: selector("a")?,
            home_team: selector(r#"td[data-stat="home_team_name"]"#)?,
            away_team: selector(r#"td[data-stat="visitor_team_name"]"#)?,
            home_pts: selector(r#"td[data-stat="home_pts"]"#)?,
            away_pts: selector(r#"td[data-stat="visitor_pts"]"#)?,
        })
    }
}

fn selector(css: &str) -> Result<Selector, AppError> {
    Selector::parse(css).map_err(|e| AppError::Parse(format!("selector '{css}': {e}")))
}

fn text_of(element: ElementRef<'_>) -> String {
    element.text().collect::<String>()
}

/// Extracts the games of one category from a monthly schedule page.
///
/// # Errors
///
/// Returns `UpstreamBlocked` if the page has no schedule table (the site
/// serves a block page when rate limiting), and `Parse` if a data row is
/// malformed.
pub fn parse_schedule(
    html: &str,
    category: Category,
    now: &DateTime<FixedOffset>,
    zone: &DisplayZone,
) -> Result<Vec<Game>, AppError> {
    let sel = Selectors::new()?;
    let document = Html::parse_document(html);

    let tbody = document
        .select(&sel.table)
        .next()
        .and_then(|table| table.select(&sel.tbody).next())
        .ok_or_else(|| AppError::UpstreamBlocked("schedule table missing from page".into()))?;

    let mut games = Vec::new();
    for row in tbody.select(&sel.row) {
        if row.value().attr("class").is_some() {
            continue;
        }

        let header = row
            .select(&sel.header)
            .next()
            .ok_or_else(|| AppError::Parse("schedule row without a date cell".into()))?;
        let date = header
            .select(&sel.link)
            .next()
            .map(text_of)
            .ok_or_else(|| AppError::Parse("schedule row without a date link".into()))?;
        let start_time = row
            .select(&sel.cell)
            .next()
            .map(text_of)
            .ok_or_else(|| AppError::Parse(format!("no start time cell for {date}")))?;

        let Some(game_time) = game_to_local_time(&date, &start_time, zone)? else {
            continue;
        };

        match row_window(category, diff_in_hours(now, &game_time)) {
            RowWindow::Skip => continue,
            RowWindow::Stop => break,
            RowWindow::Keep => {}
        }

        let with_score = category == Category::Past;
        let home = read_team(row, &sel, Side::Home, with_score)?;
        let away = read_team(row, &sel, Side::Away, with_score)?;
        games.push(Game {
            id: header.value().attr("csk").map(str::to_owned),
            home,
            away,
            start_time: to_iso8601(&game_time),
        });
    }

    Ok(games)
}

fn read_team(
    row: ElementRef<'_>,
    sel: &Selectors,
    side: Side,
    with_score: bool,
) -> Result<Team, AppError> {
    let (team_sel, pts_sel) = match side {
        Side::Home => (&sel.home_team, &sel.home_pts),
        Side::Away => (&sel.away_team, &sel.away_pts),
    };

    let cell = row
        .select(team_sel)
        .next()
        .ok_or_else(|| AppError::Parse(format!("row without {side:?} team cell")))?;
    // csk looks like "BOS.202403011900"
    let credentials = cell
        .value()
        .attr("csk")
        .and_then(|csk| csk.split('.').next())
        .ok_or_else(|| AppError::Parse(format!("{side:?} team cell without csk")))?
        .to_string();
    let full_name = cell
        .select(&sel.link)
        .next()
        .map(text_of)
        .ok_or_else(|| AppError::Parse(format!("{side:?} team cell without a name link")))?;
    let name = full_name
        .split_whitespace()
        .last()
        .unwrap_or_default()
        .to_string();

    let score = if with_score {
        let points = row
            .select(pts_sel)
            .next()
            .map(text_of)
            .ok_or_else(|| AppError::Parse(format!("row without {side:?} points cell")))?;
        Some(Score::from_cell(&points)?)
    } else {
        None
    };

    Ok(Team {
        credentials,
        name,
        side,
        score,
    })
}
