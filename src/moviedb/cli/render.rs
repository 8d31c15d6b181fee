//! # Rendering
//!
//! Every function here returns the text to print instead of printing it, so
//! the one-shot handlers and the menu share the exact same output and tests can
//! compare strings. Width math stays Unicode-aware: titles are measured with
//! `unicode-width` and truncated with an ellipsis.

use colored::Colorize;
use moviedb::api::{CmdMessage, MessageLevel, MovieRow, Stats};
use std::path::Path;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Titles longer than this are cut in list output.
pub const TITLE_WIDTH: usize = 60;

pub(super) fn render_messages(messages: &[CmdMessage]) -> String {
    let mut out = String::new();
    for message in messages {
        let line = match message.level {
            MessageLevel::Info => message.content.dimmed(),
            MessageLevel::Success => message.content.green(),
            MessageLevel::Warning => message.content.yellow(),
            MessageLevel::Error => message.content.red(),
        };
        out.push_str(&format!("{}\n", line));
    }
    out
}

pub(super) fn print_messages(messages: &[CmdMessage]) {
    print!("{}", render_messages(messages));
}

/// `Title (year): rating`, one movie per line.
pub(super) fn render_movie_list(movies: &[MovieRow]) -> String {
    let mut out = String::new();
    for movie in movies {
        out.push_str(&format!(
            "{} ({}): {}\n",
            truncate_to_width(&movie.title, TITLE_WIDTH).bold(),
            movie.year_text(),
            movie.rating_text()
        ));
    }
    out
}

/// `Title : rating`, used for random picks, search hits and the sorted list.
pub(super) fn render_rated_list(movies: &[MovieRow]) -> String {
    let widest = movies
        .iter()
        .map(|m| truncate_to_width(&m.title, TITLE_WIDTH).width())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for movie in movies {
        let title = truncate_to_width(&movie.title, TITLE_WIDTH);
        let padding = widest.saturating_sub(title.width());
        out.push_str(&format!(
            "{}{} : {}\n",
            title,
            " ".repeat(padding),
            movie.rating_text().yellow()
        ));
    }
    out
}

pub(super) fn render_stats(stats: &Stats) -> String {
    let mut out = String::new();
    out.push_str(&format!("The average rating is: {}\n", round2(stats.average)));
    out.push_str(&format!("The median rating is: {}\n", round2(stats.median)));
    out.push_str(&format!(
        "Best movie(s): {}\n",
        joined_ratings(&stats.best).green()
    ));
    out.push_str(&format!(
        "Worst movie(s): {}\n",
        joined_ratings(&stats.worst).red()
    ));
    out
}

pub(super) fn render_output_path(path: &Path) -> String {
    format!("{}\n", path.display().to_string().dimmed())
}

fn joined_ratings(movies: &[MovieRow]) -> String {
    movies
        .iter()
        .map(|m| format!("{} : {}", m.title, m.rating_text()))
        .collect::<Vec<_>>()
        .join("   ")
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use moviedb::model::Record;
    use serde_json::json;

    fn row(title: &str, year: i64, rating: f64) -> MovieRow {
        let mut record = Record::new();
        record.set("rating", rating);
        record.set("year", year);
        MovieRow::new(title, record)
    }

    #[test]
    fn movie_list_shows_year_and_rating() {
        colored::control::set_override(false);
        let out = render_movie_list(&[row("Titanic", 1997, 7.8), row("Up", 2009, 8.3)]);
        assert_eq!(out, "Titanic (1997): 7.8\nUp (2009): 8.3\n");
    }

    #[test]
    fn text_ratings_render_verbatim() {
        colored::control::set_override(false);
        let mut record = Record::new();
        record.set("rating", json!("7.8"));
        record.set("year", json!("1997"));
        let out = render_movie_list(&[MovieRow::new("Titanic", record)]);
        assert_eq!(out, "Titanic (1997): 7.8\n");
    }

    #[test]
    fn rated_list_aligns_titles() {
        colored::control::set_override(false);
        let out = render_rated_list(&[row("Alien", 1979, 8.5), row("Up", 2009, 8.3)]);
        assert_eq!(out, "Alien : 8.5\nUp    : 8.3\n");
    }

    #[test]
    fn stats_are_rounded() {
        colored::control::set_override(false);
        let stats = Stats {
            rated: 3,
            average: 8.2,
            median: 8.3,
            best: vec![row("Alien", 1979, 8.5)],
            worst: vec![row("Titanic", 1997, 7.8)],
        };
        let out = render_stats(&stats);
        assert!(out.contains("The average rating is: 8.2\n"));
        assert!(out.contains("The median rating is: 8.3\n"));
        assert!(out.contains("Best movie(s): Alien : 8.5\n"));
        assert!(out.contains("Worst movie(s): Titanic : 7.8\n"));
        assert_eq!(round2(8.199999), 8.2);
    }

    #[test]
    fn long_titles_are_truncated() {
        let long = "x".repeat(TITLE_WIDTH + 10);
        let cut = truncate_to_width(&long, TITLE_WIDTH);
        assert_eq!(cut.width(), TITLE_WIDTH);
        assert!(cut.ends_with('…'));
        assert_eq!(truncate_to_width("Up", TITLE_WIDTH), "Up");
    }

    #[test]
    fn wide_characters_count_double() {
        let cut = truncate_to_width("千と千尋の神隠し", 6);
        assert_eq!(cut, "千と…");
    }

    #[test]
    fn messages_keep_their_text() {
        colored::control::set_override(false);
        let out = render_messages(&[
            CmdMessage::success("Movie \"Up\" added"),
            CmdMessage::warning("Movie not in list."),
        ]);
        assert_eq!(out, "Movie \"Up\" added\nMovie not in list.\n");
    }
}
