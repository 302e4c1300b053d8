//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use chrono::{DateTime, Utc};
use colored::{ColoredString, Colorize};
use serde::Serialize;

use crate::core::models::{Burndown, BurndownPoint, IdealCurve};
use crate::core::services::ListGroup;

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Badge colors, cycled by group index
pub const BADGE_COLORS: [&str; 12] = [
    "red", "pink", "grape", "violet", "indigo", "blue", "cyan", "green", "lime", "yellow",
    "orange", "teal",
];

/// Badge color name for the group at `index`
#[must_use]
pub const fn badge_color(index: usize) -> &'static str {
    BADGE_COLORS[index % BADGE_COLORS.len()]
}

fn badge_rgb(color: &str) -> (u8, u8, u8) {
    match color {
        "red" => (250, 82, 82),
        "pink" => (230, 73, 128),
        "grape" => (190, 75, 219),
        "violet" => (121, 80, 242),
        "indigo" => (76, 110, 245),
        "blue" => (34, 139, 230),
        "cyan" => (21, 170, 191),
        "green" => (64, 192, 87),
        "lime" => (130, 201, 30),
        "yellow" => (250, 176, 5),
        "orange" => (253, 126, 20),
        _ => (18, 184, 134),
    }
}

fn badge(label: &str, color: &str) -> ColoredString {
    let (r, g, b) = badge_rgb(color);
    format!(" {label} ").white().bold().on_truecolor(r, g, b)
}

fn print_json<T: Serialize>(value: &T) {
    println!("{}", serde_json::to_string_pretty(value).unwrap_or_default());
}

/// Width of the bar chart in the human burndown view
const CHART_WIDTH: usize = 40;

/// Result of the burndown command
#[derive(Debug, Serialize)]
pub struct BurndownReport {
    /// Board name
    pub board: String,
    /// Shape of the expected series
    pub curve: IdealCurve,
    /// Sprint start
    pub sprint_start: DateTime<Utc>,
    /// Sprint end
    pub sprint_end: DateTime<Utc>,
    /// Whole weeks in the sprint
    pub weeks: i64,
    /// Cards in the sprint
    pub total_cards: usize,
    /// Cards pinned explicitly
    pub sprint_card_ids: usize,
    /// Idealized series
    pub expected: Vec<BurndownPoint>,
    /// Observed series
    pub actual: Vec<BurndownPoint>,
}

impl BurndownReport {
    /// Assemble the report from a computed burndown
    #[must_use]
    pub fn new(
        board: String,
        curve: IdealCurve,
        sprint_start: DateTime<Utc>,
        sprint_end: DateTime<Utc>,
        sprint_card_ids: usize,
        burndown: Burndown,
    ) -> Self {
        Self {
            board,
            curve,
            sprint_start,
            sprint_end,
            weeks: burndown.week_count,
            total_cards: burndown.total_count,
            sprint_card_ids,
            expected: burndown.expected,
            actual: burndown.actual,
        }
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => print_json(self),
        }
    }

    fn render_human(&self) {
        println!("{}", self.board.bold());
        println!(
            "Sprint: {} to {}",
            self.sprint_start.format("%Y-%m-%d"),
            self.sprint_end.format("%Y-%m-%d")
        );
        println!("Weeks: {}", self.weeks);
        println!("Total cards: {}", self.total_cards);
        println!("Sprint card ids: {}", self.sprint_card_ids);
        println!();

        if self.actual.is_empty() {
            println!("Sprint end is before its start; nothing to plot.");
            return;
        }

        println!("{:>4}  {:>8}  {:>6}", "Week", "Expected", "Actual");
        for (expected, actual) in self.expected.iter().zip(&self.actual) {
            println!(
                "{:>4}  {:>8.2}  {:>6}  {}",
                actual.week_index,
                expected.remaining_count,
                actual.remaining_count,
                self.bar(actual.remaining_count, expected.remaining_count)
            );
        }
    }

    /// Actual remaining as `#`, with `|` marking the expected value
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    fn bar(&self, actual: f64, expected: f64) -> String {
        if self.total_cards == 0 {
            return String::new();
        }
        let scale = CHART_WIDTH as f64 / self.total_cards as f64;
        let filled = (actual * scale).round().max(0.0) as usize;
        let marker = (expected * scale).round().max(0.0) as usize;

        let mut bar: String = "#".repeat(filled);
        if marker > bar.len() {
            bar.push_str(&" ".repeat(marker - bar.len()));
            bar.push('|');
        }
        bar
    }
}

/// A card link in the remaining-work view
#[derive(Debug, Serialize)]
pub struct CardLink {
    /// Card title
    pub name: String,
    /// Card URL
    pub url: String,
}

/// One list in the remaining-work view
#[derive(Debug, Serialize)]
pub struct GroupInfo {
    /// List name
    pub list: String,
    /// Number of sprint cards in the list
    pub count: usize,
    /// Badge color
    pub color: String,
    /// The cards
    pub cards: Vec<CardLink>,
}

/// Result of the remaining command
#[derive(Debug, Serialize)]
pub struct RemainingReport {
    /// Board name
    pub board: String,
    /// Groups in board order
    pub groups: Vec<GroupInfo>,
}

impl RemainingReport {
    /// Assemble the report from grouped cards
    #[must_use]
    pub fn new(board: String, groups: &[ListGroup<'_>]) -> Self {
        let groups = groups
            .iter()
            .enumerate()
            .map(|(idx, group)| GroupInfo {
                list: group.list.name.clone(),
                count: group.count(),
                color: badge_color(idx).to_string(),
                cards: group
                    .cards
                    .iter()
                    .map(|card| CardLink {
                        name: card.name.clone(),
                        url: card.url.clone(),
                    })
                    .collect(),
            })
            .collect();
        Self { board, groups }
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => print_json(self),
        }
    }

    fn render_human(&self) {
        if self.groups.is_empty() {
            println!("No sprint cards outside done columns.");
            return;
        }

        for group in &self.groups {
            println!("{} {}", badge(&group.list, &group.color), group.count);
            for card in &group.cards {
                println!("    {}  {}", card.name, card.url.dimmed());
            }
            println!();
        }
    }
}

/// Result of the status command
#[derive(Debug, Serialize)]
pub struct StatusReport {
    /// Board name, when a board could be read
    pub board: Option<String>,
    /// Sprint start
    pub sprint_start: Option<DateTime<Utc>>,
    /// Sprint end
    pub sprint_end: Option<DateTime<Utc>>,
    /// Whole weeks, once both dates are set
    pub weeks: Option<i64>,
    /// Cards in the sprint, when a board could be read
    pub total_cards: Option<usize>,
    /// Cards pinned explicitly
    pub sprint_card_ids: usize,
    /// Configured done columns
    pub done_columns: Vec<String>,
    /// Configured done columns present on the board
    pub done_columns_on_board: Vec<String>,
    /// Sprint labels
    pub sprint_labels: Vec<String>,
}

impl StatusReport {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => print_json(self),
        }
    }

    fn render_human(&self) {
        println!("Board: {}", self.board.as_deref().unwrap_or("(none)"));
        let fmt = |d: Option<DateTime<Utc>>| {
            d.map_or_else(|| "(not set)".to_string(), |d| d.format("%Y-%m-%d").to_string())
        };
        println!("Sprint: {} to {}", fmt(self.sprint_start), fmt(self.sprint_end));
        if let Some(weeks) = self.weeks {
            println!("Weeks: {weeks}");
        }
        if let Some(total) = self.total_cards {
            println!("Total cards: {total}");
        }
        println!("Sprint card ids: {}", self.sprint_card_ids);
        println!("Done columns: {}", self.done_columns.join(", "));
        if self.board.is_some() {
            println!("  on this board: {}", self.done_columns_on_board.join(", "));
        }
        println!("Sprint labels: {}", self.sprint_labels.join(", "));
    }
}

/// A named list of values (done columns, pinned cards, labels)
#[derive(Debug, Serialize)]
pub struct ListResult {
    /// What the values are
    pub title: String,
    /// The values
    pub items: Vec<String>,
}

impl ListResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => {
                if self.items.is_empty() {
                    println!("{}: none", self.title);
                } else {
                    println!("{}:", self.title);
                    for item in &self.items {
                        println!("  {item}");
                    }
                }
            },
            OutputMode::Json => print_json(self),
        }
    }
}

/// Generic operation result for simple commands
#[derive(Debug, Serialize)]
pub struct OperationResult {
    /// Whether the operation succeeded
    pub success: bool,
    /// Human-readable message
    pub message: String,
}

impl OperationResult {
    /// A successful operation
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => println!("{}", self.message),
            OutputMode::Json => print_json(self),
        }
    }
}
