// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display for sift CLI.
//!
//! Results come out the way the search page lays them out: a posts section
//! and a people section, each row with its link, and a footer saying whether
//! "load more" would find anything. Colors follow OneDark on dark terminals
//! and One Light on light ones.
//!
//! # Theme detection order
//!
//! 1. `SIFT_THEME` env var ("dark" or "light")
//! 2. `COLORFGBG` env var (terminal background hint)
//! 3. Default to dark theme
//!
//! `NO_COLOR` and non-TTY stdout turn colors off entirely.

use std::sync::OnceLock;

use sift::{
    EntityKind, KeyDrift, PostHit, SearchSession, SearchableEntity, UserHit, VerificationReport,
};

// Width between │ and │ (excluding border chars)
pub const BOX_WIDTH: usize = 72;

// ═══════════════════════════════════════════════════════════════════════════
// THEME DETECTION
// ═══════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

static THEME: OnceLock<Theme> = OnceLock::new();

fn detect_theme() -> Theme {
    if let Ok(theme) = std::env::var("SIFT_THEME") {
        match theme.to_lowercase().as_str() {
            "light" | "l" => return Theme::Light,
            "dark" | "d" => return Theme::Dark,
            _ => {}
        }
    }

    // "fg;bg", background 7 and up (except 8) is light
    if let Ok(colorfgbg) = std::env::var("COLORFGBG") {
        let background = colorfgbg.rsplit(';').next().and_then(|bg| bg.parse::<u8>().ok());
        if matches!(background, Some(bg) if bg >= 7 && bg != 8) {
            return Theme::Light;
        }
    }

    Theme::Dark
}

pub fn theme() -> Theme {
    *THEME.get_or_init(detect_theme)
}

// ═══════════════════════════════════════════════════════════════════════════
// PALETTES (True Color)
// ═══════════════════════════════════════════════════════════════════════════

fn rgb((r, g, b): (u8, u8, u8)) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";

mod onedark {
    pub const RED: (u8, u8, u8) = (224, 108, 117);
    pub const GREEN: (u8, u8, u8) = (152, 195, 121);
    pub const YELLOW: (u8, u8, u8) = (229, 192, 123);
    pub const BLUE: (u8, u8, u8) = (97, 175, 239);
    pub const MAGENTA: (u8, u8, u8) = (198, 120, 221);
    pub const CYAN: (u8, u8, u8) = (86, 182, 194);
    pub const GRAY: (u8, u8, u8) = (92, 99, 112);
}

mod onelight {
    pub const RED: (u8, u8, u8) = (228, 86, 73);
    pub const GREEN: (u8, u8, u8) = (80, 161, 79);
    pub const YELLOW: (u8, u8, u8) = (193, 132, 1);
    pub const BLUE: (u8, u8, u8) = (64, 120, 242);
    pub const MAGENTA: (u8, u8, u8) = (166, 38, 164);
    pub const CYAN: (u8, u8, u8) = (1, 132, 188);
    pub const GRAY: (u8, u8, u8) = (160, 161, 167);
}

macro_rules! theme_color {
    ($name:ident) => {
        #[allow(non_snake_case)]
        pub fn $name() -> String {
            rgb(match theme() {
                Theme::Dark => onedark::$name,
                Theme::Light => onelight::$name,
            })
        }
    };
}

theme_color!(RED);
theme_color!(GREEN);
theme_color!(YELLOW);
theme_color!(BLUE);
theme_color!(MAGENTA);
theme_color!(CYAN);
theme_color!(GRAY);

// ═══════════════════════════════════════════════════════════════════════════
// CORE UTILITIES
// ═══════════════════════════════════════════════════════════════════════════

pub fn use_colors() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Apply theme color with optional modifiers, or nothing off a TTY.
pub fn themed(color_fn: fn() -> String, modifiers: &[&str], text: &str) -> String {
    if use_colors() {
        format!("{}{}{}{}", modifiers.join(""), color_fn(), text, RESET)
    } else {
        text.to_string()
    }
}

/// Visible length, excluding ANSI codes.
pub fn visible_len(s: &str) -> usize {
    let mut in_escape = false;
    let mut len = 0;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape && c == 'm' {
            in_escape = false;
        } else if !in_escape {
            len += 1;
        }
    }
    len
}

/// Cut `text` to `max` visible chars, ending with an ellipsis when cut.
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let kept: String = text.chars().take(max.saturating_sub(1)).collect();
    format!("{}…", kept)
}

// ═══════════════════════════════════════════════════════════════════════════
// BOX DRAWING
// ═══════════════════════════════════════════════════════════════════════════

/// │ content          │
pub fn row(content: &str) {
    let border = GRAY();
    let pad = BOX_WIDTH.saturating_sub(visible_len(content));
    println!(
        "{}│{}{}{}{}│{}",
        border,
        RESET,
        content,
        " ".repeat(pad),
        border,
        RESET
    );
}

/// ┌─ LABEL ──────────┐
pub fn section_top(label: &str) {
    let border = GRAY();
    let label_part = format!("─ {} ", themed(CYAN, &[BOLD], label));
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    println!(
        "{}┌{}{}{}{}┐{}",
        border,
        RESET,
        label_part,
        border,
        "─".repeat(remaining),
        RESET
    );
}

/// ├─ LABEL ──────────┤
pub fn section_mid(label: &str) {
    let border = GRAY();
    let label_part = format!("─ {} ", themed(CYAN, &[BOLD], label));
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    println!(
        "{}├{}{}{}{}┤{}",
        border,
        RESET,
        label_part,
        border,
        "─".repeat(remaining),
        RESET
    );
}

/// └──────────────────┘
pub fn section_bot() {
    println!("{}└{}┘{}", GRAY(), "─".repeat(BOX_WIDTH), RESET);
}

// ═══════════════════════════════════════════════════════════════════════════
// SEMANTIC FORMATTERS
// ═══════════════════════════════════════════════════════════════════════════

/// Color-coded kind badge.
pub fn kind_badge(kind: EntityKind) -> String {
    let label = match kind {
        EntityKind::Post => "POST",
        EntityKind::User => "USER",
    };
    let color = match kind {
        EntityKind::Post => BLUE,
        EntityKind::User => MAGENTA,
    };
    themed(color, &[], &format!("[{}]", label))
}

/// Two-letter avatar stand-in.
pub fn avatar(user: &UserHit) -> String {
    themed(YELLOW, &[BOLD], &format!("({:<2})", user.initials()))
}

fn post_rows(post: &PostHit, href: &str) {
    row(&format!(
        " {} {}",
        kind_badge(EntityKind::Post),
        themed(GREEN, &[BOLD], &truncate(&post.title, BOX_WIDTH - 10))
    ));
    if !post.excerpt.is_empty() {
        row(&format!(
            "        {}",
            themed(GRAY, &[], &truncate(&post.excerpt, BOX_WIDTH - 10))
        ));
    }
    row(&format!("        {}", themed(CYAN, &[DIM], href)));
}

fn user_rows(user: &UserHit, href: &str) {
    let handle = user
        .username
        .as_deref()
        .filter(|name| *name != user.label())
        .map(|name| format!(" @{}", name))
        .unwrap_or_default();
    row(&format!(
        " {} {} {}{}",
        kind_badge(EntityKind::User),
        avatar(user),
        themed(GREEN, &[BOLD], user.label()),
        themed(GRAY, &[], &handle)
    ));
    row(&format!("        {}", themed(CYAN, &[DIM], href)));
}

/// One result, two or three rows.
pub fn entity_rows(entity: &SearchableEntity) {
    let href = entity.href();
    match entity {
        SearchableEntity::Post(post) => post_rows(post, &href),
        SearchableEntity::User(user) => user_rows(user, &href),
    }
}

fn section(kind: EntityKind, session: &SearchSession) -> String {
    let status = session.status(kind);
    let title = match kind {
        EntityKind::Post => "POSTS",
        EntityKind::User => "PEOPLE",
    };
    let more = if status.exhausted { "" } else { ", more available" };
    format!("{} ({}{})", title, status.count, more)
}

/// The whole results area for a session.
pub fn print_session(session: &SearchSession) {
    section_top(&format!("SEARCH \"{}\" → {}", session.term(), session.key()));
    if session.is_empty() {
        row(&format!(" {}", themed(GRAY, &[], "No results")));
        section_bot();
        return;
    }

    for kind in EntityKind::ALL {
        section_mid(&section(kind, session));
        let items: Vec<&SearchableEntity> =
            session.results().filter(|entity| entity.kind() == kind).collect();
        if items.is_empty() {
            row(&format!(" {}", themed(GRAY, &[], "none")));
        }
        for entity in items {
            entity_rows(entity);
        }
    }

    let footer = if session.has_more() {
        themed(YELLOW, &[], "Load more with --pages N or --all")
    } else {
        themed(GRAY, &[], "End of results")
    };
    section_mid("STATUS");
    if let Some(error) = session.error() {
        row(&format!(" {}", themed(RED, &[BOLD], &truncate(&error.to_string(), BOX_WIDTH - 2))));
    }
    row(&format!(" {}", footer));
    section_bot();
}

/// Every match of a term, as collected by `--all`.
pub fn print_collected(term: &str, entities: &[SearchableEntity]) {
    section_top(&format!("ALL MATCHES FOR \"{}\"", term));
    if entities.is_empty() {
        row(&format!(" {}", themed(GRAY, &[], "No results")));
    }
    for kind in EntityKind::ALL {
        let items: Vec<&SearchableEntity> =
            entities.iter().filter(|entity| entity.kind() == kind).collect();
        if items.is_empty() {
            continue;
        }
        let title = match kind {
            EntityKind::Post => "POSTS",
            EntityKind::User => "PEOPLE",
        };
        section_mid(&format!("{} ({})", title, items.len()));
        for entity in items {
            entity_rows(entity);
        }
    }
    section_bot();
}

/// Verification summary followed by one row per drifted record.
pub fn print_report(report: &VerificationReport) {
    section_top("VERIFY");
    let summary = report.to_string();
    let summary = if report.is_clean() {
        themed(GREEN, &[BOLD], &summary)
    } else {
        themed(RED, &[BOLD], &summary)
    };
    row(&format!(" {}", summary));
    if !report.is_clean() {
        section_mid("DRIFT");
        for drift in &report.drifts {
            row(&drift_row(drift));
        }
    }
    section_bot();
}

fn drift_row(drift: &KeyDrift) -> String {
    let stored = drift.stored.as_deref().unwrap_or("<missing>");
    format!(
        " {} {}: {} → {}",
        kind_badge(drift.kind),
        truncate(&drift.id, 16),
        themed(RED, &[], &truncate(stored, 20)),
        themed(GREEN, &[], &truncate(&drift.expected, 20))
    )
}

/// Color-coded timing value in ms.
pub fn timing_ms(value: f64) -> String {
    let color = if value < 5.0 {
        GREEN
    } else if value < 20.0 {
        YELLOW
    } else {
        RED
    };
    themed(color, &[], &format!("{:.3} ms", value))
}
