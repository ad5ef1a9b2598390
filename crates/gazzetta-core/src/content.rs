//! Event-driven content generation.
//!
//! Given an event category and a small configuration record, produce a full
//! replacement set of named articles, a masthead name, an index summary and
//! (for some events) one pre-populated extra spread. The output is a pure
//! function of its inputs; only freshly minted block ids differ run-to-run.

use crate::block::{BlockKind, ContentBlock};
use crate::document::{Article, Articles, ExtraSpread, NewspaperDocument};
use serde::{Deserialize, Serialize};

/// Event categories an edition can be generated for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    #[default]
    Birthday,
    Wedding,
    Anniversary,
    Graduation,
    Retirement,
}

/// Gender of the honoree, used only to pick pronouns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    F,
    M,
}

/// Configuration for content generation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventConfig {
    pub hero_name1: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hero_name2: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    /// Event or birth date as `YYYY-MM-DD`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wishes_from: Option<String>,
}

/// The full replacement set a generation run produces.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedContent {
    pub articles: Articles,
    pub pub_name: String,
    pub index: Vec<String>,
    pub extra_spreads: Vec<ExtraSpread>,
}

impl GeneratedContent {
    /// Splice the replacement set into a document.
    pub fn apply(&self, doc: &mut NewspaperDocument) {
        doc.articles = self.articles.clone();
        doc.pub_name = self.pub_name.clone();
        doc.index = self.index.clone();
        doc.extra_spreads = self.extra_spreads.clone();
    }
}

/// Age derived from a `YYYY-MM-DD` date string. A missing or unparseable
/// date yields 0 rather than an error; negative ages clamp to 0.
pub fn age_from_date(date: Option<&str>, current_year: i32) -> i32 {
    let year = date
        .map(str::trim)
        .and_then(|d| d.get(..4))
        .and_then(|y| y.parse::<i32>().ok());
    match year {
        Some(y) => (current_year - y).max(0),
        None => 0,
    }
}

fn pronouns(gender: Option<Gender>) -> (&'static str, &'static str) {
    match gender {
        Some(Gender::F) => ("she", "her"),
        Some(Gender::M) => ("he", "his"),
        None => ("they", "their"),
    }
}

fn title_case(name: &str) -> String {
    let trimmed = name.trim();
    let mut chars = trimmed.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Generate a full edition for the given event.
pub fn generate(event: EventKind, config: &EventConfig, current_year: i32) -> GeneratedContent {
    match event {
        EventKind::Birthday => generate_birthday(config, current_year),
        EventKind::Wedding => generate_wedding(config),
        EventKind::Anniversary => generate_anniversary(config, current_year),
        EventKind::Graduation => generate_graduation(config),
        EventKind::Retirement => generate_retirement(config),
    }
}

fn generate_birthday(config: &EventConfig, current_year: i32) -> GeneratedContent {
    let name = title_case(&config.hero_name1);
    let upper = name.to_uppercase();
    let age = age_from_date(config.date.as_deref(), current_year);
    let birth_year = current_year - age;
    let (subject, possessive) = pronouns(config.gender);

    let mut sidebar_body = format!(
        "{age} candles and counting. Sources close to {name} report that \
         {subject} will blow them all out in one breath."
    );
    if let Some(from) = config.wishes_from.as_deref() {
        sidebar_body.push_str(&format!(" Warm wishes arrive from {from}."));
    }

    let articles = Articles {
        lead: Article::new(
            format!("{upper} TURNS {age}!"),
            format!(
                "The whole town celebrates today as {name} reaches the \
                 remarkable age of {age}. Friends and family agree that \
                 {possessive} best years are still ahead."
            ),
        ),
        sidebar: Article::new("Party bulletin", sidebar_body),
        back_main: Article::new(
            format!("The year {birth_year} in review"),
            format!(
                "Our archive desk looks back at {birth_year}, the year it \
                 all began for {name}. Historians remain divided on whether \
                 the world was ready."
            ),
        ),
        weather: Article::new(
            "Today's forecast",
            "Scattered showers of confetti throughout the day, clearing up \
             for cake in the late afternoon."
                .to_string(),
        ),
        comic: Article::new(
            "Comic corner",
            format!("Why did {name} refuse to count the candles? Classified."),
        ),
    };

    let mut spread = ExtraSpread::following(0);
    spread
        .left_blocks
        .push(ContentBlock::with_content(
            BlockKind::Headline,
            format!("The big {name} quiz"),
        ));
    spread.left_blocks.push(ContentBlock::with_content(
        BlockKind::Paragraph,
        format!(
            "1. In which year was {name} born?\n\
             2. What is {possessive} favourite dish?\n\
             3. Which song gets {name} on the dance floor every single time?"
        ),
    ));
    spread.right_blocks.push(ContentBlock::with_content(
        BlockKind::Headline,
        "Trivia & puzzles".to_string(),
    ));
    spread.right_blocks.push(ContentBlock::with_content(
        BlockKind::Paragraph,
        format!(
            "Did you know? People born in {birth_year} share their birth \
             year with exactly one {name}. Solve the crossword below to \
             find out what makes this edition special."
        ),
    ));
    spread
        .right_blocks
        .push(ContentBlock::with_content(BlockKind::Image, ""));

    GeneratedContent {
        pub_name: format!("The {name} Gazette"),
        index: vec![
            format!("{upper} TURNS {age}! — page 1"),
            format!("The year {birth_year} in review — back page"),
            "Quiz, trivia & puzzles — centre spread".to_string(),
        ],
        articles,
        extra_spreads: vec![spread],
    }
}

fn generate_wedding(config: &EventConfig) -> GeneratedContent {
    let first = title_case(&config.hero_name1);
    let second = config
        .hero_name2
        .as_deref()
        .map(title_case)
        .unwrap_or_else(|| "their beloved".to_string());
    let date_line = config
        .date
        .as_deref()
        .map(|d| format!(" The ceremony is set for {d}."))
        .unwrap_or_default();

    let articles = Articles {
        lead: Article::new(
            format!("{} & {} SAY YES!", first.to_uppercase(), second.to_uppercase()),
            format!(
                "In the society event of the season, {first} and {second} \
                 have tied the knot.{date_line} Witnesses describe the \
                 couple as insufferably happy."
            ),
        ),
        sidebar: Article::new(
            "Guest whispers",
            format!("Overheard at the reception: nobody cries at weddings like {first}'s family."),
        ),
        back_main: Article::new(
            "How they met",
            format!(
                "The full story of {first} and {second}, from first glance \
                 to first dance, as told by unreliable but enthusiastic \
                 witnesses."
            ),
        ),
        weather: Article::new(
            "Today's forecast",
            "Rice showers expected outside the venue, followed by a long \
             warm front lasting several decades."
                .to_string(),
        ),
        comic: Article::new(
            "Comic corner",
            format!("{second} reportedly said yes before the question was finished."),
        ),
    };

    GeneratedContent {
        pub_name: format!("The {first} & {second} Herald"),
        index: vec![
            "The wedding of the year — page 1".to_string(),
            "How they met — back page".to_string(),
        ],
        articles,
        extra_spreads: Vec::new(),
    }
}

fn generate_anniversary(config: &EventConfig, current_year: i32) -> GeneratedContent {
    let first = title_case(&config.hero_name1);
    let second = config
        .hero_name2
        .as_deref()
        .map(title_case)
        .unwrap_or_else(|| "their better half".to_string());
    let years = age_from_date(config.date.as_deref(), current_year);

    let articles = Articles {
        lead: Article::new(
            format!("{} YEARS TOGETHER", years),
            format!(
                "{first} and {second} celebrate {years} years of marriage \
                 today, a record the rest of us can only applaud."
            ),
        ),
        sidebar: Article::new(
            "By the numbers",
            format!("{years} anniversaries, thousands of shared dinners, one enduring story."),
        ),
        back_main: Article::new(
            "The album",
            format!("Selected snapshots from {years} years of {first} and {second}."),
        ),
        weather: Article::new(
            "Today's forecast",
            "Golden skies with a high chance of toasts.".to_string(),
        ),
        comic: Article::new(
            "Comic corner",
            format!("{first} still claims to remember every anniversary. {second} keeps score."),
        ),
    };

    GeneratedContent {
        pub_name: format!("The {first} & {second} Chronicle"),
        index: vec![format!("{years} years together — page 1")],
        articles,
        extra_spreads: Vec::new(),
    }
}

fn generate_graduation(config: &EventConfig) -> GeneratedContent {
    let name = title_case(&config.hero_name1);
    let (subject, possessive) = pronouns(config.gender);

    let articles = Articles {
        lead: Article::new(
            format!("{} GRADUATES!", name.to_uppercase()),
            format!(
                "After years of heroic studying, {name} has earned \
                 {possessive} diploma. Asked for comment, {subject} simply \
                 threw a cap in the air."
            ),
        ),
        sidebar: Article::new(
            "Campus notes",
            format!("The library reports a sudden, dramatic drop in coffee consumption since {name} left."),
        ),
        back_main: Article::new(
            "What's next",
            format!("Experts speculate wildly about {name}'s brilliant future. All agree it starts now."),
        ),
        weather: Article::new(
            "Today's forecast",
            "A rain of mortarboards, then clear skies ahead.".to_string(),
        ),
        comic: Article::new(
            "Comic corner",
            format!("{name}'s thesis, summarized in one panel: it depends."),
        ),
    };

    GeneratedContent {
        pub_name: format!("The {name} Tribune"),
        index: vec![format!("{} graduates — page 1", name)],
        articles,
        extra_spreads: Vec::new(),
    }
}

fn generate_retirement(config: &EventConfig) -> GeneratedContent {
    let name = title_case(&config.hero_name1);
    let (subject, possessive) = pronouns(config.gender);

    let articles = Articles {
        lead: Article::new(
            format!("{} CLOCKS OUT FOR GOOD", name.to_uppercase()),
            format!(
                "{name} has officially retired. Colleagues confirm that \
                 {subject} left the office plant in capable hands and \
                 {possessive} desk suspiciously tidy."
            ),
        ),
        sidebar: Article::new(
            "Office bulletin",
            format!("The Monday meeting will never recover from {name}'s absence."),
        ),
        back_main: Article::new(
            "A career in headlines",
            format!("The highlights of {name}'s working life, as remembered by the break room."),
        ),
        weather: Article::new(
            "Today's forecast",
            "Permanent weekend, with extended periods of hammock.".to_string(),
        ),
        comic: Article::new(
            "Comic corner",
            format!("{name}'s out-of-office reply is now a permanent installation."),
        ),
    };

    GeneratedContent {
        pub_name: format!("The {name} Evening Post"),
        index: vec![format!("{} clocks out — page 1", name)],
        articles,
        extra_spreads: Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn maria() -> EventConfig {
        EventConfig {
            hero_name1: "Maria".to_string(),
            gender: Some(Gender::F),
            date: Some("1990-05-01".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_birthday_headline_has_name_and_age() {
        let content = generate(EventKind::Birthday, &maria(), 2024);
        assert!(content.articles.lead.title.contains("MARIA"));
        assert!(content.articles.lead.title.contains("34"));
    }

    #[test]
    fn test_age_from_valid_date() {
        assert_eq!(age_from_date(Some("1990-05-01"), 2024), 34);
    }

    #[test]
    fn test_age_defaults_to_zero() {
        assert_eq!(age_from_date(None, 2024), 0);
        assert_eq!(age_from_date(Some(""), 2024), 0);
        assert_eq!(age_from_date(Some("not-a-date"), 2024), 0);
        // A multibyte character straddling the year boundary.
        assert_eq!(age_from_date(Some("198⑤-05-01"), 2024), 0);
        // A date in the future never yields a negative age.
        assert_eq!(age_from_date(Some("2030-01-01"), 2024), 0);
    }

    #[test]
    fn test_generation_is_deterministic() {
        let a = generate(EventKind::Birthday, &maria(), 2024);
        let b = generate(EventKind::Birthday, &maria(), 2024);

        assert_eq!(a.articles, b.articles);
        assert_eq!(a.pub_name, b.pub_name);
        assert_eq!(a.index, b.index);
        // Spread structure matches; only freshly minted block ids differ.
        assert_eq!(a.extra_spreads.len(), b.extra_spreads.len());
        let (sa, sb) = (&a.extra_spreads[0], &b.extra_spreads[0]);
        assert_eq!(sa.left_blocks.len(), sb.left_blocks.len());
        let texts_a: Vec<_> = sa.left_blocks.iter().map(|blk| &blk.content).collect();
        let texts_b: Vec<_> = sb.left_blocks.iter().map(|blk| &blk.content).collect();
        assert_eq!(texts_a, texts_b);
    }

    #[test]
    fn test_birthday_ships_one_spread() {
        let content = generate(EventKind::Birthday, &maria(), 2024);
        assert_eq!(content.extra_spreads.len(), 1);
        let spread = &content.extra_spreads[0];
        assert_eq!((spread.left_page, spread.right_page), (2, 3));
        assert!(!spread.left_blocks.is_empty());
        assert!(!spread.right_blocks.is_empty());
    }

    #[test]
    fn test_wishes_from_lands_in_sidebar() {
        let mut config = maria();
        config.wishes_from = Some("the whole office".to_string());
        let content = generate(EventKind::Birthday, &config, 2024);
        assert!(content.articles.sidebar.body.contains("the whole office"));
    }

    #[test]
    fn test_wedding_uses_both_names() {
        let config = EventConfig {
            hero_name1: "maria".to_string(),
            hero_name2: Some("luca".to_string()),
            ..Default::default()
        };
        let content = generate(EventKind::Wedding, &config, 2024);
        assert!(content.articles.lead.title.contains("MARIA"));
        assert!(content.articles.lead.title.contains("LUCA"));
        assert!(content.extra_spreads.is_empty());
    }

    #[test]
    fn test_apply_replaces_document_content() {
        let content = generate(EventKind::Birthday, &maria(), 2024);
        let mut doc = NewspaperDocument::default();
        doc.pub_name = "stale".to_string();
        doc.add_spread();
        doc.add_spread();

        content.apply(&mut doc);

        assert_eq!(doc.pub_name, content.pub_name);
        assert_eq!(doc.extra_spreads.len(), 1);
        assert_eq!(doc.articles.lead.title, content.articles.lead.title);
    }

    #[test]
    fn test_neutral_pronouns_without_gender() {
        let config = EventConfig {
            hero_name1: "Alex".to_string(),
            date: Some("2000-01-01".to_string()),
            ..Default::default()
        };
        let content = generate(EventKind::Birthday, &config, 2024);
        assert!(content.articles.lead.body.contains("their"));
    }
}
