//! Confession Store
//!
//! The pure in-memory domain core: confession records, the fixed reaction
//! registry, sort criteria and the ordered store they live in. Nothing in
//! this module touches the DOM or a signal, so every operation is testable
//! natively; the UI derives all visible output from one `ConfessionStore`
//! held in a signal.

use std::collections::HashMap;

/// Milliseconds per day, used for the sample seed offsets.
const DAY_MS: i64 = 24 * 60 * 60 * 1000;

/// One reaction kind from the fixed registry.
///
/// The registry is ordered and immutable for the process lifetime; cards
/// render one button per kind in `ALL` order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Reaction {
    Laugh,
    Cry,
    Anger,
    ThumbsUp,
    Heart,
    Surprised,
}

impl Reaction {
    /// Every reaction kind, in display order.
    pub const ALL: [Reaction; 6] = [
        Reaction::Laugh,
        Reaction::Cry,
        Reaction::Anger,
        Reaction::ThumbsUp,
        Reaction::Heart,
        Reaction::Surprised,
    ];

    /// Stable identifier, used in per-reaction element classes.
    pub fn name(self) -> &'static str {
        match self {
            Reaction::Laugh => "laugh",
            Reaction::Cry => "cry",
            Reaction::Anger => "anger",
            Reaction::ThumbsUp => "thumbs_up",
            Reaction::Heart => "heart",
            Reaction::Surprised => "surprised",
        }
    }

    /// Display glyph for the reaction button.
    pub fn emoji(self) -> &'static str {
        match self {
            Reaction::Laugh => "😂",
            Reaction::Cry => "😢",
            Reaction::Anger => "😠",
            Reaction::ThumbsUp => "👍",
            Reaction::Heart => "❤️",
            Reaction::Surprised => "😮",
        }
    }

    /// Human-readable label, shown as the button tooltip.
    pub fn label(self) -> &'static str {
        match self {
            Reaction::Laugh => "Funny",
            Reaction::Cry => "Sad",
            Reaction::Anger => "Angry",
            Reaction::ThumbsUp => "Like",
            Reaction::Heart => "Love",
            Reaction::Surprised => "Wow",
        }
    }
}

/// Sort criterion for the wall.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortOrder {
    /// Most recent first (the default).
    #[default]
    Newest,
    /// Oldest first.
    Oldest,
    /// Highest total reaction count first.
    Popular,
}

impl SortOrder {
    /// The value attribute used by the sort `<select>`.
    pub fn as_str(self) -> &'static str {
        match self {
            SortOrder::Newest => "newest",
            SortOrder::Oldest => "oldest",
            SortOrder::Popular => "popular",
        }
    }

    /// Parse a select value; anything unrecognized falls back to `Newest`.
    pub fn parse(value: &str) -> SortOrder {
        match value {
            "oldest" => SortOrder::Oldest,
            "popular" => SortOrder::Popular,
            _ => SortOrder::Newest,
        }
    }
}

/// One anonymous confession.
#[derive(Clone, Debug, PartialEq)]
pub struct Confession {
    /// The confession text, non-empty after trimming.
    pub text: String,
    /// Creation instant, epoch milliseconds.
    pub created_at: i64,
    /// Reaction tallies; absent kinds count as zero.
    pub reactions: HashMap<Reaction, u32>,
}

impl Confession {
    /// Create a fresh record with no reactions.
    pub fn new(text: impl Into<String>, created_at: i64) -> Self {
        Self {
            text: text.into(),
            created_at,
            reactions: HashMap::new(),
        }
    }

    /// Count for one reaction kind (zero when absent).
    pub fn reaction_count(&self, kind: Reaction) -> u32 {
        self.reactions.get(&kind).copied().unwrap_or(0)
    }

    /// Sum of all reaction counts on this record.
    pub fn total_reactions(&self) -> u32 {
        self.reactions.values().sum()
    }
}

/// Ordered, mutable collection of confessions.
///
/// Store order is display order: only [`ConfessionStore::sort`] reorders,
/// every other mutation keeps positions except the prepend at index 0.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ConfessionStore {
    confessions: Vec<Confession>,
}

impl ConfessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the contents wholesale; used once at startup.
    pub fn seed(&mut self, records: Vec<Confession>) {
        self.confessions = records;
    }

    /// Insert a new confession at the front.
    ///
    /// The stored text is trimmed; empty or whitespace-only input is a
    /// no-op and returns false.
    pub fn prepend(&mut self, text: &str, now_ms: i64) -> bool {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return false;
        }
        self.confessions.insert(0, Confession::new(trimmed, now_ms));
        true
    }

    /// Increment one reaction counter on the record at `index`.
    ///
    /// Out-of-bounds indices are a no-op and return false.
    pub fn react(&mut self, index: usize, kind: Reaction) -> bool {
        match self.confessions.get_mut(index) {
            Some(confession) => {
                *confession.reactions.entry(kind).or_insert(0) += 1;
                true
            }
            None => false,
        }
    }

    /// Reorder in place by the given criterion.
    ///
    /// `sort_by` is stable, so records that compare equal keep their
    /// current relative order.
    pub fn sort(&mut self, order: SortOrder) {
        match order {
            SortOrder::Newest => self
                .confessions
                .sort_by(|a, b| b.created_at.cmp(&a.created_at)),
            SortOrder::Oldest => self
                .confessions
                .sort_by(|a, b| a.created_at.cmp(&b.created_at)),
            SortOrder::Popular => self
                .confessions
                .sort_by(|a, b| b.total_reactions().cmp(&a.total_reactions())),
        }
    }

    /// All records in display order.
    pub fn confessions(&self) -> &[Confession] {
        &self.confessions
    }

    pub fn len(&self) -> usize {
        self.confessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.confessions.is_empty()
    }

    /// Sum of every reaction count across the store.
    pub fn total_reactions(&self) -> u32 {
        self.confessions.iter().map(Confession::total_reactions).sum()
    }
}

/// Relative-age label for a creation instant.
///
/// Mirrors the wall's coarse buckets: days, then hours, then minutes,
/// anything younger than a minute is "Just now".
pub fn time_ago(created_ms: i64, now_ms: i64) -> String {
    let seconds = (now_ms - created_ms) / 1000;
    let minutes = seconds / 60;
    let hours = minutes / 60;
    let days = hours / 24;

    if days > 0 {
        format!("{}d ago", days)
    } else if hours > 0 {
        format!("{}h ago", hours)
    } else if minutes > 0 {
        format!("{}m ago", minutes)
    } else {
        "Just now".to_string()
    }
}

/// The fixed sample set used to seed the wall in local mode.
///
/// Ages are staggered one day apart so the default Newest order matches
/// the listed order.
pub fn sample_confessions(now_ms: i64) -> Vec<Confession> {
    use Reaction::*;

    let sample = |text: &str, days_ago: i64, reactions: &[(Reaction, u32)]| Confession {
        text: text.to_string(),
        created_at: now_ms - days_ago * DAY_MS,
        reactions: reactions.iter().copied().collect(),
    };

    vec![
        sample(
            "I still haven't told my parents I changed my major from engineering to art. \
             They think I'm going to be an engineer 😅 Sometimes I practice telling them in the mirror.",
            1,
            &[(Laugh, 5), (Heart, 3), (ThumbsUp, 2)],
        ),
        sample(
            "I have a huge crush on my lab partner but I'm too shy to say anything. We've been \
             working together for 3 months now and I look forward to those sessions more than anything else.",
            2,
            &[(Heart, 8), (Cry, 2), (Surprised, 1)],
        ),
        sample(
            "I copied my friend's assignment once and got a better grade than them. I still feel \
             guilty about it and want to confess, but I'm scared it might ruin our friendship.",
            3,
            &[(Cry, 4), (ThumbsUp, 1), (Surprised, 2)],
        ),
        sample(
            "I pretend to understand everything in advanced calculus but I'm completely lost. \
             Too embarrassed to ask for help because everyone else seems to get it so easily.",
            4,
            &[(Laugh, 6), (Cry, 8), (ThumbsUp, 4)],
        ),
        sample(
            "I eat lunch alone in the library because I'm too anxious to sit in the cafeteria \
             with other people. But honestly, I've started to enjoy the peaceful solitude.",
            5,
            &[(Heart, 5), (Cry, 3), (ThumbsUp, 7)],
        ),
        sample(
            "My roommate doesn't know that I can hear them singing in the shower every morning. \
             They're actually really good and it's become my favorite way to wake up!",
            6,
            &[(Laugh, 12), (Heart, 6), (Surprised, 2)],
        ),
        sample(
            "I've been lying about having experience with coding languages on my resume. Now I'm \
             panicking about interviews and frantically trying to learn everything overnight.",
            7,
            &[(Laugh, 3), (Cry, 5), (Surprised, 4)],
        ),
        sample(
            "I have a secret TikTok account where I dance and it has more followers than I have \
             friends in real life. It's the only place where I feel truly confident.",
            8,
            &[(Heart, 9), (ThumbsUp, 6), (Surprised, 3)],
        ),
        sample(
            "I still sleep with a stuffed animal and I'm 20 years old. My college friends don't \
             know and I'm terrified they'll find out during sleepovers.",
            9,
            &[(Heart, 11), (Laugh, 2), (ThumbsUp, 5)],
        ),
        sample(
            "I applied to our college as a backup but now I love it here more than my first \
             choice. Sometimes the best things come from unexpected places.",
            10,
            &[(Heart, 15), (ThumbsUp, 8), (Surprised, 1)],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with(records: Vec<Confession>) -> ConfessionStore {
        let mut store = ConfessionStore::new();
        store.seed(records);
        store
    }

    #[test]
    fn test_reaction_registry() {
        assert_eq!(Reaction::ALL.len(), 6);
        let names: Vec<_> = Reaction::ALL.iter().map(|r| r.name()).collect();
        assert_eq!(
            names,
            ["laugh", "cry", "anger", "thumbs_up", "heart", "surprised"]
        );
        assert_eq!(Reaction::Laugh.emoji(), "😂");
        assert_eq!(Reaction::ThumbsUp.label(), "Like");
    }

    #[test]
    fn test_prepend_adds_at_front() {
        let mut store = store_with(vec![Confession::new("first", 1_000)]);
        assert!(store.prepend("  second thoughts  ", 2_000));

        assert_eq!(store.len(), 2);
        assert_eq!(store.confessions()[0].text, "second thoughts");
        assert_eq!(store.confessions()[0].created_at, 2_000);
        assert!(store.confessions()[0].reactions.is_empty());
    }

    #[test]
    fn test_prepend_rejects_blank_input() {
        let mut store = store_with(vec![Confession::new("kept", 1_000)]);

        assert!(!store.prepend("", 2_000));
        assert!(!store.prepend("   ", 2_000));
        assert!(!store.prepend("\n\t ", 2_000));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_react_increments_only_one_counter() {
        let mut store = store_with(vec![
            Confession::new("a", 1_000),
            Confession::new("b", 2_000),
        ]);

        assert!(store.react(1, Reaction::Laugh));
        assert!(store.react(1, Reaction::Laugh));
        assert!(store.react(1, Reaction::Heart));

        let a = &store.confessions()[0];
        let b = &store.confessions()[1];
        assert_eq!(a.total_reactions(), 0);
        assert_eq!(b.reaction_count(Reaction::Laugh), 2);
        assert_eq!(b.reaction_count(Reaction::Heart), 1);
        assert_eq!(b.reaction_count(Reaction::Cry), 0);
    }

    #[test]
    fn test_react_out_of_bounds_is_noop() {
        let mut store = store_with(vec![Confession::new("only", 1_000)]);

        assert!(!store.react(1, Reaction::Heart));
        assert!(!store.react(usize::MAX, Reaction::Heart));
        assert_eq!(store.total_reactions(), 0);
    }

    #[test]
    fn test_sort_by_age() {
        let mut store = store_with(vec![
            Confession::new("mid", 2_000),
            Confession::new("old", 1_000),
            Confession::new("new", 3_000),
        ]);

        store.sort(SortOrder::Newest);
        let texts: Vec<_> = store.confessions().iter().map(|c| c.text.as_str()).collect();
        assert_eq!(texts, ["new", "mid", "old"]);

        store.sort(SortOrder::Oldest);
        let texts: Vec<_> = store.confessions().iter().map(|c| c.text.as_str()).collect();
        assert_eq!(texts, ["old", "mid", "new"]);
    }

    #[test]
    fn test_sort_popular_is_stable() {
        let mut store = store_with(vec![
            Confession::new("tie-a", 1_000),
            Confession::new("big", 2_000),
            Confession::new("tie-b", 3_000),
        ]);
        store.react(0, Reaction::Heart);
        store.react(1, Reaction::Laugh);
        store.react(1, Reaction::Laugh);
        store.react(2, Reaction::Cry);

        store.sort(SortOrder::Popular);

        let texts: Vec<_> = store.confessions().iter().map(|c| c.text.as_str()).collect();
        // "big" leads; the two one-reaction records keep their prior order.
        assert_eq!(texts, ["big", "tie-a", "tie-b"]);
    }

    #[test]
    fn test_total_reactions_matches_applied_increments() {
        let mut store = store_with(vec![
            Confession::new("a", 1_000),
            Confession::new("b", 2_000),
            Confession::new("c", 3_000),
        ]);

        let applied = [
            (0, Reaction::Heart),
            (2, Reaction::Laugh),
            (1, Reaction::Cry),
            (0, Reaction::Heart),
            (2, Reaction::Surprised),
        ];
        for (index, kind) in applied {
            store.react(index, kind);
        }

        assert_eq!(store.total_reactions(), applied.len() as u32);
    }

    #[test]
    fn test_three_hearts_scenario() {
        let mut store = store_with(vec![
            Confession::new("a", 1_000),
            Confession::new("b", 2_000),
        ]);

        for _ in 0..3 {
            store.react(0, Reaction::Heart);
        }

        assert_eq!(store.total_reactions(), 3);
        assert_eq!(store.confessions()[0].reaction_count(Reaction::Heart), 3);
        assert_eq!(store.confessions()[1].total_reactions(), 0);
    }

    #[test]
    fn test_sample_seed_is_newest_first() {
        let now = 1_700_000_000_000;
        let samples = sample_confessions(now);

        assert_eq!(samples.len(), 10);
        assert!(samples.windows(2).all(|w| w[0].created_at > w[1].created_at));
        assert!(samples.iter().all(|c| !c.text.trim().is_empty()));
        assert!(samples.iter().all(|c| c.total_reactions() > 0));
    }

    #[test]
    fn test_time_ago_buckets() {
        let now = 1_700_000_000_000;

        assert_eq!(time_ago(now, now), "Just now");
        assert_eq!(time_ago(now - 59 * 1000, now), "Just now");
        assert_eq!(time_ago(now - 60 * 1000, now), "1m ago");
        assert_eq!(time_ago(now - 59 * 60 * 1000, now), "59m ago");
        assert_eq!(time_ago(now - 60 * 60 * 1000, now), "1h ago");
        assert_eq!(time_ago(now - 23 * 60 * 60 * 1000, now), "23h ago");
        assert_eq!(time_ago(now - DAY_MS, now), "1d ago");
        assert_eq!(time_ago(now - 3 * DAY_MS, now), "3d ago");
        // A clock skewed into the future still reads as fresh.
        assert_eq!(time_ago(now + 5_000, now), "Just now");
    }

    #[test]
    fn test_sort_order_strings() {
        for order in [SortOrder::Newest, SortOrder::Oldest, SortOrder::Popular] {
            assert_eq!(SortOrder::parse(order.as_str()), order);
        }
        assert_eq!(SortOrder::parse("garbage"), SortOrder::Newest);
        assert_eq!(SortOrder::default(), SortOrder::Newest);
    }
}
