//! # Card Library
//!
//! The eight cards of the hall, compiled in. Read-only for the lifetime of
//! the process; nothing in the crate can mutate a `Card`.

use serde::Serialize;

/// Identifier of a card in the catalog. Ids are positive and unique.
pub type CardId = u32;

/// A single catalog entry.
#[derive(Serialize, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub id: CardId,
    pub name: &'static str,
    pub theme: &'static str,
    /// Display order matters.
    pub keywords: &'static [&'static str],
    pub base_meaning: &'static str,
    pub fixed_visual: &'static str,
    /// The canonical reading text shown on reveal.
    pub fixed_meaning: &'static str,
    pub static_image: &'static str,
}

pub const CARD_COUNT: usize = 8;

static CARD_LIBRARY: [Card; CARD_COUNT] = [
    Card {
        id: 1,
        name: "Morning Star",
        theme: "Career/Leadership",
        keywords: &["Leadership", "New Beginnings", "Purpose"],
        base_meaning: "A signal of professional sovereignty and rising to one's true purpose.",
        fixed_visual: "A radiant, solitary star rising above a misty, dark mountain range at dawn.",
        fixed_meaning: "The Morning Star rises to signal the end of a long night. You are entering a period of professional sovereignty. The fog is lifting, revealing a path of leadership that has been waiting for you. 2026 is not merely about a promotion; it is an ascension to your true purpose.",
        static_image: "https://i.postimg.cc/cLnww0jR/morning-star.jpg",
    },
    Card {
        id: 2,
        name: "Golden Fruit",
        theme: "Wealth/Abundance",
        keywords: &["Harvest", "Reward", "Stability"],
        base_meaning: "The energy of harvest and tangible rewards for past efforts.",
        fixed_visual: "A glowing golden tree or pomegranate hanging from a silver branch.",
        fixed_meaning: "This card embodies the energy of the Harvest. The universe is aligning to repay your past efforts with tangible rewards. Resources will no longer be a struggle, but a tool. You are entering a cycle of material stability where opportunity ripens on the branch, waiting only for your hand.",
        static_image: "https://i.postimg.cc/DfSrnrgL/golden-fruit.jpg",
    },
    Card {
        id: 3,
        name: "Evergreen",
        theme: "Health/Vitality",
        keywords: &["Resilience", "Healing", "Equilibrium"],
        base_meaning: "Deep restorative healing and enduring resilience.",
        fixed_visual: "An ancient pine tree with glowing emerald needles standing strong in a snowy twilight.",
        fixed_meaning: "Like the ancient pine that withstands the winter, your spirit possesses an enduring resilience. The Evergreen speaks of deep, restorative healing. You will find a grounding energy that anchors your physical vessel. It is a time of equilibrium, where your energy reserves are replenished by the earth itself.",
        static_image: "https://i.postimg.cc/Kc1hy8HT/evergreen.jpg",
    },
    Card {
        id: 4,
        name: "Warm Hearth",
        theme: "Family/Belonging",
        keywords: &["Sanctuary", "Protection", "Harmony"],
        base_meaning: "The sacred center of the world and protection of loved ones.",
        fixed_visual: "A stone fireplace with a magical violet and orange fire.",
        fixed_meaning: "The Hearth represents the sacred center of your world. It signifies a protection circle drawn around your loved ones. Old discords will melt away in the warmth of shared understanding. This year, your home becomes a true sanctuary—a place where the chaotic energies of the outside world cannot enter.",
        static_image: "https://i.postimg.cc/0ydLCMz1/warm-hearth.jpg",
    },
    Card {
        id: 5,
        name: "Spring of Muse",
        theme: "Creativity/Insight",
        keywords: &["Inspiration", "Flow", "Brilliance"],
        base_meaning: "Becoming a channel for divine inspiration and fluid brilliance.",
        fixed_visual: "A glowing blue stream of water pouring from a floating silver cup in the sky.",
        fixed_meaning: "You have drawn the card of pure flow. The Muse whispers that you are becoming a channel for divine inspiration. The mental blocks that once held you back are dissolving into fluid brilliance. You will birth ideas that feel larger than yourself, as the waters of intuition rush freely through your mind.",
        static_image: "https://i.postimg.cc/rFK8w9Zt/spring-of-muse-crop.jpg",
    },
    Card {
        id: 6,
        name: "Red Knot",
        theme: "Love/Destiny",
        keywords: &["Karma", "Connection", "Soulmate"],
        base_meaning: "A Karmic contract fulfilled and a destined alignment.",
        fixed_visual: "Two hands reaching towards each other connected by a glowing red thread.",
        fixed_meaning: "The Red Knot symbolizes a Karmic contract being fulfilled. Threads of destiny are tightening, pulling a significant soul closer to your orbit. This is not a fleeting romance but a destined alignment. The connection will feel recognized by your soul, ancient, inevitable, and profoundly safe.",
        static_image: "https://i.postimg.cc/j2tfPFm5/red-knot.jpg",
    },
    Card {
        id: 7,
        name: "Metamorphosis",
        theme: "Growth",
        keywords: &["Change", "Evolution", "Rebirth"],
        base_meaning: "The Great Alchemical Change and emerging fundamentally changed.",
        fixed_visual: "A prismatic butterfly emerging from a cracked golden stone shell.",
        fixed_meaning: "You are in the chrysalis phase no longer. This card signifies the Great Alchemical Change. The trials of the past were merely the fire necessary to forge your wings. You are emerging into 2026 not just improved, but fundamentally changed—lighter, freer, and vibrant with colors you didn't know you possessed.",
        static_image: "https://i.postimg.cc/mgJdx7tS/metamorphosis-crop.jpg",
    },
    Card {
        id: 8,
        name: "Star Guidance",
        theme: "Wishes/Dreams",
        keywords: &["Synchronicity", "Destiny", "Alignment"],
        base_meaning: "The Heavens charting a specific course for you.",
        fixed_visual: "An antique compass floating in the void, pointing towards a bright nebula.",
        fixed_meaning: "The Heavens are charting a course specifically for you. This card serves as a cosmic compass. It indicates that the reality of your desires is vanishing. Synchronicity will become your daily language; follow the signs, for the universe is conspiring to place you exactly where you belong.",
        static_image: "https://i.postimg.cc/xTb5vcsN/star-guidance.jpg",
    },
];

/// All cards, in catalog order.
pub fn all() -> &'static [Card] {
    &CARD_LIBRARY
}

/// Look up a card by id. `None` means the caller asked for an id that was
/// never in the catalog.
pub fn find(id: CardId) -> Option<&'static Card> {
    CARD_LIBRARY.iter().find(|card| card.id == id)
}
