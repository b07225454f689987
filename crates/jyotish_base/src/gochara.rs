//! Gochara (transit) effect tables: house-from-Moon effects, vedha
//! obstructions, argala interventions, and the combined strength rollup.
//!
//! The 9x12 effect table, the vedha house map and the argala house map
//! reproduce the repository's traditional encodings verbatim.

use serde::{Deserialize, Serialize};

use crate::graha::Graha;

/// Base effect of a transit judged from the natal Moon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GocharaEffect {
    Favorable,
    Unfavorable,
    Mixed,
    Neutral,
}

/// Strength bucket after vedha/argala adjustment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GocharaStrength {
    StrongFavorable,
    ModerateFavorable,
    Neutral,
    ModerateUnfavorable,
    StrongUnfavorable,
}

use GocharaEffect::{Favorable as F, Mixed as M, Unfavorable as U};

/// `EFFECTS[graha][house_from_moon - 1]` per the traditional table.
const EFFECTS: [[GocharaEffect; 12]; 9] = [
    // Sun
    [U, U, F, U, F, F, U, U, F, F, F, U],
    // Moon
    [M, F, F, F, F, U, M, U, F, F, F, U],
    // Mars
    [U, U, F, U, M, F, U, U, F, F, F, U],
    // Mercury
    [M, F, F, M, F, F, M, U, F, F, F, U],
    // Jupiter
    [F, F, F, F, F, M, M, M, F, F, F, M],
    // Venus
    [F, F, F, F, F, M, F, M, F, M, F, M],
    // Saturn
    [U, U, F, U, U, F, U, F, U, F, F, U],
    // Rahu
    [U, M, F, U, M, F, U, M, M, M, F, U],
    // Ketu
    [U, U, M, U, U, F, U, F, F, U, M, F],
];

/// Short traditional reading per graha and house-from-Moon.
const READINGS: [[&str; 12]; 9] = [
    [
        "Health issues, ego conflicts",
        "Financial stress, family conflicts",
        "Courage, initiative, success in endeavors",
        "Mental stress, domestic problems",
        "Success, recognition, creativity",
        "Victory over enemies, health improvement",
        "Relationship issues, conflicts",
        "Health concerns, obstacles",
        "Spiritual growth, success in higher education",
        "Career success, recognition",
        "Gains, fulfillment of desires",
        "Expenses, isolation, hidden enemies",
    ],
    [
        "Emotional fluctuations, self-awareness",
        "Financial gains, family harmony",
        "Communication skills, short journeys",
        "Domestic happiness, emotional stability",
        "Creativity, romance, enjoyment",
        "Health issues, conflicts with subordinates",
        "Relationship fluctuations, public interactions",
        "Emotional distress, transformation",
        "Spiritual growth, higher learning",
        "Professional success, public recognition",
        "Social connections, fulfillment of desires",
        "Isolation, subconscious issues, expenses",
    ],
    [
        "Aggression, accidents, conflicts, energy",
        "Financial losses, family conflicts",
        "Courage, initiative, siblings, communication",
        "Domestic conflicts, property issues",
        "Creative energy, competitive sports, romance",
        "Victory over enemies, health improvement",
        "Relationship conflicts, legal disputes",
        "Surgery, accidents, conflicts over shared resources",
        "Religious activities, higher education",
        "Career advancement, leadership, authority",
        "Gains through effort, achievement of goals",
        "Hidden enemies, isolation, self-undoing",
    ],
    [
        "Intellectual activity, communication focus",
        "Financial gains through communication, learning",
        "Enhanced communication, writing, short trips",
        "Intellectual activities at home, family discussions",
        "Creative thinking, intellectual games, teaching",
        "Problem-solving, analytical work, health improvement",
        "Negotiations, contracts, intellectual partnerships",
        "Mental stress, research, investigation",
        "Higher education, publishing, foreign communications",
        "Professional communications, intellectual recognition",
        "Networking, group projects, technological gains",
        "Mental confusion, secret communications, isolation",
    ],
    [
        "Growth, optimism, wisdom, expansion",
        "Financial gains, family prosperity",
        "Positive communication, learning, short journeys",
        "Domestic happiness, property gains",
        "Children, creativity, education, romance",
        "Health improvement, service, debt",
        "Partnerships, legal matters, marriage",
        "Transformation, inheritance, research",
        "Spirituality, higher education, fortune",
        "Career success, recognition, authority",
        "Gains, fulfillment of desires, social connections",
        "Spiritual growth, expenses, isolation",
    ],
    [
        "Enhanced charm, focus on appearance and pleasure",
        "Financial gains, luxury purchases, family harmony",
        "Pleasant communications, artistic expression",
        "Domestic harmony, home beautification",
        "Romance, creativity, entertainment, children",
        "Service to others, health improvement through balance",
        "Relationships, partnerships, marriage, harmony",
        "Shared resources, intimacy, transformation",
        "Travel for pleasure, cultural experiences",
        "Career in arts or luxury, public image",
        "Social enjoyment, friendship, group harmony",
        "Secret relationships, spiritual love, sacrifice",
    ],
    [
        "Health issues, restrictions, delays",
        "Financial restrictions, family responsibilities",
        "Disciplined communication, focused learning",
        "Domestic challenges, property issues",
        "Challenges with children, creative blocks",
        "Health improvement through discipline, service",
        "Relationship challenges, delays in partnerships",
        "Transformation through hardship, research",
        "Obstacles in higher education, travel delays",
        "Career advancement through hard work",
        "Gains through perseverance, lasting friendships",
        "Isolation, hidden enemies, spiritual tests",
    ],
    [
        "Confusion about identity, obsessions",
        "Unusual financial gains or losses, foreign resources",
        "Unconventional communication, foreign connections",
        "Domestic disturbances, property issues",
        "Unusual creative pursuits, unconventional romance",
        "Overcoming enemies, unusual health treatments",
        "Deceptive partnerships, unusual relationships",
        "Occult interests, sudden transformations",
        "Unorthodox beliefs, foreign travel",
        "Unconventional career, sudden recognition",
        "Unusual gains, eccentric friends, technology",
        "Hidden activities, subconscious disturbances",
    ],
    [
        "Identity crisis, spiritual detachment",
        "Financial losses, detachment from possessions",
        "Spiritual communication, psychic abilities",
        "Domestic disturbances, emotional detachment",
        "Challenges with children, detachment from pleasure",
        "Healing abilities, overcoming enemies",
        "Relationship dissolution, spiritual partnerships",
        "Spiritual transformation, psychic abilities",
        "Spiritual wisdom, moksha, liberation",
        "Career setbacks, detachment from status",
        "Spiritual gains, detachment from desires",
        "Spiritual liberation, psychic abilities, isolation",
    ],
];

/// Vedha (obstruction) house per transit house.
pub const VEDHA_HOUSES: [u8; 12] = [7, 12, 11, 10, 9, 8, 1, 6, 5, 4, 3, 2];

/// Argala (intervention) houses per transit house.
pub const ARGALA_HOUSES: [[u8; 3]; 12] = [
    [2, 4, 11],
    [3, 5, 12],
    [4, 6, 1],
    [5, 7, 2],
    [6, 8, 3],
    [7, 9, 4],
    [8, 10, 5],
    [9, 11, 6],
    [10, 12, 7],
    [11, 1, 8],
    [12, 2, 9],
    [1, 3, 10],
];

/// House counted from the natal Moon: sign difference + 1.
pub fn house_from_moon(natal_moon_rashi_idx: u8, transit_rashi_idx: u8) -> u8 {
    ((i16::from(transit_rashi_idx) - i16::from(natal_moon_rashi_idx)).rem_euclid(12) + 1) as u8
}

/// Base effect of a graha transiting the given house from the Moon.
pub fn effect_from_moon(graha: Graha, house: u8) -> GocharaEffect {
    if !(1..=12).contains(&house) {
        return GocharaEffect::Neutral;
    }
    EFFECTS[graha.index() as usize][(house - 1) as usize]
}

/// Traditional reading of the transit.
pub fn reading_from_moon(graha: Graha, house: u8) -> &'static str {
    if !(1..=12).contains(&house) {
        return "";
    }
    READINGS[graha.index() as usize][(house - 1) as usize]
}

/// Vedha house of a transit house.
pub fn vedha_house(house: u8) -> u8 {
    VEDHA_HOUSES[((house - 1) % 12) as usize]
}

/// Argala houses of a transit house.
pub fn argala_houses(house: u8) -> [u8; 3] {
    ARGALA_HOUSES[((house - 1) % 12) as usize]
}

/// Strength rollup: base ±2 for favourable/unfavourable, −1 per vedha
/// occupant, ±0.5 per argala occupant pushing the score away from zero.
pub fn gochara_strength(
    effect: GocharaEffect,
    vedha_count: u8,
    argala_count: u8,
) -> (f64, GocharaStrength) {
    let mut score = match effect {
        GocharaEffect::Favorable => 2.0,
        GocharaEffect::Unfavorable => -2.0,
        GocharaEffect::Mixed | GocharaEffect::Neutral => 0.0,
    };
    score -= f64::from(vedha_count);
    for _ in 0..argala_count {
        if score > 0.0 {
            score += 0.5;
        } else if score < 0.0 {
            score -= 0.5;
        }
    }
    let bucket = if score >= 2.0 {
        GocharaStrength::StrongFavorable
    } else if score > 0.0 {
        GocharaStrength::ModerateFavorable
    } else if score == 0.0 {
        GocharaStrength::Neutral
    } else if score > -2.0 {
        GocharaStrength::ModerateUnfavorable
    } else {
        GocharaStrength::StrongUnfavorable
    };
    (score, bucket)
}
