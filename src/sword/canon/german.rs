//! The German versification.
//!
//! Masoretic numbering for the Old Testament in KJV book order. The New
//! Testament follows the NRSV counts, with Acts 19 ending at 40 and
//! 2 Corinthians 13 at 13.

use super::{kjv, mt, nrsv};
use super::CanonBook;

pub(super) const ACTS: CanonBook = CanonBook::new(
    "Acts",
    "Acts",
    "Acts",
    &[
        26, 47, 26, 37, 42, 15, 60, 40, 43, 48, 30, 25, 52, 28, 41,
        40, 34, 28, 40, 38, 40, 30, 35, 27, 27, 32, 44, 31,
    ],
);

pub(super) const CORINTHIANS_2: CanonBook = CanonBook::new(
    "II Corinthians",
    "2Cor",
    "2Cor",
    &[
        24, 17, 18, 18, 21, 18, 16, 24, 15, 18, 33, 21, 13,
    ],
);

pub(super) const OT: &[CanonBook] = &[
    mt::GENESIS,
    mt::EXODUS,
    mt::LEVITICUS,
    mt::NUMBERS,
    mt::DEUTERONOMY,
    kjv::JOSHUA,
    kjv::JUDGES,
    kjv::RUTH,
    mt::SAMUEL_1,
    mt::SAMUEL_2,
    mt::KINGS_1,
    mt::KINGS_2,
    mt::CHRONICLES_1,
    mt::CHRONICLES_2,
    kjv::EZRA,
    mt::NEHEMIAH,
    kjv::ESTHER,
    mt::JOB,
    mt::PSALMS,
    kjv::PROVERBS,
    mt::ECCLESIASTES,
    mt::SONG,
    mt::ISAIAH,
    mt::JEREMIAH,
    kjv::LAMENTATIONS,
    mt::EZEKIEL,
    mt::DANIEL,
    mt::HOSEA,
    mt::JOEL,
    kjv::AMOS,
    kjv::OBADIAH,
    mt::JONAH,
    mt::MICAH,
    mt::NAHUM,
    kjv::HABAKKUK,
    kjv::ZEPHANIAH,
    kjv::HAGGAI,
    mt::ZECHARIAH,
    mt::MALACHI,
];

pub(super) const NT: &[CanonBook] = &[
    kjv::MATTHEW,
    kjv::MARK,
    kjv::LUKE,
    kjv::JOHN,
    ACTS,
    kjv::ROMANS,
    kjv::CORINTHIANS_1,
    CORINTHIANS_2,
    kjv::GALATIANS,
    kjv::EPHESIANS,
    kjv::PHILIPPIANS,
    kjv::COLOSSIANS,
    kjv::THESSALONIANS_1,
    kjv::THESSALONIANS_2,
    kjv::TIMOTHY_1,
    kjv::TIMOTHY_2,
    kjv::TITUS,
    kjv::PHILEMON,
    kjv::HEBREWS,
    kjv::JAMES,
    kjv::PETER_1,
    kjv::PETER_2,
    kjv::JOHN_1,
    kjv::JOHN_2,
    nrsv::JOHN_3,
    kjv::JUDE,
    nrsv::REVELATION,
];
