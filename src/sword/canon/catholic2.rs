//! The Catholic versification with Esther in sixteen chapters.
//!
//! Deuterocanonical books sit in their Catholic positions. Daniel carries the
//! Song of the Three in chapter 3 and Susanna and Bel as chapters 13 and 14.

use super::{deutero, german, kjv, mt, nrsv};
use super::CanonBook;

pub(super) const ESTHER: CanonBook = CanonBook::new(
    "Esther",
    "Esth",
    "Esth",
    &[
        22, 23, 15, 17, 14, 14, 10, 17, 32, 13, 12, 6, 18, 19, 16,
        24,
    ],
);

pub(super) const DANIEL: CanonBook = CanonBook::new(
    "Daniel",
    "Dan",
    "Dan",
    &[
        21, 49, 100, 34, 30, 29, 28, 27, 27, 21, 45, 13, 64, 42,
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
    deutero::TOBIT_CATHOLIC,
    deutero::JUDITH_NRSV,
    ESTHER,
    deutero::MACCABEES_1,
    deutero::MACCABEES_2,
    mt::JOB,
    mt::PSALMS,
    kjv::PROVERBS,
    mt::ECCLESIASTES,
    mt::SONG,
    deutero::WISDOM,
    deutero::SIRACH_NRSV,
    mt::ISAIAH,
    mt::JEREMIAH,
    kjv::LAMENTATIONS,
    deutero::BARUCH_VULGATE,
    mt::EZEKIEL,
    DANIEL,
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
    german::ACTS,
    kjv::ROMANS,
    kjv::CORINTHIANS_1,
    german::CORINTHIANS_2,
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
