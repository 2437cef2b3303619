//! The Vulgate versification.
//!
//! Vulgate book order and Septuagint Psalm numbering, followed by the appendix
//! books. The New Testament ends with Laodiceans.

use super::{catholic2, deutero, german, kjv, nrsv};
use super::CanonBook;

pub(super) const PSALMS: CanonBook = CanonBook::new(
    "Psalms",
    "Ps",
    "Ps",
    &[
        6, 12, 9, 9, 13, 11, 18, 10, 39, 7, 9, 6, 7, 5, 11,
        15, 51, 15, 10, 14, 32, 6, 10, 22, 12, 14, 9, 11, 13, 25,
        11, 22, 23, 28, 13, 40, 23, 14, 18, 14, 12, 5, 27, 18, 12,
        10, 15, 21, 23, 21, 11, 7, 9, 24, 14, 12, 12, 18, 14, 9,
        13, 12, 11, 14, 20, 8, 36, 37, 6, 24, 20, 28, 23, 11, 13,
        21, 72, 13, 20, 17, 8, 19, 13, 14, 17, 7, 19, 53, 17, 16,
        16, 5, 23, 11, 13, 12, 9, 9, 5, 8, 29, 22, 35, 45, 48,
        43, 14, 31, 7, 10, 10, 9, 26, 9, 10, 2, 29, 176, 7, 8,
        9, 4, 8, 5, 6, 5, 6, 8, 8, 3, 18, 3, 3, 21, 26,
        9, 8, 24, 14, 10, 8, 12, 15, 21, 10, 11, 9, 14, 9, 6,
    ],
);

pub(super) const DANIEL: CanonBook = CanonBook::new(
    "Daniel",
    "Dan",
    "Dan",
    &[
        21, 49, 100, 34, 31, 28, 28, 27, 27, 21, 45, 13, 64, 42,
    ],
);

pub(super) const OT: &[CanonBook] = &[
    kjv::GENESIS,
    kjv::EXODUS,
    kjv::LEVITICUS,
    kjv::NUMBERS,
    kjv::DEUTERONOMY,
    kjv::JOSHUA,
    kjv::JUDGES,
    kjv::RUTH,
    kjv::SAMUEL_1,
    kjv::SAMUEL_2,
    kjv::KINGS_1,
    kjv::KINGS_2,
    kjv::CHRONICLES_1,
    kjv::CHRONICLES_2,
    kjv::EZRA,
    kjv::NEHEMIAH,
    deutero::TOBIT_VULGATE,
    deutero::JUDITH_VULGATE,
    catholic2::ESTHER,
    kjv::JOB,
    PSALMS,
    kjv::PROVERBS,
    kjv::ECCLESIASTES,
    kjv::SONG,
    deutero::WISDOM_VULGATE,
    deutero::SIRACH_VULGATE,
    kjv::ISAIAH,
    kjv::JEREMIAH,
    kjv::LAMENTATIONS,
    deutero::BARUCH_VULGATE,
    kjv::EZEKIEL,
    DANIEL,
    kjv::HOSEA,
    kjv::JOEL,
    kjv::AMOS,
    kjv::OBADIAH,
    kjv::JONAH,
    kjv::MICAH,
    kjv::NAHUM,
    kjv::HABAKKUK,
    kjv::ZEPHANIAH,
    kjv::HAGGAI,
    kjv::ZECHARIAH,
    kjv::MALACHI,
    deutero::MACCABEES_1_VULGATE,
    deutero::MACCABEES_2_VULGATE,
    deutero::PRAYER_OF_MANASSES,
    deutero::ESDRAS_1_VULGATE,
    deutero::ESDRAS_2_VULGATE,
    deutero::ADDITIONAL_PSALM,
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
    deutero::LAODICEANS,
];
