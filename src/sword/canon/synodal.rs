//! The Russian Synodal versification.
//!
//! Septuagint Psalm numbering with Psalm 151. The catholic epistles follow Acts.

use super::{deutero, german, kjv, mt, nrsv, vulg};
use super::CanonBook;

pub(super) const JOB: CanonBook = CanonBook::new(
    "Job",
    "Job",
    "Job",
    &[
        22, 13, 26, 21, 27, 30, 21, 22, 35, 22, 20, 25, 28, 22, 35,
        22, 16, 21, 29, 29, 34, 30, 17, 25, 6, 14, 23, 28, 25, 31,
        40, 22, 33, 37, 16, 33, 24, 41, 35, 27, 26, 17,
    ],
);

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
        7,
    ],
);

pub(super) const ROMANS: CanonBook = CanonBook::new(
    "Romans",
    "Rom",
    "Rom",
    &[
        32, 29, 31, 25, 21, 23, 25, 39, 33, 21, 36, 21, 14, 26, 33,
        24,
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
    deutero::PRAYER_OF_MANASSES,
    kjv::EZRA,
    kjv::NEHEMIAH,
    deutero::ESDRAS_1,
    deutero::TOBIT,
    deutero::JUDITH,
    kjv::ESTHER,
    JOB,
    PSALMS,
    kjv::PROVERBS,
    kjv::ECCLESIASTES,
    kjv::SONG,
    deutero::WISDOM,
    deutero::SIRACH,
    kjv::ISAIAH,
    kjv::JEREMIAH,
    kjv::LAMENTATIONS,
    deutero::EPISTLE_OF_JEREMIAH,
    deutero::BARUCH_SYNODAL,
    kjv::EZEKIEL,
    vulg::DANIEL,
    kjv::HOSEA,
    kjv::JOEL,
    kjv::AMOS,
    kjv::OBADIAH,
    mt::JONAH,
    kjv::MICAH,
    kjv::NAHUM,
    kjv::HABAKKUK,
    kjv::ZEPHANIAH,
    kjv::HAGGAI,
    kjv::ZECHARIAH,
    kjv::MALACHI,
    deutero::MACCABEES_1,
    deutero::MACCABEES_2,
    deutero::MACCABEES_3,
    deutero::ESDRAS_2,
];

pub(super) const NT: &[CanonBook] = &[
    kjv::MATTHEW,
    kjv::MARK,
    kjv::LUKE,
    kjv::JOHN,
    german::ACTS,
    kjv::JAMES,
    kjv::PETER_1,
    kjv::PETER_2,
    kjv::JOHN_1,
    kjv::JOHN_2,
    nrsv::JOHN_3,
    kjv::JUDE,
    ROMANS,
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
    kjv::REVELATION,
];
