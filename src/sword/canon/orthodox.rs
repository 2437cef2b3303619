//! The Greek Orthodox versification.
//!
//! Septuagint order, with IV Maccabees closing the Old Testament.

use super::{deutero, kjv, mt, synodal, vulg};
use super::CanonBook;

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
    deutero::ESDRAS_1,
    kjv::EZRA,
    kjv::NEHEMIAH,
    deutero::TOBIT,
    deutero::JUDITH,
    kjv::ESTHER,
    deutero::MACCABEES_1,
    deutero::MACCABEES_2,
    deutero::MACCABEES_3,
    synodal::PSALMS,
    synodal::JOB,
    kjv::PROVERBS,
    kjv::ECCLESIASTES,
    kjv::SONG,
    deutero::WISDOM,
    deutero::SIRACH,
    kjv::HOSEA,
    kjv::AMOS,
    kjv::MICAH,
    kjv::JOEL,
    kjv::OBADIAH,
    mt::JONAH,
    kjv::NAHUM,
    kjv::HABAKKUK,
    kjv::ZEPHANIAH,
    kjv::HAGGAI,
    kjv::ZECHARIAH,
    kjv::MALACHI,
    kjv::ISAIAH,
    kjv::JEREMIAH,
    deutero::BARUCH_SYNODAL,
    kjv::LAMENTATIONS,
    deutero::EPISTLE_OF_JEREMIAH,
    kjv::EZEKIEL,
    vulg::DANIEL,
    deutero::MACCABEES_4,
];

pub(super) const NT: &[CanonBook] = &[
    kjv::MATTHEW,
    kjv::MARK,
    kjv::LUKE,
    kjv::JOHN,
    kjv::ACTS,
    kjv::ROMANS,
    kjv::CORINTHIANS_1,
    kjv::CORINTHIANS_2,
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
    kjv::JOHN_3,
    kjv::JUDE,
    kjv::REVELATION,
];
