//! The Luther versification.
//!
//! German numbering with the Luther apocrypha after Malachi. Hebrews, James
//! and Jude close the New Testament epistles.

use super::{deutero, german, kjv, mt, nrsv};
use super::CanonBook;

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
    deutero::JUDITH_VULGATE,
    deutero::WISDOM,
    deutero::TOBIT_VULGATE,
    deutero::SIRACH_NRSV,
    deutero::BARUCH_VULGATE,
    deutero::MACCABEES_1_VULGATE,
    deutero::MACCABEES_2_VULGATE,
    deutero::ADDITIONS_TO_ESTHER_LUTHER,
    deutero::ADDITIONS_TO_DANIEL,
    deutero::PRAYER_OF_MANASSES,
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
    kjv::PETER_1,
    kjv::PETER_2,
    kjv::JOHN_1,
    kjv::JOHN_2,
    nrsv::JOHN_3,
    kjv::HEBREWS,
    kjv::JAMES,
    kjv::JUDE,
    nrsv::REVELATION,
];
